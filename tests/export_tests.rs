use std::fs;

mod common;
use common::{base_args, fixture_dir, temp_out, vi};

#[test]
fn export_regions_csv() {
    let data = fixture_dir("export_regions_csv");
    let out = temp_out("export_regions_csv", "csv");

    vi()
        .args(base_args(&data))
        .args(["export", "--report", "regions", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("region_path,tickets_sold,checkins,cancellations,net_revenue,rev_per_attendee")
    );
    assert!(content.contains("NYC > Manhattan > SoHo,1,0,0,500.00,"));
    assert!(content.contains("NYC > Manhattan > Chelsea,3,2,1,90.00,45.00"));
}

#[test]
fn export_summary_json_for_range() {
    let data = fixture_dir("export_summary_json");
    let out = temp_out("export_summary_json", "json");

    vi()
        .args(base_args(&data))
        .args([
            "export", "--report", "summary", "--format", "json", "--file", &out, "--range",
            "2025-03-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let row = &value[0];
    assert_eq!(row["tickets_sold"], 3);
    assert_eq!(row["checkins"], 2);
    assert_eq!(row["net_revenue"].as_f64(), Some(90.0));
}

#[test]
fn export_trend_json_keeps_dates() {
    let data = fixture_dir("export_trend_json");
    let out = temp_out("export_trend_json", "json");

    vi()
        .args(base_args(&data))
        .args(["export", "--report", "trend", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-03-01"));
    assert!(content.contains("2025-03-10"));
}

#[test]
fn export_empty_report_writes_headers() {
    let data = fixture_dir("export_empty");
    let out = temp_out("export_empty", "csv");

    vi()
        .args(base_args(&data))
        .args([
            "export", "--report", "sponsors", "--format", "csv", "--file", &out, "--range", "2020",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(
        content.trim(),
        "label,is_sponsored,events,avg_event_revenue,avg_checkin_rate"
    );
}

#[test]
fn export_xlsx_and_pdf_are_written() {
    let data = fixture_dir("export_binary");

    for (report, ext) in [("events", "xlsx"), ("peaks", "pdf")] {
        let out = temp_out(&format!("export_binary_{report}"), ext);
        vi()
            .args(base_args(&data))
            .args(["export", "--report", report, "--format", ext, "--file", &out])
            .assert()
            .success();

        let bytes = fs::read(&out).expect("read exported file");
        assert!(!bytes.is_empty());
        if ext == "pdf" {
            assert!(bytes.starts_with(b"%PDF"));
        } else {
            assert!(bytes.starts_with(b"PK"));
        }
    }
}

#[test]
fn export_force_overwrites() {
    let data = fixture_dir("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    vi()
        .args(base_args(&data))
        .args(["export", "--report", "events", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("event_id,event_name"));
    assert!(content.contains("E1,Jazz Night,V1,Blue Room,NYC,Manhattan,Chelsea,3,2,0.67"));
}

#[test]
fn export_requires_absolute_path() {
    let data = fixture_dir("export_relative");
    vi()
        .args(base_args(&data))
        .args(["export", "--report", "summary", "--file", "relative.csv"])
        .assert()
        .failure();
}
