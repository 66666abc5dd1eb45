use venue_intel::data::{DataFiles, load_snapshot, parse_flag};
use venue_intel::errors::AppError;
use venue_intel::utils::time::parse_timestamp;

mod common;
use common::{EVENTS, TICKETS, TRANSACTIONS, VENUES, fixture_dir, temp_dir, write_tables};

#[test]
fn loads_fixture_and_derives_fields() {
    let dir = fixture_dir("loader_fixture");
    let snap = load_snapshot(&DataFiles::in_dir(&dir)).unwrap();

    let v2 = snap.venue("V2").unwrap();
    assert_eq!(v2.region_path, "NYC > Manhattan > SoHo");
    assert_eq!(v2.lat, Some(40.72));

    let e3 = snap.event("E3").unwrap();
    assert!(e3.is_sponsored);
    assert_eq!(snap.venue_of_event("E3").unwrap().city, "Boston");

    let t3 = snap.tickets().iter().find(|t| t.order_id == "T3").unwrap();
    assert!(!t3.checked_in);
    assert!(t3.cancelled);
    assert!(t3.checkin_ts.is_none());
}

#[test]
fn missing_table_is_reported() {
    let dir = temp_dir("loader_missing");
    std::fs::write(dir.join("venues.csv"), VENUES).unwrap();

    let err = load_snapshot(&DataFiles::in_dir(&dir)).unwrap_err();
    match err {
        AppError::MissingDataFile(path) => assert!(path.ends_with("events.csv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_timestamp_names_file_and_line() {
    let dir = temp_dir("loader_bad_ts");
    let tickets = format!("{TICKETS}T7,E1,not a date,,\n");
    write_tables(&dir, VENUES, EVENTS, &tickets, TRANSACTIONS);

    let err = load_snapshot(&DataFiles::in_dir(&dir)).unwrap_err();
    match err {
        AppError::InvalidData { file, reason } => {
            assert!(file.ends_with("tickets.csv"));
            assert!(reason.starts_with("line 8:"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn event_ending_before_start_is_rejected() {
    let dir = temp_dir("loader_bad_event");
    let events = "\
event_id,event_name,venue_id,start_ts,end_ts,is_sponsored
E1,Backwards,V1,2025-03-01 20:00:00,2025-03-01 19:00:00,false
";
    write_tables(&dir, VENUES, events, "order_id,event_id,sold_ts,checkin_ts,cancel_ts\n", TRANSACTIONS);

    assert!(matches!(
        load_snapshot(&DataFiles::in_dir(&dir)),
        Err(AppError::InvalidData { .. })
    ));
}

#[test]
fn transaction_id_aliases_and_orphans() {
    let dir = temp_dir("loader_alias");
    let transactions = "\
id,event_id,created_ts,status,is_refund,net_amount
X1,E1,2025-03-01T10:00:00Z,captured,0,25.5
X2,E9,2025-03-01 11:00,refunded,1,4.0
";
    let tickets = format!("{TICKETS}T9,E404,2025-02-01 00:00:00,,\n");
    write_tables(&dir, VENUES, EVENTS, &tickets, transactions);

    let snap = load_snapshot(&DataFiles::in_dir(&dir)).unwrap();
    assert_eq!(snap.transactions()[0].id, "X1");
    assert!(snap.transactions()[1].is_refund);

    let orphans = snap.orphans();
    assert_eq!(orphans.tickets_without_event, 1);
    assert_eq!(orphans.transactions_without_event, 1);
    assert_eq!(orphans.events_without_venue, 0);
    assert_eq!(snap.positive_refunds(), 1);
}

#[test]
fn flags_accept_common_spellings() {
    for raw in ["true", "TRUE", "1", "yes", "Y", "t"] {
        assert!(parse_flag(raw).unwrap(), "{raw}");
    }
    for raw in ["", "false", "0", "no", "N", "f"] {
        assert!(!parse_flag(raw).unwrap(), "{raw}");
    }
    assert!(matches!(parse_flag("maybe"), Err(AppError::InvalidFlag(_))));
}

#[test]
fn timestamp_formats() {
    let expected = "2025-03-01 20:15:00";
    for raw in [
        "2025-03-01 20:15:00",
        "2025-03-01T20:15:00",
        "2025-03-01 20:15",
        "2025-03-01 20:15:00.000",
        "2025-03-01T20:15:00+02:00",
    ] {
        let ts = parse_timestamp(raw).unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), expected, "{raw}");
    }

    let midnight = parse_timestamp("2025-03-01").unwrap();
    assert_eq!(midnight.format("%H:%M").to_string(), "00:00");

    assert!(matches!(
        parse_timestamp("03/01/2025"),
        Err(AppError::InvalidTimestamp(_))
    ));
}

#[test]
fn non_timestamp_marks_still_count() {
    let dir = temp_dir("loader_marks");
    let tickets = "\
order_id,event_id,sold_ts,checkin_ts,cancel_ts
T1,E1,2025-02-20 10:00:00,yes,
T2,E1,2025-02-21 11:00:00,,cancelled
T3,E1,2025-02-22 12:00:00,  ,
";
    write_tables(&dir, VENUES, EVENTS, tickets, TRANSACTIONS);

    let snap = load_snapshot(&DataFiles::in_dir(&dir)).unwrap();
    let t = snap.tickets();

    assert!(t[0].checked_in);
    assert!(t[0].checkin_ts.is_none());
    assert!(t[0].has_unparsed_marks());

    assert!(t[1].cancelled);
    assert!(!t[1].checked_in);
    assert!(t[1].cancel_ts.is_none());

    assert!(!t[2].checked_in);
    assert!(!t[2].cancelled);
    assert!(!t[2].has_unparsed_marks());
}
