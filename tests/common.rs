#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn vi() -> Command {
    cargo_bin_cmd!("venueintel")
}

pub const VENUES: &str = "\
venue_id,venue_name,city,borough,neighborhood,lat,lon
V1,Blue Room,NYC,Manhattan,Chelsea,40.74,-74.00
V2,Loft Nine,NYC,Manhattan,SoHo,40.72,-74.00
V3,Harbor Hall,Boston,Suffolk,Back Bay,42.35,-71.08
";

pub const EVENTS: &str = "\
event_id,event_name,venue_id,start_ts,end_ts,is_sponsored
E1,Jazz Night,V1,2025-03-01 20:00:00,2025-03-01 23:00:00,false
E2,Gallery Opening,V2,2025-03-02 18:00:00,2025-03-02 21:00:00,true
E3,Harbor Sessions,V3,2025-03-10T19:00:00,2025-03-10T22:00:00,yes
";

pub const TICKETS: &str = "\
order_id,event_id,sold_ts,checkin_ts,cancel_ts
T1,E1,2025-02-20 10:00:00,2025-03-01 19:55:00,
T2,E1,2025-02-21 11:00:00,2025-03-01 20:05:00,
T3,E1,2025-02-22 12:00:00,,2025-02-25 09:00:00
T4,E2,2025-02-23 12:00:00,,
T5,E3,2025-03-01 12:00:00,2025-03-10 19:10:00,
T6,E3,2025-03-02 12:00:00,2025-03-10 19:20:00,
";

pub const TRANSACTIONS: &str = "\
txn_id,event_id,created_ts,status,is_refund,net_amount
X1,E1,2025-03-01 10:00:00,captured,false,60.00
X2,E1,2025-03-01 11:00:00,captured,false,40.00
X3,E1,2025-03-01 12:00:00,refunded,true,-10.00
X4,E2,2025-03-02 09:00:00,captured,false,500.00
X5,E3,2025-03-10 09:00:00,captured,false,80.00
X6,E3,2025-03-10 09:30:00,pending,false,999.00
";

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("venueintel_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("venueintel_{}_{}_out.{}", name, std::process::id(), ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_tables(dir: &Path, venues: &str, events: &str, tickets: &str, transactions: &str) {
    fs::write(dir.join("venues.csv"), venues).expect("write venues");
    fs::write(dir.join("events.csv"), events).expect("write events");
    fs::write(dir.join("tickets.csv"), tickets).expect("write tickets");
    fs::write(dir.join("stripe_transactions.csv"), transactions).expect("write transactions");
}

/// Data directory holding the standard three-venue dataset.
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = temp_dir(name);
    write_tables(&dir, VENUES, EVENTS, TICKETS, TRANSACTIONS);
    dir
}

/// Arguments pointing the binary at `data` and at a config file that
/// does not exist, so the user's own configuration never leaks in.
pub fn base_args(data: &Path) -> Vec<String> {
    let cfg = data.join("missing.conf");
    vec![
        "--data".to_string(),
        data.to_string_lossy().to_string(),
        "--config-file".to_string(),
        cfg.to_string_lossy().to_string(),
    ]
}
