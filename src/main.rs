//! Venue Intel entrypoint.

use venue_intel::run;

fn main() {
    if let Err(e) = run() {
        venue_intel::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
