use crate::cli::commands::open_snapshot;
use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::{header, metric, warning};
use crate::utils::date::{format_span, span_days};
use crate::utils::format_count;

/// Handle the `info` command: what was loaded and how well it joins.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let snapshot = open_snapshot(cfg)?;
    let info = Dashboard::dataset_info(&snapshot);

    header("Dataset");
    metric("Data directory", cfg.data_path().display(), "");
    metric("Venues", format_count(info.venues), "");
    metric("Events", format_count(info.events), "");
    metric("Tickets", format_count(info.tickets), "");
    metric("Transactions", format_count(info.transactions), "");
    metric(
        "Date span",
        format!("{} ({} days)", format_span(info.span), span_days(info.span)),
        "",
    );
    let cities = if info.cities.is_empty() {
        "--".to_string()
    } else {
        info.cities.join(", ")
    };
    metric("Cities", cities, "");

    let orphans = &info.orphans;
    if orphans.total() > 0 {
        warning(format!(
            "Unresolved references: {} event(s) without venue, {} ticket(s) without event, {} transaction(s) without event",
            orphans.events_without_venue,
            orphans.tickets_without_event,
            orphans.transactions_without_event
        ));
    }
    if info.positive_refunds > 0 {
        warning(format!(
            "{} refund transaction(s) carry a positive amount; refunds are expected to be negative",
            info.positive_refunds
        ));
    }
    Ok(())
}
