use crate::cli::commands::open_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Dashboard;
use crate::core::calculator::trend::peak_days;
use crate::errors::AppResult;
use crate::export::logic::describe_filters;
use crate::models::DailyTrendRow;
use crate::ui::messages::{caption, header, info};
use crate::utils::table::{Column, Table};
use crate::utils::{format_count, format_currency};

/// Handle the `trends` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trends { filters, peak } = cmd {
        let spec = filters.to_spec()?;
        let snapshot = open_snapshot(cfg)?;
        let view = spec.apply(&snapshot)?;

        let rows = Dashboard::daily_trend(&view);

        header("Daily trend");
        caption(describe_filters(&spec, &view));
        if rows.is_empty() {
            info("No activity in the selected filters.");
            return Ok(());
        }
        print!("{}", trend_table(&rows, cfg).render());

        let n = peak.unwrap_or(cfg.peak_days);
        header(format!("Top {n} days by net revenue"));
        print!("{}", trend_table(&peak_days(&rows, n), cfg).render());
    }
    Ok(())
}

fn trend_table(rows: &[DailyTrendRow], cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Net revenue"),
        Column::right("Sold"),
        Column::right("Check-ins"),
        Column::right("Cancelled"),
    ]);

    for row in rows {
        table.add_row(vec![
            row.date.format("%Y-%m-%d").to_string(),
            format_currency(row.net_revenue, &cfg.currency_symbol),
            format_count(row.tickets_sold),
            format_count(row.checkins),
            format_count(row.cancellations),
        ]);
    }
    table
}
