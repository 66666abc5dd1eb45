use crate::cli::commands::open_snapshot;
use crate::cli::commands::summary::print_headline;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Dashboard, FilterSpec, WindowSpec};
use crate::errors::AppResult;
use crate::export::logic::describe_filters;
use crate::models::TopEventRow;
use crate::ui::messages::{caption, header, info};
use crate::utils::table::{Column, Table};
use crate::utils::{format_count, format_percent};

/// Handle the `overview` command: headline KPIs over a relative period,
/// then the best-selling events.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overview { period, top } = cmd {
        let spec = FilterSpec::new(WindowSpec::parse_period(period)?);
        let snapshot = open_snapshot(cfg)?;
        let view = spec.apply(&snapshot)?;

        header("Overview");
        caption(describe_filters(&spec, &view));
        print_headline(&Dashboard::headline(&view), cfg);

        let n = top.unwrap_or(cfg.top_events);
        header(format!("Top {n} events by tickets sold"));
        let rows = Dashboard::top_events(&view, n);
        let table = top_events_table(&rows);
        if table.is_empty() {
            info("No tickets sold in this period.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}

fn top_events_table(rows: &[TopEventRow]) -> Table {
    let mut table = Table::new(vec![
        Column::left("Event"),
        Column::left("Venue"),
        Column::left("City"),
        Column::right("Sold"),
        Column::right("Check-ins"),
        Column::right("Rate"),
    ]);

    for row in rows {
        table.add_row(vec![
            row.event_name.clone(),
            row.venue_name.clone(),
            row.city.clone(),
            format_count(row.sold),
            format_count(row.checkins),
            format_percent(row.checkin_rate),
        ]);
    }
    table
}
