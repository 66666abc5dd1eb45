use crate::cli::commands::open_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::export::logic::describe_filters;
use crate::ui::messages::{caption, header, info};
use crate::utils::formatting::format_optional_currency;
use crate::utils::table::{Column, Table};
use crate::utils::{format_count, format_currency};

/// Handle the `regions` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Regions { filters, top } = cmd {
        let spec = filters.to_spec()?;
        let snapshot = open_snapshot(cfg)?;
        let view = spec.apply(&snapshot)?;

        let mut rows = Dashboard::regional_rollup(&view);
        if let Some(n) = top {
            rows.truncate(*n);
        }

        header("Regions by net revenue");
        caption(describe_filters(&spec, &view));

        let mut table = Table::new(vec![
            Column::left("Region"),
            Column::right("Sold"),
            Column::right("Check-ins"),
            Column::right("Cancelled"),
            Column::right("Net revenue"),
            Column::right("Rev/attendee"),
        ]);
        for row in &rows {
            table.add_row(vec![
                row.region_path.clone(),
                format_count(row.tickets_sold),
                format_count(row.checkins),
                format_count(row.cancellations),
                format_currency(row.net_revenue, &cfg.currency_symbol),
                format_optional_currency(row.rev_per_attendee, &cfg.currency_symbol),
            ]);
        }

        if table.is_empty() {
            info("No regions with tickets or revenue in the selected filters.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
