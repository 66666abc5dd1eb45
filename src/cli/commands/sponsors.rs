use crate::cli::commands::open_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::export::logic::describe_filters;
use crate::ui::messages::{caption, header, info};
use crate::utils::table::{Column, Table};
use crate::utils::{format_count, format_currency, format_percent};

/// Handle the `sponsors` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sponsors { filters } = cmd {
        let spec = filters.to_spec()?;
        let snapshot = open_snapshot(cfg)?;
        let view = spec.apply(&snapshot)?;

        let cohorts = Dashboard::sponsorship_cohorts(&view);

        header("Sponsor impact");
        caption(describe_filters(&spec, &view));

        let mut table = Table::new(vec![
            Column::left("Cohort"),
            Column::right("Events"),
            Column::right("Avg revenue/event"),
            Column::right("Avg check-in rate"),
        ]);
        for c in &cohorts {
            table.add_row(vec![
                c.label.clone(),
                format_count(c.events),
                format_currency(c.avg_event_revenue, &cfg.currency_symbol),
                format_percent(c.avg_checkin_rate),
            ]);
        }

        if table.is_empty() {
            info("No events in the selected filters.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
