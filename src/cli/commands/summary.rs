use crate::cli::commands::open_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::export::logic::describe_filters;
use crate::models::HeadlineKpis;
use crate::ui::messages::{caption, header, metric, warning};
use crate::utils::colors::color_for_amount;
use crate::utils::{format_count, format_currency, format_percent};

/// Handle the `summary` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filters } = cmd {
        let spec = filters.to_spec()?;
        let snapshot = open_snapshot(cfg)?;
        let view = spec.apply(&snapshot)?;

        header("Headline KPIs");
        caption(describe_filters(&spec, &view));
        if view.is_empty() {
            warning("No events or transactions in the selected filters.");
        }
        print_headline(&Dashboard::headline(&view), cfg);
    }
    Ok(())
}

/// Metric block shared by `summary` and `overview`.
pub(crate) fn print_headline(kpis: &HeadlineKpis, cfg: &Config) {
    metric(
        "Net revenue",
        format_currency(kpis.net_revenue, &cfg.currency_symbol),
        color_for_amount(kpis.net_revenue),
    );
    metric("Tickets sold", format_count(kpis.tickets_sold), "");
    metric("Check-ins", format_count(kpis.checkins), "");
    metric("Check-in rate", format_percent(kpis.checkin_rate), "");
    metric("Cancellations", format_count(kpis.cancellations), "");
    metric("Cancellation rate", format_percent(kpis.cancellation_rate), "");
}
