use crate::core::calculator::{headline, highlights, region, sponsorship, trend};
use crate::core::filter::FilteredView;
use crate::data::{OrphanCounts, Snapshot};
use crate::models::{CohortRow, DailyTrendRow, EventStats, HeadlineKpis, RegionRow, TopEventRow};
use chrono::NaiveDate;

/// Entry points shared by every view: each takes a filtered view and
/// returns plain rows. Nothing here mutates the snapshot.
pub struct Dashboard;

impl Dashboard {
    pub fn headline(view: &FilteredView<'_>) -> HeadlineKpis {
        headline::calculate_headline(&view.transactions, &view.tickets)
    }

    pub fn daily_trend(view: &FilteredView<'_>) -> Vec<DailyTrendRow> {
        trend::calculate_daily_trend(&view.transactions, &view.tickets)
    }

    pub fn peak_days(view: &FilteredView<'_>, n: usize) -> Vec<DailyTrendRow> {
        trend::peak_days(&Self::daily_trend(view), n)
    }

    pub fn regional_rollup(view: &FilteredView<'_>) -> Vec<RegionRow> {
        region::calculate_regional_rollup(view.snapshot(), &view.tickets, &view.transactions)
    }

    pub fn event_stats(view: &FilteredView<'_>) -> Vec<EventStats> {
        sponsorship::calculate_event_stats(&view.events, &view.tickets, &view.transactions)
    }

    pub fn sponsorship_cohorts(view: &FilteredView<'_>) -> Vec<CohortRow> {
        sponsorship::calculate_cohorts(&Self::event_stats(view))
    }

    pub fn top_events(view: &FilteredView<'_>, n: usize) -> Vec<TopEventRow> {
        highlights::top_events(view.snapshot(), &Self::event_stats(view), n)
    }

    pub fn dataset_info(snapshot: &Snapshot) -> DatasetInfo {
        DatasetInfo {
            venues: snapshot.venues().len(),
            events: snapshot.events().len(),
            tickets: snapshot.tickets().len(),
            transactions: snapshot.transactions().len(),
            span: snapshot.date_span(),
            cities: snapshot.cities().into_iter().map(str::to_string).collect(),
            orphans: snapshot.orphans(),
            positive_refunds: snapshot.positive_refunds(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetInfo {
    pub venues: usize,
    pub events: usize,
    pub tickets: usize,
    pub transactions: usize,
    pub span: Option<(NaiveDate, NaiveDate)>,
    pub cities: Vec<String>,
    pub orphans: OrphanCounts,
    pub positive_refunds: usize,
}
