pub mod event;
pub mod kpi;
pub mod ticket;
pub mod transaction;
pub mod venue;

pub use event::Event;
pub use kpi::{CohortRow, DailyTrendRow, EventStats, HeadlineKpis, RegionRow, TopEventRow};
pub use ticket::Ticket;
pub use transaction::Transaction;
pub use venue::Venue;
