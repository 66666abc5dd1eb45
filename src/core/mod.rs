//! Filter engine and aggregator.

pub mod calculator;
pub mod filter;
pub mod logic;
pub mod window;

pub use filter::{FilterSpec, FilteredView, SponsorshipFilter, TicketRow, filter_window};
pub use logic::{Dashboard, DatasetInfo};
pub use window::{DateWindow, WindowSpec};
