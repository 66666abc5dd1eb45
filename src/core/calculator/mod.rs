pub mod headline;
pub mod highlights;
pub mod region;
pub mod sponsorship;
pub mod trend;
