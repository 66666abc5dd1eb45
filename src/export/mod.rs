// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::ReportRow;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Which table an export writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Headline KPIs (one row)
    Summary,
    /// Daily trend
    Trend,
    /// Top days by net revenue
    Peaks,
    /// Regional rollup
    Regions,
    /// Sponsored vs. non-sponsored cohorts
    Sponsors,
    /// Best-selling events
    Events,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Summary => "Headline KPIs",
            ReportKind::Trend => "Daily trend",
            ReportKind::Peaks => "Peak days",
            ReportKind::Regions => "Regions",
            ReportKind::Sponsors => "Sponsor impact",
            ReportKind::Events => "Top events",
        }
    }
}
