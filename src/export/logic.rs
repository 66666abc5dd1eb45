// src/export/logic.rs

use crate::config::Config;
use crate::core::{Dashboard, FilterSpec, FilteredView};
use crate::data::Snapshot;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportRow;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportKind};
use crate::ui::messages::warning;
use crate::utils::path::absolute_output;
use std::path::Path;
use tracing::debug;

/// High-level export: filter, aggregate, write.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one report.
    ///
    /// - `file` must be absolute (`~/` is expanded)
    /// - an existing file needs `force` or a confirmation
    /// - an empty report is still written, with headers only
    pub fn export(
        snapshot: &Snapshot,
        filters: &FilterSpec,
        report: ReportKind,
        format: ExportFormat,
        file: &str,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        let path = absolute_output(file)?;
        ensure_writable(&path, force)?;

        let view = filters.apply(snapshot)?;
        let subtitle = describe_filters(filters, &view);
        let title = format!("Venue Intel: {}", report.title());

        debug!(report = report.title(), format = format.as_str(), path = %path.display(), "export");

        match report {
            ReportKind::Summary => {
                let rows = [Dashboard::headline(&view)];
                write(&rows, format, &path, &title, &subtitle)
            }
            ReportKind::Trend => {
                let rows = Dashboard::daily_trend(&view);
                write(&rows, format, &path, &title, &subtitle)
            }
            ReportKind::Peaks => {
                let rows = Dashboard::peak_days(&view, cfg.peak_days);
                write(&rows, format, &path, &title, &subtitle)
            }
            ReportKind::Regions => {
                let rows = Dashboard::regional_rollup(&view);
                write(&rows, format, &path, &title, &subtitle)
            }
            ReportKind::Sponsors => {
                let rows = Dashboard::sponsorship_cohorts(&view);
                write(&rows, format, &path, &title, &subtitle)
            }
            ReportKind::Events => {
                let rows = Dashboard::top_events(&view, cfg.top_events);
                write(&rows, format, &path, &title, &subtitle)
            }
        }
    }
}

fn write<T: ReportRow>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    title: &str,
    subtitle: &str,
) -> AppResult<()> {
    if rows.is_empty() {
        warning("No rows for the selected filters; writing headers only.");
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, path, sheet_name(title)),
        ExportFormat::Pdf => export_pdf(rows, path, title, subtitle),
    }
}

/// Sheet names are capped at 31 characters by Excel.
fn sheet_name(title: &str) -> &str {
    let name = title.strip_prefix("Venue Intel: ").unwrap_or(title);
    match name.char_indices().nth(31) {
        Some((i, _)) => &name[..i],
        None => name,
    }
}

/// One-line description of the active filters, e.g.
/// `Window: 2025-01-01 to 2025-03-31 | City: All | Sponsored: all`.
pub fn describe_filters(filters: &FilterSpec, view: &FilteredView<'_>) -> String {
    format!(
        "Window: {} | City: {} | Sponsored: {}",
        view.window,
        filters.city.as_deref().unwrap_or("All"),
        filters.sponsorship.as_str()
    )
}
