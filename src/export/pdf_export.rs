// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportRow, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::ReportPdf;
use crate::ui::messages::info;
use std::path::Path;

/// Export one report as a paginated PDF table.
pub(crate) fn export_pdf<T: ReportRow>(
    rows: &[T],
    path: &Path,
    title: &str,
    subtitle: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = T::headers();
    let table = rows_to_table(rows);

    let mut pdf = ReportPdf::new(headers.len());
    pdf.write_table(title, subtitle, &headers, &table);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
