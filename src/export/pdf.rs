// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Approximate Helvetica advance width, as a fraction of the font size.
const CHAR_WIDTH: f32 = 0.52;

/// Paginated table writer on top of pdf-writer.
///
/// A4, switched to landscape when the table has many columns. Every page
/// repeats title, filter line and header row.
pub struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

struct Layout<'a> {
    title: &'a str,
    subtitle: &'a str,
    header: Vec<String>,
    widths: Vec<f32>,
    numeric: Vec<bool>,
}

impl ReportPdf {
    pub fn new(columns: usize) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let (page_w, page_h) = if columns > 6 {
            (842.0, 595.0)
        } else {
            (595.0, 842.0)
        };

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,

            page_w,
            page_h,
            margin: 40.0,
            row_h: 18.0,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page and return the id its content stream must use.
    fn add_page(&mut self) -> Ref {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        content_id
    }

    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * CHAR_WIDTH
    }

    /// Cut `text` so it fits in `max_w`, marking the cut with "..".
    fn fit(text: &str, size: f32, max_w: f32) -> String {
        if Self::text_width(text, size) <= max_w {
            return text.to_string();
        }
        let keep = ((max_w / (size * CHAR_WIDTH)) as usize).saturating_sub(2);
        let mut out: String = text.chars().take(keep).collect();
        out.push_str("..");
        out
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        // Type1 Helvetica only covers Latin-1
        let bytes: Vec<u8> = text
            .chars()
            .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
            .collect();
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.02);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, layout: &Layout, row: &[String], size: f32, is_header: bool) {
        let mut x = self.margin;

        for (i, w) in layout.widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let text = Self::fit(cell, size, w - 8.0);
            let tx = if layout.numeric[i] && !is_header {
                x + w - 4.0 - Self::text_width(&text, size)
            } else {
                x + 4.0
            };
            Self::draw_text(content, tx, y + 5.0, size, &text);

            content.save_state();
            content.set_stroke_rgb(0.70, 0.70, 0.70);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header and content, scaled down to the page.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| Self::text_width(h, self.header_font_size) + 10.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(Self::text_width(cell, self.font_size) + 10.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_frame(&self, content: &mut Content, layout: &Layout, page: usize) {
        let top = self.page_h - self.margin;
        Self::draw_text(content, self.margin, top, self.title_font_size, layout.title);
        if !layout.subtitle.is_empty() {
            Self::draw_text(content, self.margin, top - 16.0, self.font_size, layout.subtitle);
        }

        let pg = format!("Page {page}");
        Self::draw_text(
            content,
            self.page_w - self.margin - Self::text_width(&pg, self.font_size),
            self.margin - 20.0,
            self.font_size,
            &pg,
        );
    }

    /// Lay the table out over as many pages as needed. An empty table
    /// still produces one page with the header and a "No data" line.
    pub fn write_table(&mut self, title: &str, subtitle: &str, headers: &[&str], rows: &[Vec<String>]) {
        let numeric = (0..headers.len())
            .map(|i| {
                !rows.is_empty()
                    && rows.iter().all(|r| {
                        r.get(i)
                            .is_some_and(|c| c.is_empty() || c.parse::<f64>().is_ok())
                    })
            })
            .collect();

        let layout = Layout {
            title,
            subtitle,
            header: headers.iter().map(|s| s.to_string()).collect(),
            widths: self.column_widths(headers, rows),
            numeric,
        };
        let table_w: f32 = layout.widths.iter().sum();
        let first_row_y = self.page_h - self.margin - 44.0;

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let content_id = self.add_page();
            let mut content = Content::new();
            self.draw_page_frame(&mut content, &layout, page_idx);

            let mut y = first_row_y;
            self.fill_band(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &layout, &layout.header, self.header_font_size, true);
            y -= self.row_h;

            if remaining.is_empty() {
                Self::draw_text(&mut content, self.margin + 4.0, y + 5.0, self.font_size, "No data");
            }

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.96);
                }
                self.draw_row(&mut content, y, &layout, row, self.font_size, false);
                y -= self.row_h;
                consumed += 1;
            }

            self.pdf.stream(content_id, &content.finish());
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
