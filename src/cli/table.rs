//! Plain-text table rendering for CLI list output
//!
//! Column widths are measured with `console::measure_text_width` so styled
//! cells line up with unstyled ones.

use console::{measure_text_width, pad_str, Alignment};

/// A simple left-aligned table with a header row
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the table with a dashed separator under the header
    pub fn render(&self) -> String {
        let columns = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().take(columns).enumerate() {
                widths[i] = widths[i].max(measure_text_width(cell));
            }
        }

        let mut out = String::new();
        out.push_str(&Self::render_line(&self.headers, &widths));
        out.push('\n');
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&Self::render_line(&separator, &widths));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&Self::render_line(row, &widths));
            out.push('\n');
        }
        out
    }

    fn render_line(cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
            .collect();
        padded.join("  ").trim_end().to_string()
    }
}
