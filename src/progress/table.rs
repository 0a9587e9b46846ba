//! Console status table.
//!
//! The table has one column per job, headed by the job's local filename. The
//! header is printed once; afterwards one row of percentages is printed per
//! tick:
//!
//! ```text
//!    0 output.dat  000
//!  12%        40% 100%
//! ```
//!
//! # Examples
//!
//! ```rust
//! use multiget::progress::StatusTableLayout;
//!
//! let layout = StatusTableLayout::new(&["0", "output.dat", "000"]);
//! assert_eq!(layout.widths(), &[3, 9, 3]);
//! assert_eq!(layout.row_format(), "%3d%% %9d%% %3d%% \n");
//! assert_eq!(layout.render_row(&[12, 40, 100]), " 12%        40% 100% \n");
//! ```

use super::registry::ProgressRegistry;
use crate::download::Download;
use crate::printer::Printer;

use std::fmt::Write;
use std::sync::Arc;
use tracing::debug;

/// Narrowest percentage field, enough for `100`.
const MIN_PERCENT_WIDTH: usize = 3;

/// Narrowest header cell, the width of a full percentage cell including `%`.
const MIN_HEADER_WIDTH: usize = 4;

/// Column widths of the status table, derived once from the filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTableLayout {
    widths: Vec<usize>,
    row_format: String,
}

impl StatusTableLayout {
    /// Computes the layout for the given column headings.
    ///
    /// A percentage cell is `width + 1` characters wide because of the
    /// trailing `%`, so the width is one less than the heading length, but
    /// never less than 3.
    pub fn new<S: AsRef<str>>(filenames: &[S]) -> Self {
        let widths: Vec<usize> = filenames
            .iter()
            .map(|filename| {
                let visible = filename.as_ref().chars().count();
                visible.saturating_sub(1).max(MIN_PERCENT_WIDTH)
            })
            .collect();

        let row_format = render_cells(&widths, |out, _, width| {
            let _ = write!(out, "%{}d%% ", width);
        });

        Self { widths, row_format }
    }

    /// Percentage field width per column.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// The row layout as a printf-style template, e.g. `%3d%% %9d%% \n`.
    pub fn row_format(&self) -> &str {
        &self.row_format
    }

    /// Renders the header line for the given column headings.
    pub fn render_header<S: AsRef<str>>(filenames: &[S]) -> String {
        let mut header = String::new();
        for filename in filenames {
            let _ = write!(header, "{:>width$} ", filename.as_ref(), width = MIN_HEADER_WIDTH);
        }
        header.push('\n');
        header
    }

    /// Renders one row of percentages, one per column in order.
    ///
    /// This is [`row_format`](Self::row_format) filled in; a missing
    /// percentage renders as 0.
    pub fn render_row(&self, percentages: &[u8]) -> String {
        render_cells(&self.widths, |out, column, width| {
            let percent = percentages.get(column).copied().unwrap_or(0);
            let _ = write!(out, "{:>width$}% ", percent, width = width);
        })
    }
}

/// Writes one cell per column, then the line break.
fn render_cells(widths: &[usize], mut cell: impl FnMut(&mut String, usize, usize)) -> String {
    let mut line = String::new();
    for (column, width) in widths.iter().enumerate() {
        cell(&mut line, column, *width);
    }
    line.push('\n');
    line
}

/// Prints the status table for one batch of downloads.
pub struct StatusTable {
    layout: StatusTableLayout,
    urls: Vec<String>,
    printer: Arc<dyn Printer>,
}

impl StatusTable {
    /// Computes the layout for `downloads` and prints the header.
    pub fn initialize(downloads: &[Download], printer: Arc<dyn Printer>) -> Self {
        let filenames: Vec<&str> = downloads.iter().map(|d| d.filename.as_str()).collect();
        let layout = StatusTableLayout::new(&filenames);
        debug!(row_format = layout.row_format(), "Status table initialized");

        printer.print(format_args!(
            "{}",
            StatusTableLayout::render_header(&filenames)
        ));

        Self {
            layout,
            urls: downloads.iter().map(|d| d.url.clone()).collect(),
            printer,
        }
    }

    /// The layout computed at initialization.
    pub fn layout(&self) -> &StatusTableLayout {
        &self.layout
    }

    /// Prints the current percentage of every job, in job order.
    pub fn print_row(&self, registry: &ProgressRegistry) {
        let snapshot = registry.snapshot();
        // Jobs that have not registered yet show 0%.
        let percentages: Vec<u8> = self
            .urls
            .iter()
            .map(|url| snapshot.get(url).copied().unwrap_or(0))
            .collect();
        self.printer
            .print(format_args!("{}", self.layout.render_row(&percentages)));
    }
}
