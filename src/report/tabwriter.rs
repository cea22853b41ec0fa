//! Elastic tab-stop alignment.
//!
//! Rows are buffered and aligned in a single pass when flushed, so a column
//! lines up across every row written, including rows separated by blank
//! lines. Padding is done with tab characters:
//!
//! - a cell is the text before a `\t`; text after the last tab on a row is
//!   not part of any column and is written as-is
//! - a column is as wide as its widest cell, rounded up to the tab width
//! - each cell is followed by as many tabs as it takes to reach that width
//!
//! With a tab width of 8 this produces output that lines up in any terminal
//! or editor using 8-column tab stops.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Buffers rows and writes them aligned to the inner writer on [`flush`].
///
/// [`flush`]: TabWriter::flush
#[derive(Debug)]
pub struct TabWriter<W: Write> {
    inner: W,
    tab_width: usize,
    min_width: usize,
    rows: Vec<Row>,
}

#[derive(Debug, Default)]
struct Row {
    /// Cells terminated by a tab
    cells: Vec<String>,
    /// Text after the last tab
    tail: String,
}

impl<W: Write> TabWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            tab_width: DEFAULT_TAB_WIDTH,
            min_width: 0,
            rows: Vec::new(),
        }
    }

    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Buffer one row. `line` must not contain a newline.
    pub fn write_row(&mut self, line: &str) {
        let mut parts: Vec<&str> = line.split('\t').collect();
        let tail = parts.pop().unwrap_or_default().to_string();
        self.rows.push(Row {
            cells: parts.into_iter().map(str::to_string).collect(),
            tail,
        });
    }

    /// Buffer a blank separator row.
    pub fn write_blank(&mut self) {
        self.rows.push(Row::default());
    }

    /// Align and write every buffered row, then flush the inner writer.
    pub fn flush(&mut self) -> io::Result<()> {
        let widths = self.column_widths();
        let rows = std::mem::take(&mut self.rows);

        for row in &rows {
            let mut line = String::new();
            for (cell, width) in row.cells.iter().zip(&widths) {
                line.push_str(cell);
                let tabs = self.padding_tabs(cell.width(), *width);
                line.extend(std::iter::repeat_n('\t', tabs));
            }
            line.push_str(&row.tail);
            line.push('\n');
            self.inner.write_all(line.as_bytes())?;
        }

        self.inner.flush()
    }

    /// Flush and hand back the inner writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (column, cell) in row.cells.iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width.max(self.min_width)),
                }
            }
        }
        widths
    }

    fn padding_tabs(&self, text_width: usize, column_width: usize) -> usize {
        if self.tab_width == 0 {
            return 0;
        }
        let cell_width = column_width.div_ceil(self.tab_width) * self.tab_width;
        (cell_width - text_width).div_ceil(self.tab_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(rows: &[&str]) -> String {
        let mut tw = TabWriter::new(Vec::new());
        for row in rows {
            if row.is_empty() {
                tw.write_blank();
            } else {
                tw.write_row(row);
            }
        }
        String::from_utf8(tw.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_short_cells_get_one_tab() {
        assert_eq!(align(&["ab\tcd\tend"]), "ab\tcd\tend\n");
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let out = align(&["a\tx", "aaaaaaaaaaaaaaaaaaaa\ty"]);
        // Widest cell is 20 columns, rounded up to 24
        assert_eq!(out, "a\t\t\tx\naaaaaaaaaaaaaaaaaaaa\ty\n");
    }

    #[test]
    fn test_alignment_spans_blank_rows() {
        let out = align(&["a\tx", "", "aaaaaaaaaaaaaaaaaaaa\ty", ""]);
        assert_eq!(out, "a\t\t\tx\n\naaaaaaaaaaaaaaaaaaaa\ty\n\n");
    }

    #[test]
    fn test_cell_filling_tab_stop_gets_no_padding() {
        let out = align(&["12345678\tx"]);
        assert_eq!(out, "12345678x\n");
    }

    #[test]
    fn test_rows_without_tabs_pass_through() {
        assert_eq!(align(&["plain text"]), "plain text\n");
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        // Each CJK character occupies two columns
        let out = align(&["漢字漢字漢\tx", "a\ty"]);
        assert_eq!(out, "漢字漢字漢\tx\na\t\ty\n");
    }

    #[test]
    fn test_min_width() {
        let mut tw = TabWriter::new(Vec::new()).min_width(12);
        tw.write_row("a\tb");
        let out = String::from_utf8(tw.into_inner().unwrap()).unwrap();
        assert_eq!(out, "a\t\tb\n");
    }
}
