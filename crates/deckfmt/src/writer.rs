//! The stateful deck-table writer.

use std::io::Write;

use crate::buffer::{RowBuffer, RowEntry};
use crate::column::{Align, Column};
use crate::error::TableError;
use crate::style::TableStyle;
use crate::util::{display_width, pad_left, pad_right};
use crate::value::CellValue;

/// Writer lifecycle. Idle writes comments straight through; TableOpen
/// buffers everything until the table completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    TableOpen,
}

/// Fixed-width keyword-table writer.
///
/// Rows are buffered between [`header`](TableWriter::header) and
/// [`end_table`](TableWriter::end_table); column widths resolve to the
/// widest cell or label seen, and data rows longer than the configured
/// maximum wrap onto aligned continuation lines. One writer emits any
/// number of tables in sequence onto the same sink.
///
/// ```rust
/// use deckfmt::{Column, TableWriter};
///
/// let mut writer = TableWriter::new(Vec::new());
/// writer.keyword("WSEGVALV")?;
/// writer.header(vec![
///     Column::stacked("WELL", "NAME"),
///     Column::new("SEG").right(),
///     Column::new("CV").right().fixed(2),
/// ])?;
/// writer.cell("'P1'")?.cell(28)?.cell(0.7)?.end_row()?;
/// writer.end_table()?;
///
/// let deck = String::from_utf8(writer.finish()?).unwrap();
/// assert_eq!(
///     deck,
///     concat!(
///         "WSEGVALV\n",
///         "-- WELL          SEG       CV\n",
///         "-- NAME                      \n",
///         "   'P1'           28     0.70 /\n",
///         "    /\n",
///     )
/// );
/// # Ok::<(), deckfmt::TableError>(())
/// ```
///
/// The writer is single-threaded state; use one instance per output
/// stream. Dropping a writer with an open table flushes it and swallows
/// sink errors — call [`finish`](TableWriter::finish) to observe them.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    sink: Option<W>,
    style: TableStyle,
    state: State,
    columns: Vec<Column>,
    buffer: RowBuffer,
}

impl<W: Write> TableWriter<W> {
    /// Create a writer with the default [`TableStyle`].
    pub fn new(sink: W) -> Self {
        Self::with_style(sink, TableStyle::default())
    }

    /// Create a writer with an explicit style.
    pub fn with_style(sink: W, style: TableStyle) -> Self {
        TableWriter {
            sink: Some(sink),
            style,
            state: State::Idle,
            columns: Vec::new(),
            buffer: RowBuffer::default(),
        }
    }

    /// The current style.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Mutable access to the style. Changes apply to tables flushed after
    /// the change.
    pub fn style_mut(&mut self) -> &mut TableStyle {
        &mut self.style
    }

    /// Replace the style wholesale.
    pub fn set_style(&mut self, style: TableStyle) {
        self.style = style;
    }

    /// Consume the writer and return one with a different style over the
    /// same sink. An open table is flushed first, exactly as if
    /// [`end_table`](TableWriter::end_table) had been called.
    pub fn restyled(mut self, style: TableStyle) -> Result<Self, TableError> {
        if self.state == State::TableOpen {
            self.flush_table(None, true)?;
        }
        self.style = style;
        Ok(self)
    }

    /// Spaces between adjacent columns.
    pub fn column_spacing(&self) -> usize {
        self.style.column_spacing
    }

    /// Text prepended to every data row.
    pub fn row_prefix(&self) -> &str {
        &self.style.row_prefix
    }

    /// Default text appended to every data row.
    pub fn row_suffix(&self) -> &str {
        &self.style.row_suffix
    }

    /// Prefix for comment lines.
    pub fn comment_prefix(&self) -> &str {
        &self.style.comment_prefix
    }

    /// Maximum data-row width, `None` when unlimited.
    pub fn max_row_width(&self) -> Option<usize> {
        self.style.max_row_width
    }

    /// Whether a header has been declared and not yet flushed.
    pub fn is_table_open(&self) -> bool {
        self.state == State::TableOpen
    }

    /// Write a deck keyword line directly to the sink.
    ///
    /// The keyword is never buffered, so it may be written either
    /// immediately before or immediately after [`header`](TableWriter::header)
    /// — but only while the row buffer is still empty, or it would land in
    /// the middle of the table body.
    pub fn keyword(&mut self, name: &str) -> Result<&mut Self, TableError> {
        self.write_line(name)?;
        Ok(self)
    }

    /// Declare the columns of a new table.
    ///
    /// If a table is already open it is flushed first, exactly as if
    /// [`end_table`](TableWriter::end_table) had been called; this is the
    /// normal many-tables-per-stream sequence. Column widths are seeded
    /// from the label lines.
    pub fn header(&mut self, columns: Vec<Column>) -> Result<&mut Self, TableError> {
        if self.state == State::TableOpen {
            self.flush_table(None, true)?;
        }
        self.columns = columns;
        for column in &mut self.columns {
            column.reset_width();
        }
        self.state = State::TableOpen;
        Ok(self)
    }

    /// Append a cell to the in-progress row.
    ///
    /// The value is rendered immediately with the target column's float
    /// policy and the column width grows to hold it. Appending past the
    /// declared column count is a [`TableError::ColumnCountMismatch`].
    pub fn cell(&mut self, value: impl Into<CellValue>) -> Result<&mut Self, TableError> {
        if self.state != State::TableOpen {
            return Err(TableError::NoTableOpen);
        }
        let slot = self.buffer.pending_len();
        if slot >= self.columns.len() {
            return Err(TableError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: slot + 1,
            });
        }
        let column = &mut self.columns[slot];
        let text = value.into().render(column.format);
        column.grow(display_width(&text));
        self.buffer.push_cell(text);
        Ok(self)
    }

    /// Append a grid index, converting from zero-based to the one-based
    /// convention deck files display.
    pub fn one_based_index(&mut self, zero_based: usize) -> Result<&mut Self, TableError> {
        self.cell(CellValue::Index(zero_based + 1))
    }

    /// Append `value`, or the default-value marker when it equals the
    /// sentinel.
    ///
    /// The comparison is exact floating-point equality, not a tolerance:
    /// sentinels are chosen as values no computation produces by accident
    /// (infinity, or a specific magic constant), so `-0.0` matches `0.0`
    /// and a NaN sentinel never matches.
    pub fn cell_or_default_marker(
        &mut self,
        value: f64,
        sentinel: f64,
    ) -> Result<&mut Self, TableError> {
        if value == sentinel {
            let marker = self.style.default_marker.clone();
            self.cell(marker)
        } else {
            self.cell(value)
        }
    }

    /// Complete the in-progress row with the table-wide terminator.
    ///
    /// Completing with fewer cells than declared columns is a
    /// [`TableError::ColumnCountMismatch`].
    pub fn end_row(&mut self) -> Result<&mut Self, TableError> {
        self.finish_row(None)
    }

    /// Complete the in-progress row with a one-off terminator override.
    pub fn end_row_with(&mut self, terminator: impl Into<String>) -> Result<&mut Self, TableError> {
        self.finish_row(Some(terminator.into()))
    }

    fn finish_row(&mut self, terminator: Option<String>) -> Result<&mut Self, TableError> {
        if self.state != State::TableOpen {
            return Err(TableError::NoTableOpen);
        }
        let actual = self.buffer.pending_len();
        if actual != self.columns.len() {
            return Err(TableError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual,
            });
        }
        self.buffer.complete_row(terminator);
        Ok(self)
    }

    /// Add a comment line.
    ///
    /// While a table is open the comment is buffered and prints exactly
    /// where it was added relative to the rows; with no table open it is
    /// written immediately. Comment lines are never width-wrapped.
    pub fn comment(&mut self, text: &str) -> Result<&mut Self, TableError> {
        match self.state {
            State::TableOpen => self.buffer.push_comment(text.to_string()),
            State::Idle => {
                let line = format!("{}{}", self.style.comment_prefix, text);
                self.write_line(&line)?;
            }
        }
        Ok(self)
    }

    /// Like [`comment`](TableWriter::comment), but dropped entirely when
    /// the style's optional-comments flag is off (machine-only output).
    pub fn optional_comment(&mut self, text: &str) -> Result<&mut Self, TableError> {
        if self.style.optional_comments {
            self.comment(text)
        } else {
            Ok(self)
        }
    }

    /// Add a comment-prefixed horizontal rule spanning the table width.
    pub fn horizontal_line(&mut self, fill: char) -> Result<&mut Self, TableError> {
        match self.state {
            State::TableOpen => self.buffer.push_rule(fill),
            State::Idle => {
                let line = self.rule_line(fill);
                self.write_line(&line)?;
            }
        }
        Ok(self)
    }

    /// Complete the table: resolve widths, emit header and buffered rows,
    /// write the trailing terminator line and reset to the idle state.
    pub fn end_table(&mut self) -> Result<&mut Self, TableError> {
        self.flush_table(None, true)?;
        Ok(self)
    }

    /// Complete the table with an explicit trailing text in place of the
    /// row suffix, optionally without the final newline.
    pub fn end_table_with(
        &mut self,
        append_text: &str,
        append_newline: bool,
    ) -> Result<&mut Self, TableError> {
        self.flush_table(Some(append_text), append_newline)?;
        Ok(self)
    }

    /// Width of a full table row: row prefix, every column padded for a
    /// blank cell under the justification rule, row suffix.
    pub fn table_width(&self) -> usize {
        let mut width =
            display_width(&self.style.row_prefix) + display_width(&self.style.row_suffix);
        for index in 0..self.columns.len() {
            width += display_width(&self.field(" ", index));
        }
        width
    }

    /// Flush any open table and return the sink.
    pub fn finish(mut self) -> Result<W, TableError> {
        let flushed = if self.state == State::TableOpen {
            self.flush_table(None, true)
        } else {
            Ok(())
        };
        let sink = self.take_sink();
        flushed.map(|()| sink)
    }

    // --- flush engine ---

    fn flush_table(
        &mut self,
        append_override: Option<&str>,
        append_newline: bool,
    ) -> Result<(), TableError> {
        if self.state != State::TableOpen {
            return Err(TableError::NoTableOpen);
        }
        if self.buffer.has_pending() {
            return Err(TableError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: self.buffer.pending_len(),
            });
        }

        // Reset to Idle even when the sink fails mid-table, so a failed
        // flush is not retried from Drop against a broken stream.
        let result = self.emit_table(append_override, append_newline);
        self.columns.clear();
        self.buffer.clear();
        self.state = State::Idle;
        result
    }

    fn emit_table(
        &mut self,
        append_override: Option<&str>,
        append_newline: bool,
    ) -> Result<(), TableError> {
        self.write_header()?;

        for entry in self.buffer.take() {
            match entry {
                RowEntry::Comment(text) => {
                    let line = format!("{}{}", self.style.comment_prefix, text);
                    self.write_line(&line)?;
                }
                RowEntry::Rule(fill) => {
                    let line = self.rule_line(fill);
                    self.write_line(&line)?;
                }
                RowEntry::Content { cells, terminator } => {
                    self.write_content_row(&cells, terminator.as_deref())?;
                }
            }
        }

        let trailing = format!(
            "{}{}",
            self.style.row_prefix,
            append_override.unwrap_or(&self.style.row_suffix)
        );
        if append_newline {
            self.write_line(&trailing)?;
        } else {
            self.write_raw(&trailing)?;
        }
        Ok(())
    }

    fn write_header(&mut self) -> Result<(), TableError> {
        if self.columns.is_empty() || !self.columns.iter().any(Column::has_label) {
            return Ok(());
        }
        let label_lines = self
            .columns
            .iter()
            .map(|column| column.labels.len())
            .max()
            .unwrap_or(1);
        for line_index in 0..label_lines {
            let mut line = self.style.header_prefix.clone();
            for (index, column) in self.columns.iter().enumerate() {
                let label = column
                    .labels
                    .get(line_index)
                    .map(String::as_str)
                    .unwrap_or("");
                line.push_str(&self.field(label, index));
            }
            self.write_line(&line)?;
        }
        if self.columns.iter().any(|column| column.unit.is_some()) {
            let mut line = self.style.header_prefix.clone();
            for (index, column) in self.columns.iter().enumerate() {
                let unit = column.unit.as_deref().unwrap_or("");
                line.push_str(&self.field(unit, index));
            }
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Emit one content row, wrapping when the accumulated line would
    /// exceed the maximum data-row width.
    ///
    /// The decision is incremental: cells are appended until the next one
    /// (plus the terminator, for the last cell) would push the line over
    /// the limit, at which point the line so far is flushed and the
    /// overflowing cell opens the continuation line. The continuation is
    /// not re-checked, so a single cell wider than the limit still gets
    /// emitted, just with wraps around it. Rows whose prefix is
    /// comment-styled are exempt.
    fn write_content_row(
        &mut self,
        cells: &[String],
        terminator: Option<&str>,
    ) -> Result<(), TableError> {
        let terminator = terminator
            .map(str::to_string)
            .unwrap_or_else(|| self.style.row_suffix.clone());
        let wrap_allowed = !self.style.row_prefix.starts_with(&self.style.comment_prefix);
        let last = cells.len().saturating_sub(1);

        let mut lines = Vec::new();
        let mut line = self.style.row_prefix.clone();
        for (index, cell) in cells.iter().enumerate() {
            let rendered = self.field(cell, index);
            if let Some(max_width) = self.style.max_row_width {
                if wrap_allowed {
                    let mut candidate = display_width(&line) + display_width(&rendered);
                    if index == last {
                        candidate += display_width(&terminator);
                    }
                    if candidate > max_width {
                        lines.push(std::mem::replace(
                            &mut line,
                            self.style.row_prefix.clone(),
                        ));
                    }
                }
            }
            line.push_str(&rendered);
        }
        line.push_str(&terminator);
        lines.push(line);

        for line in &lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Render `text` into column `index`'s slot: padded to the resolved
    /// width with the inter-column spacing folded into the pad. Left
    /// columns carry the spacing after the text except the last; right
    /// columns carry it before the text except the first, keeping the row
    /// prefix flush against column one and the terminator flush against
    /// the final column.
    fn field(&self, text: &str, index: usize) -> String {
        let column = &self.columns[index];
        match column.align {
            Align::Left => {
                let spacing = if index + 1 == self.columns.len() {
                    0
                } else {
                    self.style.column_spacing
                };
                pad_right(text, column.width() + spacing)
            }
            Align::Right => {
                let spacing = if index == 0 { 0 } else { self.style.column_spacing };
                pad_left(text, column.width() + spacing)
            }
        }
    }

    fn rule_line(&self, fill: char) -> String {
        let width = self.table_width();
        let mut line = String::with_capacity(width + self.style.comment_prefix.len());
        line.push_str(&self.style.comment_prefix);
        for _ in 0..width {
            line.push(fill);
        }
        line
    }

    fn write_raw(&mut self, text: &str) -> Result<(), TableError> {
        self.sink_mut().write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), TableError> {
        let sink = self.sink_mut();
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        Ok(())
    }

    fn sink_mut(&mut self) -> &mut W {
        // vacated only by finish(), which consumes the writer
        self.sink.as_mut().expect("sink present until finish()")
    }

    fn take_sink(&mut self) -> W {
        self.sink.take().expect("sink present until finish()")
    }
}

impl<W: Write> Drop for TableWriter<W> {
    fn drop(&mut self) {
        if self.state == State::TableOpen && self.sink.is_some() {
            let _ = self.flush_table(None, true);
        }
    }
}
