//! Column descriptors for deck tables.
//!
//! A [`Column`] carries everything the writer needs to lay out one table
//! column: one or two header label lines (two-line headers let adjacent
//! columns share a merged top label while differing below), an optional
//! unit line, the cell alignment, and the float policy applied to numeric
//! cells. The resolved width is runtime state: it starts at the widest
//! label line when the header is declared and grows with every cell, so
//! the final layout is only known when the table closes.

use serde::{Deserialize, Serialize};

use crate::util::display_width;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// Float rendering policy for a column.
///
/// Applies only to floating-point cells; strings and integers render as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Fixed-point with the given number of decimals: `2512.75` at 3 is
    /// `"2512.750"`.
    Fixed(usize),
    /// Six-decimal mantissa with an uppercase `E` and a signed two-digit
    /// exponent: `"1.234560E+02"`.
    Scientific,
    /// Shortest representation up to the given number of significant
    /// digits, switching to scientific notation for very small or very
    /// large magnitudes.
    Concise(usize),
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Concise(6)
    }
}

/// Configuration for a single column in a deck table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    /// Header label lines, top to bottom (one or two).
    pub labels: Vec<String>,
    /// Optional unit line (e.g. `"[cm2]"`), rendered below the labels
    /// whenever any column of the table carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Cell alignment.
    #[serde(default)]
    pub align: Align,
    /// Float rendering policy.
    #[serde(default)]
    pub format: NumberFormat,
    /// Widest rendered width seen so far. Seeded from the labels when the
    /// header is declared, grown monotonically by every appended cell.
    #[serde(skip)]
    width: usize,
}

impl Column {
    /// Create a column with a single-line header label.
    pub fn new(label: impl Into<String>) -> Self {
        Column {
            labels: vec![label.into()],
            unit: None,
            align: Align::default(),
            format: NumberFormat::default(),
            width: 0,
        }
    }

    /// Create a column with a two-line header label.
    pub fn stacked(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Column {
            labels: vec![top.into(), bottom.into()],
            ..Column::new("")
        }
    }

    /// Set the unit line.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set the float policy.
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Set fixed-point formatting (shorthand for `.format(NumberFormat::Fixed(n))`).
    pub fn fixed(self, decimals: usize) -> Self {
        self.format(NumberFormat::Fixed(decimals))
    }

    /// Set scientific formatting.
    pub fn scientific(self) -> Self {
        self.format(NumberFormat::Scientific)
    }

    /// Set concise formatting with the given significant digits.
    pub fn concise(self, significant: usize) -> Self {
        self.format(NumberFormat::Concise(significant))
    }

    /// The resolved width so far.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether any label line is non-empty.
    pub fn has_label(&self) -> bool {
        self.labels.iter().any(|line| !line.is_empty())
    }

    /// Widest label line.
    pub(crate) fn label_width(&self) -> usize {
        self.labels
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0)
    }

    /// Re-seed the width from the labels (called on header declaration).
    pub(crate) fn reset_width(&mut self) {
        self.width = self.label_width();
    }

    /// Grow the width to hold a cell of `width` columns; never shrinks.
    pub(crate) fn grow(&mut self, width: usize) {
        self.width = self.width.max(width);
    }
}
