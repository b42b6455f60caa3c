//! Table-wide output configuration.

use serde::{Deserialize, Serialize};

/// Output configuration for a [`TableWriter`](crate::TableWriter).
///
/// The defaults produce the classic deck shape: `-- ` comment and header
/// prefixes, three-space row indentation, a ` /` row terminator, five
/// spaces between columns and a 132-character data-row limit.
///
/// Fields may be changed at any time, but the writer reads them when a
/// table is flushed, so a change takes effect for every table closed after
/// it (the default-marker text is the one exception: it is substituted
/// when the cell is appended).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Spaces between adjacent columns.
    pub column_spacing: usize,
    /// Text prepended to every data row.
    pub row_prefix: String,
    /// Default text appended to every data row (the deck row terminator).
    pub row_suffix: String,
    /// Prefix for comment lines and horizontal rules.
    pub comment_prefix: String,
    /// Prefix for header label and unit lines.
    pub header_prefix: String,
    /// Maximum width of a data row before it wraps; `None` disables
    /// wrapping entirely.
    pub max_row_width: Option<usize>,
    /// Text substituted for sentinel cell values (the deck default-value
    /// marker).
    pub default_marker: String,
    /// When false, `optional_comment` calls are dropped.
    pub optional_comments: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            column_spacing: 5,
            row_prefix: "   ".to_string(),
            row_suffix: " /".to_string(),
            comment_prefix: "-- ".to_string(),
            header_prefix: "-- ".to_string(),
            max_row_width: Some(132),
            default_marker: "1*".to_string(),
            optional_comments: true,
        }
    }
}

impl TableStyle {
    /// Set the inter-column spacing.
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set the row prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.row_prefix = prefix.into();
        self
    }

    /// Set the default row terminator.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.row_suffix = suffix.into();
        self
    }

    /// Set the comment-line prefix.
    pub fn comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Set the header-line prefix.
    pub fn header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_prefix = prefix.into();
        self
    }

    /// Set the maximum data-row width.
    pub fn max_row_width(mut self, width: usize) -> Self {
        self.max_row_width = Some(width);
        self
    }

    /// Disable data-row wrapping.
    pub fn unlimited_row_width(mut self) -> Self {
        self.max_row_width = None;
        self
    }

    /// Set the default-value marker text.
    pub fn default_marker(mut self, marker: impl Into<String>) -> Self {
        self.default_marker = marker.into();
        self
    }

    /// Enable or disable optional comments.
    pub fn optional_comments(mut self, enabled: bool) -> Self {
        self.optional_comments = enabled;
        self
    }
}
