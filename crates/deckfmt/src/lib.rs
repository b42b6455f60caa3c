//! # deckfmt — fixed-width deck-table writer
//!
//! `deckfmt` emits the rigid, column-aligned keyword tables found in
//! reservoir-simulator deck files (WELSEGS, COMPSEGS, WSEGVALV and
//! friends). The format has one awkward property: a column's width is the
//! widest cell *or header* seen anywhere in the table, so nothing can be
//! written until the whole table is known. The writer buffers rows,
//! resolves widths when the table closes, and wraps data rows that would
//! exceed the 132-character deck line limit onto aligned continuation
//! lines.
//!
//! ## Quick start
//!
//! ```rust
//! use deckfmt::{Column, TableWriter};
//!
//! let mut writer = TableWriter::new(Vec::new());
//! writer.keyword("WELSEGS")?;
//! writer.header(vec![
//!     Column::stacked("WELL", "NAME"),
//!     Column::new("DEPTH").right().fixed(2),
//!     Column::new("LENGTH").right().fixed(2),
//! ])?;
//! writer.cell("'PROD'")?.cell(2512.75)?.cell(0.0)?.end_row()?;
//! writer.end_table()?;
//!
//! let deck = String::from_utf8(writer.finish()?).unwrap();
//! assert_eq!(
//!     deck,
//!     concat!(
//!         "WELSEGS\n",
//!         "-- WELL              DEPTH     LENGTH\n",
//!         "-- NAME                              \n",
//!         "   'PROD'          2512.75       0.00 /\n",
//!         "    /\n",
//!     )
//! );
//! # Ok::<(), deckfmt::TableError>(())
//! ```
//!
//! ## Shape of the output
//!
//! - One logical table per [`header`](TableWriter::header) …
//!   [`end_table`](TableWriter::end_table) cycle; a single writer emits
//!   many tables in sequence onto the same sink.
//! - Header lines (one or two label lines, plus a unit line when any
//!   column has one) carry the `-- ` header prefix, so simulators read
//!   them as comments. A table whose labels are all empty gets no header.
//! - Data rows carry a prefix (three spaces) and terminator (` /`), both
//!   configurable per [`TableStyle`]. The terminator can be overridden for
//!   a single row with [`end_row_with`](TableWriter::end_row_with).
//! - Comments and horizontal rules interleave with rows in the exact
//!   position they were added, and are exempt from width wrapping.
//! - Keyword lines ([`keyword`](TableWriter::keyword)) are never
//!   buffered, so the keyword may precede or follow the header
//!   declaration — the table body comes out byte-identical either way.
//!
//! ## Values
//!
//! Cells accept strings, integers, indices and floats ([`CellValue`]).
//! Floats render per the target column's [`NumberFormat`]: fixed-point,
//! scientific, or concise (shortest round-trip up to a number of
//! significant digits). [`cell_or_default_marker`](TableWriter::cell_or_default_marker)
//! substitutes the deck default marker (`1*`) for sentinel values,
//! compared with exact floating-point equality.

mod buffer;
mod column;
mod error;
mod style;
mod util;
mod value;
mod writer;

pub use column::{Align, Column, NumberFormat};
pub use error::TableError;
pub use style::TableStyle;
pub use util::{display_width, pad_left, pad_right};
pub use value::{format_float, CellValue};
pub use writer::TableWriter;
