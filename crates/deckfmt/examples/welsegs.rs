//! Emits a small multisegment-well deck section (WELSEGS + WSEGVALV) to
//! stdout, exercising two-line headers, comments, default markers and the
//! keyword-after-header order.
//!
//! Run with: `cargo run --example welsegs`

use std::io;

use deckfmt::{Column, TableError, TableStyle, TableWriter};

/// Sentinel for values the exporter leaves to the simulator default.
const UNDEFINED: f64 = f64::INFINITY;

fn main() -> Result<(), TableError> {
    let stdout = io::stdout();
    let mut writer = TableWriter::new(stdout.lock());

    writer.comment("Multisegment well completion exported by deckfmt")?;
    writer.horizontal_line('-')?;

    writer.keyword("WELSEGS")?;
    writer.header(vec![
        Column::stacked("WELL", "NAME"),
        Column::stacked("TRUE VERTICAL", "DEPTH").right().fixed(2),
        Column::stacked("TUBING", "LENGTH").right().fixed(2),
        Column::stacked("WELLBORE", "VOLUME").right(),
        Column::stacked("INFO", "TYPE"),
        Column::stacked("PRESSURE", "DROP"),
    ])?;
    writer.optional_comment("top segment")?;
    writer
        .cell("'PROD-1'")?
        .cell(2512.75)?
        .cell(0.0)?
        .cell("1*")?
        .cell("'ABS'")?
        .cell("'HF-'")?
        .end_row()?;
    writer.end_table()?;

    // keyword after the header: the table body is identical either way
    let mut writer = writer.restyled(TableStyle::default().spacing(3))?;
    writer.header(vec![
        Column::stacked("WELL", "NAME"),
        Column::new("SEG").right(),
        Column::new("SEG2").right(),
        Column::stacked("FLOW", "COEFF").right().fixed(4),
        Column::stacked("AREA", "").right(),
    ])?;
    writer.keyword("WSEGVALV")?;
    for (segment, coefficient, area) in [(28usize, 0.7, 8.4e-3), (29, 0.7, UNDEFINED)] {
        writer
            .cell("'PROD-1'")?
            .cell(segment)?
            .cell(segment)?
            .cell(coefficient)?
            .cell_or_default_marker(area, UNDEFINED)?
            .end_row()?;
    }
    writer.end_table()?;

    writer.finish()?;
    Ok(())
}
