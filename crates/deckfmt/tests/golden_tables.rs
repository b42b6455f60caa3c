//! Byte-for-byte table output expectations.

use deckfmt::{Column, TableStyle, TableWriter};

fn deck_of(writer: TableWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.finish().unwrap()).unwrap()
}

#[test]
fn basic_table_resolves_widths_from_header_and_cells() {
    let mut writer = TableWriter::new(Vec::new());
    writer
        .header(vec![
            Column::new("Well"),
            Column::new("Integer Number"),
            Column::new("IntNumer 2"),
            Column::new("IntNumer 3"),
        ])
        .unwrap();
    writer
        .cell("well a")
        .unwrap()
        .cell(1)
        .unwrap()
        .cell(2)
        .unwrap()
        .cell(3)
        .unwrap()
        .end_row()
        .unwrap();
    writer
        .cell("well B")
        .unwrap()
        .cell(12)
        .unwrap()
        .cell(23)
        .unwrap()
        .cell(233)
        .unwrap()
        .end_row()
        .unwrap();
    writer.end_table().unwrap();

    // "Integer Number" is wider than any cell; "well a"/"well B" are wider
    // than "Well" — widths are the max of either side.
    assert_eq!(
        deck_of(writer),
        concat!(
            "-- Well       Integer Number     IntNumer 2     IntNumer 3\n",
            "   well a     1                  2              3          /\n",
            "   well B     12                 23             233        /\n",
            "    /\n",
        )
    );
}

fn welspecs_columns() -> Vec<Column> {
    vec![
        Column::stacked("WELL", "NAME"),
        Column::stacked("GROUP", "NAME"),
        Column::stacked("", "I"),
        Column::stacked("", "J"),
        Column::stacked("BHP", "DEPTH").unit("[cm2]"),
        Column::new("PHASE"),
        Column::stacked("DRAIN", "RAD"),
        Column::stacked("INFLOW", "EQUANS"),
        Column::stacked("OPEN", "SHUT"),
        Column::stacked("CROSS", "FLOW"),
        Column::stacked("PVT", "TABLE"),
        Column::stacked("HYDS", "DENS"),
        Column::stacked("FIP", "REG"),
    ]
}

fn welspecs_row(writer: &mut TableWriter<Vec<u8>>) {
    writer
        .cell("'Well1'")
        .unwrap()
        .cell("'Group1'")
        .unwrap()
        .cell(32)
        .unwrap()
        .cell(41)
        .unwrap()
        .cell("123.4")
        .unwrap()
        .cell("OIL")
        .unwrap()
        .cell("0.0")
        .unwrap()
        .cell("STD")
        .unwrap()
        .cell("OPEN")
        .unwrap()
        .cell("YES")
        .unwrap()
        .cell(1)
        .unwrap()
        .cell("SEG")
        .unwrap()
        .cell("1*")
        .unwrap()
        .end_row()
        .unwrap();
}

const WELSPECS_TABLE: &str = concat!(
    "-- WELL     GROUP             BHP    PHASE  DRAIN  INFLOW  OPEN  CROSS  PVT    HYDS  FIP\n",
    "-- NAME     NAME      I   J   DEPTH         RAD    EQUANS  SHUT  FLOW   TABLE  DENS  REG\n",
    "--                            [cm2]                                                     \n",
    "   'Well1'  'Group1'  32  41  123.4  OIL    0.0    STD     OPEN  YES    1      SEG   1*  /\n",
    "    /\n",
);

#[test]
fn two_line_header_with_unit_line_at_spacing_two() {
    let mut writer = TableWriter::with_style(Vec::new(), TableStyle::default().spacing(2));
    writer.keyword("WELSPECS").unwrap();
    writer.header(welspecs_columns()).unwrap();
    welspecs_row(&mut writer);
    writer.end_table().unwrap();

    let deck = deck_of(writer);
    assert_eq!(deck, format!("WELSPECS\n{WELSPECS_TABLE}"));

    // Column widths resolve to max(label, cell) per column
    let header_len = "-- WELL     GROUP             BHP    PHASE  DRAIN  INFLOW  OPEN  CROSS  PVT    HYDS  FIP".len();
    assert_eq!(header_len, 3 + 7 + (8 + 2) + (2 + 2) + (2 + 2) + (5 + 2) + (5 + 2) + (5 + 2) + (6 + 2) + (4 + 2) + (5 + 2) + (5 + 2) + (4 + 2) + (3 + 2));
}

#[test]
fn keyword_may_follow_the_header_declaration() {
    // The keyword is never buffered, so writing it after header() (while
    // the row buffer is still empty) produces the identical table body.
    let mut writer = TableWriter::with_style(Vec::new(), TableStyle::default().spacing(2));
    writer.header(welspecs_columns()).unwrap();
    writer.keyword("WELSPECS").unwrap();
    welspecs_row(&mut writer);
    writer.end_table().unwrap();

    assert_eq!(deck_of(writer), format!("WELSPECS\n{WELSPECS_TABLE}"));
}

#[test]
fn all_empty_labels_suppress_the_header() {
    let mut writer = TableWriter::new(Vec::new());
    writer
        .header(vec![Column::new(""), Column::new(""), Column::new("")])
        .unwrap();
    writer
        .cell("a")
        .unwrap()
        .cell("bb")
        .unwrap()
        .cell("ccc")
        .unwrap()
        .end_row()
        .unwrap();
    writer.end_table().unwrap();

    assert_eq!(
        deck_of(writer),
        concat!("   a     bb     ccc /\n", "    /\n",)
    );
}

#[test]
fn comments_and_rules_print_in_position() {
    let mut writer = TableWriter::new(Vec::new());
    writer
        .header(vec![Column::new("SEG").right(), Column::new("DEPTH").right()])
        .unwrap();
    writer.comment("segment data follows").unwrap();
    writer
        .cell(1)
        .unwrap()
        .cell("2512.75")
        .unwrap()
        .end_row()
        .unwrap();
    writer.horizontal_line('-').unwrap();
    writer
        .cell(2)
        .unwrap()
        .cell("2530.10")
        .unwrap()
        .end_row()
        .unwrap();
    writer.end_table().unwrap();

    assert_eq!(
        deck_of(writer),
        concat!(
            "-- SEG       DEPTH\n",
            "-- segment data follows\n",
            "     1     2512.75 /\n",
            "-- --------------------\n",
            "     2     2530.10 /\n",
            "    /\n",
        )
    );
}

#[test]
fn mixed_alignment_boundaries_fold_spacing_per_column() {
    // Spacing is folded into each column's own pad: a Left column appends
    // it (except the last), a Right column prepends it (except the first).
    // A Left->Right boundary therefore carries both gaps (10 spaces at
    // the default spacing of 5), and a Right->Left boundary carries none
    // (NR abuts TYPE).
    let mut writer = TableWriter::new(Vec::new());
    writer
        .header(vec![
            Column::new("NAME"),
            Column::new("NR").right(),
            Column::new("TYPE"),
        ])
        .unwrap();
    writer
        .cell("'P1'")
        .unwrap()
        .cell(7)
        .unwrap()
        .cell("OIL")
        .unwrap()
        .end_row()
        .unwrap();
    writer
        .cell("'INJ-12'")
        .unwrap()
        .cell(104)
        .unwrap()
        .cell("WATER")
        .unwrap()
        .end_row()
        .unwrap();
    writer.end_table().unwrap();

    assert_eq!(
        deck_of(writer),
        concat!(
            "-- NAME               NRTYPE \n",
            "   'P1'                7OIL   /\n",
            "   'INJ-12'          104WATER /\n",
            "    /\n",
        )
    );
}

#[test]
fn comment_with_no_table_open_writes_immediately() {
    let mut writer = TableWriter::new(Vec::new());
    writer.comment("generated by deckfmt").unwrap();
    writer.header(vec![Column::new("A")]).unwrap();
    writer.cell("x").unwrap().end_row().unwrap();
    writer.end_table().unwrap();

    let deck = deck_of(writer);
    assert!(deck.starts_with("-- generated by deckfmt\n-- A\n"));
}

#[test]
fn optional_comments_can_be_switched_off() {
    let mut writer =
        TableWriter::with_style(Vec::new(), TableStyle::default().optional_comments(false));
    writer.optional_comment("units are metric").unwrap();
    writer.header(vec![Column::new("A")]).unwrap();
    writer.optional_comment("buffered variant").unwrap();
    writer.cell("x").unwrap().end_row().unwrap();
    writer.end_table().unwrap();

    let deck = deck_of(writer);
    assert!(!deck.contains("units are metric"));
    assert!(!deck.contains("buffered variant"));
}

#[test]
fn declaring_a_header_flushes_the_previous_table() {
    let mut writer = TableWriter::new(Vec::new());
    writer.header(vec![Column::new("A")]).unwrap();
    writer.cell(1).unwrap().end_row().unwrap();
    // no end_table: the next header() closes table A first
    writer.header(vec![Column::new("B")]).unwrap();
    writer.cell(2).unwrap().end_row().unwrap();
    writer.end_table().unwrap();

    assert_eq!(
        deck_of(writer),
        concat!(
            "-- A\n",
            "   1 /\n",
            "    /\n",
            "-- B\n",
            "   2 /\n",
            "    /\n",
        )
    );
}

#[test]
fn empty_header_then_end_table_emits_only_the_trailing_line() {
    let mut writer = TableWriter::new(Vec::new());
    writer.header(Vec::new()).unwrap();
    writer.end_table().unwrap();
    assert_eq!(deck_of(writer), "    /\n");
}

#[test]
fn end_table_with_overrides_trailing_text_and_newline() {
    let mut writer = TableWriter::new(Vec::new());
    writer.header(vec![Column::new("A")]).unwrap();
    writer.cell("x").unwrap().end_row().unwrap();
    writer.end_table_with("", false).unwrap();

    assert_eq!(deck_of(writer), concat!("-- A\n", "   x /\n", "   "));
}

#[test]
fn restyled_writer_tightens_later_tables() {
    let mut writer = TableWriter::new(Vec::new());
    writer
        .header(vec![Column::new("P").right(), Column::new("Q").right()])
        .unwrap();
    writer.cell(10).unwrap().cell(20).unwrap().end_row().unwrap();
    writer.end_table().unwrap();

    let mut writer = writer.restyled(TableStyle::default().spacing(2)).unwrap();
    writer
        .header(vec![Column::new("P").right(), Column::new("Q").right()])
        .unwrap();
    writer.cell(10).unwrap().cell(20).unwrap().end_row().unwrap();
    writer.end_table().unwrap();

    assert_eq!(
        deck_of(writer),
        concat!(
            "--  P      Q\n",
            "   10     20 /\n",
            "    /\n",
            "--  P   Q\n",
            "   10  20 /\n",
            "    /\n",
        )
    );
}

#[test]
fn style_values_are_read_at_flush_time() {
    let mut writer = TableWriter::new(Vec::new());
    writer
        .header(vec![Column::new("P").right(), Column::new("Q").right()])
        .unwrap();
    writer.cell(10).unwrap().cell(20).unwrap().end_row().unwrap();
    // rows were appended under spacing 5; the flush below uses spacing 2
    writer.style_mut().column_spacing = 2;
    writer.end_table().unwrap();

    assert_eq!(
        deck_of(writer),
        concat!("--  P   Q\n", "   10  20 /\n", "    /\n",)
    );
}

#[test]
fn writes_through_a_file_sink() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = TableWriter::new(file.reopen().unwrap());
    writer.keyword("WSEGVALV").unwrap();
    writer.header(vec![Column::new("A")]).unwrap();
    writer.cell("x").unwrap().end_row().unwrap();
    writer.end_table().unwrap();
    writer.finish().unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(text, "WSEGVALV\n-- A\n   x /\n    /\n");
}
