//! # deckfmt CLI
//!
//! Converts CSV records into a fixed-width deck keyword table.
//!
//! The first CSV record becomes the header row (use `--no-header` for
//! anonymous positional tables); every following record becomes one data
//! row. Cells pass through as text, so numeric formatting is whatever the
//! CSV already contains.
//!
//! ```bash
//! # CSV from a file, keyword line ahead of the table
//! deckfmt wells.csv --keyword WELSPECS
//!
//! # stdin, right-align columns 2 and 3, tighter spacing
//! cat wells.csv | deckfmt --right 2,3 --spacing 2
//!
//! # table style from a JSON file (fields default individually)
//! deckfmt wells.csv --style deck-style.json
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use deckfmt::{Align, Column, TableStyle, TableWriter};

/// Convert CSV records into a fixed-width deck keyword table.
#[derive(Debug, Parser)]
#[command(name = "deckfmt", version, about)]
struct Args {
    /// CSV input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Keyword line written ahead of the table
    #[arg(short, long)]
    keyword: Option<String>,

    /// Treat the first CSV record as data, not as the header row
    #[arg(long)]
    no_header: bool,

    /// One-based column numbers to right-align
    #[arg(long, value_delimiter = ',')]
    right: Vec<usize>,

    /// Spaces between adjacent columns
    #[arg(long)]
    spacing: Option<usize>,

    /// Maximum data-row width; 0 disables wrapping
    #[arg(long)]
    max_width: Option<usize>,

    /// Table style as a JSON file; command-line flags override its fields
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let style = load_style(&args)?;
    let records = read_records(args.input.as_deref())?;
    if records.is_empty() {
        bail!("input contains no CSV records");
    }

    let deck = render(&args, style, records)?;

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            file.write_all(deck.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => io::stdout().write_all(deck.as_bytes())?,
    }
    Ok(())
}

fn load_style(args: &Args) -> Result<TableStyle> {
    let mut style = match &args.style {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading style file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing style file {}", path.display()))?
        }
        None => TableStyle::default(),
    };
    if let Some(spacing) = args.spacing {
        style.column_spacing = spacing;
    }
    match args.max_width {
        Some(0) => style.max_row_width = None,
        Some(width) => style.max_row_width = Some(width),
        None => {}
    }
    Ok(style)
}

fn read_records(input: Option<&std::path::Path>) -> Result<Vec<Vec<String>>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("CSV record {}", index + 1))?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Ok(records)
}

fn render(args: &Args, style: TableStyle, records: Vec<Vec<String>>) -> Result<String> {
    let mut records = records.into_iter();
    let columns: Vec<Column> = if args.no_header {
        // anonymous positional table: empty labels suppress the header
        Vec::new()
    } else {
        records
            .next()
            .map(|labels| labels.into_iter().map(Column::new).collect())
            .unwrap_or_default()
    };

    let rows: Vec<Vec<String>> = records.collect();
    let column_count = match columns.len() {
        0 => rows.first().map(Vec::len).unwrap_or(0),
        count => count,
    };
    if column_count == 0 {
        bail!("input contains no data rows");
    }

    let mut columns = if columns.is_empty() {
        vec![Column::new(""); column_count]
    } else {
        columns
    };
    for &number in &args.right {
        if number == 0 || number > columns.len() {
            bail!(
                "--right column {} is out of range (table has {} columns)",
                number,
                columns.len()
            );
        }
        columns[number - 1].align = Align::Right;
    }

    let mut writer = TableWriter::with_style(Vec::new(), style);
    if let Some(keyword) = &args.keyword {
        writer.keyword(keyword)?;
    }
    writer.header(columns)?;
    for (index, row) in rows.iter().enumerate() {
        if row.len() != column_count {
            bail!(
                "CSV record {} has {} fields, expected {}",
                index + 2,
                row.len(),
                column_count
            );
        }
        for cell in row {
            writer.cell(cell.as_str())?;
        }
        writer.end_row()?;
    }
    writer.end_table()?;

    let bytes = writer.finish()?;
    String::from_utf8(bytes).context("deck output is not valid UTF-8")
}
