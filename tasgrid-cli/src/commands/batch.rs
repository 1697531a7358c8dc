//! Resolve a CSV file of grid references in parallel.
//!
//! Input rows are `sheet,easting,northing`; lines starting with `#` are
//! skipped. Output is CSV on stdout with one row per input row, in input
//! order. Rows that fail carry the error message in the `error` column.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use tasgrid::grid::{GridError, GridPoint, GridReference, GridResolver};
use tasgrid::sheet::SheetTable;
use tracing::warn;

use crate::error::CliError;

/// Output columns.
const HEADER: [&str; 8] = [
    "sheet",
    "easting",
    "northing",
    "full_easting",
    "full_northing",
    "latitude",
    "longitude",
    "error",
];

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV file with sheet,easting,northing rows ("-" reads stdin)
    pub input: PathBuf,
}

/// One input row before resolution.
enum InputRow {
    Valid(GridReference),
    Rejected { fields: Vec<String>, error: String },
}

/// Run the batch command.
pub fn run(args: BatchArgs, table: &SheetTable) -> Result<(), CliError> {
    let read = if args.input.as_os_str() == "-" {
        read_rows(io::stdin().lock())
    } else {
        File::open(&args.input)
            .map_err(csv::Error::from)
            .and_then(read_rows)
    };
    let rows = read.map_err(|error| CliError::BatchInput {
        path: args.input.clone(),
        error,
    })?;

    let stdout = io::stdout();
    let failed = write_results(&rows, table, stdout.lock())?;

    if failed > 0 {
        warn!(failed, total = rows.len(), "Some grid references could not be resolved");
    }
    Ok(())
}

fn read_rows<R: Read>(reader: R) -> Result<Vec<InputRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = match (record.len(), record.get(0), record.get(1), record.get(2)) {
            (3, Some(sheet), Some(easting), Some(northing)) => {
                match GridReference::parse(sheet, easting, northing) {
                    Ok(reference) => InputRow::Valid(reference),
                    Err(e) => InputRow::Rejected {
                        fields: record.iter().map(str::to_string).collect(),
                        error: e.to_string(),
                    },
                }
            }
            (len, ..) => InputRow::Rejected {
                fields: record.iter().take(3).map(str::to_string).collect(),
                error: format!("expected 3 fields (sheet,easting,northing), found {}", len),
            },
        };
        rows.push(row);
    }
    Ok(rows)
}

/// Resolve all valid rows and write one CSV row per input row.
///
/// Returns the number of rows that failed.
fn write_results<W: Write>(
    rows: &[InputRow],
    table: &SheetTable,
    writer: W,
) -> Result<usize, CliError> {
    let references: Vec<GridReference> = rows
        .iter()
        .filter_map(|row| match row {
            InputRow::Valid(reference) => Some(reference.clone()),
            InputRow::Rejected { .. } => None,
        })
        .collect();

    let mut results = GridResolver::new(table)
        .resolve_all(&references)
        .into_iter();

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(HEADER).map_err(output_error)?;

    let mut failed = 0;
    for row in rows {
        let record = match row {
            InputRow::Valid(reference) => match results.next() {
                Some(Ok(point)) => resolved_record(&point),
                Some(Err(e)) => {
                    failed += 1;
                    failed_record(
                        &[
                            reference.sheet().to_string(),
                            reference.easting_text(),
                            reference.northing_text(),
                        ],
                        &e,
                    )
                }
                None => {
                    return Err(CliError::Output(
                        "fewer results than grid references".to_string(),
                    ))
                }
            },
            InputRow::Rejected { fields, error } => {
                failed += 1;
                padded_record(fields, error)
            }
        };
        csv_writer.write_record(&record).map_err(output_error)?;
    }

    csv_writer.flush().map_err(|e| CliError::Output(e.to_string()))?;
    Ok(failed)
}

fn resolved_record(point: &GridPoint) -> Vec<String> {
    let reference = point.reference();
    vec![
        reference.sheet().to_string(),
        reference.easting_text(),
        reference.northing_text(),
        point.full_easting_string(),
        point.full_northing_string(),
        point.decimal_latitude_string(),
        point.decimal_longitude_string(),
        String::new(),
    ]
}

fn failed_record(fields: &[String], error: &GridError) -> Vec<String> {
    padded_record(fields, &error.to_string())
}

fn padded_record(fields: &[String], error: &str) -> Vec<String> {
    let mut record: Vec<String> = fields.iter().take(3).cloned().collect();
    record.resize(HEADER.len() - 1, String::new());
    record.push(error.to_string());
    record
}

fn output_error(e: csv::Error) -> CliError {
    CliError::Output(e.to_string())
}
