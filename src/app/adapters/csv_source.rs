//! CSV input and output for crime log sources
//!
//! Reading is deliberately forgiving: rows may have any number of cells,
//! bytes that are not valid UTF-8 (Latin-1 exports are common) are decoded
//! lossily, and empty cells become nulls. The first record is the header.

use crate::app::models::{ColumnRole, RawRow, SourceTable};
use crate::app::services::pipeline::PipelineResult;
use crate::constants::{CLEANED_FILE_SUFFIX, SOURCE_COLUMN_HEADER};
use crate::{Error, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Read a CSV file into a source table named after the file stem
pub fn read_source(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let name = source_name(path);
    let table = read_source_from_reader(&name, file).map_err(|e| match e {
        Error::CsvParsing {
            message, source, ..
        } => Error::csv_parsing(path.display().to_string(), message, source),
        other => other,
    })?;

    info!(
        "Read {} rows with {} columns from {}",
        table.rows.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Read CSV data from any reader
pub fn read_source_from_reader<R: Read>(name: &str, reader: R) -> Result<SourceTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for (index, result) in csv_reader.byte_records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(name, format!("Malformed record {}", index + 1), Some(e))
        })?;

        if index == 0 {
            headers = record
                .iter()
                .map(|field| decode(field).trim_start_matches('\u{feff}').trim().to_string())
                .collect();
            continue;
        }

        let cells = record
            .iter()
            .map(|field| {
                let value = decode(field);
                if value.trim().is_empty() {
                    None
                } else {
                    Some(value.into_owned())
                }
            })
            .collect();
        rows.push(RawRow::new(index - 1, cells));
    }

    debug!("Parsed {} data rows for source '{}'", rows.len(), name);
    Ok(SourceTable::new(name, headers, rows))
}

fn decode(field: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(field)
}

/// Source name for a path: its file stem
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Output file for an input: `<output_dir>/<stem>_cleaned.csv`
pub fn cleaned_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}{}.csv", source_name(input), CLEANED_FILE_SUFFIX))
}

/// Expand files and directories into the CSV files to process
///
/// Directories are walked recursively for `*.csv` files, skipping files this
/// tool wrote earlier. The result is sorted and free of duplicates.
pub fn discover_sources(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(Error::file_not_found(input.display().to_string()));
        }

        if input.is_file() {
            found.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && is_source_csv(path) {
                found.push(path.to_path_buf());
            }
        }
    }

    found.sort();
    found.dedup();
    debug!("Discovered {} source files", found.len());
    Ok(found)
}

fn is_source_csv(path: &Path) -> bool {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let is_output = path
        .file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(CLEANED_FILE_SUFFIX));
    is_csv && !is_output
}

/// Write one source's records; returns the number of records written
pub fn write_records(path: &Path, result: &PipelineResult) -> Result<usize> {
    let mut writer = create_writer(path)?;

    writer
        .write_record(&result.headers)
        .map_err(|e| write_error(path, e))?;
    for record in &result.records {
        writer
            .write_record(record.values())
            .map_err(|e| write_error(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    debug!("Wrote {} records to {}", result.records.len(), path.display());
    Ok(result.records.len())
}

/// Write several sources into one file under the standard headers
///
/// A leading `Source` column names the source of each record. Records are
/// read by standard header name, so the results should come from a pipeline
/// configured with the standard schema.
pub fn write_combined(path: &Path, results: &[PipelineResult]) -> Result<usize> {
    let mut writer = create_writer(path)?;

    let standard: Vec<&str> = ColumnRole::PRIORITY
        .iter()
        .filter_map(|role| role.standard_header())
        .collect();

    let mut header_row = vec![SOURCE_COLUMN_HEADER];
    header_row.extend(&standard);
    writer
        .write_record(&header_row)
        .map_err(|e| write_error(path, e))?;

    let mut written = 0;
    for result in results {
        for record in &result.records {
            let mut row = vec![result.source.as_str()];
            row.extend(standard.iter().map(|h| record.get(h).unwrap_or_default()));
            writer.write_record(&row).map_err(|e| write_error(path, e))?;
            written += 1;
        }
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    info!(
        "Wrote {} records from {} sources to {}",
        written,
        results.len(),
        path.display()
    );
    Ok(written)
}

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }
    csv::Writer::from_path(path).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, error: csv::Error) -> Error {
    Error::csv_parsing(
        path.display().to_string(),
        "Failed to write CSV output",
        Some(error),
    )
}
