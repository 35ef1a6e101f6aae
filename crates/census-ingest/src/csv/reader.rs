//! CSV decoding for population estimate files.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{IngestError, Result};
use crate::row::{Dataset, RawRow};
use crate::schema::DatasetSchema;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Decode raw file bytes to text.
///
/// UTF-8 is tried first (a leading BOM is dropped). Census vintage files are
/// published in Latin-1, so invalid UTF-8 falls back to Windows-1252.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Some(text) = encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
    {
        return text;
    }
    tracing::debug!("input is not valid UTF-8, decoding as Windows-1252");
    let (text, _had_errors) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
    text
}

/// Read a CSV file into a [`Dataset`].
pub fn read_dataset(path: &Path, schema: &DatasetSchema) -> Result<Dataset> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    let text = decode_text(&bytes);
    read_dataset_from_str(&text, schema, &path.display().to_string())
}

/// Parse CSV text into a [`Dataset`].
///
/// Header cells are trimmed; every column named in
/// [`DatasetSchema::required_columns`] must be present.
pub fn read_dataset_from_str(text: &str, schema: &DatasetSchema, origin: &str) -> Result<Dataset> {
    let parse_error = |e: ::csv::Error| IngestError::CsvParse {
        dataset: schema.kind,
        origin: origin.to_string(),
        message: e.to_string(),
    };

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            dataset: schema.kind,
            origin: origin.to_string(),
        });
    }

    for column in schema.required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                dataset: schema.kind,
                origin: origin.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        let row = RawRow::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.as_str(), value)),
        );
        rows.push(row);
    }

    tracing::debug!(
        dataset = %schema.kind,
        origin,
        columns = headers.len(),
        rows = rows.len(),
        "decoded CSV dataset"
    );

    Ok(Dataset::new(schema.kind, origin, rows))
}
