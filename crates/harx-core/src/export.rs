use crate::endpoint::EndpointRecord;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Columns written to CSV; nested fields are not exported.
pub const CSV_COLUMNS: [&str; 8] = [
    "url",
    "method",
    "protocol",
    "domain",
    "path",
    "status_code",
    "response_size",
    "time",
];

/// Written instead of a table when there is nothing to export
pub const EMPTY_CSV_PLACEHOLDER: &str = "No endpoints found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "" => Err(Error::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(Error::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Write endpoints to a file, choosing JSON or CSV from its extension.
///
/// The extension is checked before the file is created.
pub fn export_endpoints(endpoints: &[EndpointRecord], path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path)?;
    tracing::debug!("Writing {:?} export to: {}", format, path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Json => write_json(endpoints, &mut writer)?,
        ExportFormat::Csv => write_csv(endpoints, &mut writer)?,
    }
    writer.flush()?;

    tracing::info!(
        "Successfully exported {} endpoints to {}",
        endpoints.len(),
        path.display()
    );

    Ok(())
}

/// Pretty-printed JSON array of full endpoint records
pub fn write_json<W: Write>(endpoints: &[EndpointRecord], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, endpoints)?;
    Ok(())
}

/// CSV with one row per endpoint, or the placeholder text if there are none
pub fn write_csv<W: Write>(endpoints: &[EndpointRecord], mut writer: W) -> Result<()> {
    if endpoints.is_empty() {
        writer.write_all(EMPTY_CSV_PLACEHOLDER.as_bytes())?;
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_COLUMNS)?;
    for endpoint in endpoints {
        let status_code = endpoint.status_code.to_string();
        let response_size = endpoint.response_size.to_string();
        let time = endpoint.time.to_string();
        csv_writer.write_record([
            &endpoint.url,
            &endpoint.method,
            &endpoint.protocol,
            &endpoint.domain,
            &endpoint.path,
            &status_code,
            &response_size,
            &time,
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}
