use super::types::Har;
use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file from the given path
    pub fn from_file(path: &Path) -> Result<Har> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let content = fs::read(path).map_err(|source| Error::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let har = Self::decode(&content, &path.display().to_string())?;

        tracing::info!(
            "Successfully parsed HAR file with {} entries",
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Read and parse a HAR document from any reader (e.g. stdin)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Har> {
        tracing::debug!("Reading HAR from stream");

        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|source| Error::SourceNotFound {
                path: "<stdin>".into(),
                source,
            })?;

        let har = Self::decode(&content, "<stdin>")?;

        tracing::info!(
            "Successfully parsed HAR stream with {} entries",
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Parse a HAR document from a JSON string
    pub fn from_str(content: &str) -> Result<Har> {
        tracing::debug!("Parsing HAR from string");
        Self::decode(content.as_bytes(), "<string>")
    }

    /// Only JSON syntax (including UTF-8 validity) is checked here; a missing
    /// `log` or `entries` key yields an empty document.
    fn decode(content: &[u8], origin: &str) -> Result<Har> {
        let value: Value = serde_json::from_slice(content).map_err(|source| Error::InvalidFormat {
            origin: origin.to_string(),
            source,
        })?;

        Ok(Har::from_value(value))
    }
}
