use anyhow::Result;
use clap::Args;
use harx_core::{
    DEFAULT_API_PATTERNS, EndpointRecord, FilterCriteria, StatusFilter, export, export_endpoints,
    extract_api_endpoints, extract_endpoints,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Endpoint selection options
#[derive(Debug, Clone, Default, Args)]
pub struct EndpointFilters {
    /// Filter by domain (exact host[:port])
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Filter by HTTP method (GET, POST, etc.)
    #[arg(short, long)]
    pub method: Option<String>,

    /// Filter by HTTP status code (supports ranges like 2xx, 500-599)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by URL path pattern (regex)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Only show endpoints that look like API calls
    #[arg(
        short,
        long,
        conflicts_with_all = ["domain", "method", "status", "pattern"]
    )]
    pub api_only: bool,

    /// Replace the built-in API path patterns (repeatable)
    #[arg(long = "api-pattern", value_name = "REGEX", requires = "api_only")]
    pub api_patterns: Vec<String>,
}

impl EndpointFilters {
    /// Build filter criteria from the command-line options
    pub fn criteria(&self) -> Result<FilterCriteria> {
        let mut criteria = FilterCriteria::new();

        if let Some(domain) = &self.domain {
            criteria = criteria.with_domain(domain.clone());
        }

        if let Some(method) = &self.method {
            criteria = criteria.with_method(method.clone());
        }

        if let Some(status) = &self.status {
            criteria = criteria.with_status(StatusFilter::parse(status)?);
        }

        if let Some(pattern) = &self.pattern {
            criteria = criteria.with_path_pattern(pattern)?;
        }

        Ok(criteria)
    }
}

/// Read a HAR file and return the endpoints selected by `filters`
pub fn collect_endpoints(file: &Path, filters: &EndpointFilters) -> Result<Vec<EndpointRecord>> {
    tracing::debug!("Reading HAR file: {}", file.display());
    let har = super::load_har(file)?;

    let endpoints = if filters.api_only {
        if filters.api_patterns.is_empty() {
            extract_api_endpoints(&har, DEFAULT_API_PATTERNS)?
        } else {
            extract_api_endpoints(&har, filters.api_patterns.as_slice())?
        }
    } else {
        extract_endpoints(&har, &filters.criteria()?)
    };

    Ok(endpoints)
}

pub fn execute(file: &Path, filters: &EndpointFilters, output: Option<PathBuf>) -> Result<()> {
    let endpoints = collect_endpoints(file, filters)?;

    if let Some(output_path) = output {
        export_endpoints(&endpoints, &output_path)?;
        println!(
            "Exported {} endpoints to {}",
            console::style(endpoints.len()).bold(),
            output_path.display()
        );
    } else {
        tracing::debug!("Writing endpoints to stdout");
        let mut stdout = io::stdout().lock();
        export::write_json(&endpoints, &mut stdout)?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}
