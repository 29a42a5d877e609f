mod url_parts;

pub use url_parts::UrlParts;

use crate::filter::FilterCriteria;
use crate::har::{Entry, Har, PostData};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::{BTreeMap, HashSet};

/// Path patterns that usually indicate a programmatic API rather than a page
/// or asset load. Joined with `|` into a single regex.
pub const DEFAULT_API_PATTERNS: &[&str] = &[
    r"/api/",
    r"/v\d+/",
    r"/rest/",
    r"/graphql",
    r"/gql",
    r"\.json$",
];

/// Flattened view of one HAR entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointRecord {
    pub url: String,
    pub method: String,
    pub protocol: String,
    pub domain: String,
    pub path: String,
    pub query_params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    /// Request body, parsed as JSON when possible, otherwise the raw text
    pub post_data: Option<Value>,
    pub status_code: i64,
    pub response_size: i64,
    /// Elapsed milliseconds, integer or float as recorded
    pub time: Number,
}

impl EndpointRecord {
    pub fn from_entry(entry: &Entry) -> Self {
        Self::build(entry, UrlParts::parse(&entry.request.url))
    }

    fn build(entry: &Entry, parts: UrlParts) -> Self {
        let request = &entry.request;

        let query_params = flatten(
            request
                .query_string
                .iter()
                .map(|p| (p.name.as_str(), p.value.as_str())),
        );
        let headers = flatten(
            request
                .headers
                .iter()
                .map(|h| (h.name.as_str(), h.value.as_str())),
        );

        Self {
            url: request.url.clone(),
            method: request.method.clone(),
            protocol: parts.protocol,
            domain: parts.domain,
            path: parts.path,
            query_params,
            headers,
            post_data: request.post_data.as_ref().and_then(parse_body),
            status_code: entry.response.status,
            response_size: entry.response.body_size,
            time: entry.time.clone().unwrap_or_else(|| Number::from(0)),
        }
    }
}

/// Later duplicates overwrite earlier ones.
fn flatten<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> BTreeMap<String, String> {
    pairs.fold(BTreeMap::new(), |mut map, (name, value)| {
        map.insert(name.to_string(), value.to_string());
        map
    })
}

/// A body without text is an empty string; a body whose text is JSON `null`
/// counts as no body.
fn parse_body(post_data: &PostData) -> Option<Value> {
    let text = post_data.text.as_deref().unwrap_or_default();
    serde_json::from_str::<Option<Value>>(text)
        .unwrap_or_else(|_| Some(Value::String(text.to_string())))
}

/// Extract endpoint records for every entry matching `criteria`, in document
/// order.
pub fn extract_endpoints(har: &Har, criteria: &FilterCriteria) -> Vec<EndpointRecord> {
    tracing::debug!(
        "Extracting endpoints from {} entries",
        har.log.entries.len()
    );

    let endpoints: Vec<EndpointRecord> = har
        .log
        .entries
        .iter()
        .filter_map(|entry| {
            let parts = UrlParts::parse(&entry.request.url);
            criteria
                .matches_parts(entry, &parts)
                .then(|| EndpointRecord::build(entry, parts))
        })
        .collect();

    tracing::info!(
        "Extracted {} of {} endpoints",
        endpoints.len(),
        har.log.entries.len()
    );

    endpoints
}

/// Extract endpoints whose path looks like an API call.
///
/// `patterns` replaces the pattern set entirely; pass
/// [`DEFAULT_API_PATTERNS`] for the built-in heuristics.
pub fn extract_api_endpoints<S: AsRef<str>>(
    har: &Har,
    patterns: &[S],
) -> crate::Result<Vec<EndpointRecord>> {
    let combined = patterns
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("|");
    tracing::debug!("Using API path pattern: {}", combined);

    let criteria = FilterCriteria::new().with_path_pattern(&combined)?;
    Ok(extract_endpoints(har, &criteria))
}

/// Unique URL authorities across all entries
pub fn list_domains(har: &Har) -> HashSet<String> {
    har.log
        .entries
        .iter()
        .map(|entry| UrlParts::parse(&entry.request.url).domain)
        .collect()
}
