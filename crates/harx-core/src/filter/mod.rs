use crate::endpoint::UrlParts;
use crate::har::Entry;
use regex::Regex;

/// Filter criteria for HAR entries
///
/// All filter conditions are combined with AND logic - an entry must match
/// ALL specified criteria to be included. An unset criterion matches
/// everything.
#[derive(Debug, Default, Clone)]
pub struct FilterCriteria {
    /// Exact URL authority (host[:port]), case-sensitive
    pub domain: Option<String>,
    /// Exact HTTP method, case-sensitive
    pub method: Option<String>,
    /// HTTP status filter
    pub status: Option<StatusFilter>,
    /// Regex searched for anywhere in the URL path
    pub path_pattern: Option<Regex>,
}

impl FilterCriteria {
    /// Create a new FilterCriteria with default (no filtering)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the status filter; a bare code is an exact match
    pub fn with_status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the path filter from a regular expression
    pub fn with_path_pattern(mut self, pattern: &str) -> crate::Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            crate::Error::InvalidPattern(format!("Invalid path pattern '{}': {}", pattern, e))
        })?;
        self.path_pattern = Some(regex);
        Ok(self)
    }

    /// Check if an entry matches all filter criteria
    pub fn matches(&self, entry: &Entry) -> bool {
        let parts = UrlParts::parse(&entry.request.url);
        self.matches_parts(entry, &parts)
    }

    /// Same as [`matches`](Self::matches) with the request URL already split.
    ///
    /// Checks run cheapest first and stop at the first mismatch.
    pub(crate) fn matches_parts(&self, entry: &Entry, parts: &UrlParts) -> bool {
        self.matches_domain(parts)
            && self.matches_method(entry)
            && self.matches_status(entry)
            && self.matches_path(parts)
    }

    fn matches_domain(&self, parts: &UrlParts) -> bool {
        match &self.domain {
            None => true,
            Some(domain) => parts.domain == *domain,
        }
    }

    fn matches_method(&self, entry: &Entry) -> bool {
        match &self.method {
            None => true,
            Some(method) => entry.request.method == *method,
        }
    }

    fn matches_status(&self, entry: &Entry) -> bool {
        match &self.status {
            None => true,
            Some(filter) => filter.matches(entry.response.status),
        }
    }

    fn matches_path(&self, parts: &UrlParts) -> bool {
        match &self.path_pattern {
            None => true,
            Some(pattern) => pattern.is_match(&parts.path),
        }
    }
}

/// Status filter for HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Exact status code (e.g., 404)
    Exact(i64),
    /// Status code range, inclusive (e.g., 200-299 for "2xx")
    Range(i64, i64),
}

impl StatusFilter {
    /// Parse a status filter pattern
    ///
    /// Supports:
    /// - Exact: "404", "200", "0"
    /// - Range shorthand: "2xx", "4xx", "5xx"
    /// - Explicit range: "200-299", "500-599"
    pub fn parse(pattern: &str) -> crate::Result<Self> {
        let pattern = pattern.trim();

        // Handle "2xx", "4xx", etc.
        if pattern.len() == 3 && pattern.ends_with("xx") {
            if let Some(digit) = pattern.chars().next().and_then(|c| c.to_digit(10)) {
                let start = digit as i64 * 100;
                return Ok(StatusFilter::Range(start, start + 99));
            }
        }

        // Handle explicit range "200-299"
        if let Some((start_str, end_str)) = pattern.split_once('-') {
            let start = start_str.trim().parse::<i64>().map_err(|_| {
                crate::Error::InvalidPattern(format!("Invalid status range start: {}", start_str))
            })?;
            let end = end_str.trim().parse::<i64>().map_err(|_| {
                crate::Error::InvalidPattern(format!("Invalid status range end: {}", end_str))
            })?;
            return Ok(StatusFilter::Range(start, end));
        }

        let code = pattern.parse::<i64>().map_err(|_| {
            crate::Error::InvalidPattern(format!("Invalid status code: {}", pattern))
        })?;
        Ok(StatusFilter::Exact(code))
    }

    /// Check if a status code matches this filter
    pub fn matches(&self, status: i64) -> bool {
        match self {
            StatusFilter::Exact(code) => status == *code,
            StatusFilter::Range(start, end) => status >= *start && status <= *end,
        }
    }
}

impl From<i64> for StatusFilter {
    fn from(code: i64) -> Self {
        StatusFilter::Exact(code)
    }
}
