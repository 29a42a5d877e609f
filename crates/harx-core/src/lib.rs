pub mod endpoint;
pub mod error;
pub mod export;
pub mod filter;
pub mod har;

pub use endpoint::{
    DEFAULT_API_PATTERNS, EndpointRecord, extract_api_endpoints, extract_endpoints, list_domains,
};
pub use error::{Error, Result};
pub use export::{ExportFormat, export_endpoints};
pub use filter::{FilterCriteria, StatusFilter};
