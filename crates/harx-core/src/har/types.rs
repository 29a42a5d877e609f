use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};

/// Top-level HAR object
///
/// Every field is optional: a key that is missing, or present with an
/// unexpected JSON type, resolves to its default value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Har {
    #[serde(default, deserialize_with = "lenient")]
    pub log: Log,
}

/// Main HAR log object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    #[serde(default, deserialize_with = "lenient")]
    pub version: String,
    #[serde(default, deserialize_with = "entry_list")]
    pub entries: Vec<Entry>,
}

/// Individual HTTP transaction entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(rename = "startedDateTime", default, deserialize_with = "lenient")]
    pub started_date_time: String,
    /// Elapsed milliseconds, kept as the recorded JSON number
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub request: Request,
    #[serde(default, deserialize_with = "lenient")]
    pub response: Response,
}

/// HTTP request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
    #[serde(default, deserialize_with = "lenient")]
    pub method: String,
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub headers: Vec<Header>,
    #[serde(rename = "queryString", default, deserialize_with = "lenient")]
    pub query_string: Vec<QueryParam>,
    #[serde(rename = "postData", default, deserialize_with = "lenient")]
    pub post_data: Option<PostData>,
}

/// HTTP response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "lenient")]
    pub status: i64,
    #[serde(rename = "statusText", default, deserialize_with = "lenient")]
    pub status_text: String,
    #[serde(rename = "bodySize", default, deserialize_with = "lenient")]
    pub body_size: i64,
}

/// HTTP header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub value: String,
}

/// Query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParam {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub value: String,
}

/// POST data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostData {
    #[serde(rename = "mimeType", default, deserialize_with = "lenient")]
    pub mime_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl Har {
    /// Interpret an already-decoded JSON document as a HAR.
    ///
    /// Never fails: anything that is not a HAR-shaped object yields an empty
    /// document.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Deserialize a field, falling back to its default when the JSON value has
/// the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize the entry list, skipping items that are not JSON objects.
fn entry_list<'de, D>(deserializer: D) -> Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        tracing::debug!("HAR entries is not an array, treating as empty");
        return Ok(Vec::new());
    };

    let entries = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if !item.is_object() {
                tracing::warn!("Skipping entry {}: not a JSON object", idx);
                return None;
            }
            serde_json::from_value(item).ok()
        })
        .collect();

    Ok(entries)
}
