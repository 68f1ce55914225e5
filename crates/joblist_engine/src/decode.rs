use joblist_core::{Item, PageResult};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not a job page: {message}")]
    Malformed { message: String },
    #[error("response body has no `results` array")]
    MissingResults,
}

#[derive(Deserialize)]
struct WirePage {
    #[serde(default)]
    results: Option<Vec<WireJob>>,
}

#[derive(Deserialize)]
struct WireJob {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    primary_details: Option<WireDetails>,
}

#[derive(Deserialize)]
struct WireDetails {
    #[serde(rename = "Place", default)]
    place: Option<String>,
}

/// Decode a `{"results": [...]}` body. An empty `results` array is the normal
/// end-of-data signal; a missing or `null` one is an error.
pub fn decode_page(body: &[u8]) -> Result<PageResult, DecodeError> {
    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    // Derived struct decoding also accepts sequences; only objects are pages.
    if !value.is_object() {
        return Err(DecodeError::Malformed {
            message: "top-level value is not an object".to_string(),
        });
    }
    let page: WirePage = serde_json::from_value(value).map_err(malformed)?;
    let results = page.results.ok_or(DecodeError::MissingResults)?;

    let items = results
        .into_iter()
        .map(|job| {
            Item::new(
                job.id.and_then(id_to_string),
                job.title.unwrap_or_default(),
                job.primary_details.and_then(|details| details.place),
            )
        })
        .collect();
    Ok(PageResult::new(items))
}

fn malformed(err: serde_json::Error) -> DecodeError {
    DecodeError::Malformed {
        message: err.to_string(),
    }
}

fn id_to_string(id: Value) -> Option<String> {
    match id {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
