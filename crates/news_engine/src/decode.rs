use news_core::{Article, AUTHOR_FALLBACK};
use serde::Deserialize;
use serde_json::Value;

/// Key read from the first contributor tag to obtain the author's name.
const AUTHOR_KEY: &str = "webTitle";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is empty")]
    EmptyBody,
    #[error("malformed response: {0}")]
    Envelope(String),
    #[error("malformed result at index {index}: {message}")]
    Result { index: usize, message: String },
}

#[derive(Deserialize)]
struct Envelope {
    response: SearchResponse,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    web_title: String,
    section_name: String,
    web_publication_date: String,
    web_url: String,
    #[serde(default)]
    tags: Option<Vec<Value>>,
}

/// Decode a Guardian search response into articles, in `results` order.
///
/// Any malformed element fails the whole body; no partial list is returned.
pub fn decode_articles(body: &str) -> Result<Vec<Article>, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| DecodeError::Envelope(err.to_string()))?;

    envelope
        .response
        .results
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_result(index, value))
        .collect()
}

fn decode_result(index: usize, value: Value) -> Result<Article, DecodeError> {
    let result: SearchResult = serde_json::from_value(value).map_err(|err| DecodeError::Result {
        index,
        message: err.to_string(),
    })?;
    let author = author_of(index, result.tags.as_deref())?;

    Ok(Article::new(
        result.web_title,
        result.section_name,
        author,
        result.web_publication_date,
        result.web_url,
    ))
}

/// Only the first tag is consulted; later tags are never inspected.
fn author_of(index: usize, tags: Option<&[Value]>) -> Result<String, DecodeError> {
    let Some(first) = tags.and_then(|tags| tags.first()) else {
        return Ok(AUTHOR_FALLBACK.to_string());
    };
    let tag = first.as_object().ok_or_else(|| DecodeError::Result {
        index,
        message: "first tag is not an object".to_string(),
    })?;

    match tag.get(AUTHOR_KEY) {
        None => Ok(AUTHOR_FALLBACK.to_string()),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(DecodeError::Result {
            index,
            message: format!("tag {AUTHOR_KEY} is not a string: {other}"),
        }),
    }
}
