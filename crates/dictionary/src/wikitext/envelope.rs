//! The JSON wrapper the parse API puts around a page's wikitext.

use serde::Deserialize;

use crate::ExtractionError;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    parse: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
pub struct ParseResult {
    pub title: String,
    #[serde(default)]
    pub pageid: u64,
    pub wikitext: Wikitext,
}

/// `formatversion=1` nests the text under `"*"`, `formatversion=2` inlines it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Wikitext {
    Legacy {
        #[serde(rename = "*")]
        content: String,
    },
    Inline(String),
}

impl Wikitext {
    pub fn as_str(&self) -> &str {
        match self {
            Wikitext::Legacy { content } => content,
            Wikitext::Inline(content) => content,
        }
    }
}

/// Decodes the envelope. An `error` object wins over whatever `parse` holds.
pub fn decode(body: &[u8]) -> Result<ParseResult, ExtractionError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|_| ExtractionError::InvalidData)?;
    if let Some(error) = envelope.error {
        log::debug!("parse api reported {}: {}", error.code, error.info);
        return Err(ExtractionError::WordNotFound);
    }
    let parse = envelope.parse.ok_or(ExtractionError::InvalidData)?;
    serde_json::from_value(parse).map_err(|_| ExtractionError::InvalidData)
}
