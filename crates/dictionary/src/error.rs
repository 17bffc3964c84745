use thiserror::Error;

/// Reasons a single definition document can fail to produce a [`crate::Word`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    /// Non-200 status, or a body that is not a valid parse envelope.
    #[error("invalid definition response")]
    InvalidData,

    /// The source reported that no page exists for the requested word.
    #[error("word not found")]
    WordNotFound,

    /// The page exists but has no usable definition for the requested language.
    #[error("no definition found for the requested language")]
    NoDefinitionFound,
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not reach the word service: {0}")]
    Connectivity(String),

    #[error("the word service returned invalid data")]
    InvalidData,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("word cache failure: {0}")]
    Cache(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DictionaryError {
    pub fn cache(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Cache(Box::new(error))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Extraction(ExtractionError::WordNotFound | ExtractionError::NoDefinitionFound)
        )
    }
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
