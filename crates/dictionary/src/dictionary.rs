use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub id: Uuid,
    pub text: String,
    /// Language code the word was requested in, e.g. `en` or `pt-br`.
    pub language: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<Meaning>,
}

/// The first definition found under a single part-of-speech heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
}

impl Word {
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        phonetic: Option<String>,
        meanings: Vec<Meaning>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language: language.into(),
            phonetic,
            meanings,
        }
    }

    pub fn all_parts_of_speech(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .map(|meaning| &meaning.part_of_speech[..])
    }
}

impl Meaning {
    pub fn new(
        part_of_speech: impl Into<String>,
        definition: impl Into<String>,
        example: Option<String>,
    ) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            example,
        }
    }
}
