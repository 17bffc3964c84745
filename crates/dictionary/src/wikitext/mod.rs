//! Extraction of a [`Word`] from a wikitext page returned by the parse API.
//!
//! The pipeline runs in fixed stages:
//! envelope decoding, language section isolation, part-of-speech
//! segmentation, line classification, then cleanup of the captured text.
//! Pronunciation is read by a separate pass over the same section.

use uuid::Uuid;

use crate::{ExtractionError, Meaning, Word};

pub mod cleanup;
mod envelope;
pub mod language;
pub mod lines;
pub mod pronunciation;
pub mod sections;
pub mod templates;

/// Extracts `word` in `language` from a raw parse-API response.
///
/// Pure and synchronous; the only varying output is the freshly generated id.
pub fn extract(body: &[u8], status: u16, word: &str, language: &str) -> Result<Word, ExtractionError> {
    extract_with_id(body, status, word, language, Uuid::new_v4())
}

/// Same as [`extract`] with a caller-chosen id.
pub fn extract_with_id(
    body: &[u8],
    status: u16,
    word: &str,
    language: &str,
    id: Uuid,
) -> Result<Word, ExtractionError> {
    if status != 200 {
        return Err(ExtractionError::InvalidData);
    }
    let page = envelope::decode(body)?;
    let wikitext = page.wikitext.as_str();
    if wikitext.trim().is_empty() {
        return Err(ExtractionError::NoDefinitionFound);
    }

    if !language::is_known(language) {
        log::debug!("unknown language code {language:?}, reading the English section");
    }
    let language_name = language::section_name(language);
    let Some(section) = sections::language_section(wikitext, language_name) else {
        log::debug!(
            "page {:?} ({}) has no {} section",
            page.title,
            page.pageid,
            language_name
        );
        return Err(ExtractionError::NoDefinitionFound);
    };

    let meanings: Vec<Meaning> = sections::part_of_speech_segments(&section)
        .iter()
        .filter_map(|segment| meaning(segment.label, &segment.lines))
        .collect();
    if meanings.is_empty() {
        log::debug!("page {:?} has no definitions under {}", page.title, language_name);
        return Err(ExtractionError::NoDefinitionFound);
    }

    Ok(Word {
        id,
        text: word.to_owned(),
        language: language.to_owned(),
        phonetic: pronunciation::phonetic(&section),
        meanings,
    })
}

fn meaning(part_of_speech: &str, lines: &[&str]) -> Option<Meaning> {
    let found = lines::first_definition(lines)?;
    let definition = cleanup::clean_definition(found.definition);
    if definition.is_empty() {
        return None;
    }
    Some(Meaning {
        part_of_speech: part_of_speech.to_owned(),
        definition,
        example: found.example.and_then(cleanup::clean_example),
    })
}
