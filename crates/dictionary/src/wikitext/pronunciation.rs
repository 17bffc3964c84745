use super::sections::{subsections, PRONUNCIATION_HEADING};
use super::templates::templates_in;

const TRANSCRIPTION_TEMPLATES: &[&str] = &["IPA"];

/// First `{{IPA|lang|transcription}}` under a Pronunciation heading.
///
/// Scans every level-3 heading of the section on its own, independent of the
/// part-of-speech pass that skips Pronunciation.
pub fn phonetic(section: &[&str]) -> Option<String> {
    subsections(section)
        .into_iter()
        .filter(|segment| segment.label == PRONUNCIATION_HEADING)
        .flat_map(|segment| segment.lines)
        .find_map(transcription)
}

fn transcription(line: &str) -> Option<String> {
    templates_in(line)
        .filter(|template| template.is(TRANSCRIPTION_TEMPLATES))
        .find_map(|template| template.arg(1).map(str::to_owned))
}
