use once_cell::sync::Lazy;
use regex::Regex;

/// `== Label ==`; the marker runs on both sides are compared after matching.
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(=+)[ \t]*([^=].*?)[ \t]*(=+)\s*$").unwrap());

const LANGUAGE_LEVEL: usize = 2;
const SUBSECTION_LEVEL: usize = 3;

/// Level-3 headings that never hold definitions.
const NON_DEFINITION_HEADINGS: &[&str] = &[
    "Etymology",
    "Pronunciation",
    "Alternative forms",
    "Synonyms",
    "Antonyms",
    "Derived terms",
    "Related terms",
    "Translations",
    "See also",
    "References",
    "Descendants",
    "Usage notes",
    "Quotations",
];

pub const PRONUNCIATION_HEADING: &str = "Pronunciation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub label: &'a str,
}

/// Lines under one level-3 heading, up to the next heading of any level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub label: &'a str,
    pub lines: Vec<&'a str>,
}

pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let captures = HEADING.captures(line.trim_start())?;
    let open = captures.get(1)?.as_str().len();
    let close = captures.get(3)?.as_str().len();
    if open != close {
        return None;
    }
    Some(Heading {
        level: open,
        label: captures.get(2)?.as_str(),
    })
}

/// Body lines of the `== language_name ==` section, or `None` when the page
/// has no such section.
pub fn language_section<'a>(wikitext: &'a str, language_name: &str) -> Option<Vec<&'a str>> {
    let mut lines = wikitext.lines();
    lines.find(|line| {
        parse_heading(line)
            .is_some_and(|heading| heading.level == LANGUAGE_LEVEL && heading.label == language_name)
    })?;
    Some(
        lines
            .take_while(|line| {
                !parse_heading(line).is_some_and(|heading| heading.level <= LANGUAGE_LEVEL)
            })
            .collect(),
    )
}

/// Every level-3 segment of a language section, in document order.
pub fn subsections<'a>(section: &[&'a str]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut current: Option<Segment<'a>> = None;
    for &line in section {
        match parse_heading(line) {
            Some(heading) => {
                segments.extend(current.take());
                if heading.level == SUBSECTION_LEVEL {
                    current = Some(Segment {
                        label: heading.label,
                        lines: Vec::new(),
                    });
                }
            }
            None => {
                if let Some(segment) = current.as_mut() {
                    segment.lines.push(line);
                }
            }
        }
    }
    segments.extend(current);
    segments
}

pub fn is_definition_heading(label: &str) -> bool {
    !NON_DEFINITION_HEADINGS.contains(&label)
}

/// Segments that may carry definitions, i.e. part-of-speech headings.
pub fn part_of_speech_segments<'a>(section: &[&'a str]) -> Vec<Segment<'a>> {
    subsections(section)
        .into_iter()
        .filter(|segment| is_definition_heading(segment.label))
        .collect()
}
