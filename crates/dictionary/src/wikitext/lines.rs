#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# text`; the text after the marker.
    Definition(&'a str),
    /// `#: text`; the text after the marker.
    Example(&'a str),
    Other,
}

/// Raw text of the first definition in a segment and the first example after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionLines<'a> {
    pub definition: &'a str,
    pub example: Option<&'a str>,
}

pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_start();
    if let Some(example) = line.strip_prefix("#:") {
        return LineKind::Example(example.trim_start_matches(':'));
    }
    match line.strip_prefix('#') {
        // `#*` quotations and `##` sub-senses are not top-level definitions.
        Some(definition) if !definition.starts_with(|c: char| matches!(c, ':' | '*' | '#')) => {
            LineKind::Definition(definition)
        }
        _ => LineKind::Other,
    }
}

pub fn first_definition<'a>(lines: &[&'a str]) -> Option<DefinitionLines<'a>> {
    let mut definition = None;
    for &line in lines {
        match (definition, classify(line)) {
            (None, LineKind::Definition(text)) => definition = Some(text),
            (Some(definition), LineKind::Example(example)) => {
                return Some(DefinitionLines {
                    definition,
                    example: Some(example),
                });
            }
            _ => {}
        }
    }
    definition.map(|definition| DefinitionLines {
        definition,
        example: None,
    })
}
