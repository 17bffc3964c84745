//! Turns definition and example markup into plain text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::templates::{self, Template};

static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\[\]|]*)(?:\|([^\[\]]*))?\]\]").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"'{2,}").unwrap());
static STRAY_BRACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{|\}\}").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const LABEL_TEMPLATES: &[&str] = &["lb", "lbl", "label"];
const NON_GLOSS_TEMPLATES: &[&str] = &["ng", "ngd", "non-gloss", "non-gloss definition"];
const USAGE_EXAMPLE_TEMPLATES: &[&str] = &["ux", "uxi", "usex"];
/// Source text followed directly by its translation.
const BILINGUAL_EXAMPLE_TEMPLATES: &[&str] = &["zh-x", "ko-usex"];
/// Source text, reading, then translation.
const READING_EXAMPLE_TEMPLATES: &[&str] = &["ja-usex"];

pub fn clean_definition(text: &str) -> String {
    let text = resolve_links(text);
    let text = EMPHASIS.replace_all(&text, "");
    let text = templates::expand(&text, render_definition_template);
    let text = STRAY_BRACES.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_owned()
}

/// Cleans an example line; `None` when nothing readable is left.
pub fn clean_example(text: &str) -> Option<String> {
    let text = resolve_links(text);
    let text = templates::expand(&text, render_example_template);
    let cleaned = clean_definition(&text);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// `[[target]]` to `target`, `[[target|display]]` to `display`.
pub fn resolve_links(text: &str) -> String {
    WIKI_LINK
        .replace_all(text, |captures: &Captures| match captures.get(2) {
            Some(display) => display.as_str().to_owned(),
            None => {
                let target = &captures[1];
                match target.split_once('#') {
                    Some((page, _)) if !page.is_empty() => page.to_owned(),
                    _ => target.to_owned(),
                }
            }
        })
        .into_owned()
}

fn render_definition_template(template: &Template<'_>) -> String {
    if template.is(LABEL_TEMPLATES) {
        render_labels(template)
    } else if template.is(NON_GLOSS_TEMPLATES) {
        template.positional().collect::<Vec<_>>().join("|")
    } else {
        String::new()
    }
}

fn render_example_template(template: &Template<'_>) -> String {
    if template.is(USAGE_EXAMPLE_TEMPLATES) {
        template.arg(1).unwrap_or_default().to_owned()
    } else if template.is(BILINGUAL_EXAMPLE_TEMPLATES) {
        render_bilingual(template.arg(0), template.arg(1))
    } else if template.is(READING_EXAMPLE_TEMPLATES) {
        render_bilingual(template.arg(0), template.arg(2))
    } else {
        render_definition_template(template)
    }
}

fn render_bilingual(source: Option<&str>, translation: Option<&str>) -> String {
    let translation = translation.map(clean_definition).unwrap_or_default();
    match (source, translation.is_empty()) {
        (Some(source), false) => format!("{source} - {translation}"),
        (Some(source), true) => source.to_owned(),
        (None, _) => translation,
    }
}

/// `{{lb|en|US|_|informal|or|dated}}` to `(US informal or dated)`.
///
/// `_` joins its neighbours with a space, `and`/`or` with the word itself.
fn render_labels(template: &Template<'_>) -> String {
    let mut labels: Vec<String> = Vec::new();
    let mut joiner: Option<&str> = None;
    for label in template.positional().skip(1).map(str::trim) {
        match label {
            "" => {}
            "_" => joiner = Some(" "),
            "and" => joiner = Some(" and "),
            "or" => joiner = Some(" or "),
            label => {
                let joined = match (joiner.take(), labels.pop()) {
                    (Some(joiner), Some(last)) => format!("{last}{joiner}{label}"),
                    (_, last) => {
                        labels.extend(last);
                        label.to_owned()
                    }
                };
                labels.push(joined);
            }
        }
    }
    if labels.is_empty() {
        String::new()
    } else {
        format!("({})", labels.join(", "))
    }
}
