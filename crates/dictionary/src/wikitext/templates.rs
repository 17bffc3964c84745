//! `{{name|arg|key=value}}` templates.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A template with no template nested inside it.
static INNERMOST_TEMPLATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([^{}]*)\}\}").unwrap());
static NUMBERED_PARAMETER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*=").unwrap());
static NAMED_PARAMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-Za-z][A-Za-z0-9_-]*\s*=").unwrap());

/// Highest `N=` slot honoured; larger numbers are dropped.
const MAX_PARAMETERS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    pub name: &'a str,
    /// Everything after the first `|`, untouched.
    pub body: &'a str,
    /// Slot `i` holds parameter `i + 1`, whether written in place or as `N=`.
    positional: Vec<Option<&'a str>>,
}

impl<'a> Template<'a> {
    pub fn parse(inner: &'a str) -> Self {
        let (name, body) = inner.split_once('|').unwrap_or((inner, ""));
        let mut positional = Vec::new();
        if !body.is_empty() {
            let mut next = 1;
            for param in body.split('|') {
                let (number, value) = if let Some(captures) = NUMBERED_PARAMETER.captures(param) {
                    let Ok(number) = captures[1].parse::<usize>() else {
                        continue;
                    };
                    (number, &param[captures.get(0).map_or(0, |m| m.end())..])
                } else if NAMED_PARAMETER.is_match(param) {
                    continue;
                } else {
                    next += 1;
                    (next - 1, param)
                };
                if number == 0 || number > MAX_PARAMETERS {
                    continue;
                }
                if positional.len() < number {
                    positional.resize(number, None);
                }
                positional[number - 1] = Some(value);
            }
        }
        Self {
            name: name.trim(),
            body,
            positional,
        }
    }

    /// Positional arguments in slot order; gaps left by `N=` are skipped.
    pub fn positional(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.positional.iter().flatten().copied()
    }

    /// Positional argument at `index`, trimmed; blank arguments count as absent.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.positional
            .get(index)
            .copied()
            .flatten()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
    }

    /// Name match where the first letter is case-insensitive, as on the wiki.
    pub fn is(&self, names: &[&str]) -> bool {
        names.iter().any(|name| same_name(self.name, name))
    }
}

fn same_name(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    match (a.next(), b.next()) {
        (Some(first_a), Some(first_b)) => {
            first_a.to_lowercase().eq(first_b.to_lowercase()) && a.as_str() == b.as_str()
        }
        (None, None) => true,
        _ => false,
    }
}

/// Templates in `text` that contain no nested template, left to right.
pub fn templates_in(text: &str) -> impl Iterator<Item = Template<'_>> {
    INNERMOST_TEMPLATE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|inner| Template::parse(inner.as_str()))
}

/// Replaces templates innermost first until none are left.
///
/// `render` must not produce braces, so every pass strictly shrinks the text.
pub fn expand(text: &str, render: impl Fn(&Template<'_>) -> String) -> String {
    let mut text = text.to_owned();
    while INNERMOST_TEMPLATE.is_match(&text) {
        text = INNERMOST_TEMPLATE
            .replace_all(&text, |captures: &Captures| {
                let rendered = render(&Template::parse(&captures[1]));
                rendered.replace(['{', '}'], "")
            })
            .into_owned();
    }
    text
}
