//! Placeholder substitution for message text.
//!
//! Text is scanned once into literal runs and `{name}` placeholders. Placeholders
//! whose name matches a supplied parameter (ignoring case) are replaced by the
//! value's display form; all other text, including unmatched placeholders and
//! stray braces, is copied through verbatim. Replacement values are never
//! scanned again, so a value containing `{other}` stays literal.

use std::collections::HashMap;

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::{Params, Value};

/// A scanned piece of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'i> {
    Literal(&'i str),
    Placeholder(&'i str),
}

/// Replace `{name}` placeholders in `text` with values from `params`.
///
/// # Example
///
/// ```
/// use msgcode::{Params, substitute};
///
/// let params = Params::new().with("Field", "Email");
/// assert_eq!(substitute("{field} is required.", &params), "Email is required.");
/// assert_eq!(substitute("{other} stays", &params), "{other} stays");
/// ```
pub fn substitute(text: &str, params: &Params) -> String {
    if params.is_empty() || !text.contains('{') {
        return text.to_string();
    }

    let Some(segments) = scan(text) else {
        return text.to_string();
    };

    let mut lookup: HashMap<String, &Value> = HashMap::with_capacity(params.len());
    for (name, value) in params.iter() {
        lookup.entry(name.to_lowercase()).or_insert(value);
    }

    let mut result = String::with_capacity(text.len());
    for segment in segments {
        match segment {
            Segment::Literal(literal) => result.push_str(literal),
            Segment::Placeholder(name) => match lookup.get(&name.to_lowercase()) {
                Some(value) => result.push_str(&value.to_string()),
                None => {
                    result.push('{');
                    result.push_str(name);
                    result.push('}');
                }
            },
        }
    }
    result
}

/// Names of all placeholders in `text`, in order of appearance.
///
/// ```
/// assert_eq!(msgcode::placeholders("{a} and {b}"), vec!["a", "b"]);
/// ```
pub fn placeholders(text: &str) -> Vec<&str> {
    scan(text)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

fn scan(text: &str) -> Option<Vec<Segment<'_>>> {
    let mut remaining = text;
    let segments: Vec<Segment<'_>> = repeat(0.., segment).parse_next(&mut remaining).ok()?;
    remaining.is_empty().then_some(segments)
}

/// Parse a placeholder, a run of plain text, or a lone brace.
fn segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((
        placeholder.map(Segment::Placeholder),
        take_while(1.., |c: char| c != '{').map(Segment::Literal),
        "{".map(Segment::Literal),
    ))
    .parse_next(input)
}

/// Parse `{name}` where the name holds no braces.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('{', take_while(1.., |c: char| c != '{' && c != '}'), '}').parse_next(input)
}
