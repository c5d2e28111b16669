// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use tidbit_core::debug;

/// Text content of an HTML fragment.
///
/// Tags and `<!-- -->` comments are removed; character references and HTML
/// named entities in the remaining text are decoded one by one. A `<` that
/// does not open a tag, a bare `&`, and any reference that cannot be decoded
/// (for instance `&bogus;`) are kept as written.
///
/// ```
/// use tidbit_util::remove_tags;
///
/// assert_eq!(remove_tags("<p>hello <b>world</b></p>"), "hello world");
/// assert_eq!(remove_tags("fish & chips &lt;3"), "fish & chips <3");
/// ```
pub fn remove_tags(fragment: &str) -> String {
    decode_references(&strip_markup(fragment))
}

fn strip_markup(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let candidate = &rest[open..];

        let close = if let Some(comment) = candidate.strip_prefix("<!--") {
            comment.find("-->").map(|end| 4 + end + 3)
        } else if opens_tag(candidate) {
            tag_len(candidate)
        } else {
            None
        };

        match close {
            Some(len) => rest = &candidate[len..],
            None => {
                text.push('<');
                rest = &candidate[1..];
            }
        }
    }

    text.push_str(rest);
    text
}

fn opens_tag(candidate: &str) -> bool {
    candidate[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

// Length up to and including the closing `>`; quoted attribute values may hold `>`
fn tag_len(candidate: &str) -> Option<usize> {
    let mut quote = None;
    for (index, c) in candidate.char_indices().skip(1) {
        match (quote, c) {
            (Some(open), _) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(index + 1),
            (None, _) => {}
        }
    }
    None
}

fn decode_references(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        match reference_len(candidate) {
            Some(len) => {
                let reference = &candidate[..len];
                match unescape_with(reference, |name: &str| resolve_html5_entity(name)) {
                    Ok(text) => decoded.push_str(&text),
                    Err(err) => {
                        debug!("remove_tags: keeping {} undecoded: {}", reference, err);
                        decoded.push_str(reference);
                    }
                }
                rest = &candidate[len..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

// `&name;` or `&#..;` starting at `candidate`, if it is terminated before any
// whitespace or another `&`
fn reference_len(candidate: &str) -> Option<usize> {
    let body = &candidate[1..];
    let end = body.find(|c: char| c == ';' || c == '&' || c == '<' || c.is_whitespace())?;
    body[end..].starts_with(';').then_some(end + 2)
}
