// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `key=value&key=value` strings. No percent-encoding in either direction.

use core::fmt;
use serde_json::{Map, Value};

const SEPARATORS: [char; 3] = ['?', '&', '='];

/// Ordered key/value pairs with unique keys.
///
/// Re-inserting a key replaces its value but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from a JSON object. Strings are used verbatim, other
    /// values in their JSON form.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .map(|(key, value)| match value {
                Value::String(text) => (key.clone(), text.clone()),
                other => (key.clone(), other.to_string()),
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_options(self.iter()))
    }
}

/// Extracts every `key=value` pair from `url`.
///
/// A key is a non-empty run of characters other than `?`, `&` and `=`,
/// directly followed by `=`. Its value runs up to the next `&` and may itself
/// contain `=` or `?`. Anything that does not form a pair is skipped, so a
/// full URL can be passed as is. The last value of a repeated key wins.
///
/// ```
/// use tidbit_util::parse_query;
///
/// let query = parse_query("https://example.com/search?q=rust&page=2");
/// assert_eq!(query.get("q"), Some("rust"));
/// assert_eq!(query.get("page"), Some("2"));
/// ```
pub fn parse_query(url: &str) -> Query {
    let mut query = Query::new();
    let mut rest = url;

    while !rest.is_empty() {
        let key_end = rest.find(SEPARATORS).unwrap_or(rest.len());
        let key = &rest[..key_end];
        let tail = &rest[key_end..];

        match tail.strip_prefix('=') {
            Some(after) if !key.is_empty() => {
                let value_end = after.find('&').unwrap_or(after.len());
                query.insert(key, &after[..value_end]);
                rest = &after[value_end..];
            }
            // Not a pair: skip the run and the separator that ended it
            _ => {
                let mut chars = tail.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }

    query
}

/// Joins pairs as `key=value` separated by `&`, without a trailing `&`.
///
/// ```
/// use tidbit_util::format_options;
///
/// assert_eq!(format_options([("a", 1), ("b", 2)]), "a=1&b=2");
/// assert_eq!(format_options(Vec::<(&str, &str)>::new()), "");
/// ```
pub fn format_options<I, K, V>(options: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: fmt::Display,
    V: fmt::Display,
{
    options
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
