//! Case-insensitive, multi-valued header collection.
//!
//! Names are stored lowercased; values keep their original case and insertion
//! order. `get` always answers with the first value for a name.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::http::HeaderMap;

/// Read-only view over "the first value for this header name".
///
/// Implemented for our own [`Headers`] and for `http::HeaderMap`, so the
/// extractor can run directly against an incoming request.
pub trait HeaderLookup {
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: HashMap<String, Vec<String>>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value associated with `name` by a single `value`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(canonical(name), vec![value.into()]);
    }

    /// Append `value` after any existing values for `name`.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(canonical(name))
            .or_default()
            .push(value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&canonical(name))
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&canonical(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical(name))
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(&canonical(name))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn canonical(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.add(name.as_ref(), value);
        }
        headers
    }
}

impl From<&HeaderMap> for Headers {
    fn from(map: &HeaderMap) -> Self {
        // HeaderMap::iter yields every value, repeated names included, in insertion order.
        map.iter()
            .map(|(name, value)| {
                (
                    name.as_str(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect()
    }
}

impl HeaderLookup for Headers {
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl HeaderLookup for HeaderMap {
    fn first_value(&self, name: &str) -> Option<Cow<'_, str>> {
        // `HeaderMap::get` already matches names case-insensitively and returns the first value.
        self.get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}
