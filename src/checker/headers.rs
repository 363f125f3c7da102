use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DocumentSource, HeaderExposerError, Result};

/// A header's observed state. An empty value is still `Present`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ObservedValue {
    Absent,
    Present(String),
}

impl ObservedValue {
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
}

/// Response headers with case-insensitive lookup.
///
/// Keeps the first spelling and position of each name. Repeated names are
/// folded into one comma-separated value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedHeaders {
    entries: IndexMap<String, HeaderEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonHeaderValue {
    One(String),
    Many(Vec<String>),
}

impl ObservedHeaders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, folding it into an existing one of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.entry(name.to_ascii_lowercase()) {
            indexmap::map::Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.value.push_str(", ");
                entry.value.push_str(&value);
            }
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(HeaderEntry { name, value });
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> ObservedValue {
        self.get(name)
            .map_or(ObservedValue::Absent, |value| ObservedValue::Present(value.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// Parse a raw header dump such as the output of `curl -sI`.
    ///
    /// Blank lines are skipped. A status line (`HTTP/...`) starts a new
    /// response, so only the last response of a redirect chain is kept.
    /// Lines starting with whitespace continue the previous header's value.
    ///
    /// # Errors
    /// Returns [`HeaderExposerError::HeaderParse`] for a line that is not a
    /// `Name: value` pair.
    pub fn parse_dump(text: &str) -> Result<Self> {
        let mut headers = Self::new();
        let mut last_key: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with("HTTP/") {
                headers = Self::new();
                last_key = None;
                continue;
            }

            let malformed = || HeaderExposerError::HeaderParse {
                line: index + 1,
                content: line.to_string(),
            };

            if line.starts_with([' ', '\t']) {
                let entry = last_key
                    .as_ref()
                    .and_then(|key| headers.entries.get_mut(key))
                    .ok_or_else(malformed)?;
                entry.value.push(' ');
                entry.value.push_str(line.trim());
                continue;
            }

            let (name, value) = line.split_once(':').ok_or_else(malformed)?;
            let name = name.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(malformed());
            }

            headers.insert(name, value.trim());
            last_key = Some(name.to_ascii_lowercase());
        }

        Ok(headers)
    }

    /// Parse a JSON object mapping header names to a string or a list of strings.
    ///
    /// # Errors
    /// Returns [`HeaderExposerError::Parse`] if the text is not such an object.
    pub fn from_json_str(text: &str, origin: &DocumentSource) -> Result<Self> {
        let map: IndexMap<String, JsonHeaderValue> =
            serde_json::from_str(text).map_err(|source| HeaderExposerError::Parse {
                origin: origin.clone(),
                source,
            })?;

        let mut headers = Self::new();
        for (name, value) in map {
            match value {
                JsonHeaderValue::One(value) => headers.insert(name, value),
                JsonHeaderValue::Many(values) => {
                    for value in values {
                        headers.insert(name.as_str(), value);
                    }
                }
            }
        }
        Ok(headers)
    }
}

impl<K, V> FromIterator<(K, V)> for ObservedHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_tests.rs"]
mod tests;
