// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Encoding of formatted timestamps as query-string parameters.
//!
//! [`QueryValues`] is a multimap from parameter names to values, and
//! [`EncodeValues`] is implemented by types that contribute parameters to it.
//! A [`Formatted`] value adds its rendered text under the given key.
//!
//! # Examples
//!
//! ```
//! use datestamp::format::{DateOnly, Kitchen};
//! use datestamp::query::EncodeValues;
//! use datestamp::Formatted;
//!
//! let from: Formatted<DateOnly> = "2024-01-01".parse()?;
//! let at: Formatted<Kitchen> = "3:04PM".parse()?;
//!
//! let mut values = None;
//! from.encode_values("from", &mut values);
//! at.encode_values("at", &mut values);
//!
//! let values = values.unwrap_or_default();
//! assert_eq!(values.encode(), "at=3%3A04PM&from=2024-01-01");
//!
//! # Ok::<(), datestamp::Error>(())
//! ```

use std::collections::BTreeMap;

use pct_str::{PctString, UriReserved};

use crate::Formatted;
use crate::format::Format;

/// Query-string parameters, several values per key.
///
/// Keys are kept sorted; the values of one key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    entries: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    /// Creates an empty set of parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// The first value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// All values of `key` in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameter has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every key and value pair, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key.as_str(), value.as_str())))
    }

    /// Encodes the parameters as `key=value` pairs joined by `&`.
    ///
    /// Keys and values are percent-encoded; reserved URI characters, spaces
    /// included, are escaped.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(PctString::encode(key.chars(), UriReserved::Any).as_str());
            out.push('=');
            out.push_str(PctString::encode(value.chars(), UriReserved::Any).as_str());
        }
        out
    }
}

impl<'a> IntoIterator for &'a QueryValues {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Types that contribute query-string parameters.
pub trait EncodeValues {
    /// Adds the parameters of `self` under `key`.
    ///
    /// `values` is created when it is `None`. Existing values of `key` are
    /// kept and the new ones appended after them.
    fn encode_values(&self, key: &str, values: &mut Option<QueryValues>);
}

impl<F: Format> EncodeValues for Formatted<F> {
    fn encode_values(&self, key: &str, values: &mut Option<QueryValues>) {
        values.get_or_insert_with(QueryValues::new).add(key, self.render());
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{DateOnly, Rfc3339, UnixDate};

    static_assertions::assert_impl_all!(QueryValues: Send, Sync, Clone, Default);

    #[test]
    fn creates_values_when_absent() {
        let stamp: Formatted<DateOnly> = "2024-01-01".parse().unwrap();
        let mut values = None;

        stamp.encode_values("date", &mut values);

        let values = values.unwrap();
        assert_eq!(values.get("date"), Some("2024-01-01"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn repeated_keys_append() {
        let first: Formatted<DateOnly> = "2024-01-01".parse().unwrap();
        let second: Formatted<DateOnly> = "2024-01-02".parse().unwrap();
        let mut values = Some(QueryValues::new());

        first.encode_values("day", &mut values);
        second.encode_values("day", &mut values);

        let values = values.unwrap();
        assert_eq!(values.get_all("day"), ["2024-01-01", "2024-01-02"]);
        assert_eq!(values.get("day"), Some("2024-01-01"));
        assert_eq!(values.encode(), "day=2024-01-01&day=2024-01-02");
    }

    #[test]
    fn existing_values_are_kept() {
        let mut values = QueryValues::new();
        values.add("page", "2");
        let mut values = Some(values);

        let stamp: Formatted<DateOnly> = "2024-01-01".parse().unwrap();
        stamp.encode_values("since", &mut values);

        let values = values.unwrap();
        assert_eq!(values.iter().collect::<Vec<_>>(), [("page", "2"), ("since", "2024-01-01")]);
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let stamp: Formatted<Rfc3339> = "2024-01-01T03:00:00+02:00".parse().unwrap();
        let mut values = None;
        stamp.encode_values("at", &mut values);
        assert_eq!(values.unwrap().encode(), "at=2024-01-01T03%3A00%3A00%2B02%3A00");

        let stamp: Formatted<UnixDate> = "Mon Jan  1 01:00:00 UTC 2024".parse().unwrap();
        let mut values = None;
        stamp.encode_values("date", &mut values);
        assert_eq!(values.unwrap().encode(), "date=Mon%20Jan%20%201%2001%3A00%3A00%20UTC%202024");
    }

    #[test]
    fn empty() {
        let values = QueryValues::new();
        assert!(values.is_empty());
        assert_eq!(values.get("missing"), None);
        assert!(values.get_all("missing").is_empty());
        assert_eq!(values.encode(), "");
        assert_eq!((&values).into_iter().count(), 0);
    }
}
