//! The resolved key-value mapping and its query facade.

use std::collections::HashMap;
use std::fmt;

use regex::RegexBuilder;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormResult;

/// Mapping from field-label text to the ordered values resolved for it.
///
/// Entries keep first-seen order; a repeated label accumulates additional
/// values under the existing entry rather than overwriting, which models
/// forms where a field legitimately repeats (two "Date:" fields, say).
/// Serialization preserves both the entry order and the per-key value order,
/// producing a flat JSON object of label → value array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<FieldEntry>,
    by_key: HashMap<String, usize>,
}

/// One resolved field label with its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    key: String,
    values: Vec<String>,
}

impl FieldEntry {
    /// The field-label text.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The resolved values, in resolution order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl FormFields {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under the given key, creating the entry on first use.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.by_key.get(&key) {
            Some(&slot) => self.entries[slot].values.push(value.into()),
            None => {
                self.by_key.insert(key.clone(), self.entries.len());
                self.entries.push(FieldEntry {
                    key,
                    values: vec![value.into()],
                });
            }
        }
    }

    /// Values for an exact key, if present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.by_key
            .get(key)
            .map(|&slot| self.entries[slot].values.as_slice())
    }

    /// Values for the first key matching a case-insensitive pattern.
    ///
    /// The pattern is a regular expression matched unanchored against every
    /// key in first-seen order, so a plain substring works as-is. A miss is
    /// `Ok(None)`; only an invalid pattern is an error. Multiple matches are
    /// intentionally not disambiguated beyond first-match.
    pub fn search(&self, pattern: &str) -> FormResult<Option<&[String]>> {
        let matcher = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(self
            .entries
            .iter()
            .find(|entry| matcher.is_match(&entry.key))
            .map(|entry| entry.values.as_slice()))
    }

    /// Iterate entries as (key, values) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.values.as_slice()))
    }

    /// Entry list in first-seen order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FormFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = FormFields;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field labels to value arrays")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = FormFields::new();
                while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
                    for value in values {
                        fields.push(key.clone(), value);
                    }
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}
