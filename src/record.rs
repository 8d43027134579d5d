//! Record
//!
//! Labeled categorical records and the schema-checked `Dataset` that the
//! tree builder consumes.
use crate::errors::Id3Error;
use crate::utils::items_to_strings;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A single observation: a binary label and its named categorical attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub label: bool,
    pub attributes: HashMap<String, String>,
}

impl Record {
    pub fn new(label: bool) -> Self {
        Record {
            label,
            attributes: HashMap::new(),
        }
    }

    /// Build a record from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(label: bool, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let attributes = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Record { label, attributes }
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Look up an attribute value.
    ///
    /// * `name` - Attribute name.
    pub fn get_attribute(&self, name: &str) -> Result<&str, Id3Error> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Id3Error::MissingAttribute(name.to_string()))
    }
}

/// Records sharing one schema.
///
/// The schema order is the order in which candidate attributes are scored,
/// so it also decides ties between equally informative attributes.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset, checking every record against `schema` once.
    ///
    /// * `schema` - Attribute names in declaration order, label excluded.
    /// * `records` - Records that must each carry exactly these attributes, all non-empty.
    pub fn new(schema: Vec<String>, records: Vec<Record>) -> Result<Self, Id3Error> {
        for (i, attribute) in schema.iter().enumerate() {
            if schema[..i].contains(attribute) {
                return Err(Id3Error::DuplicateAttribute(attribute.clone()));
            }
        }
        for (row, record) in records.iter().enumerate() {
            let same_keys =
                record.attributes.len() == schema.len() && schema.iter().all(|a| record.attributes.contains_key(a));
            if !same_keys {
                let mut found: Vec<&str> = record.attributes.keys().map(String::as_str).collect();
                found.sort_unstable();
                return Err(Id3Error::SchemaMismatch(row, schema.join(", "), items_to_strings(&found)));
            }
            if let Some(column) = schema.iter().find(|a| record.attributes[a.as_str()].is_empty()) {
                return Err(Id3Error::EmptyValue {
                    row,
                    column: column.clone(),
                });
            }
        }
        Ok(Dataset { schema, records })
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.records.iter().map(|r| r.label).collect()
    }
}
