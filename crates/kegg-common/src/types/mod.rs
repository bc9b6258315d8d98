//! Common types used across the KEGG ingestion crates

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Field name that carries a record's identifier
pub const ENTRY: &str = "ENTRY";

/// Mapping from ENTRY identifier to parsed record
pub type Registry = HashMap<String, ParsedRecord>;

/// Value stored under a single field of a parsed record
///
/// The shape depends on the field and the record kind, e.g. `NAME` is a
/// [`FieldValue::List`] in KO records but a [`FieldValue::Text`] in reactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Scalar string (ENTRY, DEFINITION, FORMULA, ...)
    Text(String),
    /// Ordered sequence of strings (NAME, CLASS, REACTION, ...)
    List(Vec<String>),
    /// Ordered `(id, description)` pairs (PATHWAY, MODULE, COMPOUND, ...)
    Pairs(Vec<(String, String)>),
    /// A single `(id, description)` pair (organism ORTHOLOGY)
    Pair((String, String)),
    /// Sub-key to identifiers (DBLINKS, GENES, MOTIF, ...)
    Links(BTreeMap<String, Vec<String>>),
    /// Reactant and product sides of a chemical equation
    Equation {
        left: Vec<String>,
        right: Vec<String>,
    },
}

/// A single KEGG record as a mapping of field name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ParsedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record identifier, if an ENTRY line has been seen
    pub fn entry(&self) -> Option<&str> {
        self.text(ENTRY)
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(field)
    }

    /// Store a value, replacing whatever the field held before
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    /// Field names in sorted order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field)? {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn list(&self, field: &str) -> Option<&[String]> {
        match self.fields.get(field)? {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn pairs(&self, field: &str) -> Option<&[(String, String)]> {
        match self.fields.get(field)? {
            FieldValue::Pairs(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub fn pair(&self, field: &str) -> Option<(&str, &str)> {
        match self.fields.get(field)? {
            FieldValue::Pair((id, description)) => Some((id, description)),
            _ => None,
        }
    }

    pub fn links(&self, field: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        match self.fields.get(field)? {
            FieldValue::Links(links) => Some(links),
            _ => None,
        }
    }

    /// Reactant and product lists of an equation field
    pub fn equation(&self, field: &str) -> Option<(&[String], &[String])> {
        match self.fields.get(field)? {
            FieldValue::Equation { left, right } => Some((left, right)),
            _ => None,
        }
    }
}
