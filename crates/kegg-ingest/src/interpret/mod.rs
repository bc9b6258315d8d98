//! Field interpreters for KEGG record kinds
//!
//! Every record kind owns a flat table ([`FieldInterpreter::rule_for`]) that
//! maps a field name to one of the shared [`FieldRule`]s. Interpretation walks
//! the logical lines of a record and applies the rule of each line's field.

pub mod compound;
pub mod ko;
pub mod organism;
pub mod pathway;
pub mod reaction;

use std::collections::BTreeMap;

use kegg_common::{FieldValue, KeggError, ParsedRecord, Result};
use serde::Serialize;

use crate::tokenizer::{LogicalLine, LogicalLines};

pub use compound::CompoundInterpreter;
pub use ko::KoInterpreter;
pub use organism::OrganismGeneInterpreter;
pub use pathway::PathwayInterpreter;
pub use reaction::ReactionInterpreter;

/// How a field's body is turned into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// First whitespace-delimited token (ENTRY)
    FirstToken,
    /// Body split on `", "`, replacing earlier values
    CommaList,
    /// Body verbatim, replacing earlier values
    Text,
    /// Body verbatim, repeated lines joined with a single space
    JoinedText,
    /// Whitespace-split body, replacing earlier values
    Tokens,
    /// Whitespace-split body, extending earlier values
    AppendTokens,
    /// `(id, description)` appended to a sequence
    Pairs,
    /// A single `(id, description)`, replacing earlier values
    SinglePair,
    /// Body verbatim appended to a sequence
    Lines,
    /// `"; "`-separated `CODE Name` classes as `(code, name)` pairs
    ClassCodes,
    /// `KEY: id id ...` grouped under the sub-key
    SubKeys(SubKeyPolicy),
    /// `A + B <=> C + D` split into reactant and product lists
    Equation,
    /// Recognized but discarded
    Ignore,
    /// Not part of the record kind's table
    Unknown,
}

/// Which lines of a sub-key field are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubKeyPolicy {
    /// Every line adds (or replaces) its sub-key
    AllLines,
    /// Only the line that creates the mapping is stored; continuation lines
    /// under the same field are dropped. Downstream consumers of reaction,
    /// compound, pathway and gene records were built against this shape.
    FirstLineOnly,
}

/// What happens to a field name missing from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Any unknown field is an error
    Strict,
    /// Names that are not fully upper-case are skipped, others are errors
    SkipNonUpperCase,
}

/// A per-kind dispatch table over the shared rules
pub trait FieldInterpreter: Send + Sync {
    fn kind(&self) -> RecordKind;

    fn rule_for(&self, field: &str) -> FieldRule;

    fn unknown_field_policy(&self) -> UnknownFieldPolicy {
        UnknownFieldPolicy::Strict
    }

    /// Parse one raw record
    fn interpret(&self, raw_record: &str) -> Result<ParsedRecord> {
        let mut record = ParsedRecord::new();

        for line in LogicalLines::new(raw_record) {
            match self.rule_for(line.field) {
                FieldRule::Unknown => {
                    if self.unknown_field_policy() == UnknownFieldPolicy::SkipNonUpperCase
                        && line.field != line.field.to_uppercase()
                    {
                        continue;
                    }
                    let entry = record.entry().map(str::to_owned);
                    return Err(KeggError::UnknownField {
                        field: line.field.to_string(),
                        line: line.raw.to_string(),
                        entry,
                        partial: Box::new(record),
                    });
                },
                rule => apply_rule(&mut record, rule, &line)?,
            }
        }

        if record.entry().is_none() {
            return Err(KeggError::MissingEntry {
                raw_preview: raw_record.trim().chars().take(80).collect(),
            });
        }

        Ok(record)
    }
}

/// The record kinds of the KEGG flat-file databases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Ko,
    Reaction,
    Compound,
    Pathway,
    OrganismGene,
}

impl RecordKind {
    pub fn interpreter(self) -> &'static dyn FieldInterpreter {
        match self {
            RecordKind::Ko => &KoInterpreter,
            RecordKind::Reaction => &ReactionInterpreter,
            RecordKind::Compound => &CompoundInterpreter,
            RecordKind::Pathway => &PathwayInterpreter,
            RecordKind::OrganismGene => &OrganismGeneInterpreter,
        }
    }

    pub fn interpret(self, raw_record: &str) -> Result<ParsedRecord> {
        self.interpreter().interpret(raw_record)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Ko => "ko",
            RecordKind::Reaction => "reaction",
            RecordKind::Compound => "compound",
            RecordKind::Pathway => "pathway",
            RecordKind::OrganismGene => "organism",
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = KeggError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "orthology" => Ok(RecordKind::Ko),
            "reaction" | "rn" => Ok(RecordKind::Reaction),
            "compound" | "cpd" | "co" => Ok(RecordKind::Compound),
            "pathway" | "path" => Ok(RecordKind::Pathway),
            "organism" | "gene" => Ok(RecordKind::OrganismGene),
            _ => Err(KeggError::Config(format!("Unknown record kind: {}", s))),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn apply_rule(record: &mut ParsedRecord, rule: FieldRule, line: &LogicalLine<'_>) -> Result<()> {
    let (field, body) = (line.field, line.body);

    match rule {
        FieldRule::FirstToken => {
            let token = body
                .split_whitespace()
                .next()
                .ok_or_else(|| malformed(line, "empty identifier"))?;
            record.insert(field, FieldValue::Text(token.to_string()));
        },
        FieldRule::CommaList => {
            let values = body.split(", ").map(str::to_string).collect();
            record.insert(field, FieldValue::List(values));
        },
        FieldRule::Text => record.insert(field, FieldValue::Text(body.to_string())),
        FieldRule::JoinedText => match record.get_mut(field) {
            Some(FieldValue::Text(text)) => {
                text.push(' ');
                text.push_str(body);
            },
            _ => record.insert(field, FieldValue::Text(body.to_string())),
        },
        FieldRule::Tokens => record.insert(field, FieldValue::List(tokens(body))),
        FieldRule::AppendTokens => match record.get_mut(field) {
            Some(FieldValue::List(values)) => values.extend(tokens(body)),
            _ => record.insert(field, FieldValue::List(tokens(body))),
        },
        FieldRule::Pairs => {
            let pair = id_description(line)?;
            match record.get_mut(field) {
                Some(FieldValue::Pairs(pairs)) => pairs.push(pair),
                _ => record.insert(field, FieldValue::Pairs(vec![pair])),
            }
        },
        FieldRule::SinglePair => {
            let pair = id_description(line)?;
            record.insert(field, FieldValue::Pair(pair));
        },
        FieldRule::Lines => match record.get_mut(field) {
            Some(FieldValue::List(values)) => values.push(body.to_string()),
            _ => record.insert(field, FieldValue::List(vec![body.to_string()])),
        },
        FieldRule::ClassCodes => {
            let classes = body.split("; ").map(class_code).collect();
            record.insert(field, FieldValue::Pairs(classes));
        },
        FieldRule::SubKeys(policy) => insert_sub_key(record, line, policy)?,
        FieldRule::Equation => {
            let (left, right) = split_equation(body).ok_or_else(|| KeggError::MalformedEquation {
                entry: record.entry().map(str::to_owned),
                body: body.to_string(),
            })?;
            record.insert(field, FieldValue::Equation { left, right });
        },
        FieldRule::Ignore | FieldRule::Unknown => {},
    }

    Ok(())
}

/// Store a `KEY: id id ...` line under `field[KEY]`
///
/// This is the single place where [`SubKeyPolicy`] is honoured.
fn insert_sub_key(
    record: &mut ParsedRecord,
    line: &LogicalLine<'_>,
    policy: SubKeyPolicy,
) -> Result<()> {
    if policy == SubKeyPolicy::FirstLineOnly && record.contains(line.field) {
        return Ok(());
    }

    let mut parts = line.body.split(": ");
    let (Some(key), Some(rest)) = (parts.next(), parts.next()) else {
        return Err(malformed(line, "missing `: ` after sub-key"));
    };

    match record.get_mut(line.field) {
        Some(FieldValue::Links(links)) => {
            links.insert(key.to_string(), tokens(rest));
        },
        _ => {
            let links = BTreeMap::from([(key.to_string(), tokens(rest))]);
            record.insert(line.field, FieldValue::Links(links));
        },
    }
    Ok(())
}

fn tokens(body: &str) -> Vec<String> {
    body.split_whitespace().map(str::to_string).collect()
}

/// `map00010  Glycolysis / Gluconeogenesis` -> ("map00010", "Glycolysis / Gluconeogenesis")
fn id_description(line: &LogicalLine<'_>) -> Result<(String, String)> {
    let mut words = line.body.split_whitespace();
    let id = words
        .next()
        .ok_or_else(|| malformed(line, "missing identifier"))?;
    let description = words.collect::<Vec<_>>().join(" ");
    Ok((id.to_string(), description))
}

/// `09101 Carbohydrate metabolism` -> ("09101", "Carbohydrate metabolism")
fn class_code(segment: &str) -> (String, String) {
    let code = segment.chars().take(5).collect();
    let name = segment.chars().skip(6).collect();
    (code, name)
}

fn split_equation(body: &str) -> Option<(Vec<String>, Vec<String>)> {
    let sides: Vec<&str> = body.split(" <=> ").collect();
    let [left, right] = sides.as_slice() else {
        return None;
    };
    let compounds = |side: &str| -> Vec<String> {
        side.trim().split(" + ").map(str::to_string).collect()
    };
    Some((compounds(*left), compounds(*right)))
}

fn malformed(line: &LogicalLine<'_>, reason: &'static str) -> KeggError {
    KeggError::MalformedLine {
        field: line.field.to_string(),
        line: line.raw.to_string(),
        reason,
    }
}
