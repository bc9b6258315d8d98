//! KEGG PATHWAY records

use super::{FieldInterpreter, FieldRule, RecordKind, SubKeyPolicy, UnknownFieldPolicy};

/// Interpreter for `pathway` database records
pub struct PathwayInterpreter;

impl FieldInterpreter for PathwayInterpreter {
    fn kind(&self) -> RecordKind {
        RecordKind::Pathway
    }

    fn rule_for(&self, field: &str) -> FieldRule {
        match field {
            "ENTRY" => FieldRule::FirstToken,
            "NAME" | "DESCRIPTION" | "KO_PATHWAY" => FieldRule::Text,
            "CLASS" => FieldRule::ClassCodes,
            "PATHWAY_MAP" | "MODULE" | "DISEASE" | "DRUG" | "ORTHOLOGY" | "COMPOUND"
            | "REL_PATHWAY" | "REACTION" | "ENZYME" => FieldRule::Pairs,
            "GENE" | "ORGANISM" => FieldRule::Ignore,
            "DBLINKS" => FieldRule::SubKeys(SubKeyPolicy::FirstLineOnly),
            "REFERENCE" | "AUTHORS" | "TITLE" | "JOURNAL" => FieldRule::Ignore,
            _ => FieldRule::Unknown,
        }
    }

    fn unknown_field_policy(&self) -> UnknownFieldPolicy {
        UnknownFieldPolicy::SkipNonUpperCase
    }
}
