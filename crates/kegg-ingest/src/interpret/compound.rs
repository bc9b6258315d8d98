//! KEGG COMPOUND records

use super::{FieldInterpreter, FieldRule, RecordKind, SubKeyPolicy};

/// Interpreter for `compound` database records
pub struct CompoundInterpreter;

impl FieldInterpreter for CompoundInterpreter {
    fn kind(&self) -> RecordKind {
        RecordKind::Compound
    }

    fn rule_for(&self, field: &str) -> FieldRule {
        match field {
            "ENTRY" => FieldRule::FirstToken,
            "NAME" => FieldRule::JoinedText,
            "FORMULA" | "EXACT_MASS" | "MOL_WEIGHT" | "REMARK" | "COMMENT" => FieldRule::Text,
            "REACTION" | "ENZYME" | "SEQUENCE" => FieldRule::AppendTokens,
            "PATHWAY" | "MODULE" => FieldRule::Pairs,
            // Structure and protein sections
            "BRITE" | "ATOM" | "BOND" | "BRACKET" | "ORIGINAL" | "REPEAT" => FieldRule::Ignore,
            "GENE" | "ORGANISM" => FieldRule::Ignore,
            "DBLINKS" => FieldRule::SubKeys(SubKeyPolicy::FirstLineOnly),
            "REFERENCE" | "AUTHORS" | "TITLE" | "JOURNAL" => FieldRule::Ignore,
            _ => FieldRule::Unknown,
        }
    }
}
