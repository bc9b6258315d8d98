//! KEGG REACTION records

use super::{FieldInterpreter, FieldRule, RecordKind, SubKeyPolicy};

/// Interpreter for `reaction` database records
///
/// `DEFINITION` is the human-readable equation and is kept as text; only
/// `EQUATION` is split into compound lists.
pub struct ReactionInterpreter;

impl FieldInterpreter for ReactionInterpreter {
    fn kind(&self) -> RecordKind {
        RecordKind::Reaction
    }

    fn rule_for(&self, field: &str) -> FieldRule {
        match field {
            "ENTRY" => FieldRule::FirstToken,
            "NAME" | "DEFINITION" | "REMARK" | "COMMENT" | "ENZYME" => FieldRule::Text,
            "RPAIR" => FieldRule::Tokens,
            "EQUATION" => FieldRule::Equation,
            "RCLASS" | "PATHWAY" | "ORTHOLOGY" | "MODULE" => FieldRule::Pairs,
            "DBLINKS" => FieldRule::SubKeys(SubKeyPolicy::FirstLineOnly),
            "REFERENCE" | "AUTHORS" | "TITLE" | "JOURNAL" => FieldRule::Ignore,
            _ => FieldRule::Unknown,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kegg_common::KeggError;

    const RN_RECORD: &str = "\
ENTRY       R00000                      Reaction
NAME        a fake reaction
DEFINITION  reactant 1 + reactant 2 <=> product 1 + product 2
EQUATION    C00000 + C00001 <=> C00002 + C00003
ENZYME      0.0.0.0
DBLINKS     HSA: hsa00000
";

    #[test]
    fn test_parse_rn() {
        let record = ReactionInterpreter.interpret(RN_RECORD).unwrap();

        assert_eq!(record.len(), 6);
        let (left, right) = record.equation("EQUATION").unwrap();
        assert_eq!(left, vec!["C00000", "C00001"]);
        assert_eq!(right, vec!["C00002", "C00003"]);
        assert_eq!(
            record.text("DEFINITION"),
            Some("reactant 1 + reactant 2 <=> product 1 + product 2")
        );
        assert_eq!(record.text("ENZYME"), Some("0.0.0.0"));
    }

    #[test]
    fn test_pairs_and_rpair() {
        let raw = "\
ENTRY       R00010
RCLASS      RC00049  C00001_C00208
            RC00077  C00031_C00208
ORTHOLOGY   K01194  alpha,alpha-trehalase [EC:3.2.1.28]
RPAIR       RP00001 C00001_C00208 main
";
        let record = ReactionInterpreter.interpret(raw).unwrap();
        let rclass = record.pairs("RCLASS").unwrap();
        assert_eq!(rclass.len(), 2);
        assert_eq!(rclass[1], ("RC00077".to_string(), "C00031_C00208".to_string()));
        assert_eq!(
            record.pairs("ORTHOLOGY").unwrap()[0].1,
            "alpha,alpha-trehalase [EC:3.2.1.28]"
        );
        assert_eq!(record.list("RPAIR").unwrap().len(), 3);
    }

    #[test]
    fn test_dblinks_keep_first_line_only() {
        let raw = "ENTRY       R00010\nDBLINKS     RHEA: 32678\n            GO: 0004555\n";
        let record = ReactionInterpreter.interpret(raw).unwrap();
        let dblinks = record.links("DBLINKS").unwrap();
        assert_eq!(dblinks.len(), 1);
        assert_eq!(dblinks["RHEA"], vec!["32678"]);
    }

    #[test]
    fn test_malformed_equation() {
        let raw = "ENTRY       R99999\nEQUATION    C00001 + C00002\n";
        match ReactionInterpreter.interpret(raw).unwrap_err() {
            KeggError::MalformedEquation { entry, body } => {
                assert_eq!(entry.as_deref(), Some("R99999"));
                assert_eq!(body, "C00001 + C00002");
            },
            other => panic!("unexpected error: {other}"),
        }
    }
}
