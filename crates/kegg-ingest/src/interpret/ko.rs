//! KEGG Orthology (KO) records

use super::{FieldInterpreter, FieldRule, RecordKind, SubKeyPolicy};

/// Interpreter for `ko` database records
pub struct KoInterpreter;

impl FieldInterpreter for KoInterpreter {
    fn kind(&self) -> RecordKind {
        RecordKind::Ko
    }

    fn rule_for(&self, field: &str) -> FieldRule {
        match field {
            "ENTRY" => FieldRule::FirstToken,
            "NAME" => FieldRule::CommaList,
            "DEFINITION" => FieldRule::Text,
            "PATHWAY" | "MODULE" | "DISEASE" => FieldRule::Pairs,
            "CLASS" => FieldRule::Lines,
            "BRITE" => FieldRule::Ignore,
            "DBLINKS" | "GENES" => FieldRule::SubKeys(SubKeyPolicy::AllLines),
            "REFERENCE" | "AUTHORS" | "TITLE" | "JOURNAL" | "SEQUENCE" => FieldRule::Ignore,
            _ => FieldRule::Unknown,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kegg_common::KeggError;

    const KO_RECORD: &str = "\
ENTRY       K00000                      KO
NAME        E0.0.0.0
DEFINITION  a fake gene
PATHWAY     ko00000 a fake pathway
DISEASE     H00000 A bad one
DBLINKS     RN: R00000
            COG: COG0000
GENES       HSA: hsa00000
REFERENCE
  AUTHORS   Fake G.
  TITLE     Not Real
  JOURNAL   Nurture (2001)
  SEQUENCE  [fke:FK_0000]";

    #[test]
    fn test_parse_ko() {
        let record = KoInterpreter.interpret(KO_RECORD).unwrap();

        assert_eq!(record.len(), 7);
        assert_eq!(record.entry(), Some("K00000"));
        assert_eq!(record.list("NAME").unwrap(), vec!["E0.0.0.0"]);
        assert_eq!(record.text("DEFINITION"), Some("a fake gene"));

        let dblinks = record.links("DBLINKS").unwrap();
        assert_eq!(dblinks["RN"], vec!["R00000"]);
        assert_eq!(dblinks["COG"], vec!["COG0000"]);
        assert_eq!(record.links("GENES").unwrap()["HSA"], vec!["hsa00000"]);
        assert_eq!(
            record.pairs("DISEASE").unwrap(),
            vec![("H00000".to_string(), "A bad one".to_string())]
        );
    }

    #[test]
    fn test_name_splits_on_comma_space() {
        let raw = "ENTRY       K00001\nNAME        E1.1.1.1, adh\nCLASS       Metabolism; Carbohydrate\n            Metabolism; Lipid";
        let record = KoInterpreter.interpret(raw).unwrap();
        assert_eq!(record.list("NAME").unwrap(), vec!["E1.1.1.1", "adh"]);
        assert_eq!(
            record.list("CLASS").unwrap(),
            vec!["Metabolism; Carbohydrate", "Metabolism; Lipid"]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let raw = "ENTRY       K00001\nNAME        adh\nMOTIF       Pfam: ADH_N";
        match KoInterpreter.interpret(raw).unwrap_err() {
            KeggError::UnknownField {
                field,
                entry,
                partial,
                ..
            } => {
                assert_eq!(field, "MOTIF");
                assert_eq!(entry.as_deref(), Some("K00001"));
                assert_eq!(partial.len(), 2);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lower_case_field_is_rejected() {
        let raw = "ENTRY       K00001\nnotes       something";
        assert!(matches!(
            KoInterpreter.interpret(raw),
            Err(KeggError::UnknownField { .. })
        ));
    }
}
