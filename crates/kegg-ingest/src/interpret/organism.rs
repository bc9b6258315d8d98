//! Organism gene records (`hsa:3098`, `eco:b0002`, ...)

use super::{FieldInterpreter, FieldRule, RecordKind, SubKeyPolicy, UnknownFieldPolicy};

/// Interpreter for organism-specific gene records
///
/// `ORTHOLOGY` is a single `(id, description)` pair, not a sequence.
pub struct OrganismGeneInterpreter;

impl FieldInterpreter for OrganismGeneInterpreter {
    fn kind(&self) -> RecordKind {
        RecordKind::OrganismGene
    }

    fn rule_for(&self, field: &str) -> FieldRule {
        match field {
            "ENTRY" => FieldRule::FirstToken,
            "NAME" => FieldRule::CommaList,
            "DEFINITION" | "POSITION" => FieldRule::Text,
            "ORTHOLOGY" => FieldRule::SinglePair,
            "PATHWAY" | "DISEASE" => FieldRule::Pairs,
            "CLASS" => FieldRule::Lines,
            "DRUG_TARGET" | "MOTIF" | "DBLINKS" | "STRUCTURE" => {
                FieldRule::SubKeys(SubKeyPolicy::FirstLineOnly)
            },
            "AASEQ" | "NTSEQ" => FieldRule::Ignore,
            _ => FieldRule::Unknown,
        }
    }

    fn unknown_field_policy(&self) -> UnknownFieldPolicy {
        UnknownFieldPolicy::SkipNonUpperCase
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const GENE_RECORD: &str = "\
ENTRY       000000            CDS       H.sapiens
NAME        SBS6969, ASBS1234
DEFINITION  a fake guman gene
ORTHOLOGY   K00000 Some fake orthology
PATHWAY     hsa00000  Specific Stuff
            hsa99999  The Place
CLASS       Things; Stuff; Specific Stuff [PATH:hsa00000]
            This; Must Be; The Place [PATH:hsa99999]
POSITION    1p1.1
MOTIF       Pfam: ASDF, JKL1, HYDE
            PROSITE: A_PROSITE_ID ANOTHER_PROSITE_ID
DBLINKS     NCBI-GI: 00000000
            HGNC: 00000
AASEQ       12
            QRHMIRHTGDGPYKCQECGKAFDRPSLFRIHERTHTGEKPHECKQCGKAFISFTNFQSHM
            IRHTGDGPYKCKVCGRAFIFPSYVRKHERTHTGEKPYECNKCGKTFSSSSNVRTHERTHT
NTSEQ       1234
            agaactcacactggtgagaaaccctatgcatgtccggaatgtgggaaagccttcatttct
            ctcccaagtgttcgaagacacatgattaagcacactggagatggaccatataaatgtcag
";

    #[test]
    fn test_parse_organism() {
        let record = OrganismGeneInterpreter.interpret(GENE_RECORD).unwrap();

        assert_eq!(record.len(), 9);
        assert_eq!(record.entry(), Some("000000"));
        assert_eq!(record.pair("ORTHOLOGY"), Some(("K00000", "Some fake orthology")));
        assert_eq!(record.list("NAME").unwrap(), vec!["SBS6969", "ASBS1234"]);
        assert_eq!(
            record.pairs("PATHWAY").unwrap()[0],
            ("hsa00000".to_string(), "Specific Stuff".to_string())
        );
        assert_eq!(record.list("CLASS").unwrap().len(), 2);
    }

    #[test]
    fn test_sub_key_fields_keep_first_line_only() {
        let record = OrganismGeneInterpreter.interpret(GENE_RECORD).unwrap();

        let motif = record.links("MOTIF").unwrap();
        assert_eq!(motif.len(), 1);
        assert_eq!(motif["Pfam"], vec!["ASDF,", "JKL1,", "HYDE"]);

        let dblinks = record.links("DBLINKS").unwrap();
        assert!(dblinks.contains_key("NCBI-GI"));
        assert!(!dblinks.contains_key("HGNC"));
    }

    #[test]
    fn test_repeated_orthology_overwrites() {
        let raw = "ENTRY       b0002\nORTHOLOGY   K12524 thrA\n            K00003 hom\n";
        let record = OrganismGeneInterpreter.interpret(raw).unwrap();
        assert_eq!(record.pair("ORTHOLOGY"), Some(("K00003", "hom")));
    }
}
