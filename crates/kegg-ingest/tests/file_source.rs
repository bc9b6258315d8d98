//! Flat-file mode against on-disk fixtures

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use kegg_common::KeggError;
use kegg_ingest::{read_flat_file, registry, RecordKind};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/kegg")
        .join(name)
}

fn ids(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_reads_every_record_without_filter() {
    let records = read_flat_file(&fixture("ko.txt"), RecordKind::Ko, None).unwrap();

    let entries: Vec<_> = records.iter().filter_map(|r| r.entry()).collect();
    assert_eq!(entries, vec!["K00001", "K00002", "K00003"]);

    let first = &records[0];
    assert_eq!(first.list("NAME").unwrap(), vec!["E1.1.1.1", "adh"]);
    assert_eq!(first.pairs("PATHWAY").unwrap().len(), 2);
    assert_eq!(
        first.pairs("PATHWAY").unwrap()[1],
        ("map00071".to_string(), "Fatty acid degradation".to_string())
    );

    let genes = first.links("GENES").unwrap();
    assert_eq!(genes["HSA"], vec!["124(ADH1A)", "125(ADH1B)"]);
    assert_eq!(genes["PTR"], vec!["461394(ADH1B)"]);
}

#[test]
fn test_filter_keeps_requested_entries() {
    let wanted = ids(&["K00002", "K09999"]);
    let records = read_flat_file(&fixture("ko.txt"), RecordKind::Ko, Some(&wanted)).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].entry(), Some("K00002"));
}

#[test]
fn test_reads_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ko.txt.gz");

    let text = std::fs::read(fixture("ko.txt")).unwrap();
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(&text).unwrap();
    encoder.finish().unwrap();

    let records = read_flat_file(&path, RecordKind::Ko, None).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[2].links("DBLINKS").unwrap()["GO"],
        vec!["0004412"]
    );
}

#[test]
fn test_trailing_fragment_is_dropped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("compound.txt");
    std::fs::write(
        &path,
        "ENTRY       C00001\nNAME        H2O\n///\nENTRY       C00002\nNAME        ATP\n",
    )
    .unwrap();

    let records = read_flat_file(&path, RecordKind::Compound, None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text("NAME"), Some("H2O"));
}

#[test]
fn test_bad_record_fails_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reaction.txt");
    std::fs::write(
        &path,
        "ENTRY       R00001\nEQUATION    C00001 <=> C00002\n///\n\
         ENTRY       R00002\nEQUATION    C00001 => C00002\n///\n",
    )
    .unwrap();

    let err = read_flat_file(&path, RecordKind::Reaction, None).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, KeggError::MalformedEquation { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = read_flat_file(Path::new("/nonexistent/ko.txt"), RecordKind::Ko, None).unwrap_err();
    assert!(matches!(err, KeggError::Io(_)));
    assert!(err.to_string().contains("/nonexistent/ko.txt"));
}

#[tokio::test]
async fn test_build_from_file_keys_by_entry() {
    let wanted = ids(&["K00001", "K00003"]);
    let registry = registry::build(Some(&wanted), RecordKind::Ko, Some(&fixture("ko.txt")), true)
        .await
        .unwrap();

    assert_eq!(registry.len(), 2);
    for (key, record) in &registry {
        assert_eq!(record.entry(), Some(key.as_str()));
    }
    assert_eq!(
        registry["K00003"].pairs("MODULE").unwrap()[0].0,
        "M00017"
    );
}
