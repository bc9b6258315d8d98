//! Building ENTRY-keyed registries of parsed records

use std::collections::HashSet;
use std::path::Path;

use kegg_common::{KeggError, ParsedRecord, Registry, Result};
use tracing::{debug, info, instrument};

use crate::config::KeggApiConfig;
use crate::interpret::RecordKind;
use crate::source::{read_flat_file, KeggClient};

/// Build a registry from a flat file or, without one, from the KEGG REST API
///
/// `ids` filters the flat file and is required for remote retrieval. With
/// `verbose` set, the number of acquired records is logged at info level.
/// Any parse or transport error fails the whole call.
#[instrument(skip(ids), fields(ids = ids.map_or(0, HashSet::len)))]
pub async fn build(
    ids: Option<&HashSet<String>>,
    kind: RecordKind,
    file_location: Option<&Path>,
    verbose: bool,
) -> Result<Registry> {
    if let Some(path) = file_location {
        return into_registry(read_flat_file(path, kind, ids)?, verbose);
    }

    let client = KeggClient::new(KeggApiConfig::from_env())?;
    fetch_registry(&client, ids, kind, verbose).await
}

/// Remote-mode registry build over an existing client
pub async fn fetch_registry(
    client: &KeggClient,
    ids: Option<&HashSet<String>>,
    kind: RecordKind,
    verbose: bool,
) -> Result<Registry> {
    let ids = ids.ok_or_else(|| {
        KeggError::Config("Identifiers are required to retrieve records remotely".to_string())
    })?;

    let records = client.fetch(ids, kind).await?;
    into_registry(records, verbose)
}

/// Key records by ENTRY; a later record replaces an earlier one with the same ENTRY
pub fn into_registry(records: Vec<ParsedRecord>, verbose: bool) -> Result<Registry> {
    if verbose {
        info!("{} records acquired", records.len());
    } else {
        debug!(records = records.len(), "Records acquired");
    }

    records
        .into_iter()
        .map(|record| -> Result<(String, ParsedRecord)> {
            let entry = record
                .entry()
                .map(str::to_owned)
                .ok_or_else(|| KeggError::MissingEntry {
                    raw_preview: String::new(),
                })?;
            Ok((entry, record))
        })
        .collect()
}
