//! Record sources: local flat files and the KEGG REST `get` operation

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use flate2::read::GzDecoder;
use futures::future::try_join_all;
use kegg_common::{KeggError, ParsedRecord, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::config::KeggApiConfig;
use crate::interpret::RecordKind;
use crate::tokenizer::split_records;

/// Parse every record of a KEGG flat file
///
/// Paths ending in `.gz` are decompressed on the fly. When `ids` is given,
/// only records whose ENTRY is in the set are returned; every record is still
/// interpreted, so a malformed record fails the whole file.
pub fn read_flat_file(
    path: &Path,
    kind: RecordKind,
    ids: Option<&HashSet<String>>,
) -> Result<Vec<ParsedRecord>> {
    info!(path = %path.display(), kind = %kind, "Reading KEGG flat file");

    let text = read_text(path)?;
    let mut records = Vec::new();

    for raw in split_records(&text) {
        let record = kind.interpret(raw)?;
        if let Some(ids) = ids {
            if !record.entry().is_some_and(|entry| ids.contains(entry)) {
                continue;
            }
        }
        records.push(record);
    }

    debug!(path = %path.display(), records = records.len(), "Parsed flat file");
    Ok(records)
}

fn read_text(path: &Path) -> Result<String> {
    let with_path = |e: std::io::Error| {
        KeggError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    };

    let file = File::open(path).map_err(with_path)?;
    let mut text = String::new();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        GzDecoder::new(file)
            .read_to_string(&mut text)
            .map_err(with_path)?;
    } else {
        std::io::BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(with_path)?;
    }

    Ok(text)
}

/// Client for batched retrieval from the KEGG REST API
///
/// One connection pool is shared by every request the client issues, so a
/// client built per batch scopes the pool to that batch.
pub struct KeggClient {
    client: Client,
    config: KeggApiConfig,
}

impl KeggClient {
    pub fn new(config: KeggApiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(KeggClient { client, config })
    }

    pub fn config(&self) -> &KeggApiConfig {
        &self.config
    }

    /// One `get` URL per chunk of `batch_size` identifiers, in iteration order
    pub fn chunk_urls<I, S>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<S> = ids.into_iter().collect();
        ids.chunks(self.config.batch_size)
            .map(|chunk| self.config.get_url(chunk))
            .collect()
    }

    /// Download the response bodies of all chunk requests
    ///
    /// Requests run concurrently; bodies come back in dispatch order. The
    /// first failing request aborts the batch and no bodies are returned.
    pub async fn fetch_raw<I, S>(&self, ids: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = self.chunk_urls(ids);
        debug!(requests = urls.len(), "Dispatching KEGG get requests");

        try_join_all(urls.iter().map(|url| self.download(url))).await
    }

    /// Fetch and interpret the records for a set of identifiers
    pub async fn fetch<I, S>(&self, ids: I, kind: RecordKind) -> Result<Vec<ParsedRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bodies = self.fetch_raw(ids).await?;

        bodies
            .iter()
            .flat_map(|body| split_records(body))
            .map(|raw| kind.interpret(raw))
            .collect()
    }

    async fn download(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "KEGG request failed");
            return Err(KeggError::Transport {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(url = %url, bytes = body.len(), "Downloaded KEGG records");
        Ok(body)
    }
}
