//! kegg-ingest - build KEGG record registries from flat files or the REST API

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kegg_common::logging::{init_logging, LogConfig, LogLevel};
use kegg_ingest::{registry, KeggApiConfig, KeggClient, RecordKind};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kegg-ingest")]
#[command(author, version, about = "Parse KEGG records into JSON registries")]
struct Cli {
    /// Record kind: ko, reaction, compound, pathway, organism
    kind: RecordKind,

    /// KEGG flat file to read instead of querying the REST API (.gz supported)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Identifiers to load
    #[arg(short, long, num_args = 1..)]
    ids: Vec<String>,

    /// File of whitespace separated identifiers
    #[arg(long)]
    ids_file: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// KEGG REST base URL
    #[arg(long, env = "KEGG_BASE_URL")]
    base_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn identifiers(&self) -> Result<Option<HashSet<String>>> {
        let mut ids: HashSet<String> = self.ids.iter().cloned().collect();

        if let Some(path) = &self.ids_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read identifiers from {}", path.display()))?;
            ids.extend(text.split_whitespace().map(str::to_string));
        }

        Ok((!ids.is_empty()).then_some(ids))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("kegg-ingest")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    let ids = cli.identifiers()?;

    let records = match &cli.file {
        Some(path) => registry::build(ids.as_ref(), cli.kind, Some(path), cli.verbose).await?,
        None => {
            if ids.is_none() {
                anyhow::bail!("No identifiers given; pass --ids, --ids-file or --file");
            }
            let mut config = KeggApiConfig::from_env();
            if let Some(base_url) = &cli.base_url {
                config.base_url = base_url.clone();
            }
            let client = KeggClient::new(config)?;
            registry::fetch_registry(&client, ids.as_ref(), cli.kind, cli.verbose).await?
        },
    };

    let json = serde_json::to_string_pretty(&records)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), records = records.len(), "Registry written");
        },
        None => println!("{}", json),
    }

    Ok(())
}
