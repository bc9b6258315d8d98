//! KEGG Ingest Library
//!
//! Parses KEGG flat-file records into field mappings and builds ENTRY-keyed
//! registries from local flat files or the KEGG REST API.
//!
//! # Supported Record Kinds
//!
//! - **KO**: KEGG Orthology gene families
//! - **Reaction**: biochemical reactions and their equations
//! - **Compound**: metabolites and other small molecules
//! - **Pathway**: pathway maps
//! - **Organism gene**: organism-specific gene entries
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashSet;
//! use kegg_ingest::{registry, RecordKind};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ids: HashSet<String> = ["K00001".to_string(), "K00002".to_string()].into();
//!     let kos = registry::build(Some(&ids), RecordKind::Ko, None, true).await?;
//!     println!("{:?}", kos["K00001"].text("DEFINITION"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod interpret;
pub mod registry;
pub mod source;
pub mod tokenizer;

pub use config::KeggApiConfig;
pub use interpret::{FieldInterpreter, RecordKind};
pub use source::{read_flat_file, KeggClient};
