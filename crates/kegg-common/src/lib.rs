//! KEGG Common Library
//!
//! Shared types, logging, and error handling for the KEGG ingestion workspace.
//!
//! - **Types**: the parsed record model ([`ParsedRecord`], [`FieldValue`], [`Registry`])
//! - **Error Handling**: [`KeggError`] and the [`Result`] alias
//! - **Logging**: tracing subscriber setup shared by the binaries
//!
//! # Example
//!
//! ```
//! use kegg_common::{FieldValue, ParsedRecord};
//!
//! let mut record = ParsedRecord::new();
//! record.insert("ENTRY", FieldValue::Text("K00001".to_string()));
//! assert_eq!(record.entry(), Some("K00001"));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{KeggError, Result};
pub use types::{FieldValue, ParsedRecord, Registry, ENTRY};
