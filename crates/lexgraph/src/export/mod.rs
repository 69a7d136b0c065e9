//! Export module for publishing the resource in external formats.
//!
//! Supported formats:
//! - **LMF**: the full document, after a clean pass and schema validation
//! - **OMW**: tab-separated lemma table of the Open Multilingual Wordnet
//! - **ILI map**: Turtle `owl:sameAs` links from ili to local synsets
//! - **JSON**: the aggregated statistics report

pub mod ili_map;
pub mod json;
pub mod lmf;
pub mod omw;

pub use ili_map::{export_ili_map, export_ili_map_file};
pub use json::export_stats_json;
pub use lmf::export_lmf;
pub use omw::{export_omw, export_omw_file};

use crate::error::{LexiconError, Result};
use log::info;
use std::path::Path;

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| {
        LexiconError::storage(format!("Failed to write {}", path.display()), Some(e))
    })?;
    info!("Exported {}", path.display());
    Ok(())
}
