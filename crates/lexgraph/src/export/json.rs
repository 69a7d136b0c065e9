//! JSON export of the statistics report.

use crate::error::{LexiconError, Result};
use crate::graph::Wordnet;

/// Serialize [`Wordnet::stats`] as pretty-printed JSON.
pub fn export_stats_json(wordnet: &Wordnet) -> Result<String> {
    serde_json::to_string_pretty(&wordnet.stats())
        .map_err(|e| LexiconError::serialization("Failed to serialize stats", Some(e)))
}
