//! Engine configuration.
//!
//! Every tag, relation-type name and policy the engine relies on lives here so
//! that resources using other conventions can be handled without code changes.

use crate::error::{LexiconError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for graph mutation, validation and repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Provenance given to lexical entries that carry none
    pub default_provenance: String,

    /// Provenance stamped on relations inserted by the engine
    pub engine_provenance: String,

    /// Gloss languages returned when the caller does not ask for specific ones
    pub gloss_languages: Vec<String>,

    /// Substring of a lexical entry id marking a multi-word expression
    pub multiword_marker: String,

    /// Relation type pointing from a synset to its hypernym
    pub hypernym_type: String,

    /// Other names a document may use for the hypernym relation
    pub hypernym_aliases: Vec<String>,

    /// Relation type pointing from a synset to its hyponyms
    pub hyponym_type: String,

    /// Relation types that may only link synsets of equal part-of-speech
    pub taxonomic_types: Vec<String>,

    /// Accept new adjective synsets that have no hypernym
    pub adjective_exception: bool,

    /// Ili value of a synset still waiting for a global assignment
    pub pending_ili: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            default_provenance: "cdb2.2_Auto".to_string(),
            engine_provenance: "odwn".to_string(),
            gloss_languages: vec!["en".to_string(), "nl".to_string()],
            multiword_marker: "mwe".to_string(),
            hypernym_type: "has_hyperonym".to_string(),
            hypernym_aliases: vec!["hypernym".to_string()],
            hyponym_type: "has_hyponym".to_string(),
            taxonomic_types: vec![
                "has_hyperonym".to_string(),
                "has_hyponym".to_string(),
                "hypernym".to_string(),
                "hyponym".to_string(),
            ],
            adjective_exception: true,
            pending_ili: "in".to_string(),
        }
    }
}

impl LexiconConfig {
    /// Read a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|e| {
            LexiconError::storage(format!("Failed to read config {}", path.display()), Some(e))
        })?;
        Self::from_json_slice(&raw)
    }

    /// Parse a configuration from JSON bytes.
    pub fn from_json_slice(raw: &[u8]) -> Result<Self> {
        serde_json::from_slice(raw)
            .map_err(|e| LexiconError::serialization("Failed to deserialize config", Some(e)))
    }

    /// Set the default provenance tag.
    pub fn with_default_provenance(mut self, tag: impl Into<String>) -> Self {
        self.default_provenance = tag.into();
        self
    }

    /// Set the default gloss languages.
    pub fn with_gloss_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gloss_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the adjective exception of `add_synset`.
    pub fn with_adjective_exception(mut self, enabled: bool) -> Self {
        self.adjective_exception = enabled;
        self
    }

    /// Is `rel_type` restricted to equal part-of-speech endpoints?
    pub fn is_taxonomic(&self, rel_type: &str) -> bool {
        self.taxonomic_types.iter().any(|t| t == rel_type)
    }

    /// Does `rel_type` point from a synset to its hypernym?
    pub fn is_hypernym(&self, rel_type: &str) -> bool {
        rel_type == self.hypernym_type || self.hypernym_aliases.iter().any(|t| t == rel_type)
    }
}
