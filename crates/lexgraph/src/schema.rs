//! Document validation before export.

use crate::error::{LexiconError, Result};
use crate::graph::types::Lexicon;
use std::collections::HashSet;

/// Checks a document against a schema.
///
/// Implementations return the first violation found. The exporter calls this
/// after the clean pass and refuses to write a document that fails.
pub trait SchemaValidator {
    /// Validate a whole document.
    fn validate(&self, lexicon: &Lexicon) -> Result<()>;
}

/// Built-in validator covering what the LMF DTD requires of this document
/// shape: required attributes, unique ids and resolvable id references.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl SchemaValidator for StructuralValidator {
    fn validate(&self, lexicon: &Lexicon) -> Result<()> {
        if lexicon.id.is_empty() {
            return Err(violation("Lexicon has no id"));
        }

        let mut synset_ids = HashSet::with_capacity(lexicon.synsets.len());
        for synset in &lexicon.synsets {
            if synset.id.is_empty() {
                return Err(violation("Synset without id"));
            }
            if synset.ili.is_empty() {
                return Err(violation(format!("Synset {} has no ili", synset.id)));
            }
            if !synset_ids.insert(synset.id.as_str()) {
                return Err(violation(format!("Synset id {} is not unique", synset.id)));
            }
        }

        for synset in &lexicon.synsets {
            for relation in &synset.relations {
                if relation.rel_type.is_empty() {
                    return Err(violation(format!(
                        "SynsetRelation of {} has no relType",
                        synset.id
                    )));
                }
                if !synset_ids.contains(relation.target.as_str()) {
                    return Err(violation(format!(
                        "SynsetRelation {} -{}-> {} points to an unknown synset",
                        synset.id, relation.rel_type, relation.target
                    )));
                }
            }
        }

        let mut sense_ids = HashSet::with_capacity(lexicon.entries.len());
        for entry in &lexicon.entries {
            if entry.id.is_empty() || entry.sense_id.is_empty() {
                return Err(violation(format!(
                    "LexicalEntry '{}' lacks an id or sense id",
                    entry.id
                )));
            }
            if !sense_ids.insert(entry.sense_id.as_str()) {
                return Err(violation(format!(
                    "Sense id {} is not unique",
                    entry.sense_id
                )));
            }
            if let Some(synset_id) = &entry.synset_id {
                if !synset_ids.contains(synset_id.as_str()) {
                    return Err(violation(format!(
                        "Sense {} points to unknown synset {synset_id}",
                        entry.sense_id
                    )));
                }
            }
        }

        Ok(())
    }
}

fn violation(message: impl Into<String>) -> LexiconError {
    LexiconError::Schema {
        message: message.into(),
    }
}
