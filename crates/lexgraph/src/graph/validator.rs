//! Relation admission check.
//!
//! Every edge the engine inserts or keeps has to pass [`validate`]. The rules
//! are applied in a fixed order and the first violation is reported:
//!
//! 1. the target synset exists,
//! 2. the source synset exists,
//! 3. taxonomic relations connect synsets of equal part-of-speech,
//! 4. source and target differ,
//! 5. the relation type is known.
//!
//! Duplicate edges are not this module's concern; callers check for them.

use super::store::Store;
use super::types::part_of_speech;
use crate::config::LexiconConfig;
use crate::error::{LexiconError, Result};

/// Check whether the edge `(source, rel_type, target)` may exist in `store`.
///
/// # Errors
///
/// - [`LexiconError::NotFound`] for an unknown target, then an unknown source
/// - [`LexiconError::CrossPosViolation`] for a taxonomic type across part-of-speech
/// - [`LexiconError::SelfLoop`] if source and target are the same synset
/// - [`LexiconError::UnknownRelationType`] if the type is not in the known set
pub fn validate(
    store: &Store,
    config: &LexiconConfig,
    source: &str,
    rel_type: &str,
    target: &str,
) -> Result<()> {
    if !store.contains_synset(target) {
        return Err(LexiconError::synset_not_found(target));
    }

    if !store.contains_synset(source) {
        return Err(LexiconError::synset_not_found(source));
    }

    if config.is_taxonomic(rel_type) {
        let source_pos = part_of_speech(source);
        let target_pos = part_of_speech(target);
        if source_pos != target_pos {
            return Err(LexiconError::CrossPosViolation {
                rel_type: rel_type.to_string(),
                source_id: source.to_string(),
                source_pos: source_pos.unwrap_or('?'),
                target_id: target.to_string(),
                target_pos: target_pos.unwrap_or('?'),
            });
        }
    }

    if source == target {
        return Err(LexiconError::SelfLoop {
            rel_type: rel_type.to_string(),
            synset_id: source.to_string(),
        });
    }

    if !store.knows_relation_type(rel_type) {
        return Err(LexiconError::UnknownRelationType {
            rel_type: rel_type.to_string(),
        });
    }

    Ok(())
}
