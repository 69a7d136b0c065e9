//! Lexical entry index: lookup, insertion with merge, removal and tag repair.

use super::lemma;
use super::store::Store;
use super::types::{LexicalEntry, TagSet};
use crate::config::LexiconConfig;
use crate::error::{LexiconError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Description of a sense to add to a synset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Surface form
    pub lemma: String,
    /// Long part-of-speech (`noun`, `verb`, ...)
    pub pos: String,
    /// Short part-of-speech used in generated ids (`n`, `v`, ...)
    pub short_pos: char,
    /// Target synset
    pub synset_id: String,
    /// Sources of this sense
    pub provenance: TagSet,
    /// Sense-level definition
    pub definition: Option<String>,
    /// Explicit sense id; minted when absent
    pub sense_id: Option<String>,
    /// Explicit sense number; highest existing + 1 when absent
    pub sense_number: Option<u32>,
    /// Annotator that checked the sense
    pub annotator: Option<String>,
}

impl NewEntry {
    /// Start describing a new sense of `lemma` in `synset_id`.
    pub fn new(
        lemma: impl Into<String>,
        pos: impl Into<String>,
        short_pos: char,
        synset_id: impl Into<String>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            pos: pos.into(),
            short_pos,
            synset_id: synset_id.into(),
            provenance: TagSet::new(),
            definition: None,
            sense_id: None,
            sense_number: None,
            annotator: None,
        }
    }

    /// Add a provenance tag.
    pub fn with_provenance(mut self, tag: impl Into<String>) -> Self {
        self.provenance.insert(tag);
        self
    }

    /// Set the definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Use an explicit sense id.
    pub fn with_sense_id(mut self, sense_id: impl Into<String>) -> Self {
        self.sense_id = Some(sense_id.into());
        self
    }

    /// Use an explicit sense number.
    pub fn with_sense_number(mut self, sense_number: u32) -> Self {
        self.sense_number = Some(sense_number);
        self
    }

    /// Record the annotator.
    pub fn with_annotator(mut self, annotator: impl Into<String>) -> Self {
        self.annotator = Some(annotator.into());
        self
    }
}

/// Result of [`add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddEntryOutcome {
    /// A new entry was inserted
    Created {
        /// Entry id (`lemma-pos-senseNumber`)
        entry_id: String,
        /// Sense id, given or minted
        sense_id: String,
    },
    /// The synset already had this lemma; tags were merged into that entry
    Merged {
        /// Sense id of the existing entry
        sense_id: String,
        /// Number of provenance and annotator tags that were new
        tags_added: usize,
    },
}

/// Counts returned by [`remove_by_provenance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRemoval {
    /// Entries whose only source was the tag
    pub removed: usize,
    /// Entries that kept other sources and lost only the tag
    pub stripped: usize,
}

/// Entries in document order, skipping multi-word expressions unless asked.
pub fn enumerate<'a>(
    store: &'a Store,
    multiword_marker: &'a str,
    include_multiword: bool,
) -> impl Iterator<Item = &'a LexicalEntry> + 'a {
    store
        .entries()
        .filter(move |entry| include_multiword || !entry.is_multiword(multiword_marker))
}

/// Look up an entry by entry id.
pub fn find<'a>(store: &'a Store, id: &str) -> Result<&'a LexicalEntry> {
    store
        .entry_by_id(id)
        .ok_or_else(|| LexiconError::entry_not_found(id))
}

/// Look up an entry by sense id.
pub fn find_sense<'a>(store: &'a Store, sense_id: &str) -> Result<&'a LexicalEntry> {
    store
        .entry_by_sense(sense_id)
        .ok_or_else(|| LexiconError::NotFound {
            kind: "sense",
            id: sense_id.to_string(),
        })
}

/// Entries with `lemma`, optionally restricted to a long part-of-speech.
pub fn by_lemma<'a>(
    store: &'a Store,
    lemma: &str,
    pos: Option<&'a str>,
) -> impl Iterator<Item = &'a LexicalEntry> + 'a {
    store
        .senses_of_lemma(lemma)
        .filter(move |entry| pos.map_or(true, |p| entry.pos == p))
}

/// Add a sense, or merge its tags into an existing sense of the same lemma.
///
/// # Errors
///
/// - [`LexiconError::NotFound`] if the synset does not exist
/// - [`LexiconError::DuplicateId`] if an explicit sense id is already taken
pub fn add(store: &mut Store, new: NewEntry) -> Result<AddEntryOutcome> {
    if !store.contains_synset(&new.synset_id) {
        return Err(LexiconError::synset_not_found(&new.synset_id));
    }

    let existing = store
        .members_of(&new.synset_id)
        .find(|entry| entry.lemma == new.lemma && entry.pos == new.pos)
        .map(|entry| entry.sense_id.clone());

    if let Some(sense_id) = existing {
        let entry = store
            .entry_mut(&sense_id)
            .ok_or_else(|| LexiconError::DetachFailed {
                kind: "sense",
                id: sense_id.clone(),
            })?;
        let mut tags_added = entry.provenance.union_with(new.provenance.iter());
        if let Some(annotator) = &new.annotator {
            if entry.annotator.insert(annotator.as_str()) {
                tags_added += 1;
            }
        }
        debug!(
            "Merged {} ({}) into existing sense {sense_id}",
            new.lemma, new.synset_id
        );
        return Ok(AddEntryOutcome::Merged {
            sense_id,
            tags_added,
        });
    }

    let sense_id = match new.sense_id {
        Some(sense_id) if store.contains_sense(&sense_id) => {
            return Err(LexiconError::DuplicateId {
                kind: "sense",
                id: sense_id,
            });
        }
        Some(sense_id) => sense_id,
        None => store.next_sense_id(new.short_pos),
    };

    let sense_number = new
        .sense_number
        .unwrap_or_else(|| lemma::highest_sense_number(store, &new.lemma, &new.pos) + 1);

    let entry_id = format!("{}-{}-{}", new.lemma, new.short_pos, sense_number);

    let mut entry = LexicalEntry::new(
        entry_id.clone(),
        new.lemma,
        new.pos,
        sense_id.clone(),
        new.synset_id,
    )
    .with_sense_number(sense_number);
    entry.provenance = new.provenance;
    entry.definition = new.definition;
    if let Some(annotator) = new.annotator {
        entry.annotator.insert(annotator);
    }

    debug!("Adding entry {entry_id} ({sense_id})");
    store.insert_entry(entry, true)?;

    Ok(AddEntryOutcome::Created { entry_id, sense_id })
}

/// Remove an entry by entry id.
///
/// # Errors
///
/// - [`LexiconError::NotFound`] if the id is not indexed
/// - [`LexiconError::DetachFailed`] if it is indexed but the entry is gone
pub fn remove(store: &mut Store, id: &str) -> Result<LexicalEntry> {
    let sense_id = store
        .sense_of_entry_id(id)
        .ok_or_else(|| LexiconError::entry_not_found(id))?
        .to_string();

    let entry = store
        .remove_entry(&sense_id)
        .ok_or_else(|| LexiconError::DetachFailed {
            kind: "lexical entry",
            id: id.to_string(),
        })?;

    debug!("Removed entry {id} ({sense_id})");
    Ok(entry)
}

/// Drop `tag` from every entry; entries left without any source are removed.
pub fn remove_by_provenance(store: &mut Store, tag: &str) -> ProvenanceRemoval {
    let removed = store
        .remove_entries_where(|entry| {
            entry.provenance.len() == 1 && entry.provenance.contains(tag)
        })
        .len();

    let stripped = store
        .entries_mut()
        .map(|entry| entry.provenance.remove(tag))
        .filter(|stripped| *stripped)
        .count();

    info!("Provenance '{tag}': removed {removed} entries, stripped {stripped}");
    ProvenanceRemoval { removed, stripped }
}

/// Give every entry without provenance the configured default tag.
pub fn default_provenance_pass(store: &mut Store, config: &LexiconConfig) -> usize {
    let mut repaired = 0;
    for entry in store.entries_mut() {
        if entry.provenance.is_empty() {
            entry.provenance.insert(config.default_provenance.as_str());
            repaired += 1;
        }
    }
    if repaired > 0 {
        debug!(
            "Assigned provenance '{}' to {repaired} entries",
            config.default_provenance
        );
    }
    repaired
}
