//! Backing store: the loaded document plus the indices derived from it.
//!
//! The store is built by one scan over a [`Lexicon`] and afterwards owns every
//! synset and lexical entry. Three indices are required by the rest of the
//! engine:
//!
//! - the synset id map (document order, O(1) lookup),
//! - the set of relation types observed in the document,
//! - the sense id map (document order, O(1) lookup).
//!
//! Secondary indices (entry id, synset members, lemma) are maintained next to
//! them. All index bookkeeping happens in this module; the services in
//! `catalog`, `entries` and `consistency` only go through these primitives.

use super::types::{LexicalEntry, Lexicon, Synset};
use crate::error::{LexiconError, Result};
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, trace, warn};
use std::collections::{BTreeSet, HashMap};

/// Lexicon-level metadata carried through from the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconMeta {
    /// Lexicon id
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Language of the lexical entries
    pub language: String,
    /// Resource version
    pub version: String,
}

/// Owned document plus derived indices.
#[derive(Debug, Clone, Default)]
pub struct Store {
    meta: LexiconMeta,
    synsets: IndexMap<String, Synset>,
    // Keyed by sense id
    entries: IndexMap<String, LexicalEntry>,
    relation_types: BTreeSet<String>,
    // Entry id -> sense ids; ids are not unique in every resource
    entry_ids: HashMap<String, IndexSet<String>>,
    // Synset id -> sense ids of its members
    members: HashMap<String, IndexSet<String>>,
    // Lemma -> sense ids
    lemmas: HashMap<String, IndexSet<String>>,
    sense_counter: u64,
}

impl Store {
    /// Build the store and all indices from a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::DuplicateId`] if two synsets share an id or two
    /// entries share a sense id.
    pub fn build(lexicon: Lexicon) -> Result<Self> {
        let Lexicon {
            id,
            label,
            language,
            version,
            entries,
            synsets,
        } = lexicon;

        let mut store = Self {
            meta: LexiconMeta {
                id,
                label,
                language,
                version,
            },
            ..Self::default()
        };

        for synset in synsets {
            for relation in &synset.relations {
                if !store.relation_types.contains(&relation.rel_type) {
                    store.relation_types.insert(relation.rel_type.clone());
                }
            }
            store.insert_synset(synset)?;
        }

        for entry in entries {
            if let Some(number) = sense_id_number(&entry.sense_id) {
                store.sense_counter = store.sense_counter.max(number + 1);
            }
            store.insert_entry(entry, false)?;
        }

        info!(
            "Indexed lexicon '{}': {} synsets, {} entries, {} relation types",
            store.meta.id,
            store.synsets.len(),
            store.entries.len(),
            store.relation_types.len()
        );

        Ok(store)
    }

    /// Rebuild a document from the store, in the store's current order.
    pub fn to_lexicon(&self) -> Lexicon {
        Lexicon {
            id: self.meta.id.clone(),
            label: self.meta.label.clone(),
            language: self.meta.language.clone(),
            version: self.meta.version.clone(),
            entries: self.entries.values().cloned().collect(),
            synsets: self.synsets.values().cloned().collect(),
        }
    }

    /// Lexicon metadata.
    pub fn meta(&self) -> &LexiconMeta {
        &self.meta
    }

    // ===== Synsets =====

    /// Check if a synset id is known.
    pub fn contains_synset(&self, id: &str) -> bool {
        self.synsets.contains_key(id)
    }

    /// Get a synset by id.
    pub fn synset(&self, id: &str) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// All synsets in document order.
    pub fn synsets(&self) -> impl Iterator<Item = &Synset> {
        self.synsets.values()
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Total number of relations over all synsets.
    pub fn relation_count(&self) -> usize {
        self.synsets.values().map(|s| s.relations.len()).sum()
    }

    pub(crate) fn synset_mut(&mut self, id: &str) -> Option<&mut Synset> {
        self.synsets.get_mut(id)
    }

    pub(crate) fn synsets_mut(&mut self) -> impl Iterator<Item = &mut Synset> {
        self.synsets.values_mut()
    }

    /// Append a synset and register its id.
    pub(crate) fn insert_synset(&mut self, synset: Synset) -> Result<()> {
        if self.synsets.contains_key(&synset.id) {
            return Err(LexiconError::DuplicateId {
                kind: "synset",
                id: synset.id,
            });
        }
        trace!("Registering synset {}", synset.id);
        self.synsets.insert(synset.id.clone(), synset);
        Ok(())
    }

    /// Unregister a synset id and hand back the node.
    pub(crate) fn remove_synset(&mut self, id: &str) -> Option<Synset> {
        let removed = self.synsets.shift_remove(id);
        if removed.is_some() {
            trace!("Unregistered synset {id}");
        }
        removed
    }

    // ===== Relation types =====

    /// Check if a relation type was observed in (or registered with) the store.
    pub fn knows_relation_type(&self, rel_type: &str) -> bool {
        self.relation_types.contains(rel_type)
    }

    /// All known relation types, sorted.
    pub fn relation_types(&self) -> impl Iterator<Item = &str> {
        self.relation_types.iter().map(String::as_str)
    }

    pub(crate) fn register_relation_type(&mut self, rel_type: &str) -> bool {
        if self.relation_types.contains(rel_type) {
            return false;
        }
        debug!("Registering relation type {rel_type}");
        self.relation_types.insert(rel_type.to_string())
    }

    // ===== Lexical entries =====

    /// Check if a sense id is known.
    pub fn contains_sense(&self, sense_id: &str) -> bool {
        self.entries.contains_key(sense_id)
    }

    /// Get an entry by sense id.
    pub fn entry_by_sense(&self, sense_id: &str) -> Option<&LexicalEntry> {
        self.entries.get(sense_id)
    }

    /// Get an entry by entry id.
    ///
    /// When several entries share the id, the one indexed first is returned.
    pub fn entry_by_id(&self, id: &str) -> Option<&LexicalEntry> {
        self.sense_of_entry_id(id)
            .and_then(|sense_id| self.entries.get(sense_id))
    }

    /// Number of entries indexed under an entry id.
    pub fn entries_with_id(&self, id: &str) -> usize {
        self.entry_ids.get(id).map_or(0, IndexSet::len)
    }

    /// First sense id indexed under an entry id.
    pub(crate) fn sense_of_entry_id(&self, id: &str) -> Option<&str> {
        self.entry_ids
            .get(id)
            .and_then(|senses| senses.first())
            .map(String::as_str)
    }

    /// All entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.entries.values()
    }

    /// Number of entries, multi-word expressions included.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries attached to a synset.
    pub fn members_of<'a>(&'a self, synset_id: &str) -> impl Iterator<Item = &'a LexicalEntry> {
        self.members
            .get(synset_id)
            .into_iter()
            .flat_map(|senses| senses.iter())
            .filter_map(move |sense_id| self.entries.get(sense_id))
    }

    /// Check if any entry references the synset.
    pub fn has_members(&self, synset_id: &str) -> bool {
        self.members
            .get(synset_id)
            .is_some_and(|senses| !senses.is_empty())
    }

    /// Entries with the given lemma.
    pub fn senses_of_lemma<'a>(&'a self, lemma: &str) -> impl Iterator<Item = &'a LexicalEntry> {
        self.lemmas
            .get(lemma)
            .into_iter()
            .flat_map(|senses| senses.iter())
            .filter_map(move |sense_id| self.entries.get(sense_id))
    }

    /// Mutable access to an entry.
    ///
    /// Only the tag sets and the definition may be changed through this
    /// reference; ids, lemma and synset are indexed.
    pub(crate) fn entry_mut(&mut self, sense_id: &str) -> Option<&mut LexicalEntry> {
        self.entries.get_mut(sense_id)
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut LexicalEntry> {
        self.entries.values_mut()
    }

    /// Insert an entry, at the head of the entry list when `at_head` is set.
    pub(crate) fn insert_entry(&mut self, entry: LexicalEntry, at_head: bool) -> Result<()> {
        if self.entries.contains_key(&entry.sense_id) {
            return Err(LexiconError::DuplicateId {
                kind: "sense",
                id: entry.sense_id,
            });
        }
        self.index_entry(&entry);
        let sense_id = entry.sense_id.clone();
        if at_head {
            self.entries.shift_insert(0, sense_id, entry);
        } else {
            self.entries.insert(sense_id, entry);
        }
        Ok(())
    }

    /// Remove an entry by sense id and drop it from every index.
    pub(crate) fn remove_entry(&mut self, sense_id: &str) -> Option<LexicalEntry> {
        let entry = self.entries.shift_remove(sense_id)?;
        self.unindex_entry(&entry);
        Some(entry)
    }

    /// Remove every entry for which `remove` returns true, in one pass.
    pub(crate) fn remove_entries_where<F>(&mut self, mut remove: F) -> Vec<LexicalEntry>
    where
        F: FnMut(&LexicalEntry) -> bool,
    {
        let mut removed = Vec::new();
        self.entries.retain(|_, entry| {
            if remove(entry) {
                removed.push(entry.clone());
                false
            } else {
                true
            }
        });
        for entry in &removed {
            self.unindex_entry(entry);
        }
        removed
    }

    /// Mint a sense id that is not yet known.
    pub(crate) fn next_sense_id(&mut self, short_pos: char) -> String {
        loop {
            let candidate = format!("o_{short_pos}-{:09}", self.sense_counter);
            self.sense_counter += 1;
            if !self.entries.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn index_entry(&mut self, entry: &LexicalEntry) {
        let senses = self.entry_ids.entry(entry.id.clone()).or_default();
        if !senses.is_empty() {
            warn!(
                "Entry id {} is shared by {} senses",
                entry.id,
                senses.len() + 1
            );
        }
        senses.insert(entry.sense_id.clone());
        if let Some(synset_id) = &entry.synset_id {
            self.members
                .entry(synset_id.clone())
                .or_default()
                .insert(entry.sense_id.clone());
        }
        self.lemmas
            .entry(entry.lemma.clone())
            .or_default()
            .insert(entry.sense_id.clone());
    }

    fn unindex_entry(&mut self, entry: &LexicalEntry) {
        if let Some(senses) = self.entry_ids.get_mut(&entry.id) {
            senses.shift_remove(&entry.sense_id);
            if senses.is_empty() {
                self.entry_ids.remove(&entry.id);
            }
        }
        if let Some(synset_id) = &entry.synset_id {
            if let Some(senses) = self.members.get_mut(synset_id) {
                senses.shift_remove(&entry.sense_id);
                if senses.is_empty() {
                    self.members.remove(synset_id);
                }
            }
        }
        if let Some(senses) = self.lemmas.get_mut(&entry.lemma) {
            senses.shift_remove(&entry.sense_id);
            if senses.is_empty() {
                self.lemmas.remove(&entry.lemma);
            }
        }
    }
}

/// Numeric part of a sense id such as `o_n-106739250`.
fn sense_id_number(sense_id: &str) -> Option<u64> {
    let (_, digits) = sense_id.rsplit_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
