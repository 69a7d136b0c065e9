//! Lemma index: sense counts, frequency tables and synonym lookup.

use super::store::Store;
use super::types::LexicalEntry;
use log::trace;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Lemma → number of entries, optionally restricted to a long part-of-speech.
pub fn lemma_frequencies(store: &Store, pos: Option<&str>) -> BTreeMap<String, usize> {
    let mut frequencies = BTreeMap::new();
    for entry in store.entries() {
        if pos.map_or(true, |p| entry.pos == p) {
            *frequencies.entry(entry.lemma.clone()).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Senses of `lemma` with part-of-speech `pos`, in index order.
pub fn senses_of<'a>(store: &'a Store, lemma: &str, pos: &str) -> Vec<&'a LexicalEntry> {
    store
        .senses_of_lemma(lemma)
        .filter(|entry| entry.pos == pos)
        .collect()
}

/// Number of senses of `lemma` with part-of-speech `pos`.
pub fn num_senses(store: &Store, lemma: &str, pos: &str) -> usize {
    store
        .senses_of_lemma(lemma)
        .filter(|entry| entry.pos == pos)
        .count()
}

/// Highest sense number in use for `lemma` and `pos`, 0 when there is none.
pub fn highest_sense_number(store: &Store, lemma: &str, pos: &str) -> u32 {
    store
        .senses_of_lemma(lemma)
        .filter(|entry| entry.pos == pos)
        .map(|entry| entry.sense_number)
        .max()
        .unwrap_or(0)
}

/// Two-way lemma/synset membership table used for synonym lookup.
///
/// Built from a snapshot of the store; the owner rebuilds it after any
/// change to lexical entries.
#[derive(Debug, Clone, Default)]
pub struct SynonymCache {
    synset_lemmas: HashMap<String, BTreeSet<String>>,
    lemma_synsets: HashMap<String, BTreeSet<String>>,
}

impl SynonymCache {
    /// Scan every attached entry of `store`.
    pub fn build(store: &Store) -> Self {
        let mut cache = Self::default();
        for entry in store.entries() {
            let Some(synset_id) = &entry.synset_id else {
                continue;
            };
            if entry.lemma.is_empty() {
                continue;
            }
            cache
                .synset_lemmas
                .entry(synset_id.clone())
                .or_default()
                .insert(entry.lemma.clone());
            cache
                .lemma_synsets
                .entry(entry.lemma.clone())
                .or_default()
                .insert(synset_id.clone());
        }
        trace!(
            "Synonym cache built: {} synsets, {} lemmas",
            cache.synset_lemmas.len(),
            cache.lemma_synsets.len()
        );
        cache
    }

    /// Lemmas sharing at least one synset with `lemma`, excluding `lemma`.
    pub fn synonyms(&self, lemma: &str) -> BTreeSet<String> {
        self.lemma_synsets
            .get(lemma)
            .into_iter()
            .flatten()
            .filter_map(|synset_id| self.synset_lemmas.get(synset_id))
            .flatten()
            .filter(|other| other.as_str() != lemma)
            .cloned()
            .collect()
    }

    /// Lemmas of a synset.
    pub fn lemmas_of(&self, synset_id: &str) -> Option<&BTreeSet<String>> {
        self.synset_lemmas.get(synset_id)
    }
}
