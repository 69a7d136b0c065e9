use super::symmetry::{contradictions, symmetry_gaps};
use super::{counts, relation_audit, Counts};
use crate::config::LexiconConfig;
use crate::graph::lemma;
use crate::graph::store::Store;
use crate::graph::types::{part_of_speech, Synset};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Empty synsets per id prefix (`eng`, `odwn`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixCount {
    /// Synsets without any lexical entry
    pub empty: usize,
    /// Empty synsets that are also leaves
    pub empty_leaves: usize,
}

/// Result of [`empty_synsets`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptySynsets {
    /// Ids of synsets no entry references, in document order
    pub ids: Vec<String>,
    /// The subset of `ids` without outgoing hyponym relations
    pub leaves: Vec<String>,
    /// Counts split by id prefix
    pub by_prefix: BTreeMap<String, PrefixCount>,
}

/// Lemma polysemy overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolysemyReport {
    /// Mean number of senses per lemma, rounded to one decimal
    pub average: f64,
    /// Polysemy → lemmas with that many senses
    pub by_polysemy: BTreeMap<usize, Vec<String>>,
}

/// Gloss defects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossQuality {
    /// Synsets without any gloss
    pub without_gloss: usize,
    /// Glosses with empty text
    pub empty: usize,
    /// Glosses consisting of a single word
    pub one_word: usize,
}

/// Synsets at one depth below the tops of the hyponym hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Distance from a top (tops are depth 0)
    pub depth: usize,
    /// Synsets at this depth without lexical entries
    pub empty: usize,
    /// Synsets at this depth with lexical entries
    pub filled: usize,
}

/// Aggregated statistics over the whole graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Synset, entry and relation counts
    pub counts: Counts,
    /// Edges failing the relation audit
    pub audit_failures: usize,
    /// Empty synset breakdown
    pub empty_synsets: EmptySynsets,
    /// Entries with an empty lemma
    pub empty_lemmas: usize,
    /// Synsets without hypernym
    pub tops: usize,
    /// Synsets without hypernym and hyponym
    pub isolated: usize,
    /// Gloss defects
    pub gloss_quality: GlossQuality,
    /// Part-of-speech → synset count
    pub pos_counts: BTreeMap<String, usize>,
    /// Provenance tag → entry count
    pub provenance: BTreeMap<String, usize>,
    /// Mean senses per lemma
    pub average_polysemy: f64,
    /// Missing hypernym/hyponym inverses
    pub symmetry_gaps: usize,
    /// Synset pairs linked by several relation types
    pub contradictions: usize,
}

fn is_leaf(synset: &Synset, config: &LexiconConfig) -> bool {
    !synset.has_relation_type(&config.hyponym_type)
}

fn id_prefix(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Synsets no lexical entry references.
pub fn empty_synsets(store: &Store, config: &LexiconConfig) -> EmptySynsets {
    let mut report = EmptySynsets::default();

    for synset in store.synsets().filter(|s| !store.has_members(&s.id)) {
        let leaf = is_leaf(synset, config);
        let count = report
            .by_prefix
            .entry(id_prefix(&synset.id).to_string())
            .or_default();
        count.empty += 1;
        if leaf {
            count.empty_leaves += 1;
            report.leaves.push(synset.id.clone());
        }
        report.ids.push(synset.id.clone());
    }

    report
}

fn has_hypernym(synset: &Synset, config: &LexiconConfig) -> bool {
    synset.relations.iter().any(|r| config.is_hypernym(&r.rel_type))
}

/// Synsets without a hypernym relation.
pub fn tops<'a>(store: &'a Store, config: &LexiconConfig) -> Vec<&'a str> {
    store
        .synsets()
        .filter(|s| !has_hypernym(s, config))
        .map(|s| s.id.as_str())
        .collect()
}

/// Synsets with neither a hypernym nor a hyponym relation.
pub fn isolated_synsets<'a>(store: &'a Store, config: &LexiconConfig) -> Vec<&'a str> {
    store
        .synsets()
        .filter(|s| {
            !has_hypernym(s, config) && !s.has_relation_type(&config.hyponym_type)
        })
        .map(|s| s.id.as_str())
        .collect()
}

/// Group lemmas by their number of senses.
pub fn polysemy(store: &Store) -> PolysemyReport {
    let mut report = PolysemyReport::default();
    let mut total = 0usize;
    let mut lemmas = 0usize;

    for (lemma, senses) in lemma::lemma_frequencies(store, None) {
        total += senses;
        lemmas += 1;
        report.by_polysemy.entry(senses).or_default().push(lemma);
    }

    if lemmas > 0 {
        report.average = (total as f64 / lemmas as f64 * 10.0).round() / 10.0;
    }
    report
}

/// Provenance tag → number of entries carrying it; untagged entries count as `None`.
pub fn provenance_distribution(store: &Store) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for entry in store.entries() {
        if entry.provenance.is_empty() {
            *distribution.entry("None".to_string()).or_insert(0) += 1;
            continue;
        }
        for tag in entry.provenance.iter() {
            *distribution.entry(tag.to_string()).or_insert(0) += 1;
        }
    }
    distribution
}

/// Number of entries with an empty lemma.
pub fn empty_lemmas(store: &Store) -> usize {
    store.entries().filter(|e| e.lemma.is_empty()).count()
}

/// Count synsets without glosses, empty glosses and one-word glosses.
pub fn gloss_quality(store: &Store) -> GlossQuality {
    let mut quality = GlossQuality::default();
    for synset in store.synsets() {
        if synset.glosses.is_empty() {
            quality.without_gloss += 1;
        }
        for gloss in &synset.glosses {
            match gloss.text.split_whitespace().count() {
                0 => quality.empty += 1,
                1 => quality.one_word += 1,
                _ => {}
            }
        }
    }
    quality
}

/// Part-of-speech → number of synsets.
pub fn pos_counts(store: &Store) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for synset in store.synsets() {
        let pos = synset
            .part_of_speech()
            .map(String::from)
            .unwrap_or_default();
        *counts.entry(pos).or_insert(0) += 1;
    }
    counts
}

/// Synsets with `min..max` members of which at least one is not annotated.
pub fn large_synsets<'a>(store: &'a Store, min: usize, max: usize) -> Vec<&'a str> {
    store
        .synsets()
        .filter(|synset| {
            let mut members = 0;
            let mut all_annotated = true;
            for entry in store.members_of(&synset.id) {
                members += 1;
                all_annotated &= !entry.annotator.is_empty();
            }
            (min..max).contains(&members) && !all_annotated
        })
        .map(|s| s.id.as_str())
        .collect()
}

/// Walk the hyponym hierarchy breadth-first from every non-adjective top and
/// count empty and filled synsets per depth.
///
/// Each synset is counted once, at the first depth it is reached.
pub fn depth_profile(store: &Store, config: &LexiconConfig) -> Vec<DepthLevel> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut levels: Vec<DepthLevel> = Vec::new();

    for top in tops(store, config) {
        if part_of_speech(top) == Some('a') {
            continue;
        }
        visited.insert(top);
        queue.push_back((top, 0usize));
    }

    while let Some((current, depth)) = queue.pop_front() {
        if levels.len() <= depth {
            levels.push(DepthLevel {
                depth,
                ..DepthLevel::default()
            });
        }
        if store.has_members(current) {
            levels[depth].filled += 1;
        } else {
            levels[depth].empty += 1;
        }

        let Some(synset) = store.synset(current) else {
            continue;
        };
        for relation in synset.relations_of_type(&config.hyponym_type) {
            let target = relation.target.as_str();
            if store.contains_synset(target) && visited.insert(target) {
                queue.push_back((target, depth + 1));
            }
        }
    }

    levels
}

/// Collect every statistic into one serializable report.
pub fn stats(store: &Store, config: &LexiconConfig) -> StatsReport {
    StatsReport {
        counts: counts(store),
        audit_failures: relation_audit(store, config).failures.len(),
        empty_synsets: empty_synsets(store, config),
        empty_lemmas: empty_lemmas(store),
        tops: tops(store, config).len(),
        isolated: isolated_synsets(store, config).len(),
        gloss_quality: gloss_quality(store),
        pos_counts: pos_counts(store),
        provenance: provenance_distribution(store),
        average_polysemy: polysemy(store).average,
        symmetry_gaps: symmetry_gaps(store, &config.hyponym_type, &config.hypernym_type).len(),
        contradictions: contradictions(store).len(),
    }
}
