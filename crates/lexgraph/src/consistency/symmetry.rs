use crate::graph::store::Store;
use crate::graph::types::EdgeRef;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Several relation types between the same ordered pair of synsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contradiction {
    /// Source synset id
    pub source: String,
    /// Target synset id
    pub target: String,
    /// Distinct relation types, in document order
    pub rel_types: Vec<String>,
}

/// Propose the inverse of every `rel_a`/`rel_b` edge that lacks one.
///
/// For an edge `(s, rel_a, o)` without `(o, rel_b, s)` the proposal is
/// `(o, rel_b, s)`, and the other way round. Proposals are deduplicated and
/// returned in document order.
pub fn symmetry_gaps(store: &Store, rel_a: &str, rel_b: &str) -> Vec<EdgeRef> {
    let mut proposals = IndexSet::new();

    for synset in store.synsets() {
        for relation in &synset.relations {
            let inverse = if relation.rel_type == rel_a {
                rel_b
            } else if relation.rel_type == rel_b {
                rel_a
            } else {
                continue;
            };

            let closed = store
                .synset(&relation.target)
                .is_some_and(|target| target.has_edge(inverse, &synset.id));
            if !closed {
                proposals.insert(EdgeRef::new(&relation.target, inverse, &synset.id));
            }
        }
    }

    proposals.into_iter().collect()
}

/// Ordered `(source, target)` pairs linked by two or more distinct types.
pub fn contradictions(store: &Store) -> Vec<Contradiction> {
    let mut pairs: IndexMap<(&str, &str), IndexSet<&str>> = IndexMap::new();

    for synset in store.synsets() {
        for relation in &synset.relations {
            pairs
                .entry((synset.id.as_str(), relation.target.as_str()))
                .or_default()
                .insert(relation.rel_type.as_str());
        }
    }

    pairs
        .into_iter()
        .filter(|(_, types)| types.len() > 1)
        .map(|((source, target), types)| Contradiction {
            source: source.to_string(),
            target: target.to_string(),
            rel_types: types.into_iter().map(str::to_string).collect(),
        })
        .collect()
}
