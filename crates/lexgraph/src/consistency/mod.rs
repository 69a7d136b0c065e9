//! Consistency checks, statistics and repair.
//!
//! Every analysis here is a full scan of the store; nothing is cached, so the
//! results always reflect the current graph.

mod clean;
mod stats;
mod symmetry;

pub use clean::{clean, CleanReport};
pub use stats::{
    depth_profile, empty_lemmas, empty_synsets, gloss_quality, isolated_synsets, large_synsets,
    polysemy, pos_counts, provenance_distribution, stats, tops, DepthLevel, EmptySynsets,
    GlossQuality, PolysemyReport, PrefixCount, StatsReport,
};
pub use symmetry::{contradictions, symmetry_gaps, Contradiction};

use crate::config::LexiconConfig;
use crate::graph::store::Store;
use crate::graph::types::EdgeRef;
use crate::graph::validator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Size of the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Number of synsets
    pub synsets: usize,
    /// Number of lexical entries, multi-word expressions included
    pub entries: usize,
    /// Number of relations
    pub relations: usize,
}

/// An edge that would not be admitted today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFailure {
    /// The offending edge
    pub edge: EdgeRef,
    /// Index of the edge in its source's relation list
    pub position: usize,
    /// Validator message, or `duplicate`
    pub reason: String,
}

/// Result of [`relation_audit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAudit {
    /// Number of relations scanned
    pub relation_count: usize,
    /// Edges failing the validator or repeating an earlier edge
    pub failures: Vec<AuditFailure>,
}

/// Count synsets, entries and relations.
pub fn counts(store: &Store) -> Counts {
    Counts {
        synsets: store.synset_count(),
        entries: store.entry_count(),
        relations: store.relation_count(),
    }
}

/// Run every stored edge through the validator and flag repeated edges.
pub fn relation_audit(store: &Store, config: &LexiconConfig) -> RelationAudit {
    let mut audit = RelationAudit::default();

    for synset in store.synsets() {
        let mut seen = HashSet::new();
        for (position, relation) in synset.relations.iter().enumerate() {
            audit.relation_count += 1;
            let edge = EdgeRef::new(&synset.id, &relation.rel_type, &relation.target);

            let reason = match validator::validate(
                store,
                config,
                &synset.id,
                &relation.rel_type,
                &relation.target,
            ) {
                Err(e) => Some(e.to_string()),
                Ok(()) if !seen.insert((relation.rel_type.as_str(), relation.target.as_str())) => {
                    Some("duplicate".to_string())
                }
                Ok(()) => None,
            };

            if let Some(reason) = reason {
                audit.failures.push(AuditFailure {
                    edge,
                    position,
                    reason,
                });
            }
        }
    }

    audit
}
