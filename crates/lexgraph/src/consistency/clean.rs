use super::relation_audit;
use super::symmetry::symmetry_gaps;
use crate::config::LexiconConfig;
use crate::graph::catalog;
use crate::graph::entries;
use crate::graph::store::Store;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a [`clean`] run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Entries that received the default provenance
    pub provenance_repaired: usize,
    /// Invalid or duplicate relations removed
    pub relations_removed: usize,
    /// Missing inverse relations added
    pub relations_added: usize,
    /// Proposed inverses whose source no longer exists
    pub proposals_skipped: usize,
    /// Proposed inverses refused by the validator
    pub proposals_failed: usize,
}

impl CleanReport {
    /// Number of modifications made to the graph.
    pub fn changes(&self) -> usize {
        self.provenance_repaired + self.relations_removed + self.relations_added
    }
}

/// Repair the graph in three steps:
///
/// 1. give untagged entries the default provenance,
/// 2. remove every relation the audit flags,
/// 3. add the missing inverse of every hyponym/hypernym edge.
///
/// Failures in the last step are logged and counted; they never abort the run.
/// Running `clean` twice in a row makes no changes the second time.
pub fn clean(store: &mut Store, config: &LexiconConfig) -> CleanReport {
    let mut report = CleanReport {
        provenance_repaired: entries::default_provenance_pass(store, config),
        ..CleanReport::default()
    };

    let mut positions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for failure in relation_audit(store, config).failures {
        debug!("Removing {} ({})", failure.edge, failure.reason);
        positions
            .entry(failure.edge.source)
            .or_default()
            .push(failure.position);
    }
    for (source, mut indices) in positions {
        let Some(synset) = store.synset_mut(&source) else {
            continue;
        };
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            synset.relations.remove(index);
            report.relations_removed += 1;
        }
    }

    for proposal in symmetry_gaps(store, &config.hyponym_type, &config.hypernym_type) {
        if !store.contains_synset(&proposal.source) {
            report.proposals_skipped += 1;
            continue;
        }
        match catalog::add_relation(
            store,
            config,
            &proposal.source,
            &proposal.rel_type,
            &proposal.target,
        ) {
            Ok(()) => report.relations_added += 1,
            Err(e) => {
                warn!("Could not add inverse {proposal}: {e}");
                report.proposals_failed += 1;
            }
        }
    }

    info!(
        "Clean: {} provenance repairs, {} relations removed, {} relations added",
        report.provenance_repaired, report.relations_removed, report.relations_added
    );
    report
}
