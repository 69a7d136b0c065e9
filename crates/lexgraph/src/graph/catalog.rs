//! Synset catalog: lookup, glosses, relations and synset/edge mutation.

use super::store::Store;
use super::types::{part_of_speech, EdgeRef, Gloss, Relation, Synset};
use super::validator;
use crate::config::LexiconConfig;
use crate::error::{LexiconError, Result};
use crate::ili::IliMap;
use log::{debug, trace};

/// Result of [`add_synset`] when the synset was accepted.
#[derive(Debug)]
pub struct AddSynsetOutcome {
    /// Ili assigned to the new synset
    pub ili: String,
    /// Relations that were inserted
    pub added: Vec<EdgeRef>,
    /// Relations that were refused, with the reason
    pub rejected: Vec<(EdgeRef, LexiconError)>,
}

/// Result of [`remove_synset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveSynsetOutcome {
    /// The node itself was removed (it had no hyponyms)
    pub removed: bool,
    /// Lexical entries removed before the node
    pub entries_removed: usize,
    /// Edges elsewhere that pointed at the removed node
    pub edges_stripped: usize,
}

/// Look up a synset.
///
/// # Errors
///
/// Returns [`LexiconError::NotFound`] if the id is unknown.
pub fn find<'a>(store: &'a Store, id: &str) -> Result<&'a Synset> {
    store
        .synset(id)
        .ok_or_else(|| LexiconError::synset_not_found(id))
}

/// Gloss texts of a synset in the given languages.
pub fn glosses<'a, S: AsRef<str>>(
    store: &'a Store,
    id: &str,
    languages: &[S],
) -> Result<Vec<&'a Gloss>> {
    let synset = find(store, id)?;
    Ok(synset
        .glosses
        .iter()
        .filter(|gloss| languages.iter().any(|l| l.as_ref() == gloss.language))
        .collect())
}

/// Outgoing relations of a synset, optionally restricted to one type.
pub fn relations<'a>(
    store: &'a Store,
    id: &str,
    rel_type: Option<&str>,
) -> Result<Vec<&'a Relation>> {
    let synset = find(store, id)?;
    Ok(synset
        .relations
        .iter()
        .filter(|r| rel_type.map_or(true, |t| r.rel_type == t))
        .collect())
}

/// Validate and append one edge, tagged with the engine provenance.
///
/// # Errors
///
/// Any validator error, or [`LexiconError::AlreadyExists`] for an existing
/// `(source, rel_type, target)` edge. The graph is unchanged on error.
pub fn add_relation(
    store: &mut Store,
    config: &LexiconConfig,
    source: &str,
    rel_type: &str,
    target: &str,
) -> Result<()> {
    validator::validate(store, config, source, rel_type, target)?;

    let synset = store
        .synset_mut(source)
        .ok_or_else(|| LexiconError::synset_not_found(source))?;

    if synset.has_edge(rel_type, target) {
        return Err(LexiconError::AlreadyExists {
            message: format!("relation {source} -{rel_type}-> {target}"),
        });
    }

    debug!("Adding relation: {source} -{rel_type}-> {target}");
    synset.relations.push(Relation::new(
        rel_type,
        target,
        config.engine_provenance.as_str(),
    ));
    Ok(())
}

/// Remove one edge.
///
/// # Errors
///
/// Returns [`LexiconError::NotFound`] if the source or the edge does not exist.
pub fn remove_relation(
    store: &mut Store,
    source: &str,
    rel_type: &str,
    target: &str,
) -> Result<Relation> {
    let synset = store
        .synset_mut(source)
        .ok_or_else(|| LexiconError::synset_not_found(source))?;

    let position = synset
        .relations
        .iter()
        .position(|r| r.rel_type == rel_type && r.target == target)
        .ok_or_else(|| LexiconError::NotFound {
            kind: "relation",
            id: format!("{source} -{rel_type}-> {target}"),
        })?;

    debug!("Removing relation: {source} -{rel_type}-> {target}");
    Ok(synset.relations.remove(position))
}

/// Create a synset from an id with an ili mapping.
///
/// The synset is kept only if at least one hypernym relation was accepted,
/// or if it is an adjective and the adjective exception is enabled.
///
/// # Errors
///
/// - [`LexiconError::MissingIli`] if `ili` has no entry for an `eng-` id;
///   other ids receive the pending ili
/// - [`LexiconError::DuplicateId`] if the id is already known
/// - [`LexiconError::InvalidOperation`] if no hypernym was accepted; the
///   synset and any of its relations are rolled back
pub fn add_synset(
    store: &mut Store,
    config: &LexiconConfig,
    ili: &IliMap,
    id: &str,
    provenance: &str,
    definition: &str,
    relations: &[(&str, &str)],
) -> Result<AddSynsetOutcome> {
    // Locally minted synsets wait for a global assignment.
    let ili_id = match ili.get(id) {
        Some(ili_id) => ili_id.to_string(),
        None if !id.starts_with("eng-") => config.pending_ili.clone(),
        None => {
            return Err(LexiconError::MissingIli {
                synset_id: id.to_string(),
            })
        }
    };

    let mut synset = Synset::new(id, ili_id.as_str());
    synset.glosses.push(Gloss {
        text: definition.to_string(),
        language: "en".to_string(),
        provenance: Some(provenance.to_string()),
    });

    // Registering first lets the validator see the new id as a known source.
    store.insert_synset(synset)?;

    let mut added = Vec::new();
    let mut rejected = Vec::new();
    let mut hypernym_added = false;

    for (rel_type, target) in relations {
        let edge = EdgeRef::new(id, *rel_type, *target);
        match add_relation(store, config, id, rel_type, target) {
            Ok(()) => {
                if config.is_hypernym(rel_type) {
                    hypernym_added = true;
                }
                added.push(edge);
            }
            Err(e) => {
                trace!("Relation {edge} refused for new synset: {e}");
                rejected.push((edge, e));
            }
        }
    }

    let is_adjective = config.adjective_exception && part_of_speech(id) == Some('a');
    if !(hypernym_added || is_adjective) {
        store.remove_synset(id);
        return Err(LexiconError::InvalidOperation {
            message: format!("no hypernym relation added for {id}"),
        });
    }

    debug!(
        "Added synset {id} ({ili_id}) with {} relations ({} refused)",
        added.len(),
        rejected.len()
    );

    Ok(AddSynsetOutcome {
        ili: ili_id,
        added,
        rejected,
    })
}

/// Remove a synset, optionally removing its lexical entries first.
///
/// The node is only removed when it has no outgoing hyponym relation; a
/// synset that still has hyponyms is retained and the caller has to remove
/// those first. On removal every edge pointing at the synset is stripped.
///
/// # Errors
///
/// Returns [`LexiconError::NotFound`] if the synset does not exist.
pub fn remove_synset(
    store: &mut Store,
    config: &LexiconConfig,
    id: &str,
    cascade_remove_entries: bool,
) -> Result<RemoveSynsetOutcome> {
    let has_hyponyms = find(store, id)?.has_relation_type(&config.hyponym_type);

    let mut outcome = RemoveSynsetOutcome {
        removed: false,
        entries_removed: 0,
        edges_stripped: 0,
    };

    if cascade_remove_entries {
        let senses: Vec<String> = store
            .members_of(id)
            .map(|entry| entry.sense_id.clone())
            .collect();
        for sense_id in senses {
            if store.remove_entry(&sense_id).is_some() {
                outcome.entries_removed += 1;
            }
        }
    }

    if has_hyponyms {
        debug!("Synset {id} still has hyponyms; retained");
        return Ok(outcome);
    }

    store.remove_synset(id);
    outcome.removed = true;

    for synset in store.synsets_mut() {
        let before = synset.relations.len();
        synset.relations.retain(|r| r.target != id);
        outcome.edges_stripped += before - synset.relations.len();
    }

    debug!(
        "Removed synset {id}: {} entries, {} incoming edges",
        outcome.entries_removed, outcome.edges_stripped
    );
    Ok(outcome)
}
