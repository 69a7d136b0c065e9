//! Main Wordnet interface.

use super::catalog::{self, AddSynsetOutcome, RemoveSynsetOutcome};
use super::entries::{self, AddEntryOutcome, NewEntry, ProvenanceRemoval};
use super::lemma::{self, SynonymCache};
use super::store::{LexiconMeta, Store};
use super::types::{EdgeRef, Gloss, LexicalEntry, Lexicon, Relation, Synset};
use crate::config::LexiconConfig;
use crate::consistency::{
    self, CleanReport, Contradiction, Counts, DepthLevel, EmptySynsets, GlossQuality,
    PolysemyReport, RelationAudit, StatsReport,
};
use crate::error::Result;
use crate::ili::IliMap;
use crate::lmf;
use log::{debug, info};
use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// A loaded lexical-semantic graph.
///
/// `Wordnet` owns the document, its indices, the ili mapping used for new
/// synsets and the engine configuration. Queries borrow it immutably and
/// mutations need `&mut self`, so a mutation can never run while one of the
/// lazy enumerations is alive.
#[derive(Debug)]
pub struct Wordnet {
    store: Store,
    config: LexiconConfig,
    ili: IliMap,
    // Rebuilt lazily; reset by every entry mutation
    synonyms: OnceCell<SynonymCache>,
}

impl Wordnet {
    /// Index a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::DuplicateId`](crate::LexiconError::DuplicateId)
    /// if the document repeats a synset id or sense id.
    pub fn from_lexicon(lexicon: Lexicon, config: LexiconConfig) -> Result<Self> {
        Ok(Self {
            store: Store::build(lexicon)?,
            config,
            ili: IliMap::new(),
            synonyms: OnceCell::new(),
        })
    }

    /// Parse and index LMF bytes (plain or gzip).
    pub fn from_lmf(bytes: &[u8], config: LexiconConfig) -> Result<Self> {
        Self::from_lexicon(lmf::read_lmf(bytes)?, config)
    }

    /// Load an LMF file (plain or gzip).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lexgraph::{LexiconConfig, Wordnet};
    ///
    /// let wordnet = Wordnet::open("odwn_orbn_gwg-LMF_1.3.xml.gz", LexiconConfig::default()).unwrap();
    /// println!("{} synsets", wordnet.counts().synsets);
    /// ```
    pub fn open(path: impl AsRef<Path>, config: LexiconConfig) -> Result<Self> {
        info!("Opening lexicon at path: {:?}", path.as_ref());
        Self::from_lexicon(lmf::read_lmf_file(path)?, config)
    }

    /// Use `ili` to resolve the ili of new synsets (builder style).
    pub fn with_ili_map(mut self, ili: IliMap) -> Self {
        self.ili = ili;
        self
    }

    /// Replace the ili mapping.
    pub fn set_ili_map(&mut self, ili: IliMap) {
        self.ili = ili;
    }

    /// Load the ili mapping from an N-Triples file. Returns the number of mappings.
    pub fn load_ili_map(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.ili = IliMap::from_file(path)?;
        Ok(self.ili.len())
    }

    /// The ili mapping.
    pub fn ili_map(&self) -> &IliMap {
        &self.ili
    }

    /// The engine configuration.
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Lexicon metadata.
    pub fn meta(&self) -> &LexiconMeta {
        self.store.meta()
    }

    /// Snapshot of the current document.
    pub fn to_lexicon(&self) -> Lexicon {
        self.store.to_lexicon()
    }

    /// Add a relation type to the known set. Returns `false` if it was known.
    pub fn register_relation_type(&mut self, rel_type: &str) -> bool {
        self.store.register_relation_type(rel_type)
    }

    fn invalidate_synonyms(&mut self) {
        if self.synonyms.take().is_some() {
            debug!("Synonym cache invalidated");
        }
    }

    // ===== Synsets =====

    /// All synsets in document order.
    pub fn synsets(&self) -> impl Iterator<Item = &Synset> {
        self.store.synsets()
    }

    /// Look up a synset.
    pub fn find_synset(&self, id: &str) -> Result<&Synset> {
        catalog::find(&self.store, id)
    }

    /// Glosses of a synset in `languages`, or in the configured languages.
    pub fn glosses(&self, id: &str, languages: Option<&[&str]>) -> Result<Vec<&Gloss>> {
        match languages {
            Some(languages) => catalog::glosses(&self.store, id, languages),
            None => catalog::glosses(&self.store, id, self.config.gloss_languages.as_slice()),
        }
    }

    /// Outgoing relations of a synset, optionally of one type.
    pub fn relations(&self, id: &str, rel_type: Option<&str>) -> Result<Vec<&Relation>> {
        catalog::relations(&self.store, id, rel_type)
    }

    /// Add a validated relation.
    pub fn add_relation(&mut self, source: &str, rel_type: &str, target: &str) -> Result<()> {
        catalog::add_relation(&mut self.store, &self.config, source, rel_type, target)
    }

    /// Remove a relation.
    pub fn remove_relation(&mut self, source: &str, rel_type: &str, target: &str) -> Result<Relation> {
        catalog::remove_relation(&mut self.store, source, rel_type, target)
    }

    /// Add a synset with a gloss and relations; see [`catalog::add_synset`].
    pub fn add_synset(
        &mut self,
        id: &str,
        provenance: &str,
        definition: &str,
        relations: &[(&str, &str)],
    ) -> Result<AddSynsetOutcome> {
        catalog::add_synset(
            &mut self.store,
            &self.config,
            &self.ili,
            id,
            provenance,
            definition,
            relations,
        )
    }

    /// Remove a synset; see [`catalog::remove_synset`].
    pub fn remove_synset(&mut self, id: &str, cascade_remove_entries: bool) -> Result<RemoveSynsetOutcome> {
        let outcome = catalog::remove_synset(&mut self.store, &self.config, id, cascade_remove_entries)?;
        if outcome.entries_removed > 0 {
            self.invalidate_synonyms();
        }
        Ok(outcome)
    }

    // ===== Lexical entries =====

    /// Entries in document order; multi-word expressions only when asked.
    pub fn entries(&self, include_multiword: bool) -> impl Iterator<Item = &LexicalEntry> {
        entries::enumerate(&self.store, &self.config.multiword_marker, include_multiword)
    }

    /// Look up an entry by entry id.
    pub fn find_entry(&self, id: &str) -> Result<&LexicalEntry> {
        entries::find(&self.store, id)
    }

    /// Look up an entry by sense id.
    pub fn find_sense(&self, sense_id: &str) -> Result<&LexicalEntry> {
        entries::find_sense(&self.store, sense_id)
    }

    /// Entries attached to a synset.
    pub fn entries_of_synset<'a>(&'a self, synset_id: &str) -> impl Iterator<Item = &'a LexicalEntry> {
        self.store.members_of(synset_id)
    }

    /// Entries with `lemma`, optionally of one long part-of-speech.
    pub fn entries_by_lemma<'a>(
        &'a self,
        lemma: &str,
        pos: Option<&'a str>,
    ) -> impl Iterator<Item = &'a LexicalEntry> {
        entries::by_lemma(&self.store, lemma, pos)
    }

    /// Add a sense or merge it into an existing one; see [`entries::add`].
    pub fn add_entry(&mut self, new: NewEntry) -> Result<AddEntryOutcome> {
        let outcome = entries::add(&mut self.store, new)?;
        if matches!(outcome, AddEntryOutcome::Created { .. }) {
            self.invalidate_synonyms();
        }
        Ok(outcome)
    }

    /// Remove an entry by entry id.
    pub fn remove_entry(&mut self, id: &str) -> Result<LexicalEntry> {
        let entry = entries::remove(&mut self.store, id)?;
        self.invalidate_synonyms();
        Ok(entry)
    }

    /// Remove or strip every entry tagged with `tag`.
    pub fn remove_by_provenance(&mut self, tag: &str) -> ProvenanceRemoval {
        let removal = entries::remove_by_provenance(&mut self.store, tag);
        if removal.removed > 0 {
            self.invalidate_synonyms();
        }
        removal
    }

    /// Tag every untagged entry with the default provenance.
    pub fn default_provenance_pass(&mut self) -> usize {
        entries::default_provenance_pass(&mut self.store, &self.config)
    }

    // ===== Lemmas =====

    /// Lemma → number of entries.
    pub fn lemma_frequencies(&self, pos: Option<&str>) -> BTreeMap<String, usize> {
        lemma::lemma_frequencies(&self.store, pos)
    }

    /// Senses of a lemma with part-of-speech `pos`.
    pub fn senses_of(&self, lemma: &str, pos: &str) -> Vec<&LexicalEntry> {
        lemma::senses_of(&self.store, lemma, pos)
    }

    /// Number of senses of a lemma.
    pub fn num_senses(&self, lemma: &str, pos: &str) -> usize {
        lemma::num_senses(&self.store, lemma, pos)
    }

    /// Highest sense number of a lemma, 0 if it has none.
    pub fn highest_sense_number(&self, lemma: &str, pos: &str) -> u32 {
        lemma::highest_sense_number(&self.store, lemma, pos)
    }

    /// Lemmas sharing a synset with `lemma`.
    pub fn synonyms(&self, lemma: &str) -> BTreeSet<String> {
        self.synonyms
            .get_or_init(|| SynonymCache::build(&self.store))
            .synonyms(lemma)
    }

    // ===== Consistency and statistics =====

    /// Synset, entry and relation counts.
    pub fn counts(&self) -> Counts {
        consistency::counts(&self.store)
    }

    /// Edges that fail the validator or repeat an earlier edge.
    pub fn relation_audit(&self) -> RelationAudit {
        consistency::relation_audit(&self.store, &self.config)
    }

    /// Synsets without lexical entries.
    pub fn empty_synsets(&self) -> EmptySynsets {
        consistency::empty_synsets(&self.store, &self.config)
    }

    /// Synsets without hypernym.
    pub fn tops(&self) -> Vec<&str> {
        consistency::tops(&self.store, &self.config)
    }

    /// Synsets with neither hypernym nor hyponym.
    pub fn isolated_synsets(&self) -> Vec<&str> {
        consistency::isolated_synsets(&self.store, &self.config)
    }

    /// Lemma polysemy overview.
    pub fn polysemy(&self) -> PolysemyReport {
        consistency::polysemy(&self.store)
    }

    /// Missing inverses of `rel_a`/`rel_b` edges.
    pub fn symmetry_gaps(&self, rel_a: &str, rel_b: &str) -> Vec<EdgeRef> {
        consistency::symmetry_gaps(&self.store, rel_a, rel_b)
    }

    /// Synset pairs linked by several relation types.
    pub fn contradictions(&self) -> Vec<Contradiction> {
        consistency::contradictions(&self.store)
    }

    /// Provenance tag → entry count.
    pub fn provenance_distribution(&self) -> BTreeMap<String, usize> {
        consistency::provenance_distribution(&self.store)
    }

    /// Entries with an empty lemma.
    pub fn empty_lemmas(&self) -> usize {
        consistency::empty_lemmas(&self.store)
    }

    /// Gloss defects.
    pub fn gloss_quality(&self) -> GlossQuality {
        consistency::gloss_quality(&self.store)
    }

    /// Part-of-speech → synset count.
    pub fn pos_counts(&self) -> BTreeMap<String, usize> {
        consistency::pos_counts(&self.store)
    }

    /// Synsets with `min..max` members that are not all annotated.
    pub fn large_synsets(&self, min: usize, max: usize) -> Vec<&str> {
        consistency::large_synsets(&self.store, min, max)
    }

    /// Empty and filled synsets per hyponym depth.
    pub fn depth_profile(&self) -> Vec<DepthLevel> {
        consistency::depth_profile(&self.store, &self.config)
    }

    /// Every statistic in one report.
    pub fn stats(&self) -> StatsReport {
        consistency::stats(&self.store, &self.config)
    }

    /// Repair provenance, invalid relations and missing inverses.
    pub fn clean(&mut self) -> CleanReport {
        consistency::clean(&mut self.store, &self.config)
    }
}
