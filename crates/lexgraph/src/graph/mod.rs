//! Core graph types, indices and services.
//!
//! This module defines the fundamental building blocks:
//! - [`Synset`] and [`LexicalEntry`]: the two node kinds of the document
//! - [`Store`]: the owned document plus its id indices
//! - [`Wordnet`]: the façade callers work with

pub mod catalog;
pub mod entries;
pub mod lemma;
pub mod store;
pub mod types;
pub mod validator;
mod wordnet;

pub use catalog::{AddSynsetOutcome, RemoveSynsetOutcome};
pub use entries::{AddEntryOutcome, NewEntry, ProvenanceRemoval};
pub use lemma::SynonymCache;
pub use store::{LexiconMeta, Store};
pub use types::{EdgeRef, Gloss, LexicalEntry, Lexicon, Relation, Synset, TagSet};
pub use wordnet::Wordnet;
