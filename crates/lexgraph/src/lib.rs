//! # lexgraph
//!
//! A mutable lexical-semantic graph (WordNet-style resource) with a
//! consistency, validation and statistics engine.
//!
//! ## Core Principles
//!
//! - **Integrity on every mutation**: edges pass a fixed set of rules before
//!   they enter the graph, and failed mutations leave the graph unchanged
//! - **O(1) lookups**: synsets, senses and entry ids are indexed at load
//! - **Explicit repair**: defects are reported by scans and fixed by `clean`,
//!   never silently
//! - **Zero Magic**: the engine never invents relation types or identifiers
//!   the caller cannot predict
//!
//! ## Architecture
//!
//! ```text
//! Exporters (LMF, OMW, ILI map, JSON)
//!     ↓
//! Wordnet façade
//!     ↓
//! Services (catalog, entries, lemma, validator, consistency)
//!     ↓
//! Store (document + indices)
//!     ↓
//! LMF reader / writer
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use lexgraph::{LexiconConfig, NewEntry, Wordnet};
//!
//! let mut wordnet = Wordnet::open("odwn.xml.gz", LexiconConfig::default()).unwrap();
//!
//! wordnet
//!     .add_entry(NewEntry::new("stoel", "noun", 'n', "eng-30-03001627-n").with_provenance("wiktionary"))
//!     .unwrap();
//!
//! let report = wordnet.clean();
//! println!("{} repairs", report.changes());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod consistency;
pub mod error;
pub mod export;
pub mod graph;
pub mod ili;
pub mod lmf;
pub mod schema;

// Re-export main types
pub use config::LexiconConfig;
pub use consistency::{CleanReport, Counts, RelationAudit, StatsReport};
pub use error::{LexiconError, Result};
pub use graph::{
    AddEntryOutcome, AddSynsetOutcome, EdgeRef, Gloss, LexicalEntry, Lexicon, NewEntry, Relation,
    RemoveSynsetOutcome, Store, Synset, TagSet, Wordnet,
};
pub use ili::IliMap;
pub use schema::{SchemaValidator, StructuralValidator};
