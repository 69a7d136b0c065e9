//! Interlingual index (ILI) mapping: `eng-30-<offset>-<pos>` → `i<n>`.
//!
//! The mapping is published as N-Triples:
//!
//! ```text
//! <http://globalwordnet.org/ili/i117659> <http://www.w3.org/2002/07/owl#sameAs> <http://wordnet-rdf.princeton.edu/wn30/eng-15300051-n> .
//! ```

use crate::error::{LexiconError, Result};
use log::{debug, trace};
use std::collections::HashMap;
use std::path::Path;

const SAME_AS: &str = "<http://www.w3.org/2002/07/owl#sameAs>";

/// Synset id → ili identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IliMap {
    map: HashMap<String, String>,
}

impl IliMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse N-Triples text. Lines other than `owl:sameAs` triples are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Parse`] for a `sameAs` line without an ili
    /// subject or a `wn30` object.
    pub fn from_ntriples(text: &str) -> Result<Self> {
        let mut ili = Self::new();
        for (number, line) in text.lines().enumerate() {
            if !line.contains(SAME_AS) {
                continue;
            }
            let (synset_id, ili_id) = parse_same_as(line).ok_or_else(|| {
                LexiconError::parse(format!("Malformed sameAs triple on line {}", number + 1))
            })?;
            trace!("ili {ili_id} -> {synset_id}");
            ili.map.insert(synset_id, ili_id);
        }
        debug!("Parsed {} ili mappings", ili.map.len());
        Ok(ili)
    }

    /// Read a mapping file, plain or gzip-compressed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = crate::lmf::read_file(path.as_ref())?;
        let text = String::from_utf8(bytes)
            .map_err(|e| LexiconError::serialization("ili mapping is not UTF-8", Some(e)))?;
        Self::from_ntriples(&text)
    }

    /// Add or replace one mapping.
    pub fn insert(&mut self, synset_id: impl Into<String>, ili: impl Into<String>) {
        self.map.insert(synset_id.into(), ili.into());
    }

    /// Ili of a synset id.
    pub fn get(&self, synset_id: &str) -> Option<&str> {
        self.map.get(synset_id).map(String::as_str)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn parse_same_as(line: &str) -> Option<(String, String)> {
    let mut parts = line.split_whitespace();
    let subject = parts.next()?;
    let _predicate = parts.next()?;
    let object = parts.next()?;

    let ili = subject.split_once("/ili/")?.1.strip_suffix('>')?;
    let pwn = object.split_once("/wn30/")?.1.strip_suffix('>')?;
    let offset_pos = pwn.strip_prefix("eng-")?;

    if ili.is_empty() || offset_pos.is_empty() {
        return None;
    }
    Some((format!("eng-30-{offset_pos}"), ili.to_string()))
}
