//! Core document types: synsets, lexical entries, relations and tag sets.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Set of source tags, serialized as a `+`-joined string (`"pwn+wiktionary"`).
///
/// Insertion order is kept so that re-serialized documents only change where
/// a tag was actually added or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TagSet(IndexSet<String>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `+`-joined tag string. Empty segments are dropped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split('+')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Remove a tag. Returns `false` if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.shift_remove(tag)
    }

    /// Check for a tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Union `other` into this set. Returns the number of new tags.
    pub fn union_with<'a, I>(&mut self, other: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        other
            .into_iter()
            .filter(|tag| self.0.insert((*tag).to_string()))
            .count()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no tag is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

impl From<String> for TagSet {
    fn from(value: String) -> Self {
        TagSet::parse(&value)
    }
}

impl From<&str> for TagSet {
    fn from(value: &str) -> Self {
        TagSet::parse(value)
    }
}

impl From<TagSet> for String {
    fn from(value: TagSet) -> Self {
        value.to_string()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A gloss (definition text) attached to a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gloss {
    /// Definition text
    pub text: String,
    /// Language tag (`en`, `nl`, ...)
    pub language: String,
    /// Source of the gloss, if recorded
    pub provenance: Option<String>,
}

impl Gloss {
    /// Create a gloss without provenance.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            provenance: None,
        }
    }
}

/// A directed, typed edge owned by its source synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Relation type (`has_hyperonym`, `has_mero_part`, ...)
    pub rel_type: String,
    /// Target synset id
    pub target: String,
    /// Source of the edge (`pwn`, or the engine tag for repairs)
    pub provenance: String,
}

impl Relation {
    /// Create a relation.
    pub fn new(
        rel_type: impl Into<String>,
        target: impl Into<String>,
        provenance: impl Into<String>,
    ) -> Self {
        Self {
            rel_type: rel_type.into(),
            target: target.into(),
            provenance: provenance.into(),
        }
    }
}

/// A meaning node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    /// Globally unique id, e.g. `eng-30-00324560-v` or `odwn-10-101264937-n`
    pub id: String,
    /// Interlingual index identifier
    pub ili: String,
    /// Glosses in document order
    pub glosses: Vec<Gloss>,
    /// Outgoing relations in document order
    pub relations: Vec<Relation>,
}

impl Synset {
    /// Create a synset without glosses or relations.
    pub fn new(id: impl Into<String>, ili: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ili: ili.into(),
            glosses: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Add a gloss (builder style).
    pub fn with_gloss(mut self, text: impl Into<String>, language: impl Into<String>) -> Self {
        self.glosses.push(Gloss::new(text, language));
        self
    }

    /// Add a relation with `pwn` provenance (builder style).
    pub fn with_relation(mut self, rel_type: impl Into<String>, target: impl Into<String>) -> Self {
        self.relations.push(Relation::new(rel_type, target, "pwn"));
        self
    }

    /// Part-of-speech, taken from the trailing character of the id.
    pub fn part_of_speech(&self) -> Option<char> {
        part_of_speech(&self.id)
    }

    /// Outgoing relations of one type.
    pub fn relations_of_type<'a>(&'a self, rel_type: &'a str) -> impl Iterator<Item = &'a Relation> {
        self.relations.iter().filter(move |r| r.rel_type == rel_type)
    }

    /// Check for an outgoing relation of `rel_type`.
    pub fn has_relation_type(&self, rel_type: &str) -> bool {
        self.relations.iter().any(|r| r.rel_type == rel_type)
    }

    /// Check for the exact edge `(self, rel_type, target)`.
    pub fn has_edge(&self, rel_type: &str, target: &str) -> bool {
        self.relations
            .iter()
            .any(|r| r.rel_type == rel_type && r.target == target)
    }
}

/// Part-of-speech of a synset id (its trailing character).
pub fn part_of_speech(synset_id: &str) -> Option<char> {
    synset_id.chars().last()
}

/// A word sense: one lemma in one synset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Entry id, typically `lemma-pos-senseNumber`
    pub id: String,
    /// Surface form (empty when the document has none)
    pub lemma: String,
    /// Long part-of-speech (`noun`, `verb`, `adjective`)
    pub pos: String,
    /// Document-wide unique sense id (`o_n-106739250`)
    pub sense_id: String,
    /// Rank among the senses of the same lemma and pos
    pub sense_number: u32,
    /// Sources that contributed this sense
    pub provenance: TagSet,
    /// Human annotators that checked this sense
    pub annotator: TagSet,
    /// Sense-level definition
    pub definition: Option<String>,
    /// Synset this sense belongs to; `None` while unattached
    pub synset_id: Option<String>,
}

impl LexicalEntry {
    /// Create an entry with sense number 1 and no tags.
    pub fn new(
        id: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        sense_id: impl Into<String>,
        synset_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            sense_id: sense_id.into(),
            sense_number: 1,
            provenance: TagSet::new(),
            annotator: TagSet::new(),
            definition: None,
            synset_id: Some(synset_id.into()),
        }
    }

    /// Set the provenance from a `+`-joined string (builder style).
    pub fn with_provenance(mut self, provenance: &str) -> Self {
        self.provenance = TagSet::parse(provenance);
        self
    }

    /// Set the sense number (builder style).
    pub fn with_sense_number(mut self, sense_number: u32) -> Self {
        self.sense_number = sense_number;
        self
    }

    /// Check whether this entry is a multi-word expression.
    pub fn is_multiword(&self, marker: &str) -> bool {
        !marker.is_empty() && self.id.contains(marker)
    }
}

/// The document root: one lexicon with its entries and synsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Lexicon id
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Language of the lexical entries
    pub language: String,
    /// Resource version
    pub version: String,
    /// Lexical entries in document order
    pub entries: Vec<LexicalEntry>,
    /// Synsets in document order
    pub synsets: Vec<Synset>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        language: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            language: language.into(),
            version: version.into(),
            entries: Vec::new(),
            synsets: Vec::new(),
        }
    }
}

/// A fully qualified edge, used in reports and repair proposals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRef {
    /// Source synset id
    pub source: String,
    /// Relation type
    pub rel_type: String,
    /// Target synset id
    pub target: String,
}

impl EdgeRef {
    /// Create an edge reference.
    pub fn new(
        source: impl Into<String>,
        rel_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            rel_type: rel_type.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.source, self.rel_type, self.target)
    }
}
