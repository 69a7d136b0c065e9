//! Error types for lexgraph operations.
//!
//! All fallible operations return [`Result<T>`]. Mutations that fail leave the
//! graph exactly as it was before the call.

use thiserror::Error;

/// Result type alias for lexgraph operations.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Error type for every graph, validation, loading and export operation.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A synset, lexical entry, sense or relation does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was looked up ("synset", "lexical entry", ...)
        kind: &'static str,
        /// Identifier of the missing item
        id: String,
    },

    /// A synset id or sense id is already taken
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Which id space collided ("synset", "sense")
        kind: &'static str,
        /// The colliding identifier
        id: String,
    },

    /// Taxonomic relation between synsets of different part-of-speech
    #[error("Relation '{rel_type}' cannot link {source_id} ({source_pos}) to {target_id} ({target_pos})")]
    CrossPosViolation {
        /// Relation type
        rel_type: String,
        /// Source synset id
        source_id: String,
        /// Part-of-speech of the source
        source_pos: char,
        /// Target synset id
        target_id: String,
        /// Part-of-speech of the target
        target_pos: char,
    },

    /// Relation from a synset to itself
    #[error("Relation '{rel_type}' from {synset_id} to itself")]
    SelfLoop {
        /// Relation type
        rel_type: String,
        /// The synset on both ends
        synset_id: String,
    },

    /// Relation type not present in the known type set
    #[error("Unknown relation type: {rel_type}")]
    UnknownRelationType {
        /// The rejected relation type
        rel_type: String,
    },

    /// Edge or entry already present
    #[error("Already exists: {message}")]
    AlreadyExists {
        /// What already exists
        message: String,
    },

    /// Node was indexed but could not be located in its parent collection
    #[error("Could not detach {kind} {id} from its parent collection")]
    DetachFailed {
        /// What was being detached
        kind: &'static str,
        /// Identifier of the node
        id: String,
    },

    /// No interlingual index mapping for a synset id
    #[error("No ili identifier found for {synset_id}")]
    MissingIli {
        /// The synset id without mapping
        synset_id: String,
    },

    /// Invalid operation (e.g., a synset without any accepted hypernym)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Document failed schema validation
    #[error("Schema validation failed: {message}")]
    Schema {
        /// First violation found
        message: String,
    },

    /// Malformed LMF or N-Triples input
    #[error("Parse error: {message}")]
    Parse {
        /// Error details
        message: String,
    },

    /// File I/O error while loading or exporting
    #[error("Storage error: {message}")]
    Storage {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LexiconError {
    /// Create a storage error from a message and optional source.
    pub fn storage<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub(crate) fn synset_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "synset",
            id: id.into(),
        }
    }

    pub(crate) fn entry_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "lexical entry",
            id: id.into(),
        }
    }
}
