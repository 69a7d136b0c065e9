//! LMF (Lexical Markup Framework) XML reading and writing.
//!
//! Document shape:
//!
//! ```text
//! LexicalResource
//! └── Lexicon{id, label, language, version}
//!     ├── LexicalEntry{id, partOfSpeech}
//!     │   ├── Lemma{writtenForm}
//!     │   └── Sense{id, senseId, definition, synset, provenance, annotator}
//!     └── Synset{id, ili}
//!         ├── Definitions/Definition{gloss, language, provenance}
//!         └── SynsetRelations/SynsetRelation{relType, target, provenance}
//! ```
//!
//! Gzip-compressed input is recognised by its magic bytes.

mod reader;
mod writer;

pub use reader::{read_lmf, read_lmf_file};
pub use writer::{write_lmf, write_lmf_file};

use crate::error::{LexiconError, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decompress `bytes` if they start with the gzip magic, otherwise return them as is.
pub(crate) fn decompress(bytes: Vec<u8>) -> Result<Vec<u8>> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut decoded = Vec::new();
    GzDecoder::new(bytes.as_slice())
        .read_to_end(&mut decoded)
        .map_err(|e| LexiconError::storage("Failed to decompress gzip input", Some(e)))?;
    Ok(decoded)
}

/// Read a file, transparently decompressing gzip content.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let raw = std::fs::read(path).map_err(|e| {
        LexiconError::storage(format!("Failed to read {}", path.display()), Some(e))
    })?;
    decompress(raw)
}
