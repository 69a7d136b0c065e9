//! Open Multilingual Wordnet tab export.
//!
//! One line per lemma of an English-aligned synset:
//!
//! ```text
//! # Open Dutch WordNet	nld	http://wordpress.let.vupr.nl/odwn/	CC BY SA 4.0
//! 03001627-n	nld:lemma	stoel
//! ```

use super::write_file;
use crate::error::Result;
use crate::graph::Wordnet;
use std::path::Path;

const HEADER: [&str; 4] = [
    "# Open Dutch WordNet",
    "nld",
    "http://wordpress.let.vupr.nl/odwn/",
    "CC BY SA 4.0",
];

/// Render the OMW table.
///
/// Only entries with a lemma that belong to an `eng-<version>-<offset>-<pos>`
/// synset are listed; multi-word expressions are left out.
pub fn export_omw(wordnet: &Wordnet) -> String {
    let mut output = HEADER.join("\t");
    output.push('\n');

    for entry in wordnet.entries(false) {
        let Some(synset_id) = entry.synset_id.as_deref() else {
            continue;
        };
        if entry.lemma.is_empty() {
            continue;
        }
        let parts: Vec<&str> = synset_id.split('-').collect();
        if let ["eng", _, offset, pos] = parts.as_slice() {
            output.push_str(&format!("{offset}-{pos}\tnld:lemma\t{}\n", entry.lemma));
        }
    }

    output
}

/// Write the OMW table to `path`.
pub fn export_omw_file(wordnet: &Wordnet, path: &Path) -> Result<()> {
    write_file(path, &export_omw(wordnet))
}
