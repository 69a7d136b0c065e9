//! Turtle mapping from ili identifiers to the local copies of English synsets.

use super::write_file;
use crate::error::Result;
use crate::graph::Wordnet;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Render the ili map.
///
/// Every `eng-30-*` synset with at least one lemma produces
/// `ili:<ili>	owl:sameAs	<prefix>:<offset>-<pos> . # <lemmas>`, where the
/// prefix is the lexicon id followed by its version without dots
/// (`odwn13` for `odwn` 1.3).
pub fn export_ili_map(wordnet: &Wordnet) -> String {
    let meta = wordnet.meta();
    let prefix = format!("{}{}", meta.id, meta.version.replace('.', ""));

    let mut lemmas: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    for entry in wordnet.entries(true) {
        if let Some(synset_id) = entry.synset_id.as_deref() {
            if !entry.lemma.is_empty() {
                lemmas
                    .entry(synset_id)
                    .or_default()
                    .insert(entry.lemma.as_str());
            }
        }
    }

    let mut output = String::new();
    output.push('\n');
    output.push_str("@prefix\towl:\t<http://www.w3.org/2002/07/owl#> .\n\n");
    output.push_str("### Wordnets\n");
    output.push_str(&format!(
        "@prefix\t{prefix}:\t<http://{}-rdf.vu.nl/{prefix}/> .\n\n",
        meta.id
    ));
    output.push_str("### this file\n\n");
    output.push_str("@prefix ili: <http://globalwordnet.org/ili/> .\n");
    output.push_str("@base <http://globalwordnet.org/ili/ili-map.ttl>.\n\n");

    for synset in wordnet.synsets() {
        let Some(offset_pos) = synset.id.strip_prefix("eng-30-") else {
            continue;
        };
        let Some(synonyms) = lemmas.get(synset.id.as_str()) else {
            continue;
        };
        let synonyms: Vec<&str> = synonyms.iter().copied().collect();
        output.push_str(&format!(
            "ili:{}\towl:sameAs\t{prefix}:{offset_pos} . # {}\n",
            synset.ili,
            synonyms.join(", ")
        ));
    }

    output
}

/// Write the ili map to `path`.
pub fn export_ili_map_file(wordnet: &Wordnet, path: &Path) -> Result<()> {
    write_file(path, &export_ili_map(wordnet))
}
