use crate::error::{LexiconError, Result};
use crate::graph::types::{Gloss, LexicalEntry, Lexicon, Relation, Synset, TagSet};
use log::{info, warn};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::Path;

/// Parse an LMF document (plain or gzip-compressed bytes).
///
/// # Errors
///
/// Returns [`LexiconError::Parse`] for malformed XML, a missing `Lexicon`
/// element, or a lexical entry without (or with more than one) `Sense`.
pub fn read_lmf(bytes: &[u8]) -> Result<Lexicon> {
    let bytes = super::decompress(bytes.to_vec())?;
    LmfReader::default().read(&bytes)
}

/// Parse an LMF file from disk.
pub fn read_lmf_file(path: impl AsRef<Path>) -> Result<Lexicon> {
    let path = path.as_ref();
    let bytes = super::read_file(path)?;
    let lexicon = LmfReader::default().read(&bytes)?;
    info!(
        "Read {} ({} entries, {} synsets)",
        path.display(),
        lexicon.entries.len(),
        lexicon.synsets.len()
    );
    Ok(lexicon)
}

#[derive(Default)]
struct PendingEntry {
    id: String,
    pos: String,
    lemma: String,
    sense: Option<LexicalEntry>,
}

#[derive(Default)]
struct LmfReader {
    lexicon: Option<Lexicon>,
    entry: Option<PendingEntry>,
    synset: Option<Synset>,
}

impl LmfReader {
    fn read(mut self, input: &[u8]) -> Result<Lexicon> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => self.start(e)?,
                Ok(Event::Empty(ref e)) => {
                    self.start(e)?;
                    self.end(e.name().as_ref())?;
                }
                Ok(Event::End(ref e)) => self.end(e.name().as_ref())?,
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(LexiconError::parse(format!(
                        "XML error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        self.lexicon
            .ok_or_else(|| LexiconError::parse("document has no Lexicon element"))
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.name().as_ref() {
            b"Lexicon" => {
                let mut attrs = attributes(e)?;
                self.lexicon = Some(Lexicon::new(
                    attrs.remove("id").unwrap_or_default(),
                    attrs.remove("label").unwrap_or_default(),
                    attrs.remove("language").unwrap_or_default(),
                    attrs.remove("version").unwrap_or_default(),
                ));
            }
            b"LexicalEntry" => {
                let mut attrs = attributes(e)?;
                self.entry = Some(PendingEntry {
                    id: attrs.remove("id").unwrap_or_default(),
                    pos: attrs.remove("partOfSpeech").unwrap_or_default(),
                    ..PendingEntry::default()
                });
            }
            b"Lemma" => {
                let mut attrs = attributes(e)?;
                if let Some(entry) = self.entry.as_mut() {
                    entry.lemma = attrs.remove("writtenForm").unwrap_or_default();
                }
            }
            b"Sense" => {
                let attrs = attributes(e)?;
                let entry = self
                    .entry
                    .as_mut()
                    .ok_or_else(|| LexiconError::parse("Sense outside of a LexicalEntry"))?;
                if entry.sense.is_some() {
                    return Err(LexiconError::parse(format!(
                        "LexicalEntry {} has more than one Sense",
                        entry.id
                    )));
                }
                entry.sense = Some(sense(entry, attrs));
            }
            b"Synset" => {
                let mut attrs = attributes(e)?;
                self.synset = Some(Synset::new(
                    attrs.remove("id").unwrap_or_default(),
                    attrs.remove("ili").unwrap_or_default(),
                ));
            }
            b"Definition" => {
                let mut attrs = attributes(e)?;
                if let Some(synset) = self.synset.as_mut() {
                    synset.glosses.push(Gloss {
                        text: attrs.remove("gloss").unwrap_or_default(),
                        language: attrs.remove("language").unwrap_or_default(),
                        provenance: attrs.remove("provenance"),
                    });
                }
            }
            b"SynsetRelation" => {
                let mut attrs = attributes(e)?;
                if let Some(synset) = self.synset.as_mut() {
                    synset.relations.push(Relation::new(
                        attrs.remove("relType").unwrap_or_default(),
                        attrs.remove("target").unwrap_or_default(),
                        attrs.remove("provenance").unwrap_or_default(),
                    ));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"LexicalEntry" => {
                let Some(pending) = self.entry.take() else {
                    return Ok(());
                };
                let Some(mut entry) = pending.sense else {
                    return Err(LexiconError::parse(format!(
                        "LexicalEntry {} has no Sense",
                        pending.id
                    )));
                };
                entry.lemma = pending.lemma;
                self.lexicon_mut()?.entries.push(entry);
            }
            b"Synset" => {
                if let Some(synset) = self.synset.take() {
                    self.lexicon_mut()?.synsets.push(synset);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn lexicon_mut(&mut self) -> Result<&mut Lexicon> {
        self.lexicon
            .as_mut()
            .ok_or_else(|| LexiconError::parse("element outside of a Lexicon"))
    }
}

fn sense(entry: &PendingEntry, mut attrs: HashMap<String, String>) -> LexicalEntry {
    let sense_number = match attrs.remove("senseId") {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Non-numeric senseId '{raw}' on {}; using 1", entry.id);
            1
        }),
        None => 1,
    };

    LexicalEntry {
        id: entry.id.clone(),
        lemma: String::new(),
        pos: entry.pos.clone(),
        sense_id: attrs.remove("id").unwrap_or_default(),
        sense_number,
        provenance: attrs
            .remove("provenance")
            .map(TagSet::from)
            .unwrap_or_default(),
        annotator: attrs
            .remove("annotator")
            .map(TagSet::from)
            .unwrap_or_default(),
        definition: attrs.remove("definition").filter(|d| !d.is_empty()),
        synset_id: attrs.remove("synset").filter(|s| !s.is_empty()),
    }
}

fn attributes(e: &BytesStart<'_>) -> Result<HashMap<String, String>> {
    let mut attrs = HashMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| LexiconError::parse(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| LexiconError::parse(format!("Attribute key error: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| LexiconError::parse(format!("Attribute value error: {e}")))?
            .to_string();
        attrs.insert(key, value);
    }
    Ok(attrs)
}
