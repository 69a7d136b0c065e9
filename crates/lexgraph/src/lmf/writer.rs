use crate::error::{LexiconError, Result};
use crate::graph::types::{LexicalEntry, Lexicon, Synset};
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;
use std::path::Path;

/// Serialize a document to LMF XML.
pub fn write_lmf(lexicon: &Lexicon) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    emit(&mut writer, Event::Start(BytesStart::new("LexicalResource")))?;

    let mut lexicon_start = BytesStart::new("Lexicon");
    lexicon_start.push_attribute(("id", lexicon.id.as_str()));
    lexicon_start.push_attribute(("label", lexicon.label.as_str()));
    lexicon_start.push_attribute(("language", lexicon.language.as_str()));
    lexicon_start.push_attribute(("version", lexicon.version.as_str()));
    emit(&mut writer, Event::Start(lexicon_start))?;

    for entry in &lexicon.entries {
        write_entry(&mut writer, entry)?;
    }
    for synset in &lexicon.synsets {
        write_synset(&mut writer, synset)?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("Lexicon")))?;
    emit(&mut writer, Event::End(BytesEnd::new("LexicalResource")))?;

    let mut output = buffer.into_inner();
    output.push(b'\n');
    Ok(output)
}

/// Serialize a document to an LMF file.
pub fn write_lmf_file(lexicon: &Lexicon, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = write_lmf(lexicon)?;
    std::fs::write(path, bytes).map_err(|e| {
        LexiconError::storage(format!("Failed to write {}", path.display()), Some(e))
    })?;
    info!(
        "Wrote {} ({} entries, {} synsets)",
        path.display(),
        lexicon.entries.len(),
        lexicon.synsets.len()
    );
    Ok(())
}

fn write_entry<W: std::io::Write>(writer: &mut Writer<W>, entry: &LexicalEntry) -> Result<()> {
    let mut start = BytesStart::new("LexicalEntry");
    start.push_attribute(("id", entry.id.as_str()));
    start.push_attribute(("partOfSpeech", entry.pos.as_str()));
    emit(writer, Event::Start(start))?;

    let mut lemma = BytesStart::new("Lemma");
    lemma.push_attribute(("writtenForm", entry.lemma.as_str()));
    emit(writer, Event::Empty(lemma))?;

    let sense_number = entry.sense_number.to_string();
    let provenance = entry.provenance.to_string();
    let mut sense = BytesStart::new("Sense");
    sense.push_attribute(("id", entry.sense_id.as_str()));
    sense.push_attribute(("senseId", sense_number.as_str()));
    sense.push_attribute(("definition", entry.definition.as_deref().unwrap_or("")));
    if let Some(synset_id) = &entry.synset_id {
        sense.push_attribute(("synset", synset_id.as_str()));
    }
    sense.push_attribute(("provenance", provenance.as_str()));
    let annotator = entry.annotator.to_string();
    if !annotator.is_empty() {
        sense.push_attribute(("annotator", annotator.as_str()));
    }
    emit(writer, Event::Empty(sense))?;

    emit(writer, Event::End(BytesEnd::new("LexicalEntry")))
}

fn write_synset<W: std::io::Write>(writer: &mut Writer<W>, synset: &Synset) -> Result<()> {
    let mut start = BytesStart::new("Synset");
    start.push_attribute(("id", synset.id.as_str()));
    start.push_attribute(("ili", synset.ili.as_str()));
    emit(writer, Event::Start(start))?;

    if synset.glosses.is_empty() {
        emit(writer, Event::Empty(BytesStart::new("Definitions")))?;
    } else {
        emit(writer, Event::Start(BytesStart::new("Definitions")))?;
        for gloss in &synset.glosses {
            let mut definition = BytesStart::new("Definition");
            definition.push_attribute(("gloss", gloss.text.as_str()));
            definition.push_attribute(("language", gloss.language.as_str()));
            if let Some(provenance) = &gloss.provenance {
                definition.push_attribute(("provenance", provenance.as_str()));
            }
            emit(writer, Event::Empty(definition))?;
        }
        emit(writer, Event::End(BytesEnd::new("Definitions")))?;
    }

    if synset.relations.is_empty() {
        emit(writer, Event::Empty(BytesStart::new("SynsetRelations")))?;
    } else {
        emit(writer, Event::Start(BytesStart::new("SynsetRelations")))?;
        for relation in &synset.relations {
            let mut element = BytesStart::new("SynsetRelation");
            element.push_attribute(("relType", relation.rel_type.as_str()));
            element.push_attribute(("target", relation.target.as_str()));
            element.push_attribute(("provenance", relation.provenance.as_str()));
            emit(writer, Event::Empty(element))?;
        }
        emit(writer, Event::End(BytesEnd::new("SynsetRelations")))?;
    }

    emit(writer, Event::End(BytesEnd::new("Synset")))
}

fn emit<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| LexiconError::serialization(format!("LMF write error: {e}"), None::<std::io::Error>))
}
