//! End-to-end tests: load, mutate, clean, validate and write LMF documents.

use flate2::write::GzEncoder;
use flate2::Compression;
use lexgraph::export::ili_map::export_ili_map_file;
use lexgraph::export::lmf::export_lmf;
use lexgraph::export::omw::export_omw_file;
use lexgraph::lmf::{read_lmf_file, write_lmf, write_lmf_file};
use lexgraph::{
    LexicalEntry, Lexicon, LexiconConfig, LexiconError, NewEntry, Result, SchemaValidator,
    StructuralValidator, Synset, Wordnet,
};
use std::io::Write;
use tempfile::TempDir;

const ENTITY: &str = "eng-30-00001740-n";
const SEAT: &str = "eng-30-04161981-n";
const CHAIR: &str = "eng-30-03001627-n";
const STOOL: &str = "eng-30-04326896-n";

fn sample() -> Lexicon {
    let mut lexicon = Lexicon::new("odwn", "Open Dutch WordNet", "nld", "1.3");
    lexicon.synsets.push(
        Synset::new(ENTITY, "i35545")
            .with_gloss("that which is perceived to have its own distinct existence", "en")
            .with_relation("has_hyponym", SEAT),
    );
    lexicon.synsets.push(
        Synset::new(SEAT, "i56789")
            .with_gloss("furniture that is designed for sitting on", "en")
            .with_relation("has_hyperonym", ENTITY)
            .with_relation("has_hyponym", CHAIR),
    );
    lexicon.synsets.push(
        Synset::new(CHAIR, "i52431")
            .with_gloss("a seat for one person, with a support for the back", "en")
            .with_gloss("zitmeubel voor één persoon & met leuning", "nl"),
    );
    lexicon.entries.push(
        LexicalEntry::new("stoel-n-1", "stoel", "noun", "o_n-000000100", CHAIR)
            .with_provenance("cdb2.2_Manual"),
    );
    lexicon.entries.push(
        LexicalEntry::new("zetel-n-1", "zetel", "noun", "o_n-000000101", SEAT)
            .with_provenance("wiktionary"),
    );
    lexicon.entries.push(LexicalEntry::new(
        "in_de_war-mwe-1",
        "in de war",
        "adjective",
        "o_a-000000102",
        CHAIR,
    ));
    lexicon
}

struct RejectAll;

impl SchemaValidator for RejectAll {
    fn validate(&self, _lexicon: &Lexicon) -> Result<()> {
        Err(LexiconError::Schema {
            message: "rejected".to_string(),
        })
    }
}

#[test]
fn test_write_then_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("odwn.xml");

    write_lmf_file(&sample(), &path).unwrap();
    assert_eq!(read_lmf_file(&path).unwrap(), sample());
}

#[test]
fn test_open_gzip_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("odwn.xml.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&write_lmf(&sample()).unwrap()).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let wordnet = Wordnet::open(&path, LexiconConfig::default()).unwrap();
    assert_eq!(wordnet.counts().synsets, 3);
    assert_eq!(wordnet.find_sense("o_n-000000100").unwrap().lemma, "stoel");
    assert_eq!(wordnet.to_lexicon(), sample());
}

#[test]
fn test_open_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Wordnet::open(temp_dir.path().join("absent.xml"), LexiconConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, LexiconError::Storage { .. }));
}

#[test]
fn test_export_lmf_after_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.xml");

    let mut wordnet = Wordnet::from_lexicon(sample(), LexiconConfig::default()).unwrap();
    wordnet
        .add_entry(NewEntry::new("kruk", "noun", 'n', SEAT).with_provenance("google"))
        .unwrap();
    wordnet.add_relation(ENTITY, "has_hyponym", CHAIR).unwrap();

    let report = export_lmf(&mut wordnet, &StructuralValidator, &path).unwrap();
    // two inverse hypernym edges and one default provenance
    assert_eq!(report.relations_added, 2);
    assert_eq!(report.provenance_repaired, 1);

    let reloaded = Wordnet::open(&path, LexiconConfig::default()).unwrap();
    assert_eq!(reloaded.to_lexicon(), wordnet.to_lexicon());
    assert_eq!(reloaded.entries(true).next().unwrap().lemma, "kruk");
    assert!(reloaded
        .relations(CHAIR, Some("has_hyperonym"))
        .unwrap()
        .iter()
        .any(|r| r.target == ENTITY && r.provenance == "odwn"));
    assert!(reloaded.symmetry_gaps("has_hyponym", "has_hyperonym").is_empty());
}

#[test]
fn test_rejected_export_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rejected.xml");

    let mut wordnet = Wordnet::from_lexicon(sample(), LexiconConfig::default()).unwrap();
    let err = export_lmf(&mut wordnet, &RejectAll, &path).unwrap_err();
    assert!(matches!(err, LexiconError::Schema { .. }));
    assert!(!path.exists());
}

#[test]
fn test_tab_and_turtle_exports() {
    let temp_dir = TempDir::new().unwrap();
    let omw = temp_dir.path().join("wn-data-nld.tab");
    let ili = temp_dir.path().join("ili-map-odwn13.ttl");

    let wordnet = Wordnet::from_lexicon(sample(), LexiconConfig::default()).unwrap();
    export_omw_file(&wordnet, &omw).unwrap();
    export_ili_map_file(&wordnet, &ili).unwrap();

    let tab = std::fs::read_to_string(&omw).unwrap();
    let lines: Vec<_> = tab.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec!["03001627-n\tnld:lemma\tstoel", "04161981-n\tnld:lemma\tzetel"]
    );

    let turtle = std::fs::read_to_string(&ili).unwrap();
    assert!(turtle.contains("ili:i52431\towl:sameAs\todwn13:03001627-n . # in de war, stoel\n"));
    assert!(!turtle.contains("ili:i35545"));
}

#[test]
fn test_ili_map_drives_add_synset() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ili.nt.gz");

    let triples = format!(
        "<http://globalwordnet.org/ili/i58000> <http://www.w3.org/2002/07/owl#sameAs> <http://wordnet-rdf.princeton.edu/wn30/eng-{}> .\n",
        STOOL.trim_start_matches("eng-30-")
    );
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(triples.as_bytes()).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let mut wordnet = Wordnet::from_lexicon(sample(), LexiconConfig::default()).unwrap();
    assert_eq!(wordnet.load_ili_map(&path).unwrap(), 1);

    let outcome = wordnet
        .add_synset(STOOL, "pwn", "a simple seat without a back or arms", &[("has_hyperonym", SEAT)])
        .unwrap();
    assert_eq!(outcome.ili, "i58000");
    assert_eq!(wordnet.find_synset(STOOL).unwrap().ili, "i58000");
}

#[test]
fn test_config_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lexgraph.json");
    std::fs::write(
        &path,
        r#"{"default_provenance": "manual", "gloss_languages": ["nl"]}"#,
    )
    .unwrap();

    let config = LexiconConfig::from_json_file(&path).unwrap();
    assert_eq!(config.default_provenance, "manual");
    assert_eq!(config.gloss_languages, vec!["nl"]);
    assert_eq!(config.hyponym_type, "has_hyponym");

    let wordnet = Wordnet::from_lexicon(sample(), config).unwrap();
    let glosses = wordnet.glosses(CHAIR, None).unwrap();
    assert_eq!(glosses.len(), 1);
    assert_eq!(glosses[0].language, "nl");
}
