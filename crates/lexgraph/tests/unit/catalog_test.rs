//! Unit tests for synset lookup, relation mutation and synset add/remove.

use lexgraph::{
    IliMap, LexicalEntry, Lexicon, LexiconConfig, LexiconError, RemoveSynsetOutcome, Synset,
    Wordnet,
};

const TOP: &str = "eng-30-00001740-n";
const MID: &str = "eng-30-00021939-n";
const LEAF: &str = "eng-30-03001627-n";
const VERB: &str = "eng-30-01835496-v";
const NEW: &str = "eng-30-04161981-n";
const NEW_ADJ: &str = "eng-30-00002098-a";

fn fixture(config: LexiconConfig) -> Wordnet {
    let mut lexicon = Lexicon::new("odwn", "Open Dutch WordNet", "nld", "1.3");
    lexicon.synsets.push(
        Synset::new(TOP, "i35545")
            .with_gloss("that which is perceived to have its own distinct existence", "en")
            .with_relation("has_hyponym", MID),
    );
    lexicon.synsets.push(
        Synset::new(MID, "i35562")
            .with_relation("has_hyperonym", TOP)
            .with_relation("has_hyponym", LEAF),
    );
    lexicon.synsets.push(
        Synset::new(LEAF, "i52431")
            .with_gloss("a seat for one person, with a support for the back", "en")
            .with_gloss("zitmeubel voor één persoon", "nl")
            .with_gloss("Sitzmöbel", "de")
            .with_relation("has_hyperonym", MID),
    );
    lexicon.synsets.push(Synset::new(VERB, "i25000"));
    lexicon.entries.push(
        LexicalEntry::new("stoel-n-1", "stoel", "noun", "o_n-000000100", LEAF)
            .with_provenance("cdb2.2_Manual"),
    );
    lexicon.entries.push(
        LexicalEntry::new("zetel-n-1", "zetel", "noun", "o_n-000000101", LEAF)
            .with_provenance("wiktionary"),
    );

    let mut ili = IliMap::new();
    ili.insert(NEW, "i56789");
    ili.insert(NEW_ADJ, "i2");
    ili.insert(TOP, "i35545");

    Wordnet::from_lexicon(lexicon, config)
        .unwrap()
        .with_ili_map(ili)
}

#[test]
fn test_find_synset() {
    let wordnet = fixture(LexiconConfig::default());
    assert_eq!(wordnet.find_synset(LEAF).unwrap().ili, "i52431");

    match wordnet.find_synset("eng-30-99999999-n") {
        Err(LexiconError::NotFound { kind, id }) => {
            assert_eq!(kind, "synset");
            assert_eq!(id, "eng-30-99999999-n");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_synsets_in_document_order() {
    let wordnet = fixture(LexiconConfig::default());
    let ids: Vec<_> = wordnet.synsets().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec![TOP, MID, LEAF, VERB]);
    // restartable
    assert_eq!(wordnet.synsets().count(), 4);
}

#[test]
fn test_glosses_default_and_explicit_languages() {
    let wordnet = fixture(LexiconConfig::default());
    let default: Vec<_> = wordnet
        .glosses(LEAF, None)
        .unwrap()
        .iter()
        .map(|g| g.language.as_str())
        .collect();
    assert_eq!(default, vec!["en", "nl"]);

    let german = wordnet.glosses(LEAF, Some(&["de"][..])).unwrap();
    assert_eq!(german.len(), 1);
    assert_eq!(german[0].text, "Sitzmöbel");
}

#[test]
fn test_relations_filtered_by_type() {
    let wordnet = fixture(LexiconConfig::default());
    assert_eq!(wordnet.relations(MID, None).unwrap().len(), 2);
    let hyponyms = wordnet.relations(MID, Some("has_hyponym")).unwrap();
    assert_eq!(hyponyms.len(), 1);
    assert_eq!(hyponyms[0].target, LEAF);
}

#[test]
fn test_add_relation_cross_pos_leaves_graph_unchanged() {
    let mut wordnet = fixture(LexiconConfig::default());
    let before = wordnet.counts();

    let err = wordnet.add_relation(LEAF, "has_hyperonym", VERB).unwrap_err();
    match err {
        LexiconError::CrossPosViolation {
            source_pos,
            target_pos,
            ..
        } => {
            assert_eq!(source_pos, 'n');
            assert_eq!(target_pos, 'v');
        }
        other => panic!("expected CrossPosViolation, got {other}"),
    }
    assert_eq!(wordnet.counts(), before);
}

#[test]
fn test_add_relation_duplicate() {
    let mut wordnet = fixture(LexiconConfig::default());
    let err = wordnet.add_relation(MID, "has_hyponym", LEAF).unwrap_err();
    assert!(matches!(err, LexiconError::AlreadyExists { .. }));
}

#[test]
fn test_add_relation_requires_known_type() {
    let mut wordnet = fixture(LexiconConfig::default());
    let err = wordnet.add_relation(LEAF, "near_synonym", TOP).unwrap_err();
    assert!(matches!(err, LexiconError::UnknownRelationType { .. }));

    wordnet.register_relation_type("near_synonym");
    wordnet.add_relation(LEAF, "near_synonym", TOP).unwrap();

    let added = wordnet.relations(LEAF, Some("near_synonym")).unwrap();
    assert_eq!(added[0].provenance, "odwn");
}

#[test]
fn test_remove_relation() {
    let mut wordnet = fixture(LexiconConfig::default());
    let removed = wordnet.remove_relation(LEAF, "has_hyperonym", MID).unwrap();
    assert_eq!(removed.provenance, "pwn");
    assert!(matches!(
        wordnet.remove_relation(LEAF, "has_hyperonym", MID),
        Err(LexiconError::NotFound { .. })
    ));
}

#[test]
fn test_add_synset_keeps_node_with_hypernym() {
    let mut wordnet = fixture(LexiconConfig::default());
    let outcome = wordnet
        .add_synset(
            NEW,
            "pwn",
            "a simple seat without a back or arms",
            &[
                ("has_hyperonym", MID),
                ("has_hyperonym", VERB),
                ("has_hyponym", "eng-30-99999999-n"),
            ],
        )
        .unwrap();

    assert_eq!(outcome.ili, "i56789");
    assert_eq!(outcome.added.len(), 1);
    assert_eq!(outcome.rejected.len(), 2);
    assert!(matches!(
        outcome.rejected[0].1,
        LexiconError::CrossPosViolation { .. }
    ));

    let synset = wordnet.find_synset(NEW).unwrap();
    assert_eq!(synset.glosses[0].language, "en");
    assert_eq!(synset.glosses[0].provenance.as_deref(), Some("pwn"));
    assert_eq!(synset.relations.len(), 1);
    assert_eq!(synset.relations[0].provenance, "odwn");
}

#[test]
fn test_add_synset_without_hypernym_rolls_back() {
    let mut wordnet = fixture(LexiconConfig::default());
    let before = wordnet.counts();

    let err = wordnet
        .add_synset(NEW, "pwn", "a stool", &[("has_hyponym", LEAF), ("has_hyperonym", VERB)])
        .unwrap_err();
    assert!(matches!(err, LexiconError::InvalidOperation { .. }));
    assert!(wordnet.find_synset(NEW).is_err());
    assert_eq!(wordnet.counts(), before);
}

#[test]
fn test_add_synset_accepts_hypernym_alias() {
    let mut wordnet = fixture(LexiconConfig::default());
    wordnet.register_relation_type("hypernym");

    let outcome = wordnet
        .add_synset(NEW, "pwn", "a simple seat without a back or arms", &[("hypernym", MID)])
        .unwrap();
    assert_eq!(outcome.added.len(), 1);
    assert!(wordnet.find_synset(NEW).is_ok());
    assert!(!wordnet.tops().contains(&NEW));
}

#[test]
fn test_add_synset_adjective_exception() {
    let mut wordnet = fixture(LexiconConfig::default());
    assert!(wordnet.add_synset(NEW_ADJ, "pwn", "huge", &[]).is_ok());

    let mut strict = fixture(LexiconConfig::default().with_adjective_exception(false));
    assert!(strict.add_synset(NEW_ADJ, "pwn", "huge", &[]).is_err());
}

#[test]
fn test_add_synset_checks() {
    let mut wordnet = fixture(LexiconConfig::default());
    assert!(matches!(
        wordnet.add_synset("eng-30-12345678-n", "pwn", "x", &[("has_hyperonym", MID)]),
        Err(LexiconError::MissingIli { .. })
    ));
    assert!(matches!(
        wordnet.add_synset(TOP, "pwn", "x", &[("has_hyperonym", MID)]),
        Err(LexiconError::DuplicateId { .. })
    ));
}

#[test]
fn test_add_local_synset_gets_pending_ili() {
    let mut wordnet = fixture(LexiconConfig::default());
    let outcome = wordnet
        .add_synset("odwn-10-101264937-n", "odwn", "een kort bericht", &[("has_hyperonym", MID)])
        .unwrap();
    assert_eq!(outcome.ili, "in");
    assert_eq!(wordnet.find_synset("odwn-10-101264937-n").unwrap().ili, "in");
}

#[test]
fn test_remove_leaf_with_cascade() {
    let mut wordnet = fixture(LexiconConfig::default());

    let outcome = wordnet.remove_synset(LEAF, true).unwrap();
    assert_eq!(
        outcome,
        RemoveSynsetOutcome {
            removed: true,
            entries_removed: 2,
            edges_stripped: 1,
        }
    );
    assert!(wordnet.find_synset(LEAF).is_err());
    assert_eq!(wordnet.entries_of_synset(LEAF).count(), 0);
    assert!(wordnet.relations(MID, Some("has_hyponym")).unwrap().is_empty());

    assert!(matches!(
        wordnet.remove_synset(LEAF, true),
        Err(LexiconError::NotFound { .. })
    ));
}

#[test]
fn test_remove_synset_with_hyponyms_is_retained() {
    let mut wordnet = fixture(LexiconConfig::default());
    let outcome = wordnet.remove_synset(MID, false).unwrap();
    assert!(!outcome.removed);
    assert!(wordnet.find_synset(MID).is_ok());
}
