//! Unit tests for the lexical entry and lemma indices.

use lexgraph::{
    AddEntryOutcome, LexicalEntry, Lexicon, LexiconConfig, LexiconError, NewEntry, Synset,
    Wordnet,
};

const CHAIR: &str = "eng-30-03001627-n";
const SEAT: &str = "eng-30-04161981-n";
const CONFUSED: &str = "eng-30-00435492-a";
const WALK: &str = "eng-30-01904930-v";
const ARMCHAIR: &str = "eng-30-02738535-n";

fn fixture() -> Wordnet {
    let mut lexicon = Lexicon::new("odwn", "Open Dutch WordNet", "nld", "1.3");
    lexicon.synsets.push(Synset::new(CHAIR, "i52431"));
    lexicon.synsets.push(Synset::new(SEAT, "i56789"));
    lexicon.synsets.push(Synset::new(CONFUSED, "i4000"));
    lexicon.synsets.push(Synset::new(WALK, "i25000"));
    lexicon.synsets.push(Synset::new(ARMCHAIR, "i53000"));
    lexicon.entries.push(
        LexicalEntry::new("stoel-n-1", "stoel", "noun", "o_n-000000100", CHAIR)
            .with_provenance("cdb2.2_Manual+wiktionary"),
    );
    lexicon.entries.push(
        LexicalEntry::new("zetel-n-1", "zetel", "noun", "o_n-000000101", CHAIR)
            .with_provenance("wiktionary"),
    );
    lexicon.entries.push(
        LexicalEntry::new("zetel-n-2", "zetel", "noun", "o_n-000000102", SEAT)
            .with_sense_number(2),
    );
    lexicon.entries.push(
        LexicalEntry::new("in_de_war-mwe-1", "in de war", "adjective", "o_a-000000103", CONFUSED)
            .with_provenance("cdb2.2_Manual"),
    );
    lexicon.entries.push(
        LexicalEntry::new("lopen-v-1", "lopen", "verb", "o_v-000000104", WALK)
            .with_provenance("cdb2.2_Manual"),
    );
    Wordnet::from_lexicon(lexicon, LexiconConfig::default()).unwrap()
}

#[test]
fn test_entries_skip_multiword_by_default() {
    let wordnet = fixture();
    assert_eq!(wordnet.entries(false).count(), 4);
    assert_eq!(wordnet.entries(true).count(), 5);
    assert!(wordnet.entries(false).all(|e| !e.id.contains("mwe")));
}

#[test]
fn test_lookups() {
    let wordnet = fixture();
    assert_eq!(wordnet.find_entry("zetel-n-2").unwrap().synset_id.as_deref(), Some(SEAT));
    assert_eq!(wordnet.find_sense("o_v-000000104").unwrap().lemma, "lopen");
    assert!(matches!(
        wordnet.find_entry("kruk-n-1"),
        Err(LexiconError::NotFound { .. })
    ));
    assert!(wordnet.find_sense("o_n-1").is_err());

    assert_eq!(wordnet.entries_of_synset(CHAIR).count(), 2);
    assert_eq!(wordnet.entries_by_lemma("zetel", None).count(), 2);
    assert_eq!(wordnet.entries_by_lemma("zetel", Some("verb")).count(), 0);
}

#[test]
fn test_add_entry_creates_at_head() {
    let mut wordnet = fixture();
    let outcome = wordnet
        .add_entry(
            NewEntry::new("kruk", "noun", 'n', SEAT)
                .with_provenance("wiktionary")
                .with_definition("zitmeubel zonder leuning"),
        )
        .unwrap();

    assert_eq!(
        outcome,
        AddEntryOutcome::Created {
            entry_id: "kruk-n-1".to_string(),
            sense_id: "o_n-000000105".to_string(),
        }
    );

    let first = wordnet.entries(true).next().unwrap();
    assert_eq!(first.lemma, "kruk");
    assert_eq!(first.definition.as_deref(), Some("zitmeubel zonder leuning"));
    assert_eq!(wordnet.find_sense("o_n-000000105").unwrap().id, "kruk-n-1");
}

#[test]
fn test_add_entry_twice_merges_provenance() {
    let mut wordnet = fixture();
    let first = wordnet
        .add_entry(NewEntry::new("stoel", "noun", 'n', SEAT).with_provenance("google"))
        .unwrap();
    assert!(matches!(first, AddEntryOutcome::Created { .. }));
    let count = wordnet.counts().entries;

    let second = wordnet
        .add_entry(
            NewEntry::new("stoel", "noun", 'n', SEAT)
                .with_provenance("bing")
                .with_annotator("marten"),
        )
        .unwrap();

    let AddEntryOutcome::Merged { sense_id, tags_added } = second else {
        panic!("expected the second add to merge");
    };
    assert_eq!(tags_added, 2);
    assert_eq!(wordnet.counts().entries, count);

    let merged = wordnet.find_sense(&sense_id).unwrap();
    assert!(merged.provenance.contains("google"));
    assert!(merged.provenance.contains("bing"));
    assert!(merged.annotator.contains("marten"));
}

#[test]
fn test_sense_number_continues_per_lemma() {
    let mut wordnet = fixture();
    let created = wordnet
        .add_entry(NewEntry::new("zetel", "noun", 'n', ARMCHAIR))
        .unwrap();
    match created {
        AddEntryOutcome::Created { entry_id, .. } => assert_eq!(entry_id, "zetel-n-3"),
        other => panic!("expected Created, got {other:?}"),
    }
    assert_eq!(wordnet.highest_sense_number("zetel", "noun"), 3);
}

#[test]
fn test_add_entry_unknown_synset() {
    let mut wordnet = fixture();
    let err = wordnet
        .add_entry(NewEntry::new("kruk", "noun", 'n', "eng-30-99999999-n"))
        .unwrap_err();
    assert!(matches!(err, LexiconError::NotFound { .. }));
}

#[test]
fn test_explicit_sense_id_collision() {
    let mut wordnet = fixture();
    let before = wordnet.counts();
    let err = wordnet
        .add_entry(NewEntry::new("kruk", "noun", 'n', SEAT).with_sense_id("o_n-000000100"))
        .unwrap_err();
    assert!(matches!(err, LexiconError::DuplicateId { .. }));
    assert_eq!(wordnet.counts(), before);
}

#[test]
fn test_minted_sense_ids_are_unique() {
    let mut wordnet = fixture();
    let mut minted = Vec::new();
    for lemma in ["bank", "kruk", "sofa", "bankje"] {
        if let AddEntryOutcome::Created { sense_id, .. } = wordnet
            .add_entry(NewEntry::new(lemma, "noun", 'n', SEAT))
            .unwrap()
        {
            minted.push(sense_id);
        }
    }
    assert_eq!(
        minted,
        vec!["o_n-000000105", "o_n-000000106", "o_n-000000107", "o_n-000000108"]
    );
}

#[test]
fn test_remove_entry() {
    let mut wordnet = fixture();
    let removed = wordnet.remove_entry("zetel-n-1").unwrap();
    assert_eq!(removed.sense_id, "o_n-000000101");
    assert!(wordnet.find_sense("o_n-000000101").is_err());
    assert_eq!(wordnet.num_senses("zetel", "noun"), 1);

    assert!(matches!(
        wordnet.remove_entry("zetel-n-1"),
        Err(LexiconError::NotFound { .. })
    ));
}

#[test]
fn test_remove_by_provenance() {
    let mut wordnet = fixture();
    let removal = wordnet.remove_by_provenance("wiktionary");
    assert_eq!(removal.removed, 1);
    assert_eq!(removal.stripped, 1);

    assert!(wordnet.find_entry("zetel-n-1").is_err());
    let stoel = wordnet.find_entry("stoel-n-1").unwrap();
    assert_eq!(stoel.provenance.to_string(), "cdb2.2_Manual");
}

#[test]
fn test_default_provenance_pass() {
    let mut wordnet = fixture();
    assert_eq!(wordnet.default_provenance_pass(), 1);
    assert!(wordnet
        .find_entry("zetel-n-2")
        .unwrap()
        .provenance
        .contains("cdb2.2_Auto"));
    assert_eq!(wordnet.default_provenance_pass(), 0);
}

#[test]
fn test_lemma_index() {
    let wordnet = fixture();
    assert_eq!(wordnet.num_senses("zetel", "noun"), 2);
    assert_eq!(wordnet.senses_of("zetel", "noun").len(), 2);
    assert_eq!(wordnet.highest_sense_number("zetel", "noun"), 2);
    assert_eq!(wordnet.highest_sense_number("kruk", "noun"), 0);

    let nouns = wordnet.lemma_frequencies(Some("noun"));
    assert_eq!(nouns.get("zetel"), Some(&2));
    assert_eq!(nouns.get("lopen"), None);
}

#[test]
fn test_synonyms() {
    let mut wordnet = fixture();
    let synonyms: Vec<_> = wordnet.synonyms("stoel").into_iter().collect();
    assert_eq!(synonyms, vec!["zetel"]);

    wordnet
        .add_entry(NewEntry::new("kruk", "noun", 'n', CHAIR))
        .unwrap();
    assert!(wordnet.synonyms("stoel").contains("kruk"));
    assert_eq!(wordnet.synonyms("zetel").len(), 2);
}

#[test]
fn test_shared_entry_id_survives_removal() {
    let mut wordnet = fixture();
    let outcome = wordnet
        .add_entry(NewEntry::new("stoel", "noun", 'n', SEAT).with_sense_number(1))
        .unwrap();
    assert!(matches!(
        outcome,
        AddEntryOutcome::Created { ref entry_id, .. } if entry_id == "stoel-n-1"
    ));
    assert_eq!(wordnet.store().entries_with_id("stoel-n-1"), 2);

    let removed = wordnet.remove_entry("stoel-n-1").unwrap();
    assert_eq!(removed.synset_id.as_deref(), Some(CHAIR));
    assert_eq!(
        wordnet.find_entry("stoel-n-1").unwrap().synset_id.as_deref(),
        Some(SEAT)
    );

    wordnet.remove_entry("stoel-n-1").unwrap();
    assert!(matches!(
        wordnet.remove_entry("stoel-n-1"),
        Err(LexiconError::NotFound { .. })
    ));
    assert_eq!(wordnet.entries_by_lemma("stoel", None).count(), 0);
}

#[test]
fn test_synonym_cache_follows_synset_removal() {
    let mut wordnet = fixture();
    assert!(wordnet.synonyms("zetel").contains("stoel"));

    let outcome = wordnet.remove_synset(CHAIR, true).unwrap();
    assert_eq!(outcome.entries_removed, 2);
    assert!(wordnet.synonyms("zetel").is_empty());
    assert!(wordnet.synonyms("stoel").is_empty());
}

#[test]
fn test_synonym_cache_follows_provenance_removal() {
    let mut wordnet = fixture();
    assert!(wordnet.synonyms("stoel").contains("zetel"));

    let removal = wordnet.remove_by_provenance("wiktionary");
    assert_eq!(removal.removed, 1);
    assert_eq!(removal.stripped, 1);
    assert!(wordnet.synonyms("stoel").is_empty());
}
