//! Consistency report example
//!
//! Builds a small lexicon with a few typical defects (a missing inverse
//! hypernym edge, a dangling relation, an entry without provenance), prints
//! the statistics report, repairs the graph and writes it back as LMF.
//!
//! Pass a path to an LMF file (plain or gzip) to run the report on a real
//! resource instead.

use lexgraph::export::json::export_stats_json;
use lexgraph::export::lmf::export_lmf;
use lexgraph::{
    LexicalEntry, Lexicon, LexiconConfig, NewEntry, StructuralValidator, Synset, Wordnet,
};
use std::path::Path;

fn demo_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new("odwn", "Open Dutch WordNet", "nld", "1.3");
    lexicon.synsets.push(
        Synset::new("eng-30-04161981-n", "i56789")
            .with_gloss("furniture that is designed for sitting on", "en")
            .with_relation("has_hyponym", "eng-30-03001627-n"),
    );
    lexicon.synsets.push(
        Synset::new("eng-30-03001627-n", "i52431")
            .with_gloss("a seat for one person, with a support for the back", "en")
            .with_relation("has_hyperonym", "eng-30-99999999-n"),
    );
    lexicon.entries.push(
        LexicalEntry::new("stoel-n-1", "stoel", "noun", "o_n-000000100", "eng-30-03001627-n")
            .with_provenance("cdb2.2_Manual"),
    );
    lexicon.entries.push(LexicalEntry::new(
        "zetel-n-1",
        "zetel",
        "noun",
        "o_n-000000101",
        "eng-30-04161981-n",
    ));
    lexicon
}

fn main() -> lexgraph::Result<()> {
    let config = LexiconConfig::default();
    let mut wordnet = match std::env::args().nth(1) {
        Some(path) => Wordnet::open(&path, config)?,
        None => Wordnet::from_lexicon(demo_lexicon(), config)?,
    };

    let counts = wordnet.counts();
    println!(
        "✓ Loaded {} ({} synsets, {} entries, {} relations)\n",
        wordnet.meta().label,
        counts.synsets,
        counts.entries,
        counts.relations
    );

    println!("=== Before clean ===\n");
    println!("{}\n", export_stats_json(&wordnet)?);

    let audit = wordnet.relation_audit();
    for failure in audit.failures.iter().take(10) {
        println!("   ✗ {} ({})", failure.edge, failure.reason);
    }

    wordnet.add_entry(
        NewEntry::new("kruk", "noun", 'n', "eng-30-04161981-n").with_provenance("wiktionary"),
    )?;
    println!("\n✓ Added 'kruk'; synonyms of 'zetel': {:?}", wordnet.synonyms("zetel"));

    let output = Path::new("./consistency_report.xml");
    let report = export_lmf(&mut wordnet, &StructuralValidator, output)?;

    println!("\n=== Clean ===\n");
    println!("   Provenance repaired: {}", report.provenance_repaired);
    println!("   Relations removed:   {}", report.relations_removed);
    println!("   Relations added:     {}", report.relations_added);
    println!("\n✓ Wrote {}", output.display());

    Ok(())
}
