//! Validated LMF export.

use crate::consistency::CleanReport;
use crate::error::Result;
use crate::graph::Wordnet;
use crate::lmf::write_lmf_file;
use crate::schema::SchemaValidator;
use log::info;
use std::path::Path;

/// Clean the graph, validate the resulting document and write it to `path`.
///
/// Nothing is written if validation fails; the clean pass has been applied
/// to `wordnet` either way.
///
/// # Errors
///
/// Returns [`LexiconError::Schema`](crate::LexiconError::Schema) with the first
/// violation, or [`LexiconError::Storage`](crate::LexiconError::Storage) if the
/// file cannot be written.
pub fn export_lmf(
    wordnet: &mut Wordnet,
    validator: &dyn SchemaValidator,
    path: &Path,
) -> Result<CleanReport> {
    let report = wordnet.clean();
    let lexicon = wordnet.to_lexicon();
    validator.validate(&lexicon)?;
    write_lmf_file(&lexicon, path)?;
    info!("LMF export finished after {} repairs", report.changes());
    Ok(report)
}
