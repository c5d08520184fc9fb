use serde::Serialize;

use crate::error::Result;
use crate::generator::CompiledCorpus;
use crate::types::CorpusVariant;

#[derive(Serialize)]
struct JsonCorpus<'a> {
    variant: CorpusVariant,
    entries: Vec<&'a str>,
    pattern: &'a str,
}

/// Render all corpora as a pretty-printed JSON array
pub fn render(corpora: &[CompiledCorpus]) -> Result<String> {
    let docs: Vec<JsonCorpus<'_>> = corpora
        .iter()
        .map(|c| JsonCorpus {
            variant: c.variant,
            entries: c.strings().collect(),
            pattern: &c.pattern,
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&docs)?;
    out.push('\n');
    Ok(out)
}
