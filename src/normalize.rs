use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TldError};
use crate::types::{CorpusEntry, CorpusVariant, LabelKind, PUNYCODE_PREFIX};

/// Alphabet a label may use once normalized: letters, combining marks,
/// digits and hyphens. Nothing here is a regex metacharacter.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{N}-]+$").expect("LABEL_PATTERN: hardcoded regex is invalid")
});

/// How punycode labels are treated while normalizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    /// Keep `xn--` labels encoded instead of decoding them
    pub punycode: bool,
    /// Drop `xn--` labels entirely
    pub ascii_only: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_punycode(mut self, punycode: bool) -> Self {
        self.punycode = punycode;
        self
    }

    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    /// Options producing the given corpus variant
    pub fn for_variant(variant: CorpusVariant) -> Self {
        match variant {
            CorpusVariant::Full => Self::new(),
            CorpusVariant::Ascii => Self::new().with_ascii_only(true),
            CorpusVariant::Punycode => Self::new().with_punycode(true),
        }
    }
}

/// Normalize raw list lines into the canonical, sorted, deduplicated corpus.
///
/// Blank lines and lines starting with `#` are skipped. A punycode label
/// that fails to decode aborts the whole pass.
pub fn normalize<I, S>(lines: I, options: &NormalizeOptions) -> Result<Vec<CorpusEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for (line_num, line) in lines.into_iter().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.as_ref().trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let label = line.to_lowercase();
        let is_encoded = label.starts_with(PUNYCODE_PREFIX);

        let value = if is_encoded && options.ascii_only {
            dropped += 1;
            continue;
        } else if is_encoded && !options.punycode {
            decode_label(&label)?
        } else {
            label
        };

        if !LABEL_PATTERN.is_match(&value) {
            return Err(TldError::InvalidLabel {
                line: line_num,
                label: value,
            });
        }

        entries.push(CorpusEntry::new(value));
    }

    entries.sort();
    entries.dedup();

    log::debug!(
        "Normalized {} labels ({} punycode, {} dropped)",
        entries.len(),
        entries
            .iter()
            .filter(|e| e.kind == LabelKind::Punycode)
            .count(),
        dropped
    );

    Ok(entries)
}

/// Normalize a whole list given as text
pub fn normalize_text(text: &str, options: &NormalizeOptions) -> Result<Vec<CorpusEntry>> {
    normalize(text.lines(), options)
}

/// Decode an `xn--` label to its Unicode form.
///
/// The decoded form must encode back to the exact input, so labels that
/// only look encoded are rejected.
pub fn decode_label(label: &str) -> Result<String> {
    let (decoded, status) = idna::domain_to_unicode(label);
    status.map_err(|e| TldError::DecodeError {
        label: label.to_string(),
        reason: e.to_string(),
    })?;

    let reencoded = idna::domain_to_ascii(&decoded).map_err(|e| TldError::DecodeError {
        label: label.to_string(),
        reason: e.to_string(),
    })?;
    if reencoded != label {
        return Err(TldError::DecodeError {
            label: label.to_string(),
            reason: format!("decodes to '{}' which does not round-trip", decoded),
        });
    }

    Ok(decoded)
}
