use std::fmt;

use serde::Serialize;

/// The fixed ASCII-compatible-encoding tag that marks a punycode label.
pub const PUNYCODE_PREFIX: &str = "xn--";

/// Label classification used for ordering and partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// Plain label (ASCII, or Unicode decoded from punycode)
    Plain,
    /// Label kept in its `xn--` encoded form
    Punycode,
}

impl LabelKind {
    /// Classify a normalized label
    pub fn of(label: &str) -> Self {
        if label.starts_with(PUNYCODE_PREFIX) {
            LabelKind::Punycode
        } else {
            LabelKind::Plain
        }
    }
}

/// A single validated corpus string
///
/// Ordering is `(kind, value)`: every plain entry sorts before every
/// punycode-encoded entry, then by code point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CorpusEntry {
    pub kind: LabelKind,
    pub value: String,
}

impl CorpusEntry {
    /// Create an entry, classifying it from its text
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind: LabelKind::of(&value),
            value,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True if the first code point is outside ASCII
    pub fn is_unicode(&self) -> bool {
        self.value.chars().next().is_some_and(|c| !c.is_ascii())
    }
}

impl fmt::Display for CorpusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// One view of the raw list, each compiled into its own trie and pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusVariant {
    /// Punycode labels decoded to Unicode
    Full,
    /// Punycode labels dropped
    Ascii,
    /// Punycode labels kept encoded
    Punycode,
}

impl CorpusVariant {
    pub const ALL: [CorpusVariant; 3] = [
        CorpusVariant::Full,
        CorpusVariant::Ascii,
        CorpusVariant::Punycode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CorpusVariant::Full => "full",
            CorpusVariant::Ascii => "ascii",
            CorpusVariant::Punycode => "punycode",
        }
    }
}

impl fmt::Display for CorpusVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
