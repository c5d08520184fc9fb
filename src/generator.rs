//! Generator module.
//!
//! Runs one normalize → trie → regex pass per corpus variant over the same
//! raw list.

use regex::Regex;
use serde::Serialize;

use crate::compile::{compile, CompileOptions};
use crate::error::{Result, TldError};
use crate::normalize::{normalize, NormalizeOptions};
use crate::trie::Trie;
use crate::types::{CorpusEntry, CorpusVariant};

/// Ordered corpus and the pattern compiled from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledCorpus {
    pub variant: CorpusVariant,
    pub entries: Vec<CorpusEntry>,
    pub pattern: String,
}

impl CompiledCorpus {
    /// Corpus strings in canonical order
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CorpusEntry::as_str)
    }

    /// Pattern anchored at both ends, for full-string matching
    pub fn anchored_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&format!("^(?:{})$", self.pattern))?)
    }

    /// Check that every entry fully matches the pattern
    pub fn verify(&self) -> Result<()> {
        let re = self.anchored_regex()?;
        if let Some(entry) = self.entries.iter().find(|e| !re.is_match(e.as_str())) {
            return Err(TldError::PatternMismatch {
                variant: self.variant.to_string(),
                entry: entry.value.clone(),
            });
        }
        Ok(())
    }
}

/// Compiles raw list lines into one or more corpus variants
#[derive(Debug, Clone, Default)]
pub struct Generator {
    compile_options: CompileOptions,
    verify: bool,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compile_options(mut self, options: CompileOptions) -> Self {
        self.compile_options = options;
        self
    }

    /// Check each compiled pattern against its corpus before returning it
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Compile a single variant
    pub fn compile_variant<S: AsRef<str>>(
        &self,
        lines: &[S],
        variant: CorpusVariant,
    ) -> Result<CompiledCorpus> {
        let entries = normalize(lines, &NormalizeOptions::for_variant(variant))?;

        let trie: Trie = entries.iter().map(CorpusEntry::as_str).collect();
        let pattern = compile(&trie, &self.compile_options);

        log::info!(
            "Compiled {} corpus: {} entries, pattern length {}",
            variant,
            trie.len(),
            pattern.len()
        );

        let corpus = CompiledCorpus {
            variant,
            entries,
            pattern,
        };
        if self.verify {
            corpus.verify()?;
        }
        Ok(corpus)
    }

    /// Compile every variant, in `CorpusVariant::ALL` order
    pub fn compile_all<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<CompiledCorpus>> {
        CorpusVariant::ALL
            .iter()
            .map(|&variant| self.compile_variant(lines, variant))
            .collect()
    }
}
