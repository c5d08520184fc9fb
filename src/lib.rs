//! tld-regex - Compile a top-level domain list into a corpus and a regex
//!
//! This library turns a static list of domain suffixes into:
//! - A canonically ordered, deduplicated corpus
//! - A single regex pattern matching exactly that corpus, with shared
//!   prefixes factored into alternation groups
//!
//! Three corpus variants are produced from the same raw list: punycode
//! labels decoded to Unicode, punycode labels dropped, and punycode labels
//! kept encoded.
//!
//! # Example
//!
//! ```rust
//! use tld_regex::{Generator, CorpusVariant};
//!
//! let raw = ["# Version 2026101600", "CAT", "CAR", "CART", "XN--FIQS8S"];
//!
//! let corpus = Generator::new()
//!     .with_verify(true)
//!     .compile_variant(&raw, CorpusVariant::Full)
//!     .unwrap();
//!
//! assert_eq!(corpus.pattern, "ca(?:rt?|t)|中国");
//!
//! let re = corpus.anchored_regex().unwrap();
//! assert!(re.is_match("cart"));
//! assert!(!re.is_match("ca"));
//! ```
//!
//! # Compilation rules
//!
//! | Trie shape | Emitted |
//! |------------|---------|
//! | Unbranched chain | Literal run, `com` |
//! | Branch | Group, `c(?:n\|om)` |
//! | String ends where others continue | Optional suffix, `abc?` or `co(?:m\|op)?` |
//! | Top level | Bare alternation, `com\|net` |
//!
//! Alternatives appear in insertion order; sort input first for stable,
//! reviewable output.

pub mod compile;
pub mod emit;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod source;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use compile::{compile, compile_node, CompileOptions};
pub use emit::{EmitOptions, Emitter, OutputFormat};
pub use error::{FetchErrorKind, Result, TldError};
pub use generator::{CompiledCorpus, Generator};
pub use normalize::{decode_label, normalize, normalize_text, NormalizeOptions};
pub use source::{FileSource, HttpSource, LineSource, MemorySource, DEFAULT_SOURCE_URL};
pub use trie::{Trie, TrieNode};
pub use types::{CorpusEntry, CorpusVariant, LabelKind, PUNYCODE_PREFIX};
