//! Trie to regex compilation.
//!
//! Folds a [`Trie`] into one alternation pattern. Shared prefixes become
//! groups, unbranched chains stay flat literal runs, and a node where one
//! string ends while longer strings continue gets an optional quantifier.

use crate::trie::{Trie, TrieNode};

/// Quantifier and grouping policy for the emitted pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// `?` when true, `??` when false
    pub greedy: bool,
    /// Capturing `(` groups when true, `(?:` otherwise
    pub capture: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            greedy: true,
            capture: false,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer the longer alternative (`?`) or the shorter one (`??`).
    pub fn with_greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    /// Emit capturing groups instead of non-capturing ones.
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    fn quantifier(&self) -> &'static str {
        if self.greedy {
            "?"
        } else {
            "??"
        }
    }

    fn group(&self, alternatives: &[String]) -> String {
        let open = if self.capture { "(" } else { "(?:" };
        format!("{}{})", open, alternatives.join("|"))
    }
}

/// Compile a trie into a pattern matching exactly its inserted strings.
///
/// The top level is a bare alternation; callers anchoring it should wrap it
/// in a group first.
pub fn compile(trie: &Trie, options: &CompileOptions) -> String {
    let alternatives = compile_node(trie.root(), options);
    match alternatives.len() {
        0 => String::new(),
        1 => alternatives.into_iter().next().unwrap_or_default(),
        _ => alternatives.join("|"),
    }
}

/// Compile the subtree below `node` into its list of alternative
/// continuations. A childless node yields an empty list.
pub fn compile_node(node: &TrieNode, options: &CompileOptions) -> Vec<String> {
    if node.children.is_empty() {
        return Vec::new();
    }

    let mut ret = Vec::with_capacity(node.children.len());
    for (ch, child) in &node.children {
        let continuations = compile_node(child, options);
        let mut alt = String::new();
        alt.push(*ch);
        match continuations.len() {
            0 => {}
            1 => alt.push_str(&continuations[0]),
            _ => alt.push_str(&options.group(&continuations)),
        }
        ret.push(alt);
    }

    if node.is_terminal {
        if ret.len() == 1 && ret[0].chars().count() == 1 {
            let mut single = ret.remove(0);
            single.push_str(options.quantifier());
            return vec![single];
        }
        let mut grouped = options.group(&ret);
        grouped.push_str(options.quantifier());
        return vec![grouped];
    }

    ret
}
