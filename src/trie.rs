//! Prefix tree over Unicode code points.
//!
//! Each node owns its children exclusively. Children are kept in
//! first-insertion order, which is the order alternatives appear in the
//! compiled regex.

/// A trie node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Some inserted string ends exactly at this node
    pub(crate) is_terminal: bool,
    /// Children in first-insertion order
    pub(crate) children: Vec<(char, TrieNode)>,
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Iterate over `(code point, child)` pairs in insertion order
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, node)| node)
    }

    fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        let idx = match self.children.iter().position(|(c, _)| *c == ch) {
            Some(idx) => idx,
            None => {
                self.children.push((ch, TrieNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }

    fn count_terminals(&self) -> usize {
        let own = usize::from(self.is_terminal);
        own + self
            .children
            .iter()
            .map(|(_, node)| node.count_terminals())
            .sum::<usize>()
    }
}

/// Prefix tree built once per compilation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string. Inserting the same string again is a no-op.
    pub fn insert(&mut self, s: &str) {
        let mut node = &mut self.root;
        for ch in s.chars() {
            node = node.child_or_insert(ch);
        }
        node.is_terminal = true;
    }

    /// Check whether `s` was inserted
    pub fn contains(&self, s: &str) -> bool {
        let mut node = &self.root;
        for ch in s.chars() {
            match node.child(ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_terminal
    }

    /// Number of distinct inserted strings
    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal && self.root.children.is_empty()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.insert(s.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(!trie.root().is_terminal());
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_insert_and_contains() {
        let trie: Trie = ["cat", "car", "cart"].into_iter().collect();
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("carts"));
    }

    #[test]
    fn test_shared_prefix_is_not_duplicated() {
        let trie: Trie = ["cat", "car"].into_iter().collect();
        let root = trie.root();
        assert_eq!(root.children().count(), 1);
        let a = root.child('c').and_then(|c| c.child('a')).unwrap();
        let keys: Vec<char> = a.children().map(|(ch, _)| ch).collect();
        assert_eq!(keys, vec!['t', 'r']);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let trie: Trie = ["zw", "ac", "mx"].into_iter().collect();
        let keys: Vec<char> = trie.root().children().map(|(ch, _)| ch).collect();
        assert_eq!(keys, vec!['z', 'a', 'm']);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let once: Trie = ["ab", "abc"].into_iter().collect();
        let twice: Trie = ["ab", "abc", "ab", "abc", "ab"].into_iter().collect();
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 2);
    }

    #[test]
    fn test_empty_string_marks_root() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.root().is_terminal());
        assert!(trie.contains(""));
        assert!(!trie.is_empty());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_unicode_code_points() {
        let trie: Trie = ["中国", "中國"].into_iter().collect();
        let zhong = trie.root().child('中').unwrap();
        assert_eq!(zhong.children().count(), 2);
        assert!(trie.contains("中國"));
    }
}
