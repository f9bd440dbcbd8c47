//! The trie's single node type: an edge label, a terminal flag, and a
//! sorted vector of children keyed by the first byte of their own edge.
//!
//! Nodes never store a parent back-reference. The distilled spec's data
//! model describes one (a `Weak`/raw upward pointer kept in sync with the
//! owning child list), but that shape fights Rust's ownership model for no
//! real benefit here: every algorithm that needs to walk toward the root
//! (removal's orphan cleanup and re-compression) only ever does so along
//! the same path it just descended, so it is expressed as a recursive
//! function that reports a "detach me" signal back up the call stack
//! instead of mutating through a stored back-pointer. See DESIGN.md for the
//! trade-off.

use std::cmp::Ordering;

/// A single edge-compressed trie node.
///
/// `children` is sorted ascending by the first byte of each child's `key`
/// and is binary-searched; at alphabet size 256 a small sorted vector beats
/// the constant overhead of a hash map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) key: Box<[u8]>,
    pub(crate) is_end: bool,
    pub(crate) children: Vec<(u8, Box<Node>)>,
}

/// Outcome of a prefix-only (non-mutating) descent, used by `starts_with`
/// and `words_with_prefix`.
pub(crate) enum Descent<'a> {
    /// The query was consumed exactly at a node boundary.
    ExactHit(&'a Node),
    /// The query was consumed partway through `child`'s edge label.
    EdgeMid(&'a Node),
    /// No child begins with the next needed byte, or an edge disagrees
    /// with the query before either is exhausted.
    Divergence,
}

/// Outcome of a `remove` call on a subtree.
enum RemoveResult {
    NotFound,
    Removed {
        /// True if the caller (this node's own parent) should detach this
        /// node from its child list: it is now childless and non-terminal.
        self_detachable: bool,
    },
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

impl Node {
    pub(crate) fn root() -> Self {
        Node {
            key: Box::from([]),
            is_end: false,
            children: Vec::new(),
        }
    }

    fn leaf(key: &[u8]) -> Self {
        Node {
            key: Box::from(key),
            is_end: true,
            children: Vec::new(),
        }
    }

    fn child_index(&self, byte: u8) -> Result<usize, usize> {
        self.children.binary_search_by_key(&byte, |(b, _)| *b)
    }

    /// Inserts `node` into `self.children` at its sorted position. `node`'s
    /// first key byte must not already be present.
    fn insert_child(&mut self, node: Node) {
        let byte = node.key[0];
        let pos = self
            .child_index(byte)
            .expect_err("duplicate first byte among siblings");
        self.children.insert(pos, (byte, Box::new(node)));
    }

    /// Splits this node's edge at byte offset `at` (`0 < at < self.key.len()`),
    /// demoting the current node's identity (terminal flag and children)
    /// onto a new child that holds the remainder of the edge, leaving
    /// `self` as a non-terminal intermediate with a single child.
    fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.key.len());
        let old_key = std::mem::replace(&mut self.key, Box::from([]));
        let demoted_key = Box::from(&old_key[at..]);
        self.key = Box::from(&old_key[..at]);

        let demoted = Node {
            key: demoted_key,
            is_end: std::mem::replace(&mut self.is_end, false),
            children: std::mem::take(&mut self.children),
        };
        self.children = vec![(demoted.key[0], Box::new(demoted))];
    }

    /// Inserts `word` (non-empty) into the subtree rooted at `self`.
    /// Returns `true` if a previously-absent word became terminal (i.e. the
    /// trie's word count should increment).
    pub(crate) fn insert(&mut self, word: &[u8]) -> bool {
        debug_assert!(!word.is_empty());

        match self.child_index(word[0]) {
            Err(_) => {
                self.insert_child(Node::leaf(word));
                true
            }
            Ok(idx) => {
                let child = &mut self.children[idx].1;
                let common = common_prefix_len(&child.key, word);

                match common.cmp(&child.key.len()) {
                    Ordering::Less => {
                        // Word ends inside, or diverges inside, this edge: split.
                        child.split(common);
                        let suffix = &word[common..];
                        if suffix.is_empty() {
                            if child.is_end {
                                false
                            } else {
                                child.is_end = true;
                                true
                            }
                        } else {
                            child.insert_child(Node::leaf(suffix));
                            true
                        }
                    }
                    Ordering::Equal if common == word.len() => {
                        // Full edge, full word: exact hit.
                        if child.is_end {
                            false
                        } else {
                            child.is_end = true;
                            true
                        }
                    }
                    Ordering::Equal => {
                        // Full edge consumed, word continues: descend.
                        child.insert(&word[common..])
                    }
                    Ordering::Greater => unreachable!("common prefix exceeds edge length"),
                }
            }
        }
    }

    /// Removes `word` from the subtree rooted at `self`, cleaning up and
    /// re-compressing orphaned ancestors on the way back out. `is_root`
    /// suppresses detachment/merging of `self`, since the root is always
    /// kept and has no parent slot to merge into.
    pub(crate) fn remove(&mut self, word: &[u8], is_root: bool) -> bool {
        debug_assert!(!word.is_empty());
        matches!(
            self.remove_inner(word, is_root),
            RemoveResult::Removed { .. }
        )
    }

    fn remove_inner(&mut self, word: &[u8], is_root: bool) -> RemoveResult {
        let idx = match self.child_index(word[0]) {
            Ok(idx) => idx,
            Err(_) => return RemoveResult::NotFound,
        };

        let child_key_len = self.children[idx].1.key.len();
        let common = common_prefix_len(&self.children[idx].1.key, word);

        if common < child_key_len {
            // Edge diverges before the word is reconciled with it.
            return RemoveResult::NotFound;
        }

        if common == word.len() {
            // Exact hit on this child.
            let child = &mut self.children[idx].1;
            if !child.is_end {
                return RemoveResult::NotFound;
            }
            child.is_end = false;

            if child.children.is_empty() {
                self.children.remove(idx);
            } else if child.children.len() == 1 {
                child.merge_with_only_child();
            }
        } else {
            // Full edge consumed, word continues: recurse.
            let child = &mut self.children[idx].1;
            match child.remove_inner(&word[common..], false) {
                RemoveResult::NotFound => return RemoveResult::NotFound,
                RemoveResult::Removed { self_detachable } => {
                    if self_detachable {
                        self.children.remove(idx);
                    }
                }
            }
        }

        if !is_root && self.children.len() == 1 && !self.is_end {
            self.merge_with_only_child();
            RemoveResult::Removed {
                self_detachable: false,
            }
        } else {
            RemoveResult::Removed {
                self_detachable: !is_root && self.children.is_empty() && !self.is_end,
            }
        }
    }

    /// Absorbs this node's single remaining child, concatenating edge
    /// labels and inheriting the child's terminal flag and children. Never
    /// called on the root.
    fn merge_with_only_child(&mut self) {
        let (_, only_child) = self
            .children
            .pop()
            .expect("merge requires exactly one child");
        let Node {
            key: child_key,
            is_end,
            children,
        } = *only_child;

        let mut combined = Vec::with_capacity(self.key.len() + child_key.len());
        combined.extend_from_slice(&self.key);
        combined.extend_from_slice(&child_key);

        self.key = combined.into_boxed_slice();
        self.is_end = is_end;
        self.children = children;
    }

    pub(crate) fn clear(&mut self) {
        self.children.clear();
        self.is_end = false;
    }

    /// Descends `word` from `self`, returning the node reached exactly if
    /// the whole word is consumed landing on a node boundary, or `None` if
    /// the word is absent or ends mid-edge.
    pub(crate) fn exact_node(&self, word: &[u8]) -> Option<&Node> {
        let mut current = self;
        let mut remaining = word;

        loop {
            if remaining.is_empty() {
                return Some(current);
            }
            let idx = current.child_index(remaining[0]).ok()?;
            let child = &current.children[idx].1;
            let common = common_prefix_len(&child.key, remaining);
            if common < child.key.len() {
                return None;
            }
            remaining = &remaining[common..];
            current = child;
        }
    }

    /// True if some stored word begins with `prefix` (including `prefix`
    /// itself being a stored word, or `prefix` ending mid-edge).
    pub(crate) fn has_prefix(&self, prefix: &[u8]) -> bool {
        let mut current = self;
        let mut remaining = prefix;

        loop {
            if remaining.is_empty() {
                return true;
            }
            let idx = match current.child_index(remaining[0]) {
                Ok(idx) => idx,
                Err(_) => return false,
            };
            let child = &current.children[idx].1;
            let common = common_prefix_len(&child.key, remaining);
            if common == remaining.len() {
                return true;
            }
            if common < child.key.len() {
                return false;
            }
            remaining = &remaining[common..];
            current = child;
        }
    }

    /// Descends `prefix`, returning the anchor node for enumeration plus
    /// the byte path from the root to the *start* of the anchor's own edge
    /// label. Callers append the anchor's full label themselves for the
    /// `EdgeMid` case.
    pub(crate) fn descend_for_enumeration<'a>(&'a self, prefix: &[u8]) -> (Descent<'a>, Vec<u8>) {
        let mut current = self;
        let mut remaining = prefix;
        let mut consumed = Vec::with_capacity(prefix.len());

        loop {
            if remaining.is_empty() {
                return (Descent::ExactHit(current), consumed);
            }
            let idx = match current.child_index(remaining[0]) {
                Ok(idx) => idx,
                Err(_) => return (Descent::Divergence, consumed),
            };
            let child = &current.children[idx].1;
            let common = common_prefix_len(&child.key, remaining);

            if common == remaining.len() && common == child.key.len() {
                consumed.extend_from_slice(&child.key);
                return (Descent::ExactHit(child), consumed);
            } else if common == remaining.len() {
                return (Descent::EdgeMid(child), consumed);
            } else if common == child.key.len() {
                consumed.extend_from_slice(&child.key);
                remaining = &remaining[common..];
                current = child;
            } else {
                return (Descent::Divergence, consumed);
            }
        }
    }

    /// Iteratively enumerates every terminal word in the subtree rooted at
    /// `self`, prefixing each with `prefix` (already containing the path
    /// from the root up to and including `self`'s own edge label). An
    /// explicit stack avoids recursing to a depth bounded by word length,
    /// which can reach into the tens of thousands of bytes for pathological
    /// input.
    pub(crate) fn collect_words(&self, prefix: Vec<u8>) -> Vec<Vec<u8>> {
        struct Frame<'a> {
            node: &'a Node,
            next_child: usize,
            key_len: usize,
        }

        let mut results = Vec::new();
        let mut buffer = prefix;

        if self.is_end {
            results.push(buffer.clone());
        }

        let mut stack = vec![Frame {
            node: self,
            next_child: 0,
            key_len: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next_child < frame.node.children.len() {
                let (_, child) = &frame.node.children[frame.next_child];
                frame.next_child += 1;

                buffer.extend_from_slice(&child.key);
                if child.is_end {
                    results.push(buffer.clone());
                }

                stack.push(Frame {
                    node: child,
                    next_child: 0,
                    key_len: child.key.len(),
                });
            } else {
                let finished = stack.pop().unwrap();
                buffer.truncate(buffer.len() - finished.key_len);
            }
        }

        results
    }

    /// Counts nodes and summed edge-label bytes reachable from `self`,
    /// including `self`.
    pub(crate) fn structural_totals(&self) -> (usize, usize) {
        let mut node_count = 0usize;
        let mut string_bytes = 0usize;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            node_count += 1;
            string_bytes += node.key.len();
            stack.extend(node.children.iter().map(|(_, child)| child.as_ref()));
        }

        (node_count, string_bytes)
    }

    /// Depth (in nodes traversed from the root, root = 0) of every terminal
    /// node reachable from `self`, given `self`'s own depth.
    pub(crate) fn terminal_depths(&self, self_depth: usize, out: &mut Vec<usize>) {
        let mut stack = vec![(self, self_depth)];

        while let Some((node, depth)) = stack.pop() {
            if node.is_end {
                out.push(depth);
            }
            for (_, child) in &node.children {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Word length (sum of edge-label lengths along the root path) of every
    /// terminal node reachable from `self`, given the length already
    /// accumulated to reach `self`.
    pub(crate) fn terminal_lengths(&self, self_len: usize, out: &mut Vec<usize>) {
        let mut stack = vec![(self, self_len)];

        while let Some((node, len)) = stack.pop() {
            if node.is_end {
                out.push(len);
            }
            for (_, child) in &node.children {
                stack.push((child, len + child.key.len()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_splits_shared_edge() {
        let mut root = Node::root();
        assert!(root.insert(b"hello"));
        assert!(root.insert(b"help"));

        assert_eq!(root.children.len(), 1);
        let hel = &root.children[0].1;
        assert_eq!(&*hel.key, b"hel");
        assert!(!hel.is_end);
        assert_eq!(hel.children.len(), 2);
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut root = Node::root();
        assert!(root.insert(b"twice"));
        assert!(!root.insert(b"twice"));
        assert_eq!(root.structural_totals().0, 2);
    }

    #[test]
    fn remove_recompresses_single_child_chain() {
        let mut root = Node::root();
        root.insert(b"hello");
        root.insert(b"help");

        assert!(root.remove(b"hello", true));
        assert_eq!(root.children.len(), 1);
        assert_eq!(&*root.children[0].1.key, b"help");
        assert!(root.children[0].1.is_end);
    }

    #[test]
    fn remove_absent_word_is_false() {
        let mut root = Node::root();
        root.insert(b"cat");
        assert!(!root.remove(b"dog", true));
        assert!(!root.remove(b"ca", true));
        assert!(!root.remove(b"caterpillar", true));
    }

    #[test]
    fn exact_node_rejects_mid_edge() {
        let mut root = Node::root();
        root.insert(b"hello");
        assert!(root.exact_node(b"hel").is_none());
        assert!(root.exact_node(b"hello").is_some());
    }

    #[test]
    fn has_prefix_accepts_mid_edge() {
        let mut root = Node::root();
        root.insert(b"hello");
        assert!(root.has_prefix(b"hel"));
        assert!(root.has_prefix(b"hello"));
        assert!(!root.has_prefix(b"helicopter"));
    }
}
