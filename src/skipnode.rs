// Copyright (c) Stratalist Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use crate::arena::Link;

/// A single node of the skip list.
///
/// `value` is `None` only for the head sentinel. `forward` holds one
/// successor link per level the node participates in, levels `0..forward.len()`
/// contiguously; its length is fixed at creation and never changes.
#[derive(Debug)]
pub(crate) struct SkipNode<V> {
    pub(crate) value: Option<V>,
    pub(crate) forward: Vec<Link>,
}

impl<V> SkipNode<V> {
    /// Create the head sentinel, spanning every configured level.
    pub(crate) fn head(max_level: usize) -> Self {
        SkipNode {
            value: None,
            forward: vec![None; max_level],
        }
    }

    /// Create a node carrying `value` with `level` forward slots.
    pub(crate) fn new(value: V, level: usize) -> Self {
        SkipNode {
            value: Some(value),
            forward: vec![None; level],
        }
    }

    /// How many levels this node participates in.
    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }

    /// Consumes the node, returning the value it contains.
    pub(crate) fn into_inner(self) -> Option<V> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::SkipNode;

    #[test]
    fn test_head_spans_all_levels() {
        let head: SkipNode<u32> = SkipNode::head(5);
        assert!(head.value.is_none());
        assert_eq!(head.level(), 5);
        assert!(head.forward.iter().all(Option::is_none));
    }

    #[test]
    fn test_node_slot_count_matches_level() {
        let node = SkipNode::new(7u32, 3);
        assert_eq!(node.level(), 3);
        assert_eq!(node.into_inner(), Some(7));
    }
}
