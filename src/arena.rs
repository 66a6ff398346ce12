use crate::skipnode::SkipNode;

/// Stable index of a node slot. Indices never move while a node is live, so
/// forward links can hold them across arbitrary insertions elsewhere.
pub(crate) type NodeId = usize;

/// A successor reference at one level. `None` is the explicit
/// "no successor" sentinel.
pub(crate) type Link = Option<NodeId>;

/// The head sentinel always occupies slot 0.
pub(crate) const HEAD: NodeId = 0;

/// Growable slot arena that owns every node of one list.
///
/// Removal vacates a slot and pushes it onto a free-list; the next allocation
/// reuses the most recently freed slot before growing the backing vector.
#[derive(Debug)]
pub(crate) struct NodeArena<V> {
    slots: Vec<Option<SkipNode<V>>>,
    free: Vec<NodeId>,
}

impl<V> NodeArena<V> {
    /// Create an arena holding only the head sentinel at slot [`HEAD`].
    pub(crate) fn with_head(max_level: usize) -> Self {
        NodeArena {
            slots: vec![Some(SkipNode::head(max_level))],
            free: Vec::new(),
        }
    }

    /// Store `node` and return its slot index.
    pub(crate) fn alloc(&mut self, node: SkipNode<V>) -> NodeId {
        match self.free.pop() {
            | Some(id) => {
                self.slots[id] = Some(node);
                id
            },
            | None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            },
        }
    }

    /// Vacate `id` and return the node that lived there. The slot becomes
    /// available for reuse. The head slot is never deallocated.
    pub(crate) fn dealloc(&mut self, id: NodeId) -> SkipNode<V> {
        debug_assert_ne!(id, HEAD, "the head sentinel cannot be deallocated");
        let node = self.slots[id].take().expect("dealloc of a vacant slot");
        self.free.push(id);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> &SkipNode<V> {
        self.slots[id].as_ref().expect("link points at a vacant slot")
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SkipNode<V> {
        self.slots[id].as_mut().expect("link points at a vacant slot")
    }

    /// Drop every node and return to the head-only state.
    pub(crate) fn reset(&mut self, max_level: usize) {
        self.slots.clear();
        self.free.clear();
        self.slots.push(Some(SkipNode::head(max_level)));
    }

    /// Number of live nodes, the head excluded.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count() - 1
    }
}
