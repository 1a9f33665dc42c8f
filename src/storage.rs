//! Arena storage for pointer-linked heap nodes
//!
//! The binomial and randomized heaps keep their nodes in a [`slotmap::SlotMap`]
//! instead of behind `Rc<RefCell<_>>`. Links between nodes (parent, child,
//! sibling) are plain [`NodeKey`]s.
//!
//! # Stale handles
//!
//! Slotmap keys are generational: a key whose slot was freed (and possibly
//! reused) no longer resolves. That alone does not stop a key issued by one
//! heap from resolving in another, so every [`Arena`] also carries a
//! [`HeapId`] and handles remember the id of the arena that issued them.
//!
//! # Union
//!
//! [`Arena::absorb`] moves every node of a donor arena into the receiving one.
//! Keys change in the move, so nodes rewrite their links through the
//! translation table via [`Linked::relink`].

use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    /// Key of a node inside an [`Arena`]
    pub struct NodeKey;
}

/// Identity of one heap instance, used to reject foreign handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapId(u64);

impl HeapId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        HeapId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Nodes whose links point at other nodes of the same arena
pub(crate) trait Linked {
    /// Rewrites every link through `translate` (old key -> new key)
    fn relink(&mut self, translate: &SecondaryMap<NodeKey, NodeKey>);
}

/// Rewrites an optional link; links always point inside the donor arena
#[inline]
pub(crate) fn translate_link(link: &mut Option<NodeKey>, translate: &SecondaryMap<NodeKey, NodeKey>) {
    if let Some(old) = *link {
        *link = Some(translate[old]);
    }
}

/// Node arena tagged with the identity of the heap that owns it
#[derive(Debug)]
pub(crate) struct Arena<N> {
    id: HeapId,
    nodes: SlotMap<NodeKey, N>,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            id: HeapId::fresh(),
            nodes: SlotMap::with_key(),
        }
    }

    #[inline]
    pub(crate) fn id(&self) -> HeapId {
        self.id
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn insert(&mut self, node: N) -> NodeKey {
        self.nodes.insert(node)
    }

    #[inline]
    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<N> {
        self.nodes.remove(key)
    }

    #[inline]
    pub(crate) fn get(&self, key: NodeKey) -> Option<&N> {
        self.nodes.get(key)
    }

    /// Mutable access to two distinct nodes at once
    #[inline]
    pub(crate) fn pair_mut(&mut self, a: NodeKey, b: NodeKey) -> Option<[&mut N; 2]> {
        self.nodes.get_disjoint_mut([a, b])
    }

    pub(crate) fn values(&self) -> slotmap::basic::Values<'_, NodeKey, N> {
        self.nodes.values()
    }
}

impl<N: Linked> Arena<N> {
    /// Moves all nodes of `other` into this arena
    ///
    /// Returns the translation from `other`'s keys to the new keys. `other`'s
    /// identity is dropped with it, so handles it issued become stale.
    pub(crate) fn absorb(&mut self, other: Arena<N>) -> SecondaryMap<NodeKey, NodeKey> {
        let mut translate = SecondaryMap::with_capacity(other.nodes.len());
        for (old, node) in other.nodes {
            let new = self.nodes.insert(node);
            translate.insert(old, new);
        }
        for &new in translate.values() {
            self.nodes[new].relink(&translate);
        }
        translate
    }
}

impl<N> Index<NodeKey> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}
