//! Randomized Meldable Heap implementation
//!
//! A heap-ordered binary tree with no shape invariant at all. Balance comes
//! from the union operation: at every level it flips a coin to decide which
//! child to descend into, so the expected length of the path it walks is
//! O(log n) whatever the input order.
//!
//! # Time Complexity (expected)
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `minimum`      | O(1)       |
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `union`        | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `remove`       | O(log n)   |
//!
//! # Randomness
//!
//! The coin is a single random source owned by the heap. [`Heap::new`] seeds
//! it from the OS; [`RandomizedHeap::with_seed`] and
//! [`RandomizedHeap::with_rng`] make runs reproducible.

use crate::storage::{translate_link, Arena, HeapId, Linked, NodeKey};
use crate::traits::{AddressableHeap, Handle, Heap, HeapError, MeldableHeap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::SecondaryMap;
use std::fmt;

/// Handle to an element in a randomized heap
///
/// Nodes are never swapped, so the handle names the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomizedHandle {
    heap: HeapId,
    node: NodeKey,
}

impl Handle for RandomizedHandle {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Debug)]
struct Node<T> {
    key: T,
    /// Only used to splice a node out for decrease_key and remove
    parent: Option<NodeKey>,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl<T> Node<T> {
    fn singleton(key: T) -> Self {
        Node {
            key,
            parent: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    fn child(&self, side: Side) -> Option<NodeKey> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    fn child_mut(&mut self, side: Side) -> &mut Option<NodeKey> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Linked for Node<T> {
    fn relink(&mut self, translate: &SecondaryMap<NodeKey, NodeKey>) {
        translate_link(&mut self.parent, translate);
        translate_link(&mut self.left, translate);
        translate_link(&mut self.right, translate);
    }
}

/// Randomized meldable heap
///
/// # Example
///
/// ```rust
/// use classic_heaps::randomized::RandomizedHeap;
/// use classic_heaps::{AddressableHeap, Heap, MeldableHeap};
///
/// let mut heap: RandomizedHeap<i32> = RandomizedHeap::with_seed(7);
/// heap.insert(4);
/// let handle = heap.insert_with_handle(9);
///
/// let mut other: RandomizedHeap<i32> = RandomizedHeap::with_seed(8);
/// other.insert(6);
/// heap.union(other);
///
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.extract_min(), Ok(4));
/// assert_eq!(heap.extract_min(), Ok(6));
/// ```
pub struct RandomizedHeap<T: Ord, R = StdRng> {
    root: Option<NodeKey>,
    nodes: Arena<Node<T>>,
    rng: R,
}

impl<T: Ord, R: Rng + SeedableRng> Heap<T> for RandomizedHeap<T, R> {
    fn new() -> Self {
        Self::with_rng(R::from_entropy())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, item: T) {
        self.insert_with_handle(item);
    }

    fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].key)
    }

    /// Removes the root and unions its two subtrees into the new root
    fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        let node = self.nodes.remove(root)?;
        self.root = self.meld(node.left, node.right);
        self.clear_root_parent();
        Some(node.key)
    }
}

impl<T: Ord, R: Rng + SeedableRng> MeldableHeap<T> for RandomizedHeap<T, R> {
    /// Merges another heap into this heap
    ///
    /// The donor's nodes move into this heap's arena (O(m) for m donor
    /// elements), then the two roots are unioned in expected O(log n).
    fn union(&mut self, other: Self) {
        let RandomizedHeap { root, nodes, .. } = other;
        let translate = self.nodes.absorb(nodes);
        let incoming = root.map(|root| translate[root]);

        self.root = self.meld(self.root, incoming);
        self.clear_root_parent();
    }
}

impl<T: Ord, R: Rng + SeedableRng> AddressableHeap<T> for RandomizedHeap<T, R> {
    type Handle = RandomizedHandle;

    fn insert_with_handle(&mut self, item: T) -> Self::Handle {
        let node = self.nodes.insert(Node::singleton(item));
        self.root = self.meld(self.root, Some(node));
        self.clear_root_parent();

        RandomizedHandle {
            heap: self.nodes.id(),
            node,
        }
    }

    fn get(&self, handle: &Self::Handle) -> Result<&T, HeapError> {
        let node = self.resolve(handle)?;
        Ok(&self.nodes[node].key)
    }

    /// Decreases the key of an element
    ///
    /// If the new key is still no smaller than the parent's, nothing moves.
    /// Otherwise the node is cut out (its subtrees take its place) and
    /// unioned back in at the root as a singleton.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: T) -> Result<(), HeapError> {
        let node = self.resolve(handle)?;
        if new_key >= self.nodes[node].key {
            return Err(HeapError::InvalidDecrease);
        }

        self.nodes[node].key = new_key;
        let violates = match self.nodes[node].parent {
            Some(parent) => self.nodes[node].key < self.nodes[parent].key,
            None => false,
        };

        if violates {
            self.cut(node);
            self.root = self.meld(self.root, Some(node));
            self.clear_root_parent();
        }
        Ok(())
    }

    /// Removes an arbitrary element by splicing the union of its subtrees
    /// into its place. Works for any `Ord` key.
    fn remove(&mut self, handle: &Self::Handle) -> Result<T, HeapError> {
        let node = self.resolve(handle)?;
        self.cut(node);
        self.nodes
            .remove(node)
            .map(|node| node.key)
            .ok_or(HeapError::StaleHandle)
    }
}

impl<T: Ord, R: Rng> RandomizedHeap<T, R> {
    /// Creates an empty heap drawing its coin flips from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            root: None,
            nodes: Arena::new(),
            rng,
        }
    }

    /// Iterates over all keys in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.key)
    }

    fn resolve(&self, handle: &RandomizedHandle) -> Result<NodeKey, HeapError> {
        if handle.heap != self.nodes.id() || self.nodes.get(handle.node).is_none() {
            return Err(HeapError::StaleHandle);
        }
        Ok(handle.node)
    }

    fn clear_root_parent(&mut self) {
        if let Some(root) = self.root {
            self.nodes[root].parent = None;
        }
    }

    /// Returns `(smaller, larger)`; ties keep `a` first
    #[inline]
    fn order_pair(&self, a: NodeKey, b: NodeKey) -> (NodeKey, NodeKey) {
        if self.nodes[b].key < self.nodes[a].key {
            (b, a)
        } else {
            (a, b)
        }
    }

    #[inline]
    fn attach(&mut self, parent: NodeKey, side: Side, child: NodeKey) {
        *self.nodes[parent].child_mut(side) = Some(child);
        self.nodes[child].parent = Some(parent);
    }

    /// Unions two detached subtrees and returns the new subtree root
    ///
    /// **Algorithm**: the smaller root wins and keeps its place. A fair coin
    /// picks one of the winner's children; if that child is absent the loser
    /// is attached there, otherwise the loser is unioned with that child and
    /// the result takes the child's place. The walk continues one level down
    /// until it reaches an absent child.
    ///
    /// The parent link of the returned root is left for the caller to set.
    fn meld(&mut self, a: Option<NodeKey>, b: Option<NodeKey>) -> Option<NodeKey> {
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            (a, None) => return a,
            (None, b) => return b,
        };

        let (root, mut loser) = self.order_pair(a, b);
        let mut winner = root;

        loop {
            let side = if self.rng.gen::<bool>() {
                Side::Left
            } else {
                Side::Right
            };

            match self.nodes[winner].child(side) {
                None => {
                    self.attach(winner, side, loser);
                    return Some(root);
                }
                Some(child) => {
                    let (next_winner, next_loser) = self.order_pair(child, loser);
                    self.attach(winner, side, next_winner);
                    winner = next_winner;
                    loser = next_loser;
                }
            }
        }
    }

    /// Detaches `node` from the tree, putting the union of its subtrees in
    /// its place. The node stays in the arena with no links.
    fn cut(&mut self, node: NodeKey) {
        let (parent, left, right) = {
            let node_ref = &mut self.nodes[node];
            (node_ref.parent.take(), node_ref.left.take(), node_ref.right.take())
        };

        let merged = self.meld(left, right);
        if let Some(merged) = merged {
            self.nodes[merged].parent = parent;
        }

        match parent {
            Some(parent) => {
                let parent_ref = &mut self.nodes[parent];
                if parent_ref.left == Some(node) {
                    parent_ref.left = merged;
                } else {
                    parent_ref.right = merged;
                }
            }
            None => self.root = merged,
        }
    }
}

impl<T: Ord, R: Rng + SeedableRng> RandomizedHeap<T, R> {
    /// Creates an empty heap whose coin flips are reproducible from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(R::seed_from_u64(seed))
    }
}

impl<T: Ord, R: Rng + SeedableRng> Default for RandomizedHeap<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, R: Rng + SeedableRng> FromIterator<T> for RandomizedHeap<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord, R: Rng + SeedableRng> Extend<T> for RandomizedHeap<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord + fmt::Debug, R> fmt::Debug for RandomizedHeap<T, R> {
    /// Keys in preorder: node, left subtree, right subtree
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("RandomizedHeap");
        let mut stack: Vec<NodeKey> = self.root.into_iter().collect();
        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            tuple.field(&node.key);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        tuple.finish()
    }
}
