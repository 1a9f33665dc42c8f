//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(log n) insert and extract_min
//! - O(log n) decrease_key and remove
//! - O(log n) union of the tree lists
//!
//! # Algorithm Overview
//!
//! A binomial heap maintains a collection of binomial trees, where:
//! - Each tree satisfies the heap property
//! - At most one tree of each order (0, 1, 2, ..., log n)
//! - This is analogous to binary representation of n
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and height k
//!
//! **Key Operations**:
//! - **Insert**: union a single-node tree into the heap (like incrementing a binary counter)
//! - **Extract-min**: find the smallest root, split its tree, union the children back
//! - **Decrease-key**: bubble up in the tree (no cutting)
//! - **Remove**: bubble up all the way to the root, then split like extract-min
//! - **Union**: add the tree lists by order with carry propagation
//!
//! # Storage
//!
//! Nodes live in an [`Arena`] and use the leftmost-child / next-sibling
//! representation. Bubbling up swaps keys between nodes, so handles do not
//! point at nodes directly: each handle owns an entry slot that always records
//! which node currently holds its key.

use crate::storage::{translate_link, Arena, Linked, NodeKey, HeapId};
use crate::traits::{AddressableHeap, Handle, Heap, HeapError, MeldableHeap};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::fmt;
use std::mem;

new_key_type! {
    struct EntryKey;
}

/// Handle to an element in a Binomial heap
///
/// A handle keeps following its element while decrease-key operations move
/// keys around the tree. It becomes stale once the element is extracted or
/// removed, or once the heap is consumed by [`MeldableHeap::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinomialHandle {
    heap: HeapId,
    entry: EntryKey,
}

impl Handle for BinomialHandle {}

/// Internal node structure for binomial heap
///
/// - `parent`: parent node (None if root)
/// - `child`: leftmost child, which is the child of highest order
/// - `sibling`: next sibling in parent's child list, one order lower
/// - `order`: number of children; a root of order k owns 2ᵏ nodes
/// - `entry`: the handle slot of the key currently stored here
#[derive(Debug)]
struct Node<T> {
    key: T,
    entry: EntryKey,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    sibling: Option<NodeKey>,
    order: usize,
}

impl<T> Linked for Node<T> {
    fn relink(&mut self, translate: &SecondaryMap<NodeKey, NodeKey>) {
        translate_link(&mut self.parent, translate);
        translate_link(&mut self.child, translate);
        translate_link(&mut self.sibling, translate);
    }
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use classic_heaps::binomial::BinomialHeap;
/// use classic_heaps::{AddressableHeap, Heap};
///
/// let mut heap = BinomialHeap::new();
/// let handle = heap.insert_with_handle(5);
/// heap.insert(3);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.minimum(), Ok(&1));
/// ```
pub struct BinomialHeap<T: Ord> {
    /// Tree roots indexed by order. Each slot holds at most one tree and the
    /// last slot is never empty.
    trees: Vec<Option<NodeKey>>,
    nodes: Arena<Node<T>>,
    /// Handle slot -> node currently holding that handle's key
    entries: SlotMap<EntryKey, NodeKey>,
}

impl<T: Ord> Heap<T> for BinomialHeap<T> {
    fn new() -> Self {
        Self {
            trees: Vec::new(),
            nodes: Arena::new(),
            entries: SlotMap::with_key(),
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, item: T) {
        self.insert_with_handle(item);
    }

    /// Scans the roots; the first smallest root found wins ties
    ///
    /// **Time Complexity**: O(log n)
    fn peek(&self) -> Option<&T> {
        let order = self.min_order()?;
        let root = self.trees[order]?;
        Some(&self.nodes[root].key)
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum
    /// 2. Empty its slot in the tree list
    /// 3. Removing the root of a Bₖ leaves its children Bₖ₋₁, ..., B₀
    /// 4. Union those children back as a heap of their own
    fn pop(&mut self) -> Option<T> {
        let order = self.min_order()?;
        let root = self.trees[order].take()?;
        self.detach_root(root)
    }
}

impl<T: Ord> MeldableHeap<T> for BinomialHeap<T> {
    /// Merges another heap into this heap
    ///
    /// The donor's nodes are moved into this heap's arena, then the two tree
    /// lists are added like binary numbers. Moving the nodes costs O(m) for a
    /// donor of m elements; the tree linking itself is O(log n).
    fn union(&mut self, other: Self) {
        let BinomialHeap { trees, nodes, .. } = other;
        let translate = self.nodes.absorb(nodes);

        for &node in translate.values() {
            let entry = self.entries.insert(node);
            self.nodes[node].entry = entry;
        }

        let incoming = trees
            .into_iter()
            .map(|slot| slot.map(|root| translate[root]))
            .collect();
        self.merge_trees(incoming);
    }
}

impl<T: Ord> AddressableHeap<T> for BinomialHeap<T> {
    type Handle = BinomialHandle;

    /// Inserts a new element into the heap
    ///
    /// **Time Complexity**: O(log n) worst-case, O(1) amortized
    ///
    /// A single-node B₀ tree is unioned in. The carries it triggers follow
    /// the same pattern as incrementing a binary counter.
    fn insert_with_handle(&mut self, item: T) -> Self::Handle {
        let node = self.nodes.insert(Node {
            key: item,
            entry: EntryKey::default(),
            parent: None,
            child: None,
            sibling: None,
            order: 0,
        });
        let entry = self.entries.insert(node);
        self.nodes[node].entry = entry;

        self.merge_trees(vec![Some(node)]);

        BinomialHandle {
            heap: self.nodes.id(),
            entry,
        }
    }

    fn get(&self, handle: &Self::Handle) -> Result<&T, HeapError> {
        let node = self.resolve(handle)?;
        Ok(&self.nodes[node].key)
    }

    /// Decreases the key of an element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// Binomial heaps **swap keys** with the parent instead of cutting the
    /// node out, so the tree shape never changes. The handle's entry slot is
    /// updated on every swap.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: T) -> Result<(), HeapError> {
        let node = self.resolve(handle)?;
        if new_key >= self.nodes[node].key {
            return Err(HeapError::InvalidDecrease);
        }

        self.nodes[node].key = new_key;
        self.bubble_up(node, false);
        Ok(())
    }

    /// Removes an arbitrary element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The element is bubbled up to its tree's root regardless of the keys it
    /// passes, which is what decreasing it to -∞ would do. That root is then
    /// split off exactly like in `extract_min`. Works for any `Ord` key.
    fn remove(&mut self, handle: &Self::Handle) -> Result<T, HeapError> {
        let node = self.resolve(handle)?;
        let root = self.bubble_up(node, true);

        let order = self.nodes[root].order;
        debug_assert_eq!(self.trees.get(order).copied().flatten(), Some(root));
        self.trees[order] = None;

        self.detach_root(root).ok_or(HeapError::StaleHandle)
    }
}

impl<T: Ord> BinomialHeap<T> {
    /// Iterates over all keys in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.key)
    }

    fn resolve(&self, handle: &BinomialHandle) -> Result<NodeKey, HeapError> {
        if handle.heap != self.nodes.id() {
            return Err(HeapError::StaleHandle);
        }
        self.entries
            .get(handle.entry)
            .copied()
            .ok_or(HeapError::StaleHandle)
    }

    /// Order of the tree whose root is smallest
    fn min_order(&self) -> Option<usize> {
        let mut best: Option<(usize, NodeKey)> = None;

        for (order, root) in self
            .trees
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.map(|root| (order, root)))
        {
            match best {
                Some((_, current)) if self.nodes[root].key >= self.nodes[current].key => {}
                _ => best = Some((order, root)),
            }
        }

        best.map(|(order, _)| order)
    }

    /// Links two binomial trees of the same order into one tree of order+1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The root with the larger key becomes the leftmost child of the other,
    /// so the heap property holds by construction. Ties keep `a` on top.
    fn link_trees(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert_eq!(self.nodes[a].order, self.nodes[b].order);

        let (parent, child) = if self.nodes[b].key < self.nodes[a].key {
            (b, a)
        } else {
            (a, b)
        };

        let first_child = self.nodes[parent].child.replace(child);
        self.nodes[parent].order += 1;

        let child_ref = &mut self.nodes[child];
        child_ref.parent = Some(parent);
        child_ref.sibling = first_child;

        parent
    }

    /// Adds a tree list into this heap's tree list
    ///
    /// **Algorithm**: binary addition with carry propagation. At each order
    /// up to three trees can meet: our own, the incoming one and the carry
    /// from the order below. Two of them are linked into a carry for the next
    /// order and the third (if any) stays as the digit for this order.
    ///
    /// **Invariant**: Afterwards there is at most one tree of each order.
    fn merge_trees(&mut self, other: Vec<Option<NodeKey>>) {
        let width = self.trees.len().max(other.len());
        self.trees.resize(width, None);

        let mut carry: Option<NodeKey> = None;
        let incoming = other.into_iter().chain(std::iter::repeat(None));

        for (order, theirs) in incoming.take(width).enumerate() {
            let mut present = [self.trees[order].take(), theirs, carry.take()]
                .into_iter()
                .flatten();

            match (present.next(), present.next()) {
                (Some(a), Some(b)) => {
                    let linked = self.link_trees(a, b);
                    debug_assert_eq!(self.nodes[linked].order, order + 1);
                    carry = Some(linked);
                    self.trees[order] = present.next();
                }
                (digit, _) => self.trees[order] = digit,
            }
        }

        if carry.is_some() {
            self.trees.push(carry);
        }
        while let Some(None) = self.trees.last() {
            self.trees.pop();
        }
    }

    /// Removes a root whose slot was already emptied and unions its children back
    fn detach_root(&mut self, root: NodeKey) -> Option<T> {
        let order = self.nodes.get(root)?.order;
        let mut children = vec![None; order];

        let mut next = self.nodes[root].child;
        while let Some(child) = next {
            let child_ref = &mut self.nodes[child];
            next = child_ref.sibling.take();
            child_ref.parent = None;
            children[child_ref.order] = Some(child);
        }

        let node = self.nodes.remove(root)?;
        self.entries.remove(node.entry);
        self.merge_trees(children);
        Some(node.key)
    }

    /// Bubbles the key at `node` up by swapping with parents
    ///
    /// Stops once the parent is not larger, or only at the root if `to_root`
    /// is set. Returns the node that ends up holding the key.
    fn bubble_up(&mut self, mut node: NodeKey, to_root: bool) -> NodeKey {
        while let Some(parent) = self.nodes[node].parent {
            if !to_root && self.nodes[node].key >= self.nodes[parent].key {
                break;
            }
            self.swap_payloads(node, parent);
            node = parent;
        }
        node
    }

    /// Swaps keys (and the entries following them) between two nodes
    fn swap_payloads(&mut self, a: NodeKey, b: NodeKey) {
        if let Some([x, y]) = self.nodes.pair_mut(a, b) {
            mem::swap(&mut x.key, &mut y.key);
            mem::swap(&mut x.entry, &mut y.entry);
            self.entries[x.entry] = a;
            self.entries[y.entry] = b;
        }
    }
}

impl<T: Ord> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for BinomialHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// Preorder view of one tree slot, `None` for an empty slot
struct TreeView<'a, T: Ord> {
    heap: &'a BinomialHeap<T>,
    root: Option<NodeKey>,
}

impl<T: Ord + fmt::Debug> fmt::Debug for TreeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return f.write_str("None");
        };

        let mut tuple = f.debug_tuple("BinomialTree");
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            let node = &self.heap.nodes[key];
            tuple.field(&node.key);
            // siblings of the root are always empty
            if key != root {
                if let Some(sibling) = node.sibling {
                    stack.push(sibling);
                }
            }
            if let Some(child) = node.child {
                stack.push(child);
            }
        }
        tuple.finish()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("BinomialHeap");
        for &root in &self.trees {
            tuple.field(&TreeView { heap: self, root });
        }
        tuple.finish()
    }
}
