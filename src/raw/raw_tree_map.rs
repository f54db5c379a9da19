use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::arena::Arena;
use super::epoch::{Epoch, EpochRef};
use super::handle::Handle;
use super::node::{Node, Side};

/// The unbalanced binary search tree backing `TreeMap`.
pub(crate) struct RawTreeMap<K, V> {
    /// Arena owning every node of the tree.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of nodes reachable from `root`.
    len: usize,
    /// Liveness token for the current node graph; replaced whenever the graph is released.
    epoch: Epoch,
}

/// Result of an insertion attempt.
pub(crate) enum InsertResult<V> {
    /// A new node was created.
    Inserted(Handle),
    /// The key was already present; the rejected value is handed back untouched.
    Occupied(Handle, V),
}

impl<V> InsertResult<V> {
    pub(crate) fn handle(&self) -> Handle {
        match *self {
            InsertResult::Inserted(handle) | InsertResult::Occupied(handle, _) => handle,
        }
    }
}

impl<K, V> RawTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            epoch: Epoch::new(),
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            epoch: Epoch::new(),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[cfg(test)]
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Issues a non-owning observer of the current node graph.
    pub(crate) fn observe(&self) -> EpochRef {
        self.epoch.observe()
    }

    /// True if `observer` refers to this tree's current node graph.
    pub(crate) fn owns(&self, observer: &EpochRef) -> bool {
        self.epoch.issued(observer)
    }

    /// Releases every node and starts a new epoch.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        self.epoch = Epoch::new();
    }

    /// Moves every pair out in key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            order.push(handle);
            current = self.successor(handle);
        }

        let result: Vec<(K, V)> = order.into_iter().map(|handle| self.nodes.take(handle).into_key_value()).collect();
        self.clear();
        result
    }

    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn min_below(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn max_below(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// Handle of the smallest key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.min_below(root))
    }

    /// Handle of the largest key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.max_below(root))
    }

    /// In-order successor, or `None` if `handle` holds the largest key.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes.get(handle).right() {
            return Some(self.min_below(right));
        }

        // Climb while we are coming up from a right subtree.
        let mut child = handle;
        let mut parent = self.nodes.get(handle).parent();
        while let Some(p) = parent {
            let node = self.nodes.get(p);
            if !node.is_right_child(child) {
                break;
            }
            child = p;
            parent = node.parent();
        }
        parent
    }

    /// In-order predecessor, or `None` if `handle` holds the smallest key.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.nodes.get(handle).left() {
            return Some(self.max_below(left));
        }

        // Climb while we are coming up from a left subtree.
        let mut child = handle;
        let mut parent = self.nodes.get(handle).parent();
        while let Some(p) = parent {
            let node = self.nodes.get(p);
            if !node.is_left_child(child) {
                break;
            }
            child = p;
            parent = node.parent();
        }
        parent
    }
}

impl<K: Ord, V> RawTreeMap<K, V> {
    /// Walks from the root by key comparison.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((node.key(), node.value()))
    }

    /// Inserts a pair unless the key is present. Never overwrites.
    pub(crate) fn insert(&mut self, key: K, value: V) -> InsertResult<V> {
        match self.root {
            Some(root) => self.insert_below(root, key, value),
            None => {
                let root = self.nodes.alloc(Node::new(key, value, None));
                self.root = Some(root);
                self.len = 1;
                InsertResult::Inserted(root)
            }
        }
    }

    /// Descends from `start` and hangs a new leaf where `key` belongs.
    ///
    /// The new leaf's parent link is set to the node it is attached to.
    fn insert_below(&mut self, start: Handle, key: K, value: V) -> InsertResult<V> {
        let mut current = start;
        loop {
            let node = self.nodes.get(current);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return InsertResult::Occupied(current, value),
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let leaf = self.nodes.alloc(Node::new(key, value, Some(current)));
                    self.nodes.get_mut(current).set_child(side, Some(leaf));
                    self.len += 1;
                    return InsertResult::Inserted(leaf);
                }
            }
        }
    }
}

impl<K: Clone, V: Clone> Clone for RawTreeMap<K, V> {
    /// Deep copy: every node is freshly allocated and every child is re-linked to its new parent.
    /// The copy gets its own epoch, so cursors into `self` never resolve against it.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        let Some(root) = self.root else {
            return copy;
        };

        // (source node, parent in the copy, side of that parent)
        let mut stack: Vec<(Handle, Option<(Handle, Side)>)> = alloc::vec![(root, None)];
        while let Some((source, attach)) = stack.pop() {
            let node = self.nodes.get(source);
            let parent = attach.map(|(parent, _)| parent);
            let fresh = copy.nodes.alloc(Node::new(node.key().clone(), node.value().clone(), parent));

            match attach {
                Some((parent, side)) => copy.nodes.get_mut(parent).set_child(side, Some(fresh)),
                None => copy.root = Some(fresh),
            }

            if let Some(right) = node.right() {
                stack.push((right, Some((fresh, Side::Right))));
            }
            if let Some(left) = node.left() {
                stack.push((left, Some((fresh, Side::Left))));
            }
        }

        copy.len = self.len;
        copy
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<K: Ord, V> RawTreeMap<K, V> {
        /// Validates the BST invariants. Panics with a descriptive message if any are violated.
        pub(crate) fn validate_invariants(&self) {
            let Some(root) = self.root else {
                assert_eq!(self.len, 0, "Empty tree should have len 0");
                return;
            };

            let mut errors: Vec<String> = Vec::new();
            if self.nodes.get(root).parent().is_some() {
                errors.push(alloc::format!("Root {root:?} has a parent"));
            }

            // (node, exclusive lower bound, exclusive upper bound)
            let mut reachable = 0;
            let mut stack: Vec<(Handle, Option<Handle>, Option<Handle>)> = alloc::vec![(root, None, None)];
            while let Some((handle, low, high)) = stack.pop() {
                reachable += 1;
                let node = self.nodes.get(handle);

                if let Some(low) = low
                    && self.nodes.get(low).key() >= node.key()
                {
                    errors.push(alloc::format!("Node {handle:?} is not greater than ancestor {low:?}"));
                }
                if let Some(high) = high
                    && self.nodes.get(high).key() <= node.key()
                {
                    errors.push(alloc::format!("Node {handle:?} is not less than ancestor {high:?}"));
                }

                for (side, child) in [(Side::Left, node.left()), (Side::Right, node.right())] {
                    let Some(child) = child else {
                        continue;
                    };
                    if self.nodes.get(child).parent() != Some(handle) {
                        errors.push(alloc::format!("{side:?} child {child:?} of {handle:?} has a stale parent link"));
                    }
                    match side {
                        Side::Left => stack.push((child, low, Some(handle))),
                        Side::Right => stack.push((child, Some(handle), high)),
                    }
                }
            }

            if reachable != self.len {
                errors.push(alloc::format!("len mismatch: self.len={}, reachable={reachable}", self.len));
            }
            if reachable != self.nodes.len() {
                errors.push(alloc::format!("arena holds {} nodes, {reachable} reachable", self.nodes.len()));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        fn keys_in_order(&self) -> Vec<&K> {
            let mut keys = Vec::new();
            let mut current = self.first();
            while let Some(handle) = current {
                keys.push(self.nodes.get(handle).key());
                current = self.successor(handle);
            }
            keys
        }

        fn keys_in_reverse(&self) -> Vec<&K> {
            let mut keys = Vec::new();
            let mut current = self.last();
            while let Some(handle) = current {
                keys.push(self.nodes.get(handle).key());
                current = self.predecessor(handle);
            }
            keys
        }
    }

    fn tree_of(keys: &[i32]) -> RawTreeMap<i32, i32> {
        let mut tree = RawTreeMap::new();
        for &key in keys {
            tree.insert(key, key.wrapping_mul(10));
        }
        tree
    }

    #[test]
    fn empty_tree() {
        let tree: RawTreeMap<i32, i32> = RawTreeMap::new();
        tree.validate_invariants();
        assert!(tree.is_empty());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.search(&1), None);
    }

    #[test]
    fn shape_follows_insertion_order() {
        let tree = tree_of(&[5, 2, 0, 10]);
        tree.validate_invariants();

        let root = tree.root().unwrap();
        assert_eq!(*tree.node(root).key(), 5);
        let two = tree.node(root).left().unwrap();
        assert_eq!(*tree.node(two).key(), 2);
        assert_eq!(*tree.node(tree.node(two).left().unwrap()).key(), 0);
        assert_eq!(*tree.node(tree.node(root).right().unwrap()).key(), 10);
        assert_eq!(tree.keys_in_order(), [&0, &2, &5, &10]);
    }

    #[test]
    fn insert_existing_hands_value_back() {
        let mut tree = tree_of(&[5, 2]);
        let five = tree.search(&5).unwrap();
        match tree.insert(5, 99) {
            InsertResult::Occupied(handle, value) => {
                assert_eq!(handle, five);
                assert_eq!(value, 99);
            }
            InsertResult::Inserted(_) => panic!("duplicate key inserted"),
        }
        assert_eq!(tree.get(&5), Some(&50));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn sorted_input_degenerates_without_overflow() {
        let keys: Vec<i32> = (0..20_000).collect();
        let tree = tree_of(&keys);
        assert_eq!(tree.len(), keys.len());
        assert_eq!(tree.node(tree.root().unwrap()).left(), None);
        assert_eq!(tree.keys_in_order().len(), keys.len());

        let copy = tree.clone();
        assert_eq!(copy.len(), keys.len());
        assert_eq!(copy.get(&19_999), Some(&199_990));
    }

    #[test]
    fn clone_is_independent() {
        let tree = tree_of(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        let mut copy = tree.clone();
        copy.validate_invariants();
        assert_eq!(copy.keys_in_order(), tree.keys_in_order());

        *copy.get_mut(&6).unwrap() = -1;
        assert_eq!(tree.get(&6), Some(&60));
        assert!(!copy.owns(&tree.observe()));
    }

    #[test]
    fn clear_starts_new_epoch() {
        let mut tree = tree_of(&[1, 2, 3]);
        let observer = tree.observe();
        tree.clear();
        tree.validate_invariants();
        assert!(!observer.is_live());
        assert!(tree.owns(&tree.observe()));
    }

    #[test]
    fn drain_yields_sorted_pairs() {
        let mut tree = tree_of(&[3, 1, 2]);
        assert_eq!(tree.drain_to_vec(), [(1, 10), (2, 20), (3, 30)]);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_hold_after_insertions(keys in prop::collection::vec(0i32..1000, 0..500)) {
            let mut tree: RawTreeMap<i32, i32> = RawTreeMap::new();
            for key in keys {
                tree.insert(key, key);
                tree.validate_invariants();
            }
        }

        #[test]
        fn successor_and_predecessor_agree(keys in prop::collection::vec(any::<i32>(), 0..300)) {
            let tree = tree_of(&keys);
            let mut expected: Vec<i32> = keys.clone();
            expected.sort_unstable();
            expected.dedup();

            let forward: Vec<i32> = tree.keys_in_order().into_iter().copied().collect();
            let mut backward: Vec<i32> = tree.keys_in_reverse().into_iter().copied().collect();
            backward.reverse();
            prop_assert_eq!(&forward, &expected);
            prop_assert_eq!(&backward, &expected);
        }

        #[test]
        fn clone_preserves_shape(keys in prop::collection::vec(0i32..500, 0..300)) {
            let tree = tree_of(&keys);
            let copy = tree.clone();
            copy.validate_invariants();
            prop_assert_eq!(copy.len(), tree.len());
            prop_assert_eq!(
                copy.root().map(|root| *copy.node(root).key()),
                tree.root().map(|root| *tree.node(root).key())
            );
            prop_assert_eq!(copy.keys_in_order(), tree.keys_in_order());
        }
    }
}
