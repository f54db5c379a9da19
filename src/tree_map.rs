use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;

use crate::raw::{Handle, InsertResult, RawTreeMap};

mod capacity;
mod cursor;
mod entry;

pub use cursor::Cursor;
pub use entry::{Entry, OccupiedEntry, VacantEntry};

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map stores its entries in key order. Keys must
/// implement [`Ord`]; values need no bounds beyond what individual methods ask for.
///
/// Every key lives in its own node, and nodes are placed by plain comparison descent with no
/// rebalancing: the depth of the tree, and so the cost of a lookup, depends directly on the order
/// keys were inserted in. Inserting sorted keys builds a list-shaped tree with O(n) lookups. In
/// exchange, a node never moves once inserted, which is what lets a [`Cursor`] stay valid across
/// later insertions.
///
/// The map has two ways to walk its entries:
///
/// - [`iter`](TreeMap::iter), [`keys`](TreeMap::keys) and [`values`](TreeMap::values) borrow the
///   map and follow Rust's [`Iterator`] protocol.
/// - [`Cursor`]s, from [`begin`](TreeMap::begin), [`end`](TreeMap::end), [`find`](TreeMap::find)
///   and the insertion methods, are detached positions that can be held while the map is mutated
///   and stepped in both directions, including backward from the end position.
///
/// There is no removal of single entries; [`clear`](TreeMap::clear) releases everything at once.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the `TreeMap`
/// that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use bst_map::TreeMap;
///
/// let mut planets = TreeMap::new();
/// planets.insert("Uranus", 19.2);
/// planets.insert("Earth", 1.0);
/// planets.insert("Pluto", 39.5);
/// planets.insert("Mars", 1.5);
///
/// // `insert` never overwrites.
/// let (cursor, inserted) = planets.insert("Earth", 0.0);
/// assert!(!inserted);
/// assert_eq!(cursor.value(&planets), &1.0);
///
/// // `insert_or_assign` does.
/// let (_, inserted) = planets.insert_or_assign("Pluto", 39.48);
/// assert!(!inserted);
/// assert_eq!(planets["Pluto"], 39.48);
///
/// // Entries come out in key order.
/// let names: Vec<_> = planets.keys().copied().collect();
/// assert_eq!(names, ["Earth", "Mars", "Pluto", "Uranus"]);
///
/// // Missing keys are materialized with a default value.
/// *planets.get_or_insert_default("Venus") += 0.7;
/// assert_eq!(planets.count("Venus"), 1);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct TreeMap<K, V> {
    raw: RawTreeMap<K, V>,
}

/// An iterator over the entries of a `TreeMap`.
///
/// This `struct` is created by the [`iter`] method on [`TreeMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use bst_map::TreeMap;
///
/// let map = TreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: TreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawTreeMap<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the entries of a `TreeMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`TreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `TreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`TreeMap`].
///
/// [`keys`]: TreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `TreeMap`.
///
/// This `struct` is created by the [`values`] method on [`TreeMap`].
///
/// [`values`]: TreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> TreeMap<K, V> {
    /// Makes a new, empty `TreeMap`.
    ///
    /// Does not allocate any nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> TreeMap<K, V> {
        TreeMap { raw: RawTreeMap::new() }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, releasing every entry.
    ///
    /// Every cursor obtained before the call becomes unresolvable and compares equal to
    /// [`end`](TreeMap::end).
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "a"), (2, "b")]);
    /// let first = map.begin();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.begin(), map.end());
    /// assert_eq!(first, map.end());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Exchanges the contents of two maps in O(1).
    ///
    /// Entries keep their identity: a cursor obtained from `self` now addresses `other`, and vice
    /// versa.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut a = TreeMap::from([(1, "a")]);
    /// let mut b = TreeMap::new();
    /// let one = a.begin();
    ///
    /// a.swap(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(one.key_value(&b), (&1, &"a"));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Returns a cursor at the smallest key, or the end cursor if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn begin(&self) -> Cursor {
        match self.raw.first() {
            Some(first) => Cursor::at(&self.raw, first),
            None => self.end(),
        }
    }

    /// Returns the end cursor, one past the largest key.
    ///
    /// Moving it backward lands on whatever the largest key is at that time.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::end(&self.raw)
    }

    /// Returns the first key-value pair in the map.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.first()?);
        Some((node.key(), node.value()))
    }

    /// Returns the last key-value pair in the map.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.last()?);
        Some((node.key(), node.value()))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Returns the number of entries with the given key: `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(1, "a")]);
    /// assert_eq!(map.count(&1), 1);
    /// assert_eq!(map.count(&2), 0);
    /// ```
    #[must_use]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        usize::from(self.raw.search(key).is_some())
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns the stored key and its value for the supplied key.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a cursor at the entry for `key`, or the end cursor if there is none.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(5, "five"), (2, "two"), (0, "zero"), (10, "ten")]);
    /// assert_eq!(map.find(&10).key_value(&map), (&10, &"ten"));
    /// assert_eq!(map.find(&99), map.end());
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.raw.search(key) {
            Some(handle) => Cursor::at(&self.raw, handle),
            None => self.end(),
        }
    }

    /// Inserts a key-value pair unless the key is already present.
    ///
    /// Returns a cursor at the entry for `key` and whether a new entry was created. An existing
    /// value is never overwritten; the rejected `value` is dropped.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// let (one, inserted) = map.insert(1, "one");
    /// assert!(inserted);
    ///
    /// let (again, inserted) = map.insert(1, "do not overwrite");
    /// assert!(!inserted);
    /// assert_eq!(again, one);
    /// assert_eq!(map[&1], "one");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) {
        match self.raw.insert(key, value) {
            InsertResult::Inserted(handle) => (Cursor::at(&self.raw, handle), true),
            InsertResult::Occupied(handle, _) => (Cursor::at(&self.raw, handle), false),
        }
    }

    /// Inserts a key-value pair, overwriting the value if the key is already present.
    ///
    /// The returned flag reports whether a new entry was created, so it is `false` when an
    /// existing value was replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "one")]);
    /// let (cursor, inserted) = map.insert_or_assign(1, "overwrite");
    /// assert!(!inserted);
    /// assert_eq!(cursor.value(&map), &"overwrite");
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Cursor, bool) {
        match self.raw.insert(key, value) {
            InsertResult::Inserted(handle) => (Cursor::at(&self.raw, handle), true),
            InsertResult::Occupied(handle, value) => {
                *self.raw.node_mut(handle).value_mut() = value;
                (Cursor::at(&self.raw, handle), false)
            }
        }
    }

    /// Returns the value for `key`, inserting `V::default()` first if the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut counts: TreeMap<&str, u32> = TreeMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    /// assert_eq!(counts["a"], 2);
    /// assert_eq!(counts["b"], 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Gets the given key's corresponding entry in the map for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut count: TreeMap<&str, usize> = TreeMap::new();
    ///
    /// // count the number of occurrences of letters in the vec
    /// for x in ["a", "b", "a", "c", "a", "b"] {
    ///     count.entry(x).and_modify(|curr| *curr += 1).or_insert(1);
    /// }
    ///
    /// assert_eq!(count["a"], 3);
    /// assert_eq!(count["b"], 2);
    /// assert_eq!(count["c"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.raw.search(&key) {
            Some(handle) => Entry::Occupied(OccupiedEntry {
                handle,
                tree: &mut self.raw,
            }),
            None => Entry::Vacant(VacantEntry {
                key,
                tree: &mut self.raw,
            }),
        }
    }
}

impl<K: Clone, V: Clone> Clone for TreeMap<K, V> {
    /// Deep copy. The two maps share no entries afterwards.
    fn clone(&self) -> Self {
        TreeMap { raw: self.raw.clone() }
    }

    /// Builds a full copy of `source`, then swaps it in.
    ///
    /// `self` is never left half-assigned, and its previous entries are released exactly once,
    /// after the exchange. Cursors into the previous entries become unresolvable.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<K: Hash, V: Hash> Hash for TreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for TreeMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for TreeMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        TreeMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    /// Collects pairs into a map. For repeated keys the first value wins, as with
    /// [`insert`](TreeMap::insert).
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for TreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for TreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for TreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.remaining -= 1;
        self.front = tree.successor(handle);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.remaining -= 1;
        self.back = tree.predecessor(handle);
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `tree_map::IntoIter`.
    ///
    /// ```
    /// # use bst_map::tree_map;
    /// let iter: tree_map::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
