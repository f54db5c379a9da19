use core::fmt;

use super::TreeMap;
use crate::raw::{EpochRef, Handle, RawTreeMap};

/// A detached position inside a [`TreeMap`].
///
/// A cursor is handed out by [`TreeMap::begin`], [`TreeMap::end`], [`TreeMap::find`],
/// [`TreeMap::insert`] and [`TreeMap::insert_or_assign`]. It either points at one entry or is at
/// the *end* position, one past the largest key.
///
/// Unlike [`Iter`](super::Iter), a cursor does not borrow the map. It can be kept across
/// insertions, and every operation that reads or moves it is handed the map explicitly. A cursor
/// never keeps an entry alive: once the entries it observed are released (by
/// [`clear`](TreeMap::clear), by assigning over the map with [`clone_from`](Clone::clone_from), or
/// by dropping the map) the cursor is *unresolvable* and compares equal to every end cursor.
///
/// Insertions do not disturb existing cursors; the tree never moves an entry once it is placed.
///
/// # Panics
///
/// Reading through an end cursor, moving forward from the end, and moving backward from the end
/// of an empty map are caller errors and panic. Using a live cursor with a map other than the one
/// that issued it (or the one it was [`swap`](TreeMap::swap)ped into) also panics.
///
/// # Examples
///
/// ```
/// use bst_map::TreeMap;
///
/// let mut map = TreeMap::from([(5, "five"), (2, "two"), (0, "zero"), (10, "ten")]);
///
/// // Walk forward.
/// let mut keys = Vec::new();
/// let mut cursor = map.begin();
/// while cursor != map.end() {
///     keys.push(*cursor.key(&map));
///     cursor.move_next(&map);
/// }
/// assert_eq!(keys, [0, 2, 5, 10]);
///
/// // Step back from the end into the last entry.
/// cursor.move_prev(&map);
/// assert_eq!(cursor.key_value(&map), (&10, &"ten"));
///
/// // Cursors survive insertions and notice when their entries are gone.
/// let two = map.find(&2);
/// map.insert(3, "three");
/// assert_eq!(two.value(&map), &"two");
/// map.clear();
/// assert!(two.is_end());
/// assert_eq!(two, map.end());
/// ```
#[derive(Clone)]
pub struct Cursor {
    epoch: EpochRef,
    node: Option<Handle>,
    // Last entry left behind by `move_next` when it stepped onto the end position.
    prev: Option<Handle>,
}

impl Cursor {
    pub(crate) fn at<K, V>(raw: &RawTreeMap<K, V>, node: Handle) -> Self {
        Cursor {
            epoch: raw.observe(),
            node: Some(node),
            prev: None,
        }
    }

    pub(crate) fn end<K, V>(raw: &RawTreeMap<K, V>) -> Self {
        Cursor {
            epoch: raw.observe(),
            node: None,
            prev: None,
        }
    }

    /// The node this cursor resolves to, independent of any map.
    fn resolve(&self) -> Option<Handle> {
        if self.epoch.is_live() { self.node } else { None }
    }

    /// The node this cursor resolves to in `raw`.
    fn position<K, V>(&self, raw: &RawTreeMap<K, V>) -> Option<Handle> {
        if !self.epoch.is_live() {
            return None;
        }
        assert!(raw.owns(&self.epoch), "`Cursor` - cursor does not belong to this map!");
        self.node
    }

    /// Returns `true` if the cursor does not point at an entry.
    ///
    /// This is the case for the end position and for any cursor whose entries have been released.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, 'a')]);
    /// let first = map.begin();
    /// assert!(!first.is_end());
    /// assert!(map.end().is_end());
    ///
    /// map.clear();
    /// assert!(first.is_end());
    /// ```
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.resolve().is_none()
    }

    /// Returns the entry under the cursor, or `None` at the end.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is live but belongs to a different map.
    #[must_use]
    pub fn get<'a, K, V>(&self, map: &'a TreeMap<K, V>) -> Option<(&'a K, &'a V)> {
        let node = map.raw.node(self.position(&map.raw)?);
        Some((node.key(), node.value()))
    }

    /// Returns the entry under the cursor with a mutable value, or `None` at the end.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is live but belongs to a different map.
    pub fn get_mut<'a, K, V>(&self, map: &'a mut TreeMap<K, V>) -> Option<(&'a K, &'a mut V)> {
        let handle = self.position(&map.raw)?;
        Some(map.raw.node_mut(handle).key_value_mut())
    }

    /// Returns the entry under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end, or belongs to a different map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(10, "ten");
    /// assert_eq!(map.find(&10).key_value(&map), (&10, &"ten"));
    /// ```
    #[must_use]
    pub fn key_value<'a, K, V>(&self, map: &'a TreeMap<K, V>) -> (&'a K, &'a V) {
        self.get(map).expect("`Cursor::key_value()` - cursor is at the end!")
    }

    /// Returns the key under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end, or belongs to a different map.
    #[must_use]
    pub fn key<'a, K, V>(&self, map: &'a TreeMap<K, V>) -> &'a K {
        self.get(map).expect("`Cursor::key()` - cursor is at the end!").0
    }

    /// Returns the value under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end, or belongs to a different map.
    #[must_use]
    pub fn value<'a, K, V>(&self, map: &'a TreeMap<K, V>) -> &'a V {
        self.get(map).expect("`Cursor::value()` - cursor is at the end!").1
    }

    /// Returns the value under the cursor for in-place modification.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end, or belongs to a different map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([("a", 1), ("b", 2)]);
    /// let b = map.find("b");
    /// *b.value_mut(&mut map) += 40;
    /// assert_eq!(map["b"], 42);
    /// ```
    pub fn value_mut<'a, K, V>(&self, map: &'a mut TreeMap<K, V>) -> &'a mut V {
        self.get_mut(map).expect("`Cursor::value_mut()` - cursor is at the end!").1
    }

    /// Advances to the next larger key, or to the end after the largest key.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end (or unresolvable), or belongs to a different map.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full traversal.
    pub fn move_next<K, V>(&mut self, map: &TreeMap<K, V>) {
        let current = self.position(&map.raw).expect("`Cursor::move_next()` - cursor is at the end!");
        let next = map.raw.successor(current);
        self.prev = if next.is_none() { Some(current) } else { None };
        self.node = next;
    }

    /// Moves to the next smaller key.
    ///
    /// From the end position this lands on the entry the cursor last left by moving forward, or,
    /// for an end cursor taken directly from the map, on the map's *current* largest key. Moving
    /// back from the smallest key reaches the end position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of an empty map, if its entries have been released, or
    /// if it belongs to a different map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([("Earth", 3), ("Mars", 4)]);
    /// let mut cursor = map.end();
    /// map.insert("Uranus", 7);
    ///
    /// cursor.move_prev(&map);
    /// assert_eq!(cursor.key(&map), &"Uranus");
    /// ```
    pub fn move_prev<K, V>(&mut self, map: &TreeMap<K, V>) {
        if let Some(current) = self.position(&map.raw) {
            self.node = map.raw.predecessor(current);
            self.prev = None;
            return;
        }

        assert!(self.epoch.is_live(), "`Cursor::move_prev()` - cursor no longer refers to live entries!");
        let target = self.prev.take().or_else(|| map.raw.last());
        self.node = Some(target.expect("`Cursor::move_prev()` - map is empty!"));
    }
}

impl PartialEq for Cursor {
    /// Two cursors are equal if they resolve to the same entry of the same map, or if neither
    /// resolves to an entry.
    fn eq(&self, other: &Self) -> bool {
        match (self.resolve(), other.resolve()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && self.epoch.same_epoch(&other.epoch),
            _ => false,
        }
    }
}

impl Eq for Cursor {}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Some(node) => f.debug_tuple("Cursor").field(&node).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
