use core::fmt;
use core::mem;

use super::Cursor;
use crate::raw::{Handle, RawTreeMap};

/// The slot for one key, found by a single descent from the root.
///
/// Returned by [`TreeMap::entry`](crate::TreeMap::entry). A vacant slot becomes a new leaf when
/// a value is supplied; an occupied slot addresses the existing node. Entries cannot be removed.
///
/// # Examples
///
/// ```
/// use bst_map::TreeMap;
/// use bst_map::tree_map::Entry;
///
/// let mut scores = TreeMap::new();
/// for name in ["ada", "bob", "ada"] {
///     match scores.entry(name) {
///         Entry::Vacant(slot) => {
///             slot.insert(1);
///         }
///         Entry::Occupied(mut node) => *node.get_mut() += 1,
///     }
/// }
/// assert_eq!(scores["ada"], 2);
/// assert_eq!(scores["bob"], 1);
/// ```
pub enum Entry<'a, K: 'a, V: 'a> {
    /// No node holds the key yet.
    Vacant(VacantEntry<'a, K, V>),

    /// A node already holds the key.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Vacant(v) => f.debug_tuple("Entry").field(v).finish(),
            Entry::Occupied(o) => f.debug_tuple("Entry").field(o).finish(),
        }
    }
}

/// A key with no node yet. See [`Entry`].
pub struct VacantEntry<'a, K, V> {
    pub(super) key: K,
    pub(super) tree: &'a mut RawTreeMap<K, V>,
}

impl<K: fmt::Debug, V> fmt::Debug for VacantEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VacantEntry").field("key", &self.key).finish()
    }
}

/// An existing node. See [`Entry`].
pub struct OccupiedEntry<'a, K, V> {
    pub(super) handle: Handle,
    pub(super) tree: &'a mut RawTreeMap<K, V>,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OccupiedEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry").field("key", self.key()).field("value", self.get()).finish()
    }
}

impl<'a, K: Ord, V> Entry<'a, K, V> {
    /// Returns the stored value, inserting `default` first if the slot is vacant.
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map: TreeMap<&str, u32> = TreeMap::new();
    /// *map.entry("hits").or_insert(0) += 1;
    /// assert_eq!(map["hits"], 1);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default),
        }
    }

    /// Like [`or_insert`](Entry::or_insert), but only builds the value when it is needed.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default()),
        }
    }

    /// Like [`or_insert_with`](Entry::or_insert_with), with the key passed to `default`.
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut lengths: TreeMap<&str, usize> = TreeMap::new();
    /// lengths.entry("Pluto").or_insert_with_key(|name| name.len());
    /// assert_eq!(lengths["Pluto"], 5);
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => {
                let value = default(&v.key);
                v.insert(value)
            }
        }
    }

    #[allow(clippy::must_use_candidate)]
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(o) => o.key(),
            Entry::Vacant(v) => v.key(),
        }
    }

    /// Runs `f` on the stored value if there is one; a vacant slot passes through unchanged.
    #[allow(clippy::return_self_not_must_use)]
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(ref mut o) = self {
            f(o.get_mut());
        }
        self
    }

    /// Stores `value` (inserting or overwriting) and keeps the resulting node as an entry.
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V> {
        match self {
            Entry::Occupied(mut o) => {
                o.insert(value);
                o
            }
            Entry::Vacant(v) => v.insert_entry(value),
        }
    }
}

impl<'a, K: Ord, V: Default> Entry<'a, K, V> {
    /// Returns the stored value, inserting `V::default()` first if the slot is vacant.
    ///
    /// This is what [`TreeMap::get_or_insert_default`](crate::TreeMap::get_or_insert_default)
    /// is built on.
    #[allow(clippy::must_use_candidate)]
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

impl<K, V> VacantEntry<'_, K, V> {
    #[allow(clippy::must_use_candidate)]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Gives the key back without inserting anything.
    #[allow(clippy::must_use_candidate)]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<'a, K: Ord, V> VacantEntry<'a, K, V> {
    /// Hangs a new leaf holding `value` and returns the value in place.
    pub fn insert(self, value: V) -> &'a mut V {
        self.insert_entry(value).into_mut()
    }

    /// Hangs a new leaf holding `value` and returns it as an occupied entry.
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V> {
        let handle = self.tree.insert(self.key, value).handle();
        OccupiedEntry {
            handle,
            tree: self.tree,
        }
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    #[must_use]
    pub fn key(&self) -> &K {
        self.tree.node(self.handle).key()
    }

    #[must_use]
    pub fn get(&self) -> &V {
        self.tree.node(self.handle).value()
    }

    pub fn get_mut(&mut self) -> &mut V {
        self.tree.node_mut(self.handle).value_mut()
    }

    /// Turns the entry into a reference to its value that lives as long as the map borrow.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_mut(self) -> &'a mut V {
        self.tree.node_mut(self.handle).value_mut()
    }

    /// Overwrites the stored value and returns the old one. The node itself stays in place.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Returns a detached cursor at this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    /// use bst_map::tree_map::Entry;
    ///
    /// let mut map = TreeMap::from([(1, "a"), (2, "b")]);
    /// let cursor = match map.entry(1) {
    ///     Entry::Occupied(o) => o.cursor(),
    ///     Entry::Vacant(_) => unreachable!(),
    /// };
    /// assert_eq!(cursor, map.begin());
    /// ```
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor::at(self.tree, self.handle)
    }
}
