use super::TreeMap;
use crate::raw::RawTreeMap;

impl<K, V> TreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before the node arena
    /// has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = TreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TreeMap {
            raw: RawTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating its node arena.
    ///
    /// [`clear`](TreeMap::clear) keeps the capacity; a deep copy is sized to its source's length.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
