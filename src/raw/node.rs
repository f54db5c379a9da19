use super::handle::Handle;

/// One key/value pair and its links.
///
/// `left` and `right` are the node's subtrees. `parent` is a back reference used only for
/// traversal; it never decides when anything is released (the arena owns every node).
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// Which side of its parent a node hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf. `parent` is `None` only for the root.
    pub(crate) const fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn key_value_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    pub(crate) fn into_key_value(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns `true` if `child` is this node's right child.
    pub(crate) fn is_right_child(&self, child: Handle) -> bool {
        self.right == Some(child)
    }

    /// Returns `true` if `child` is this node's left child.
    pub(crate) fn is_left_child(&self, child: Handle) -> bool {
        self.left == Some(child)
    }
}
