use alloc::sync::{Arc, Weak};

/// Liveness token for one node graph.
///
/// A map owns exactly one `Epoch`. Whenever the node graph is released as a whole (`clear`,
/// assignment, drop) the map's epoch is replaced or dropped, which expires every [`EpochRef`]
/// handed out for the old graph.
#[derive(Debug)]
pub(crate) struct Epoch(Arc<()>);

/// Non-owning observer of an [`Epoch`].
#[derive(Clone, Debug)]
pub(crate) struct EpochRef(Weak<()>);

impl Epoch {
    pub(crate) fn new() -> Self {
        Self(Arc::new(()))
    }

    pub(crate) fn observe(&self) -> EpochRef {
        EpochRef(Arc::downgrade(&self.0))
    }

    /// True if `observer` was issued by this epoch.
    pub(crate) fn issued(&self, observer: &EpochRef) -> bool {
        core::ptr::eq(Arc::as_ptr(&self.0), observer.0.as_ptr())
    }
}

impl EpochRef {
    pub(crate) fn is_live(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub(crate) fn same_epoch(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}
