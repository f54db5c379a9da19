//! Shared test scaffolding.

use std::cell::Cell;
use std::fmt;

use proptest::prelude::*;

thread_local! {
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    static DROPPED: Cell<usize> = const { Cell::new(0) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// A value that counts its own constructions and drops.
///
/// Counters are per thread, and every test runs on its own thread, so tests do not see each
/// other's payloads. Equality compares `content` only: two payloads can be equal without being
/// the same object, which `id` tells apart.
#[allow(dead_code)]
pub struct Payload {
    pub content: String,
    id: u64,
    dropped: bool,
}

#[allow(dead_code)]
impl Payload {
    pub fn new(content: &str) -> Self {
        CONSTRUCTED.with(|c| c.set(c.get() + 1));
        let id = NEXT_ID.with(|n| {
            let id = n.get();
            n.set(id + 1);
            id
        });
        Payload {
            content: content.to_owned(),
            id,
            dropped: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn constructed() -> usize {
        CONSTRUCTED.with(Cell::get)
    }

    pub fn dropped() -> usize {
        DROPPED.with(Cell::get)
    }

    /// Payloads currently alive on this thread.
    pub fn alive() -> usize {
        Self::constructed() - Self::dropped()
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::new("")
    }
}

impl Clone for Payload {
    fn clone(&self) -> Self {
        assert!(!self.dropped, "cloned a dropped payload {}", self.id);
        Payload::new(&self.content)
    }
}

impl Drop for Payload {
    fn drop(&mut self) {
        assert!(!self.dropped, "payload {} dropped twice", self.id);
        self.dropped = true;
        DROPPED.with(|d| d.set(d.get() + 1));
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for Payload {}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload({:?}#{})", self.content, self.id)
    }
}

#[allow(dead_code)]
pub fn key_strategy() -> impl Strategy<Value = i64> {
    // Narrow enough to produce repeated keys.
    -2_000i64..2_000i64
}

#[allow(dead_code)]
pub fn entries_strategy(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((key_strategy(), any::<i64>()), len)
}
