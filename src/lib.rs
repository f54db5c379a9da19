//! An unbalanced binary-search-tree map with detached, invalidation-aware cursors.
//!
//! This crate provides [`TreeMap`], an ordered map with unique keys, and [`Cursor`], a
//! bidirectional position inside it that does not borrow the map:
//!
//! - [`begin`](TreeMap::begin) / [`end`](TreeMap::end) / [`find`](TreeMap::find) hand out cursors
//! - [`move_next`](Cursor::move_next) / [`move_prev`](Cursor::move_prev) walk in key order, and
//!   the end position steps back into the largest key
//! - cursors survive insertions, and quietly become end cursors when the map is cleared,
//!   reassigned or dropped instead of dangling
//!
//! # Example
//!
//! ```
//! use bst_map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! for (key, name) in [(5, "five"), (2, "two"), (0, "zero"), (10, "ten")] {
//!     map.insert(key, name);
//! }
//!
//! // Walk backward from the end.
//! let mut cursor = map.end();
//! let mut keys = Vec::new();
//! while cursor != map.begin() {
//!     cursor.move_prev(&map);
//!     keys.push(*cursor.key(&map));
//! }
//! assert_eq!(keys, [10, 5, 2, 0]);
//!
//! // Copies are deep.
//! let mut copy = map.clone();
//! *copy.get_or_insert_default(5) = "FIVE";
//! assert_eq!(map[&5], "five");
//! ```
//!
//! # Implementation
//!
//! Nodes live in a flat arena owned by the map and link to each other (children and parent) by
//! index, so the parent back-reference never participates in ownership. Each node graph carries a
//! liveness token; cursors hold only a weak reference to it, which is how a cursor detects that the
//! entries it pointed at were released.
//!
//! There is no rebalancing and no removal of individual keys.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod tree_map;

pub use tree_map::{Cursor, TreeMap};
