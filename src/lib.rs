//! An ordered set for Rust backed by an arena-allocated AVL tree.
//!
//! This crate provides [`Tree`], a deduplicated set of totally ordered keys
//! that keeps itself height-balanced under any mix of insertions and removals:
//!
//! - [`insert`](Tree::insert) / [`remove`](Tree::remove) / [`contains`](Tree::contains) - O(log n)
//! - [`size`](Tree::size) / [`empty`](Tree::empty) - O(1)
//! - [`values`](Tree::values) - every key in ascending order, O(n)
//!
//! # Example
//!
//! ```
//! use avl_set::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4] {
//!     assert!(tree.insert(key));
//! }
//!
//! // Inserting an existing key is a no-op.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.size(), 5);
//!
//! assert!(tree.remove(&3));
//! // Removing a missing key is a no-op too.
//! assert!(!tree.remove(&3));
//!
//! assert_eq!(tree.values(), [1, 4, 5, 8]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Never panics on input** - Duplicate inserts and missing keys are reported as `false`
//! - **Arena storage** - Nodes live in one contiguous slot vector and freed slots are reused
//!
//! # Implementation
//!
//! Nodes store their subtree height and refer to their children by arena
//! handle. Mutations record the descent path on an inline stack and walk it back
//! up, rotating wherever the two subtrees of a node differ in height by two.

#![no_std]
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

pub mod tree;

pub use tree::Tree;
