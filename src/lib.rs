// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-seq`
//!
//! `no_std` fixed-capacity sequence containers that never allocate:
//!
//! - [`FixedArray<T, N>`]: exactly `N` live elements.
//! - [`BoundedVec<T, N>`]: `0..=N` live elements in an inline buffer of raw
//!   storage cells. Only the live prefix is ever constructed, read or dropped.
//!
//! ## Capacity erasure
//!
//! Containers of the same element type but different capacities share one
//! API. Borrowing a container as [`ArrayView<T>`] / [`VecView<T>`] drops the
//! capacity from the type while keeping every operation, and
//! [`Container<T>`] offers the same through `&dyn Container<T>`:
//!
//! ```rust
//! use bounded_seq::{BoundedVec, VecView};
//!
//! fn append_marker(v: &mut VecView<u8>) {
//!     v.push(0xff);
//! }
//!
//! let mut small: BoundedVec<u8, 2> = BoundedVec::from_range([1]);
//! let mut large: BoundedVec<u8, 64> = BoundedVec::new();
//! append_marker(&mut small);
//! append_marker(&mut large);
//! append_marker(&mut small); // full: silently dropped
//! assert_eq!(small, [1, 0xff]);
//! assert_eq!(large, [0xff]);
//! ```
//!
//! ## Clamping vs fallible operations
//!
//! Capacity overflow is never an error for the primary operations: `push`,
//! `insert*`, `resize*`, `assign*`, the constructors, `Extend` and
//! `FromIterator` drop whatever does not fit. With the `tracing` feature each
//! such clamp emits a `TRACE` event under the `bounded_seq::clamp` target.
//!
//! The `try_*` companions ([`BoundedVec::try_push`], [`BoundedVec::try_insert`],
//! [`BoundedVec::try_resize`], [`BoundedVec::try_from_iter`],
//! [`BoundedVec::extend_from_slice`], `TryFrom<&[T]>`) instead return
//! [`Error::Full`] and leave the vector unchanged.
//!
//! ## Range and indexing behavior
//!
//! - Indexing (`v[i]`, `v[start..end]`, …) follows slice semantics and
//!   **panics** out of bounds; a vector only exposes its live prefix.
//! - `at(pos)` wraps: it reads index `pos % capacity` and never rejects a
//!   position. On a vector that is not full a wrapped index can still land
//!   outside the live prefix, which panics.
//! - `insert*` panics if the position is past `len`; `erase*` panics on ranges
//!   outside the live prefix.
//!
//! ## Building blocks
//!
//! The containers are built on public, reusable pieces:
//!
//! - [`memory`]: construct-in-place and destroy primitives over
//!   [`StorageCell`]s.
//! - [`algorithm`]: copy, fill, equality, lexicographic compare, reverse,
//!   rotate, min/max and swaps.
//! - [`cursor`]: random-access positions and the [`ReverseCursor`] adapter;
//!   rotating over reverse cursors is how insertion shifts elements right.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for both containers, as sequences.
//! - `tracing`: `TRACE` events for silent clamps.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::undocumented_unsafe_blocks)]

#[cfg(test)]
extern crate alloc;

// Modules
pub mod algorithm;
mod array;
mod container;
pub mod cursor;
mod error;
mod index;
mod iter;
pub mod memory;
#[cfg(feature = "serde")]
mod serde;
mod storage;
#[cfg(test)]
mod test_support;
mod trace;
mod vector;

// Public exports (crate API surface)
pub use array::{ArrayBase, ArrayView, FixedArray};
pub use container::Container;
pub use cursor::{Cursor, Position, ReverseCursor};
pub use error::Error;
pub use iter::IntoIter;
pub use memory::StorageCell;
pub use storage::Buffer;
pub use vector::{BoundedVec, VecBase, VecView};
