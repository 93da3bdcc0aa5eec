// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability trait shared by every container in the crate.
//!
//! [`Container<T>`] is object-safe, so capacity can be erased at runtime with
//! `&dyn Container<T>` as well as at compile time with the
//! [`ArrayView`](crate::ArrayView) / [`VecView`](crate::VecView) types.

// Crate imports
use crate::{
    algorithm,
    cursor::{Position, ReverseCursor},
    trace::clamp_event,
};

// Core imports
use core::cmp::Ordering;

/// Read/write access to a live range of `T` with a fixed capacity.
///
/// Implementors only supply the live slice and the capacity; everything else is
/// derived from those.
pub trait Container<T> {
    /// The live elements.
    fn as_slice(&self) -> &[T];

    /// The live elements, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// The maximum number of elements the container can hold.
    fn capacity(&self) -> usize;

    /// Number of live elements.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// `true` if there are no live elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor at the first live element.
    #[inline]
    fn begin(&self) -> Position {
        Position::new(0)
    }

    /// Cursor one past the last live element.
    #[inline]
    fn end(&self) -> Position {
        Position::new(self.len())
    }

    /// Reverse cursor at the last live element.
    #[inline]
    fn rbegin(&self) -> ReverseCursor<Position> {
        ReverseCursor::new(self.end())
    }

    /// Reverse cursor one before the first live element.
    #[inline]
    fn rend(&self) -> ReverseCursor<Position> {
        ReverseCursor::new(self.begin())
    }

    /// Wrapping element access: returns the element at `pos % capacity`.
    ///
    /// Out-of-range positions are never rejected, they wrap.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero, or if the wrapped index is not live
    /// (only possible for a vector that is not full).
    #[inline]
    fn at(&self, pos: usize) -> &T {
        &self.as_slice()[wrap_index(pos, self.capacity())]
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        let index = wrap_index(pos, self.capacity());
        &mut self.as_mut_slice()[index]
    }

    /// The first live element, if any.
    #[inline]
    fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last live element, if any.
    #[inline]
    fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }
}

#[inline]
pub(crate) fn wrap_index(pos: usize, capacity: usize) -> usize {
    assert!(capacity != 0, "wrapping access into a zero-capacity container");
    if pos >= capacity {
        clamp_event!(pos, capacity, "at() index wrapped");
    }
    pos % capacity
}

/// Size match, then element-wise equality.
#[inline]
pub(crate) fn live_eq<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && algorithm::equal(a, b)
}

/// Lexicographic ordering of two live ranges; `None` when neither is less and
/// they are not equal (e.g. `NaN` elements).
pub(crate) fn live_partial_cmp<T: PartialOrd>(a: &[T], b: &[T]) -> Option<Ordering> {
    if algorithm::lexicographical_compare(a, b) {
        Some(Ordering::Less)
    } else if algorithm::lexicographical_compare(b, a) {
        Some(Ordering::Greater)
    } else if live_eq(a, b) {
        Some(Ordering::Equal)
    } else {
        None
    }
}
