// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional cursors over a live range.
//!
//! A cursor is a `Copy` position that is dereferenced against the slice it
//! indexes, so the permutation algorithms in [`algorithm`](crate::algorithm) can
//! walk a range from both ends without holding overlapping borrows.
//!
//! [`ReverseCursor`] adapts any cursor: stepping is inverted and dereferencing
//! yields the element *before* the wrapped position. `rbegin` is therefore
//! `ReverseCursor::new(end)` and `rend` is `ReverseCursor::new(begin)`, with no
//! extra state. Comparisons are not inverted; they compare the wrapped cursors.

/// A bidirectional, random-access position into a slice.
pub trait Cursor: Copy + PartialEq {
    /// Slot of the element this cursor dereferences to.
    fn slot(self) -> usize;

    /// The cursor one step forward.
    fn forward(self) -> Self;

    /// The cursor one step backward.
    fn backward(self) -> Self;

    /// The cursor `n` steps forward (backward for negative `n`).
    fn advance(self, n: isize) -> Self;

    /// Number of forward steps from `self` to `last`.
    fn distance(self, last: Self) -> isize;

    /// Dereferences the cursor.
    ///
    /// # Panics
    ///
    /// Panics if [`slot`](Self::slot) is outside `data`.
    #[inline]
    fn get<T>(self, data: &[T]) -> &T {
        &data[self.slot()]
    }

    /// Dereferences the cursor mutably.
    ///
    /// # Panics
    ///
    /// Panics if [`slot`](Self::slot) is outside `data`.
    #[inline]
    fn get_mut<T>(self, data: &mut [T]) -> &mut T {
        &mut data[self.slot()]
    }

    /// The element `n` steps away from the cursor.
    #[inline]
    fn offset<T>(self, data: &[T], n: isize) -> &T {
        self.advance(n).get(data)
    }
}

/// Forward cursor: a plain index into the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// A cursor at `index`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The index this cursor sits at.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Cursor for Position {
    #[inline]
    fn slot(self) -> usize {
        self.0
    }

    #[inline]
    fn forward(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[inline]
    fn backward(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    #[inline]
    fn advance(self, n: isize) -> Self {
        Self(self.0.wrapping_add_signed(n))
    }

    #[inline]
    fn distance(self, last: Self) -> isize {
        last.0.wrapping_sub(self.0) as isize
    }
}

/// Reverse adapter over any [`Cursor`].
///
/// Dereferencing reads the predecessor of the wrapped position, so
/// `ReverseCursor::new(end)` reads the last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReverseCursor<C>(C);

impl<C: Cursor> ReverseCursor<C> {
    /// Wraps `base`.
    #[inline]
    pub const fn new(base: C) -> Self {
        Self(base)
    }

    /// Returns the wrapped cursor.
    #[inline]
    pub fn base(self) -> C {
        self.0
    }
}

impl<C: Cursor> Cursor for ReverseCursor<C> {
    #[inline]
    fn slot(self) -> usize {
        self.0.backward().slot()
    }

    #[inline]
    fn forward(self) -> Self {
        Self(self.0.backward())
    }

    #[inline]
    fn backward(self) -> Self {
        Self(self.0.forward())
    }

    #[inline]
    fn advance(self, n: isize) -> Self {
        Self(self.0.advance(n.wrapping_neg()))
    }

    #[inline]
    fn distance(self, last: Self) -> isize {
        last.0.distance(self.0)
    }

    // base[-n - 1]
    #[inline]
    fn offset<T>(self, data: &[T], n: isize) -> &T {
        self.0.advance(n.wrapping_neg().wrapping_sub(1)).get(data)
    }
}
