// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedVec`] and [`FixedArray`](crate::FixedArray).
//!
//! - `IntoIter<T, N>` yields a vector's elements by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`. Elements
//!   that are never yielded are dropped with the iterator.
//! - A `FixedArray` iterates by value through [`core::array::IntoIter`].
//! - References to either container (views included) iterate as slices.

// Crate imports
use crate::{
    array::{ArrayBase, FixedArray},
    memory::{self, StorageCell},
    storage::Buffer,
    vector::{BoundedVec, VecBase},
};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `BoundedVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    buf: [StorageCell<T>; N],
    // Cells in `front..back` are live; everything else is raw.
    front: usize,
    back: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` is live by invariant.
        unsafe { memory::assume_init_slice(&self.buf[self.front..self.back]) }
    }

    /// The elements not yet yielded, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `buf[front..back]` is live by invariant.
        unsafe { memory::assume_init_slice_mut(&mut self.buf[self.front..self.back]) }
    }

    /// Destroys `buf[from..to]`, which must lie inside the live range and have
    /// already been removed from it.
    #[inline]
    fn discard(&mut self, from: usize, to: usize) {
        // SAFETY: callers shrink `front..back` past `from..to` first, so these
        // cells are live and no longer reachable.
        unsafe { memory::destroy(&mut self.buf[from..to]) };
    }

    /// Reads cell `i`, which must be live and already removed from the live range.
    #[inline]
    fn read_cell(&mut self, i: usize) -> T {
        // SAFETY: cell `i` was live and is now outside `front..back`, so it is
        // read exactly once.
        unsafe { self.buf[i].assume_init_read() }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(self.read_cell(i))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let start = self.front;
        if n >= rem {
            self.front = self.back;
            self.discard(start, start + rem);
            return None;
        }
        let i = start + n;
        self.front = i + 1;
        self.discard(start, i);
        Some(self.read_cell(i))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.read_cell(self.back))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let end = self.back;
        if n >= rem {
            self.back = self.front;
            self.discard(end - rem, end);
            None
        } else {
            self.back -= n + 1;
            let i = self.back;
            self.discard(i + 1, end);
            Some(self.read_cell(i))
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        self.discard(front, back);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> IntoIterator for BoundedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the live cells moves
        // to the iterator exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            buf,
            front: 0,
            back: this.len,
        }
    }
}

impl<'a, T, S: ?Sized + Buffer<StorageCell<T>>> IntoIterator for &'a VecBase<T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, S: ?Sized + Buffer<StorageCell<T>>> IntoIterator for &'a mut VecBase<T, S> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T, S: ?Sized + Buffer<T>> IntoIterator for &'a ArrayBase<T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, S: ?Sized + Buffer<T>> IntoIterator for &'a mut ArrayBase<T, S> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
