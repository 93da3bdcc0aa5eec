// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    algorithm,
    cursor::Position,
    error::Error,
    memory::StorageCell,
    storage::Buffer,
    vector::VecBase,
};

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// Destroys the element at `index`, shifting the following elements left.
    ///
    /// Returns `index`, which now holds the element that followed the erased
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(index < len, "erase index (is {index}) should be < len (is {len})");
        self.erase_range(index..=index)
    }

    /// Destroys the elements in `range`, shifting the following elements left.
    ///
    /// The erased span is rotated to the end of the live range and then
    /// truncated. Returns the start of the range.
    ///
    /// # Panics
    ///
    /// Panics if the start is after the end or the end is past `len`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let len = self.len;
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("erase range start usize::MAX + 1 exceeds length {}", len)),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("erase range end usize::MAX + 1 exceeds length {}", len)),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("erase range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("erase range end {} exceeds length {}", end, len);
        }
        if start == end {
            return start;
        }

        algorithm::rotate(
            self.as_mut_slice(),
            Position::new(start),
            Position::new(end),
            Position::new(len),
        );
        self.truncate(len - (end - start));
        start
    }

    /// Removes and returns the element at `index`, shifting the following
    /// elements left. Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        algorithm::rotate(
            self.as_mut_slice(),
            Position::new(index),
            Position::new(index + 1),
            Position::new(len),
        );
        self.pop()
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Removes the element at `index` by moving the last element into its place.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        self.pop()
    }

    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// Rejected elements are destroyed once, after the scan.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let data = self.as_mut_slice();
        let mut write = 0;
        for read in 0..data.len() {
            if f(&data[read]) {
                data.swap(write, read);
                write += 1;
            }
        }
        self.truncate(write);
    }
}
