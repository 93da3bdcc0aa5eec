// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insertion by construct-at-tail then rotate.
//!
//! New elements are first constructed in the raw cells right after the live
//! range, then the grown tail is rotated backward into the gap. The rotation
//! runs over a reversed cursor triple, which turns the left rotation of
//! [`algorithm::rotate`] into the right shift an insert needs.

// Crate imports
use crate::{
    algorithm,
    cursor::{Cursor, Position, ReverseCursor},
    error::Error,
    memory::{self, StorageCell},
    storage::Buffer,
    trace::clamp_event,
    vector::VecBase,
};

impl<T, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// Inserts `value` at `index`, shifting the following elements right.
    ///
    /// On a full vector this is a no-op and `value` is dropped. Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.check_insert_index(index);
        if self.is_full() {
            clamp_event!(index, "insert dropped on full vector");
            return index;
        }
        self.push(value);
        self.rotate_into(index, 1);
        index
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Only `min(count, spare_capacity)` clones are inserted. Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.check_insert_index(index);
        let (_, spare) = self.split_live();
        let room = count.min(spare.len());
        let fitted = memory::uninitialized_fill_n(spare, room, &value);
        if fitted < count {
            clamp_event!(requested = count, inserted = fitted, "insert_n clamped");
        }
        self.len += fitted;
        self.rotate_into(index, fitted);
        index
    }

    /// Inserts the items of `src` at `index`, in order.
    ///
    /// Only as many items as fit in the spare capacity are pulled from `src`.
    /// Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, index: usize, src: I) -> usize {
        self.check_insert_index(index);
        let mut src = src.into_iter();
        let (_, spare) = self.split_live();
        let room = spare.len();
        let built = memory::uninitialized_copy(&mut src, spare);
        if built == room && src.size_hint() != (0, Some(0)) {
            clamp_event!(inserted = built, "insert_range clamped");
        }
        self.len += built;
        self.rotate_into(index, built);
        index
    }

    /// Inserts `value` at `index`.
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len` and [`Error::Full`] if the
    /// vector is full; in both cases `value` is dropped and the vector unchanged.
    #[inline]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if self.is_full() {
            return Err(Error::Full);
        }
        self.insert(index, value);
        Ok(())
    }

    #[inline]
    fn check_insert_index(&self, index: usize) {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
    }

    /// Right-rotates `[index, len)` by `count`, moving the last `count` live
    /// elements to `index`.
    fn rotate_into(&mut self, index: usize, count: usize) {
        let data = self.as_mut_slice();
        let rbegin = ReverseCursor::new(Position::new(data.len()));
        let rend = ReverseCursor::new(Position::new(index));
        // `count` never exceeds the capacity, which fits in `isize`.
        algorithm::rotate(data, rbegin, rbegin.advance(count as isize), rend);
    }
}
