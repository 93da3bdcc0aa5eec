// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    memory::{self, StorageCell},
    storage::Buffer,
    trace::clamp_event,
    vector::VecBase,
};

impl<T, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// Appends `value` if there is room; on a full vector `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.try_push_within(value).is_err() {
            clamp_event!(capacity = self.capacity(), "push dropped on full vector");
        }
    }

    /// Appends `value` if not full; returns [`Error::Full`] otherwise.
    ///
    /// On error `value` is dropped and the vector is unchanged.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        self.try_push_within(value).map_err(|_| Error::Full)
    }

    /// Destroys the last element; a no-op on an empty vector.
    #[inline]
    pub fn pop_back(&mut self) {
        drop(self.pop());
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: cell `len` was the last live cell and is now outside the live
        // range, so it is read exactly once.
        Some(unsafe { self.buf.cells()[self.len].assume_init_read() })
    }

    fn try_push_within(&mut self, value: T) -> Result<(), T> {
        let len = self.len;
        match self.buf.cells_mut().get_mut(len) {
            Some(cell) => {
                memory::construct_at(cell, value);
                self.len = len + 1;
                Ok(())
            }
            None => Err(value),
        }
    }
}
