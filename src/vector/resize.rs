// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    memory::{self, StorageCell},
    storage::Buffer,
    vector::VecBase,
};

impl<T, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// Destroys `[count, len)` if `count < len`; otherwise a no-op.
    pub fn truncate(&mut self, count: usize) {
        let len = self.len;
        if count >= len {
            return;
        }
        self.len = count;
        // SAFETY: `buf[count..len]` was live and is now outside the live range.
        unsafe { memory::destroy(&mut self.buf.cells_mut()[count..len]) };
    }

    /// Destroys every live element.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `min(count, capacity)`, value-constructing new elements.
    ///
    /// Shrinking destroys the trailing elements. Growing past the capacity
    /// silently stops at the capacity.
    pub fn resize_default(&mut self, count: usize)
    where
        T: Default,
    {
        let len = self.len;
        if count <= len {
            self.truncate(count);
            return;
        }
        let target = self.clamp_len(count);
        memory::uninitialized_default(&mut self.buf.cells_mut()[len..target]);
        self.len = target;
    }

    /// Resizes to `min(count, capacity)`, filling new elements with clones of
    /// `value`.
    pub fn resize(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len;
        if count <= len {
            self.truncate(count);
            return;
        }
        let target = self.clamp_len(count);
        memory::uninitialized_fill(&mut self.buf.cells_mut()[len..target], &value);
        self.len = target;
    }

    /// Like [`resize`](Self::resize), but returns [`Error::Full`] and leaves the
    /// vector unchanged if `count > capacity`.
    #[inline]
    pub fn try_resize(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count > self.capacity() {
            return Err(Error::Full);
        }
        self.resize(count, value);
        Ok(())
    }
}
