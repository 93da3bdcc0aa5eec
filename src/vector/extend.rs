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

impl<T, S: ?Sized + Buffer<StorageCell<T>>> Extend<T> for VecBase<T, S> {
    /// Appends items until the vector is full; the rest are not pulled.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        self.insert_range(len, iter);
    }
}

impl<'a, T: Clone + 'a, S: ?Sized + Buffer<StorageCell<T>>> Extend<&'a T> for VecBase<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// Appends clones of `src` if they all fit; otherwise returns
    /// [`Error::Full`] and leaves the vector unchanged.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        self.extend_from_slice_truncated(src);
        Ok(())
    }

    /// Appends clones of as many elements of `src` as fit and returns the
    /// count appended.
    #[inline]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize {
        let (_, spare) = self.split_live();
        let built = memory::uninitialized_copy(src.iter().cloned(), spare);
        if built < src.len() {
            clamp_event!(
                requested = src.len(),
                appended = built,
                "extend_from_slice_truncated clamped"
            );
        }
        self.len += built;
        built
    }
}
