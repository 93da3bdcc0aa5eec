// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::FixedArray, error::Error, vector::BoundedVec};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> BoundedVec<T, N> {
    /// Converts to a [`FixedArray`] when **full** (`len == N`), otherwise returns
    /// [`Error::InvalidLen`] and drops the vector.
    pub fn try_into_array(self) -> Result<FixedArray<T, N>, Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }
        let this = ManuallyDrop::new(self);
        // SAFETY: `len == N`, so every cell holds a live `T` and
        // `[MaybeUninit<T>; N]` has the layout of `[T; N]`. `this` is never
        // dropped, so ownership of each element moves to the array exactly once.
        let data = unsafe { ptr::read(this.buf.as_ptr().cast::<[T; N]>()) };
        Ok(FixedArray::from_array(data))
    }
}

impl<T, const N: usize> TryFrom<BoundedVec<T, N>> for FixedArray<T, N> {
    type Error = Error;
    #[inline]
    fn try_from(v: BoundedVec<T, N>) -> Result<Self, Error> {
        v.try_into_array()
    }
}
