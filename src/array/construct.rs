// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::{ArrayBase, FixedArray},
    storage::Buffer,
};

// Core imports
use core::{array, marker::PhantomData};

impl<T, const N: usize> FixedArray<T, N> {
    /// Wraps an existing array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self {
            marker: PhantomData,
            data,
        }
    }

    /// All `N` elements value-initialized with `T::default()`.
    #[inline]
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_array(array::from_fn(|_| T::default()))
    }

    /// All `N` elements are clones of `value`.
    #[inline]
    pub fn from_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_array(array::from_fn(|_| value.clone()))
    }

    /// Converts an array of any element type and size.
    ///
    /// The first `min(N, other.len())` elements are converted with `T::from`;
    /// the rest are `T::default()`. Source elements past `N` are ignored.
    #[inline]
    pub fn from_other<U, S>(other: &ArrayBase<U, S>) -> Self
    where
        U: Clone,
        T: From<U> + Default,
        S: ?Sized + Buffer<U>,
    {
        let mut out = Self::new();
        out.assign_from(other);
        out
    }

    /// Unwraps the inner array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    #[inline]
    fn from(a: FixedArray<T, N>) -> Self {
        a.into_inner()
    }
}

impl<T: Copy, const N: usize> Copy for FixedArray<T, N> {}
impl<T: Clone, const N: usize> Clone for FixedArray<T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_array(self.data.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}
