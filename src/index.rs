// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for both container families.
//!
//! `Index` and `IndexMut` accept anything slices accept (`usize` and every range
//! form) and mirror slice behavior:
//! - panics on out-of-bounds;
//! - a vector exposes only its live prefix `[0..len)`;
//! - views index exactly like the container they borrow.
//!
//! For wrapping access use `at`/`at_mut` instead.

// Crate imports
use crate::{array::ArrayBase, memory::StorageCell, storage::Buffer, vector::VecBase};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, S, I> Index<I> for VecBase<T, S>
where
    S: ?Sized + Buffer<StorageCell<T>>,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, S, I> IndexMut<I> for VecBase<T, S>
where
    S: ?Sized + Buffer<StorageCell<T>>,
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, S, I> Index<I> for ArrayBase<T, S>
where
    S: ?Sized + Buffer<T>,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, S, I> IndexMut<I> for ArrayBase<T, S>
where
    S: ?Sized + Buffer<T>,
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
