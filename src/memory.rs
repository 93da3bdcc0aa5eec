// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object-lifetime primitives over raw storage cells.
//!
//! A [`StorageCell<T>`] is memory sized and aligned for one `T` that carries no
//! initialization. The functions here are the only code allowed to turn raw
//! cells into live objects and back:
//!
//! - the `uninitialized_*` family constructs values in place without reading or
//!   dropping whatever bit pattern the cells held before;
//! - the `destroy*` family drops live values in place and is `unsafe`, since the
//!   caller asserts the cells are live.
//!
//! Every "range" form has a `_n` form taking a count; those return the number of
//! cells they touched, i.e. the position past the last one.
//!
//! If a `Clone`, `From` or `Default` implementation panics part-way through a
//! run, the cells constructed so far are leaked, never dropped twice.

// Core imports
use core::{mem::MaybeUninit, ptr, slice};

/// Raw memory for exactly one `T`.
///
/// The cell is never default-constructed as `T`; its contents must not be read,
/// copied or dropped as `T` until one of the construction primitives has
/// written it.
pub type StorageCell<T> = MaybeUninit<T>;

/// Constructs `value` in place and returns a reference to the now live object.
///
/// Any previous contents of `cell` are overwritten without being dropped.
#[inline]
pub fn construct_at<T>(cell: &mut StorageCell<T>, value: T) -> &mut T {
    cell.write(value)
}

/// Constructs values from `src` into `dst`, converting each item with `From`.
///
/// Stops when either `src` or `dst` runs out. No item is pulled from `src` once
/// `dst` is exhausted. Returns the number of cells constructed.
pub fn uninitialized_copy<T, I>(src: I, dst: &mut [StorageCell<T>]) -> usize
where
    I: IntoIterator,
    T: From<I::Item>,
{
    let mut built = 0;
    for (cell, item) in dst.iter_mut().zip(src) {
        cell.write(T::from(item));
        built += 1;
    }
    built
}

/// Constructs at most `count` values from `src` into the front of `dst`.
///
/// Returns the number of cells constructed.
///
/// # Panics
///
/// Panics if `count > dst.len()`.
#[inline]
pub fn uninitialized_copy_n<T, I>(src: I, count: usize, dst: &mut [StorageCell<T>]) -> usize
where
    I: IntoIterator,
    T: From<I::Item>,
{
    uninitialized_copy(src, &mut dst[..count])
}

/// Constructs a clone of `value` in every cell of `dst`.
pub fn uninitialized_fill<T: Clone>(dst: &mut [StorageCell<T>], value: &T) {
    for cell in dst {
        cell.write(value.clone());
    }
}

/// Constructs a clone of `value` in the first `count` cells of `dst`.
///
/// # Panics
///
/// Panics if `count > dst.len()`.
#[inline]
pub fn uninitialized_fill_n<T: Clone>(dst: &mut [StorageCell<T>], count: usize, value: &T) -> usize {
    uninitialized_fill(&mut dst[..count], value);
    count
}

/// Value-constructs (`T::default()`) every cell of `dst`.
pub fn uninitialized_default<T: Default>(dst: &mut [StorageCell<T>]) {
    for cell in dst {
        cell.write(T::default());
    }
}

/// Value-constructs the first `count` cells of `dst`.
///
/// # Panics
///
/// Panics if `count > dst.len()`.
#[inline]
pub fn uninitialized_default_n<T: Default>(dst: &mut [StorageCell<T>], count: usize) -> usize {
    uninitialized_default(&mut dst[..count]);
    count
}

/// Drops the object living in `cell`, leaving the cell raw.
///
/// # Safety
///
/// `cell` must hold a live `T`, and it must not be read or dropped again as `T`
/// until it is re-constructed.
#[inline]
pub unsafe fn destroy_at<T>(cell: &mut StorageCell<T>) {
    // SAFETY: the caller guarantees `cell` is initialized.
    unsafe { cell.assume_init_drop() }
}

/// Drops every object in `cells`, leaving the whole run raw.
///
/// # Safety
///
/// Every cell of `cells` must hold a live `T`; afterwards none of them may be
/// read or dropped as `T` until re-constructed.
#[inline]
pub unsafe fn destroy<T>(cells: &mut [StorageCell<T>]) {
    let live = ptr::slice_from_raw_parts_mut(cells.as_mut_ptr().cast::<T>(), cells.len());
    // SAFETY: `MaybeUninit<T>` has the layout of `T` and the caller guarantees
    // every cell in the run is initialized, so this is a valid `*mut [T]`.
    unsafe { ptr::drop_in_place(live) }
}

/// Drops the first `count` objects of `cells` and returns `count`.
///
/// # Safety
///
/// `count <= cells.len()` and the first `count` cells must hold live objects.
#[inline]
pub unsafe fn destroy_n<T>(cells: &mut [StorageCell<T>], count: usize) -> usize {
    debug_assert!(count <= cells.len(), "destroy_n past the end of the run");
    // SAFETY: forwarded caller contract; `get_unchecked_mut` stays in bounds.
    unsafe { destroy(cells.get_unchecked_mut(..count)) };
    count
}

/// Views a run of live cells as a slice of `T`.
///
/// # Safety
///
/// Every cell of `cells` must hold a live `T`.
#[inline]
pub unsafe fn assume_init_slice<T>(cells: &[StorageCell<T>]) -> &[T] {
    // SAFETY: same layout, and the caller guarantees initialization.
    unsafe { slice::from_raw_parts(cells.as_ptr().cast::<T>(), cells.len()) }
}

/// Views a run of live cells as a mutable slice of `T`.
///
/// # Safety
///
/// Every cell of `cells` must hold a live `T`.
#[inline]
pub unsafe fn assume_init_slice_mut<T>(cells: &mut [StorageCell<T>]) -> &mut [T] {
    // SAFETY: same layout, and the caller guarantees initialization. The
    // returned borrow is derived from the exclusive borrow of `cells`.
    unsafe { slice::from_raw_parts_mut(cells.as_mut_ptr().cast::<T>(), cells.len()) }
}
