// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedVec` type, its capacity-erased `VecView`, and their inherent API.
//!
//! `BoundedVec<T, N>` stores up to `N` elements inline in a buffer of raw
//! [`StorageCell`]s and tracks a live length. Every method is written over the
//! buffer type `S`, so the same code runs on an owned vector and on a
//! `&mut VecView<T>` borrowed from a vector of any capacity.
//!
//! Capacity overflow never fails: the excess is dropped and, with the `tracing`
//! feature, reported as a `TRACE` event. Explicitly fallible `try_*`
//! companions return [`Error`](crate::Error) instead.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= capacity` always holds.
// - Cells in `buf[..len]` hold live `T` values.
// - Cells in `buf[len..]` are raw and are never read, copied or dropped as `T`.
// - `len` is lowered before live cells are destroyed, so a panicking `Drop`
//   leaks the remainder instead of dropping it twice.

mod assign;
mod construct;
mod erase;
mod extend;
mod insert;
mod into_array;
mod push;
mod resize;

// Crate imports
use crate::{
    container::{self, Container},
    memory::{self, StorageCell},
    storage::Buffer,
    trace::clamp_event,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

/// A vector of `0..=capacity` live elements over raw storage `S`.
///
/// Use the [`BoundedVec`] and [`VecView`] aliases rather than naming this
/// type directly.
///
/// # Fallible vs clamping operations
///
/// - **Clamping** (never fail, drop what does not fit): [`push`](Self::push),
///   [`insert`](Self::insert), [`insert_n`](Self::insert_n),
///   [`insert_range`](Self::insert_range), [`resize`](Self::resize),
///   [`resize_default`](Self::resize_default),
///   [`assign_range`](Self::assign_range),
///   [`extend_from_slice_truncated`](Self::extend_from_slice_truncated),
///   [`Extend`] and [`FromIterator`].
/// - **Fallible** (return [`Error::Full`](crate::Error::Full), vector
///   unchanged): [`try_push`](Self::try_push), [`try_insert`](Self::try_insert),
///   [`try_resize`](Self::try_resize),
///   [`extend_from_slice`](Self::extend_from_slice),
///   [`BoundedVec::try_from_iter`] and `TryFrom<&[T]>`.
///
/// # Examples
///
/// ```rust
/// use bounded_seq::{BoundedVec, VecView};
///
/// let mut v: BoundedVec<char, 4> = BoundedVec::new();
/// for c in ['a', 'b', 'c', 'd', 'e'] {
///     v.push(c);
/// }
/// assert_eq!(v, ['a', 'b', 'c', 'd']);
///
/// fn shout(view: &mut VecView<char>) {
///     view.erase(0);
///     view.insert(0, 'A');
/// }
/// shout(&mut v);
/// assert_eq!(v, ['A', 'b', 'c', 'd']);
/// ```
pub struct VecBase<T, S: ?Sized + Buffer<StorageCell<T>>> {
    pub(crate) marker: PhantomData<T>,
    pub(crate) len: usize,
    pub(crate) buf: S,
}

/// A vector with inline capacity `N`.
pub type BoundedVec<T, const N: usize> = VecBase<T, [StorageCell<T>; N]>;

/// Capacity-erased view of a [`BoundedVec`] of any capacity.
pub type VecView<T> = VecBase<T, [StorageCell<T>]>;

impl<T, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// The fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cells().len()
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// `capacity - len`, the number of elements that can still be added.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[..len]` is live by invariant.
        unsafe { memory::assume_init_slice(&self.buf.cells()[..self.len]) }
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: `buf[..len]` is live by invariant.
        unsafe { memory::assume_init_slice_mut(&mut self.buf.cells_mut()[..len]) }
    }

    /// Pointer to the start of the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.cells().as_ptr().cast()
    }

    /// Mutable pointer to the start of the buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.cells_mut().as_mut_ptr().cast()
    }

    /// The raw tail `buf[len..]`.
    ///
    /// Values written here become live only after a matching
    /// [`set_len`](Self::set_len).
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [StorageCell<T>] {
        let len = self.len;
        &mut self.buf.cells_mut()[len..]
    }

    /// Forces the live length to `new_len`.
    ///
    /// # Safety
    ///
    /// `new_len <= capacity`, and every cell in `buf[..new_len]` must hold a
    /// live `T`. Cells dropped out of the live range are not destroyed.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Element at `pos % capacity`. See [`Container::at`].
    ///
    /// # Panics
    ///
    /// Panics if the wrapped index is not live, or the capacity is zero.
    #[inline]
    pub fn at(&self, pos: usize) -> &T {
        Container::at(self, pos)
    }

    /// Mutable element at `pos % capacity`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> &mut T {
        Container::at_mut(self, pos)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// `min(requested, capacity)`, reporting the clamp.
    #[inline]
    pub(crate) fn clamp_len(&self, requested: usize) -> usize {
        let capacity = self.capacity();
        if requested > capacity {
            clamp_event!(requested, capacity, "length clamped to capacity");
            return capacity;
        }
        requested
    }

    /// Live elements and the raw tail, borrowed together.
    #[inline]
    pub(crate) fn split_live(&mut self) -> (&mut [T], &mut [StorageCell<T>]) {
        let len = self.len;
        let (live, spare) = self.buf.cells_mut().split_at_mut(len);
        // SAFETY: `buf[..len]` is live by invariant.
        (unsafe { memory::assume_init_slice_mut(live) }, spare)
    }
}

impl<T, S: ?Sized + Buffer<StorageCell<T>>> Drop for VecBase<T, S> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `buf[..len]` was live and the vector is never used again.
        unsafe { memory::destroy_n(self.buf.cells_mut(), len) };
    }
}

impl<T, S: ?Sized + Buffer<StorageCell<T>>> Container<T> for VecBase<T, S> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        VecBase::as_slice(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        VecBase::as_mut_slice(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        VecBase::capacity(self)
    }
}

impl<T: fmt::Debug, S: ?Sized + Buffer<StorageCell<T>>> fmt::Debug for VecBase<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, S1, S2> PartialEq<VecBase<T, S2>> for VecBase<T, S1>
where
    T: PartialEq,
    S1: ?Sized + Buffer<StorageCell<T>>,
    S2: ?Sized + Buffer<StorageCell<T>>,
{
    fn eq(&self, other: &VecBase<T, S2>) -> bool {
        container::live_eq(self.as_slice(), other.as_slice())
    }
}

impl<T, S, const M: usize> PartialEq<[T; M]> for VecBase<T, S>
where
    T: PartialEq,
    S: ?Sized + Buffer<StorageCell<T>>,
{
    fn eq(&self, other: &[T; M]) -> bool {
        container::live_eq(self.as_slice(), other)
    }
}

impl<T: PartialEq, S: ?Sized + Buffer<StorageCell<T>>> PartialEq<[T]> for VecBase<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        container::live_eq(self.as_slice(), other)
    }
}

impl<T: PartialEq, S: ?Sized + Buffer<StorageCell<T>>> PartialEq<&[T]> for VecBase<T, S> {
    fn eq(&self, other: &&[T]) -> bool {
        container::live_eq(self.as_slice(), other)
    }
}

impl<T: Eq, S: ?Sized + Buffer<StorageCell<T>>> Eq for VecBase<T, S> {}

impl<T, S1, S2> PartialOrd<VecBase<T, S2>> for VecBase<T, S1>
where
    T: PartialOrd,
    S1: ?Sized + Buffer<StorageCell<T>>,
    S2: ?Sized + Buffer<StorageCell<T>>,
{
    fn partial_cmp(&self, other: &VecBase<T, S2>) -> Option<Ordering> {
        container::live_partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord, S: ?Sized + Buffer<StorageCell<T>>> Ord for VecBase<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, S: ?Sized + Buffer<StorageCell<T>>> Hash for VecBase<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, S: ?Sized + Buffer<StorageCell<T>>> Deref for VecBase<T, S> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, S: ?Sized + Buffer<StorageCell<T>>> DerefMut for VecBase<T, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, S: ?Sized + Buffer<StorageCell<T>>> AsRef<[T]> for VecBase<T, S> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, S: ?Sized + Buffer<StorageCell<T>>> AsMut<[T]> for VecBase<T, S> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T, S: ?Sized + Buffer<StorageCell<T>>> Borrow<[T]> for VecBase<T, S> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, S: ?Sized + Buffer<StorageCell<T>>> BorrowMut<[T]> for VecBase<T, S> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use crate::test_support::Probe;
    use alloc::format;
    use core::cell::Cell;

    #[test]
    fn test_five_pushes_into_capacity_four() {
        let mut v: BoundedVec<i32, 4> = BoundedVec::new();
        for x in 1..=5 {
            v.push(x);
        }
        assert_eq!(v.len(), 4);
        assert!(v.is_full());
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_getters_and_spare_capacity() {
        let mut v: BoundedVec<u8, 5> = BoundedVec::from_range([1, 2, 3]);
        assert_eq!(v.capacity(), 5);
        assert_eq!(v.spare_capacity(), 2);
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
        *v.get_mut(0).unwrap() = 10;
        *v.front_mut().unwrap() += 1;
        *v.back_mut().unwrap() = 30;
        assert_eq!((v.front(), v.back()), (Some(&11), Some(&30)));
        assert!(v.contains(&2));
    }

    #[test]
    fn test_at_wraps_within_live_range() {
        let v: BoundedVec<u8, 3> = BoundedVec::from_range([1, 2, 3]);
        assert_eq!(*v.at(4), 2);
        let w: BoundedVec<u8, 4> = BoundedVec::from_range([1, 2]);
        assert_eq!(*w.at(5), 2);
    }

    #[test]
    #[should_panic]
    fn test_at_on_raw_cell_panics() {
        let w: BoundedVec<u8, 4> = BoundedVec::from_range([1, 2]);
        let _ = w.at(3);
    }

    #[test]
    fn test_view_performs_operations_of_concrete_vector() {
        fn fill_up(view: &mut VecView<u32>) -> usize {
            let mut n = 0;
            while !view.is_full() {
                view.push(n as u32);
                n += 1;
            }
            view.len()
        }
        let mut small: BoundedVec<u32, 2> = BoundedVec::new();
        let mut large: BoundedVec<u32, 6> = BoundedVec::new();
        assert_eq!(fill_up(&mut small), 2);
        assert_eq!(fill_up(large.as_mut_view()), 6);
        assert_eq!(large, [0, 1, 2, 3, 4, 5]);

        let views: [&VecView<u32>; 2] = [&small, &large];
        assert_eq!(views[0].capacity() + views[1].capacity(), 8);
    }

    #[test]
    fn test_eq_and_ordering_across_capacities() {
        let a: BoundedVec<i32, 3> = BoundedVec::from_range([0, 1, 2]);
        let b: BoundedVec<i32, 8> = BoundedVec::from_range([0, 1, 2, 3]);
        assert!(a < b);
        assert!(!(b < a));
        assert_ne!(a, b);

        let c: BoundedVec<i32, 8> = BoundedVec::from_range([0, 1, 2]);
        assert_eq!(a, c);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Equal));

        let empty: BoundedVec<i32, 2> = BoundedVec::new();
        assert!(empty < a);
        assert!(!(empty < BoundedVec::<i32, 5>::new()));
        assert_eq!(a.as_slice(), &[0, 1, 2][..]);
        assert_eq!(a, &[0, 1, 2][..]);
    }

    #[test]
    fn test_debug_shows_live_elements_only() {
        let v: BoundedVec<u8, 4> = BoundedVec::from_range([7, 8]);
        assert_eq!(
            format!("{v:?}"),
            "BoundedVec { len: 2, capacity: 4, elements: [7, 8] }"
        );
    }

    #[test]
    fn test_drop_destroys_only_live_cells() {
        let drops = Cell::new(0);
        {
            let mut v: BoundedVec<Probe<'_>, 8> = BoundedVec::new();
            for i in 0..3 {
                v.push(Probe::new(i, &drops));
            }
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_spare_capacity_mut_and_set_len() {
        let mut v: BoundedVec<u16, 4> = BoundedVec::from_range([1]);
        let spare = v.spare_capacity_mut();
        assert_eq!(spare.len(), 3);
        spare[0].write(2);
        spare[1].write(3);
        // SAFETY: cells 1 and 2 were just written.
        unsafe { v.set_len(3) };
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_zero_capacity_vec_behaves() {
        let mut v: BoundedVec<u8, 0> = BoundedVec::new();
        assert!(v.is_empty() && v.is_full());
        v.push(1);
        assert!(v.is_empty());
        assert_eq!(v.pop(), None);
        assert!(v.try_push(1).is_err());
    }

    #[test]
    fn test_zero_sized_type_supports_capacity() {
        let mut v: BoundedVec<(), 3> = BoundedVec::new();
        v.push(());
        v.push(());
        v.insert(1, ());
        assert_eq!(v.len(), 3);
        v.erase(0);
        assert_eq!(v.len(), 2);
    }
}
