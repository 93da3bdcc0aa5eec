// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedArray` type, its capacity-erased `ArrayView`, and their shared API.
//!
//! Both are aliases of [`ArrayBase<T, S>`]: `S = [T; N]` owns the elements,
//! `S = [T]` is the unsized view obtained by borrowing any `FixedArray`. Every
//! method below is written once over `S`, so a view behaves exactly like the
//! array it borrows.
//!
//! No heap allocations are performed.

mod assign;
mod construct;

// Crate imports
use crate::{
    container::{self, Container},
    storage::Buffer,
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

/// Exactly `S::len()` live elements stored inline.
///
/// Use the [`FixedArray`] and [`ArrayView`] aliases rather than naming this
/// type directly.
///
/// # Invariants
///
/// - `len() == capacity()` always; every cell holds a live `T`.
/// - The capacity never changes, including through
///   [`assign_from`](ArrayBase::assign_from).
pub struct ArrayBase<T, S: ?Sized + Buffer<T>> {
    pub(crate) marker: PhantomData<T>,
    pub(crate) data: S,
}

/// A fixed-size array of exactly `N` elements.
///
/// # Examples
///
/// ```rust
/// use bounded_seq::{FixedArray, ArrayView};
///
/// let a = FixedArray::from([3, 1, 2]);
/// let b: FixedArray<i64, 5> = FixedArray::from_other(&a);
/// assert_eq!(b, [3, 1, 2, 0, 0]);
///
/// let view: &ArrayView<i32> = a.as_view();
/// assert_eq!(view.len(), 3);
/// assert_eq!(*view.at(4), 1);
/// ```
pub type FixedArray<T, const N: usize> = ArrayBase<T, [T; N]>;

/// Capacity-erased view of a [`FixedArray`] of any size.
pub type ArrayView<T> = ArrayBase<T, [T]>;

impl<T, S: ?Sized + Buffer<T>> ArrayBase<T, S> {
    /// Number of elements (equal to [`capacity`](Self::capacity)).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.cells().len()
    }

    /// The fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.len()
    }

    /// `true` only for a zero-sized array.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.cells()
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.cells_mut()
    }

    /// Pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
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

    /// Element at `pos % N`. See [`Container::at`].
    #[inline]
    pub fn at(&self, pos: usize) -> &T {
        Container::at(self, pos)
    }

    /// Mutable element at `pos % N`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> &mut T {
        Container::at_mut(self, pos)
    }

    /// First element, `None` for a zero-sized array.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last element, `None` for a zero-sized array.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// First element, mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// The fixed capacity of this array type.
    pub const CAPACITY: usize = N;

    /// Borrows the array with its size erased.
    #[inline]
    pub fn as_view(&self) -> &ArrayView<T> {
        self
    }

    /// Mutably borrows the array with its size erased.
    #[inline]
    pub fn as_mut_view(&mut self) -> &mut ArrayView<T> {
        self
    }
}

impl<T, S: ?Sized + Buffer<T>> Container<T> for ArrayBase<T, S> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data.cells()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.cells_mut()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.data.cells().len()
    }
}

impl<T: fmt::Debug, S: ?Sized + Buffer<T>> fmt::Debug for ArrayBase<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, S1, S2> PartialEq<ArrayBase<T, S2>> for ArrayBase<T, S1>
where
    T: PartialEq,
    S1: ?Sized + Buffer<T>,
    S2: ?Sized + Buffer<T>,
{
    fn eq(&self, other: &ArrayBase<T, S2>) -> bool {
        container::live_eq(self.as_slice(), other.as_slice())
    }
}

impl<T: PartialEq, S: ?Sized + Buffer<T>, const M: usize> PartialEq<[T; M]> for ArrayBase<T, S> {
    fn eq(&self, other: &[T; M]) -> bool {
        container::live_eq(self.as_slice(), other)
    }
}

impl<T: PartialEq, S: ?Sized + Buffer<T>> PartialEq<[T]> for ArrayBase<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        container::live_eq(self.as_slice(), other)
    }
}

impl<T: Eq, S: ?Sized + Buffer<T>> Eq for ArrayBase<T, S> {}

impl<T, S1, S2> PartialOrd<ArrayBase<T, S2>> for ArrayBase<T, S1>
where
    T: PartialOrd,
    S1: ?Sized + Buffer<T>,
    S2: ?Sized + Buffer<T>,
{
    fn partial_cmp(&self, other: &ArrayBase<T, S2>) -> Option<Ordering> {
        container::live_partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord, S: ?Sized + Buffer<T>> Ord for ArrayBase<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, S: ?Sized + Buffer<T>> Hash for ArrayBase<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, S: ?Sized + Buffer<T>> Deref for ArrayBase<T, S> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, S: ?Sized + Buffer<T>> DerefMut for ArrayBase<T, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, S: ?Sized + Buffer<T>> AsRef<[T]> for ArrayBase<T, S> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, S: ?Sized + Buffer<T>> AsMut<[T]> for ArrayBase<T, S> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T, S: ?Sized + Buffer<T>> Borrow<[T]> for ArrayBase<T, S> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, S: ?Sized + Buffer<T>> BorrowMut<[T]> for ArrayBase<T, S> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
