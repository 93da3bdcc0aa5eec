// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::FixedArray,
    error::Error,
    memory::StorageCell,
    storage::Buffer,
    vector::{BoundedVec, VecBase, VecView},
};

// Core imports
use core::{marker::PhantomData, mem::MaybeUninit};

impl<T, const N: usize> BoundedVec<T, N> {
    /// The fixed capacity of this vector type.
    pub const CAPACITY: usize = N;

    /// An empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
            len: 0,
            buf: [const { MaybeUninit::uninit() }; N],
        }
    }

    /// `min(count, N)` value-initialized elements.
    #[inline]
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize_default(count);
        v
    }

    /// `min(count, N)` clones of `value`.
    #[inline]
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize(count, value);
        v
    }

    /// The first `N` items of `src`.
    ///
    /// Items past `N` are never pulled from the iterator.
    #[inline]
    pub fn from_range<I: IntoIterator<Item = T>>(src: I) -> Self {
        let mut v = Self::new();
        v.insert_range(0, src);
        v
    }

    /// Converts a vector of any element type and capacity.
    ///
    /// Copies `min(other.len(), N)` elements, converting each with `T::from`.
    #[inline]
    pub fn from_other<U, S>(other: &VecBase<U, S>) -> Self
    where
        U: Clone,
        T: From<U>,
        S: ?Sized + Buffer<StorageCell<U>>,
    {
        Self::from_range(other.iter().cloned().map(T::from))
    }

    /// Collects `iter` if it yields at most `N` items; otherwise [`Error::Full`].
    ///
    /// The iterator may be partially consumed on error.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.try_push(item)?;
        }
        Ok(v)
    }

    /// Borrows the vector with its capacity erased.
    #[inline]
    pub fn as_view(&self) -> &VecView<T> {
        self
    }

    /// Mutably borrows the vector with its capacity erased.
    #[inline]
    pub fn as_mut_view(&mut self) -> &mut VecView<T> {
        self
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for BoundedVec<T, N> {
    fn clone(&self) -> Self {
        Self::from_range(self.iter().cloned())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_range(source.iter().cloned());
    }
}

impl<T, const N: usize> From<[T; N]> for BoundedVec<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::from_range(items)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for BoundedVec<T, N> {
    fn from(array: FixedArray<T, N>) -> Self {
        Self::from_range(array.into_inner())
    }
}

impl<T, const N: usize> FromIterator<T> for BoundedVec<T, N> {
    /// Takes the first `N` items and ignores the rest.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_range(iter)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        test_support::{values, Probe},
        BoundedVec, Error, FixedArray,
    };
    use core::cell::Cell;

    #[test]
    fn test_new_is_const_and_empty() {
        const EMPTY: BoundedVec<u8, 4> = BoundedVec::new();
        assert!(EMPTY.is_empty());
        assert_eq!(BoundedVec::<u8, 4>::CAPACITY, 4);
        assert_eq!(BoundedVec::<u8, 4>::default().len(), 0);
    }

    #[test]
    fn test_with_len_and_from_elem_clamp() {
        let v: BoundedVec<i32, 4> = BoundedVec::with_len(3);
        assert_eq!(v, [0, 0, 0]);
        let v: BoundedVec<i32, 4> = BoundedVec::with_len(9);
        assert_eq!(v.len(), 4);

        let v: BoundedVec<char, 3> = BoundedVec::from_elem(10, 'z');
        assert_eq!(v, ['z'; 3]);
    }

    #[test]
    fn test_from_range_clamps_without_overconsuming() {
        let v: BoundedVec<i64, 3> = BoundedVec::from_range([1, 2, 3, 4, 5]);
        assert_eq!(v, [1, 2, 3]);

        let mut src = 0u8..10;
        let _: BoundedVec<u8, 4> = BoundedVec::from_range(&mut src);
        assert_eq!(src.next(), Some(4));
    }

    #[test]
    fn test_from_other_across_capacities() {
        let small: BoundedVec<i32, 2> = BoundedVec::from_range([7, 8]);
        let large: BoundedVec<i32, 6> = BoundedVec::from_other(&small);
        assert_eq!(large, [7, 8]);
        assert_eq!(large.capacity(), 6);

        let full: BoundedVec<u8, 5> = BoundedVec::from_range([1, 2, 3, 4, 5]);
        let narrow: BoundedVec<u32, 3> = BoundedVec::from_other(&full);
        assert_eq!(narrow, [1, 2, 3]);
    }

    #[test]
    fn test_conversions_from_arrays() {
        let v = BoundedVec::from([1, 2, 3]);
        assert!(v.is_full());
        let w: BoundedVec<_, 2> = FixedArray::from(['a', 'b']).into();
        assert_eq!(w, ['a', 'b']);
    }

    #[test]
    fn test_from_iterator_truncates_at_capacity() {
        let v: BoundedVec<u32, 3> = (1..=10).collect();
        assert_eq!(v, [1, 2, 3]);
        let z: BoundedVec<u32, 0> = (1..=10).collect();
        assert!(z.is_empty());
    }

    #[test]
    fn test_try_from_iter_and_try_from_slice() {
        let ok: Result<BoundedVec<u8, 3>, _> = BoundedVec::try_from_iter([1, 2]);
        assert_eq!(ok.unwrap(), [1, 2]);
        let err: Result<BoundedVec<u8, 3>, _> = BoundedVec::try_from_iter([1, 2, 3, 4]);
        assert_eq!(err.unwrap_err(), Error::Full);

        let ok = BoundedVec::<u8, 3>::try_from(&[1u8, 2, 3][..]);
        assert!(ok.is_ok());
        let err = BoundedVec::<u8, 2>::try_from(&[1u8, 2, 3][..]);
        assert_eq!(err.unwrap_err(), Error::Full);
    }

    #[test]
    fn test_clone_is_deep_and_drops_balance() {
        let drops = Cell::new(0);
        {
            let v: BoundedVec<Probe<'_>, 4> =
                BoundedVec::from_range([Probe::new(1, &drops), Probe::new(2, &drops)]);
            let mut w = v.clone();
            assert_eq!(values::<2>(&w), [1, 2]);

            let other: BoundedVec<Probe<'_>, 4> = BoundedVec::from_elem(3, Probe::new(9, &drops));
            // from_elem dropped its template.
            assert_eq!(drops.get(), 1);
            w.clone_from(&other);
            assert_eq!(values::<3>(&w), [9, 9, 9]);
        }
        // 1 template, 2 + 2 originals and clones, 3 + 3 nines.
        assert_eq!(drops.get(), 11);
    }
}
