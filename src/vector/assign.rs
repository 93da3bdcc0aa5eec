// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    algorithm,
    memory::{self, StorageCell},
    storage::Buffer,
    trace::clamp_event,
    vector::VecBase,
};

impl<T, S: ?Sized + Buffer<StorageCell<T>>> VecBase<T, S> {
    /// Replaces the contents with `min(count, capacity)` clones of `value`.
    ///
    /// Live elements that survive are assigned, not reconstructed.
    pub fn assign_fill(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.truncate(count);
        algorithm::fill(self.as_mut_slice(), &value);
        self.resize(count, value);
    }

    /// Replaces the contents with the first `capacity` items of `src`.
    ///
    /// Items are copy-assigned over the live prefix, then constructed into raw
    /// cells; leftover live elements are destroyed. Items past the capacity are
    /// never pulled from `src`.
    pub fn assign_range<I: IntoIterator<Item = T>>(&mut self, src: I) {
        let mut src = src.into_iter();
        let (live, spare) = self.split_live();
        let assigned = algorithm::copy(&mut src, live);
        if assigned < live.len() {
            self.truncate(assigned);
            return;
        }
        let room = spare.len();
        let built = memory::uninitialized_copy(&mut src, spare);
        if built == room && src.size_hint() != (0, Some(0)) {
            clamp_event!(capacity = self.capacity(), "assign_range clamped");
        }
        self.len += built;
    }

    /// Replaces the contents with `min(other.len(), capacity)` elements of a
    /// vector of any element type and capacity, converting with `T::from`.
    #[inline]
    pub fn assign_from<U, S2>(&mut self, other: &VecBase<U, S2>)
    where
        U: Clone,
        T: From<U>,
        S2: ?Sized + Buffer<StorageCell<U>>,
    {
        self.assign_range(other.iter().cloned().map(T::from));
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        test_support::{values, Probe},
        BoundedVec, VecView,
    };
    use core::cell::Cell;

    #[test]
    fn test_assign_fill_grows_and_shrinks() {
        let mut v: BoundedVec<i32, 4> = BoundedVec::from_range([1, 2, 3]);
        v.assign_fill(2, 7);
        assert_eq!(v, [7, 7]);
        v.assign_fill(9, 5);
        assert_eq!(v, [5, 5, 5, 5]);
        v.assign_fill(0, 1);
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_range_shorter_and_longer() {
        let mut v: BoundedVec<i32, 4> = BoundedVec::from_range([1, 2, 3]);
        v.assign_range([9]);
        assert_eq!(v, [9]);
        v.assign_range([4, 5, 6, 7, 8]);
        assert_eq!(v, [4, 5, 6, 7]);
        v.assign_range([]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_range_assigns_live_prefix_in_place() {
        let drops = Cell::new(0);
        let mut v: BoundedVec<Probe<'_>, 4> = (0..3).map(|i| Probe::new(i, &drops)).collect();
        v.assign_range((10..12).map(|i| Probe::new(i, &drops)));
        // Two overwritten by assignment, one trailing element destroyed.
        assert_eq!(drops.get(), 3);
        assert_eq!(values::<2>(&v), [10, 11]);
    }

    #[test]
    fn test_assign_from_other_capacity_and_type() {
        let src: BoundedVec<u8, 6> = BoundedVec::from_range([1, 2, 3, 4, 5, 6]);
        let mut dst: BoundedVec<u32, 3> = BoundedVec::from_range([0]);
        dst.assign_from(&src);
        assert_eq!(dst, [1, 2, 3]);

        let short: BoundedVec<u8, 2> = BoundedVec::from_range([9]);
        let view: &mut VecView<u32> = &mut dst;
        view.assign_from(&short);
        assert_eq!(dst, [9]);
    }
}
