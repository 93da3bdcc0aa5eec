// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{algorithm, array::ArrayBase, storage::Buffer, trace::clamp_event};

impl<T, S: ?Sized + Buffer<T>> ArrayBase<T, S> {
    /// Copy-assigns from an array of any element type and size.
    ///
    /// The first `min(self.len(), other.len())` elements are converted with
    /// `T::from`; any remaining elements of `self` are reset to `T::default()`.
    /// The size of `self` never changes.
    pub fn assign_from<U, S2>(&mut self, other: &ArrayBase<U, S2>)
    where
        U: Clone,
        T: From<U> + Default,
        S2: ?Sized + Buffer<U>,
    {
        if other.len() > self.len() {
            clamp_event!(
                source = other.len(),
                capacity = self.len(),
                "array assignment truncated"
            );
        }
        let dst = self.as_mut_slice();
        let copied = algorithm::copy(other.iter().cloned().map(T::from), dst);
        let rest = &mut dst[copied..];
        for slot in rest {
            *slot = T::default();
        }
    }

    /// Assigns a clone of `value` to every element.
    #[inline]
    pub fn fill(&mut self, value: &T)
    where
        T: Clone,
    {
        algorithm::fill(self.as_mut_slice(), value);
    }

    /// Exchanges the contents with another array of the same size.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn swap_with<S2: ?Sized + Buffer<T>>(&mut self, other: &mut ArrayBase<T, S2>) {
        assert_eq!(self.len(), other.len(), "swap_with between arrays of different size");
        self.as_mut_slice().swap_with_slice(other.as_mut_slice());
    }
}
