// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backing buffers.
//!
//! [`Buffer<E>`] is implemented for `[E; N]` (owned, capacity in the type) and
//! `[E]` (unsized, capacity in the slice metadata). Container code is written
//! once against `S: ?Sized + Buffer<E>` and therefore runs unchanged over an
//! owned container and over a view borrowed from it.
//!
//! The trait is sealed; no other buffer shapes exist.

mod sealed {
    pub trait Sealed {}

    impl<E, const N: usize> Sealed for [E; N] {}
    impl<E> Sealed for [E] {}
}

/// Contiguous storage of `E` whose length is the container capacity.
pub trait Buffer<E>: sealed::Sealed {
    /// The whole buffer.
    fn cells(&self) -> &[E];

    /// The whole buffer, mutably.
    fn cells_mut(&mut self) -> &mut [E];
}

impl<E, const N: usize> Buffer<E> for [E; N] {
    #[inline]
    fn cells(&self) -> &[E] {
        self
    }

    #[inline]
    fn cells_mut(&mut self) -> &mut [E] {
        self
    }
}

impl<E> Buffer<E> for [E] {
    #[inline]
    fn cells(&self) -> &[E] {
        self
    }

    #[inline]
    fn cells_mut(&mut self) -> &mut [E] {
        self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Buffer;

    fn capacity_of<S: ?Sized + Buffer<u8>>(buf: &S) -> usize {
        buf.cells().len()
    }

    #[test]
    fn test_owned_and_unsized_report_same_capacity() {
        let mut owned = [0u8; 5];
        assert_eq!(capacity_of(&owned), 5);
        let view: &mut [u8] = &mut owned;
        view.cells_mut()[4] = 9;
        assert_eq!(capacity_of(view), 5);
        assert_eq!(owned[4], 9);
    }
}
