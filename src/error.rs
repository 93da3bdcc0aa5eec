// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the fallible `try_*` companions.
//!
//! The primary container operations never fail on capacity; they clamp. These
//! errors are only produced by the explicitly fallible variants
//! (e.g. [`BoundedVec::try_push`](crate::BoundedVec::try_push)).

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of [`BoundedVec`](crate::BoundedVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// An operation required `len == N`, which was not met.
    ///
    /// Used by [`BoundedVec::try_into_array`](crate::BoundedVec::try_into_array)
    /// when the vector is not full.
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}
