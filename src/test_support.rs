// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element types for lifetime accounting in unit tests.

// Core imports
use core::cell::Cell;

/// Counts how many times it is dropped.
#[derive(Debug)]
pub(crate) struct Probe<'a> {
    pub(crate) value: i32,
    drops: &'a Cell<usize>,
}

impl<'a> Probe<'a> {
    pub(crate) fn new(value: i32, drops: &'a Cell<usize>) -> Self {
        Probe { value, drops }
    }
}

impl Clone for Probe<'_> {
    fn clone(&self) -> Self {
        Probe::new(self.value, self.drops)
    }
}

impl PartialEq for Probe<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Values of a probe slice, for comparisons.
pub(crate) fn values<const N: usize>(probes: &[Probe<'_>]) -> [i32; N] {
    let mut out = [0; N];
    for (slot, p) in out.iter_mut().zip(probes) {
        *slot = p.value;
    }
    out
}
