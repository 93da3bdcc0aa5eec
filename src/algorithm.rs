// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity-agnostic sequence algorithms.
//!
//! - Input ranges are anything `IntoIterator`; output ranges are live slices.
//!   These functions *assign*; constructing into raw storage is the job of
//!   [`memory`](crate::memory).
//! - The permutation algorithms ([`reverse`], [`rotate`], [`swap_ranges`],
//!   [`iter_swap`]) take a slice plus [`Cursor`]s, so they run unchanged over
//!   forward and [`ReverseCursor`](crate::cursor::ReverseCursor) triples.
//!   Rotating a reversed triple left is a right rotation of the underlying
//!   slice; the vector's `insert` relies on that.
//!
//! Nothing here allocates or owns data.

// Crate imports
use crate::cursor::Cursor;

// Core imports
use core::mem;

/// Exchanges two values.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

/// Exchanges the elements the two cursors point at.
#[inline]
pub fn iter_swap<T, C1: Cursor, C2: Cursor>(data: &mut [T], a: C1, b: C2) {
    data.swap(a.slot(), b.slot());
}

/// Exchanges `[first1, last1)` with the range starting at `first2`.
///
/// Returns the cursor past the last element swapped in the second range.
pub fn swap_ranges<T, C1: Cursor, C2: Cursor>(
    data: &mut [T],
    mut first1: C1,
    last1: C1,
    mut first2: C2,
) -> C2 {
    while first1 != last1 {
        iter_swap(data, first1, first2);
        first1 = first1.forward();
        first2 = first2.forward();
    }
    first2
}

/// Assigns a clone of `value` to every element of `dst`.
pub fn fill<T: Clone>(dst: &mut [T], value: &T) {
    for slot in dst {
        slot.clone_from(value);
    }
}

/// Assigns a clone of `value` to the first `count` elements of `dst`.
///
/// Returns `count`, the position past the last element written.
///
/// # Panics
///
/// Panics if `count > dst.len()`.
#[inline]
pub fn fill_n<T: Clone>(dst: &mut [T], count: usize, value: &T) -> usize {
    fill(&mut dst[..count], value);
    count
}

/// Assigns elements of `src` to `dst` in order.
///
/// Stops when either side runs out and never pulls an item from `src` once `dst`
/// is exhausted. Returns the position past the last element written.
pub fn copy<T, I>(src: I, dst: &mut [T]) -> usize
where
    I: IntoIterator<Item = T>,
{
    let mut written = 0;
    for (slot, item) in dst.iter_mut().zip(src) {
        *slot = item;
        written += 1;
    }
    written
}

/// Assigns at most `count` elements of `src` to the front of `dst`.
///
/// # Panics
///
/// Panics if `count > dst.len()`.
#[inline]
pub fn copy_n<T, I>(src: I, count: usize, dst: &mut [T]) -> usize
where
    I: IntoIterator<Item = T>,
{
    copy(src, &mut dst[..count])
}

/// Returns the smaller value; `a` on ties.
#[inline]
pub fn min<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the smaller value under `less`; `a` on ties.
#[inline]
pub fn min_by<'a, T, F>(a: &'a T, b: &'a T, less: F) -> &'a T
where
    F: FnOnce(&T, &T) -> bool,
{
    if less(b, a) {
        b
    } else {
        a
    }
}

/// Returns the greater value; `a` on ties.
#[inline]
pub fn max<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if a < b {
        b
    } else {
        a
    }
}

/// Returns the greater value under `less`; `a` on ties.
#[inline]
pub fn max_by<'a, T, F>(a: &'a T, b: &'a T, less: F) -> &'a T
where
    F: FnOnce(&T, &T) -> bool,
{
    if less(a, b) {
        b
    } else {
        a
    }
}

/// Returns `true` if every element of `a` equals its counterpart in `b`.
///
/// Short-circuits on the first mismatch. `b` running out before `a` counts as a
/// mismatch; extra elements in `b` are not inspected.
#[inline]
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    equal_by(a, b, |x, y| x == y)
}

/// [`equal`] with a caller-supplied equivalence.
pub fn equal_by<A, B, F>(a: A, b: B, mut eq: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut b = b.into_iter();
    for x in a {
        match b.next() {
            Some(y) if eq(&x, &y) => {}
            _ => return false,
        }
    }
    true
}

/// Returns `true` if `a` is lexicographically less than `b`.
///
/// The first mismatching pair decides. If one range is a prefix of the other,
/// the shorter one is less; equal ranges are not less in either direction.
#[inline]
pub fn lexicographical_compare<A, B, T>(a: A, b: B) -> bool
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: PartialOrd,
{
    lexicographical_compare_by(a, b, |x, y| x < y)
}

/// [`lexicographical_compare`] with `less` in place of `<`.
pub fn lexicographical_compare_by<A, B, T, F>(a: A, b: B, mut less: F) -> bool
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if less(&x, &y) {
                    return true;
                }
                if less(&y, &x) {
                    return false;
                }
            }
            (None, Some(_)) => return true,
            _ => return false,
        }
    }
}

/// Reverses `[first, last)` in place.
///
/// Swaps symmetric pairs converging from both ends and stops when the cursors
/// meet or cross, so odd and even lengths both work.
pub fn reverse<T, C: Cursor>(data: &mut [T], mut first: C, mut last: C) {
    while first != last {
        last = last.backward();
        if first == last {
            break;
        }
        iter_swap(data, first, last);
        first = first.forward();
    }
}

/// Left-rotates `[first, last)` so that `middle` becomes the first element.
///
/// Uses three reversals and no auxiliary storage. Returns the new position of
/// the element originally at `first`.
pub fn rotate<T, C: Cursor>(data: &mut [T], first: C, middle: C, last: C) -> C {
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    reverse(data, first, middle);
    reverse(data, middle, last);
    reverse(data, first, last);

    first.advance(middle.distance(last))
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use crate::cursor::{Position, ReverseCursor};

    fn at(i: usize) -> Position {
        Position::new(i)
    }

    #[test]
    fn test_copy_returns_past_the_end() {
        let mut dst = [0; 4];
        assert_eq!(copy([1, 2, 3], &mut dst), 3);
        assert_eq!(dst, [1, 2, 3, 0]);
        assert_eq!(copy_n([9, 9, 9], 2, &mut dst), 2);
        assert_eq!(dst, [9, 9, 3, 0]);
    }

    #[test]
    fn test_copy_does_not_pull_past_destination() {
        let mut src = [1, 2, 3].into_iter();
        let mut dst = [0; 2];
        assert_eq!(copy(&mut src, &mut dst), 2);
        assert_eq!(src.next(), Some(3));
    }

    #[test]
    fn test_fill_and_fill_n() {
        let mut dst = [0u8; 5];
        fill(&mut dst, &7);
        assert_eq!(dst, [7; 5]);
        assert_eq!(fill_n(&mut dst, 2, &1), 2);
        assert_eq!(dst, [1, 1, 7, 7, 7]);
    }

    #[test]
    fn test_min_max_ties_return_first() {
        let (a, b) = ((1, 'a'), (1, 'b'));
        let by_key = |x: &(i32, char), y: &(i32, char)| x.0 < y.0;
        assert_eq!(min_by(&a, &b, by_key), &a);
        assert_eq!(max_by(&a, &b, by_key), &a);
        assert_eq!(*min(&3, &2), 2);
        assert_eq!(*max(&3, &2), 3);
    }

    #[test]
    fn test_equal_and_predicate() {
        assert!(equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(!equal(&[1, 2, 3], &[1, 2, 4]));
        assert!(!equal(&[1, 2, 3], &[1, 2]));
        assert!(equal(&[1, 2], &[1, 2, 3]));
        assert!(equal_by([1, 2, 3], [-1, -2, -3], |a, b| *a == -*b));
    }

    #[test]
    fn test_lexicographical_compare() {
        let a = [0, 1, 2];
        let b = [0, 1, 2, 3];

        assert!(lexicographical_compare(&a, &b));
        assert!(!lexicographical_compare(&b, &a));
        assert!(!lexicographical_compare(&a, &a));

        let empty: [i32; 0] = [];
        assert!(lexicographical_compare(&empty, &a));
        assert!(!lexicographical_compare(&a, &empty));
        assert!(!lexicographical_compare(&empty, &empty));

        assert!(lexicographical_compare(&[0, 0, 9], &[0, 1]));
    }

    #[test]
    fn test_lexicographical_compare_by_reversed_order() {
        let greater = |x: &&i32, y: &&i32| x > y;
        assert!(lexicographical_compare_by(&[3, 2], &[3, 1], greater));
        assert!(!lexicographical_compare_by(&[3, 1], &[3, 2], greater));
    }

    #[test]
    fn test_reverse_even_and_odd() {
        let mut even = [1, 2, 3, 4];
        reverse(&mut even, at(0), at(4));
        assert_eq!(even, [4, 3, 2, 1]);

        let mut odd = [1, 2, 3, 4, 5];
        reverse(&mut odd, at(1), at(5));
        assert_eq!(odd, [1, 5, 4, 3, 2]);

        let mut one = [1];
        reverse(&mut one, at(0), at(1));
        assert_eq!(one, [1]);
    }

    #[test]
    fn test_rotate_and_back() {
        let mut data = [0, 1, 2, 3];
        let moved = rotate(&mut data, at(0), at(1), at(4));
        assert_eq!(data, [1, 2, 3, 0]);
        assert_eq!(moved, at(3));

        rotate(&mut data, at(0), at(3), at(4));
        assert_eq!(data, [0, 1, 2, 3]);
    }

    #[test]
    fn test_rotate_degenerate_middles() {
        let mut data = [1, 2, 3];
        assert_eq!(rotate(&mut data, at(0), at(0), at(3)), at(3));
        assert_eq!(rotate(&mut data, at(0), at(3), at(3)), at(0));
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_rotate_over_reverse_cursors_is_right_rotation() {
        let mut data = [1, 2, 3, 4, 5];
        let rbegin = ReverseCursor::new(at(5));
        let last = ReverseCursor::new(at(1));
        rotate(&mut data, rbegin, rbegin.advance(2), last);
        // Tail `[4, 5]` moved down to index 1.
        assert_eq!(data, [1, 4, 5, 2, 3]);
    }

    #[test]
    fn test_swap_ranges_and_iter_swap() {
        let mut data = [1, 2, 3, 4, 5, 6];
        let end = swap_ranges(&mut data, at(0), at(3), at(3));
        assert_eq!(data, [4, 5, 6, 1, 2, 3]);
        assert_eq!(end, at(6));

        iter_swap(&mut data, at(0), ReverseCursor::new(at(6)));
        assert_eq!(data, [3, 5, 6, 1, 2, 4]);

        let (mut a, mut b) = (1, 2);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (2, 1));
    }
}
