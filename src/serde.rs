// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedVec`](crate::BoundedVec) and
//! [`FixedArray`](crate::FixedArray).
//!
//! - **Serialize**: both containers (and their views) as a sequence of their
//!   live elements.
//! - **Deserialize** into `BoundedVec<T, N>`: any sequence of at most `N`
//!   elements. Longer input is an error, not a clamp.
//! - **Deserialize** into `FixedArray<T, N>`: any sequence of at most `N`
//!   elements; missing trailing elements are `T::default()`, matching
//!   [`FixedArray::from_other`](crate::FixedArray::from_other).

// Crate imports
use crate::{
    array::{ArrayBase, FixedArray},
    memory::StorageCell,
    storage::Buffer,
    vector::{BoundedVec, VecBase},
};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

fn serialize_live<T: Serialize, Ser: Serializer>(live: &[T], s: Ser) -> Result<Ser::Ok, Ser::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(live.len()))?;
    for item in live {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize, S: ?Sized + Buffer<StorageCell<T>>> Serialize for VecBase<T, S> {
    fn serialize<Ser: Serializer>(&self, s: Ser) -> Result<Ser::Ok, Ser::Error> {
        serialize_live(self.as_slice(), s)
    }
}

impl<T: Serialize, S: ?Sized + Buffer<T>> Serialize for ArrayBase<T, S> {
    fn serialize<Ser: Serializer>(&self, s: Ser) -> Result<Ser::Ok, Ser::Error> {
        serialize_live(self.as_slice(), s)
    }
}

fn too_many<E: de::Error>(capacity: usize) -> E {
    de::Error::custom(format_args!("too many elements (capacity {capacity})"))
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for VecVisitor<T, N> {
    type Value = BoundedVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem).map_err(|_| too_many::<A::Error>(N))?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for BoundedVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = FixedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedArray::<T, N>::new();
        let mut filled = 0;
        while let Some(elem) = a.next_element::<T>()? {
            let slot = out.get_mut(filled).ok_or_else(|| too_many::<A::Error>(N))?;
            *slot = elem;
            filled += 1;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedArray<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T, N>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedVec, FixedArray};
    use alloc::string::ToString;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: BoundedVec<i32, 5> = BoundedVec::from_range([1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: BoundedVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, [1, 2, 3]);
    }

    #[test]
    fn test_view_serializes_like_owner() {
        let v: BoundedVec<i32, 5> = BoundedVec::from_range([4, 5]);
        assert_eq!(serde_json::to_string(v.as_view()).unwrap(), "[4,5]");
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<BoundedVec<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_serde_roundtrip_empty_and_zst() {
        let v: BoundedVec<i32, 4> = BoundedVec::new();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[]");

        let z: BoundedVec<(), 3> = BoundedVec::from_range([(), ()]);
        let s = serde_json::to_string(&z).unwrap();
        assert_eq!(s, "[null,null]");
        let back: BoundedVec<(), 3> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<BoundedVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }

    #[test]
    fn test_non_default_type_deserializes_into_vec() {
        use serde::{Deserialize, Serialize};

        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        struct NoDefault(i32);

        let v: BoundedVec<NoDefault, 4> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(v, [NoDefault(1), NoDefault(2), NoDefault(3)]);
    }

    #[test]
    fn test_fixed_array_pads_short_input_and_rejects_long() {
        let a = FixedArray::from([1u8, 2, 3]);
        assert_eq!(serde_json::to_string(&a).unwrap(), "[1,2,3]");

        let short: FixedArray<u8, 4> = serde_json::from_str("[9,8]").unwrap();
        assert_eq!(short, [9, 8, 0, 0]);

        let err = serde_json::from_str::<FixedArray<u8, 2>>("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("capacity 2"));
    }
}
