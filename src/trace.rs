// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clamp events.
//!
//! Capacity overflow is never reported to the caller. With the `tracing`
//! feature enabled every clamp emits a `TRACE` event under the
//! `bounded_seq::clamp` target so the dropped work is still observable;
//! without it the macro expands to nothing.

/// Emits a `TRACE` event describing a silent clamp.
///
/// Accepts the same field/message syntax as [`tracing::trace!`].
macro_rules! clamp_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "bounded_seq::clamp", $($arg)*);
        }
    };
}

pub(crate) use clamp_event;

#[cfg(all(test, feature = "tracing"))]
mod tests {
    // Imports
    use crate::BoundedVec;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    // External imports - tracing
    use tracing::{span, subscriber, Event, Metadata, Subscriber};

    /// Counts events under the clamp target.
    struct ClampCounter(Arc<AtomicUsize>);

    impl Subscriber for ClampCounter {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.target() == "bounded_seq::clamp"
        }
        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }
        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn enter(&self, _: &span::Id) {}
        fn exit(&self, _: &span::Id) {}
    }

    fn clamps_during(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        subscriber::with_default(ClampCounter(Arc::clone(&count)), f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_push_on_full_emits_one_event() {
        let mut v: BoundedVec<u8, 1> = BoundedVec::from_range([1]);
        assert_eq!(clamps_during(|| v.push(2)), 1);
    }

    #[test]
    fn test_truncating_slice_append_emits_event() {
        let mut v: BoundedVec<u8, 2> = BoundedVec::new();
        let mut appended = 0;
        assert_eq!(clamps_during(|| appended = v.extend_from_slice_truncated(&[1, 2, 3, 4])), 1);
        assert_eq!(appended, 2);
        assert_eq!(clamps_during(|| assert_eq!(v.extend_from_slice_truncated(&[]), 0)), 0);
    }

    #[test]
    fn test_truncating_collect_of_unsized_iterator_emits_event() {
        let n = clamps_during(|| {
            let v: BoundedVec<u8, 2> = (0u8..10).filter(|x| x % 2 == 0).collect();
            assert_eq!(v, [0, 2]);
        });
        assert_eq!(n, 1);

        let mut v: BoundedVec<u8, 3> = BoundedVec::from_range([9]);
        assert_eq!(clamps_during(|| v.assign_range((0u8..10).filter(|x| x % 3 == 0))), 1);
        assert_eq!(v, [0, 3, 6]);
    }

    #[test]
    fn test_exact_fit_emits_nothing() {
        let n = clamps_during(|| {
            let v: BoundedVec<u8, 2> = (0u8..2).collect();
            assert!(v.is_full());
            let mut w: BoundedVec<u8, 4> = BoundedVec::from_range([1]);
            w.insert_range(0, [7, 8, 9]);
            w.assign_range([1, 2, 3, 4]);
            let _: BoundedVec<u8, 0> = BoundedVec::from_range([]);
        });
        assert_eq!(n, 0);
    }
}
