//! Arena lifecycle and accounting tests.

use proptest::prelude::*;

use grkit_memory::units::kilobytes;
use grkit_memory::{Arena, ErrorKind, MemError};

#[test]
fn frame_scoped_usage() {
    let mut arena = Arena::create(kilobytes(1));
    for frame in 0..3u8 {
        let header = arena.alloc(16).unwrap();
        header[0] = frame;
        let name = arena.alloc_str("frame").unwrap();
        assert_eq!(name, "frame");
        assert_eq!(arena.used(), 21);
        arena.rewind();
        assert_eq!(arena.avail(), 1024);
    }
    arena.reset();
    assert_eq!(arena.used(), 0);
    assert_eq!(arena.avail(), 0);
}

#[test]
fn exhaustion_is_a_precondition_violation() {
    let arena = Arena::create(1024);
    for _ in 0..10 {
        arena.alloc(4).unwrap();
    }
    let err = arena.alloc(1000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    assert_eq!(arena.used(), 40);
    assert_eq!(arena.avail(), 984);
    arena.alloc(984).unwrap();
    assert_eq!(arena.avail(), 0);
}

#[test]
fn sentinel_arena_after_failed_creation() {
    let arena = Arena::create(usize::MAX);
    assert_eq!(arena.capacity(), 0);
    assert_eq!(
        arena.alloc(1).unwrap_err(),
        MemError::ArenaExhausted {
            requested: 1,
            available: 0
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// used + avail == capacity after any request sequence; rejected
    /// requests leave `used` unchanged.
    #[test]
    fn accounting_holds(capacity in 0usize..4096, requests in prop::collection::vec(0usize..512, 0..64)) {
        let arena = Arena::create(capacity);
        let mut expected_used = 0usize;
        for &bytes in &requests {
            let before = arena.used();
            match arena.alloc(bytes) {
                Ok(slice) => {
                    prop_assert_eq!(slice.len(), bytes);
                    expected_used += bytes;
                }
                Err(err) => {
                    prop_assert!(bytes > capacity - before);
                    prop_assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
                    prop_assert_eq!(arena.used(), before);
                }
            }
            prop_assert_eq!(arena.used(), expected_used);
            prop_assert_eq!(arena.used() + arena.avail(), capacity);
        }
    }
}
