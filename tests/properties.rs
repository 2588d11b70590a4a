//! Property tests: both comparators compute plain equality.

use std::time::Duration;

use proptest::prelude::*;
use timing_attack::{Comparator, ConstantTimeComparator, LeakyComparator};

fn instant_leaky() -> LeakyComparator {
    LeakyComparator::new(Duration::ZERO, Duration::ZERO)
}

proptest! {
    #[test]
    fn equal_length_inputs_compare_as_equality(
        (input, secret) in (0usize..32).prop_flat_map(|len| {
            (
                proptest::collection::vec(any::<u8>(), len),
                proptest::collection::vec(any::<u8>(), len),
            )
        })
    ) {
        let expected = input == secret;
        prop_assert_eq!(instant_leaky().compare(&input, &secret), expected);
        prop_assert_eq!(ConstantTimeComparator::new().compare(&input, &secret), expected);
    }

    #[test]
    fn identical_inputs_always_match(secret in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(instant_leaky().compare(&secret, &secret));
        prop_assert!(ConstantTimeComparator::new().compare(&secret, &secret));
    }

    #[test]
    fn single_byte_change_never_matches(
        secret in proptest::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut input = secret.clone();
        let i = index.index(input.len());
        input[i] ^= flip;
        prop_assert!(!instant_leaky().compare(&input, &secret));
        prop_assert!(!ConstantTimeComparator::new().compare(&input, &secret));
    }

    #[test]
    fn different_lengths_never_match(
        secret in proptest::collection::vec(any::<u8>(), 0..32),
        extra in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut longer = secret.clone();
        longer.extend_from_slice(&extra);
        prop_assert!(!instant_leaky().compare(&longer, &secret));
        prop_assert!(!instant_leaky().compare(&secret, &longer));
        prop_assert!(!ConstantTimeComparator::new().compare(&longer, &secret));
        prop_assert!(!ConstantTimeComparator::new().compare(&secret, &longer));
    }
}
