use brandclick_core::params::{round_one_decimal, RoundingPolicy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rounding_moves_at_most_half_a_step(x in -1e9f64..1e9) {
        let r = round_one_decimal(x);
        prop_assert!((r - x).abs() <= 0.05 + 1e-6);
    }

    #[test]
    fn rounding_is_idempotent(x in -1e9f64..1e9) {
        let r = round_one_decimal(x);
        prop_assert_eq!(round_one_decimal(r), r);
    }

    #[test]
    fn rounding_is_odd_symmetric(x in 0.0f64..1e9) {
        prop_assert_eq!(round_one_decimal(-x), -round_one_decimal(x));
    }

    #[test]
    fn unrounded_policy_is_identity(x in proptest::num::f64::ANY) {
        let y = RoundingPolicy::Unrounded.apply(x);
        prop_assert!(y == x || (y.is_nan() && x.is_nan()));
    }
}
