//! Property tests for the gcd/lcm arithmetic, checked against
//! `num-integer` as the reference implementation.

use euclid_cli::math;
use num_integer::Integer;
use proptest::prelude::*;

// Operand ranges stay small: the subtraction-based gcd needs up to m + n
// rounds per call.
proptest! {
    #[test]
    fn gcd_matches_num_integer(m in 1u64..5_000, n in 1u64..5_000) {
        prop_assert_eq!(math::gcd(m, n), m.gcd(&n));
    }

    #[test]
    fn gcd_divides_both_operands(m in 1u64..5_000, n in 1u64..5_000) {
        let g = math::gcd(m, n);
        prop_assert!(g > 0);
        prop_assert_eq!(m % g, 0);
        prop_assert_eq!(n % g, 0);
    }

    #[test]
    fn no_common_divisor_is_larger(m in 1u64..500, n in 1u64..500) {
        let g = math::gcd(m, n);
        for d in (g + 1)..=m.min(n) {
            prop_assert!(m % d != 0 || n % d != 0);
        }
    }

    #[test]
    fn gcd_is_symmetric(m in 1u64..5_000, n in 1u64..5_000) {
        prop_assert_eq!(math::gcd(m, n), math::gcd(n, m));
    }

    #[test]
    fn gcd_of_equal_operands_is_the_operand(m in 1u64..100_000) {
        prop_assert_eq!(math::gcd(m, m), m);
    }

    #[test]
    fn lcm_is_the_smallest_common_multiple_shape(m in 1u64..5_000, n in 1u64..5_000) {
        let g = math::gcd(m, n);
        let lcm = math::lcm(m, n, g);

        // Exact divisor makes the quotient integral.
        prop_assert_eq!(lcm.fract(), 0.0);

        let lcm = lcm as u64;
        prop_assert_eq!(lcm % m, 0);
        prop_assert_eq!(lcm % n, 0);
        prop_assert_eq!(lcm, m / g * n);
    }
}
