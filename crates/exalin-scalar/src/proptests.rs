//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Rational, ZeroTest};

    // Strategy for generating small numerators
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero denominators
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    proptest! {
        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn multiplicative_inverse(a in rational()) {
            if !a.is_zero() {
                prop_assert!((a.clone() * a.recip()).is_one());
            }
        }

        #[test]
        fn division_round_trips(a in rational(), b in rational()) {
            if !b.check_zero() {
                prop_assert_eq!((a.clone() / b.clone()) * b, a);
            }
        }

        #[test]
        fn signum_matches_zero_test(a in rational()) {
            prop_assert_eq!(a.signum() == 0, a.check_zero());
        }
    }
}
