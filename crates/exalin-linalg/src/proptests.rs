//! Property-based tests for the elimination engine over exact rationals.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use exalin_scalar::Rational;

    use crate::augmented::AugmentedMatrix;
    use crate::matrix::Matrix;
    use crate::vector::Vector;

    fn rational() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..8i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn matrix3() -> impl Strategy<Value = Matrix<Rational, 3, 3>> {
        proptest::collection::vec(rational(), 9).prop_map(|v| {
            Matrix::from_fn(|x, y| v[x + y * 3].clone())
        })
    }

    fn rhs3() -> impl Strategy<Value = [Rational; 3]> {
        (rational(), rational(), rational()).prop_map(|(a, b, c)| [a, b, c])
    }

    proptest! {
        #[test]
        fn solutions_satisfy_the_system(m in matrix3(), b in rhs3()) {
            let aug = AugmentedMatrix::new(m.clone(), b.clone());
            if !m.singular() {
                let x = Vector::new(aug.solve().unwrap());
                prop_assert_eq!(&m * &x, Vector::new(b));
            } else {
                prop_assert!(aug.solve().is_err());
            }
        }

        #[test]
        fn inversion_strategies_agree(m in matrix3()) {
            let adjugate = m.inverse_via_adjugate();
            let elimination = m.inverse_via_elimination();
            prop_assert_eq!(adjugate.is_err(), elimination.is_err());
            if let (Ok(a), Ok(b)) = (adjugate, elimination) {
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(&m * &a, Matrix::identity());
            }
        }

        #[test]
        fn determinant_matches_echelon_singularity(m in matrix3()) {
            let aug = AugmentedMatrix::new(m.clone(), [
                Rational::from_integer(0),
                Rational::from_integer(0),
                Rational::from_integer(0),
            ]);
            prop_assert_eq!(m.singular(), aug.singular().unwrap());
        }

        #[test]
        fn reduced_form_is_idempotent(m in matrix3(), b in rhs3()) {
            let aug = AugmentedMatrix::new(m, b);
            if let Ok(once) = aug.reduced_row_echelon() {
                prop_assert_eq!(once.reduced_row_echelon().unwrap(), once);
            }
        }

        #[test]
        fn ordering_is_idempotent(m in matrix3(), b in rhs3()) {
            let ordered = AugmentedMatrix::new(m, b).ordered();
            prop_assert_eq!(ordered.ordered(), ordered);
        }

        #[test]
        fn transpose_preserves_determinant(m in matrix3()) {
            prop_assert_eq!(m.determinant(), m.transpose().determinant());
        }
    }
}
