//! Integration tests for exalin-linalg.

#[cfg(test)]
mod integration_tests {
    use exalin_scalar::Rational;

    use crate::augmented::AugmentedMatrix;
    use crate::matrix::Matrix;
    use crate::vector::Vector;

    fn q(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    #[test]
    fn solve_round_trips_through_the_original_system() {
        let matrix = Matrix::new([
            [q(4), q(1), q(0), q(2)],
            [q(1), q(5), q(1), q(0)],
            [q(0), q(1), q(6), q(1)],
            [q(2), q(0), q(1), q(7)],
        ]);
        let rhs = [q(3), q(-1), q(4), q(0)];

        let aug = AugmentedMatrix::new(matrix.clone(), rhs.clone());
        let solution = Vector::new(aug.solve().unwrap());

        assert_eq!(&matrix * &solution, Vector::new(rhs));
    }

    #[test]
    fn inversion_strategies_agree_and_invert() {
        let matrix = Matrix::new([
            [q(1), q(2), q(0)],
            [q(0), q(1), q(3)],
            [q(4), q(0), q(1)],
        ]);

        let adjugate = matrix.inverse_via_adjugate().unwrap();
        let elimination = matrix.inverse_via_elimination().unwrap();
        assert_eq!(adjugate, elimination);

        let id = Matrix::identity();
        assert_eq!(&matrix * &adjugate, id);
        assert_eq!(&adjugate * &matrix, id);
    }

    #[test]
    fn determinant_and_elimination_agree_on_singularity() {
        let singular = Matrix::new([
            [q(1), q(2), q(3)],
            [q(2), q(4), q(6)],
            [q(1), q(0), q(1)],
        ]);
        assert!(singular.singular());

        let aug = AugmentedMatrix::new(singular, [q(0), q(0), q(0)]);
        assert_eq!(aug.singular(), Ok(true));

        let regular = Matrix::new([
            [q(1), q(2), q(3)],
            [q(2), q(4), q(6) + q(1)],
            [q(1), q(0), q(1)],
        ]);
        assert!(!regular.singular());

        let aug = AugmentedMatrix::new(regular, [q(0), q(0), q(0)]);
        assert_eq!(aug.singular(), Ok(false));
    }

    #[test]
    fn solving_against_identity_matches_inverse() {
        let matrix = Matrix::new([[q(2), q(1)], [q(1), q(3)]]);

        let aug = AugmentedMatrix::new(matrix.clone(), Matrix::identity().rows());
        let from_engine = Matrix::from_rows(aug.solve().unwrap());

        assert_eq!(from_engine, matrix.inverse_via_adjugate().unwrap());
    }

    #[test]
    fn float_inverse_of_scaled_identity() {
        let matrix = Matrix::new([[2.0, 0.0], [0.0, 2.0]]);
        let inverse = matrix.inverse().unwrap();
        assert_eq!(inverse, Matrix::new([[0.5, 0.0], [0.0, 0.5]]));
    }
}
