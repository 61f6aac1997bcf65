//! Tests for covariance validation and cached inverse

#[cfg(test)]
mod tests {
    use gaussmask::NoiseError;
    use gaussmask::math::covariance::CovarianceMatrix;

    // Tests the default correlated matrix is accepted
    // Verified by flipping the determinant sign check
    #[test]
    fn test_accepts_positive_definite_matrix() {
        let covariance = CovarianceMatrix::new([[100.0, 30.0], [30.0, 100.0]]).unwrap();

        assert!((covariance.determinant() - 9100.0).abs() < 1e-9);
        assert_eq!(covariance.entries(), [[100.0, 30.0], [30.0, 100.0]]);
    }

    // Tests inverse multiplied by the matrix gives the identity
    // Verified by swapping inverse diagonal entries
    #[test]
    fn test_inverse_is_precision_matrix() {
        let covariance = CovarianceMatrix::new([[4.0, 1.5], [1.5, 9.0]]).unwrap();
        let [[a, b], [c, d]] = covariance.entries();
        let [[p, q], [r, s]] = covariance.inverse();

        assert!((a * p + b * r - 1.0).abs() < 1e-12);
        assert!((a * q + b * s).abs() < 1e-12);
        assert!((c * p + d * r).abs() < 1e-12);
        assert!((c * q + d * s - 1.0).abs() < 1e-12);
    }

    // Tests indefinite matrices are rejected
    // Verified by removing the determinant check
    #[test]
    fn test_rejects_indefinite_matrix() {
        let result = CovarianceMatrix::new([[1.0, 2.0], [2.0, 1.0]]);

        assert!(matches!(result, Err(NoiseError::InvalidCovariance { .. })));
    }

    // Tests singular and negative diagonal matrices are rejected
    // Verified by allowing zero determinant
    #[test]
    fn test_rejects_singular_and_negative_diagonal() {
        assert!(CovarianceMatrix::new([[1.0, 1.0], [1.0, 1.0]]).is_err());
        assert!(CovarianceMatrix::new([[0.0, 0.0], [0.0, 1.0]]).is_err());
        assert!(CovarianceMatrix::new([[-2.0, 0.0], [0.0, -3.0]]).is_err());
    }

    // Tests asymmetric matrices are rejected
    // Verified by removing the symmetry check
    #[test]
    fn test_rejects_asymmetric_matrix() {
        let result = CovarianceMatrix::new([[100.0, 30.0], [20.0, 100.0]]);

        let Err(NoiseError::InvalidCovariance { reason }) = result else {
            unreachable!("Expected InvalidCovariance error type");
        };
        assert!(reason.contains("symmetric"));
    }

    // Tests non-finite entries are rejected
    // Verified by skipping the finiteness check
    #[test]
    fn test_rejects_non_finite_entries() {
        assert!(CovarianceMatrix::new([[f64::NAN, 0.0], [0.0, 1.0]]).is_err());
        assert!(CovarianceMatrix::new([[1.0, 0.0], [0.0, f64::INFINITY]]).is_err());
    }

    // Tests flat construction requires exactly four entries
    // Verified by truncating longer slices
    #[test]
    fn test_from_row_major() {
        let covariance = CovarianceMatrix::from_row_major(&[2.0, 0.5, 0.5, 3.0]).unwrap();
        assert_eq!(covariance.entries(), [[2.0, 0.5], [0.5, 3.0]]);

        assert!(CovarianceMatrix::from_row_major(&[2.0, 0.5, 0.5]).is_err());
        assert!(CovarianceMatrix::from_row_major(&[2.0, 0.5, 0.5, 3.0, 1.0]).is_err());
    }

    // Tests the quadratic form for an identity covariance is the squared distance
    // Verified by dropping the cross terms
    #[test]
    fn test_mahalanobis_squared() {
        let identity = CovarianceMatrix::new([[1.0, 0.0], [0.0, 1.0]]).unwrap();
        assert!((identity.mahalanobis_squared(3.0, 4.0) - 25.0).abs() < 1e-12);

        let correlated = CovarianceMatrix::new([[2.0, 1.0], [1.0, 2.0]]).unwrap();
        // Precision is [[2, -1], [-1, 2]] / 3
        let expected = (2.0 * 1.0 - 2.0 * 1.0 * 2.0 + 2.0 * 4.0) / 3.0;
        assert!((correlated.mahalanobis_squared(1.0, 2.0) - expected).abs() < 1e-12);
    }
}
