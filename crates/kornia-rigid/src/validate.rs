use crate::RigidTransformError;

/// Check the preconditions of the estimator on a pair of point sets.
///
/// The checks run in a fixed order: shape equality, dimensionality and then point count.
///
/// # Arguments
///
/// * `src` - The source points with shape (N, D).
/// * `dst` - The destination points with shape (N, D).
///
/// # Returns
///
/// The dimension D of the points.
pub fn validate_points(
    src: faer::MatRef<'_, f64>,
    dst: faer::MatRef<'_, f64>,
) -> Result<usize, RigidTransformError> {
    if src.nrows() != dst.nrows() || src.ncols() != dst.ncols() {
        return Err(RigidTransformError::SizeMismatch {
            src_rows: src.nrows(),
            src_cols: src.ncols(),
            dst_rows: dst.nrows(),
            dst_cols: dst.ncols(),
        });
    }

    let dim = src.ncols();
    if !(dim == 2 || dim == 3) {
        return Err(RigidTransformError::InvalidDimension(dim));
    }

    if src.nrows() < dim {
        return Err(RigidTransformError::InsufficientPoints {
            expected: dim,
            actual: src.nrows(),
        });
    }

    Ok(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_points_ok() {
        let src = faer::Mat::<f64>::zeros(4, 3);
        let dst = faer::Mat::<f64>::zeros(4, 3);
        assert_eq!(validate_points(src.as_ref(), dst.as_ref()), Ok(3));

        let src = faer::Mat::<f64>::zeros(2, 2);
        assert_eq!(validate_points(src.as_ref(), src.as_ref()), Ok(2));
    }

    #[test]
    fn test_validate_points_size_mismatch() {
        let src = faer::Mat::<f64>::zeros(100, 2);
        let dst = faer::Mat::<f64>::zeros(100, 3);
        assert_eq!(
            validate_points(src.as_ref(), dst.as_ref()),
            Err(RigidTransformError::SizeMismatch {
                src_rows: 100,
                src_cols: 2,
                dst_rows: 100,
                dst_cols: 3,
            })
        );

        let dst = faer::Mat::<f64>::zeros(99, 2);
        assert!(matches!(
            validate_points(src.as_ref(), dst.as_ref()),
            Err(RigidTransformError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_points_invalid_dimension() {
        for dim in [0, 1, 4, 7] {
            let src = faer::Mat::<f64>::zeros(10, dim);
            assert_eq!(
                validate_points(src.as_ref(), src.as_ref()),
                Err(RigidTransformError::InvalidDimension(dim))
            );
        }
    }

    #[test]
    fn test_validate_points_insufficient() {
        let src = faer::Mat::<f64>::zeros(1, 2);
        assert_eq!(
            validate_points(src.as_ref(), src.as_ref()),
            Err(RigidTransformError::InsufficientPoints {
                expected: 2,
                actual: 1
            })
        );

        let src = faer::Mat::<f64>::zeros(2, 3);
        assert_eq!(
            validate_points(src.as_ref(), src.as_ref()),
            Err(RigidTransformError::InsufficientPoints {
                expected: 3,
                actual: 2
            })
        );

        let src = faer::Mat::<f64>::zeros(0, 3);
        assert!(matches!(
            validate_points(src.as_ref(), src.as_ref()),
            Err(RigidTransformError::InsufficientPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn test_validate_points_order() {
        // a shape mismatch is reported before the dimension is looked at
        let src = faer::Mat::<f64>::zeros(1, 5);
        let dst = faer::Mat::<f64>::zeros(1, 6);
        assert!(matches!(
            validate_points(src.as_ref(), dst.as_ref()),
            Err(RigidTransformError::SizeMismatch { .. })
        ));

        // a bad dimension is reported before the point count
        let src = faer::Mat::<f64>::zeros(1, 4);
        assert_eq!(
            validate_points(src.as_ref(), src.as_ref()),
            Err(RigidTransformError::InvalidDimension(4))
        );
    }
}
