use crate::RigidTransformError;

/// Check that a set of points has the expected shape, reporting a size mismatch otherwise.
pub(crate) fn ensure_shape(
    points: faer::MatRef<'_, f64>,
    nrows: usize,
    ncols: usize,
) -> Result<(), RigidTransformError> {
    if points.nrows() != nrows || points.ncols() != ncols {
        return Err(RigidTransformError::SizeMismatch {
            src_rows: points.nrows(),
            src_cols: points.ncols(),
            dst_rows: nrows,
            dst_cols: ncols,
        });
    }
    Ok(())
}

/// Build an (N, D) matrix from a slice of points, one point per row.
///
/// Example:
///
/// ```
/// use kornia_rigid::points::to_mat;
///
/// let mat = to_mat(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
/// assert_eq!(mat.nrows(), 3);
/// assert_eq!(mat.ncols(), 2);
/// assert_eq!(mat.read(2, 1), 6.0);
/// ```
pub fn to_mat<const D: usize>(points: &[[f64; D]]) -> faer::Mat<f64> {
    faer::Mat::<f64>::from_fn(points.len(), D, |i, j| points[i][j])
}

/// Copy the rows of an (N, D) matrix back into a vector of points.
///
/// Fails with a size mismatch when the matrix does not have D columns.
pub fn to_points<const D: usize>(
    mat: faer::MatRef<'_, f64>,
) -> Result<Vec<[f64; D]>, RigidTransformError> {
    ensure_shape(mat, mat.nrows(), D)?;
    Ok((0..mat.nrows())
        .map(|i| std::array::from_fn(|j| mat.read(i, j)))
        .collect())
}

/// Root mean square of the coordinate-wise differences between two point sets.
///
/// Fails with a size mismatch when a and b differ in shape.
pub fn root_mean_square_error(
    a: faer::MatRef<'_, f64>,
    b: faer::MatRef<'_, f64>,
) -> Result<f64, RigidTransformError> {
    ensure_shape(b, a.nrows(), a.ncols())?;

    let count = a.nrows() * a.ncols();
    if count == 0 {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            let d = a.read(i, j) - b.read(i, j);
            sum += d * d;
        }
    }
    Ok((sum / count as f64).sqrt())
}
