use serde::{Deserialize, Serialize};

use crate::RigidTransformError;

/// Minimum rank the cross-covariance matrix must reach for a solution to be accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankPolicy {
    /// Accept rank >= D - 1. Coincident 2D points and collinear 3D points are rejected.
    #[default]
    Relaxed,
    /// Accept only full rank D.
    Strict,
}

impl RankPolicy {
    /// The minimum accepted rank for points of dimension `dim`.
    pub fn min_rank(&self, dim: usize) -> usize {
        match self {
            RankPolicy::Relaxed => dim.saturating_sub(1).max(1),
            RankPolicy::Strict => dim,
        }
    }
}

/// Centered point sets and their cross-covariance matrix.
#[derive(Debug, Clone)]
pub struct CenteredCovariance {
    /// Mean of the source points, length D.
    pub centroid_src: faer::Col<f64>,
    /// Mean of the destination points, length D.
    pub centroid_dst: faer::Col<f64>,
    /// Source points minus their centroid, shape (N, D).
    pub src_centered: faer::Mat<f64>,
    /// Destination points minus their centroid, shape (N, D).
    pub dst_centered: faer::Mat<f64>,
    /// The cross-covariance matrix H = src_centered^T * dst_centered, shape (D, D).
    pub covariance: faer::Mat<f64>,
    /// The singular value decomposition of H.
    pub decomposition: CovarianceSvd,
    /// Numerical rank of H.
    pub rank: usize,
}

/// The singular value decomposition H = U * S * V^T of a square matrix.
#[derive(Debug, Clone)]
pub struct CovarianceSvd {
    /// Left singular vectors as columns, shape (D, D).
    pub u: faer::Mat<f64>,
    /// The diagonal of S, length D.
    pub singular_values: Vec<f64>,
    /// Right singular vectors as columns, shape (D, D).
    pub v: faer::Mat<f64>,
}

/// Decompose a matrix with a full singular value decomposition.
pub fn decompose(mat: faer::MatRef<'_, f64>) -> CovarianceSvd {
    let svd = mat.svd();
    let s = svd.s_diagonal();
    CovarianceSvd {
        u: svd.u().to_owned(),
        singular_values: (0..s.nrows()).map(|i| s.read(i)).collect(),
        v: svd.v().to_owned(),
    }
}

/// Compute the per-column mean of a set of points.
///
/// PRECONDITION: points has at least one row.
pub fn column_mean(points: faer::MatRef<'_, f64>) -> faer::Col<f64> {
    let n = points.nrows() as f64;
    faer::Col::<f64>::from_fn(points.ncols(), |j| {
        (0..points.nrows()).map(|i| points.read(i, j)).sum::<f64>() / n
    })
}

/// Subtract a centroid from every row of a set of points.
///
/// The input is left untouched, a new matrix is returned.
pub fn center_points(points: faer::MatRef<'_, f64>, centroid: &faer::Col<f64>) -> faer::Mat<f64> {
    faer::Mat::<f64>::from_fn(points.nrows(), points.ncols(), |i, j| {
        points.read(i, j) - centroid.read(j)
    })
}

/// Compute the cross-covariance matrix H = src^T * dst of two centered point sets.
pub fn cross_covariance(
    src_centered: faer::MatRef<'_, f64>,
    dst_centered: faer::MatRef<'_, f64>,
) -> faer::Mat<f64> {
    src_centered.transpose() * dst_centered
}

/// Count the singular values of a matrix above a tolerance.
///
/// # Arguments
///
/// * `mat` - The matrix.
/// * `tolerance` - Absolute threshold. Defaults to `max(s) * max(rows, cols) * f64::EPSILON`.
pub fn numerical_rank(mat: faer::MatRef<'_, f64>, tolerance: Option<f64>) -> usize {
    let decomposition = decompose(mat);
    rank_from_singular_values(
        &decomposition.singular_values,
        mat.nrows().max(mat.ncols()),
        tolerance,
    )
}

/// Count the singular values above a tolerance.
///
/// `size` is the largest dimension of the decomposed matrix and only scales the default
/// tolerance. NaN singular values never count.
pub fn rank_from_singular_values(
    singular_values: &[f64],
    size: usize,
    tolerance: Option<f64>,
) -> usize {
    let tolerance = tolerance.unwrap_or_else(|| {
        let s_max = singular_values.iter().copied().fold(0.0, f64::max);
        s_max * size as f64 * f64::EPSILON
    });
    singular_values.iter().filter(|&&s| s > tolerance).count()
}

/// Center both point sets, form their cross-covariance matrix and check its rank.
///
/// # Arguments
///
/// * `src` - The source points with shape (N, D).
/// * `dst` - The destination points with shape (N, D).
/// * `policy` - The minimum rank to accept.
/// * `tolerance` - Optional absolute tolerance for the rank computation.
///
/// PRECONDITION: the inputs passed [`crate::validate::validate_points`].
pub fn compute_covariance(
    src: faer::MatRef<'_, f64>,
    dst: faer::MatRef<'_, f64>,
    policy: RankPolicy,
    tolerance: Option<f64>,
) -> Result<CenteredCovariance, RigidTransformError> {
    let dim = src.ncols();

    let centroid_src = column_mean(src);
    let centroid_dst = column_mean(dst);

    let src_centered = center_points(src, &centroid_src);
    let dst_centered = center_points(dst, &centroid_dst);

    let covariance = cross_covariance(src_centered.as_ref(), dst_centered.as_ref());

    // non-finite coordinates leave no usable direction
    let finite = (0..dim).all(|i| (0..dim).all(|j| covariance.read(i, j).is_finite()));
    if !finite {
        return Err(RigidTransformError::RankDeficiency {
            dim,
            rank: 0,
            expected: policy.min_rank(dim),
        });
    }

    let decomposition = decompose(covariance.as_ref());
    let rank = rank_from_singular_values(&decomposition.singular_values, dim, tolerance);
    log::debug!(
        "cross-covariance singular values: {:?}",
        decomposition.singular_values
    );
    log::debug!("cross-covariance rank: {} (dim: {})", rank, dim);

    let expected = policy.min_rank(dim);
    if rank < expected {
        return Err(RigidTransformError::RankDeficiency {
            dim,
            rank,
            expected,
        });
    }

    Ok(CenteredCovariance {
        centroid_src,
        centroid_dst,
        src_centered,
        dst_centered,
        covariance,
        decomposition,
        rank,
    })
}
