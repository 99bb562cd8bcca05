use crate::{points, RigidTransformError};

/// A similarity transform `x -> scale * R * x + t` from the source to the destination frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidTransform {
    /// Rotation matrix with shape (D, D) and determinant +1.
    pub rotation: faer::Mat<f64>,
    /// Translation vector of length D.
    pub translation: faer::Col<f64>,
    /// Uniform scale. Equal to 1.0 when scale estimation is disabled.
    pub scale: f64,
}

impl RigidTransform {
    /// Create the identity transform in `dim` dimensions.
    pub fn identity(dim: usize) -> Self {
        Self {
            rotation: faer::Mat::<f64>::identity(dim, dim),
            translation: faer::Col::<f64>::zeros(dim),
            scale: 1.0,
        }
    }

    /// The dimension of the points the transform acts on.
    pub fn dim(&self) -> usize {
        self.rotation.nrows()
    }

    /// Apply the transform to a set of points stored as rows.
    ///
    /// # Arguments
    ///
    /// * `points` - The points with shape (N, D).
    ///
    /// # Returns
    ///
    /// The transformed points `scale * P * R^T + t^T` with shape (N, D), or a size mismatch
    /// when the points do not have D columns.
    pub fn apply(
        &self,
        points: faer::MatRef<'_, f64>,
    ) -> Result<faer::Mat<f64>, RigidTransformError> {
        points::ensure_shape(points, points.nrows(), self.dim())?;
        let rotated = points * self.rotation.transpose();
        Ok(faer::Mat::<f64>::from_fn(
            rotated.nrows(),
            rotated.ncols(),
            |i, j| self.scale * rotated.read(i, j) + self.translation.read(j),
        ))
    }

    /// Root mean square error between the transformed source points and the destination points.
    ///
    /// Fails with a size mismatch unless src and dst both have shape (N, D).
    pub fn rmse(
        &self,
        src: faer::MatRef<'_, f64>,
        dst: faer::MatRef<'_, f64>,
    ) -> Result<f64, RigidTransformError> {
        points::root_mean_square_error(self.apply(src)?.as_ref(), dst)
    }

    /// The transform as a homogeneous matrix `[[scale * R, t], [0, 1]]` with shape (D + 1, D + 1).
    pub fn to_homogeneous(&self) -> faer::Mat<f64> {
        let dim = self.dim();
        faer::Mat::<f64>::from_fn(dim + 1, dim + 1, |i, j| match (i < dim, j < dim) {
            (true, true) => self.scale * self.rotation.read(i, j),
            (true, false) => self.translation.read(i),
            (false, true) => 0.0,
            (false, false) => 1.0,
        })
    }
}

/// Compose the final transform from the rotation, the scale and the two centroids.
///
/// The translation is `t = centroid_dst - scale * R * centroid_src`.
pub fn compose_transform(
    rotation: faer::Mat<f64>,
    scale: f64,
    centroid_src: &faer::Col<f64>,
    centroid_dst: &faer::Col<f64>,
) -> RigidTransform {
    let dim = rotation.nrows();
    let translation = faer::Col::<f64>::from_fn(dim, |i| {
        let rotated = (0..dim)
            .map(|j| rotation.read(i, j) * centroid_src.read(j))
            .sum::<f64>();
        centroid_dst.read(i) - scale * rotated
    });

    RigidTransform {
        rotation,
        translation,
        scale,
    }
}
