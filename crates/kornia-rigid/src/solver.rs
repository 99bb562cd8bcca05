use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::covariance::RankPolicy;
use crate::{covariance, points, rigid, rotation, scale, validate};
use crate::{RigidTransform, RigidTransformError};

/// Options of the [`RigidTransformSolver`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Whether to estimate a uniform scale. When false the scale is fixed to 1.0.
    pub estimate_scale: bool,
    /// The minimum rank the cross-covariance matrix must reach.
    pub rank_policy: RankPolicy,
    /// Absolute tolerance for the numerical rank. `None` uses a tolerance relative to the
    /// largest singular value.
    pub rank_tolerance: Option<f64>,
}

/// Non-fatal events raised while solving.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The unconstrained solution was a reflection and was replaced by the closest rotation.
    ReflectionCorrected {
        /// Determinant of the uncorrected candidate.
        determinant: f64,
    },
    /// The cross-covariance rank was accepted but is below the dimension, the solution is
    /// not unique in theory.
    RankDeficient {
        /// Dimension of the points.
        dim: usize,
        /// Numerical rank of the cross-covariance matrix.
        rank: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ReflectionCorrected { determinant } => write!(
                f,
                "det(R) = {determinant}, reflection detected, correcting for it"
            ),
            Diagnostic::RankDeficient { dim, rank } => write!(
                f,
                "rank of H = {rank}, expecting rank of {dim} for a unique solution"
            ),
        }
    }
}

/// Least-squares estimator of the rigid or similarity transform between two point sets.
///
/// The points are matched by index: row i of the source corresponds to row i of the
/// destination. The returned transform minimizes `|dst - (scale * R * src + t)|^2`.
///
/// Example:
///
/// ```
/// use kornia_rigid::{RigidTransformSolver, SolverOptions};
///
/// let src = faer::mat![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
/// let dst = faer::mat![[1.0, 1.0], [1.0, 2.0], [0.0, 1.0]];
///
/// let solver = RigidTransformSolver::new(SolverOptions::default());
/// let tf = solver.solve(src.as_ref(), dst.as_ref()).unwrap();
/// assert!((tf.translation.read(0) - 1.0).abs() < 1e-9);
/// assert!((tf.rotation.read(1, 0) - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RigidTransformSolver {
    options: SolverOptions,
}

impl RigidTransformSolver {
    /// Create a new solver with the given options.
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    /// The options of the solver.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Estimate the transform from `src` to `dst`, logging diagnostics with the `log` crate.
    ///
    /// # Arguments
    ///
    /// * `src` - The source points with shape (N, D), D in {2, 3} and N >= D.
    /// * `dst` - The destination points with shape (N, D).
    pub fn solve(
        &self,
        src: faer::MatRef<'_, f64>,
        dst: faer::MatRef<'_, f64>,
    ) -> Result<RigidTransform, RigidTransformError> {
        self.solve_with_diagnostics(src, dst, log_diagnostic)
    }

    /// Estimate the transform from `src` to `dst`, sending diagnostics to a callback.
    ///
    /// # Arguments
    ///
    /// * `src` - The source points with shape (N, D), D in {2, 3} and N >= D.
    /// * `dst` - The destination points with shape (N, D).
    /// * `on_diagnostic` - Called for every non-fatal event.
    pub fn solve_with_diagnostics<F>(
        &self,
        src: faer::MatRef<'_, f64>,
        dst: faer::MatRef<'_, f64>,
        mut on_diagnostic: F,
    ) -> Result<RigidTransform, RigidTransformError>
    where
        F: FnMut(&Diagnostic),
    {
        let dim = validate::validate_points(src, dst)?;
        log::debug!("Solving {}D alignment from {} points", dim, src.nrows());

        let cov = covariance::compute_covariance(
            src,
            dst,
            self.options.rank_policy,
            self.options.rank_tolerance,
        )?;
        if cov.rank < dim {
            on_diagnostic(&Diagnostic::RankDeficient {
                dim,
                rank: cov.rank,
            });
        }

        let estimate = rotation::solve_rotation(&cov.decomposition);
        if estimate.reflection_corrected {
            on_diagnostic(&Diagnostic::ReflectionCorrected {
                determinant: estimate.candidate_determinant,
            });
        }

        let scale = match self.options.estimate_scale {
            true => scale::estimate_scale(cov.src_centered.as_ref(), cov.dst_centered.as_ref()),
            false => 1.0,
        };
        log::debug!("Scale: {}", scale);

        Ok(rigid::compose_transform(
            estimate.rotation,
            scale,
            &cov.centroid_src,
            &cov.centroid_dst,
        ))
    }
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    log::warn!("{}", diagnostic);
}

/// Calculate the optimal rigid transform from `src` to `dst`.
///
/// If `estimate_scale` is true the similarity transform is solved, otherwise the scale is 1.0.
///
/// # Arguments
///
/// * `src` - The source points stored as rows with shape (N, D).
/// * `dst` - The destination points stored as rows with shape (N, D).
/// * `estimate_scale` - Whether to solve for a uniform scale.
///
/// # Returns
///
/// The rotation, translation and scale mapping `src` onto `dst`.
pub fn solve(
    src: faer::MatRef<'_, f64>,
    dst: faer::MatRef<'_, f64>,
    estimate_scale: bool,
) -> Result<RigidTransform, RigidTransformError> {
    RigidTransformSolver::new(SolverOptions {
        estimate_scale,
        ..Default::default()
    })
    .solve(src, dst)
}

/// Calculate the optimal rigid transform between two slices of points.
///
/// Example:
///
/// ```
/// use kornia_rigid::solve_points;
///
/// let src = [[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];
/// let dst = [[2.0, 0.0, 1.0], [-2.0, 0.0, 1.0], [2.0, 2.0, 1.0]];
/// let tf = solve_points(&src, &dst, true).unwrap();
/// assert!((tf.scale - 2.0).abs() < 1e-9);
/// assert!((tf.translation.read(2) - 1.0).abs() < 1e-9);
/// ```
pub fn solve_points<const D: usize>(
    src: &[[f64; D]],
    dst: &[[f64; D]],
    estimate_scale: bool,
) -> Result<RigidTransform, RigidTransformError> {
    let src = points::to_mat(src);
    let dst = points::to_mat(dst);
    solve(src.as_ref(), dst.as_ref(), estimate_scale)
}

/// Calculate the optimal rigid transform for points stored as columns with shape (D, N).
///
/// The inputs are transposed and solved as rows, errors refer to the transposed shapes.
pub fn solve_columns(
    src: faer::MatRef<'_, f64>,
    dst: faer::MatRef<'_, f64>,
    estimate_scale: bool,
) -> Result<RigidTransform, RigidTransformError> {
    solve(src.transpose(), dst.transpose(), estimate_scale)
}
