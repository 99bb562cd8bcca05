/// An error type for the rigid transform estimation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RigidTransformError {
    /// Error when the source and destination point sets differ in shape.
    #[error(
        "src and dst points aren't the same matrix size {src_rows}x{src_cols} != {dst_rows}x{dst_cols}"
    )]
    SizeMismatch {
        /// Number of source points.
        src_rows: usize,
        /// Dimension of the source points.
        src_cols: usize,
        /// Number of destination points.
        dst_rows: usize,
        /// Dimension of the destination points.
        dst_cols: usize,
    },

    /// Error when the points are neither 2D nor 3D.
    #[error("Points must be 2D or 3D, got points of dimension {0}")]
    InvalidDimension(usize),

    /// Error when there are fewer points than the dimension requires.
    #[error("Not enough points, expected >= {expected} points but got {actual}")]
    InsufficientPoints {
        /// Minimum number of points.
        expected: usize,
        /// Number of points given.
        actual: usize,
    },

    /// Error when the cross-covariance matrix rank is too low for a well-posed solution.
    #[error(
        "Insufficient matrix rank. For {dim}D points expected rank >= {expected} but got {rank}. Maybe your points are all the same, collinear or not finite?"
    )]
    RankDeficiency {
        /// Dimension of the points.
        dim: usize,
        /// Numerical rank of the cross-covariance matrix.
        rank: usize,
        /// Minimum accepted rank.
        expected: usize,
    },
}
