#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::*;

/// Shape and dimensionality checks run before any numeric work.
pub mod validate;

/// Centroids, centering and the cross-covariance matrix.
pub mod covariance;

/// Rotation recovery from the cross-covariance matrix.
pub mod rotation;

/// Uniform scale estimation.
pub mod scale;

/// The estimated transform and its composition.
pub mod rigid;
pub use rigid::RigidTransform;

mod solver;
pub use solver::*;

/// Conversions between point slices and matrices.
pub mod points;

/// Rotation matrix constructors.
pub mod transforms;
