use crate::covariance::CovarianceSvd;

/// A proper rotation recovered from a cross-covariance matrix.
#[derive(Debug, Clone)]
pub struct RotationEstimate {
    /// The rotation matrix with shape (D, D) and determinant +1.
    pub rotation: faer::Mat<f64>,
    /// The determinant of the uncorrected candidate V * U^T.
    pub candidate_determinant: f64,
    /// Whether the candidate was a reflection and had to be corrected.
    pub reflection_corrected: bool,
}

/// Recover the rotation that best aligns the centered source onto the centered destination.
///
/// With H = U * S * V^T the candidate rotation is R = V * U^T. If the candidate is a
/// reflection (det(R) < 0) the column of V paired with the smallest singular value is
/// negated, i.e. R = V * diag(1, .., 1, -1) * U^T.
///
/// # Arguments
///
/// * `decomposition` - The singular value decomposition of the cross-covariance matrix H.
///
/// # Returns
///
/// The rotation and whether it had to be corrected.
pub fn solve_rotation(decomposition: &CovarianceSvd) -> RotationEstimate {
    let u = decomposition.u.as_ref();
    let v = decomposition.v.as_ref();

    let candidate = v * u.transpose();
    let candidate_determinant = candidate.determinant();

    if candidate_determinant >= 0.0 {
        return RotationEstimate {
            rotation: candidate,
            candidate_determinant,
            reflection_corrected: false,
        };
    }

    // flip the axis of least variance
    let weakest = smallest_index(&decomposition.singular_values);
    let mut v_corrected = v.to_owned();
    for i in 0..v_corrected.nrows() {
        v_corrected.write(i, weakest, -v_corrected.read(i, weakest));
    }

    RotationEstimate {
        rotation: v_corrected.as_ref() * u.transpose(),
        candidate_determinant,
        reflection_corrected: true,
    }
}

fn smallest_index(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, min), (i, &s)| {
            if s <= min {
                (i, s)
            } else {
                (best, min)
            }
        })
        .0
}
