/// Compute the 2D rotation matrix for an angle in radians.
///
/// Example:
///
/// ```
/// use kornia_rigid::transforms::rotation_2d;
///
/// let r = rotation_2d(0.0);
/// assert_eq!(r, faer::mat![[1.0, -0.0], [0.0, 1.0]]);
/// ```
pub fn rotation_2d(angle: f64) -> faer::Mat<f64> {
    let (s, c) = angle.sin_cos();
    faer::mat![[c, -s], [s, c]]
}

/// Compute the 3D rotation matrix from an axis and angle.
///
/// # Arguments
///
/// * `axis` - The axis of rotation, normalized internally.
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
///
/// The rotation matrix with shape (3, 3).
pub fn axis_angle_to_rotation_matrix(
    axis: &[f64; 3],
    angle: f64,
) -> Result<faer::Mat<f64>, &'static str> {
    let magnitude = (axis[0].powi(2) + axis[1].powi(2) + axis[2].powi(2)).sqrt();
    if magnitude < 1e-10 {
        return Err("cannot compute rotation matrix from a zero vector");
    }

    let (x, y, z) = (
        axis[0] / magnitude,
        axis[1] / magnitude,
        axis[2] / magnitude,
    );

    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    Ok(faer::mat![
        [c + x * x * t, x * y * t - z * s, x * z * t + y * s],
        [x * y * t + z * s, c + y * y * t, y * z * t - x * s],
        [x * z * t - y * s, y * z * t + x * s, c + z * z * t]
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_2d() {
        let r = rotation_2d(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(r.read(0, 0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.read(0, 1), -1.0, epsilon = 1e-12);
        assert_relative_eq!(r.read(1, 0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.read(1, 1), 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_angle_to_rotation_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let r = axis_angle_to_rotation_matrix(&[1.0, 0.0, 0.0], std::f64::consts::FRAC_PI_2)?;
        let expected = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
        for (i, row) in expected.iter().enumerate() {
            for (j, val) in row.iter().enumerate() {
                assert_relative_eq!(r.read(i, j), *val, epsilon = 1e-12);
            }
        }

        // the axis does not need to be normalized
        let r = axis_angle_to_rotation_matrix(&[0.0, 0.0, 5.0], 0.3)?;
        assert_relative_eq!(r.read(0, 0), 0.3f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(r.read(1, 0), 0.3f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(r.read(2, 2), 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_axis_angle_zero_axis() {
        assert!(axis_angle_to_rotation_matrix(&[0.0, 0.0, 0.0], 1.0).is_err());
    }
}
