/// Compute the mean of the squared coordinates of a set of points.
pub fn mean_square(points: faer::MatRef<'_, f64>) -> f64 {
    let count = points.nrows() * points.ncols();
    if count == 0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for j in 0..points.ncols() {
        for i in 0..points.nrows() {
            let x = points.read(i, j);
            sum += x * x;
        }
    }
    sum / count as f64
}

/// Estimate the uniform scale between two centered point sets.
///
/// The estimate is the ratio of the root mean squares of the two point sets:
/// `scale = sqrt(mean(dst^2) / mean(src^2))`.
///
/// PRECONDITION: both point sets are centered and the source points do not all coincide.
pub fn estimate_scale(
    src_centered: faer::MatRef<'_, f64>,
    dst_centered: faer::MatRef<'_, f64>,
) -> f64 {
    (mean_square(dst_centered) / mean_square(src_centered)).sqrt()
}
