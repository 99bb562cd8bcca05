use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kornia_rigid::{covariance, rotation, transforms, RigidTransform};

fn make_points(num_points: usize, dim: usize) -> (faer::Mat<f64>, faer::Mat<f64>) {
    let rotation = match dim {
        2 => transforms::rotation_2d(0.7),
        _ => transforms::axis_angle_to_rotation_matrix(&[0.3, -0.5, 1.0], 0.7)
            .expect("axis is not zero"),
    };
    let transform = RigidTransform {
        rotation,
        translation: faer::Col::<f64>::from_fn(dim, |i| i as f64 + 0.5),
        scale: 1.7,
    };
    let src = faer::Mat::<f64>::from_fn(num_points, dim, |_, _| rand::random::<f64>());
    let dst = transform
        .apply(src.as_ref())
        .expect("points match the transform dimension");
    (src, dst)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for dim in [2, 3] {
        for num_points in [10, 100, 1000, 10000] {
            let (src, dst) = make_points(num_points, dim);
            let parameter_string = format!("{}d_{}", dim, num_points);

            group.bench_with_input(
                BenchmarkId::new("solve", &parameter_string),
                &(&src, &dst),
                |b, i| {
                    let (src, dst) = (i.0.as_ref(), i.1.as_ref());
                    b.iter(|| black_box(kornia_rigid::solve(src, dst, true)))
                },
            );
        }
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let (src, dst) = make_points(1000, 3);

    group.bench_function(BenchmarkId::new("compute_covariance", "3d_1000"), |b| {
        b.iter(|| {
            black_box(covariance::compute_covariance(
                src.as_ref(),
                dst.as_ref(),
                covariance::RankPolicy::Relaxed,
                None,
            ))
        })
    });

    let h = covariance::cross_covariance(src.as_ref(), dst.as_ref());
    group.bench_function(BenchmarkId::new("decompose", "3x3"), |b| {
        b.iter(|| black_box(covariance::decompose(h.as_ref())))
    });

    let decomposition = covariance::decompose(h.as_ref());
    group.bench_function(BenchmarkId::new("solve_rotation", "3x3"), |b| {
        b.iter(|| black_box(rotation::solve_rotation(&decomposition)))
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_stages);
criterion_main!(benches);
