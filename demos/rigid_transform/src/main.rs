use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;

use kornia_rigid::{transforms, RigidTransform, RigidTransformSolver, SolverOptions};

#[derive(FromArgs)]
/// Recover a random similarity transform from synthetic 2D and 3D points
struct Args {
    /// number of points to generate
    #[argh(option, default = "100")]
    num_points: usize,

    /// seed of the random generator
    #[argh(option)]
    seed: Option<u64>,

    /// path to a json file with the solver options
    #[argh(option)]
    config: Option<PathBuf>,

    /// print a json report instead of text
    #[argh(switch)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    dim: usize,
    ground_truth: TransformReport,
    recovered: TransformReport,
    rmse: f64,
}

#[derive(Serialize)]
struct TransformReport {
    rotation: Vec<Vec<f64>>,
    translation: Vec<f64>,
    scale: f64,
}

impl From<&RigidTransform> for TransformReport {
    fn from(tf: &RigidTransform) -> Self {
        let dim = tf.dim();
        Self {
            rotation: (0..dim)
                .map(|i| (0..dim).map(|j| tf.rotation.read(i, j)).collect())
                .collect(),
            translation: (0..dim).map(|i| tf.translation.read(i)).collect(),
            scale: tf.scale,
        }
    }
}

fn random_rotation(
    rng: &mut StdRng,
    dim: usize,
) -> Result<faer::Mat<f64>, Box<dyn std::error::Error>> {
    let angle = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
    Ok(match dim {
        2 => transforms::rotation_2d(angle),
        _ => {
            let axis = [rng.random::<f64>(), rng.random::<f64>(), rng.random::<f64>()];
            transforms::axis_angle_to_rotation_matrix(&axis, angle)?
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let options = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => SolverOptions {
            estimate_scale: true,
            ..Default::default()
        },
    };
    log::debug!("Solver options: {:?}", options);
    let solver = RigidTransformSolver::new(options);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for dim in [2, 3] {
        let translation = (0..dim).map(|_| rng.random::<f64>()).collect::<Vec<_>>();
        let ground_truth = RigidTransform {
            rotation: random_rotation(&mut rng, dim)?,
            translation: faer::Col::<f64>::from_fn(dim, |i| translation[i]),
            scale: rng.random_range(0.1..10.0),
        };

        let points = (0..args.num_points * dim)
            .map(|_| rng.random::<f64>())
            .collect::<Vec<_>>();
        let src = faer::Mat::<f64>::from_fn(args.num_points, dim, |i, j| points[i * dim + j]);
        let dst = ground_truth.apply(src.as_ref())?;

        // recover the transform
        let recovered = solver.solve(src.as_ref(), dst.as_ref())?;

        // this should be close to zero
        let rmse = recovered.rmse(src.as_ref(), dst.as_ref())?;

        if args.json {
            let report = Report {
                dim,
                ground_truth: (&ground_truth).into(),
                recovered: (&recovered).into(),
                rmse,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            continue;
        }

        println!("{:=^60}", "");
        println!("{}D points\n", dim);
        println!("Ground truth rotation\n{:?}\n", ground_truth.rotation);
        println!("Recovered rotation\n{:?}\n", recovered.rotation);
        println!("Ground truth translation: {:?}", ground_truth.translation);
        println!("Recovered translation: {:?}\n", recovered.translation);
        println!("Ground truth scale: {}", ground_truth.scale);
        println!("Recovered scale: {}\n", recovered.scale);
        println!("RMSE: {}", rmse);

        if rmse < 1e-6 {
            println!("Everything looks good!");
        } else {
            println!("Hmm something doesn't look right ...");
        }
    }

    Ok(())
}
