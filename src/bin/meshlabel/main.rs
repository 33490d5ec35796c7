//! meshlabel CLI - grow face selections on triangle meshes and export labels.
//!
//! Usage: meshlabel <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `meshlabel --help` for available commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use meshlabel::algo::curvature::{gaussian_curvature, total_angle_defect};
use meshlabel::algo::expand::{ExpandMethod, DEFAULT_HOPS, DEFAULT_MAX_ANGLE_DEGREES};
use meshlabel::io;
use meshlabel::mesh::SurfaceModel;
use meshlabel::selection::{SelectionMode, SelectionSession, SelectionSet};

#[derive(Parser)]
#[command(name = "meshlabel")]
#[command(author, version, about = "Mesh face labeling CLI", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Grow a selection from seed faces and write a labeled PLY
    Select {
        /// Input mesh file
        input: PathBuf,

        /// Output PLY file
        output: PathBuf,

        /// Seed face index (repeatable)
        #[arg(short, long = "seed", required = true, num_args = 1..)]
        seeds: Vec<usize>,

        /// Growth method
        #[arg(short, long, value_enum, default_value = "multi-threshold")]
        method: Method,

        /// Number of rings for neighbor and multi-threshold growth
        #[arg(long, default_value_t = DEFAULT_HOPS)]
        hops: usize,

        /// Angle limit in degrees for multi-threshold growth
        #[arg(long, default_value_t = DEFAULT_MAX_ANGLE_DEGREES)]
        angle: f64,

        /// Minimum |cos| to the seed normal for angle growth
        #[arg(long, default_value = "0.9", allow_hyphen_values = true)]
        cosine: f64,

        /// How the grown region is combined with the initial selection
        #[arg(long, value_enum, default_value = "replace")]
        mode: Mode,

        /// Labeled PLY providing the initial selection
        #[arg(long)]
        initial: Option<PathBuf>,

        /// Invert the selection after applying the pick
        #[arg(long)]
        invert: bool,

        /// Drop selected faces not connected to the seeds
        #[arg(long)]
        keep_connected: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Rings of vertex-adjacent faces
    Neighbor,
    /// Edge-adjacent faces with similar normals, unbounded
    Angle,
    /// Edge-adjacent faces within an angle limit, bounded by rings
    MultiThreshold,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// The grown region becomes the selection
    Replace,
    /// Add the grown region to the selection
    Union,
    /// Remove the grown region from the selection
    Difference,
}

impl From<Mode> for SelectionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Replace => SelectionMode::Replace,
            Mode::Union => SelectionMode::Union,
            Mode::Difference => SelectionMode::Difference,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "meshlabel=debug" } else { "meshlabel=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", err);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Select {
            input,
            output,
            seeds,
            method,
            hops,
            angle,
            cosine,
            mode,
            initial,
            invert,
            keep_connected,
        } => {
            let method = match method {
                Method::Neighbor => ExpandMethod::Neighbor { hops },
                Method::Angle => ExpandMethod::Angle {
                    cosine_threshold: cosine,
                },
                Method::MultiThreshold => ExpandMethod::MultiThreshold {
                    max_hops: hops,
                    max_angle_degrees: angle,
                },
            };
            let post = PostProcess {
                invert,
                keep_connected,
            };
            cmd_select(
                &input,
                &output,
                &seeds,
                &method,
                mode.into(),
                initial.as_deref(),
                post,
            )?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let model = SurfaceModel::new(io::load(input)?)?;
    let mesh = model.mesh();
    let topology = model.topology();

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());
    println!("Edges: {}", topology.num_edges());

    println!("Surface area: {:.6}", mesh.surface_area());
    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    let boundary = topology.boundary_edge_count();
    let non_manifold = topology.non_manifold_edge_count();
    if boundary == 0 && non_manifold == 0 {
        println!("Topology: Closed manifold");
    } else {
        println!(
            "Topology: {} boundary edges, {} non-manifold edges",
            boundary, non_manifold
        );
    }

    let components = topology.connected_components();
    println!("Connected components: {}", components.len());
    println!("Degenerate faces: {}", model.normals().degenerate_count());

    let curvature = gaussian_curvature(&model);
    let (k_min, k_max) = curvature
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &k| {
            (lo.min(k), hi.max(k))
        });
    println!("Gaussian curvature: {:.6} to {:.6}", k_min, k_max);
    if topology.is_watertight() {
        let chi = total_angle_defect(&model) / (2.0 * std::f64::consts::PI);
        println!("Euler characteristic (Gauss-Bonnet): {:.3}", chi);
    }

    Ok(())
}

#[derive(Clone, Copy)]
struct PostProcess {
    invert: bool,
    keep_connected: bool,
}

fn cmd_select(
    input: &Path,
    output: &Path,
    seeds: &[usize],
    method: &ExpandMethod,
    mode: SelectionMode,
    initial: Option<&Path>,
    post: PostProcess,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = SurfaceModel::new(io::load(input)?)?;
    println!(
        "Loaded: {} vertices, {} faces",
        model.num_vertices(),
        model.num_faces()
    );

    let mut session = match initial {
        Some(path) => {
            let labels = io::ply::load_labels(path)?;
            if labels.len() != model.num_faces() {
                return Err(format!(
                    "{} labels {} faces, {} has {}",
                    path.display(),
                    labels.len(),
                    input.display(),
                    model.num_faces()
                )
                .into());
            }
            let selected = labels
                .iter()
                .enumerate()
                .filter(|(_, &l)| l != 0)
                .map(|(i, _)| i);
            let selection = SelectionSet::from_indices(model.num_faces(), selected)?;
            println!("Initial selection: {} faces", selection.len());
            SelectionSession::with_selection(&model, selection)?
        }
        None => SelectionSession::new(),
    };

    let seed = SelectionSet::from_indices(model.num_faces(), seeds.iter().copied())?;

    let start = Instant::now();
    let region = session.apply(&model, &seed, method, mode)?;
    println!(
        "Grew {} seed faces to {} faces with {} ({} mode)",
        seed.len(),
        region.len(),
        method,
        mode
    );

    if post.keep_connected {
        if session.keep_connected(&model)? {
            println!("Kept faces connected to the seeds");
        } else {
            println!("Seeds are outside the selection, nothing to clean");
        }
    }
    if post.invert {
        session.invert(&model)?;
        println!("Inverted selection");
    }
    let elapsed = start.elapsed();

    let labels = session.labels(&model)?;
    io::ply::save_labeled(model.mesh(), &labels, output)?;
    println!(
        "Saved: {} ({} of {} faces selected, {:.2?})",
        output.display(),
        labels.selected_face_count(),
        model.num_faces(),
        elapsed
    );

    Ok(())
}
