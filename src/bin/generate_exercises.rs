use std::{fs::File, io::BufWriter, path::PathBuf, process::ExitCode};

use clap::Parser;
use path_exercises::{
    exercise::{build_exercises, ExerciseConfig},
    graphs::EdgeDirection,
    search::{FrontierKind, SearchOptions, Termination},
    utility::{get_progressbar, init_logging},
};
use tracing::{error, info};

/// Generates randomized shortest path exercises with solutions as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of exercises
    #[arg(short, long, default_value_t = 3)]
    count: usize,

    /// Seed of the first exercise, exercise i uses seed + i
    #[arg(short, long, default_value_t = 123)]
    seed: u64,

    /// Nodes per exercise
    #[arg(short, long, default_value_t = 5)]
    nodes: usize,

    #[arg(long, default_value_t = 1)]
    min_weight: u32,

    #[arg(long, default_value_t = 15)]
    max_weight: u32,

    /// Probability of an extra edge between two nodes
    #[arg(long, default_value_t = 0.4)]
    connectivity: f64,

    /// Traverse edges only from tail to head
    #[arg(long)]
    directed: bool,

    /// Drain the frontier instead of stopping at the target
    #[arg(long)]
    exhaustive: bool,

    /// Include the relaxation steps of every solution
    #[arg(long)]
    steps: bool,

    /// Use a radix heap as frontier
    #[arg(long)]
    radix: bool,

    /// Outfile, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> ExerciseConfig {
        ExerciseConfig {
            count: self.count,
            seed: self.seed,
            nodes_per_exercise: self.nodes,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
            connectivity: self.connectivity,
            search: SearchOptions {
                direction: if self.directed {
                    EdgeDirection::Directed
                } else {
                    EdgeDirection::Undirected
                },
                termination: if self.exhaustive {
                    Termination::Exhaustive
                } else {
                    Termination::StopAtTarget
                },
                record_events: self.steps,
                frontier: if self.radix {
                    FrontierKind::RadixHeap
                } else {
                    FrontierKind::BinaryHeap
                },
            },
            ..ExerciseConfig::default()
        }
    }
}

fn main() -> ExitCode {
    init_logging("info");
    let args = Args::parse();
    let config = args.config();

    let progress = get_progressbar("building exercises", config.count as u64);
    let exercises = match build_exercises(&config, &progress) {
        Ok(exercises) => exercises,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    progress.finish_and_clear();

    let written = match &args.output {
        Some(path) => File::create(path)
            .map_err(serde_json::Error::io)
            .and_then(|file| serde_json::to_writer_pretty(BufWriter::new(file), &exercises)),
        None => serde_json::to_writer_pretty(std::io::stdout().lock(), &exercises),
    };
    if let Err(err) = written {
        error!("unable to write exercises: {}", err);
        return ExitCode::FAILURE;
    }

    info!(count = exercises.len(), output = ?args.output, "done");
    ExitCode::SUCCESS
}
