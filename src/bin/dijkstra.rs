use std::process::ExitCode;

use clap::Parser;
use path_exercises::{
    graphs::{edge::WeightedEdge, indexed_graph::IndexedGraph, EdgeDirection},
    search::{
        engine::ShortestPathEngine,
        path::{validate_path, RelaxationEvent, ShortestPath},
        FrontierKind, SearchOptions, Termination,
    },
    utility::init_logging,
};
use serde::Serialize;
use tracing::{error, info};

/// Solves one shortest path query and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma separated node set, e.g. A,B,C
    #[arg(short, long, value_delimiter = ',', required = true)]
    nodes: Vec<String>,

    /// Edge as tail,head,weight; repeat for more edges
    #[arg(short, long = "edge", value_parser = parse_edge)]
    edges: Vec<WeightedEdge<String>>,

    #[arg(short, long)]
    source: String,

    /// Distances to all nodes if omitted
    #[arg(short, long)]
    target: Option<String>,

    #[arg(long)]
    directed: bool,

    #[arg(long)]
    exhaustive: bool,

    #[arg(long)]
    steps: bool,

    #[arg(long)]
    radix: bool,

    /// Check the returned path against the graph
    #[arg(long)]
    verify: bool,
}

fn parse_edge(raw: &str) -> Result<WeightedEdge<String>, String> {
    let values: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [tail, head, weight] = values.as_slice() else {
        return Err(format!("expected tail,head,weight but got '{}'", raw));
    };
    let weight: i64 = weight
        .parse()
        .map_err(|_| format!("'{}' is not a valid weight", weight))?;
    Ok(WeightedEdge::new(tail.to_string(), head.to_string(), weight))
}

#[derive(Serialize)]
struct AllDestinationsOutput<'a, D, P> {
    source: &'a str,
    distances: D,
    predecessors: P,
    events: &'a [RelaxationEvent<String>],
}

fn main() -> ExitCode {
    init_logging("warn");
    let args = Args::parse();

    let options = SearchOptions {
        direction: if args.directed {
            EdgeDirection::Directed
        } else {
            EdgeDirection::Undirected
        },
        termination: if args.exhaustive {
            Termination::Exhaustive
        } else {
            Termination::StopAtTarget
        },
        record_events: args.steps,
        frontier: if args.radix {
            FrontierKind::RadixHeap
        } else {
            FrontierKind::BinaryHeap
        },
    };
    let engine = ShortestPathEngine::new(options);

    let json = match &args.target {
        Some(target) => {
            let path = match engine.single_target(&args.nodes, &args.edges, &args.source, target) {
                Ok(path) => path,
                Err(err) => {
                    error!("{}", err);
                    return ExitCode::FAILURE;
                }
            };
            if args.verify {
                if let Err(err) = verify(&args, options.direction, &path) {
                    error!("path verification failed: {}", err);
                    return ExitCode::FAILURE;
                }
                info!("path verified");
            }
            serde_json::to_string_pretty(&path)
        }
        None => {
            let result = match engine.all_destinations(&args.nodes, &args.edges, &args.source) {
                Ok(result) => result,
                Err(err) => {
                    error!("{}", err);
                    return ExitCode::FAILURE;
                }
            };
            serde_json::to_string_pretty(&AllDestinationsOutput {
                source: result.source(),
                distances: result.distance_table(),
                predecessors: result.predecessor_table(),
                events: result.events(),
            })
        }
    };

    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("unable to serialize result: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn verify(
    args: &Args,
    direction: EdgeDirection,
    path: &ShortestPath<String>,
) -> Result<(), String> {
    let graph = IndexedGraph::new(&args.nodes, &args.edges, direction)
        .map_err(|err| err.to_string())?;
    validate_path(&graph, path)?;

    // The reported distance must also be what the input edge list says.
    if path.is_reachable() && path.weight_in(&args.edges, direction) != Some(path.distance) {
        return Err("path weight does not match input edges".to_string());
    }
    Ok(())
}
