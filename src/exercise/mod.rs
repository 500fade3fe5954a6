use indicatif::{ParallelProgressIterator, ProgressBar};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    error::InvalidInput,
    graphs::{edge::WeightedEdge, Distance},
    search::{
        engine::ShortestPathEngine,
        path::{serialize_distance, RelaxationEvent},
        SearchOptions,
    },
};

pub mod generator;

const CITY_POOL: [&str; 15] = [
    "Madrid",
    "Barcelona",
    "Valencia",
    "Sevilla",
    "Bilbao",
    "Malaga",
    "Zaragoza",
    "Murcia",
    "Granada",
    "Cordoba",
    "Alicante",
    "Valladolid",
    "Vigo",
    "Gijon",
    "Toledo",
];

const MIN_NODES: usize = 3;

#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("invalid exercise configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub count: usize,
    pub seed: u64,
    pub node_pool: Vec<String>,
    /// Clamped to `3..=node_pool.len()`.
    pub nodes_per_exercise: usize,
    pub min_weight: u32,
    pub max_weight: u32,
    /// Probability of an extra edge between two nodes not joined by the
    /// spanning path.
    pub connectivity: f64,
    pub search: SearchOptions,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        ExerciseConfig {
            count: 3,
            seed: 123,
            node_pool: CITY_POOL.iter().map(|city| city.to_string()).collect(),
            nodes_per_exercise: 5,
            min_weight: 1,
            max_weight: 15,
            connectivity: 0.4,
            search: SearchOptions::default(),
        }
    }
}

impl ExerciseConfig {
    pub fn validate(&self) -> Result<(), ExerciseError> {
        if self.min_weight > self.max_weight {
            return Err(ExerciseError::InvalidConfig(format!(
                "min weight {} is larger than max weight {}",
                self.min_weight, self.max_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.connectivity) {
            return Err(ExerciseError::InvalidConfig(format!(
                "connectivity {} is not within [0, 1]",
                self.connectivity
            )));
        }
        if self.node_pool.len() < MIN_NODES {
            return Err(ExerciseError::InvalidConfig(format!(
                "node pool needs at least {} nodes, got {}",
                MIN_NODES,
                self.node_pool.len()
            )));
        }
        Ok(())
    }

    fn nodes_per_exercise(&self) -> usize {
        self.nodes_per_exercise.clamp(MIN_NODES, self.node_pool.len())
    }
}

/// One generated task together with its solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub index: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<WeightedEdge<String>>,
    pub source: String,
    pub target: String,
    #[serde(serialize_with = "serialize_distance")]
    pub distance: Distance,
    pub path: Vec<String>,
    /// Hops of `path`, for highlighting in a drawing.
    pub path_edges: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<RelaxationEvent<String>>,
}

/// Builds `config.count` exercises. Instance `i` draws from its own RNG seeded
/// with `seed + i`, so the output only depends on the config.
pub fn build_exercises(
    config: &ExerciseConfig,
    progress: &ProgressBar,
) -> Result<Vec<Exercise>, ExerciseError> {
    config.validate()?;

    let exercises = (0..config.count)
        .into_par_iter()
        .progress_with(progress.clone())
        .map(|index| build_exercise(config, index))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = exercises.len(), seed = config.seed, "built exercises");

    Ok(exercises)
}

pub fn build_exercise(config: &ExerciseConfig, index: usize) -> Result<Exercise, ExerciseError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));

    let nodes: Vec<String> = config
        .node_pool
        .choose_multiple(&mut rng, config.nodes_per_exercise())
        .cloned()
        .collect();
    let edges = generator::generate_graph(
        &nodes,
        &mut rng,
        config.min_weight,
        config.max_weight,
        config.connectivity,
    );

    let engine = ShortestPathEngine::new(config.search);
    let (source, target) = pick_endpoints(&engine, &nodes, &edges, &mut rng)?;

    let solution = engine.single_target(&nodes, &edges, &source, &target)?;
    let path_edges = solution
        .edges()
        .map(|(tail, head)| (tail.clone(), head.clone()))
        .collect();

    debug!(
        index,
        source = %source,
        target = %target,
        edges = edges.len(),
        "solved exercise"
    );

    Ok(Exercise {
        index,
        nodes,
        edges,
        source,
        target,
        distance: solution.distance,
        path: solution.path,
        path_edges,
        steps: solution.events,
    })
}

/// Random source that reaches at least one other node and a random target
/// among the nodes it reaches. With directed edges not every pair is
/// connected, the first node of the spanning path always reaches all others.
fn pick_endpoints(
    engine: &ShortestPathEngine,
    nodes: &[String],
    edges: &[WeightedEdge<String>],
    rng: &mut StdRng,
) -> Result<(String, String), ExerciseError> {
    let mut sources: Vec<&String> = nodes.iter().collect();
    sources.shuffle(rng);

    for source in sources {
        let reachable = engine.all_destinations(nodes, edges, source)?;
        let targets: Vec<&String> = nodes
            .iter()
            .filter(|node| *node != source && reachable.is_reachable(node))
            .collect();
        if let Some(target) = targets.choose(rng) {
            return Ok((source.clone(), (*target).clone()));
        }
    }

    Err(ExerciseError::InvalidConfig("no node reaches another node".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UNREACHABLE;

    #[test]
    fn same_seed_same_exercises() {
        let config = ExerciseConfig::default();
        let first = build_exercises(&config, &ProgressBar::hidden()).unwrap();
        let second = build_exercises(&config, &ProgressBar::hidden()).unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn undirected_exercises_are_solvable() {
        let config = ExerciseConfig {
            count: 20,
            ..ExerciseConfig::default()
        };

        for exercise in build_exercises(&config, &ProgressBar::hidden()).unwrap() {
            assert_ne!(exercise.source, exercise.target);
            assert_ne!(exercise.distance, UNREACHABLE);
            assert_eq!(exercise.path.first(), Some(&exercise.source));
            assert_eq!(exercise.path.last(), Some(&exercise.target));
            assert_eq!(exercise.path_edges.len(), exercise.path.len() - 1);
            assert!(exercise.steps.is_empty());
        }
    }

    #[test]
    fn directed_exercises_are_solvable() {
        let config = ExerciseConfig {
            count: 100,
            connectivity: 0.0,
            search: SearchOptions::default().directed(),
            ..ExerciseConfig::default()
        };

        for exercise in build_exercises(&config, &ProgressBar::hidden()).unwrap() {
            assert_ne!(exercise.distance, UNREACHABLE, "exercise {}", exercise.index);
            assert_eq!(exercise.path.first(), Some(&exercise.source));
            assert_eq!(exercise.path.last(), Some(&exercise.target));
        }
    }

    #[test]
    fn steps_recorded_when_requested() {
        let config = ExerciseConfig {
            search: SearchOptions::default().with_events(),
            ..ExerciseConfig::default()
        };

        let exercise = build_exercise(&config, 0).unwrap();
        assert!(!exercise.steps.is_empty());
    }

    #[test]
    fn rejects_inverted_weight_range() {
        let config = ExerciseConfig {
            min_weight: 9,
            max_weight: 2,
            ..ExerciseConfig::default()
        };

        assert!(matches!(
            build_exercises(&config, &ProgressBar::hidden()),
            Err(ExerciseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_small_node_pool() {
        let config = ExerciseConfig {
            node_pool: vec!["A".to_string(), "B".to_string()],
            ..ExerciseConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_pool_entries_surface_as_invalid_input() {
        let config = ExerciseConfig {
            node_pool: vec!["A".to_string(); 3],
            ..ExerciseConfig::default()
        };

        assert!(matches!(
            build_exercise(&config, 0),
            Err(ExerciseError::InvalidInput(InvalidInput::DuplicateNode { .. }))
        ));
    }
}
