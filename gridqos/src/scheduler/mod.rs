//! Grid task scheduler.
//!
//! [`GridScheduler`] places every [`Task`] on exactly one [`Node`] using one of
//! four interchangeable strategies, accumulating each task's workload on the
//! chosen node.  The result is a [`ScheduleOutcome`]: the (mutated) node pool
//! handed back to the caller plus the ordered list of [`Assignment`]s.
//!
//! # Strategies
//!
//! | [`Algorithm`] | Task order | Node order | Mutates |
//! |---|---|---|---|
//! | `RoundRobin` | input | input | `load` |
//! | `ShortestJobFirst` | workload ascending (stable) | load ascending, sorted **once** | `load` |
//! | `Economic` | input | cost ascending (stable) | `load` |
//! | `PredictiveQosAware` | input | best `bandwidth × reliability − load` after drift | `load`, `cpu`, `bandwidth`, `reliability` |
//!
//! # Ownership
//! `schedule()` takes the node pool **by value** and returns it.  There is no
//! shared reference for it to write through, so a snapshot cloned by the
//! caller beforehand is guaranteed to stay untouched.
//!
//! # Example
//! ```rust
//! use gridqos::model::{Node, Priority, Task};
//! use gridqos::scheduler::{Algorithm, GridScheduler};
//! use rand::SeedableRng;
//!
//! let nodes = vec![
//!     Node::new("Node-1", 4, 16, 100, 0.9, 1.0),
//!     Node::new("Node-2", 4, 16, 100, 0.9, 2.0),
//! ];
//! let tasks = vec![Task::new("Task-1", 5, Priority::High, 4)];
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let outcome = GridScheduler::new(Algorithm::RoundRobin)
//!     .schedule(nodes, &tasks, &mut rng)
//!     .unwrap();
//! assert_eq!(outcome.assignments[0].node_id, "Node-1");
//! assert_eq!(outcome.nodes[0].load, 5.0);
//! ```

pub mod economic;
pub mod predictive;
pub mod round_robin;
pub mod shortest_job_first;

#[cfg(test)]
pub(crate) mod tests_common;

pub use economic::Economic;
pub use predictive::PredictiveQosAware;
pub use round_robin::RoundRobin;
pub use shortest_job_first::ShortestJobFirst;

use std::str::FromStr;

use rand::RngCore;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ConfigViolation, SimulationError};
use crate::model::{Assignment, Node, Task};

// ── Strategy interface ────────────────────────────────────────────────────────

/// One placement policy.
///
/// Implementations assign **every** task in `tasks` to exactly one position in
/// `nodes` and call [`Node::add_load`] on it, or place nothing and fail.
pub trait SchedulingStrategy: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Place `tasks` onto `nodes` and return the placements in processing
    /// order.
    ///
    /// # Errors
    /// [`SimulationError::EmptyPool`] if `nodes` is empty while `tasks` is
    /// not.  Neither slice is touched in that case.
    fn assign(
        &self,
        nodes: &mut [Node],
        tasks: &[Task],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Assignment>, SimulationError>;
}

/// Reject a non-empty task list with nowhere to place it.
pub(crate) fn require_pool(nodes: &[Node], tasks: &[Task]) -> Result<(), SimulationError> {
    if nodes.is_empty() && !tasks.is_empty() {
        return Err(SimulationError::EmptyPool {
            task_count: tasks.len(),
        });
    }
    Ok(())
}

/// Record `task` on `nodes[index]`: bump the load and build the assignment.
///
/// Shared by all strategies so the load bookkeeping cannot diverge.
pub(crate) fn place(nodes: &mut [Node], index: usize, task: &Task) -> Assignment {
    let node = &mut nodes[index];
    node.add_load(task.workload);
    debug!(
        task     = %task.id,
        node     = %node.id,
        workload = task.workload,
        load     = node.load,
        "task placed"
    );
    Assignment::new(task.id.clone(), node.id.clone())
}

// ── Algorithm selector ────────────────────────────────────────────────────────

/// The four scheduling strategies, selectable by name at the configuration
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    RoundRobin,
    ShortestJobFirst,
    Economic,
    PredictiveQosAware,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::RoundRobin,
        Algorithm::ShortestJobFirst,
        Algorithm::Economic,
        Algorithm::PredictiveQosAware,
    ];

    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn SchedulingStrategy {
        match self {
            Algorithm::RoundRobin => &RoundRobin,
            Algorithm::ShortestJobFirst => &ShortestJobFirst,
            Algorithm::Economic => &Economic,
            Algorithm::PredictiveQosAware => &PredictiveQosAware,
        }
    }

    /// Canonical machine-readable name (accepted by [`FromStr`]).
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "round_robin",
            Algorithm::ShortestJobFirst => "shortest_job_first",
            Algorithm::Economic => "economic",
            Algorithm::PredictiveQosAware => "predictive_qos_aware",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Case-insensitive; spaces and hyphens count as underscores, so
    /// `"Round Robin"`, `"round-robin"` and `"round_robin"` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "round_robin" | "rr" => Ok(Algorithm::RoundRobin),
            "shortest_job_first" | "sjf" => Ok(Algorithm::ShortestJobFirst),
            "economic" => Ok(Algorithm::Economic),
            "predictive_qos_aware" | "predictive_qos" | "predictive" => {
                Ok(Algorithm::PredictiveQosAware)
            }
            _ => Err(ConfigViolation::UnknownAlgorithm(s.to_string()).into()),
        }
    }
}

// ── ScheduleOutcome ───────────────────────────────────────────────────────────

/// Result of one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// The node pool after scheduling (loads accumulated, resources drifted
    /// for the predictive strategy).
    pub nodes: Vec<Node>,

    /// One entry per input task, in processing order.
    pub assignments: Vec<Assignment>,
}

// ── GridScheduler ─────────────────────────────────────────────────────────────

/// Runs one [`Algorithm`] over a node pool and task list.
///
/// Stateless between calls: all per-run state lives in the node vector passed
/// into [`schedule()`](Self::schedule).
#[derive(Debug, Clone, Copy)]
pub struct GridScheduler {
    algorithm: Algorithm,
}

impl GridScheduler {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Place every task in `tasks` onto a node from `nodes`.
    ///
    /// An empty task list returns an empty assignment list and the nodes
    /// unchanged.
    ///
    /// # Errors
    /// [`SimulationError::EmptyPool`] if `nodes` is empty while `tasks` is not.
    /// No partial assignment list is produced.
    pub fn schedule<R: RngCore>(
        &self,
        mut nodes: Vec<Node>,
        tasks: &[Task],
        rng: &mut R,
    ) -> Result<ScheduleOutcome, SimulationError> {
        // ── Preconditions ─────────────────────────────────────────────────────
        require_pool(&nodes, tasks)?;

        let strategy = self.algorithm.strategy();
        info!(
            algorithm  = strategy.name(),
            task_count = tasks.len(),
            node_count = nodes.len(),
            "=== GridScheduler::schedule() ==="
        );

        // ── Strategy dispatch ─────────────────────────────────────────────────
        let assignments = strategy.assign(&mut nodes, tasks, rng)?;
        debug_assert_eq!(
            assignments.len(),
            tasks.len(),
            "strategy '{}' must place every task exactly once",
            strategy.name()
        );

        // ── Post-schedule diagnostics ─────────────────────────────────────────
        log_load_distribution(&nodes);

        info!(
            algorithm   = strategy.name(),
            assignments = assignments.len(),
            "=== Scheduling complete ==="
        );

        Ok(ScheduleOutcome { nodes, assignments })
    }
}

/// Emit the final per-node load and the spread between the busiest and the
/// idlest node.
fn log_load_distribution(nodes: &[Node]) {
    for node in nodes {
        debug!(node = %node.id, load = node.load, "final load");
    }

    let max = nodes.iter().map(|n| n.load).fold(f64::NEG_INFINITY, f64::max);
    let min = nodes.iter().map(|n| n.load).fold(f64::INFINITY, f64::min);
    if max.is_finite() && min.is_finite() {
        debug!(max_load = max, min_load = min, spread = max - min, "load distribution");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::tests_common::{make_nodes, make_task, seeded_rng};
    use super::*;
    use std::collections::HashSet;

    fn mixed_tasks() -> Vec<Task> {
        [7, 3, 9, 3, 5, 10, 4]
            .iter()
            .enumerate()
            .map(|(i, &w)| make_task(&format!("Task-{}", i + 1), w))
            .collect()
    }

    // ── Algorithm parsing ─────────────────────────────────────────────────────

    #[test]
    fn algorithm_parses_canonical_keys() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.key().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn algorithm_parses_display_labels_and_aliases() {
        assert_eq!("Round Robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::ShortestJobFirst);
        assert_eq!(
            "Predictive QoS-Aware".parse::<Algorithm>().unwrap(),
            Algorithm::PredictiveQosAware
        );
        assert_eq!(" economic ".parse::<Algorithm>().unwrap(), Algorithm::Economic);
    }

    #[test]
    fn unknown_algorithm_is_a_configuration_error() {
        let err = "fastest_first".parse::<Algorithm>().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Configuration(ConfigViolation::UnknownAlgorithm(ref name))
                if name == "fastest_first"
        ));
    }

    #[test]
    fn display_uses_strategy_name() {
        assert_eq!(Algorithm::ShortestJobFirst.to_string(), "Shortest Job First");
        assert_eq!(Algorithm::PredictiveQosAware.to_string(), "Predictive QoS-Aware");
    }

    // ── GridScheduler ─────────────────────────────────────────────────────────

    #[test]
    fn empty_pool_with_tasks_is_an_error() {
        let tasks = vec![make_task("Task-1", 3)];
        for algorithm in Algorithm::ALL {
            let err = GridScheduler::new(algorithm)
                .schedule(Vec::new(), &tasks, &mut seeded_rng())
                .unwrap_err();
            assert!(matches!(err, SimulationError::EmptyPool { task_count: 1 }));
        }
    }

    #[test]
    fn strategies_reject_empty_pool_when_called_directly() {
        let tasks = vec![make_task("Task-1", 3), make_task("Task-2", 5)];
        for algorithm in Algorithm::ALL {
            let err = algorithm
                .strategy()
                .assign(&mut [], &tasks, &mut seeded_rng())
                .unwrap_err();
            assert!(
                matches!(err, SimulationError::EmptyPool { task_count: 2 }),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn strategies_accept_empty_pool_without_tasks() {
        for algorithm in Algorithm::ALL {
            let assignments = algorithm
                .strategy()
                .assign(&mut [], &[], &mut seeded_rng())
                .unwrap();
            assert!(assignments.is_empty(), "{algorithm}");
        }
    }

    #[test]
    fn empty_task_list_is_a_no_op() {
        for algorithm in Algorithm::ALL {
            let nodes = make_nodes(3);
            let outcome = GridScheduler::new(algorithm)
                .schedule(nodes.clone(), &[], &mut seeded_rng())
                .unwrap();
            assert!(outcome.assignments.is_empty());
            assert_eq!(outcome.nodes, nodes);
        }
    }

    #[test]
    fn empty_pool_and_empty_tasks_is_fine() {
        let outcome = GridScheduler::new(Algorithm::Economic)
            .schedule(Vec::new(), &[], &mut seeded_rng())
            .unwrap();
        assert!(outcome.assignments.is_empty());
        assert!(outcome.nodes.is_empty());
    }

    #[test]
    fn every_algorithm_places_each_task_exactly_once_on_a_known_node() {
        let tasks = mixed_tasks();
        for algorithm in Algorithm::ALL {
            let nodes = make_nodes(3);
            let node_ids: HashSet<String> = nodes.iter().map(|n| n.id.clone()).collect();

            let outcome = GridScheduler::new(algorithm)
                .schedule(nodes, &tasks, &mut seeded_rng())
                .unwrap();

            assert_eq!(outcome.assignments.len(), tasks.len(), "{algorithm}");
            let placed: HashSet<&str> = outcome
                .assignments
                .iter()
                .map(|a| a.task_id.as_str())
                .collect();
            assert_eq!(placed.len(), tasks.len(), "{algorithm}: duplicate task");
            for a in &outcome.assignments {
                assert!(node_ids.contains(&a.node_id), "{algorithm}: unknown node");
            }
        }
    }

    #[test]
    fn total_load_equals_total_workload() {
        let tasks = mixed_tasks();
        let total_workload: f64 = tasks.iter().map(|t| f64::from(t.workload)).sum();
        for algorithm in Algorithm::ALL {
            let outcome = GridScheduler::new(algorithm)
                .schedule(make_nodes(4), &tasks, &mut seeded_rng())
                .unwrap();
            let total_load: f64 = outcome.nodes.iter().map(|n| n.load).sum();
            assert_eq!(total_load, total_workload, "{algorithm}");
        }
    }

    #[test]
    fn caller_snapshot_is_not_aliased() {
        let nodes = make_nodes(3);
        let snapshot = nodes.clone();
        let outcome = GridScheduler::new(Algorithm::PredictiveQosAware)
            .schedule(nodes, &mixed_tasks(), &mut seeded_rng())
            .unwrap();
        assert!(snapshot.iter().all(|n| n.load == 0.0));
        assert!(outcome.nodes.iter().any(|n| n.load > 0.0));
    }

    #[test]
    fn scheduler_is_deterministic_for_a_fixed_seed() {
        let tasks = mixed_tasks();
        for algorithm in Algorithm::ALL {
            let reference = GridScheduler::new(algorithm)
                .schedule(make_nodes(4), &tasks, &mut seeded_rng())
                .unwrap();
            for _ in 0..10 {
                let again = GridScheduler::new(algorithm)
                    .schedule(make_nodes(4), &tasks, &mut seeded_rng())
                    .unwrap();
                assert_eq!(again.assignments, reference.assignments, "{algorithm}");
                assert_eq!(again.nodes, reference.nodes, "{algorithm}");
            }
        }
    }
}
