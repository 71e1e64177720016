//! Predictive QoS-aware placement.
//!
//! Before each placement decision the whole node pool drifts by one random
//! step, then the node with the best `bandwidth × reliability − load` score
//! wins.  This is the only strategy under which node resources change during
//! a run.
//!
//! | Attribute | Step | Bound |
//! |---|---|---|
//! | `cpu` | `{-1, 0, +1}` | `≥ MIN_CPU` |
//! | `bandwidth` | `{-10, 0, +10}` | `≥ MIN_BANDWIDTH` |
//! | `reliability` | `{-0.01, 0, +0.01}` | `[MIN_RELIABILITY, MAX_RELIABILITY]` |

use rand::{Rng, RngCore};
use tracing::debug;

use super::{place, require_pool, SchedulingStrategy};
use crate::error::SimulationError;
use crate::model::{
    Assignment, Node, Task, MAX_RELIABILITY, MIN_BANDWIDTH, MIN_CPU, MIN_RELIABILITY,
};

const CPU_STEP: i32 = 1;
const BANDWIDTH_STEP: i32 = 10;
const RELIABILITY_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, Default)]
pub struct PredictiveQosAware;

impl SchedulingStrategy for PredictiveQosAware {
    fn name(&self) -> &'static str {
        "Predictive QoS-Aware"
    }

    fn assign(
        &self,
        nodes: &mut [Node],
        tasks: &[Task],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Assignment>, SimulationError> {
        require_pool(nodes, tasks)?;

        let mut assignments = Vec::with_capacity(tasks.len());

        for task in tasks {
            for node in nodes.iter_mut() {
                drift(node, rng);
            }

            let best = best_node(nodes).ok_or(SimulationError::EmptyPool {
                task_count: tasks.len(),
            })?;
            debug!(
                task  = %task.id,
                node  = %nodes[best].id,
                score = nodes[best].predictive_score(),
                "predictive pick"
            );
            assignments.push(place(nodes, best, task));
        }

        Ok(assignments)
    }
}

/// Random direction in `{-1, 0, +1}`.
fn step<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(-1..=1)
}

/// Apply one fluctuation step to `node`: cpu, then bandwidth, then
/// reliability, each clamped to its invariant.
fn drift<R: Rng + ?Sized>(node: &mut Node, rng: &mut R) {
    node.cpu = node
        .cpu
        .saturating_add_signed(step(rng) * CPU_STEP)
        .max(MIN_CPU);

    node.bandwidth = node
        .bandwidth
        .saturating_add_signed(step(rng) * BANDWIDTH_STEP)
        .max(MIN_BANDWIDTH);

    let reliability = node.reliability + f64::from(step(rng)) * RELIABILITY_STEP;
    node.reliability = reliability.clamp(MIN_RELIABILITY, MAX_RELIABILITY);
}

/// Position of the highest-scoring node; the earliest one wins a tie.
fn best_node(nodes: &[Node]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, node) in nodes.iter().enumerate() {
        let score = node.predictive_score();
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
