use rand::RngCore;

use super::{place, require_pool, SchedulingStrategy};
use crate::error::SimulationError;
use crate::model::{Assignment, Node, Task};

/// Cheapest node first: tasks in input order cycle over nodes sorted by
/// ascending cost (stable, so equal costs keep input order).
#[derive(Debug, Clone, Copy, Default)]
pub struct Economic;

impl SchedulingStrategy for Economic {
    fn name(&self) -> &'static str {
        "Economic"
    }

    fn assign(
        &self,
        nodes: &mut [Node],
        tasks: &[Task],
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<Assignment>, SimulationError> {
        require_pool(nodes, tasks)?;

        let mut by_cost: Vec<usize> = (0..nodes.len()).collect();
        by_cost.sort_by(|&a, &b| nodes[a].cost.total_cmp(&nodes[b].cost));

        let n = by_cost.len();
        let assignments = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| place(nodes, by_cost[i % n], task))
            .collect();
        Ok(assignments)
    }
}
