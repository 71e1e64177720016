use rand::RngCore;

use super::{place, require_pool, SchedulingStrategy};
use crate::error::SimulationError;
use crate::model::{Assignment, Node, Task};

/// Lightest tasks first, cycling over nodes ordered by their load **at the
/// start of the run**.
///
/// Both orderings are stable sorts over copies of the input order, so ties
/// keep their original relative position.  The node order is computed once
/// and never refreshed as loads grow; later tasks can land on a node that is
/// no longer the least loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl SchedulingStrategy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn assign(
        &self,
        nodes: &mut [Node],
        tasks: &[Task],
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<Assignment>, SimulationError> {
        require_pool(nodes, tasks)?;

        let mut task_order: Vec<&Task> = tasks.iter().collect();
        task_order.sort_by_key(|t| t.workload);

        let mut node_order: Vec<usize> = (0..nodes.len()).collect();
        node_order.sort_by(|&a, &b| nodes[a].load.total_cmp(&nodes[b].load));

        let n = node_order.len();
        let assignments = task_order
            .into_iter()
            .enumerate()
            .map(|(i, task)| place(nodes, node_order[i % n], task))
            .collect();
        Ok(assignments)
    }
}
