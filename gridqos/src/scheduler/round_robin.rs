use rand::RngCore;

use super::{place, require_pool, SchedulingStrategy};
use crate::error::SimulationError;
use crate::model::{Assignment, Node, Task};

/// Task `i` goes to node `i mod n`, both in input order.
///
/// Ignores every node attribute; deterministic without any random draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl SchedulingStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn assign(
        &self,
        nodes: &mut [Node],
        tasks: &[Task],
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<Assignment>, SimulationError> {
        require_pool(nodes, tasks)?;

        let n = nodes.len();
        let assignments = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| place(nodes, i % n, task))
            .collect();
        Ok(assignments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests_common::*;

    #[test]
    fn cycles_through_nodes_in_input_order() {
        let mut nodes = make_nodes(3);
        let tasks: Vec<Task> = (1..=7)
            .map(|i| make_task(&format!("Task-{i}"), 3))
            .collect();

        let assignments = RoundRobin.assign(&mut nodes, &tasks, &mut seeded_rng()).unwrap();

        let targets: Vec<&str> = assignments.iter().map(|a| a.node_id.as_str()).collect();
        assert_eq!(
            targets,
            ["Node-1", "Node-2", "Node-3", "Node-1", "Node-2", "Node-3", "Node-1"]
        );
        for (a, t) in assignments.iter().zip(&tasks) {
            assert_eq!(a.task_id, t.id, "processing order must be input order");
        }
    }

    #[test]
    fn ignores_node_attributes() {
        let mut nodes = make_nodes(2);
        nodes[0].cost = 99.0;
        nodes[0].bandwidth = 10;
        nodes[0].load = 500.0;
        let tasks = vec![make_task("Task-1", 4)];

        let assignments = RoundRobin.assign(&mut nodes, &tasks, &mut seeded_rng()).unwrap();
        assert_eq!(assignments[0].node_id, "Node-1");
        assert_eq!(nodes[0].load, 504.0);
    }

    #[test]
    fn accumulates_workload_per_node() {
        let mut nodes = make_nodes(2);
        let tasks = vec![
            make_task("Task-1", 3),
            make_task("Task-2", 5),
            make_task("Task-3", 7),
        ];
        RoundRobin.assign(&mut nodes, &tasks, &mut seeded_rng()).unwrap();
        assert_eq!(nodes[0].load, 10.0);
        assert_eq!(nodes[1].load, 5.0);
    }
}
