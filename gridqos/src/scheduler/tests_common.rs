use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::model::{Node, Priority, Task};

/// `count` identical, unloaded nodes named `Node-1` .. `Node-<count>`.
pub fn make_nodes(count: usize) -> Vec<Node> {
    (1..=count)
        .map(|i| Node::new(format!("Node-{i}"), 4, 16, 100, 0.9, 1.0))
        .collect()
}

/// Unloaded node with a specific cost.
pub fn node_with_cost(id: &str, cost: f64) -> Node {
    Node::new(id, 4, 16, 100, 0.9, cost)
}

pub fn make_task(id: &str, workload: u32) -> Task {
    Task::new(id, workload, Priority::Medium, 5)
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}
