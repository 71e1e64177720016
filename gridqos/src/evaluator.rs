/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Per-assignment QoS / SLA evaluation.
//!
//! # Metrics
//!
//! | Metric | Definition | Rounding |
//! |--------|-----------|----------|
//! | Latency | `U(0.1, 1.5) × 10 / bandwidth` | 3 dp |
//! | Throughput | `bandwidth / (workload + 1)` | 2 dp |
//! | Exec time | `workload / cpu` | none |
//! | Reliability | node value at evaluation time | none |
//! | QoS score | `throughput × reliability / (1 + latency)` | 3 dp |
//! | SLA met | `exec_time ≤ sla_time` | — |
//!
//! The latency jitter is the only random input.  [`score_assignment`] takes
//! the jitter as a parameter and is otherwise pure, so identical inputs and an
//! identical draw always produce an identical record.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{EntityKind, SimulationError};
use crate::math::round_to;
use crate::model::{Assignment, EvaluationRecord, Node, Task, MIN_BANDWIDTH, MIN_CPU};

/// Range of the per-record latency multiplier.
pub const LATENCY_JITTER: RangeInclusive<f64> = 0.1..=1.5;

/// Numerator of the bandwidth-to-latency conversion.
pub const LATENCY_SCALE: f64 = 10.0;

/// Evaluate every assignment, drawing one latency jitter per record.
///
/// Output order matches `assignments`.  Nodes and tasks are only read.
///
/// # Errors
/// [`SimulationError::Lookup`] if an assignment names a task or node id that is
/// not present in `tasks` / `nodes`.  Nothing is returned for the assignments
/// that did resolve.
pub fn evaluate<R: Rng + ?Sized>(
    assignments: &[Assignment],
    tasks: &[Task],
    nodes: &[Node],
    rng: &mut R,
) -> Result<Vec<EvaluationRecord>, SimulationError> {
    let task_index: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();
    let node_index: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut records = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let task = task_index
            .get(assignment.task_id.as_str())
            .ok_or_else(|| SimulationError::Lookup {
                kind: EntityKind::Task,
                id: assignment.task_id.clone(),
            })?;
        let node = node_index
            .get(assignment.node_id.as_str())
            .ok_or_else(|| SimulationError::Lookup {
                kind: EntityKind::Node,
                id: assignment.node_id.clone(),
            })?;

        let jitter = rng.random_range(LATENCY_JITTER);
        let record = score_assignment(task, node, jitter);
        debug!(
            task       = %record.task_id,
            node       = %record.node_id,
            latency    = record.latency,
            throughput = record.throughput,
            qos        = record.qos_score,
            sla_met    = record.sla_met,
            "assignment evaluated"
        );
        records.push(record);
    }

    info!(
        records = records.len(),
        sla_met = records.iter().filter(|r| r.sla_met).count(),
        "evaluation complete"
    );
    Ok(records)
}

/// Compute the record for `task` on `node` given a latency `jitter` draw.
pub fn score_assignment(task: &Task, node: &Node, jitter: f64) -> EvaluationRecord {
    let bandwidth = f64::from(node.bandwidth.max(MIN_BANDWIDTH));
    let workload = f64::from(task.workload);

    let latency = round_to(jitter * (LATENCY_SCALE / bandwidth), 3);
    let throughput = round_to(bandwidth / (workload + 1.0), 2);
    let exec_time = workload / f64::from(node.cpu.max(MIN_CPU));
    let reliability = node.reliability;
    let qos_score = round_to((throughput * reliability) / (1.0 + latency), 3);

    EvaluationRecord {
        task_id: task.id.clone(),
        node_id: node.id.clone(),
        latency,
        throughput,
        reliability,
        qos_score,
        exec_time,
        sla_time: task.sla_time,
        sla_met: exec_time <= f64::from(task.sla_time),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_node() -> Node {
        Node::new("Node-1", 5, 16, 100, 0.9, 2.0)
    }

    fn reference_task() -> Task {
        Task::new("Task-1", 5, Priority::High, 2)
    }

    #[test]
    fn reference_case_meets_sla() {
        let record = score_assignment(&reference_task(), &reference_node(), 1.0);
        assert_eq!(record.exec_time, 1.0);
        assert!(record.sla_met);
        assert_eq!(record.throughput, 16.67);
        assert_eq!(record.reliability, 0.9);
        assert_eq!(record.sla_time, 2);
    }

    #[test]
    fn latency_and_qos_follow_the_formulas() {
        // jitter 1.0 → latency = 10 / 100 = 0.1
        // qos = 16.67 × 0.9 / 1.1 = 13.639...
        let record = score_assignment(&reference_task(), &reference_node(), 1.0);
        assert_eq!(record.latency, 0.1);
        assert_eq!(record.qos_score, 13.639);
    }

    #[test]
    fn latency_is_rounded_to_three_places() {
        let node = Node::new("Node-1", 5, 16, 70, 0.9, 2.0);
        // 1.3 × 10 / 70 = 0.185714...
        let record = score_assignment(&reference_task(), &node, 1.3);
        assert_eq!(record.latency, 0.186);
    }

    #[test]
    fn exec_time_over_budget_misses_sla() {
        let node = Node::new("Node-1", 2, 16, 100, 0.9, 2.0);
        let task = Task::new("Task-1", 9, Priority::Low, 4);
        let record = score_assignment(&task, &node, 0.5);
        assert_eq!(record.exec_time, 4.5);
        assert!(!record.sla_met);
    }

    #[test]
    fn exec_time_equal_to_budget_meets_sla() {
        let node = Node::new("Node-1", 2, 16, 100, 0.9, 2.0);
        let task = Task::new("Task-1", 8, Priority::Low, 4);
        assert!(score_assignment(&task, &node, 0.5).sla_met);
    }

    #[test]
    fn zeroed_node_fields_are_scored_at_their_minimums() {
        let mut node = reference_node();
        node.cpu = 0;
        node.bandwidth = 0;
        let record = score_assignment(&reference_task(), &node, 1.0);
        // cpu 1, bandwidth 10
        assert_eq!(record.exec_time, 5.0);
        assert_eq!(record.latency, 1.0);
        assert_eq!(record.throughput, 1.67);
        assert!(!record.sla_met);
    }

    #[test]
    fn evaluate_preserves_assignment_order() {
        let nodes = vec![reference_node(), Node::new("Node-2", 3, 8, 60, 0.8, 1.0)];
        let tasks = vec![
            reference_task(),
            Task::new("Task-2", 4, Priority::Low, 6),
        ];
        let assignments = vec![
            Assignment::new("Task-2", "Node-1"),
            Assignment::new("Task-1", "Node-2"),
        ];

        let records =
            evaluate(&assignments, &tasks, &nodes, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!((records[0].task_id.as_str(), records[0].node_id.as_str()), ("Task-2", "Node-1"));
        assert_eq!((records[1].task_id.as_str(), records[1].node_id.as_str()), ("Task-1", "Node-2"));
        for r in &records {
            assert!(r.latency > 0.0);
        }
    }

    #[test]
    fn evaluate_is_idempotent_for_identical_draws() {
        let nodes = vec![reference_node()];
        let tasks = vec![reference_task()];
        let assignments = vec![Assignment::new("Task-1", "Node-1")];

        let a = evaluate(&assignments, &tasks, &nodes, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = evaluate(&assignments, &tasks, &nodes, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn latency_stays_within_jitter_bounds() {
        let nodes = vec![reference_node()];
        let tasks = vec![reference_task()];
        let assignments = vec![Assignment::new("Task-1", "Node-1"); 100];

        let records =
            evaluate(&assignments, &tasks, &nodes, &mut StdRng::seed_from_u64(5)).unwrap();
        for r in records {
            assert!((0.01..=0.15).contains(&r.latency), "latency {}", r.latency);
        }
    }

    #[test]
    fn unknown_task_is_a_lookup_error() {
        let err = evaluate(
            &[Assignment::new("Task-404", "Node-1")],
            &[reference_task()],
            &[reference_node()],
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Lookup { kind: EntityKind::Task, ref id } if id == "Task-404"
        ));
    }

    #[test]
    fn unknown_node_is_a_lookup_error() {
        let err = evaluate(
            &[Assignment::new("Task-1", "Node-404")],
            &[reference_task()],
            &[reference_node()],
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Lookup { kind: EntityKind::Node, .. }
        ));
    }

    #[test]
    fn no_assignments_yield_no_records() {
        let records = evaluate(&[], &[], &[], &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(records.is_empty());
    }
}
