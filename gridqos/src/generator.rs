/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Synthetic node and task populations.
//!
//! Every numeric field is drawn independently and uniformly from a fixed
//! range.  The random source is a parameter: seeding it identically
//! reproduces identical populations.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::math::round_to;
use crate::model::{Node, Priority, Task};

// ── Ranges ────────────────────────────────────────────────────────────────────

pub const CPU_RANGE: RangeInclusive<u32> = 2..=10;
pub const MEMORY_RANGE: RangeInclusive<u32> = 8..=32;
pub const BANDWIDTH_RANGE: RangeInclusive<u32> = 50..=150;
/// Rounded to 2 dp after drawing.
pub const RELIABILITY_RANGE: RangeInclusive<f64> = 0.85..=0.99;
/// Rounded to 2 dp after drawing.
pub const COST_RANGE: RangeInclusive<f64> = 0.5..=3.0;

pub const WORKLOAD_RANGE: RangeInclusive<u32> = 3..=10;
pub const SLA_TIME_RANGE: RangeInclusive<u32> = 3..=9;

// ── Public API ────────────────────────────────────────────────────────────────

/// Generate `count` nodes named `Node-1` .. `Node-<count>`, all unloaded.
///
/// `count == 0` yields an empty vector.
pub fn generate_nodes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Node> {
    let nodes: Vec<Node> = (1..=count)
        .map(|i| {
            let cpu = rng.random_range(CPU_RANGE);
            let memory = rng.random_range(MEMORY_RANGE);
            let bandwidth = rng.random_range(BANDWIDTH_RANGE);
            let reliability = round_to(rng.random_range(RELIABILITY_RANGE), 2);
            let cost = round_to(rng.random_range(COST_RANGE), 2);
            Node::new(format!("Node-{i}"), cpu, memory, bandwidth, reliability, cost)
        })
        .collect();

    for node in &nodes {
        debug!(
            node        = %node.id,
            cpu         = node.cpu,
            memory      = node.memory,
            bandwidth   = node.bandwidth,
            reliability = node.reliability,
            cost        = node.cost,
            "node generated"
        );
    }
    nodes
}

/// Generate `count` tasks named `Task-1` .. `Task-<count>`.
///
/// `count == 0` yields an empty vector.
pub fn generate_tasks<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Task> {
    let tasks: Vec<Task> = (1..=count)
        .map(|i| {
            let workload = rng.random_range(WORKLOAD_RANGE);
            let priority = Priority::ALL[rng.random_range(0..Priority::ALL.len())];
            let sla_time = rng.random_range(SLA_TIME_RANGE);
            Task::new(format!("Task-{i}"), workload, priority, sla_time)
        })
        .collect();

    for task in &tasks {
        debug!(
            task     = %task.id,
            workload = task.workload,
            priority = %task.priority,
            sla_time = task.sla_time,
            "task generated"
        );
    }
    tasks
}

// ── Tests ─────────────────────────────────────────────────────────────────────
