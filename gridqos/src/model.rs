/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data structures for the grid simulation engine.
//!
//! Four types model the pipeline:
//!
//! ```text
//! generator ──► Node, Task ──(scheduler)──► Assignment ──(evaluator)──► EvaluationRecord
//!                 ↑ Node mutated in place                                 ↑ read-only
//! ```
//!
//! # Ownership model
//! `Vec<Node>` is **moved** into the scheduler for the duration of one run and
//! handed back with the assignments.  A caller that wants the pre-scheduling
//! view clones the vector first; the compiler guarantees the scheduler never
//! writes through an alias of that snapshot.

use serde::{Deserialize, Serialize};

// ── Node invariants ───────────────────────────────────────────────────────────

/// Lowest CPU capacity a node may drift down to.
pub const MIN_CPU: u32 = 1;

/// Lowest bandwidth a node may drift down to.
pub const MIN_BANDWIDTH: u32 = 10;

/// Reliability floor while drifting.
pub const MIN_RELIABILITY: f64 = 0.70;

/// Reliability ceiling while drifting.
pub const MAX_RELIABILITY: f64 = 0.99;

// ── Priority ──────────────────────────────────────────────────────────────────

/// Task priority class.
///
/// Generated and carried through every stage, but not consumed by any of the
/// current scheduling strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priority classes, in the order the generator draws from.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// One simulated grid resource provider.
///
/// # Invariants
/// * `load ≥ 0` and only ever increases during a run.
/// * `cpu ≥ MIN_CPU`, `bandwidth ≥ MIN_BANDWIDTH`.
/// * `reliability ∈ [MIN_RELIABILITY, MAX_RELIABILITY]` once drifted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// `Node-<1-based index>`.
    pub id: String,

    /// Capacity units.  Drifts under the predictive strategy.
    pub cpu: u32,

    /// Memory units.  Static; not used by any strategy.
    pub memory: u32,

    /// Throughput capacity.  Drifts under the predictive strategy.
    pub bandwidth: u32,

    /// Fraction in `[0, 1]`.  Drifts under the predictive strategy.
    pub reliability: f64,

    /// Virtual price per assignment.  Static per run.
    pub cost: f64,

    /// Cumulative workload placed on this node by the scheduler.
    pub load: f64,
}

impl Node {
    /// A node with zero load.
    ///
    /// `cpu` and `bandwidth` are raised to [`MIN_CPU`] and [`MIN_BANDWIDTH`]
    /// when given below them.
    pub fn new(
        id: impl Into<String>,
        cpu: u32,
        memory: u32,
        bandwidth: u32,
        reliability: f64,
        cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            cpu: cpu.max(MIN_CPU),
            memory,
            bandwidth: bandwidth.max(MIN_BANDWIDTH),
            reliability,
            cost,
            load: 0.0,
        }
    }

    /// Add a task's workload to this node's cumulative load.
    pub fn add_load(&mut self, workload: u32) {
        self.load += f64::from(workload);
    }

    /// Predictive placement score: `bandwidth × reliability − load`.
    ///
    /// Higher is better.
    pub fn predictive_score(&self) -> f64 {
        f64::from(self.bandwidth) * self.reliability - self.load
    }
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// One unit of work to place on a node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Task {
    /// `Task-<1-based index>`.
    pub id: String,

    /// Demand units (positive).
    pub workload: u32,

    pub priority: Priority,

    /// Maximum acceptable execution time, in simulated time units.
    pub sla_time: u32,
}

impl Task {
    pub fn new(id: impl Into<String>, workload: u32, priority: Priority, sla_time: u32) -> Self {
        Self {
            id: id.into(),
            workload,
            priority,
            sla_time,
        }
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// A `(task, node)` placement decision.
///
/// A sequence of assignments is ordered by the order the scheduler processed
/// tasks, which is not necessarily task id order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Assignment {
    pub task_id: String,
    pub node_id: String,
}

impl Assignment {
    pub fn new(task_id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            node_id: node_id.into(),
        }
    }
}

// ── EvaluationRecord ──────────────────────────────────────────────────────────

/// QoS / SLA metrics for one assignment.
///
/// Produced once by the evaluator and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub task_id: String,
    pub node_id: String,

    /// Seconds, 3 dp.
    pub latency: f64,

    /// MB/s, 2 dp.
    pub throughput: f64,

    /// Node reliability at evaluation time.
    pub reliability: f64,

    /// `throughput × reliability / (1 + latency)`, 3 dp.
    pub qos_score: f64,

    /// `workload / cpu`, unrounded.
    pub exec_time: f64,

    pub sla_time: u32,

    /// `exec_time ≤ sla_time`.
    pub sla_met: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
