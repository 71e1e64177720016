/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the grid simulation engine.
//!
//! Two detail enums describe *what* was wrong, one top-level enum describes
//! *where* in the pipeline it went wrong:
//!
//! * [`ConfigViolation`]: which run setting was rejected and why
//!   (carries the offending value and the accepted bounds).
//! * [`EntityKind`]: which population an unresolved id was looked up in.
//! * [`SimulationError`]: returned by every fallible engine stage.
//!
//! | Variant | Stage | Meaning |
//! |---|---|---|
//! | `Configuration` | config / before generation | caller asked for an unsupported run |
//! | `EmptyPool` | scheduler | tasks exist but there is no node to place them on |
//! | `Lookup` | evaluator / report | an assignment names an id that is not in the population |
//! | `EmptyResult` | report | nothing to average over |
//!
//! A failed stage never returns partial output; the caller drops whatever
//! state the run had built so far.

use thiserror::Error;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Detailed reason why a [`SimulationConfig`] was rejected.
///
/// Carried inside [`SimulationError::Configuration`].
///
/// [`SimulationConfig`]: crate::config::SimulationConfig
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigViolation {
    /// Requested node count is outside the supported range.
    NodeCountOutOfRange { value: usize, min: usize, max: usize },

    /// Requested task count is outside the supported range.
    TaskCountOutOfRange { value: usize, min: usize, max: usize },

    /// The algorithm name did not match any of the four strategies.
    UnknownAlgorithm(String),
}

impl std::fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigViolation::NodeCountOutOfRange { value, min, max } => write!(
                f,
                "node count {} is outside the supported range [{}, {}]",
                value, min, max
            ),

            ConfigViolation::TaskCountOutOfRange { value, min, max } => write!(
                f,
                "task count {} is outside the supported range [{}, {}]",
                value, min, max
            ),

            ConfigViolation::UnknownAlgorithm(name) => write!(
                f,
                "unknown scheduling algorithm '{}' (valid: round_robin, shortest_job_first, economic, predictive_qos_aware)",
                name
            ),
        }
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

/// The population an id failed to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Task,
    Node,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Task => write!(f, "task"),
            EntityKind::Node => write!(f, "node"),
        }
    }
}

// ── Top-level errors ──────────────────────────────────────────────────────────

/// Top-level error type returned by the engine stages.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A run setting was rejected before any entity was generated.
    #[error("invalid simulation configuration: {0}")]
    Configuration(ConfigViolation),

    /// The scheduler was handed one or more tasks but no nodes.
    #[error("cannot schedule {task_count} task(s) onto an empty node pool")]
    EmptyPool { task_count: usize },

    /// An assignment references an id that is not present in the supplied
    /// task or node population.
    ///
    /// Always an internal consistency violation: assignments are produced by
    /// the scheduler from the same populations the evaluator reads.
    #[error("{kind} '{id}' referenced by an assignment is not in the supplied population")]
    Lookup { kind: EntityKind, id: String },

    /// The aggregator was given zero records, so the SLA success rate and the
    /// average QoS score are undefined.
    #[error("no evaluation records to aggregate; SLA success rate and average QoS are undefined")]
    EmptyResult,
}

impl From<ConfigViolation> for SimulationError {
    fn from(violation: ConfigViolation) -> Self {
        SimulationError::Configuration(violation)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
