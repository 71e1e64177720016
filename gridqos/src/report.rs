/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Run-level summary statistics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | SLA success rate | met / total, in `[0, 1]` |
//! | Average QoS | mean of `qos_score` |
//! | Total virtual cost | Σ cost of the node each record was placed on |
//!
//! The rate and the average are undefined for zero records; [`aggregate`]
//! reports that as [`SimulationError::EmptyResult`] instead of `NaN`.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{EntityKind, SimulationError};
use crate::math::mean;
use crate::model::{EvaluationRecord, Node};

/// Aggregate indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of evaluation records summarised.
    pub record_count: usize,
    /// Records whose execution time fit the SLA budget.
    pub sla_met_count: usize,
    /// `sla_met_count / record_count` (0.0..=1.0).
    pub sla_success_rate: f64,
    /// Mean QoS score.
    pub average_qos: f64,
    /// Sum of the cost of each record's node.
    pub total_virtual_cost: f64,
}

impl Summary {
    /// SLA success rate as a percentage (0.0..=100.0).
    pub fn sla_success_percent(&self) -> f64 {
        self.sla_success_rate * 100.0
    }
}

/// Reduce `records` to a [`Summary`].
///
/// # Errors
/// * [`SimulationError::EmptyResult`] when `records` is empty.
/// * [`SimulationError::Lookup`] when a record's node id is not in `nodes`.
pub fn aggregate(records: &[EvaluationRecord], nodes: &[Node]) -> Result<Summary, SimulationError> {
    let average_qos = mean(records.iter().map(|r| r.qos_score)).ok_or(SimulationError::EmptyResult)?;

    let cost_by_node: HashMap<&str, f64> = nodes.iter().map(|n| (n.id.as_str(), n.cost)).collect();
    let mut total_virtual_cost = 0.0_f64;
    for record in records {
        let cost = cost_by_node
            .get(record.node_id.as_str())
            .ok_or_else(|| SimulationError::Lookup {
                kind: EntityKind::Node,
                id: record.node_id.clone(),
            })?;
        total_virtual_cost += *cost;
    }

    let record_count = records.len();
    let sla_met_count = records.iter().filter(|r| r.sla_met).count();
    let summary = Summary {
        record_count,
        sla_met_count,
        sla_success_rate: sla_met_count as f64 / record_count as f64,
        average_qos,
        total_virtual_cost,
    };

    if sla_met_count == 0 {
        warn!(records = record_count, "no assignment met its SLA");
    }
    info!(
        sla_success_rate   = summary.sla_success_rate,
        average_qos        = summary.average_qos,
        total_virtual_cost = summary.total_virtual_cost,
        "summary computed"
    );

    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
