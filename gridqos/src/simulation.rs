/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! One end-to-end simulation run.
//!
//! ```text
//! SimulationConfig ─► generate ─► (snapshot clone) ─► schedule ─► evaluate ─► aggregate ─► SimulationReport
//! ```
//!
//! Every stage runs sequentially on entities owned by the run; nothing is
//! shared with or carried over from a previous run.  If any stage fails the
//! whole run returns the error and all intermediate state is dropped.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::evaluator::evaluate;
use crate::generator::{generate_nodes, generate_tasks};
use crate::model::{Assignment, EvaluationRecord, Node, Task};
use crate::report::{aggregate, Summary};
use crate::scheduler::{Algorithm, GridScheduler};

/// Everything one run produced, in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    pub seed: Option<u64>,

    /// Node pool as generated, before the scheduler touched it.
    pub initial_nodes: Vec<Node>,

    /// Node pool after scheduling.
    pub nodes: Vec<Node>,

    pub tasks: Vec<Task>,
    pub assignments: Vec<Assignment>,
    pub records: Vec<EvaluationRecord>,
    pub summary: Summary,
}

/// One algorithm's summary within a [`Simulation::compare`] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub summary: Summary,
}

/// A validated simulation, ready to run.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// # Errors
    /// [`SimulationError::Configuration`] if `config` fails validation.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run with a random source seeded from the configuration (or from the
    /// OS when no seed is configured).
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        let mut rng = self.rng();
        self.run_with(&mut rng)
    }

    /// Run with an explicit random source.
    pub fn run_with<R: RngCore>(&self, rng: &mut R) -> Result<SimulationReport, SimulationError> {
        let cfg = &self.config;
        info!(
            algorithm  = %cfg.algorithm,
            node_count = cfg.node_count,
            task_count = cfg.task_count,
            seed       = ?cfg.seed,
            "=== Simulation starting ==="
        );

        let initial_nodes = generate_nodes(cfg.node_count, rng);
        let tasks = generate_tasks(cfg.task_count, rng);

        let outcome =
            GridScheduler::new(cfg.algorithm).schedule(initial_nodes.clone(), &tasks, rng)?;
        let records = evaluate(&outcome.assignments, &tasks, &outcome.nodes, rng)?;
        let summary = aggregate(&records, &outcome.nodes)?;

        info!(
            algorithm          = %cfg.algorithm,
            sla_success_pct    = summary.sla_success_percent(),
            average_qos        = summary.average_qos,
            total_virtual_cost = summary.total_virtual_cost,
            "=== Simulation complete ==="
        );

        Ok(SimulationReport {
            algorithm: cfg.algorithm,
            seed: cfg.seed,
            initial_nodes,
            nodes: outcome.nodes,
            tasks,
            assignments: outcome.assignments,
            records,
            summary,
        })
    }

    /// Run every algorithm against clones of one generated population.
    ///
    /// The configured algorithm is ignored; the populations are generated once
    /// so the summaries differ only by strategy (and the draws it consumes).
    pub fn compare(&self) -> Result<Vec<AlgorithmSummary>, SimulationError> {
        let mut rng = self.rng();
        let cfg = &self.config;

        let nodes = generate_nodes(cfg.node_count, &mut rng);
        let tasks = generate_tasks(cfg.task_count, &mut rng);

        Algorithm::ALL
            .iter()
            .map(|&algorithm| -> Result<AlgorithmSummary, SimulationError> {
                let outcome =
                    GridScheduler::new(algorithm).schedule(nodes.clone(), &tasks, &mut rng)?;
                let records = evaluate(&outcome.assignments, &tasks, &outcome.nodes, &mut rng)?;
                let summary = aggregate(&records, &outcome.nodes)?;
                info!(
                    algorithm       = %algorithm,
                    sla_success_pct = summary.sla_success_percent(),
                    average_qos     = summary.average_qos,
                    "comparison entry"
                );
                Ok(AlgorithmSummary { algorithm, summary })
            })
            .collect()
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
