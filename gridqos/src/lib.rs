/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! gridqos – grid resource scheduling simulator
//!
//! Module layout, in pipeline order:
//!
//! ```text
//! lib.rs
//! ├── config/      – validated run settings, optional YAML file
//! ├── generator    – synthetic node / task populations
//! ├── scheduler/   – four placement strategies behind one trait
//! ├── evaluator    – per-assignment QoS / SLA records
//! ├── report       – SLA success rate, average QoS, total cost
//! ├── simulation   – generate → schedule → evaluate → aggregate
//! ├── model        – Node, Task, Assignment, EvaluationRecord
//! ├── error        – SimulationError
//! └── math         – rounding / mean helpers
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod math;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use scheduler::{Algorithm, GridScheduler};
pub use simulation::{Simulation, SimulationReport};
