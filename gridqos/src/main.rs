/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use gridqos::model::{EvaluationRecord, Node, Task};
use gridqos::report::Summary;
use gridqos::simulation::AlgorithmSummary;
use gridqos::{Algorithm, Simulation, SimulationConfig, SimulationReport};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Output rendering for a simulation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable tables.
    Table,
    /// The full report as pretty-printed JSON.
    Json,
}

/// Grid resource & QoS management simulator.
///
/// Example:
///   gridqos -n 6 -t 12 -a predictive_qos --seed 42
#[derive(Debug, Parser)]
#[command(
    name = "gridqos",
    about = "Grid resource scheduling simulator with QoS / SLA evaluation",
    long_about = None,
)]
struct Cli {
    /// Path to a YAML simulation configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of grid nodes (3–10).  Overrides the config file.
    #[arg(short = 'n', long = "nodes")]
    nodes: Option<usize>,

    /// Number of tasks (3–15).  Overrides the config file.
    #[arg(short = 't', long = "tasks")]
    tasks: Option<usize>,

    /// Scheduling algorithm: round_robin, shortest_job_first, economic,
    /// predictive_qos_aware.  Overrides the config file.
    #[arg(short = 'a', long = "algorithm")]
    algorithm: Option<Algorithm>,

    /// Seed for reproducible runs.  Overrides the config file.
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Run all four algorithms on the same population and print one summary
    /// per algorithm.
    #[arg(long = "compare", default_value_t = false)]
    compare: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    // Logs go to stderr so stdout carries only the rendered report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    info!(
        node_count = config.node_count,
        task_count = config.task_count,
        algorithm  = %config.algorithm,
        seed       = ?config.seed,
        format     = ?cli.format,
        compare    = cli.compare,
        "Configuration"
    );

    let simulation = Simulation::new(config)?;

    if cli.compare {
        let results = simulation.compare()?;
        match cli.format {
            OutputFormat::Table => print_comparison(&results),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&results).context("Failed to encode comparison")?
            ),
        }
        return Ok(());
    }

    let report = simulation.run()?;
    match cli.format {
        OutputFormat::Table => print_report(&report),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        ),
    }
    Ok(())
}

/// Config file (if any) first, then CLI overrides, then validation.
fn resolve_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load_from_file(path)?,
        None => {
            warn!("No configuration file provided, using default simulation settings");
            SimulationConfig::default()
        }
    };

    if let Some(nodes) = cli.nodes {
        config.node_count = nodes;
    }
    if let Some(tasks) = cli.tasks {
        config.task_count = tasks;
    }
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config.validate().context("Invalid command-line settings")?;
    Ok(config)
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn print_report(report: &SimulationReport) {
    println!("Grid Nodes (Before Scheduling)");
    print_nodes(&report.initial_nodes);

    println!("\nTasks");
    print_tasks(&report.tasks);

    println!("\n{} Scheduling Completed", report.algorithm);
    println!("\nGrid Nodes (After Scheduling)");
    print_nodes(&report.nodes);

    println!("\nSimulation Results");
    print_records(&report.records);

    println!();
    print_summary(&report.summary);
}

fn print_nodes(nodes: &[Node]) {
    println!(
        "{:<8} {:>4} {:>7} {:>10} {:>12} {:>6} {:>7}",
        "id", "CPU", "Memory", "Bandwidth", "Reliability", "Cost", "Load"
    );
    for n in nodes {
        println!(
            "{:<8} {:>4} {:>7} {:>10} {:>12.2} {:>6.2} {:>7}",
            n.id, n.cpu, n.memory, n.bandwidth, n.reliability, n.cost, n.load
        );
    }
}

fn print_tasks(tasks: &[Task]) {
    println!("{:<8} {:>9} {:>9} {:>9}", "id", "Workload", "Priority", "SLA_Time");
    for t in tasks {
        println!(
            "{:<8} {:>9} {:>9} {:>9}",
            t.id,
            t.workload,
            t.priority.as_str(),
            t.sla_time
        );
    }
}

fn print_records(records: &[EvaluationRecord]) {
    println!(
        "{:<8} {:<8} {:>10} {:>16} {:>11} {:>9} {:>9} {:>8} {:>7}",
        "Task",
        "Node",
        "Latency(s)",
        "Throughput(MB/s)",
        "Reliability",
        "QoS Score",
        "Exec Time",
        "SLA Time",
        "SLA Met"
    );
    for r in records {
        println!(
            "{:<8} {:<8} {:>10} {:>16} {:>11.2} {:>9} {:>9.2} {:>8} {:>7}",
            r.task_id,
            r.node_id,
            r.latency,
            r.throughput,
            r.reliability,
            r.qos_score,
            r.exec_time,
            r.sla_time,
            if r.sla_met { "yes" } else { "no" }
        );
    }
}

fn print_summary(summary: &Summary) {
    println!("SLA Success Rate:   {:.1}%", summary.sla_success_percent());
    println!("Average QoS Score:  {:.3}", summary.average_qos);
    println!("Total Virtual Cost: ${:.2}", summary.total_virtual_cost);
}

fn print_comparison(results: &[AlgorithmSummary]) {
    println!(
        "{:<22} {:>10} {:>12} {:>12}",
        "Algorithm", "SLA (%)", "Avg QoS", "Cost ($)"
    );
    for r in results {
        println!(
            "{:<22} {:>10.1} {:>12.3} {:>12.2}",
            r.algorithm.to_string(),
            r.summary.sla_success_percent(),
            r.summary.average_qos,
            r.summary.total_virtual_cost
        );
    }
}
