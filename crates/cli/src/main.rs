//! Memory allocation simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Dynamic run:** Place processes into contiguous memory under a fit policy.
//! 2. **Fixed run:** Place processes into predeclared fixed-size partitions.
//! 3. **Comparison:** Run first, best, and worst fit over the same scenario side by side.
//!
//! Scenarios are JSON files (see `memsim_core::Config`); without one the
//! built-in demo scenario is used. Traces can be exported as JSON for replay.

mod text;

use clap::{Parser, Subcommand};
use std::{fs, process};

use memsim_core::render::Render;
use memsim_core::sim::{ComparisonTrace, Trace, generate_partition_trace, generate_trace};
use memsim_core::stats::{self, FrameStats};
use memsim_core::{Config, FitPolicy};
use text::TextRenderer;

/// Width of the text memory bar, in characters.
const BAR_WIDTH: usize = 64;

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    version,
    about = "Memory allocation simulator",
    long_about = "Simulate contiguous dynamic partitioning (first/best/worst fit over holes)\nor fixed static partitioning, and replay or export the resulting trace.\n\nScenarios are JSON files; without --input the built-in demo scenario is used.\n\nExamples:\n  memsim run --policy best\n  memsim run -i scenario.json --export trace.json\n  memsim fixed -i scenario.json\n  memsim compare --dynamic"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dynamic-partitioning run (holes, splitting, merging).
    Run {
        /// Scenario JSON file; demo scenario when omitted.
        #[arg(short, long)]
        input: Option<String>,

        /// Fit policy (first, best, worst); overrides the scenario's.
        #[arg(short, long)]
        policy: Option<FitPolicy>,

        /// Memory capacity in KB; overrides the scenario's.
        #[arg(long)]
        capacity: Option<u64>,

        /// Write the trace as JSON to this path.
        #[arg(long)]
        export: Option<String>,
    },

    /// Fixed-partition run (predeclared slots, no splitting).
    Fixed {
        /// Scenario JSON file; demo scenario when omitted.
        #[arg(short, long)]
        input: Option<String>,

        /// Fit policy (first, best, worst); overrides the scenario's.
        #[arg(short, long)]
        policy: Option<FitPolicy>,

        /// Write the trace as JSON to this path.
        #[arg(long)]
        export: Option<String>,
    },

    /// Run first, best, and worst fit over the same scenario.
    Compare {
        /// Scenario JSON file; demo scenario when omitted.
        #[arg(short, long)]
        input: Option<String>,

        /// Compare over dynamic memory instead of fixed partitions.
        #[arg(long)]
        dynamic: bool,

        /// Write all three traces as JSON to this path.
        #[arg(long)]
        export: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            input,
            policy,
            capacity,
            export,
        }) => cmd_run(input, policy, capacity, export),
        Some(Commands::Fixed {
            input,
            policy,
            export,
        }) => cmd_fixed(input, policy, export),
        Some(Commands::Compare {
            input,
            dynamic,
            export,
        }) => cmd_compare(input, dynamic, export),
        None => {
            eprintln!("memsim — pass a subcommand");
            eprintln!();
            eprintln!("  memsim run                 Dynamic-partitioning demo run");
            eprintln!("  memsim run -i scenario.json --policy best");
            eprintln!("  memsim fixed               Fixed-partition demo run");
            eprintln!("  memsim compare             First vs best vs worst fit");
            eprintln!();
            eprintln!("  memsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Loads a scenario file, or the demo scenario when `input` is `None`.
fn load_config(input: Option<&str>) -> Config {
    let Some(path) = input else {
        return Config::default();
    };
    let data = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Error reading scenario {path}: {err}");
        process::exit(1);
    });
    serde_json::from_str(&data).unwrap_or_else(|err| {
        eprintln!("Error parsing scenario {path}: {err}");
        process::exit(1);
    })
}

/// Prints the event log, renders the final frame, and prints the report.
fn replay(trace: &Trace) {
    for frame in trace {
        println!("[t={}] {}", frame.tick, frame.event);
    }
    println!();
    if let Some(last) = trace.last() {
        let mut renderer = TextRenderer::new(BAR_WIDTH);
        renderer.render(&last.state, None);
        println!();
    }
    stats::print(trace);
}

/// Writes pretty-printed JSON to `path`, exiting on failure.
fn export_json(path: &str, json: serde_json::Result<String>) {
    let json = json.unwrap_or_else(|err| {
        eprintln!("Error serializing trace: {err}");
        process::exit(1);
    });
    fs::write(path, json).unwrap_or_else(|err| {
        eprintln!("Error writing {path}: {err}");
        process::exit(1);
    });
    println!("Trace written to {path}");
}

/// Runs the dynamic-partitioning simulation.
fn cmd_run(
    input: Option<String>,
    policy: Option<FitPolicy>,
    capacity: Option<u64>,
    export: Option<String>,
) {
    let mut config = load_config(input.as_deref());
    if let Some(policy) = policy {
        config.policy = policy;
    }
    if let Some(capacity) = capacity {
        config.capacity = capacity;
    }

    println!(
        "Scenario: {} KB memory, {} process(es), {} fit",
        config.capacity,
        config.processes.len(),
        config.policy
    );
    println!();

    let trace =
        generate_trace(config.capacity, &config.processes, config.policy).unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            process::exit(1);
        });
    replay(&trace);
    if let Some(path) = export {
        export_json(&path, trace.to_json_pretty());
    }
}

/// Runs the fixed-partition simulation.
fn cmd_fixed(input: Option<String>, policy: Option<FitPolicy>, export: Option<String>) {
    let mut config = load_config(input.as_deref());
    if let Some(policy) = policy {
        config.policy = policy;
    }

    println!(
        "Scenario: {} partition(s), {} process(es), {} fit",
        config.partitions.len(),
        config.processes.len(),
        config.policy
    );
    println!();

    let trace = generate_partition_trace(&config.partitions, &config.processes, config.policy)
        .unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            process::exit(1);
        });
    replay(&trace);
    if let Some(path) = export {
        export_json(&path, trace.to_json_pretty());
    }
}

/// Runs all three policies and prints a per-policy summary.
fn cmd_compare(input: Option<String>, dynamic: bool, export: Option<String>) {
    let config = load_config(input.as_deref());

    let comparison = if dynamic {
        ComparisonTrace::dynamic(config.capacity, &config.processes)
    } else {
        ComparisonTrace::fixed(&config.partitions, &config.processes)
    }
    .unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(1);
    });

    println!(
        "Comparison over {} ({} process(es), {} step(s) max)",
        if dynamic {
            "dynamic memory"
        } else {
            "fixed partitions"
        },
        config.processes.len(),
        comparison.max_len()
    );
    println!();

    let mut renderer = TextRenderer::new(BAR_WIDTH);
    for (policy, trace) in comparison.traces() {
        let Some(last) = trace.last() else { continue };
        println!(
            "{policy} fit: {} step(s), utilization {}%",
            trace.len(),
            FrameStats::of(&last.state).utilization()
        );
        renderer.render(&last.state, None);
        println!();
    }

    if let Some(path) = export {
        export_json(&path, comparison.to_json_pretty());
    }
}
