//! Gate-level circuit simulator CLI.
//!
//! This binary provides the two simulation modes:
//! 1. **Truth table:** Enumerate every input pattern of a (mostly) combinational netlist.
//! 2. **Run:** Step a clocked netlist cycle by cycle, printing one trace line per
//!    cycle, then tabulate its outputs over the latched state.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gatesim_core::config::Config;
use gatesim_core::{Circuit, Netlist, demo};

#[derive(Parser, Debug)]
#[command(
    name = "gatesim",
    author,
    version,
    about = "Gate-level digital circuit simulator",
    long_about = "Evaluate a netlist of logic gates and flip-flops.\n\nWithout --netlist the built-in demo circuits are used.\n\nExamples:\n  gatesim table\n  gatesim table --netlist adder.json\n  gatesim run --cycles 16\n  gatesim --config sim.json run --netlist counter.json --no-table"
)]
struct Cli {
    /// JSON configuration file (defaults are used for missing fields).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the truth table of a netlist (default: the combinational demo).
    Table {
        /// Netlist JSON file.
        #[arg(short, long)]
        netlist: Option<PathBuf>,
    },

    /// Step a netlist through clock cycles (default: the mixed demo).
    Run {
        /// Netlist JSON file.
        #[arg(short, long)]
        netlist: Option<PathBuf>,

        /// Number of cycles (overrides the configuration).
        #[arg(short, long)]
        cycles: Option<u64>,

        /// Skip the truth table printed after the run.
        #[arg(long)]
        no_table: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(message) = dispatch(cli) {
        eprintln!("[!] {message}");
        process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Table { netlist } => {
            let netlist = netlist
                .as_deref()
                .map_or_else(|| Ok(demo::combinational()), load_netlist)?;
            cmd_table(&netlist, config)
        }
        Commands::Run {
            netlist,
            cycles,
            no_table,
        } => {
            let netlist = netlist
                .as_deref()
                .map_or_else(|| Ok(demo::mixed()), load_netlist)?;
            let cycles = cycles.unwrap_or(config.general.cycles);
            cmd_run(&netlist, config, cycles, !no_table)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read config `{}`: {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| e.to_string())
}

fn load_netlist(path: &Path) -> Result<Netlist, String> {
    let netlist = Netlist::from_path(path).map_err(|e| e.to_string())?;
    debug!(path = %path.display(), gates = netlist.gates.len(), "netlist loaded");
    Ok(netlist)
}

fn build(netlist: &Netlist, config: Config) -> Result<Circuit, String> {
    netlist.build(config).map_err(|e| e.to_string())
}

/// Prints the truth table of `netlist`.
fn cmd_table(netlist: &Netlist, config: Config) -> Result<(), String> {
    let mut circuit = build(netlist, config)?;

    println!("Combinational Circuit Analysis: {}", netlist.name);
    println!("=============================");
    print_table(&mut circuit)
}

/// Steps `netlist` for `cycles` cycles, then optionally tabulates it.
///
/// The table is computed over whatever state the memory elements hold after the run.
fn cmd_run(netlist: &Netlist, config: Config, cycles: u64, table: bool) -> Result<(), String> {
    let trace = config.general.trace_cycles;
    let mut circuit = build(netlist, config)?;

    println!("Digital Circuit Simulation: {}", netlist.name);
    println!("=========================");
    for _ in 0..cycles {
        let report = circuit.run_cycle().map_err(|e| e.to_string())?;
        if trace {
            println!("{report}");
        }
    }

    if table {
        println!("\nTruth table over the current latched state:");
        print_table(&mut circuit)?;
    }
    circuit.stats.print();
    Ok(())
}

fn print_table(circuit: &mut Circuit) -> Result<(), String> {
    let sequential = circuit.sequential_ids().map_err(|e| e.to_string())?.len();
    if sequential > 0 {
        println!(
            "Warning: {sequential} sequential elements keep their current state while the table is enumerated.\n"
        );
    }
    let table = circuit
        .generate_truth_table()
        .map_err(|e| e.to_string())?;
    println!("\n{table}");
    if !table.fully_converged() {
        println!("Warning: rows marked (unsettled) did not reach a fixed point.");
    }
    Ok(())
}
