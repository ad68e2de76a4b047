//! Command-line front end for the Intcode machine.
//!
//! # Usage
//! ```text
//! intcode run <FILE> [--input 1,2,3] [--max-steps N] [--json]
//! intcode disasm <FILE>
//! intcode amplify <FILE> [--feedback]
//! ```
//!
//! Logging goes to stderr. `-v` enables debug output, `-vv` traces every
//! instruction; `RUST_LOG` takes precedence when set.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use intcode_runtime::{best_phase_setting, Machine, Status};
use intcode_spec::{Program, Word};

const CHAIN_PHASES: [Word; 5] = [0, 1, 2, 3, 4];
const FEEDBACK_PHASES: [Word; 5] = [5, 6, 7, 8, 9];

#[derive(Debug, Parser)]
#[command(name = "intcode", version, about = "Run and inspect Intcode programs")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a program until it halts or waits for input
    Run {
        file: PathBuf,

        /// Comma-separated input values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        input: Vec<Word>,

        /// Stop with an error after this many instructions
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print a JSON report instead of raw output
        #[arg(long)]
        json: bool,
    },

    /// Print a disassembly listing
    Disasm { file: PathBuf },

    /// Search amplifier phase settings for the highest signal
    Amplify {
        file: PathBuf,

        /// Wire the amplifiers in a feedback ring (phases 5-9)
        #[arg(long)]
        feedback: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run {
            file,
            input,
            max_steps,
            json,
        } => run(&file, input, max_steps, json),
        Command::Disasm { file } => {
            let program = read_program(&file)?;
            print!("{}", intcode_disassembler::disassemble(&program));
            Ok(())
        }
        Command::Amplify { file, feedback } => amplify(&file, feedback),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_program(path: &Path) -> Result<Program> {
    let text = read_text(path)?;
    Program::load(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn run(path: &Path, input: Vec<Word>, max_steps: Option<u64>, json: bool) -> Result<()> {
    let text = read_text(path)?;
    let mut machine = Machine::load(&text)
        .with_context(|| format!("failed to load {}", path.display()))?
        .with_input(input);
    machine.set_max_steps(max_steps);

    let status = machine
        .run()
        .with_context(|| format!("execution of {} failed", path.display()))?;
    if status == Status::BlockedOnInput {
        warn!(
            pointer = machine.instruction_pointer(),
            "program is waiting for more input"
        );
    }

    let report = machine.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for value in &report.outputs {
            println!("{}", value);
        }
    }
    Ok(())
}

fn amplify(path: &Path, feedback: bool) -> Result<()> {
    let program = read_program(path)?;
    let phases = if feedback {
        FEEDBACK_PHASES
    } else {
        CHAIN_PHASES
    };

    let (signal, ordering) = best_phase_setting(&program, &phases, feedback)
        .context("amplifier search failed")?;
    info!(?ordering, "best phase setting");
    println!("{}", signal);
    Ok(())
}
