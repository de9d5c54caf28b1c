//! i860-subset simulator CLI.
//!
//! This binary reads a hex memory image and runs it to `halt`. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, then flag overrides.
//! 2. **Loading:** Hex words from a file, or from stdin when no path is given.
//! 3. **Reporting:** Optional instruction trace and register dumps, then the statistics blocks.
//!
//! Exit status is 0 after `halt`, 255 for an unknown instruction, 134 for any
//! other fatal run error, and 1 when the image or configuration cannot be read.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use i860sim_core::common::SimError;
use i860sim_core::config::{Config, ReplacementPolicy, StoreAddressing};
use i860sim_core::core::cpu::MemAccess;
use i860sim_core::isa::disassemble;
use i860sim_core::sim::StepOutcome;
use i860sim_core::Simulator;

/// Exit status for unreadable images or configuration files.
const EXIT_USAGE: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "i860-subset instruction simulator with a pseudo-LRU cache model",
    long_about = "Reads 32-bit hex words (one program image) from a file or stdin, places them at \
                  address 0, and executes until halt.\n\nExamples:\n  sim prog.hex\n  sim -t < prog.hex\n  \
                  sim -v --policy lru --config sim.json prog.hex"
)]
struct Cli {
    /// Print an instruction trace and the final registers.
    #[arg(short, long)]
    trace: bool,

    /// Print the trace, the loaded image, and the registers after every instruction.
    #[arg(short, long)]
    verbose: bool,

    /// JSON configuration file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the cache model.
    #[arg(long)]
    no_cache: bool,

    /// Effective-address variant for st.l.
    #[arg(long, value_enum)]
    store_addressing: Option<StoreAddressingArg>,

    /// Replacement policy for full cache sets.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Abort after this many instructions.
    #[arg(long)]
    max_instructions: Option<u64>,

    /// Memory image (hex words); stdin when omitted.
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StoreAddressingArg {
    SignExtend16,
    ByteMasked,
}

impl From<StoreAddressingArg> for StoreAddressing {
    fn from(arg: StoreAddressingArg) -> Self {
        match arg {
            StoreAddressingArg::SignExtend16 => Self::SignExtend16,
            StoreAddressingArg::ByteMasked => Self::ByteMasked,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Plru,
    Lru,
}

impl From<PolicyArg> for ReplacementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Plru => Self::Plru,
            PolicyArg::Lru => Self::Lru,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(EXIT_USAGE);
    });

    process::exit(run(&config, cli.input.as_ref()));
}

/// Applies flag overrides on top of the defaults or the JSON file.
fn build_config(cli: &Cli) -> Result<Config, i860sim_core::common::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if cli.trace || cli.verbose {
        config.general.trace_instructions = true;
    }
    if cli.verbose {
        config.general.dump_registers = true;
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }
    if let Some(arg) = cli.store_addressing {
        config.execution.store_addressing = arg.into();
    }
    if let Some(arg) = cli.policy {
        config.cache.policy = arg.into();
    }
    if cli.max_instructions.is_some() {
        config.execution.max_instructions = cli.max_instructions;
    }
    Ok(config)
}

/// Loads the image, runs it, prints the report, and returns the exit status.
fn run(config: &Config, input: Option<&PathBuf>) -> i32 {
    let trace = config.general.trace_instructions;
    let dump = config.general.dump_registers;
    let mut sim = Simulator::new(config);

    if dump {
        let source = input.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
        println!("reading words in hex from {source}:");
    }
    let loaded = match input {
        Some(path) => sim.load_file(path),
        None => sim.load_from_reader(io::stdin().lock()),
    };
    let image = match loaded {
        Ok(image) => image,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_USAGE;
        }
    };
    if dump {
        for word in &image {
            println!("  0{word:08x}");
        }
        println!();
    }

    if trace {
        println!("instruction trace:");
    }
    while !sim.is_halted() {
        match sim.step() {
            Ok(outcome) => {
                if trace {
                    print_step(&outcome);
                }
                if dump || (trace && outcome.halted) {
                    print!("{}", sim.cpu.register_dump());
                }
            }
            Err(err) => return report_failure(&err, trace),
        }
    }

    if trace {
        println!();
    }
    print!("{}", sim.summary());
    0
}

/// Prints one trace line plus the data access it made.
fn print_step(outcome: &StepOutcome) {
    println!("at {:02x}, {}", outcome.pc, disassemble(outcome.word));
    if let Some(MemAccess { kind, addr, .. }) = outcome.access {
        println!("  {kind} access at address {:x}", addr as u32);
    }
}

/// Reports a fatal run error and returns its exit status.
fn report_failure(err: &SimError, trace: bool) -> i32 {
    match unknown_opcode_report(err, trace) {
        Some(report) => print!("{report}"),
        None => error!("{err}"),
    }
    err.exit_code()
}

/// Diagnostic text for an unknown instruction, `None` for any other error.
///
/// In trace mode the report completes the pending `at NN, ` trace line.
fn unknown_opcode_report(err: &SimError, trace: bool) -> Option<String> {
    let SimError::UnknownOpcode {
        pc,
        word,
        opcode,
        d,
        s1,
        s2,
    } = *err
    else {
        return None;
    };
    let prefix = if trace {
        format!("at {pc:02x}, ")
    } else {
        String::new()
    };
    Some(format!(
        "{prefix}unknown instruction {word:08x}\n op1={opcode:x} d={d:x} s1={s1:x} s2={s2:x}\nprogram terminates\n"
    ))
}
