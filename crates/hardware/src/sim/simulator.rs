//! Simulator: owns the CPU and drives the interpreter loop.
//!
//! The simulator is the only owner of the machine state. Front ends either
//! call [`Simulator::run`] to execute until `halt`, or call
//! [`Simulator::step`] in a loop to observe every instruction.

use std::fmt;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use crate::common::constants::NUM_REGS;
use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::MemAccess;
use crate::isa::decode::Opcode;
use crate::sim::loader;
use crate::stats::{CacheStats, SimStats};

/// Observation of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Decoded opcode.
    pub opcode: Opcode,
    /// The instruction was `halt`.
    pub halted: bool,
    /// Data access made by the instruction, if any.
    pub access: Option<MemAccess>,
}

/// Final machine state and counters of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Register file after the last instruction.
    pub regs: [i32; NUM_REGS],
    /// Condition-code bit after the last instruction.
    pub cc: bool,
    /// Execution counters.
    pub stats: SimStats,
    /// Cache counters, absent when cache modeling is disabled.
    pub cache: Option<CacheStats>,
}

impl fmt::Display for RunSummary {
    /// Execution statistics followed by cache statistics when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stats)?;
        if let Some(cache) = &self.cache {
            write!(f, "{cache}")?;
        }
        Ok(())
    }
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Machine state.
    pub cpu: Cpu,
    load_limit: usize,
    max_instructions: Option<u64>,
    last: Option<StepOutcome>,
    failed: Option<SimError>,
}

impl Simulator {
    /// Creates a simulator with a reset CPU.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            load_limit: config.memory.load_limit,
            max_instructions: config.execution.max_instructions,
            last: None,
            failed: None,
        }
    }

    /// Largest image the loader accepts: the configured limit, capped by memory size.
    pub fn load_limit(&self) -> usize {
        self.load_limit.min(self.cpu.mem.capacity())
    }

    /// Places `image` in memory starting at word index 0.
    ///
    /// # Errors
    ///
    /// Returns `TooManyWords` when the image exceeds [`Self::load_limit`].
    pub fn load(&mut self, image: &[u32]) -> Result<(), LoadError> {
        let limit = self.load_limit();
        if image.len() > limit {
            return Err(LoadError::TooManyWords { limit });
        }
        self.cpu.mem.load(image);
        debug!(words = image.len(), "memory image loaded");
        Ok(())
    }

    /// Parses a hex image from `reader` and loads it.
    ///
    /// # Returns
    ///
    /// The words that were loaded.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<Vec<u32>, LoadError> {
        let image = loader::parse_image(reader, self.load_limit())?;
        self.load(&image)?;
        Ok(image)
    }

    /// Parses a hex image from a file and loads it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
        let image = loader::load_file(path, self.load_limit())?;
        self.load(&image)?;
        Ok(image)
    }

    /// Returns `true` once `halt` has executed.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    /// The error that ended the run, if one has occurred.
    pub const fn failure(&self) -> Option<&SimError> {
        self.failed.as_ref()
    }

    /// Executes one instruction.
    ///
    /// After `halt` further calls execute nothing and return the outcome of
    /// the `halt` again.
    ///
    /// # Errors
    ///
    /// Any [`SimError`]. The first error ends the run: every later call
    /// returns the same error without executing anything.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        if let (true, Some(last)) = (self.cpu.halted, self.last) {
            return Ok(last);
        }
        if let Some(limit) = self.max_instructions {
            if self.cpu.stats.inst_fetches >= limit {
                return Err(self.fail(SimError::InstructionLimit { limit }));
            }
        }

        let inst = self.cpu.step().map_err(|err| self.fail(err))?;
        let outcome = StepOutcome {
            pc: self.cpu.xip,
            word: inst.raw,
            opcode: inst.opcode,
            halted: self.cpu.halted,
            access: self.cpu.last_access,
        };
        self.last = Some(outcome);
        Ok(outcome)
    }

    /// Runs until `halt` executes.
    ///
    /// # Errors
    ///
    /// The first [`SimError`] raised by an instruction.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        while !self.cpu.halted {
            let _ = self.step()?;
        }
        info!(
            instructions = self.cpu.stats.inst_fetches,
            "simulation halted"
        );
        Ok(self.summary())
    }

    fn fail(&mut self, err: SimError) -> SimError {
        self.failed = Some(err.clone());
        err
    }

    /// Snapshot of the current state and counters.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            regs: self.cpu.regs.snapshot(),
            cc: self.cpu.cc,
            stats: self.cpu.stats,
            cache: self.cpu.cache_stats(),
        }
    }
}
