//! Interpreter: owns the CPU, the dispatch tables, and the run loop.
//!
//! The interpreter is a two-state machine. It starts `Stopped`; `start` enters
//! `Running` and blocks, executing cycles until the run flag is cleared by
//! `pause` (from any thread, through a `PauseHandle`) or a fault aborts the
//! loop. Stopping is never terminal, so the loop can be started again.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::common::constants::GPR_COUNT;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::{Cpu, CycleEvent, DispatchTable};
use crate::isa::Instruction;
use crate::sim::trace::{CycleObserver, TracingObserver};
use crate::soc::devices::Bios;

/// Run-loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Not executing; the initial state.
    Stopped,
    /// Inside `start`.
    Running,
}

/// Why `start` returned without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunExit {
    /// The run flag was cleared by `pause`.
    Paused,
    /// No BIOS image is loaded; nothing was executed.
    MissingBios,
}

/// Cloneable handle that stops a running interpreter from another thread.
#[derive(Clone, Debug)]
pub struct PauseHandle {
    running: Arc<AtomicBool>,
}

impl PauseHandle {
    /// Requests the run loop to stop after the current cycle.
    ///
    /// Has no effect while the interpreter is `Stopped`: `start` raises the
    /// run flag again on entry.
    pub fn pause(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Returns `true` while the run loop is executing.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Top-level interpreter: CPU state + dispatch tables + run control.
pub struct Interpreter {
    cpu: Cpu,
    table: DispatchTable,
    running: Arc<AtomicBool>,
    observer: Option<Box<dyn CycleObserver>>,
    cycles: u64,
}

impl Interpreter {
    /// Creates an interpreter around a freshly reset CPU.
    ///
    /// With `general.trace_instructions` set, a `TracingObserver` is attached.
    pub fn new(config: &Config, bios: Bios) -> Self {
        let observer: Option<Box<dyn CycleObserver>> = if config.general.trace_instructions {
            Some(Box::new(TracingObserver))
        } else {
            None
        };
        Self {
            cpu: Cpu::new(config, bios),
            table: DispatchTable::new(),
            running: Arc::new(AtomicBool::new(false)),
            observer,
            cycles: 0,
        }
    }

    /// Replaces the cycle observer.
    pub fn with_observer(mut self, observer: impl CycleObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Resets the CPU and the cycle counter. The BIOS stays loaded.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cycles = 0;
    }

    /// Runs cycles until paused or until a fault occurs.
    ///
    /// Refuses to run without a BIOS image.
    ///
    /// # Errors
    ///
    /// The fault that aborted the loop. The interpreter is `Stopped` afterwards
    /// and the faulting instruction has not been skipped over.
    pub fn start(&mut self) -> Result<RunExit, Fault> {
        if !self.cpu.bus.bios().is_loaded() {
            warn!("Cannot start interpreter without BIOS image.");
            return Ok(RunExit::MissingBios);
        }

        info!("Starting interpreter at PC={:#010x}", self.cpu.pc);
        self.running.store(true, Ordering::Release);
        while self.running.load(Ordering::Acquire) {
            if let Err(fault) = self.emulate_cycle() {
                self.running.store(false, Ordering::Release);
                return Err(fault);
            }
        }
        info!("Interpreter paused after {} cycles", self.cycles);
        Ok(RunExit::Paused)
    }

    /// Clears the run flag; `start` returns after the current cycle.
    ///
    /// Like `PauseHandle::pause`, this does nothing while `Stopped`.
    pub fn pause(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Returns a handle that can pause this interpreter from another thread.
    pub fn pause_handle(&self) -> PauseHandle {
        PauseHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Returns the current run-loop state.
    pub fn state(&self) -> RunState {
        if self.running.load(Ordering::Acquire) {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    /// Runs exactly one cycle, for single-step hosts.
    ///
    /// # Errors
    ///
    /// Any fault raised by the fetch or by the executed instruction.
    pub fn emulate_cycle(&mut self) -> Result<CycleEvent, Fault> {
        let result = self.cpu.emulate_cycle(&self.table);
        self.observe(result)
    }

    /// Dispatches one instruction outside the fetch pipeline.
    ///
    /// # Errors
    ///
    /// `UnhandledInstruction` for an unregistered opcode, or any fault the
    /// handler raises.
    pub fn execute(&mut self, instr: Instruction) -> Result<CycleEvent, Fault> {
        let result = self.cpu.execute(&self.table, instr);
        self.observe(result)
    }

    /// Runs up to `max_cycles` cycles, stopping early on a fault.
    ///
    /// # Returns
    ///
    /// The number of cycles executed.
    ///
    /// # Errors
    ///
    /// The first fault raised; earlier cycles stay applied.
    pub fn run_for(&mut self, max_cycles: u64) -> Result<u64, Fault> {
        for _ in 0..max_cycles {
            let _ = self.emulate_cycle()?;
        }
        Ok(max_cycles)
    }

    /// Program counter (address of the next fetch).
    pub fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// Reads general-purpose register `idx`.
    pub fn register(&self, idx: usize) -> u32 {
        self.cpu.register(idx)
    }

    /// Returns a copy of every general-purpose register.
    pub fn registers(&self) -> [u32; GPR_COUNT] {
        self.cpu.registers()
    }

    /// Number of instructions executed since construction or the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the CPU state.
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Returns the CPU state mutably (for tests and debuggers).
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    fn observe(&mut self, result: Result<CycleEvent, Fault>) -> Result<CycleEvent, Fault> {
        match &result {
            Ok(event) => {
                self.cycles += 1;
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_cycle(event);
                }
            }
            Err(fault) => {
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_fault(fault);
                }
            }
        }
        result
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("state", &self.state())
            .field("cycles", &self.cycles)
            .field("cpu", &self.cpu)
            .finish_non_exhaustive()
    }
}
