//! Run control and observation.
//!
//! Provides the interpreter that drives the CPU, and the observer interface
//! through which executed instructions are reported.

/// Interpreter state machine and run loop.
pub mod interpreter;

/// Cycle observers.
pub mod trace;

pub use interpreter::{Interpreter, PauseHandle, RunExit, RunState};
pub use trace::{CycleObserver, TracingObserver};
