//! Cycle observers.
//!
//! The interpreter never formats output itself. After every cycle it hands a
//! `CycleEvent` to an observer, and faults go to the same observer before they
//! propagate. `TracingObserver` renders both through `tracing`; hosts with
//! their own UI implement `CycleObserver` instead.

use tracing::{debug, error, trace};

use crate::common::error::Fault;
use crate::core::CycleEvent;

/// Receives a report for every executed instruction.
pub trait CycleObserver: Send {
    /// Called after an instruction executed successfully.
    fn on_cycle(&mut self, event: &CycleEvent);

    /// Called when a cycle aborts with a fault, before the fault is returned.
    fn on_fault(&mut self, _fault: &Fault) {}
}

/// Observer that logs each instruction through `tracing`.
///
/// NOPs go to `trace` level so a `debug` filter shows only real work.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl CycleObserver for TracingObserver {
    fn on_cycle(&mut self, event: &CycleEvent) {
        if event.nop {
            trace!("{:>8} {:#010x}", "NOP", event.address);
        } else {
            debug!(
                "{:>8} {:#010x} {:#010x}",
                event.mnemonic(),
                event.address,
                event.word
            );
        }
    }

    fn on_fault(&mut self, fault: &Fault) {
        error!("{fault}");
    }
}
