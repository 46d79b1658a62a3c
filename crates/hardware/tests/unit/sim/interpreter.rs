//! # Interpreter Run Control Tests
//!
//! Start/pause transitions, fault propagation out of the run loop, and the
//! events delivered to cycle observers.

use std::sync::{Arc, Mutex};
use std::thread;

use r3000_core::config::Config;
use r3000_core::core::CycleEvent;
use r3000_core::sim::{CycleObserver, PauseHandle, RunExit, RunState};
use r3000_core::{Bios, Fault, Interpreter};

use crate::common::builder::{NOP, addiu, j, lui};
use crate::common::harness::{PROGRAM_BASE, TestContext, init_tracing};
use crate::common::mocks::observer::MockObserver;

/// `j self` followed by its delay slot: spins forever.
fn spin() -> [u32; 2] {
    [j(PROGRAM_BASE), NOP]
}

/// Records executed addresses and pauses the interpreter after a fixed number of cycles.
struct PauseAfter {
    handle: PauseHandle,
    remaining: u32,
    seen: Arc<Mutex<Vec<u32>>>,
}

impl PauseAfter {
    fn new(handle: PauseHandle, cycles: u32) -> Self {
        Self {
            handle,
            remaining: cycles,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl CycleObserver for PauseAfter {
    fn on_cycle(&mut self, event: &CycleEvent) {
        self.seen.lock().unwrap().push(event.address);
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.handle.pause();
        }
    }
}

#[test]
fn test_new_interpreter_is_stopped() {
    let ctx = TestContext::new(&spin());
    assert_eq!(ctx.interp.state(), RunState::Stopped);
    assert_eq!(ctx.interp.cycles(), 0);
}

#[test]
fn test_start_without_bios_does_nothing() {
    init_tracing();
    let config = Config::default();
    let mut interp = Interpreter::new(&config, Bios::empty(config.memory_map.bios_base));
    assert_eq!(interp.start(), Ok(RunExit::MissingBios));
    assert_eq!(interp.cycles(), 0);
    assert_eq!(interp.pc(), PROGRAM_BASE);
    assert_eq!(interp.state(), RunState::Stopped);
}

#[test]
fn test_start_runs_until_paused() {
    let ctx = TestContext::new(&spin());
    let handle = ctx.interp.pause_handle();
    let mut interp = ctx.interp.with_observer(PauseAfter::new(handle, 10));

    assert_eq!(interp.start(), Ok(RunExit::Paused));
    assert_eq!(interp.cycles(), 10);
    assert_eq!(interp.state(), RunState::Stopped);
}

#[test]
fn test_start_resumes_after_pause() {
    let ctx = TestContext::new(&spin());
    let handle = ctx.interp.pause_handle();

    let mut observer = MockObserver::new();
    observer
        .expect_on_cycle()
        .times(2)
        .returning(move |_| handle.pause());
    observer.expect_on_fault().never();
    let mut interp = ctx.interp.with_observer(observer);

    assert_eq!(interp.start(), Ok(RunExit::Paused));
    assert_eq!(interp.cycles(), 1);
    assert_eq!(interp.start(), Ok(RunExit::Paused));
    assert_eq!(interp.cycles(), 2);
}

#[test]
fn test_pause_from_another_thread() {
    let ctx = TestContext::new(&spin());
    let handle = ctx.interp.pause_handle();
    let mut interp = ctx.interp;

    let pauser = thread::spawn(move || {
        while !handle.is_running() {
            thread::yield_now();
        }
        handle.pause();
    });

    assert_eq!(interp.start(), Ok(RunExit::Paused));
    pauser.join().unwrap();
    assert!(interp.cycles() > 0);
    assert_eq!(interp.state(), RunState::Stopped);
}

#[test]
fn test_pause_before_start_is_harmless() {
    let mut ctx = TestContext::new(&spin());
    ctx.interp.pause();
    assert_eq!(ctx.interp.state(), RunState::Stopped);
    let _ = ctx.step();
    assert_eq!(ctx.interp.cycles(), 1);
}

#[test]
fn test_fault_stops_run_loop() {
    let ctx = TestContext::new(&[addiu(1, 0, 1), 0xFC00_0000]);
    let mut observer = MockObserver::new();
    observer.expect_on_cycle().times(2).return_const(());
    observer
        .expect_on_fault()
        .withf(|fault| matches!(fault, Fault::UnhandledInstruction { .. }))
        .times(1)
        .return_const(());
    let mut interp = ctx.interp.with_observer(observer);

    let err = interp.start().unwrap_err();
    assert_eq!(
        err,
        Fault::UnhandledInstruction {
            address: PROGRAM_BASE + 4,
            word: 0xFC00_0000,
            opcode: 0x3F,
            funct: None,
        }
    );
    assert_eq!(interp.state(), RunState::Stopped);
    assert_eq!(interp.cycles(), 2);
    assert_eq!(interp.register(1), 1);
}

#[test]
fn test_restart_after_fault_retries_faulting_instruction() {
    let mut ctx = TestContext::new(&[addiu(1, 0, 1), 0xFC00_0000, addiu(2, 0, 2)]);
    let expected = Fault::UnhandledInstruction {
        address: PROGRAM_BASE + 4,
        word: 0xFC00_0000,
        opcode: 0x3F,
        funct: None,
    };

    assert_eq!(ctx.interp.start(), Err(expected.clone()));
    assert_eq!(ctx.interp.pc(), PROGRAM_BASE + 8);

    assert_eq!(ctx.interp.emulate_cycle(), Err(expected.clone()));
    assert_eq!(ctx.interp.start(), Err(expected));
    assert_eq!(ctx.interp.cycles(), 2);
    assert_eq!(ctx.get_reg(2), 0xDEAD_BEEF);
}

#[test]
fn test_pause_while_stopped_is_not_latched() {
    let ctx = TestContext::new(&spin());
    let handle = ctx.interp.pause_handle();
    handle.pause();
    assert!(!handle.is_running());

    let mut interp = ctx.interp.with_observer(PauseAfter::new(handle, 3));
    assert_eq!(interp.start(), Ok(RunExit::Paused));
    assert_eq!(interp.cycles(), 3);
}

#[test]
fn test_observer_sees_delay_slot_order() {
    let ctx = TestContext::new(&spin());
    let observer = PauseAfter::new(ctx.interp.pause_handle(), 5);
    let seen = Arc::clone(&observer.seen);
    let mut interp = ctx.interp.with_observer(observer);
    assert_eq!(interp.run_for(5), Ok(5));

    // Reset NOP, then the jump and its delay slot alternating.
    let expected = vec![
        PROGRAM_BASE,
        PROGRAM_BASE,
        PROGRAM_BASE + 4,
        PROGRAM_BASE,
        PROGRAM_BASE + 4,
    ];
    assert_eq!(*seen.lock().unwrap(), expected);
    assert_eq!(interp.pc(), PROGRAM_BASE + 4);
}

#[test]
fn test_run_for_counts_cycles() {
    let mut ctx = TestContext::new(&[lui(1, 1), NOP, NOP]);
    assert_eq!(ctx.interp.run_for(3), Ok(3));
    assert_eq!(ctx.interp.cycles(), 3);
    assert_eq!(ctx.get_reg(1), 0x0001_0000);
}

#[test]
fn test_run_for_stops_on_fault() {
    let mut ctx = TestContext::new(&[0xFC00_0000]);
    let err = ctx.interp.run_for(10).unwrap_err();
    assert!(matches!(err, Fault::UnhandledInstruction { .. }));
    assert_eq!(ctx.interp.cycles(), 1);
}

#[test]
fn test_trace_flag_attaches_tracing_observer() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    let mut ctx = TestContext::with_config(&[lui(1, 0x1234)], &config);
    let _ = ctx.run_through(0);
    assert_eq!(ctx.get_reg(1), 0x1234_0000);
}
