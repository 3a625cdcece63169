/*!
 * Exit Lifecycle Tests
 * Hook ordering, exactly-once execution, and terminal phase rules
 */

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use proc_probe::process::{ExitRegistry, LifecycleError, LifecyclePhase};
use proc_probe::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_hooks_run_in_registration_order_with_final_code() {
    let registry = ExitRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for tag in ["cleanup", "flush", "report"] {
        let log = Arc::clone(&log);
        registry
            .on_exit(move |code| log.lock().push((tag, code.value())))
            .unwrap();
    }

    let count = registry.enter_terminal_phase(ExitCode::new(3)).unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        *log.lock(),
        vec![("cleanup", 3), ("flush", 3), ("report", 3)]
    );
}

#[test]
fn test_each_hook_runs_exactly_once() {
    let registry = ExitRegistry::new();
    let runs = Arc::new(AtomicUsize::new(0));

    for _ in 0..5 {
        let runs = Arc::clone(&runs);
        registry
            .on_exit(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
    }

    registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap();
    assert_eq!(runs.load(Ordering::SeqCst), 5);

    // A failed re-entry runs nothing
    assert!(registry.enter_terminal_phase(ExitCode::FAILURE).is_err());
    assert_eq!(runs.load(Ordering::SeqCst), 5);
}

#[test]
fn test_transition_is_irreversible() {
    let registry = ExitRegistry::new();
    assert_eq!(registry.phase(), LifecyclePhase::Running);

    registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap();
    assert_eq!(registry.phase(), LifecyclePhase::Terminating);

    let err = registry
        .enter_terminal_phase(ExitCode::FAILURE)
        .unwrap_err();
    assert_eq!(err, LifecycleError::AlreadyTerminating);
    assert_eq!(registry.phase(), LifecyclePhase::Terminating);
}

#[test]
fn test_hooks_observe_terminating_phase() {
    let registry = Arc::new(ExitRegistry::new());
    let observed = Arc::new(Mutex::new(None));

    let registry_clone = Arc::clone(&registry);
    let observed_clone = Arc::clone(&observed);
    registry
        .on_exit(move |_| *observed_clone.lock() = Some(registry_clone.phase()))
        .unwrap();

    registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap();
    assert_eq!(*observed.lock(), Some(LifecyclePhase::Terminating));
}

#[test]
fn test_late_registration_rejected() {
    let registry = ExitRegistry::new();
    registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap();

    let err = registry.on_exit(|_| {}).unwrap_err();
    assert_eq!(err, LifecycleError::TerminalPhase);
    assert_eq!(registry.hook_count(), 0);
}

#[test]
fn test_work_scheduled_inside_hook_never_executes() {
    let registry = Arc::new(ExitRegistry::new());
    let late_runs = Arc::new(AtomicUsize::new(0));

    let registry_clone = Arc::clone(&registry);
    let late_runs_clone = Arc::clone(&late_runs);
    registry
        .on_exit(move |_| {
            let late_runs = Arc::clone(&late_runs_clone);
            let result = registry_clone.on_exit(move |_| {
                late_runs.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(result, Err(LifecycleError::TerminalPhase));
        })
        .unwrap();

    let count = registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap();

    assert_eq!(count, 1);
    assert_eq!(late_runs.load(Ordering::SeqCst), 0);
    assert_eq!(registry.hook_count(), 0);
}

#[test]
fn test_accepted_hooks_run_when_registration_races_termination() {
    // Registrations race the terminal transition from other threads. A
    // registration that returns Ok must be executed by the drain; a
    // rejected one must never run.
    for _ in 0..200 {
        let registry = Arc::new(ExitRegistry::new());
        let executed = Arc::new(AtomicUsize::new(0));

        let registrars: Vec<_> = (0..3)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let executed = Arc::clone(&executed);
                std::thread::spawn(move || {
                    let mut accepted = 0usize;
                    for _ in 0..8 {
                        let executed = Arc::clone(&executed);
                        let result = registry.on_exit(move |_| {
                            executed.fetch_add(1, Ordering::SeqCst);
                        });
                        if result.is_ok() {
                            accepted += 1;
                        }
                    }
                    accepted
                })
            })
            .collect();

        let terminator = {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                std::thread::yield_now();
                registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap()
            })
        };

        let accepted: usize = registrars.into_iter().map(|t| t.join().unwrap()).sum();
        let drained = terminator.join().unwrap();

        assert_eq!(drained, accepted);
        assert_eq!(executed.load(Ordering::SeqCst), accepted);
    }
}

#[test]
fn test_hook_count_drains_on_terminal_phase() {
    let registry = ExitRegistry::new();
    registry.on_exit(|_| {}).unwrap();
    registry.on_exit(|_| {}).unwrap();
    assert_eq!(registry.hook_count(), 2);

    registry.enter_terminal_phase(ExitCode::SUCCESS).unwrap();
    assert_eq!(registry.hook_count(), 0);
}

#[test]
fn test_terminal_phase_with_signal_exit_code() {
    let registry = ExitRegistry::new();
    let seen = Arc::new(Mutex::new(None));

    let seen_clone = Arc::clone(&seen);
    registry
        .on_exit(move |code| *seen_clone.lock() = Some(code))
        .unwrap();

    registry
        .enter_terminal_phase(ExitCode::from_signal(9))
        .unwrap();

    let code = seen.lock().unwrap();
    assert_eq!(code.value(), 137);
    assert_eq!(code.signal(), Some(9));
    assert!(code.is_failure());
}
