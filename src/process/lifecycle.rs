/*!
 * Exit Lifecycle
 *
 * Coordinates the irreversible Running -> Terminating transition and the
 * exit hooks that run during it.
 *
 * # Architecture
 *
 * - **Exit Registry**: Central coordinator that drains hooks in registration order
 * - **Single-shot hooks**: `FnOnce` closures, consumed when the terminal phase runs
 * - **Explicit phases**: Process goes through Running -> Terminating, never back
 * - **No late work**: Registration during or after the terminal phase is rejected
 *
 * # Example
 *
 * ```ignore
 * let registry = ExitRegistry::new();
 * registry.on_exit(|code| println!("exiting with {}", code))?;
 *
 * // Runs every hook exactly once, then terminates the process
 * registry.exit(ExitCode::SUCCESS);
 * ```
 */

use super::types::{LifecycleError, LifecyclePhase, LifecycleResult};
use crate::core::limits::MAX_EXIT_HOOKS;
use crate::core::types::ExitCode;
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Exit hook: runs exactly once with the final exit code
type ExitHook = Box<dyn FnOnce(ExitCode) + Send>;

const PHASE_RUNNING: u8 = 0;
const PHASE_TERMINATING: u8 = 1;

/// Exit lifecycle coordinator
///
/// Holds the hooks to run at process exit and the lifecycle phase they are
/// gated on. The phase moves Running -> Terminating exactly once; hooks
/// drain synchronously during that transition and nothing runs after it.
pub struct ExitRegistry {
    hooks: Mutex<Vec<ExitHook>>,
    phase: AtomicU8,
}

impl ExitRegistry {
    /// Create a new exit registry in the Running phase
    pub fn new() -> Self {
        info!("Exit registry initialized");
        Self {
            hooks: Mutex::new(Vec::new()),
            phase: AtomicU8::new(PHASE_RUNNING),
        }
    }

    /// Current lifecycle phase
    #[inline]
    pub fn phase(&self) -> LifecyclePhase {
        match self.phase.load(Ordering::Acquire) {
            PHASE_RUNNING => LifecyclePhase::Running,
            _ => LifecyclePhase::Terminating,
        }
    }

    /// Number of hooks waiting for the terminal phase
    pub fn hook_count(&self) -> usize {
        self.hooks.lock().len()
    }

    /// Register a hook to run during the terminal phase
    ///
    /// Hooks run synchronously in registration order, each exactly once,
    /// with the final exit code. An accepted registration always runs;
    /// registration is rejected once the terminal phase has begun, so a
    /// hook registered from inside a running hook is never executed.
    pub fn on_exit<F>(&self, hook: F) -> LifecycleResult<()>
    where
        F: FnOnce(ExitCode) + Send + 'static,
    {
        // The phase check holds the hooks lock so registration serializes
        // with the terminal drain: either the hook lands before the drain
        // empties the queue, or the registration observes the Terminating
        // phase and is rejected.
        let mut hooks = self.hooks.lock();

        if self.phase().is_terminating() {
            warn!("Exit hook rejected: terminal phase already entered");
            return Err(LifecycleError::TerminalPhase);
        }

        if hooks.len() >= MAX_EXIT_HOOKS {
            return Err(LifecycleError::HookLimitExceeded {
                current: hooks.len(),
                limit: MAX_EXIT_HOOKS,
            });
        }

        hooks.push(Box::new(hook));
        debug!("Exit hook registered ({} pending)", hooks.len());
        Ok(())
    }

    /// Enter the terminal phase and drain all hooks
    ///
    /// Performs the irreversible Running -> Terminating transition, then
    /// runs every registered hook synchronously in registration order with
    /// `code`. Returns the number of hooks that ran. A second call fails
    /// with `AlreadyTerminating` and runs nothing.
    pub fn enter_terminal_phase(&self, code: ExitCode) -> LifecycleResult<usize> {
        self.phase
            .compare_exchange(
                PHASE_RUNNING,
                PHASE_TERMINATING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| LifecycleError::AlreadyTerminating)?;

        // Drain under the lock, run without it. A hook re-registering
        // during the drain takes the freed lock, observes the Terminating
        // phase, and is rejected.
        let hooks = std::mem::take(&mut *self.hooks.lock());
        let count = hooks.len();
        info!("Terminal phase entered with code {} ({} hooks)", code, count);

        for (index, hook) in hooks.into_iter().enumerate() {
            debug!("Running exit hook {}/{}", index + 1, count);
            hook(code);
        }

        Ok(count)
    }

    /// Run the terminal phase and terminate the process
    ///
    /// Never returns. If the terminal phase was already entered, the hooks
    /// have already run and the process still exits with `code`.
    pub fn exit(&self, code: ExitCode) -> ! {
        if let Err(e) = self.enter_terminal_phase(code) {
            warn!("Exit requested after terminal phase: {}", e);
        }
        std::process::exit(code.value());
    }
}

impl Default for ExitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
