//! Cooperative cancellation: [`Context`].

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// A shared cancellation token with an interruptible timed wait.
///
/// The engine polls [`is_done`](Context::is_done) at its checkpoints and
/// uses [`sleep`](Context::sleep) for the per-edge throttle, so a
/// [`cancel`](Context::cancel) from another thread is observed within at
/// most one relaxation-delay interval.
#[derive(Clone, Debug)]
pub struct Context {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    done: Mutex<bool>,
    cvar: Condvar,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                done: Mutex::new(false),
                cvar: Condvar::new(),
            }),
        }
    }

    /// Whether cancellation has been requested.
    pub fn is_done(&self) -> bool {
        *self.inner.done.lock().expect("context lock poisoned")
    }

    /// Request cancellation, waking any in-progress [`sleep`](Context::sleep).
    pub fn cancel(&self) {
        let mut done = self.inner.done.lock().expect("context lock poisoned");
        *done = true;
        self.inner.cvar.notify_all();
    }

    /// Sleep for `d`, returning early if cancellation is requested.
    ///
    /// Returns `true` if cancellation was requested before or during the
    /// wait. A zero duration never blocks.
    pub fn sleep(&self, d: Duration) -> bool {
        let done = self.inner.done.lock().expect("context lock poisoned");
        if *done {
            return true;
        }
        if d.is_zero() {
            return false;
        }
        let (done, _timeout) = self
            .inner
            .cvar
            .wait_timeout_while(done, d, |done| !*done)
            .expect("context lock poisoned");
        *done
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn starts_not_done() {
        let ctx = Context::new();
        assert!(!ctx.is_done());
        ctx.cancel();
        assert!(ctx.is_done());
    }

    #[test]
    fn zero_sleep_never_blocks() {
        let ctx = Context::new();
        assert!(!ctx.sleep(Duration::ZERO));
        ctx.cancel();
        assert!(ctx.sleep(Duration::ZERO));
    }

    #[test]
    fn sleep_runs_full_duration_without_cancel() {
        let ctx = Context::new();
        let t = Instant::now();
        assert!(!ctx.sleep(Duration::from_millis(30)));
        assert!(t.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn cancel_interrupts_sleep() {
        let ctx = Context::new();
        let sleeper = ctx.clone();
        let t = Instant::now();
        let h = thread::spawn(move || sleeper.sleep(Duration::from_secs(5)));
        thread::sleep(Duration::from_millis(20));
        ctx.cancel();
        assert!(h.join().unwrap());
        assert!(t.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn sleep_after_cancel_is_immediate() {
        let ctx = Context::new();
        ctx.cancel();
        let t = Instant::now();
        assert!(ctx.sleep(Duration::from_secs(5)));
        assert!(t.elapsed() < Duration::from_millis(100));
    }
}
