//! Shared-display coordinator
//!
//! The counter and temperature tasks both write "move cursor, then
//! payload" sequences to the same LCD. A sequence interrupted by another
//! task's cursor move would scatter text across the screen, so every
//! sequence runs under one exclusive lock.
//!
//! Acquisition blocks without a timeout. Holders release as soon as the
//! last payload byte is out, and never across a task-period sleep.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

/// A display owned by a lock
///
/// Built once at startup around the concrete driver and handed to each
/// task by shared reference.
pub struct SharedDisplay<M: RawMutex, D> {
    display: Mutex<M, D>,
}

impl<M: RawMutex, D> SharedDisplay<M, D> {
    /// Take ownership of an initialised display
    pub const fn new(display: D) -> Self {
        Self {
            display: Mutex::new(display),
        }
    }

    /// Acquire the display for a scope
    ///
    /// The lock is released when the guard drops. Use this when the
    /// critical section has to span an `.await`; otherwise prefer
    /// [`transaction`](Self::transaction).
    pub async fn lock(&self) -> MutexGuard<'_, M, D> {
        self.display.lock().await
    }

    /// Run one synchronous display transaction under the lock
    pub async fn transaction<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut display = self.display.lock().await;
        f(&mut display)
    }

    /// Give the display back, e.g. to re-initialise it
    pub fn into_inner(self) -> D {
        self.display.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::{block_on, join::join, yield_now};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_transaction_returns_closure_value() {
        let shared: SharedDisplay<NoopRawMutex, Vec<u8>> = SharedDisplay::new(Vec::new());

        let len = block_on(shared.transaction(|log| {
            log.extend_from_slice(b"abc");
            log.len()
        }));

        assert_eq!(len, 3);
        assert_eq!(shared.into_inner(), b"abc");
    }

    #[test]
    fn test_holder_is_not_interleaved() {
        let shared: SharedDisplay<NoopRawMutex, Vec<u8>> = SharedDisplay::new(Vec::new());

        let holder = async {
            let mut log = shared.lock().await;
            log.push(b'a');
            // Give the other future a chance to run while we hold the lock
            yield_now().await;
            yield_now().await;
            log.push(b'b');
        };
        let contender = async {
            shared.transaction(|log| log.push(b'x')).await;
        };

        block_on(join(holder, contender));

        assert_eq!(shared.into_inner(), b"abx");
    }
}
