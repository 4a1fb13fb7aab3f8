//! Stop signal shared between a supervisor and its render loop.

use tokio_util::sync::{CancellationToken, DropGuard};

/// One-way flag: once stopped it stays stopped.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    token: CancellationToken,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stops the signal when the returned guard is dropped, including during
    /// unwinding.
    pub fn stop_on_drop(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    pub async fn stopped(&self) {
        self.token.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_visible_to_clones() {
        let signal = StopSignal::new();
        let seen_by_loop = signal.clone();
        assert!(!seen_by_loop.is_stopped());
        signal.stop();
        assert!(seen_by_loop.is_stopped());
        signal.stop();
        assert!(seen_by_loop.is_stopped());
    }

    #[test]
    fn test_guard_stops_on_panic() {
        let signal = StopSignal::new();
        let inner = signal.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.stop_on_drop();
            panic!("work failed");
        });
        assert!(result.is_err());
        assert!(signal.is_stopped());
    }

    #[test]
    fn test_stopped_resolves() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let signal = StopSignal::new();
            let waiter = signal.clone();
            let handle = tokio::spawn(async move { waiter.stopped().await });
            signal.stop();
            handle.await.unwrap();
        });
    }
}
