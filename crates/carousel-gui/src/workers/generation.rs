use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Latest requested load, shared between the UI and the worker.
///
/// The UI advances it when it queues a `LoadSource`, so commands already
/// sitting in the channel for an older load can be skipped by the worker.
#[derive(Clone, Debug, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

impl LoadGeneration {
    /// Start a new load and return its generation.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_counter() {
        let ui = LoadGeneration::default();
        let worker = ui.clone();
        assert_eq!(worker.current(), 0);

        let first = ui.advance();
        assert!(worker.is_current(first));

        let second = ui.advance();
        assert_eq!(second, first + 1);
        assert!(!worker.is_current(first));
        assert!(worker.is_current(second));
    }
}
