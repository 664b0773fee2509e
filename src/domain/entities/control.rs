//! Loading state shared between a control and the task it started.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::ports::ControlHandle;

/// Per-control "in progress" flag.
///
/// Clones share the flag, so a background task can clear the state of the
/// control that spawned it. Replacing a list drops its controls; late writes
/// from tasks still holding a clone are then invisible.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl ControlHandle for LoadingFlag {
    fn set_loading(&self, loading: bool) {
        self.0.store(loading, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = LoadingFlag::new();
        let task_side = flag.clone();

        assert!(!flag.is_loading());
        task_side.set_loading(true);
        assert!(flag.is_loading());
        task_side.set_loading(false);
        assert!(!flag.is_loading());
    }
}
