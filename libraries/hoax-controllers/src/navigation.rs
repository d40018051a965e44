//! Route changes requested by controllers.

use std::sync::Mutex;
use tracing::debug;

/// Route of the home page.
pub const HOME: &str = "/";

/// Receives navigation requests, e.g. "go to `/` after signup".
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Ignores navigation. Default when no router is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "Navigation ignored");
    }
}

/// Keeps the visited routes in memory.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent route, if any
    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .ok()
            .and_then(|history| history.last().cloned())
    }

    /// All routes in visit order
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.push(path.to_string());
        }
        debug!(path, "Navigated");
    }
}
