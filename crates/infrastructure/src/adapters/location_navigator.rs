//! In-process navigation state.

use parking_lot::Mutex;
use pindrop_application::ports::Navigator;
use pindrop_domain::route_path;

/// Navigator holding the current location in memory.
///
/// A redirect replaces the location; the front end reads it back to decide
/// what to show next.
#[derive(Debug)]
pub struct LocationNavigator {
    location: Mutex<String>,
}

impl LocationNavigator {
    /// Creates a navigator positioned at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            location: Mutex::new(path.into()),
        }
    }
}

impl Navigator for LocationNavigator {
    fn current_path(&self) -> String {
        self.location.lock().clone()
    }

    fn redirect_unless_at(&self, path: &str) -> bool {
        let mut location = self.location.lock();
        if route_path(&location) == path {
            return false;
        }
        tracing::info!(from = %*location, to = path, "Redirecting");
        *location = path.to_string();
        true
    }
}
