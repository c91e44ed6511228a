//! Recording navigator for testing.

use std::sync::{Arc, Mutex};

use crate::traits::Navigator;

/// Navigator that records targets instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl RecordingNavigator {
    /// Create a recorder with no visits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent navigations fail.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    /// Targets navigated to, in order.
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) -> std::io::Result<()> {
        self.visits.lock().unwrap().push(target.to_string());
        if *self.should_fail.lock().unwrap() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no browser (mock)",
            ));
        }
        Ok(())
    }
}
