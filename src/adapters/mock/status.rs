//! Recording status display for testing.

use crate::stream::Phase;
use crate::traits::StatusDisplay;

/// One call made on a [`RecordingStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    /// `show_progress` was called
    ProgressShown,
    /// `update_status` with the given text
    Status(String),
    /// `set_phase` with the given phase
    Phase(Option<Phase>),
    /// `show_error` with the given text
    Error(String),
    /// `show_complete` with the given location
    Complete(String),
}

/// Status display that records every update for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatus {
    updates: Vec<StatusUpdate>,
}

impl RecordingStatus {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates in the order they were made.
    pub fn updates(&self) -> &[StatusUpdate] {
        &self.updates
    }

    /// The text currently in the status region.
    pub fn current_text(&self) -> Option<&str> {
        self.updates.iter().rev().find_map(|update| match update {
            StatusUpdate::Status(text)
            | StatusUpdate::Error(text)
            | StatusUpdate::Complete(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The currently highlighted phase.
    pub fn current_phase(&self) -> Option<Phase> {
        self.updates
            .iter()
            .rev()
            .find_map(|update| match update {
                StatusUpdate::Phase(phase) => Some(*phase),
                _ => None,
            })
            .flatten()
    }

    /// Every error shown, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.updates
            .iter()
            .filter_map(|update| match update {
                StatusUpdate::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every status text shown, in order.
    pub fn statuses(&self) -> Vec<&str> {
        self.updates
            .iter()
            .filter_map(|update| match update {
                StatusUpdate::Status(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl StatusDisplay for RecordingStatus {
    fn show_progress(&mut self) {
        self.updates.push(StatusUpdate::ProgressShown);
    }

    fn update_status(&mut self, text: &str) {
        self.updates.push(StatusUpdate::Status(text.to_string()));
    }

    fn set_phase(&mut self, phase: Option<Phase>) {
        self.updates.push(StatusUpdate::Phase(phase));
    }

    fn show_error(&mut self, text: &str) {
        self.updates.push(StatusUpdate::Error(text.to_string()));
    }

    fn show_complete(&mut self, location: &str) {
        self.updates.push(StatusUpdate::Complete(location.to_string()));
    }
}
