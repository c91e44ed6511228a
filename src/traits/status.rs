//! Status display trait abstraction.
//!
//! The display is the only user-facing surface of a submission: progress
//! text, the phase strip, errors and the completion notice all go through
//! it.

use crate::stream::Phase;

/// A handle on the status region of the UI.
pub trait StatusDisplay {
    /// Switch into progress mode before the request is sent.
    fn show_progress(&mut self);

    /// Replace the status text.
    fn update_status(&mut self, text: &str);

    /// Highlight `phase`, or clear every highlight with `None`.
    fn set_phase(&mut self, phase: Option<Phase>);

    /// Show a failure in the status region.
    fn show_error(&mut self, text: &str);

    /// Announce that the result was saved and where it will open.
    fn show_complete(&mut self, location: &str) {
        self.update_status(&format!("Course ready: {}", location));
    }
}

impl<D: StatusDisplay + ?Sized> StatusDisplay for Box<D> {
    fn show_progress(&mut self) {
        (**self).show_progress()
    }

    fn update_status(&mut self, text: &str) {
        (**self).update_status(text)
    }

    fn set_phase(&mut self, phase: Option<Phase>) {
        (**self).set_phase(phase)
    }

    fn show_error(&mut self, text: &str) {
        (**self).show_error(text)
    }

    fn show_complete(&mut self, location: &str) {
        (**self).show_complete(location)
    }
}
