//! Phase detection from progress text.
//!
//! The backend does not tag which stage it is in; the stage is inferred from
//! keywords in the progress message.

/// Processing stage reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Gathering material on the topic
    Research,
    /// Judging the gathered material
    Evaluation,
    /// Writing and assembling the course
    Build,
}

impl Phase {
    /// All phases in display order.
    pub const ALL: [Phase; 3] = [Phase::Research, Phase::Evaluation, Phase::Build];

    /// Label shown in the phase strip.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Research => "Researcher",
            Phase::Evaluation => "Judge",
            Phase::Build => "Builder",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Phase::Research => &["research"],
            Phase::Evaluation => &["judge", "evaluating"],
            Phase::Build => &["writ", "build"],
        }
    }
}

/// Detect which phase a progress message refers to.
///
/// Matching is a case-insensitive substring search. Phases are checked in
/// [`Phase::ALL`] order and the first match wins.
pub fn detect_phase(text: &str) -> Option<Phase> {
    let lower = text.to_lowercase();
    Phase::ALL
        .into_iter()
        .find(|phase| phase.keywords().iter().any(|kw| lower.contains(kw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_research() {
        assert_eq!(detect_phase("Researching topic"), Some(Phase::Research));
        assert_eq!(detect_phase("RESEARCH done"), Some(Phase::Research));
    }

    #[test]
    fn test_detect_evaluation() {
        assert_eq!(detect_phase("Judge is reviewing"), Some(Phase::Evaluation));
        assert_eq!(detect_phase("Evaluating sources"), Some(Phase::Evaluation));
    }

    #[test]
    fn test_detect_build() {
        assert_eq!(detect_phase("Writing chapter 2"), Some(Phase::Build));
        assert_eq!(detect_phase("Building the course"), Some(Phase::Build));
        assert_eq!(detect_phase("Content writer started"), Some(Phase::Build));
    }

    #[test]
    fn test_first_match_wins() {
        // Mentions all three; research is checked first
        assert_eq!(
            detect_phase("Writing up research for the judge"),
            Some(Phase::Research)
        );
        assert_eq!(
            detect_phase("Judge approved, building now"),
            Some(Phase::Evaluation)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(detect_phase("Starting up"), None);
        assert_eq!(detect_phase(""), None);
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<_> = Phase::ALL.iter().map(Phase::label).collect();
        assert_eq!(labels, vec!["Researcher", "Judge", "Builder"]);
    }
}
