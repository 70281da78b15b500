//! Crawl lifecycle definitions
//!
//! A run moves `Idle -> Running -> Done` exactly once. Per-page failures never
//! leave `Running`; the loop only ends when the frontier is exhausted.

use crate::CrawlError;
use std::fmt;

/// Represents the current phase of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Engine constructed, seed queued, nothing fetched yet
    Idle,

    /// Frontier is being drained
    Running,

    /// Frontier is empty; the run is over
    Done,
}

impl CrawlPhase {
    /// Returns true if moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running) | (Self::Running, Self::Done)
        )
    }

    /// Performs a transition, rejecting anything not allowed by the lifecycle
    pub fn transition(self, next: CrawlPhase) -> Result<CrawlPhase, CrawlError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CrawlError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert!(CrawlPhase::Idle.can_transition_to(CrawlPhase::Running));
        assert!(CrawlPhase::Running.can_transition_to(CrawlPhase::Done));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!CrawlPhase::Idle.can_transition_to(CrawlPhase::Done));
        assert!(!CrawlPhase::Done.can_transition_to(CrawlPhase::Running));
        assert!(!CrawlPhase::Running.can_transition_to(CrawlPhase::Running));
        assert!(!CrawlPhase::Done.can_transition_to(CrawlPhase::Idle));
    }

    #[test]
    fn test_transition_error() {
        let result = CrawlPhase::Done.transition(CrawlPhase::Running);
        assert!(matches!(
            result,
            Err(CrawlError::InvalidTransition {
                from: CrawlPhase::Done,
                to: CrawlPhase::Running
            })
        ));
    }

    #[test]
    fn test_full_lifecycle() {
        let phase = CrawlPhase::Idle
            .transition(CrawlPhase::Running)
            .and_then(|p| p.transition(CrawlPhase::Done))
            .unwrap();
        assert_eq!(phase, CrawlPhase::Done);
    }

    #[test]
    fn test_transition_error_message() {
        let err = CrawlPhase::Done.transition(CrawlPhase::Running).unwrap_err();
        assert_eq!(err.to_string(), "Invalid state transition: done -> running");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CrawlPhase::Idle), "idle");
        assert_eq!(format!("{}", CrawlPhase::Running), "running");
        assert_eq!(format!("{}", CrawlPhase::Done), "done");
    }
}
