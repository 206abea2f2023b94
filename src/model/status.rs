//! Outcome classification shared by rovers and the mission as a whole.

use serde::{Deserialize, Serialize};

/// How badly a deployment went, ordered by severity.
///
/// Used at both levels of the report: a rover that had to be halted (or
/// never accepted its commands) is itself `CriticalFailure`, while the
/// mission it belongs to downgrades to `PartialFailure` and keeps going.
/// A mission goes `CriticalFailure` only when the command data gave it no
/// grid to start from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    PartialFailure,
    CriticalFailure,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Success => "SUCCESS",
            Self::PartialFailure => "PARTIAL_FAILURE",
            Self::CriticalFailure => "CRITICAL_FAILURE",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_from_success_to_critical() {
        assert!(Status::Success < Status::PartialFailure);
        assert!(Status::PartialFailure < Status::CriticalFailure);
        assert_eq!(
            Status::CriticalFailure.max(Status::PartialFailure),
            Status::CriticalFailure
        );
    }

    #[test]
    fn labels_match_the_wire_form() {
        assert_eq!(Status::Success.to_string(), "SUCCESS");
        assert_eq!(Status::PartialFailure.to_string(), "PARTIAL_FAILURE");
        assert_eq!(Status::CriticalFailure.to_string(), "CRITICAL_FAILURE");
    }

    #[test]
    fn serializes_to_screaming_snake_case() {
        let json = serde_json::to_string(&Status::PartialFailure).unwrap();
        assert_eq!(json, "\"PARTIAL_FAILURE\"");
    }
}
