//! The final mission report, renderable as plain text or JSON.

use serde::{Deserialize, Serialize};

use crate::model::{GridSize, Orientation, Position, Status};
use crate::rover::RoverState;

/// Fixed line that terminates every textual report.
pub const REPORT_SENTINEL: &str = "==========";

/// Everything a mission has to say for itself once deployment ends.
///
/// The [`Display`](std::fmt::Display) form is the classic transmission:
/// one `x y orientation` line per rover (failed rovers annotated with
/// their recorded details), closed by the sentinel line. The serde form
/// carries the same data plus mission-level fields for downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionReport {
    pub location: String,
    pub grid_size: Option<GridSize>,
    pub status: Status,
    pub details: Option<String>,
    pub rovers: Vec<RoverReport>,
    pub completed_at: jiff::Timestamp,
}

/// One rover's line in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverReport {
    pub position: Position,
    pub orientation: Orientation,
    pub status: Status,
    pub details: Option<String>,
}

impl From<&RoverState> for RoverReport {
    fn from(state: &RoverState) -> Self {
        Self {
            position: state.position,
            orientation: state.orientation,
            status: state.status,
            details: state.details.clone(),
        }
    }
}

impl std::fmt::Display for MissionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rover in &self.rovers {
            write!(
                f,
                "{} {} {}",
                rover.position.x, rover.position.y, rover.orientation
            )?;
            if rover.status == Status::CriticalFailure {
                let details = rover.details.as_deref().unwrap_or_default();
                write!(f, " - Rover is INVALID. {details}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{REPORT_SENTINEL}")
    }
}
