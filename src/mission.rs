//! Mission control: roster assembly, sequential deployment, and viability
//! judgment.
//!
//! The controller is the only component that sees the whole picture (grid
//! bounds plus every rover's committed position), so every proposed step
//! funnels through it. Rovers are deployed strictly one at a time, each
//! resolved to success or failure before the next one moves, which makes
//! collision outcomes depend on roster order: an earlier rover claims a
//! cell first.

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::model::{GridSize, Status};
use crate::parse::parse_command_data;
use crate::report::{MissionReport, RoverReport};
use crate::rover::{Proposal, Rover};

/// Why a proposed step was refused.
///
/// Bounds are judged before collisions, and the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepFault {
    #[error("Commands contain a directive that moves the rover outside bounds")]
    OutOfBounds,
    #[error("Commands contain a directive that would cause rovers to collide")]
    Collision,
}

pub struct MissionControl {
    location: String,
    grid_size: Option<GridSize>,
    rovers: Vec<Rover>,
    status: Status,
    details: Option<String>,
}

impl MissionControl {
    /// Assembles a mission from raw command data.
    ///
    /// A transmission without a readable grid header is a critical failure:
    /// no rovers are constructed and deployment will refuse to run. Anything
    /// less conservative risks driving rovers across a plateau whose edges
    /// we cannot place.
    pub fn new(location: &str, command_data: &str) -> Self {
        match parse_command_data(command_data) {
            Ok(data) => {
                let rovers: Vec<Rover> = data.rovers.iter().map(Rover::new).collect();
                for (index, rover) in rovers.iter().enumerate() {
                    if rover.state().status == Status::CriticalFailure {
                        warn!(rover = index, "Command text rejected at ingest");
                    }
                }
                info!(
                    location,
                    grid = %data.grid_size,
                    rovers = rovers.len(),
                    "Mission assembled"
                );
                Self {
                    location: location.to_string(),
                    grid_size: Some(data.grid_size),
                    rovers,
                    status: Status::Success,
                    details: None,
                }
            }
            Err(fault) => {
                error!(location, "Mission scrubbed: {fault}");
                Self {
                    location: location.to_string(),
                    grid_size: None,
                    rovers: Vec::new(),
                    status: Status::CriticalFailure,
                    details: Some(fault.to_string()),
                }
            }
        }
    }

    /// Runs every rover's command sequence, one rover at a time.
    ///
    /// Each queued directive becomes a proposal, is judged for viability,
    /// and is committed only if it passes. A refused step invalidates that
    /// rover (rollback included) and abandons its remaining directives, but
    /// the roster keeps going: one stranded rover is no reason to strand
    /// the rest. Returns the mission's aggregate status.
    pub fn deploy_rovers(&mut self) -> Status {
        if self.status == Status::CriticalFailure {
            error!(location = %self.location, "Deployment refused: mission is scrubbed");
            return self.status;
        }

        for index in 0..self.rovers.len() {
            if self.rovers[index].state().status == Status::CriticalFailure {
                // Ingestion already failed this rover; it never moves.
                let details = self.rovers[index].state().details.clone().unwrap_or_default();
                self.record_failure(index, details);
                continue;
            }

            while let Some(proposal) = self.rovers[index].next_state() {
                match self.check_viability(proposal, index) {
                    Ok(()) => {
                        self.rovers[index].commit_state(proposal);
                        debug!(
                            rover = index,
                            position = %self.rovers[index].state().position,
                            orientation = %self.rovers[index].state().orientation,
                            "Step committed"
                        );
                    }
                    Err(fault) => {
                        let reason = fault.to_string();
                        self.rovers[index].mark_invalid(reason.clone());
                        self.record_failure(index, reason);
                        break;
                    }
                }
            }
        }

        info!(status = %self.status, "Deployment complete");
        self.status
    }

    /// Judges one proposed step against the grid and the rest of the roster.
    ///
    /// A pure turn carries no position and is always viable. A move must land
    /// on the plateau and on a cell no other rover currently occupies. Only
    /// committed positions count: a rover later in the roster may yet pass
    /// through the proposed cell, but it has not claimed it.
    pub fn check_viability(
        &self,
        proposal: Proposal,
        rover_index: usize,
    ) -> Result<(), StepFault> {
        let Some(position) = proposal.position else {
            return Ok(());
        };

        let on_plateau = self
            .grid_size
            .is_some_and(|grid_size| grid_size.contains(position));
        if !on_plateau {
            return Err(StepFault::OutOfBounds);
        }

        let occupied = self
            .rovers
            .iter()
            .enumerate()
            .any(|(index, other)| {
                index != rover_index && other.state().position == position
            });
        if occupied {
            return Err(StepFault::Collision);
        }

        Ok(())
    }

    /// Snapshot of the mission for rendering or serialization.
    pub fn final_report(&self) -> MissionReport {
        MissionReport {
            location: self.location.clone(),
            grid_size: self.grid_size,
            status: self.status,
            details: self.details.clone(),
            rovers: self
                .rovers
                .iter()
                .map(|rover| RoverReport::from(rover.state()))
                .collect(),
            completed_at: jiff::Timestamp::now(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn grid_size(&self) -> Option<GridSize> {
        self.grid_size
    }

    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    fn record_failure(&mut self, index: usize, details: String) {
        error!(
            rover = index,
            "Uh {}, we've had a problem: {details}", self.location
        );
        self.status = self.status.max(Status::PartialFailure);
        self.details = Some(details);
    }
}
