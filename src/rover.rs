//! The rover state machine.
//!
//! A rover ingests its command block once, at construction, and from then on
//! only ever proposes one step at a time. Whether a proposal is survivable is
//! not the rover's call: mission control judges it against the grid and the
//! rest of the roster, then either commits the step or invalidates the rover.

use std::collections::VecDeque;

use crate::model::{Command, Orientation, Position, Status};
use crate::parse::RoverRecord;

/// Details recorded when ingestion rejects a command block.
pub const INVALID_COMMAND_CODES: &str = "Rover contains invalid command codes.";

/// The rover's reported state: where it is, how it fared, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverState {
    pub position: Position,
    pub orientation: Orientation,
    pub status: Status,
    pub details: Option<String>,
}

/// A proposed partial state update for a single directive.
///
/// A `Move` proposes a position and nothing else; a turn proposes an
/// orientation and nothing else. The split is what lets mission control
/// wave turns through without a viability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub position: Option<Position>,
    pub orientation: Option<Orientation>,
}

#[derive(Debug, Clone)]
pub struct Rover {
    start_position: Position,
    start_orientation: Orientation,
    state: RoverState,
    pending_commands: VecDeque<Command>,
}

impl Rover {
    /// Builds a rover from its parsed record, ingesting the command block.
    ///
    /// Ingestion is all-or-nothing: if any character of the block fails to
    /// decode, the queue stays empty and the rover is marked failed on the
    /// spot. A rover acting on a half-readable transmission could end up
    /// parked where it blocks a healthy rover's path, so it never moves at
    /// all.
    pub fn new(record: &RoverRecord) -> Self {
        let mut rover = Self {
            start_position: record.position,
            start_orientation: record.orientation,
            state: RoverState {
                position: record.position,
                orientation: record.orientation,
                status: Status::Success,
                details: None,
            },
            pending_commands: VecDeque::new(),
        };

        match Command::parse_sequence(&record.command_text) {
            Some(commands) => rover.pending_commands = commands.into(),
            None => {
                rover.state.status = Status::CriticalFailure;
                rover.state.details = Some(INVALID_COMMAND_CODES.to_string());
            }
        }
        rover
    }

    /// Pops the next directive and returns the step it proposes.
    ///
    /// Consumes one queued command but never touches position or
    /// orientation; only [`commit_state`](Self::commit_state) does that.
    /// Returns `None` once the queue is exhausted.
    pub fn next_state(&mut self) -> Option<Proposal> {
        let command = self.pending_commands.pop_front()?;
        let proposal = match command {
            Command::Move => Proposal {
                position: Some(self.state.orientation.advance(self.state.position)),
                orientation: None,
            },
            Command::TurnLeft => Proposal {
                position: None,
                orientation: Some(self.state.orientation.turned_left()),
            },
            Command::TurnRight => Proposal {
                position: None,
                orientation: Some(self.state.orientation.turned_right()),
            },
        };
        Some(proposal)
    }

    /// Applies an approved proposal to the rover's state.
    pub fn commit_state(&mut self, proposal: Proposal) {
        if let Some(position) = proposal.position {
            self.state.position = position;
        }
        if let Some(orientation) = proposal.orientation {
            self.state.orientation = orientation;
        }
    }

    /// Fails the rover and rolls it back to its landing site.
    ///
    /// An in-flight step that was refused must leave no visible trace, so
    /// the reported position and orientation reset to the start values.
    pub fn mark_invalid(&mut self, reason: String) {
        self.state.status = Status::CriticalFailure;
        self.state.details = Some(reason);
        self.state.position = self.start_position;
        self.state.orientation = self.start_orientation;
    }

    pub fn state(&self) -> &RoverState {
        &self.state
    }

    pub fn start_position(&self) -> Position {
        self.start_position
    }

    pub fn start_orientation(&self) -> Orientation {
        self.start_orientation
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.pending_commands.is_empty()
    }
}
