//! Sojourner: a Mars rover mission simulator.
//!
//! Command data describes a plateau and a roster of rovers; mission control
//! deploys them strictly one at a time, judging every proposed step against
//! the grid and the rest of the roster, and renders a final report.

pub mod cli;
pub mod config;
pub mod mission;
pub mod model;
pub mod parse;
pub mod report;
pub mod rover;

pub use mission::{MissionControl, StepFault};
pub use model::{Command, GridSize, Orientation, Position, Status};
pub use parse::{CommandData, ParseError, RoverRecord, parse_command_data};
pub use report::{MissionReport, REPORT_SENTINEL, RoverReport};
pub use rover::{INVALID_COMMAND_CODES, Proposal, Rover, RoverState};
