//! Core data model for the mission simulator.
//!
//! These types describe the plateau and the rovers on it: grid geometry,
//! compass headings, movement directives, and outcome classification.

mod cardinal;
mod command;
mod position;
mod status;

pub use cardinal::Orientation;
pub use command::Command;
pub use position::{GridSize, Position};
pub use status::Status;
