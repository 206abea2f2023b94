//! Decoding of raw command data into a mission roster.
//!
//! Command data is a line-oriented transmission: a two-digit grid header,
//! then alternating rover start lines (`12 N`) and blocks of command text.
//! Parsing here is structural only; command text is carried through as-is
//! and judged later, when the rover ingests it.

use thiserror::Error;

use crate::model::{GridSize, Orientation, Position};

/// The decoded transmission: plateau bounds plus one record per rover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandData {
    pub grid_size: GridSize,
    pub rovers: Vec<RoverRecord>,
}

/// One rover's landing site, heading, and raw command text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverRecord {
    pub position: Position,
    pub orientation: Orientation,
    pub command_text: String,
}

/// Failures that prevent a mission from being assembled at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The transmission's first non-blank line was not a two-digit grid
    /// header, so nothing after it can be trusted.
    #[error("CommandData does not begin with valid GridSize data.")]
    MissingGridSize,
}

/// Decodes a full transmission.
///
/// The first non-blank line must be the grid header. After it, every line
/// matching the start-line shape opens a new rover record; all lines up to
/// the next start line become that rover's command text, preserved verbatim
/// (including garbled fragments, which the rover itself will reject). Lines
/// arriving before the first start line belong to no rover and are dropped.
pub fn parse_command_data(input: &str) -> Result<CommandData, ParseError> {
    let mut lines = input.lines();

    let grid_size = loop {
        let Some(line) = lines.next() else {
            return Err(ParseError::MissingGridSize);
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        break parse_grid_header(trimmed).ok_or(ParseError::MissingGridSize)?;
    };

    let mut rovers = Vec::new();
    let mut open_record: Option<(Position, Orientation, Vec<&str>)> = None;
    for line in lines {
        if let Some((position, orientation)) = parse_start_line(line.trim()) {
            if let Some(record) = open_record.take() {
                rovers.push(seal_record(record));
            }
            open_record = Some((position, orientation, Vec::new()));
        } else if let Some((_, _, text)) = open_record.as_mut() {
            text.push(line);
        }
    }
    if let Some(record) = open_record.take() {
        rovers.push(seal_record(record));
    }

    Ok(CommandData { grid_size, rovers })
}

fn seal_record((position, orientation, text): (Position, Orientation, Vec<&str>)) -> RoverRecord {
    RoverRecord {
        position,
        orientation,
        command_text: text.join("\n"),
    }
}

/// Exactly two ASCII digits, one per axis: `55` bounds a 5 x 5 plateau.
fn parse_grid_header(line: &str) -> Option<GridSize> {
    let (width, height) = parse_digit_pair(line)?;
    Some(GridSize::new(width, height))
}

/// A digit pair and a compass letter, separated by whitespace: `12 N`.
fn parse_start_line(line: &str) -> Option<(Position, Orientation)> {
    let mut parts = line.split_whitespace();
    let coordinates = parts.next()?;
    let heading = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (x, y) = parse_digit_pair(coordinates)?;
    let mut symbols = heading.chars();
    let symbol = symbols.next()?;
    if symbols.next().is_some() {
        return None;
    }
    let orientation = Orientation::from_symbol(symbol)?;
    Some((Position::new(x, y), orientation))
}

fn parse_digit_pair(token: &str) -> Option<(i32, i32)> {
    let mut digits = token.chars();
    let (Some(first), Some(second), None) =
        (digits.next(), digits.next(), digits.next())
    else {
        return None;
    };
    let first = i32::try_from(first.to_digit(10)?).ok()?;
    let second = i32::try_from(second.to_digit(10)?).ok()?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "55\n12 N\nLMLMLMLMM\n33 E\nMMRMMRMRRM";

    #[test]
    fn decodes_the_classic_two_rover_transmission() {
        let data = parse_command_data(CLASSIC).unwrap();
        assert_eq!(data.grid_size, GridSize::new(5, 5));
        assert_eq!(data.rovers.len(), 2);

        assert_eq!(data.rovers[0].position, Position::new(1, 2));
        assert_eq!(data.rovers[0].orientation, Orientation::North);
        assert_eq!(data.rovers[0].command_text, "LMLMLMLMM");

        assert_eq!(data.rovers[1].position, Position::new(3, 3));
        assert_eq!(data.rovers[1].orientation, Orientation::East);
        assert_eq!(data.rovers[1].command_text, "MMRMMRMRRM");
    }

    #[test]
    fn grid_header_must_lead_the_transmission() {
        assert_eq!(
            parse_command_data("moo\n55\n12 N\nLM"),
            Err(ParseError::MissingGridSize)
        );
        assert_eq!(parse_command_data(""), Err(ParseError::MissingGridSize));
        assert_eq!(parse_command_data("5 5\n12 N"), Err(ParseError::MissingGridSize));
    }

    #[test]
    fn blank_lines_before_the_header_are_tolerated() {
        let data = parse_command_data("\n  \n55\n12 N\nLM").unwrap();
        assert_eq!(data.grid_size, GridSize::new(5, 5));
    }

    #[test]
    fn grid_only_transmission_has_no_rovers() {
        let data = parse_command_data("55").unwrap();
        assert!(data.rovers.is_empty());
    }

    #[test]
    fn start_line_without_commands_yields_empty_text() {
        let data = parse_command_data("55\n12 N\n33 E\nMM").unwrap();
        assert_eq!(data.rovers[0].command_text, "");
        assert_eq!(data.rovers[1].command_text, "MM");
    }

    #[test]
    fn garbled_fragments_stay_in_the_owning_record() {
        let data = parse_command_data("55\n12 N\nLM*interference*\nMM\n33 E\nM").unwrap();
        assert_eq!(data.rovers[0].command_text, "LM*interference*\nMM");
        assert_eq!(data.rovers[1].command_text, "M");
    }

    #[test]
    fn lines_before_the_first_start_line_are_dropped() {
        let data = parse_command_data("55\nstatic\n12 N\nLM").unwrap();
        assert_eq!(data.rovers.len(), 1);
        assert_eq!(data.rovers[0].command_text, "LM");
    }

    #[test]
    fn start_lines_tolerate_case_and_spacing() {
        let data = parse_command_data("55\n12   n\nLM").unwrap();
        assert_eq!(data.rovers[0].orientation, Orientation::North);
    }

    #[test]
    fn malformed_start_lines_are_not_rover_records() {
        // Three tokens, a three-digit pair, and a two-letter heading all
        // fail the shape check and fall through as command noise.
        let data = parse_command_data("55\n1 2 N\n123 N\n12 NE").unwrap();
        assert!(data.rovers.is_empty());
    }
}
