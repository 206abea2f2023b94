//! Directives a rover can execute, decoded from raw command text.

/// A single directive from mission control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one cell along the current heading.
    Move,
    /// Rotate 90 degrees counterclockwise in place.
    TurnLeft,
    /// Rotate 90 degrees clockwise in place.
    TurnRight,
}

impl Command {
    /// Decodes a single command code, tolerating lowercase.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Self::Move),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }

    /// Decodes a block of command text into an ordered directive list.
    ///
    /// Whitespace (including newlines between transmission fragments) is
    /// ignored. Any other unrecognized character poisons the whole block:
    /// the caller gets `None`, never a best-effort prefix. An empty block
    /// is a valid, zero-directive sequence.
    pub fn parse_sequence(text: &str) -> Option<Vec<Self>> {
        let mut commands = Vec::new();
        for code in text.chars() {
            if code.is_whitespace() {
                continue;
            }
            commands.push(Self::from_code(code)?);
        }
        Some(commands)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Move => "M",
            Self::TurnLeft => "L",
            Self::TurnRight => "R",
        };
        write!(f, "{code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_clean_sequence() {
        assert_eq!(
            Command::parse_sequence("LMR"),
            Some(vec![Command::TurnLeft, Command::Move, Command::TurnRight])
        );
    }

    #[test]
    fn whitespace_between_fragments_is_ignored() {
        assert_eq!(
            Command::parse_sequence("LM\nMR \tM"),
            Some(vec![
                Command::TurnLeft,
                Command::Move,
                Command::Move,
                Command::TurnRight,
                Command::Move,
            ])
        );
    }

    #[test]
    fn lowercase_codes_decode() {
        assert_eq!(
            Command::parse_sequence("lmr"),
            Some(vec![Command::TurnLeft, Command::Move, Command::TurnRight])
        );
    }

    #[test]
    fn one_bad_code_poisons_the_block() {
        assert_eq!(Command::parse_sequence("LM3R"), None);
        assert_eq!(Command::parse_sequence("LMRX"), None);
    }

    #[test]
    fn empty_text_is_a_valid_empty_sequence() {
        assert_eq!(Command::parse_sequence(""), Some(Vec::new()));
        assert_eq!(Command::parse_sequence("  \n "), Some(Vec::new()));
    }
}
