//! Line-mode parsing for the plain console front end.
//!
//! One command per line. A line holding a single space is a hard drop, so
//! only the line terminator is stripped, never surrounding whitespace.

use crate::types::Command;

/// What a console line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    Command(Command),
    Quit,
    /// Anything unrecognised, including an empty line.
    Unknown,
}

/// Parse one console line.
pub fn parse_line(line: &str) -> LineInput {
    let line = line.trim_end_matches(['\n', '\r']);
    let command = match line {
        "a" => Command::MoveLeft,
        "d" => Command::MoveRight,
        "s" => Command::SoftDrop,
        "w" => Command::Rotate,
        "z" => Command::Hold,
        " " => Command::HardDrop,
        "o" => Command::Save,
        "q" => return LineInput::Quit,
        _ => return LineInput::Unknown,
    };
    LineInput::Command(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_letters() {
        assert_eq!(parse_line("a\n"), LineInput::Command(Command::MoveLeft));
        assert_eq!(parse_line("d"), LineInput::Command(Command::MoveRight));
        assert_eq!(parse_line("s\r\n"), LineInput::Command(Command::SoftDrop));
        assert_eq!(parse_line("w"), LineInput::Command(Command::Rotate));
        assert_eq!(parse_line("z"), LineInput::Command(Command::Hold));
        assert_eq!(parse_line("o"), LineInput::Command(Command::Save));
        assert_eq!(parse_line("q\n"), LineInput::Quit);
    }

    #[test]
    fn test_single_space_is_hard_drop() {
        assert_eq!(parse_line(" \n"), LineInput::Command(Command::HardDrop));
        assert_eq!(parse_line("  "), LineInput::Unknown);
    }

    #[test]
    fn test_unknown_lines() {
        assert_eq!(parse_line(""), LineInput::Unknown);
        assert_eq!(parse_line("\n"), LineInput::Unknown);
        assert_eq!(parse_line("A"), LineInput::Unknown);
        assert_eq!(parse_line("left"), LineInput::Unknown);
    }
}
