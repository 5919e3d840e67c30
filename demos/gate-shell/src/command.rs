//! Command-line parsing.  Pure: no gate access, no I/O.

use std::path::PathBuf;

use thiserror::Error;

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CheckIn { name: String, class: i64, group: u32 },
    SetGateCapacity(i64),
    Board,
    Status,
    Load(PathBuf),
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Class must be a number 0-6")]
    ClassNotNumber,

    #[error("Group ID must be a number")]
    GroupNotNumber,

    #[error("Gate capacity must be a number")]
    CapacityNotNumber,

    #[error("Unknown command. Type 'HELP' for available commands.")]
    Unknown(String),
}

const CHECKIN_USAGE:  &str = "CHECKIN <name> <class> [group_id]";
const CAPACITY_USAGE: &str = "SET_GATE_CAPACITY <number>";
const LOAD_USAGE:     &str = "LOAD <manifest.csv>";

/// Parse a non-blank line.  The keyword is case-insensitive; arguments are
/// whitespace-separated.  Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(keyword) = parts.first() else {
        return Ok(None);
    };

    let cmd = match keyword.to_ascii_uppercase().as_str() {
        "CHECKIN" => {
            if parts.len() < 3 {
                return Err(ParseError::Usage(CHECKIN_USAGE));
            }
            let class = parts[2].parse().map_err(|_| ParseError::ClassNotNumber)?;
            let group = match parts.get(3) {
                Some(g) => g.parse().map_err(|_| ParseError::GroupNotNumber)?,
                None    => 0,
            };
            Command::CheckIn { name: parts[1].to_string(), class, group }
        }
        "SET_GATE_CAPACITY" => {
            if parts.len() != 2 {
                return Err(ParseError::Usage(CAPACITY_USAGE));
            }
            Command::SetGateCapacity(parts[1].parse().map_err(|_| ParseError::CapacityNotNumber)?)
        }
        "LOAD" => {
            if parts.len() != 2 {
                return Err(ParseError::Usage(LOAD_USAGE));
            }
            Command::Load(PathBuf::from(parts[1]))
        }
        "BOARD"  => Command::Board,
        "STATUS" => Command::Status,
        "HELP"   => Command::Help,
        "EXIT"   => Command::Exit,
        other    => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}
