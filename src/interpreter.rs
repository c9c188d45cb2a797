//! Command grammar and the interpreter that drives a [`Robot`].
//!
//! The entry point is [`CommandInterpreter`]. Parse a raw input line with
//! [`Command::from_str`], then hand the command to
//! [`CommandInterpreter::execute`], which applies it to the robot and returns
//! the text to present to the user.

use crate::robot::{Orientation, ParseOrientationError, Robot, Rotation};
use glam::IVec2;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// One-line summary of the command grammar, shown at startup and on HELP.
pub const AVAILABLE_COMMANDS: &str =
    "Available commands: PLACE X,Y,F | MOVE | LEFT | RIGHT | REPORT | STOP | HELP";

/// Errors produced while parsing a raw command line.
///
/// Every malformed token is rejected here, before it can reach the robot;
/// nothing is silently defaulted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CommandError {
    /// PLACE without exactly one `X,Y,F` argument group.
    #[error("invalid PLACE command, please provide X,Y,F coordinates separated by commas")]
    MalformedPlace,
    /// A PLACE coordinate that is not an integer.
    #[error("invalid PLACE coordinate: {0}")]
    InvalidCoordinate(#[from] ParseIntError),
    /// A PLACE orientation token outside the four compass values.
    #[error(transparent)]
    UnknownOrientation(#[from] ParseOrientationError),
    /// Anything that is not a recognized command word.
    #[error("unknown command: {0}")]
    Unknown(String),
}

/// A validated command, ready for dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place (or re-place) the robot at a position and facing.
    Place(IVec2, Orientation),
    /// Advance one unit along the current facing.
    Move,
    /// Quarter-turn left or right.
    Rotate(Rotation),
    /// Report the current pose.
    Report,
    /// Show the command summary.
    Help,
    /// End the session.
    Stop,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a raw input line. Matching is case-insensitive; PLACE takes its
    /// coordinates as a single comma-separated group, `PLACE X,Y,F`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_uppercase();
        match line.as_str() {
            "MOVE" => return Ok(Self::Move),
            "LEFT" => return Ok(Self::Rotate(Rotation::Left)),
            "RIGHT" => return Ok(Self::Rotate(Rotation::Right)),
            "REPORT" => return Ok(Self::Report),
            "HELP" => return Ok(Self::Help),
            "STOP" => return Ok(Self::Stop),
            _ => {}
        }
        if let Some(args) = line.strip_prefix("PLACE") {
            let mut groups = args.split_whitespace();
            let (Some(coords), None) = (groups.next(), groups.next()) else {
                return Err(CommandError::MalformedPlace);
            };
            let mut fields = coords.split(',');
            let (Some(x), Some(y), Some(facing), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(CommandError::MalformedPlace);
            };
            let position = IVec2::new(x.parse()?, y.parse()?);
            return Ok(Self::Place(position, facing.parse()?));
        }
        Err(CommandError::Unknown(line))
    }
}

/// The result of executing one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to present; the session continues.
    Continue(String),
    /// Final report text; the session ends.
    Stop(String),
}

impl Outcome {
    /// The text carried by either variant.
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Stop(text) => text,
        }
    }
}

/// Applies [`Command`]s to a [`Robot`] and renders the user-facing responses.
///
/// This is the placement guard's home: MOVE, LEFT, RIGHT and REPORT are only
/// dispatched to the robot once [`Robot::is_placed`] holds, so the core
/// primitives never see an unplaced precondition violation in normal flow.
pub struct CommandInterpreter {
    robot: Robot,
}

impl CommandInterpreter {
    /// Creates an interpreter driving `robot`.
    pub fn new(robot: Robot) -> Self {
        Self { robot }
    }

    /// Read access to the underlying robot, mainly for tests and the shell.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Executes one command against the robot.
    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(?command, "executing command");
        let text = match command {
            Command::Place(position, facing) => {
                self.robot.place(position, facing);
                format!("Robot placed at ({},{},{facing}).", position.x, position.y)
            }
            Command::Move => {
                if !self.robot.is_placed() {
                    "Robot not placed. Please place robot before moving.".to_owned()
                } else if self.robot.move_forward(1) {
                    let pose = self.robot.pose().expect("robot was placed");
                    format!(
                        "Robot moved. Location: {}, {}, facing {}",
                        pose.position.x, pose.position.y, pose.facing
                    )
                } else {
                    "Robot movement failed. Stopped moving. See logs for more details.".to_owned()
                }
            }
            Command::Rotate(rotation) => match self.robot.rotate(rotation) {
                Some(facing) => format!("Robot is now facing {facing}"),
                None => "Robot not placed. Please place robot before turning.".to_owned(),
            },
            Command::Report => match self.robot.pose() {
                Some(pose) => pose.to_string(),
                None => "Robot not placed.".to_owned(),
            },
            Command::Help => AVAILABLE_COMMANDS.to_owned(),
            Command::Stop => {
                let location = match self.robot.pose() {
                    Some(pose) => pose.to_string(),
                    None => "never placed".to_owned(),
                };
                return Outcome::Stop(format!("Robots final location: {location}"));
            }
        };
        Outcome::Continue(text)
    }

    /// Parses and executes a raw input line in one step.
    ///
    /// Parse failures are reported as a `Continue` outcome carrying the error
    /// text plus the command summary; a bad line never ends the session.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                warn!(%err, "rejected input line");
                Outcome::Continue(format!("{err}. {AVAILABLE_COMMANDS}"))
            }
        }
    }
}
