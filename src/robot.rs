//! Robot state and transition operations.

use crate::area::SimulationArea;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Error raised when a token does not name one of the four orientations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized orientation `{0}`, expected NORTH, EAST, SOUTH or WEST")]
pub struct ParseOrientationError(pub String);

/// The four compass orientations the robot can face.
///
/// Cyclically ordered clockwise: North, East, South, West. Rotation walks this
/// cycle one step at a time and wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// The orientation one quarter-turn counter-clockwise from this one.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The orientation one quarter-turn clockwise from this one.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step along this orientation's axis. North is +Y, East is +X.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORTH" => Ok(Self::North),
            "EAST" => Ok(Self::East),
            "SOUTH" => Ok(Self::South),
            "WEST" => Ok(Self::West),
            other => Err(ParseOrientationError(other.to_owned())),
        }
    }
}

/// A quarter-turn rotation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

/// A placed robot's position and facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Grid coordinates, x east and y north.
    pub position: IVec2,
    /// Current facing.
    pub facing: Orientation,
}

impl fmt::Display for Pose {
    /// Renders the report form `(x,y,ORIENTATION)`, e.g. `(0,1,NORTH)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.position.x, self.position.y, self.facing)
    }
}

/// The robot state machine.
///
/// Starts unplaced and stays that way until the first [`place`](Self::place);
/// there is no unplace transition. Moves are validated against the
/// [`SimulationArea`], rotations and placements are not.
#[derive(Clone, Copy, Debug)]
pub struct Robot {
    area: SimulationArea,
    pose: Option<Pose>,
}

impl Robot {
    /// Creates an unplaced robot confined to `area`.
    pub fn new(area: SimulationArea) -> Self {
        Self { area, pose: None }
    }

    /// The area this robot is confined to.
    pub fn area(&self) -> SimulationArea {
        self.area
    }

    /// True once the robot has been placed at least once.
    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// The current pose, or `None` while unplaced.
    ///
    /// Callers present a "not placed" message for the `None` case rather than
    /// reporting; a placed pose reads back unchanged until the next mutation.
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Places (or re-places) the robot, overwriting any previous pose.
    ///
    /// Placement deliberately does not consult the area: the source contract
    /// validates bounds on MOVE only, so an out-of-area PLACE is accepted as
    /// given. Re-placement is always allowed.
    pub fn place(&mut self, position: IVec2, facing: Orientation) {
        debug!(x = position.x, y = position.y, %facing, "placing robot");
        self.pose = Some(Pose { position, facing });
    }

    /// Rotates the robot a quarter turn, returning the new facing.
    ///
    /// Returns `None` while unplaced; the command layer checks
    /// [`is_placed`](Self::is_placed) before dispatching in normal operation.
    pub fn rotate(&mut self, rotation: Rotation) -> Option<Orientation> {
        let pose = self.pose.as_mut()?;
        pose.facing = match rotation {
            Rotation::Left => pose.facing.left(),
            Rotation::Right => pose.facing.right(),
        };
        debug!(facing = %pose.facing, "robot rotated");
        Some(pose.facing)
    }

    /// Advances `distance` units along the current facing.
    ///
    /// The candidate position is accepted only if the area contains it; a
    /// rejected move leaves the pose untouched. Returns true iff the position
    /// changed. Rejection is an ordinary outcome, not an error.
    pub fn move_forward(&mut self, distance: i32) -> bool {
        let Some(pose) = self.pose.as_mut() else {
            warn!("move requested before placement");
            return false;
        };
        let candidate = pose.position + pose.facing.step() * distance;
        if candidate == pose.position {
            // distance 0; distinguished from a boundary rejection in logs only.
            warn!(distance, "move produced no change");
            return false;
        }
        if !self.area.contains(candidate) {
            warn!(
                x = candidate.x,
                y = candidate.y,
                "move rejected, candidate outside simulation area"
            );
            return false;
        }
        debug!(x = candidate.x, y = candidate.y, "robot moved");
        pose.position = candidate;
        true
    }
}
