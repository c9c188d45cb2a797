//! The bounded rectangular area the robot is confined to.

use glam::IVec2;
use thiserror::Error;
use tracing::debug;

/// Error raised when the configured area dimensions are not usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("simulation area dimensions must be non-negative, got ({width}, {height})")]
pub struct AreaError {
    /// The rejected width.
    pub width: i32,
    /// The rejected height.
    pub height: i32,
}

/// An immutable rectangle of valid grid points.
///
/// An area of `(width, height)` admits `(width + 1) x (height + 1)` grid points:
/// both bounds are inclusive, so a 5x5 area spans coordinates 0 through 5 on each
/// axis. Constructed once from configuration and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationArea {
    width: i32,
    height: i32,
}

impl SimulationArea {
    /// Creates an area from its two dimensions, rejecting negative values.
    pub fn new(width: i32, height: i32) -> Result<Self, AreaError> {
        if width < 0 || height < 0 {
            return Err(AreaError { width, height });
        }
        Ok(Self { width, height })
    }

    /// The inclusive upper bound on the x axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The inclusive upper bound on the y axis.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns true iff `point` lies on a valid grid point of this area.
    ///
    /// This is the sole boundary-validation primitive; every move check routes
    /// through it.
    pub fn contains(&self, point: IVec2) -> bool {
        let inside =
            point.x >= 0 && point.x <= self.width && point.y >= 0 && point.y <= self.height;
        if !inside {
            debug!(x = point.x, y = point.y, "point outside simulation area");
        }
        inside
    }
}
