//! # tabletop-robot
//!
//! A toy robot simulator confined to a rectangular bounded grid. Discrete
//! commands place the robot, move it one unit forward, rotate it a quarter
//! turn, or report its pose; a move that would leave the grid is rejected and
//! the robot stays put.
//!
//! The crate decouples the state machine ([`Robot`] validated against a
//! [`SimulationArea`]) from the command surface ([`CommandInterpreter`]), so
//! the core can be driven by the bundled interactive shell or embedded
//! directly.

pub mod area;
pub mod config;
pub mod interpreter;
pub mod robot;

pub use area::*;
pub use config::*;
pub use interpreter::*;
pub use robot::*;
