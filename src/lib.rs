//! Manually linked 2D grid of cells.
//!
//! Each cell is addressed by a file letter and a numeric rank (`"B4"`) and
//! holds four directed neighbor relations. The [`Grid`] owns every cell and
//! keeps a position-keyed mapping in sync with each cell's live key.

pub mod config;
pub mod demo;
pub mod display;
pub mod grid;
pub mod grid_errors;

pub use config::{DisplayConfig, GridConfig, MeshConfig};
pub use grid::{Direction, Grid, Node, NodeId, NodeRef, Position};
pub use grid_errors::{GridError, GridResult};
