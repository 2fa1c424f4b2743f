// Configuration for the demo mesh and diagnostic output
pub mod grid_config;

pub use grid_config::{DisplayConfig, GridConfig, MeshConfig};
