// Grid module - the linked cell grid and its cell types

pub mod linked;
pub mod node;

// Re-export the main grid types for easy access
pub use linked::{Grid, NodeRef};
pub use node::{Direction, Node, NodeId, Position};

// Re-export common types used by grid callers
pub use crate::grid_errors::{GridError, GridResult};
