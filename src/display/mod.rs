// Display module for diagnostic grid output
pub mod formatters;

// Re-export main functions
pub use formatters::{
    format_all, format_connections, format_neighbor, format_not_found, print_section_header,
};
