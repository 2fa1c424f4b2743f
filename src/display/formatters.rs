// Display formatting utilities for grid diagnostics

use crate::grid::{Direction, NodeRef, Position};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Render a relation as its target key, or "None" when unset
pub fn format_neighbor(neighbor: Option<NodeRef<'_>>) -> String {
    neighbor
        .map(|n| n.position().to_string())
        .unwrap_or_else(|| "None".to_string())
}

/// Per-cell report: one line per relation followed by a blank line
pub fn format_connections(node: &NodeRef<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Connections for {}:", node.position());
    for direction in Direction::ALL {
        let label = format!("{}:", direction.label());
        let _ = writeln!(
            out,
            "  {:<8}{}",
            label,
            format_neighbor(node.neighbor(direction))
        );
    }
    out.push('\n');
    out
}

pub fn format_not_found(position: Position) -> String {
    format!("Node {} not found.\n", position)
}

/// Cell count followed by every key, in the order given
pub fn format_all(count: usize, positions: impl IntoIterator<Item = Position>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total nodes in grid: {}", count);
    for position in positions {
        let _ = writeln!(out, "  {}", position);
    }
    out.push('\n');
    out
}

/// Print a section heading, coloured when the terminal output allows it
pub fn print_section_header(title: &str, color: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if color {
        queue!(stdout, SetForegroundColor(Color::Cyan))?;
        queue!(stdout, Print(title))?;
        queue!(stdout, ResetColor)?;
        queue!(stdout, Print("\n"))?;
    } else {
        queue!(stdout, Print(title))?;
        queue!(stdout, Print("\n"))?;
    }
    stdout.flush()
}
