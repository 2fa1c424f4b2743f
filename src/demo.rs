// Demo mesh - hand-linked rows of cells plus the scripted diagnostic run
//
// Every edge is inserted twice, once per direction, since an insert only
// ever creates a single directed relation.

use crate::config::{GridConfig, MeshConfig};
use crate::display::print_section_header;
use crate::grid::{Grid, NodeId, Position};
use crate::grid_errors::GridResult;
use log::{debug, info};

/// Build a fully linked mesh: one row per file letter, ranks as columns.
///
/// Rows are joined left/right, consecutive rows are joined top/bottom with the
/// later file letter on top.
pub fn build_mesh(config: &MeshConfig) -> GridResult<Grid> {
    config.validate()?;

    let root = config.root;
    let mut grid = Grid::new(root.file, root.rank);

    let mut rows: Vec<Vec<NodeId>> = Vec::new();
    for file in config.file_letters() {
        let mut row = Vec::with_capacity(config.ranks as usize);
        for rank in 1..=config.ranks {
            if Position::new(file, rank) == root {
                row.push(grid.root());
            } else {
                row.push(grid.create_node(file, rank));
            }
        }
        rows.push(row);
    }

    for row in &rows {
        for pair in row.windows(2) {
            grid.insert_right(pair[0], pair[1]);
        }
        for pair in row.windows(2).rev() {
            grid.insert_left(pair[1], pair[0]);
        }
    }
    debug!("Linked {} rows horizontally", rows.len());

    for rank in 0..config.ranks as usize {
        for pair in rows.windows(2) {
            grid.insert_top(pair[0][rank], pair[1][rank]);
        }
    }
    for rank in 0..config.ranks as usize {
        for pair in rows.windows(2).rev() {
            grid.insert_bottom(pair[1][rank], pair[0][rank]);
        }
    }
    debug!("Linked {} ranks vertically", config.ranks);

    info!(
        "Built {}x{} mesh with {} nodes",
        rows.len(),
        config.ranks,
        grid.len()
    );
    Ok(grid)
}

/// Cells the diagnostic script reports on, with their headings.
///
/// Root, the cell right of the root, the middle cell, the first cell of the
/// top row and the top-right corner.
pub fn script_targets(config: &MeshConfig) -> Vec<(String, Position)> {
    let files = config.file_letters();
    let Some(&top_file) = files.last() else {
        return Vec::new();
    };
    let middle_file = files[files.len() / 2];
    let root = config.root;

    let second = Position::new(root.file, root.rank.saturating_add(1));
    let middle = Position::new(middle_file, config.ranks / 2 + config.ranks % 2);
    let top_first = Position::new(top_file, 1);
    let top_right = Position::new(top_file, config.ranks);

    vec![
        (format!("Root node ({}) connections:", root), root),
        (format!("{} connections:", second), second),
        (format!("Middle node ({}):", middle), middle),
        (format!("{} connections:", top_first), top_first),
        (format!("Top right corner ({}):", top_right), top_right),
    ]
}

/// Print the full node listing, then the connections of each script target.
pub fn run_script(grid: &Grid, config: &GridConfig) -> std::io::Result<()> {
    let mesh = &config.mesh;
    let files = mesh.file_letters();
    let header = format!("Full {}x{} Grid created!", files.len(), mesh.ranks);

    if config.display.show_headers {
        print_section_header(&header, config.display.color)?;
    }
    grid.display_all();

    for (title, position) in script_targets(mesh) {
        if config.display.show_headers {
            print_section_header(&title, config.display.color)?;
        }
        grid.display_connections(position.file, position.rank);
    }
    Ok(())
}
