// Linked Grid - cells addressed by position key, joined by directed relations
// The position mapping is the source of truth for membership; relations are
// plain arena handles and never consult the mapping.

use crate::display::formatters;
use crate::grid::node::{Direction, Node, NodeId, Position};
use crate::grid_errors::{GridError, GridResult};
use log::{debug, info, warn};
use slotmap::SlotMap;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Grid {
    // Cells are never removed from the arena, so relations left pointing at a
    // deleted cell still resolve.
    arena: SlotMap<NodeId, Node>,
    nodes: HashMap<Position, NodeId>,
    root: NodeId,
}

impl Grid {
    /// Create a grid seeded with a root cell, registered immediately.
    pub fn new(file: char, rank: i32) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new(file, rank));

        let mut nodes = HashMap::new();
        nodes.insert(Position::new(file, rank), root);

        debug!("Created grid with root {}{}", file, rank);
        Self { arena, nodes, root }
    }

    /// Allocate a cell owned by this grid without registering its key.
    ///
    /// The cell becomes a member of the mapping once it is passed as the new
    /// node of an insert call.
    pub fn create_node(&mut self, file: char, rank: i32) -> NodeId {
        self.arena.insert(Node::new(file, rank))
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub fn root_node(&self) -> Option<NodeRef<'_>> {
        self.node_ref(self.root)
    }

    /// Raw access to any cell allocated by this grid, registered or not.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.arena.get(id).map(|node| NodeRef {
            grid: self,
            id,
            node,
        })
    }

    /// Point `node`'s relation in `direction` at `new_node` and register
    /// `new_node` under its current key.
    ///
    /// Only one directed edge is created; the reciprocal relation is left
    /// alone. Absent or unknown handles make this a silent no-op.
    pub fn insert(
        &mut self,
        direction: Direction,
        node: impl Into<Option<NodeId>>,
        new_node: impl Into<Option<NodeId>>,
    ) {
        let (Some(node), Some(new_node)) = (node.into(), new_node.into()) else {
            debug!("Ignoring insert {}: missing node argument", direction);
            return;
        };

        let Some(key) = self.arena.get(new_node).map(Node::position) else {
            debug!("Ignoring insert {}: new node not in this grid", direction);
            return;
        };

        let Some(existing) = self.arena.get_mut(node) else {
            debug!("Ignoring insert {} of {}: node not in this grid", direction, key);
            return;
        };

        existing.set_neighbor(direction, Some(new_node));
        debug!("Linked {} -{}-> {}", existing.position(), direction, key);

        self.register(key, new_node);
    }

    pub fn insert_top(
        &mut self,
        node: impl Into<Option<NodeId>>,
        new_node: impl Into<Option<NodeId>>,
    ) {
        self.insert(Direction::Top, node, new_node);
    }

    pub fn insert_bottom(
        &mut self,
        node: impl Into<Option<NodeId>>,
        new_node: impl Into<Option<NodeId>>,
    ) {
        self.insert(Direction::Bottom, node, new_node);
    }

    pub fn insert_left(
        &mut self,
        node: impl Into<Option<NodeId>>,
        new_node: impl Into<Option<NodeId>>,
    ) {
        self.insert(Direction::Left, node, new_node);
    }

    pub fn insert_right(
        &mut self,
        node: impl Into<Option<NodeId>>,
        new_node: impl Into<Option<NodeId>>,
    ) {
        self.insert(Direction::Right, node, new_node);
    }

    /// Exact-key lookup.
    pub fn select(&self, file: char, rank: i32) -> Option<NodeRef<'_>> {
        self.select_id(file, rank).and_then(|id| self.node_ref(id))
    }

    pub fn select_id(&self, file: char, rank: i32) -> Option<NodeId> {
        self.nodes.get(&Position::new(file, rank)).copied()
    }

    /// Rename a cell: drop the old key, rewrite its file and rank, register
    /// the new key. An existing entry under the new key is overwritten.
    pub fn update(
        &mut self,
        file: char,
        rank: i32,
        new_file: char,
        new_rank: i32,
    ) -> GridResult<()> {
        let old_key = Position::new(file, rank);
        let Some(id) = self.nodes.remove(&old_key) else {
            warn!("Update failed: node {} not found", old_key);
            return Err(GridError::NotFound { file, rank });
        };

        if let Some(node) = self.arena.get_mut(id) {
            node.file = new_file;
            node.rank = new_rank;
        }

        let new_key = Position::new(new_file, new_rank);
        info!("Renamed node {} to {}", old_key, new_key);
        self.register(new_key, id);
        Ok(())
    }

    /// Unregister a cell and clear the reciprocal relation on each neighbor
    /// it points at.
    ///
    /// The neighbor-side relation is cleared whether or not it actually
    /// pointed back here. The deleted cell keeps its own relations unless it
    /// is its own neighbor.
    pub fn delete(&mut self, file: char, rank: i32) -> GridResult<()> {
        let key = Position::new(file, rank);
        let Some(id) = self.select_id(file, rank) else {
            warn!("Delete failed: node {} not found", key);
            return Err(GridError::NotFound { file, rank });
        };

        // Re-read each relation just before clearing: a self-loop may already
        // have cleared a later one.
        for direction in Direction::ALL {
            let Some(neighbor) = self.arena.get(id).and_then(|n| n.neighbor(direction)) else {
                continue;
            };
            if let Some(neighbor) = self.arena.get_mut(neighbor) {
                neighbor.set_neighbor(direction.opposite(), None);
                debug!(
                    "Cleared {} of {} while deleting {}",
                    direction.opposite(),
                    neighbor.position(),
                    key
                );
            }
        }

        self.nodes.remove(&key);
        info!("Deleted node {}", key);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, file: char, rank: i32) -> bool {
        self.nodes.contains_key(&Position::new(file, rank))
    }

    /// Registered keys, in the mapping's (unspecified) iteration order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.nodes.keys().copied()
    }

    /// Registered cells, in the mapping's (unspecified) iteration order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.nodes.values().filter_map(|&id| self.node_ref(id))
    }

    pub fn connections_report(&self, file: char, rank: i32) -> String {
        match self.select(file, rank) {
            Some(node) => formatters::format_connections(&node),
            None => formatters::format_not_found(Position::new(file, rank)),
        }
    }

    pub fn all_nodes_report(&self) -> String {
        formatters::format_all(self.len(), self.iter().map(|node| node.position()))
    }

    /// Print a cell's four relations, or a not-found line.
    pub fn display_connections(&self, file: char, rank: i32) {
        print!("{}", self.connections_report(file, rank));
    }

    /// Print the registered cell count and every key.
    pub fn display_all(&self) {
        print!("{}", self.all_nodes_report());
    }

    fn register(&mut self, key: Position, id: NodeId) {
        if let Some(previous) = self.nodes.insert(key, id) {
            if previous != id {
                warn!("Key {} already registered, replacing previous node", key);
            }
        }
    }
}

/// Read view of a cell that can follow relations within its grid.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    grid: &'a Grid,
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn position(&self) -> Position {
        self.node.position()
    }

    pub fn file(&self) -> char {
        self.node.file
    }

    pub fn rank(&self) -> i32 {
        self.node.rank
    }

    pub fn neighbor(&self, direction: Direction) -> Option<NodeRef<'a>> {
        self.node
            .neighbor(direction)
            .and_then(|id| self.grid.node_ref(id))
    }

    pub fn top(&self) -> Option<NodeRef<'a>> {
        self.neighbor(Direction::Top)
    }

    pub fn bottom(&self) -> Option<NodeRef<'a>> {
        self.neighbor(Direction::Bottom)
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.neighbor(Direction::Left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.neighbor(Direction::Right)
    }
}
