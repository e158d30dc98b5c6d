// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation: claimed edges and box ownership

use std::collections::BTreeSet;

use crate::{BoxPos, Edge, Player};

/// Claimed edges plus the owner of every box
#[derive(Debug, Clone)]
pub struct Board {
    /// Dots per side
    size: u8,
    /// Claimed edges, ordered so iteration is deterministic
    edges: BTreeSet<Edge>,
    /// Box owners in row-major order, `(size - 1)²` entries
    owners: Vec<Option<Player>>,
    /// Number of `Some` entries in `owners`
    claimed_boxes: usize,
}

impl Board {
    /// Create an empty board with `size` dots per side
    pub fn new(size: u8) -> Self {
        let per_side = size.saturating_sub(1) as usize;
        Self {
            size,
            edges: BTreeSet::new(),
            owners: vec![None; per_side * per_side],
            claimed_boxes: 0,
        }
    }

    /// Dots per side
    pub fn size(&self) -> u8 {
        self.size
    }

    /// True if the edge has been claimed
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Record a claimed edge. Returns false if it was already there.
    pub fn insert_edge(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Claimed edges in canonical order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the owner of a box, `None` if unclaimed or off the board
    pub fn owner(&self, pos: BoxPos) -> Option<Player> {
        if !pos.is_valid(self.size) {
            return None;
        }

        self.owners[self.box_index(pos)]
    }

    /// Assign an unclaimed box. Returns false if off the board or already owned.
    pub fn set_owner(&mut self, pos: BoxPos, player: Player) -> bool {
        if !pos.is_valid(self.size) {
            return false;
        }

        let idx = self.box_index(pos);
        if self.owners[idx].is_some() {
            return false;
        }

        self.owners[idx] = Some(player);
        self.claimed_boxes += 1;
        true
    }

    /// True iff all four bounding edges of an on-board box are claimed
    pub fn is_box_complete(&self, pos: BoxPos) -> bool {
        pos.is_valid(self.size) && pos.bounding_edges().iter().all(|edge| self.has_edge(edge))
    }

    /// Owners in row-major order
    pub fn owners(&self) -> &[Option<Player>] {
        &self.owners
    }

    pub fn claimed_boxes(&self) -> usize {
        self.claimed_boxes
    }

    pub fn total_boxes(&self) -> usize {
        self.owners.len()
    }

    /// Convert a box position to an index into `owners`
    fn box_index(&self, pos: BoxPos) -> usize {
        (pos.y as usize) * (self.size as usize - 1) + (pos.x as usize)
    }
}
