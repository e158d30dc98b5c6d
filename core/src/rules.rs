// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and validation logic

use crate::{board::Board, BoxPos, Edge, GameError, Orientation, Point};

/// Validates moves against a board
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check that the edge between `p1` and `p2` may be claimed
    pub fn check_edge(&self, p1: Point, p2: Point) -> Result<Edge, GameError> {
        let edge = Edge::try_new(p1, p2, self.board.size())?;

        if self.board.has_edge(&edge) {
            return Err(GameError::EdgeAlreadyClaimed);
        }

        Ok(edge)
    }

    /// Unowned boxes next to `edge` whose four sides are now all claimed
    pub fn find_completed(&self, edge: Edge) -> Vec<BoxPos> {
        adjacent_boxes(edge, self.board.size())
            .into_iter()
            .filter(|&pos| self.board.owner(pos).is_none() && self.board.is_box_complete(pos))
            .collect()
    }
}

/// True iff `p1` and `p2` are distinct neighbouring dots on the board
pub fn is_valid_edge(p1: Point, p2: Point, board_size: u8) -> bool {
    p1.is_valid(board_size) && p2.is_valid(board_size) && p1.is_adjacent(&p2)
}

/// The four edges enclosing a box: top, right, bottom, left
pub fn bounding_edges(pos: BoxPos) -> [Edge; 4] {
    let (x, y) = (pos.x, pos.y);
    [
        Edge::new(Point::new(x, y), Point::new(x + 1, y)),
        Edge::new(Point::new(x + 1, y), Point::new(x + 1, y + 1)),
        Edge::new(Point::new(x, y + 1), Point::new(x + 1, y + 1)),
        Edge::new(Point::new(x, y), Point::new(x, y + 1)),
    ]
}

/// Boxes that have `edge` as one of their sides.
///
/// A horizontal edge borders the boxes above and below it, a vertical edge the
/// boxes to its left and right. Edges on the outer boundary have one neighbour.
pub fn adjacent_boxes(edge: Edge, board_size: u8) -> Vec<BoxPos> {
    let origin = edge.a();
    let mut boxes = Vec::with_capacity(2);

    match edge.orientation() {
        Orientation::Horizontal => {
            // Above
            if origin.y > 0 {
                boxes.push(BoxPos::new(origin.x, origin.y - 1));
            }
            // Below
            boxes.push(BoxPos::new(origin.x, origin.y));
        }
        Orientation::Vertical => {
            // Left
            if origin.x > 0 {
                boxes.push(BoxPos::new(origin.x - 1, origin.y));
            }
            // Right
            boxes.push(BoxPos::new(origin.x, origin.y));
        }
    }

    boxes.retain(|pos| pos.is_valid(board_size));
    boxes
}

/// Every legal edge of the grid: horizontal edges row by row, then vertical ones
pub fn all_edges(board_size: u8) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_count(board_size));
    if board_size < 2 {
        return edges;
    }

    for y in 0..board_size {
        for x in 0..board_size - 1 {
            edges.push(Edge::new(Point::new(x, y), Point::new(x + 1, y)));
        }
    }

    for y in 0..board_size - 1 {
        for x in 0..board_size {
            edges.push(Edge::new(Point::new(x, y), Point::new(x, y + 1)));
        }
    }

    edges
}

/// Number of legal edges: `2·N·(N−1)`
pub fn edge_count(board_size: u8) -> usize {
    let n = board_size as usize;
    2 * n * n.saturating_sub(1)
}

/// Number of boxes: `(N−1)²`
pub fn box_count(board_size: u8) -> usize {
    let per_side = board_size.saturating_sub(1) as usize;
    per_side * per_side
}
