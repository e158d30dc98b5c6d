// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pointer-to-edge mapping for graphical hosts.
//!
//! Dots sit on a square lattice `box_size` pixels apart, inset by `margin`
//! from the top-left corner of the canvas. A pointer selects the edge between
//! the two dots closest to it, provided those dots are neighbours.

use serde::{Deserialize, Serialize};

use crate::{rules, BoxPos, Edge, GameState, Point};

/// Pixel geometry of a drawn board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Distance between neighbouring dots
    pub box_size: f32,
    /// Gap between the canvas border and the outer dots
    pub margin: f32,
    /// Radius of a drawn dot
    pub dot_radius: f32,
    /// Stroke width of a drawn edge
    pub line_width: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            box_size: 60.0,
            margin: 40.0,
            dot_radius: 4.0,
            line_width: 2.0,
        }
    }
}

impl BoardLayout {
    /// Side length of the square canvas
    pub fn canvas_size(&self, board_size: u8) -> f32 {
        f32::from(board_size.saturating_sub(1)) * self.box_size + 2.0 * self.margin
    }

    /// Convert a dot to its pixel position
    pub fn dot_to_pos(&self, point: Point) -> (f32, f32) {
        (
            f32::from(point.x) * self.box_size + self.margin,
            f32::from(point.y) * self.box_size + self.margin,
        )
    }

    /// Top-left corner and side length of a box in pixels
    pub fn box_rect(&self, pos: BoxPos) -> (f32, f32, f32) {
        let (x, y) = self.dot_to_pos(Point::new(pos.x, pos.y));
        (x, y, self.box_size)
    }

    /// The two dots closest to `(x, y)`; ties go to the dot earlier in row-major order
    pub fn nearest_points(&self, board_size: u8, x: f32, y: f32) -> Option<(Point, Point)> {
        let mut dots: Vec<(f32, Point)> = (0..board_size)
            .flat_map(|row| (0..board_size).map(move |col| Point::new(col, row)))
            .map(|point| {
                let (px, py) = self.dot_to_pos(point);
                ((x - px).powi(2) + (y - py).powi(2), point)
            })
            .collect();

        // Stable sort keeps row-major order among equal distances
        dots.sort_by(|a, b| a.0.total_cmp(&b.0));

        match dots.as_slice() {
            [(_, first), (_, second), ..] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Edge under the pointer, if the two nearest dots are neighbours
    pub fn nearest_edge(&self, board_size: u8, x: f32, y: f32) -> Option<Edge> {
        let (p1, p2) = self.nearest_points(board_size, x, y)?;
        Edge::try_new(p1, p2, board_size).ok()
    }

    /// Edge to highlight while hovering: only unclaimed edges of a game still in progress
    pub fn hover_edge(&self, game_state: &GameState, x: f32, y: f32) -> Option<Edge> {
        if game_state.is_game_over() {
            return None;
        }

        self.nearest_edge(game_state.size(), x, y)
            .filter(|edge| !game_state.has_edge(edge.a(), edge.b()))
    }

    /// Pixel midpoint of an edge
    pub fn edge_midpoint(&self, edge: Edge) -> (f32, f32) {
        let (ax, ay) = self.dot_to_pos(edge.a());
        let (bx, by) = self.dot_to_pos(edge.b());
        ((ax + bx) / 2.0, (ay + by) / 2.0)
    }

    /// Every edge a pointer could select on this board
    pub fn selectable_edges(&self, board_size: u8) -> Vec<Edge> {
        rules::all_edges(board_size)
    }
}
