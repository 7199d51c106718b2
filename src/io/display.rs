//! Text rendering of solved puzzles using picture names

use std::fmt::Write as _;

use crate::io::puzzle::PictureRegistry;
use crate::spatial::edge::{Edge, Side};
use crate::spatial::grid::Arrangement;
use crate::spatial::tiles::Tile;

/// Separator between cells in a grid row
const CELL_SEPARATOR: &str = " | ";

/// Renders tiles and arrangements with names from a registry
pub struct SolutionFormatter<'a> {
    registry: &'a PictureRegistry,
}

impl<'a> SolutionFormatter<'a> {
    /// Create a formatter over a registry
    pub const fn new(registry: &'a PictureRegistry) -> Self {
        Self { registry }
    }

    /// Registered name of a picture, or `#id` when it has none
    fn picture_name(&self, picture: usize) -> String {
        self.registry
            .name(picture)
            .map_or_else(|| format!("#{picture}"), str::to_string)
    }

    /// `Name/H` style label for an edge
    pub fn edge_label(&self, edge: Edge) -> String {
        format!("{}/{}", self.picture_name(edge.picture), edge.polarity.tag())
    }

    /// One `side: name, H` line per side, bottom first
    pub fn describe_tile(&self, tile: &Tile) -> String {
        let mut text = String::new();
        for side in Side::ALL {
            let edge = tile.edge(side);
            let name = self.picture_name(edge.picture);
            let _ = writeln!(text, "{side}: {name}, {}", edge.polarity.tag());
        }
        text
    }

    /// Every tile in placement order, separated by blank lines
    pub fn listing(&self, tiles: &[Tile]) -> String {
        tiles
            .iter()
            .map(|tile| self.describe_tile(tile))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The arrangement drawn as a 3x3 grid of edge labels
    pub fn grid(&self, arrangement: &Arrangement) -> String {
        let rows = arrangement.rows();
        let label_width = rows
            .iter()
            .flatten()
            .flat_map(|tile| tile.edges())
            .map(|edge| self.edge_label(edge).len())
            .max()
            .unwrap_or(0);
        let cell_width = 2 * label_width + 1;

        let mut text = String::new();
        for (index, row) in rows.iter().enumerate() {
            if index > 0 {
                let rule_width =
                    row.len() * cell_width + row.len().saturating_sub(1) * CELL_SEPARATOR.len();
                let _ = writeln!(text, "{}", "-".repeat(rule_width));
            }

            let tops: Vec<String> = row
                .iter()
                .map(|tile| {
                    format!("{:^cell_width$}", self.edge_label(tile.edge(Side::Top)))
                })
                .collect();
            let middles: Vec<String> = row
                .iter()
                .map(|tile| {
                    format!(
                        "{:<label_width$} {:>label_width$}",
                        self.edge_label(tile.edge(Side::Left)),
                        self.edge_label(tile.edge(Side::Right))
                    )
                })
                .collect();
            let bottoms: Vec<String> = row
                .iter()
                .map(|tile| {
                    format!("{:^cell_width$}", self.edge_label(tile.edge(Side::Bottom)))
                })
                .collect();

            for line in [tops, middles, bottoms] {
                let _ = writeln!(text, "{}", line.join(CELL_SEPARATOR).trim_end());
            }
        }
        text
    }
}
