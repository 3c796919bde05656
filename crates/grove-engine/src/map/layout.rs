//! Layered tile grids: one grid of string cell codes per map layer.
//!
//! Grids are stored row by row; `"-1"` marks an empty cell.

use std::collections::HashMap;

use glam::Vec2;

use crate::error::LevelError;

/// Cell code for "nothing here".
pub const EMPTY_CELL: &str = "-1";

/// Collision-only cells.
pub const BOUNDARY_LAYER: &str = "boundary";
/// Randomly varied grass.
pub const GRASS_LAYER: &str = "grass";
/// Objects picked by cell code.
pub const OBJECT_LAYER: &str = "object";

/// One layer: rows of cell codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutGrid {
    rows: Vec<Vec<String>>,
}

impl LayoutGrid {
    /// Parse comma-separated rows, one per line. Blank lines are skipped and
    /// cells are trimmed (so `\r\n` exports work).
    pub fn from_csv(text: &str) -> Self {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
            .collect();
        Self { rows }
    }

    /// Grid where every cell is empty.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![EMPTY_CELL.to_string(); width]; height],
        }
    }

    /// Set a cell, growing the grid if needed.
    pub fn set(&mut self, col: usize, row: usize, code: impl Into<String>) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, EMPTY_CELL.to_string());
        }
        cells[col] = code.into();
    }

    /// Builder-style `set`.
    pub fn with(mut self, col: usize, row: usize, code: impl Into<String>) -> Self {
        self.set(col, row, code);
        self
    }

    /// Get the code at grid position (col, row).
    pub fn get(&self, col: usize, row: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Non-empty cells as `(row, col, code)`, rows first then columns.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, code)| code.as_str() != EMPTY_CELL)
                .map(move |(col, code)| (row, col, code.as_str()))
        })
    }

    /// Count of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }
}

/// World position of a cell's top-left corner.
pub fn cell_to_world(col: usize, row: usize, tile_size: f32) -> Vec2 {
    Vec2::new(col as f32 * tile_size, row as f32 * tile_size)
}

/// Named layers of a map.
#[derive(Debug, Clone, Default)]
pub struct MapData {
    layers: HashMap<String, LayoutGrid>,
}

impl MapData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, grid: LayoutGrid) {
        self.layers.insert(name.into(), grid);
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, grid: LayoutGrid) -> Self {
        self.insert(name, grid);
        self
    }

    pub fn get(&self, name: &str) -> Option<&LayoutGrid> {
        self.layers.get(name)
    }

    /// Look up a layer that must be present.
    pub fn require(&self, name: &str) -> Result<&LayoutGrid, LevelError> {
        self.get(name)
            .ok_or_else(|| LevelError::MissingLayer(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv_rows() {
        let grid = LayoutGrid::from_csv("-1,-1,395\r\n-1,0,-1\r\n\r\n");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(2, 0), Some("395"));
        assert_eq!(grid.get(1, 1), Some("0"));
        assert_eq!(grid.get(5, 5), None);
    }

    #[test]
    fn occupied_skips_empty_cells_in_row_major_order() {
        let grid = LayoutGrid::from_csv("-1,7,-1\n3,-1,-1\n-1,-1,12");
        let cells: Vec<(usize, usize, &str)> = grid.occupied().collect();
        assert_eq!(cells, vec![(0, 1, "7"), (1, 0, "3"), (2, 2, "12")]);
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn set_grows_grid() {
        let grid = LayoutGrid::empty(2, 2).with(3, 4, "1");
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.get(3, 4), Some("1"));
        assert_eq!(grid.get(2, 4), Some(EMPTY_CELL));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn cell_position_is_grid_times_tile_size() {
        assert_eq!(cell_to_world(2, 3, 64.0), Vec2::new(128.0, 192.0));
    }

    #[test]
    fn missing_layer_is_reported() {
        let map = MapData::new().with(GRASS_LAYER, LayoutGrid::empty(1, 1));
        assert!(map.require(GRASS_LAYER).is_ok());
        let err = map.require(OBJECT_LAYER).unwrap_err();
        assert!(matches!(err, LevelError::MissingLayer(n) if n == "object"));
    }
}
