//! Grid storage for the binary obstacle map.
//!
//! Cells are stored in a flat row-major `Vec<u8>` so the whole map
//! stays in one contiguous allocation.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Obstacle};

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Traversable space
    #[default]
    Free = 0,
    /// Inside an obstacle
    Occupied = 1,
}

impl CellState {
    /// Is this cell inside an obstacle?
    #[inline]
    pub fn is_occupied(self) -> bool {
        self == CellState::Occupied
    }

    /// Convert from u8 (for deserialization). Any non-zero value is Occupied.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        if value == 0 {
            CellState::Free
        } else {
            CellState::Occupied
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Occupied => '#',
        }
    }
}

/// Binary occupancy grid.
///
/// The grid uses a coordinate system where:
/// - Cell (0, 0) is the bottom-left corner
/// - Positive X is to the right (column index)
/// - Positive Y is up (row index)
///
/// Cells are indexed as `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridStorage {
    /// Cell states (CellState as u8: Free=0, Occupied=1)
    cells: Vec<u8>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
}

impl GridStorage {
    /// Create a new grid with all cells free
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![CellState::Free as u8; width * height],
            width,
            height,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Get cell state at grid coordinates
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellState> {
        self.coord_to_index(coord)
            .map(|i| CellState::from_u8(self.cells[i]))
    }

    /// Check if a cell is occupied. Out-of-bounds cells count as occupied.
    #[inline]
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.get(coord).map_or(true, CellState::is_occupied)
    }

    /// Set cell state at grid coordinates.
    /// Returns true if the coordinate was within bounds.
    #[inline]
    pub fn set(&mut self, coord: GridCoord, state: CellState) -> bool {
        if let Some(i) = self.coord_to_index(coord) {
            self.cells[i] = state as u8;
            true
        } else {
            false
        }
    }

    /// Mark all cells covered by the obstacle disc as occupied.
    ///
    /// Cells of the disc that fall outside the grid are skipped.
    /// Returns the number of cells that changed state.
    pub fn stamp_obstacle(&mut self, obstacle: &Obstacle) -> usize {
        let (min, max) = obstacle.bounds();
        let mut changed = 0;

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let coord = GridCoord::new(x, y);
                if !obstacle.contains(coord) {
                    continue;
                }
                if let Some(i) = self.coord_to_index(coord) {
                    if self.cells[i] == CellState::Free as u8 {
                        self.cells[i] = CellState::Occupied as u8;
                        changed += 1;
                    }
                }
            }
        }

        changed
    }

    /// Count occupied cells
    pub fn count_occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Occupied as u8)
            .count()
    }

    /// Clear all cells to Free
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Free as u8);
    }

    /// Iterate over all cells with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellState)> + '_ {
        (0..self.cells.len()).map(move |i| (self.index_to_coord(i), CellState::from_u8(self.cells[i])))
    }

    /// Raw access to the cell array
    #[inline]
    pub fn cells_raw(&self) -> &[u8] {
        &self.cells
    }

    /// Render the grid as ASCII art, top row first.
    pub fn ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let state = CellState::from_u8(self.cells[y * self.width + x]);
                out.push(state.as_char());
            }
            out.push('\n');
        }
        out
    }
}
