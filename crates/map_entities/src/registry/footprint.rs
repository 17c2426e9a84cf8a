use thiserror::Error;

/// Marker written into a grid cell an entity occupies.
pub const OCCUPIED_CELL_MARKER: u16 = 1;
/// Marker written into a grid cell that becomes (or stays) free.
pub const VACANT_CELL_MARKER: u16 = 0;

/// Footprint origin convention:
/// - cell (0,0) maps onto the grid cell under the entity's top-left anchor.
/// - cell (x,y) maps onto the grid cell at `anchor + (x, y)`.
///
/// The cell values are written into the grid as-is: a stamp pattern carries
/// occupied markers, a vacate pattern carries vacant markers. The sink does
/// not distinguish stamp from clear by anything but the pattern contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionFootprint {
    width: u32,
    height: u32,
    cells: Vec<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FootprintError {
    #[error("cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

impl CollisionFootprint {
    pub fn new(width: u32, height: u32, cells: Vec<u16>) -> Result<Self, FootprintError> {
        let expected = width as usize * height as usize;
        let actual = cells.len();
        if expected != actual {
            return Err(FootprintError::CellCountMismatch { expected, actual });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Full-rectangle pattern with every cell set to `marker`.
    pub fn filled(width: u32, height: u32, marker: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![marker; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn cell_at(&self, x: u32, y: u32) -> Option<u16> {
        self.index_of(x, y)
            .and_then(|index| self.cells.get(index).copied())
    }

    pub fn occupied_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell != VACANT_CELL_MARKER)
            .count()
    }

    /// The vacate pattern for this footprint: same shape, every cell set to
    /// the vacant marker. Writing it at the old anchor frees the cells the
    /// stamp pattern claimed there.
    pub fn reversed(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![VACANT_CELL_MARKER; self.cells.len()],
        }
    }
}
