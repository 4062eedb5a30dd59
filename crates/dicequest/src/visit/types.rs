//! Grid and cell types for the flood-fill.

use nalgebra::DMatrix;

/// A grid position (row-major coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular integer grid, immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    values: DMatrix<i64>,
}

impl Grid {
    /// Build from rows. Returns `None` for an empty grid or rows of unequal
    /// length.
    pub fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let ncols = rows.first()?.len();
        if ncols == 0 || rows.iter().any(|r| r.len() != ncols) {
            return None;
        }
        let flat: Vec<i64> = rows.iter().flatten().copied().collect();
        Some(Self {
            values: DMatrix::from_row_slice(rows.len(), ncols, &flat),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> i64 {
        self.values[(cell.row, cell.col)]
    }

    /// Cells holding `value`, in row-major order.
    pub fn cells_matching(&self, value: i64) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| Cell::new(r, c)))
            .filter(move |&cell| self.get(cell) == value)
    }

    /// `cell` shifted by `(dr, dc)`, if still inside the grid.
    #[inline]
    pub fn offset(&self, cell: Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        (row < self.rows() && col < self.cols()).then_some(Cell::new(row, col))
    }
}
