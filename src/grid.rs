use thiserror::Error;

/// State of one cell on the live board.
///
/// The live grid only ever holds these two states; the "no change staged"
/// sentinel exists solely in the staging buffer, as [`Option::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Out of memory allocating a {rows}x{cols} grid")]
    OutOfMemory { rows: usize, cols: usize },
}

/// A rectangular grid stored as a single contiguous buffer with
/// `row * cols + col` stride.
///
/// One allocation per grid, so there is no such thing as a partially
/// allocated row set; storage is released by `Drop` on every exit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Allocate a `rows`x`cols` grid with every cell set to `value`.
    ///
    /// Allocation failure is reported as [`GridError::OutOfMemory`] instead
    /// of aborting the process. A dimension product that overflows `usize`
    /// counts as the same failure.
    pub fn new(rows: usize, cols: usize, value: T) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::OutOfMemory { rows, cols })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GridError::OutOfMemory { rows, cols })?;
        data.resize(len, value);

        Ok(Self { rows, cols, data })
    }

    /// Set every cell to `value` unconditionally.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Copy> Matrix<T> {
    /// Callers guarantee valid indices.
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);

        self.data[row * self.cols + col]
    }

    /// Callers guarantee valid indices.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);

        self.data[row * self.cols + col] = value;
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
