use crate::grid::Cell;
use crate::grid::GridError;
use crate::grid::Matrix;
use crate::neighbors;

/// Double-buffered generation engine for Conway's Game of Life (B3/S23) on
/// a toroidal board.
///
/// The engine exclusively owns two grids of identical dimensions: the live
/// grid, which holds the current generation, and the staging grid, which
/// collects the next generation as a sparse diff. A cell staged as `None`
/// means "no change computed", so the commit pass realizes survival and
/// no-birth as no-ops. Two buffers exist because an in-place update would
/// read neighbors already flipped within the same generation.
pub struct Engine {
    live: Matrix<Cell>,
    staging: Matrix<Option<Cell>>,
}

impl Engine {
    /// Allocate the live and staging grids together.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let live = Matrix::new(rows, cols, Cell::Dead)?;
        let staging = Matrix::new(rows, cols, None)?;

        Ok(Self { live, staging })
    }

    pub fn rows(&self) -> usize {
        self.live.rows()
    }

    pub fn cols(&self) -> usize {
        self.live.cols()
    }

    /// The current generation, for rendering.
    pub fn grid(&self) -> &Matrix<Cell> {
        &self.live
    }

    /// Mark one cell alive. Seed hook used by the loader; callers guarantee
    /// valid indices.
    pub fn set_alive(&mut self, row: usize, col: usize) {
        self.live.set(row, col, Cell::Alive);
    }

    /// Stage the next generation as a diff against the live grid.
    ///
    /// Only changes are recorded: a dead cell with exactly three live
    /// neighbors stages a birth, a live cell with fewer than two or more
    /// than three stages a death. Every other cell is left unset.
    pub fn compute_next(&mut self) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let n = neighbors::live_neighbors(&self.live, row, col);

                let staged = match self.live.get(row, col) {
                    Cell::Dead if n == 3 => Cell::Alive,
                    Cell::Alive if !(2..=3).contains(&n) => Cell::Dead,
                    _ => continue,
                };

                self.staging.set(row, col, Some(staged));
            }
        }
    }

    /// Overwrite live cells with their staged value, skipping unset cells.
    ///
    /// The staging sentinel can never leak into the live grid: only the
    /// `Some` payload, which is a plain [`Cell`], is ever written.
    pub fn commit(&mut self) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if let Some(state) = self.staging.get(row, col) {
                    self.live.set(row, col, state);
                }
            }
        }
    }

    /// Clear the staging grid back to all-unset. Idempotent.
    pub fn reset_staging(&mut self) {
        self.staging.fill(None);
    }

    /// Advance one generation: compute, commit, reset, in that strict order.
    pub fn tick(&mut self) {
        self.compute_next();
        self.commit();
        self.reset_staging();
    }
}
