use crate::grid::Cell;
use crate::grid::Matrix;

/// Count live cells in the toroidal 8-neighborhood of `(row, col)`.
///
/// Offsets never exceed magnitude 1, so wrapping is done by boundary
/// substitution rather than modulo arithmetic: an index of -1 becomes the
/// last valid index, an index of `dim` becomes 0.
///
/// On boards narrower than 3 cells in an axis the same physical cell is
/// examined more than once through wrap; such boards are rejected by
/// [`crate::config::Config::validate`] before an engine is ever built.
pub fn live_neighbors(grid: &Matrix<Cell>, row: usize, col: usize) -> u8 {
    let mut alive = 0;

    for dr in [-1isize, 0, 1] {
        for dc in [-1isize, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }

            let r = wrap(row as isize + dr, grid.rows());
            let c = wrap(col as isize + dc, grid.cols());

            if grid.get(r, c).is_alive() {
                alive += 1;
            }
        }
    }

    alive
}

fn wrap(index: isize, dim: usize) -> usize {
    if index < 0 {
        dim - 1
    } else if index as usize >= dim {
        0
    } else {
        index as usize
    }
}
