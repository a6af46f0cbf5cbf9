use crate::config::Config;
use crate::grid::Cell;
use crate::grid::Matrix;

/// Width the frame decoration adds on top of the board columns.
pub const BORDER_COLS: usize = 5;

/// Lines the frame decoration adds on top of the board rows: two borders
/// and the control hint.
pub const BORDER_ROWS: usize = 3;

const HINT: &str = "A-Z increase/decrease speed, Space Bar-quit";

/// Format one frame of the live grid.
///
/// A `~` border above and below, each row fenced with `| ` and ` |`, cells
/// drawn with the configured glyphs, and a one-line control hint at the
/// bottom. Pure, so the layout is testable without a terminal.
pub fn frame(grid: &Matrix<Cell>, config: &Config) -> String {
    let border = "~".repeat(grid.cols() + BORDER_COLS);

    let mut out =
        String::with_capacity((grid.cols() + BORDER_COLS + 1) * (grid.rows() + BORDER_ROWS));

    out.push_str(&border);
    out.push('\n');

    for row in 0..grid.rows() {
        out.push_str("| ");
        for col in 0..grid.cols() {
            let glyph = if grid.get(row, col).is_alive() {
                config.alive_glyph
            } else {
                config.dead_glyph
            };

            out.push(glyph);
        }
        out.push_str(" |\n");
    }

    out.push_str(&border);
    out.push('\n');
    out.push_str(HINT);

    out
}

#[cfg(test)]
mod tests {
    use super::BORDER_COLS;
    use super::BORDER_ROWS;
    use super::frame;
    use crate::config::Config;
    use crate::grid::Cell;
    use crate::grid::Matrix;

    #[test]
    fn frame_layout() {
        let mut grid = Matrix::new(3, 3, Cell::Dead).unwrap();
        grid.set(1, 1, Cell::Alive);

        insta::assert_snapshot!(frame(&grid, &Config::default()), @r"
        ~~~~~~~~
        |     |
        |  *  |
        |     |
        ~~~~~~~~
        A-Z increase/decrease speed, Space Bar-quit
        ");
    }

    #[test]
    fn frame_dimensions_track_the_grid() {
        let grid = Matrix::new(4, 7, Cell::Dead).unwrap();
        let out = frame(&grid, &Config::default());

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4 + BORDER_ROWS);
        assert_eq!(lines[0].len(), 7 + BORDER_COLS);
        assert_eq!(lines[1], "|         |");
    }
}
