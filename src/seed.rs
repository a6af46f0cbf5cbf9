use thiserror::Error;

use crate::engine::Engine;
use crate::parse_util;
use crate::parse_util::ParseError;

/// A pair with either component equal to this value ends the seed list.
const TERMINATOR: i64 = -1;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Malformed coordinate pair: {0}")]
    Malformed(#[from] ParseError),

    #[error("Coordinate ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("Unexpected character '{0}' after coordinate pair")]
    TrailingGarbage(char),
}

/// Populate the engine's live grid from a seed stream.
///
/// The stream is whitespace-separated signed integer pairs, one `row col`
/// record per line. A pair with either component equal to -1 ends the list,
/// as does a clean end of stream; each valid pair marks that cell alive.
/// After the second integer of a pair only a space, a line break, or end of
/// stream may follow.
///
/// Any failure aborts loading; the caller treats it as fatal for startup.
pub fn load(mut bytes: &[u8], engine: &mut Engine) -> Result<(), SeedError> {
    loop {
        bytes = parse_util::take_ws(bytes);
        if bytes.is_empty() {
            return Ok(());
        }

        let (row, rest) = parse_util::take_int(bytes)?;
        let rest = parse_util::take_ws(rest);
        let (col, rest) = parse_util::take_int(rest)?;

        if row == TERMINATOR || col == TERMINATOR {
            return Ok(());
        }

        let (rows, cols) = (engine.rows(), engine.cols());
        if row < 0 || row >= rows as i64 || col < 0 || col >= cols as i64 {
            return Err(SeedError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }

        match parse_util::peek_1(rest) {
            None | Some(b' ' | b'\n' | b'\r') => {}
            Some(b) => return Err(SeedError::TrailingGarbage(b as char)),
        }

        engine.set_alive(row as usize, col as usize);
        bytes = rest;
    }
}

#[cfg(test)]
mod tests {
    use super::SeedError;
    use super::load;
    use crate::engine::Engine;

    fn live_cells(engine: &Engine) -> Vec<(usize, usize)> {
        let grid = engine.grid();

        (0..grid.rows())
            .flat_map(|r| (0..grid.cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.get(r, c).is_alive())
            .collect()
    }

    fn engine() -> Engine {
        Engine::new(10, 10).unwrap()
    }

    #[test]
    fn terminated_pair_list_marks_cells() {
        let mut engine = engine();
        load(b"5 5\n-1 -1\n", &mut engine).unwrap();

        assert_eq!(live_cells(&engine), vec![(5, 5)]);
    }

    #[test]
    fn either_negative_component_terminates() {
        let mut engine = engine();
        load(b"1 1\n-1 7\n3 3\n", &mut engine).unwrap();

        // Everything after the sentinel is ignored.
        assert_eq!(live_cells(&engine), vec![(1, 1)]);
    }

    #[test]
    fn end_of_stream_terminates() {
        let mut engine = engine();
        load(b"2 3\n4 5", &mut engine).unwrap();

        assert_eq!(live_cells(&engine), vec![(2, 3), (4, 5)]);
    }

    #[test]
    fn empty_stream_is_a_valid_seed() {
        let mut engine = engine();
        load(b"", &mut engine).unwrap();

        assert_eq!(live_cells(&engine), vec![]);
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let mut engine = engine();
        let res = load(b"5 5x\n", &mut engine);

        assert!(matches!(res, Err(SeedError::TrailingGarbage('x'))));
    }

    #[test]
    fn out_of_bounds_pair_is_rejected() {
        let mut engine = engine();
        let res = load(b"100 5\n", &mut engine);

        assert!(matches!(res, Err(SeedError::OutOfBounds { row: 100, .. })));
    }

    #[test]
    fn malformed_pair_is_rejected() {
        let mut engine = engine();

        assert!(matches!(
            load(b"5 x\n", &mut engine),
            Err(SeedError::Malformed(_))
        ));
        assert!(matches!(
            load(b"5\n", &mut engine),
            Err(SeedError::Malformed(_))
        ));
    }
}
