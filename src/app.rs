use std::thread;

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::config::Config;
use crate::config::ConfigError;
use crate::engine::Engine;
use crate::events::ControlEvent;
use crate::grid::GridError;
use crate::render;
use crate::seed;
use crate::seed::SeedError;
use crate::term::TermError;
use crate::term::Terminal;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Alloc(#[from] GridError),

    #[error("Seed input: {0}")]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Term(#[from] TermError),
}

impl AppError {
    /// Map the failure taxonomy onto distinct process exit codes, so
    /// callers and scripts can tell the causes apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Alloc(_) => 2,
            AppError::Term(TermError::TooSmall { .. }) => 3,
            AppError::Seed(_) => 4,
            AppError::Config(_) | AppError::Term(_) => 1,
        }
    }
}

/// Drive one simulation from seeded startup to the terminate key.
///
/// Setup runs in order: validate the config, allocate the grids, load the
/// seed, take over the terminal, check its size. Any failure aborts
/// startup with the matching [`AppError`]; grids and terminal state are
/// released by `Drop` along every path. Once the loop is running, only the
/// terminate key ends it.
pub fn run(config: &Config, seed_bytes: &[u8]) -> Result<(), AppError> {
    config.validate()?;

    let mut engine = Engine::new(config.rows, config.cols)?;
    seed::load(seed_bytes, &mut engine)?;

    info!(rows = config.rows, cols = config.cols, "board seeded");

    let mut term = Terminal::new()?;
    term.require_size(config.rows, config.cols)?;

    run_loop(config, &mut engine, &mut term)
}

/// Render, poll, step, sleep, once per tick.
fn run_loop(config: &Config, engine: &mut Engine, term: &mut Terminal) -> Result<(), AppError> {
    let mut delay = config.tick_delay;

    loop {
        term.draw(&render::frame(engine.grid(), config))?;

        match term.poll_control(config)? {
            Some(ControlEvent::Terminate) => break,
            Some(ControlEvent::SpeedUp) => {
                // Clamped at zero.
                delay = delay.saturating_sub(config.delay_step);
                debug!(?delay, "speed up");
            }
            Some(ControlEvent::SpeedDown) => {
                delay = delay.saturating_add(config.delay_step);
                debug!(?delay, "speed down");
            }
            None => {}
        }

        engine.tick();

        thread::sleep(delay);
    }

    info!("terminated by user");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::config::ConfigError;
    use crate::grid::GridError;
    use crate::seed::SeedError;
    use crate::term::TermError;

    #[test]
    fn exit_codes_are_distinct_per_cause() {
        let alloc = AppError::Alloc(GridError::OutOfMemory { rows: 25, cols: 80 });
        let too_small = AppError::Term(TermError::TooSmall {
            cur_rows: 10,
            cur_cols: 40,
            req_rows: 28,
            req_cols: 85,
        });
        let seed = AppError::Seed(SeedError::TrailingGarbage('x'));
        let config = AppError::Config(ConfigError::BoardTooSmall { rows: 1, cols: 1 });

        let codes = [
            alloc.exit_code(),
            too_small.exit_code(),
            seed.exit_code(),
            config.exit_code(),
        ];

        assert_eq!(codes, [2, 3, 4, 1]);
    }
}
