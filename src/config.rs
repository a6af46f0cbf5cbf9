use std::time::Duration;

use thiserror::Error;

/// Smallest supported board side.
///
/// Below 3 cells on a side the toroidal wrap makes a cell see the same
/// physical neighbor more than once, so such boards are rejected up front.
pub const MIN_DIM: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Board of {rows}x{cols} is too small, the minimum is 3x3")]
    BoardTooSmall { rows: usize, cols: usize },
}

/// Simulation parameters, immutable for the lifetime of the process.
///
/// One value of this type is built at startup and passed to the engine and
/// the loop driver; nothing reads ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,

    /// Glyph drawn for a live cell.
    pub alive_glyph: char,

    /// Glyph drawn for a dead cell.
    pub dead_glyph: char,

    /// Key that shortens the inter-tick delay. Case-sensitive.
    pub speed_up_key: char,

    /// Key that lengthens the inter-tick delay. Case-sensitive.
    pub speed_down_key: char,

    /// Key that ends the simulation.
    pub terminate_key: char,

    /// Initial inter-tick delay.
    pub tick_delay: Duration,

    /// How much one speed keypress changes the delay.
    pub delay_step: Duration,

    /// How long each tick waits for a key event.
    pub poll_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 80,
            alive_glyph: '*',
            dead_glyph: ' ',
            speed_up_key: 'a',
            speed_down_key: 'z',
            terminate_key: ' ',
            tick_delay: Duration::from_millis(200),
            delay_step: Duration::from_millis(20),
            poll_timeout: Duration::from_millis(50),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_DIM || self.cols < MIN_DIM {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(())
    }
}
