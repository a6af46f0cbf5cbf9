use std::io;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::events::ControlEvent;
use crate::render;

#[derive(Debug, Error)]
pub enum TermError {
    #[error(
        "Terminal of {cur_cols}x{cur_rows} is too small, need at least {req_cols}x{req_rows}"
    )]
    TooSmall {
        cur_rows: u16,
        cur_cols: u16,
        req_rows: u16,
        req_cols: u16,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// RAII guard over the character-cell display.
///
/// Construction switches the terminal into raw mode on the alternate
/// screen with the cursor hidden; dropping the guard restores the previous
/// state, so teardown happens on every exit path including early failures.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    pub fn new() -> Result<Self, TermError> {
        let mut out = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { out })
    }

    /// Verify the surface can hold a `rows`x`cols` board plus decoration.
    ///
    /// On failure the diagnostic is drawn to the surface itself and held
    /// until a key is pressed or a few seconds pass, then reported as
    /// [`TermError::TooSmall`].
    pub fn require_size(&mut self, rows: usize, cols: usize) -> Result<(), TermError> {
        let (cur_cols, cur_rows) = terminal::size()?;
        let req_rows = (rows + render::BORDER_ROWS) as u16;
        let req_cols = (cols + render::BORDER_COLS) as u16;

        if cur_rows >= req_rows && cur_cols >= req_cols {
            return Ok(());
        }

        let msg = format!(
            "Window size is not enough.\n\
             Current size: {cur_rows} x {cur_cols}\n\
             Required minimum size: {req_rows} x {req_cols}"
        );
        self.draw(&msg)?;

        let _ = event::poll(Duration::from_secs(3))?;

        Err(TermError::TooSmall {
            cur_rows,
            cur_cols,
            req_rows,
            req_cols,
        })
    }

    /// Clear the surface and draw `frame` starting at the top-left corner.
    pub fn draw(&mut self, frame: &str) -> Result<(), TermError> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        for line in frame.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()?;

        Ok(())
    }

    /// Poll for one control event, waiting at most the configured timeout.
    ///
    /// No event, an unmapped key, or a non-key event is a normal no-op and
    /// yields `None`.
    pub fn poll_control(&mut self, config: &Config) -> Result<Option<ControlEvent>, TermError> {
        if !event::poll(config.poll_timeout)? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };

        Ok(convert_key(key, config))
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        debug!("terminal restored");
    }
}

/// Map a raw key event onto the loop driver's control alphabet.
fn convert_key(key: KeyEvent, config: &Config) -> Option<ControlEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl-C terminates regardless of the configured bindings, since raw
    // mode swallows the usual signal.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ControlEvent::Terminate);
    }

    match key.code {
        KeyCode::Char(c) if c == config.terminate_key => Some(ControlEvent::Terminate),
        KeyCode::Char(c) if c == config.speed_up_key => Some(ControlEvent::SpeedUp),
        KeyCode::Char(c) if c == config.speed_down_key => Some(ControlEvent::SpeedDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyModifiers;

    use super::convert_key;
    use crate::config::Config;
    use crate::events::ControlEvent;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn configured_keys_map_to_control_events() {
        let config = Config::default();

        assert_eq!(convert_key(key(' '), &config), Some(ControlEvent::Terminate));
        assert_eq!(convert_key(key('a'), &config), Some(ControlEvent::SpeedUp));
        assert_eq!(convert_key(key('z'), &config), Some(ControlEvent::SpeedDown));
    }

    // The bindings are case-sensitive.
    #[test]
    fn unmapped_keys_are_a_no_op() {
        let config = Config::default();

        assert_eq!(convert_key(key('A'), &config), None);
        assert_eq!(convert_key(key('Z'), &config), None);
        assert_eq!(convert_key(key('q'), &config), None);
    }

    #[test]
    fn ctrl_c_terminates() {
        let config = Config::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(convert_key(key, &config), Some(ControlEvent::Terminate));
    }
}
