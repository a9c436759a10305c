//! Frame pacing that keeps listening for stop keys.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::should_stop;

/// Wait up to `delay`, returning `true` as soon as a stop key is pressed.
///
/// `poll_key` blocks for at most the given timeout and yields the next key
/// event, if any. It is called at least once, even for a zero delay, so a
/// run with no frame delay can still be stopped.
pub fn wait_for_stop<P>(delay: Duration, mut poll_key: P) -> io::Result<bool>
where
    P: FnMut(Duration) -> io::Result<Option<KeyEvent>>,
{
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if let Some(key) = poll_key(remaining)? {
            if key.kind == KeyEventKind::Press && should_stop(key) {
                return Ok(true);
            }
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
    }
}

/// Read one key event from the terminal, waiting at most `timeout`.
pub fn poll_terminal_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(Some(key));
        }
    }
    Ok(None)
}
