use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pause {
    Elapsed,
    Interrupted,
}

pub(crate) trait Clock {
    fn now(&self) -> Duration;

    fn sleep_for(&mut self, duration: Duration) -> io::Result<Pause>;
}

#[derive(Debug)]
pub(crate) struct TerminalClock {
    origin: Instant,
    interrupted: bool,
}

impl TerminalClock {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
            interrupted: false,
        }
    }
}

impl Clock for TerminalClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep_for(&mut self, duration: Duration) -> io::Result<Pause> {
        if self.interrupted {
            return Ok(Pause::Interrupted);
        }

        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(Pause::Elapsed);
            }
            if !event::poll(remaining)? {
                return Ok(Pause::Elapsed);
            }
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                tracing::debug!("key press {:?} interrupted a pause", key.code);
                self.interrupted = true;
                return Ok(Pause::Interrupted);
            }
        }
    }
}
