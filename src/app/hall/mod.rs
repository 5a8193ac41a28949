mod audio;
mod font;
mod recordings;
mod screen;
mod session;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::style::Color;

pub(crate) use audio::*;
pub(crate) use font::*;
pub(crate) use recordings::*;
pub(crate) use screen::*;
pub(crate) use session::*;

use super::clock::{Clock, Pause};
use super::scores::HighscoreTracker;
use super::ttyrec::{FrameStore, LeadIn, ReplayOutcome, locate, replay};
use super::xlog::FileTailer;

const TYPE_DELAY: Duration = Duration::from_millis(150);
const BEFORE_REVEAL: Duration = Duration::from_secs(1);
const REVEAL_HOLD: Duration = Duration::from_secs(3);

pub(crate) trait RecordingIndex {
    fn latest_recording(&self, player: &str) -> io::Result<Option<PathBuf>>;
}

pub(crate) struct Stage<W, A, I, C> {
    pub(crate) screen: TerminalScreen<W>,
    pub(crate) cues: A,
    pub(crate) recordings: I,
    pub(crate) clock: C,
}

#[derive(Debug, Clone)]
pub(crate) struct HallOptions {
    pub(crate) title: String,
    pub(crate) lead_in: LeadIn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PollSummary {
    pub(crate) records: usize,
    pub(crate) replays: usize,
    pub(crate) new_highs: usize,
    pub(crate) interrupted: bool,
}

pub(crate) struct HallOfFame<W, A, I, C> {
    tailer: FileTailer,
    tracker: HighscoreTracker,
    stage: Stage<W, A, I, C>,
    options: HallOptions,
    stopping: bool,
}

impl<W, A, I, C> HallOfFame<W, A, I, C>
where
    W: Write,
    A: CuePlayer,
    I: RecordingIndex,
    C: Clock,
{
    pub(crate) fn new(tailer: FileTailer, stage: Stage<W, A, I, C>, options: HallOptions) -> Self {
        Self {
            tailer,
            tracker: HighscoreTracker::new(),
            stage,
            options,
            stopping: false,
        }
    }

    pub(crate) fn tracker(&self) -> &HighscoreTracker {
        &self.tracker
    }

    #[cfg(test)]
    pub(crate) fn stage(&self) -> &Stage<W, A, I, C> {
        &self.stage
    }

    #[cfg(test)]
    pub(crate) fn into_stage(self) -> Stage<W, A, I, C> {
        self.stage
    }

    pub(crate) fn prime(&mut self) -> Result<usize> {
        let poll = self
            .tailer
            .poll()
            .with_context(|| format!("failed loading {}", self.tailer.path().display()))?;
        let count = poll.records.len();
        for record in poll.records {
            self.tracker.observe(record);
        }
        tracing::info!("loaded {count} finished game(s) from the xlogfile");
        Ok(count)
    }

    pub(crate) fn poll(&mut self) -> Result<PollSummary> {
        let poll = self
            .tailer
            .poll()
            .with_context(|| format!("failed reading {}", self.tailer.path().display()))?;
        let mut summary = PollSummary {
            records: poll.records.len(),
            ..PollSummary::default()
        };

        for record in poll.records {
            let name = record.name.clone();
            if record.is_death() && !self.stopping && self.play_death(&name)? {
                summary.replays += 1;
            }

            let new_highs = self.tracker.observe(record);
            if new_highs.any() {
                summary.new_highs += 1;
                for metric in new_highs.iter() {
                    tracing::info!("{name} set a new record: {}", metric.title());
                }
                if !self.stopping {
                    self.announce_new_record(&name)?;
                }
            }
        }

        if poll.changed && !self.stopping {
            self.draw()?;
        }
        summary.interrupted = self.stopping;
        Ok(summary)
    }

    pub(crate) fn draw(&mut self) -> Result<()> {
        self.stage
            .screen
            .draw_board(&self.options.title, &self.tracker)
            .context("failed drawing the hall of fame")
    }

    fn play_death(&mut self, name: &str) -> Result<bool> {
        let path = match self.stage.recordings.latest_recording(name) {
            Ok(Some(path)) => path,
            Ok(None) => {
                tracing::info!("no recording found for {name}");
                return Ok(false);
            }
            Err(err) => {
                tracing::warn!("failed listing recordings for {name}: {err}");
                return Ok(false);
            }
        };

        self.announce(name, Color::Green, Cue::Dead, "DED.", Color::Red)?;
        if self.stopping {
            return Ok(false);
        }

        let mut store = match FrameStore::open(&path) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("failed opening recording {}: {err}", path.display());
                return Ok(false);
            }
        };
        let window = match locate(&mut store) {
            Ok(Some(window)) => window,
            Ok(None) => {
                tracing::info!("no death frame in {}", path.display());
                return Ok(false);
            }
            Err(err) => {
                tracing::warn!("unusable recording {}: {err}", path.display());
                return Ok(false);
            }
        };

        tracing::info!(
            "replaying frames {}..={} of {}",
            window.first,
            window.last,
            path.display()
        );
        let started = self.stage.clock.now();
        self.stage.screen.begin_replay()?;
        let outcome = replay(
            &mut store,
            window,
            self.options.lead_in,
            self.stage.screen.output(),
            &mut self.stage.clock,
        );
        self.stage.screen.end_replay()?;

        match outcome {
            Ok(ReplayOutcome::Completed { frames }) => {
                tracing::info!(
                    "replayed {frames} frame(s) in {:?}",
                    self.stage.clock.now().saturating_sub(started)
                );
                Ok(true)
            }
            Ok(ReplayOutcome::Interrupted { frames }) => {
                tracing::debug!("replay interrupted after {frames} frame(s)");
                self.stopping = true;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!("replay of {} stopped: {err}", path.display());
                Ok(false)
            }
        }
    }

    fn announce_new_record(&mut self, name: &str) -> Result<()> {
        self.announce("NEW RECORD!", Color::Magenta, Cue::NewRecord, name, Color::Green)
    }

    fn announce(
        &mut self,
        headline: &str,
        headline_color: Color,
        cue: Cue,
        reveal: &str,
        reveal_color: Color,
    ) -> Result<()> {
        self.stage.screen.clear()?;
        for (typed, ch) in headline.char_indices() {
            let end = typed + ch.len_utf8();
            self.stage
                .screen
                .big_text(4, 6, headline_color, &headline[..end])?;
            self.stage.cues.play(Cue::Typing);
            if !self.pause(TYPE_DELAY)? {
                return Ok(());
            }
        }

        if !self.pause(BEFORE_REVEAL)? {
            return Ok(());
        }
        self.stage.cues.play(cue);
        self.stage.screen.big_text(14, 16, reveal_color, reveal)?;
        self.pause(REVEAL_HOLD)?;
        Ok(())
    }

    pub(crate) fn pause(&mut self, duration: Duration) -> Result<bool> {
        if self.stage.clock.sleep_for(duration)? == Pause::Interrupted {
            self.stopping = true;
        }
        Ok(!self.stopping)
    }
}
