use std::io::{Read, Seek, Write};
use std::time::Duration;

use super::{FrameStore, RecordingError, ReplayWindow};
use crate::app::clock::{Clock, Pause};

pub(crate) const TRAILING_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LeadIn {
    #[default]
    Skip,
    FastForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReplayOutcome {
    Completed { frames: usize },
    Interrupted { frames: usize },
}

pub(crate) fn replay<R, W, C>(
    store: &mut FrameStore<R>,
    window: ReplayWindow,
    lead_in: LeadIn,
    sink: &mut W,
    clock: &mut C,
) -> Result<ReplayOutcome, RecordingError>
where
    R: Read + Seek,
    W: Write + ?Sized,
    C: Clock + ?Sized,
{
    store.rewind()?;
    let mut baseline_us = None;
    let mut frames = 0;

    for index in 0..=window.last {
        let Some(frame) = store.next()? else {
            return Err(RecordingError::EndedEarly {
                frames: index,
                last: window.last,
            });
        };

        if index < window.first {
            if lead_in == LeadIn::FastForward {
                sink.write_all(&frame.payload)?;
            }
            continue;
        }

        let at_us = frame.at_us();
        if let Some(previous_us) = baseline_us {
            let delay = Duration::from_micros(at_us.saturating_sub(previous_us));
            if clock.sleep_for(delay)? == Pause::Interrupted {
                return Ok(ReplayOutcome::Interrupted { frames });
            }
        }
        baseline_us = Some(at_us);

        sink.write_all(&frame.payload)?;
        sink.flush()?;
        frames += 1;
    }

    if clock.sleep_for(TRAILING_PAUSE)? == Pause::Interrupted {
        return Ok(ReplayOutcome::Interrupted { frames });
    }
    Ok(ReplayOutcome::Completed { frames })
}
