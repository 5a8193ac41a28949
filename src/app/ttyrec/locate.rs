use std::io::{Read, Seek};

use super::{FrameStore, RecordingError, ReplayWindow};

pub(crate) const DEATH_MARKERS: [&[u8]; 3] = [
    b"\x1b[HYou die...",
    b"\x1b[HYou drown.",
    b"\x1b[HDo you want your possessions identified?",
];

pub(crate) const LOOKBACK_MS: u64 = 30_000;

pub(crate) fn contains_death_marker(payload: &[u8]) -> bool {
    DEATH_MARKERS
        .iter()
        .any(|marker| payload.windows(marker.len()).any(|window| window == *marker))
}

pub(crate) fn locate<R: Read + Seek>(
    store: &mut FrameStore<R>,
) -> Result<Option<ReplayWindow>, RecordingError> {
    store.rewind()?;
    let mut frame_ms = Vec::new();

    while let Some(frame) = store.next()? {
        frame_ms.push(frame.at_ms());
        if !contains_death_marker(&frame.payload) {
            continue;
        }

        let last = frame_ms.len() - 1;
        let first = window_start(&frame_ms, last);
        tracing::debug!("death marker in frame {last}, replay window starts at {first}");
        store.rewind()?;
        return Ok(Some(ReplayWindow { first, last }));
    }

    Ok(None)
}

// Frame 0 is never tested; it is the fallback start.
pub(crate) fn window_start(frame_ms: &[u64], last: usize) -> usize {
    let Some(find_time) = frame_ms[last].checked_sub(LOOKBACK_MS) else {
        return 0;
    };
    (1..last)
        .rev()
        .find(|&index| frame_ms[index] <= find_time)
        .map_or(0, |index| index + 1)
}
