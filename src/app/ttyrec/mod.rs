mod locate;
mod replay;
mod store;

use std::io;

use thiserror::Error;

pub(crate) use locate::*;
pub(crate) use replay::*;
pub(crate) use store::*;

pub(crate) const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) sec: u32,
    pub(crate) usec: u32,
    pub(crate) payload: Vec<u8>,
}

impl Frame {
    pub(crate) fn at_ms(&self) -> u64 {
        u64::from(self.sec) * 1000 + u64::from(self.usec) / 1000
    }

    pub(crate) fn at_us(&self) -> u64 {
        u64::from(self.sec) * 1_000_000 + u64::from(self.usec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReplayWindow {
    pub(crate) first: usize,
    pub(crate) last: usize,
}

#[derive(Debug, Error)]
pub(crate) enum RecordingError {
    #[error("recording truncated in header of frame {frame} ({got} of {HEADER_LEN} bytes)")]
    TruncatedHeader { frame: usize, got: usize },
    #[error("recording truncated in payload of frame {frame} ({got} of {expected} bytes)")]
    TruncatedPayload {
        frame: usize,
        expected: usize,
        got: usize,
    },
    #[error("recording ended after {frames} frame(s), before frame {last}")]
    EndedEarly { frames: usize, last: usize },
    #[error("failed reading recording: {0}")]
    Io(#[from] io::Error),
}

impl RecordingError {
    pub(crate) fn is_truncated(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
