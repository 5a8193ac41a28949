use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use super::{Frame, HEADER_LEN, RecordingError};

#[derive(Debug)]
pub(crate) struct FrameStore<R> {
    reader: R,
    next_index: usize,
}

impl FrameStore<BufReader<File>> {
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> FrameStore<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            next_index: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.next_index
    }

    pub(crate) fn rewind(&mut self) -> Result<(), RecordingError> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.next_index = 0;
        Ok(())
    }

    pub(crate) fn next(&mut self) -> Result<Option<Frame>, RecordingError> {
        let frame = self.next_index;

        let mut header = Vec::with_capacity(HEADER_LEN);
        let got = (&mut self.reader)
            .take(HEADER_LEN as u64)
            .read_to_end(&mut header)?;
        if got == 0 {
            return Ok(None);
        }
        if got < HEADER_LEN {
            return Err(RecordingError::TruncatedHeader { frame, got });
        }

        let sec = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let usec = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        let len = u32::from_le_bytes([header[8], header[9], header[10], header[11]]) as usize;

        let mut payload = Vec::new();
        let got = (&mut self.reader)
            .take(len as u64)
            .read_to_end(&mut payload)?;
        if got < len {
            return Err(RecordingError::TruncatedPayload {
                frame,
                expected: len,
                got,
            });
        }

        self.next_index += 1;
        Ok(Some(Frame { sec, usec, payload }))
    }
}
