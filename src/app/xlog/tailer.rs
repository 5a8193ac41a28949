use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::str::{Utf8Error, from_utf8};

use thiserror::Error;

use super::{GameRecord, ParseError, parse_record_line};

#[derive(Debug, Error)]
pub(crate) enum TailError {
    #[error("failed reading xlogfile: {0}")]
    Io(#[from] io::Error),
    #[error("xlogfile line at byte {offset} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        offset: u64,
        #[source]
        source: Utf8Error,
    },
    #[error("bad xlogfile line at byte {offset}: {source}")]
    Parse {
        offset: u64,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Default)]
pub(crate) struct TailPoll {
    pub(crate) records: Vec<GameRecord>,
    pub(crate) changed: bool,
}

#[derive(Debug, Default)]
pub(crate) struct LogTailer {
    offset: u64,
}

impl LogTailer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    // The cursor only moves if every new line parses.
    pub(crate) fn poll<R: Read + Seek>(&mut self, source: &mut R) -> Result<TailPoll, TailError> {
        let len = source.seek(SeekFrom::End(0))?;
        if len < self.offset {
            tracing::warn!(
                "xlogfile shrank from {} to {len} bytes; reading from the start",
                self.offset
            );
            self.offset = 0;
        }
        source.seek(SeekFrom::Start(self.offset))?;

        let mut reader = BufReader::new(source);
        let mut offset = self.offset;
        let mut records = Vec::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            let bytes_read = reader.read_until(b'\n', &mut line)?;
            if bytes_read == 0 || line.last() != Some(&b'\n') {
                // Partial trailing line: the writer has not finished it yet.
                break;
            }

            let text = from_utf8(&line[..bytes_read - 1])
                .map_err(|source| TailError::InvalidUtf8 { offset, source })?;
            if !text.trim().is_empty() {
                let record = parse_record_line(text)
                    .map_err(|source| TailError::Parse { offset, source })?;
                records.push(record);
            }
            offset = offset.saturating_add(bytes_read as u64);
        }

        tracing::debug!(
            "xlogfile poll consumed {} bytes, {} new record(s)",
            offset - self.offset,
            records.len()
        );
        self.offset = offset;
        Ok(TailPoll {
            changed: !records.is_empty(),
            records,
        })
    }
}

#[derive(Debug)]
pub(crate) struct FileTailer {
    path: PathBuf,
    tailer: LogTailer,
}

impl FileTailer {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tailer: LogTailer::new(),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn poll(&mut self) -> Result<TailPoll, TailError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("xlogfile {} does not exist yet", self.path.display());
                return Ok(TailPoll::default());
            }
            Err(err) => return Err(err.into()),
        };
        self.tailer.poll(&mut file)
    }
}
