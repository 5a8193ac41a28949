use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use super::RecordingIndex;

#[derive(Debug, Clone)]
pub(crate) struct UserdataRecordings {
    userdata: PathBuf,
}

impl UserdataRecordings {
    pub(crate) fn new(userdata: impl Into<PathBuf>) -> Self {
        Self {
            userdata: userdata.into(),
        }
    }
}

impl RecordingIndex for UserdataRecordings {
    fn latest_recording(&self, player: &str) -> io::Result<Option<PathBuf>> {
        if !is_plain_name(player) {
            tracing::warn!("refusing to look up recordings for player name {player:?}");
            return Ok(None);
        }
        latest_modified_file(&self.userdata.join(player).join("ttyrec"))
    }
}

fn is_plain_name(player: &str) -> bool {
    let mut components = Path::new(player).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub(crate) fn latest_modified_file(dir: &Path) -> io::Result<Option<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        if latest
            .as_ref()
            .map(|(latest_time, _)| modified > *latest_time)
            .unwrap_or(true)
        {
            latest = Some((modified, entry.path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
