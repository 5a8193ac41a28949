use std::path::PathBuf;
use std::process::{Child, Command as ProcessCommand, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cue {
    Typing,
    NewRecord,
    Dead,
}

pub(crate) trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

#[derive(Debug, Default)]
pub(crate) struct AplayCues {
    dir: Option<PathBuf>,
    playing: Vec<Child>,
}

impl AplayCues {
    pub(crate) fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            playing: Vec::new(),
        }
    }

    fn reap_finished(&mut self) {
        self.playing
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

fn cue_file_name(cue: Cue) -> &'static str {
    match cue {
        Cue::Typing if rand::random::<bool>() => "type0.wav",
        Cue::Typing => "type1.wav",
        Cue::NewRecord => "record.wav",
        Cue::Dead => "dead.wav",
    }
}

impl CuePlayer for AplayCues {
    fn play(&mut self, cue: Cue) {
        let Some(dir) = &self.dir else {
            return;
        };
        let path = dir.join(cue_file_name(cue));

        let spawned = ProcessCommand::new("aplay")
            .arg("-q")
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.playing.push(child),
            Err(err) => tracing::warn!("failed to play {}: {err}", path.display()),
        }
        self.reap_finished();
    }
}

impl Drop for AplayCues {
    fn drop(&mut self) {
        for child in &mut self.playing {
            let _ = child.wait();
        }
    }
}
