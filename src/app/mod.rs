mod clock;
mod hall;
mod scores;
mod ttyrec;
mod xlog;


use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::cli::{Cli, Command, ReplayArgs, WatchArgs};
use crate::paths::{default_font_path, userdata_dir, xlogfile_path};

use self::clock::TerminalClock;
use self::hall::{
    AplayCues, BigFont, HallOfFame, HallOptions, Stage, TerminalScreen, TerminalSession,
    UserdataRecordings, format_game_summary,
};
use self::scores::{HighscoreTracker, Metric};
use self::ttyrec::{
    Frame, FrameStore, LeadIn, RecordingError, ReplayOutcome, ReplayWindow, locate, replay,
};
use self::xlog::FileTailer;

const RECENT_GAMES_LISTED: usize = 8;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Watch(args) => run_watch(args)?,
        Command::Scores { dglroot } => run_scores(&dglroot)?,
        Command::Replay(args) => run_replay(args)?,
    }

    Ok(())
}

fn run_watch(args: WatchArgs) -> Result<()> {
    let font = load_font(args.font)?;
    let stage = Stage {
        screen: TerminalScreen::new(io::stdout(), font),
        cues: AplayCues::new(args.sounds),
        recordings: UserdataRecordings::new(userdata_dir(&args.dglroot)),
        clock: TerminalClock::new(),
    };
    let options = HallOptions {
        title: args.title,
        lead_in: lead_in(args.fast_forward),
    };
    let mut hall = HallOfFame::new(
        FileTailer::new(xlogfile_path(&args.dglroot)),
        stage,
        options,
    );
    hall.prime()?;

    let session = TerminalSession::enter()?;
    hall.draw()?;
    let poll_interval = Duration::from_millis(args.poll_ms);
    loop {
        let summary = hall.poll()?;
        if summary.records > 0 {
            tracing::debug!(
                "{} game(s), {} replay(s), {} with new records",
                summary.records,
                summary.replays,
                summary.new_highs
            );
        }
        if summary.interrupted || !hall.pause(poll_interval)? {
            break;
        }
    }
    session.leave()?;

    println!("{} finished game(s) seen.", hall.tracker().len());
    Ok(())
}

fn run_scores(dglroot: &Path) -> Result<()> {
    let mut tailer = FileTailer::new(xlogfile_path(dglroot));
    let poll = tailer
        .poll()
        .with_context(|| format!("failed reading {}", tailer.path().display()))?;

    let mut tracker = HighscoreTracker::new();
    for record in poll.records {
        tracker.observe(record);
    }
    if tracker.is_empty() {
        println!("No finished games in {} yet.", tailer.path().display());
        return Ok(());
    }

    println!("{:<24} {:>10}  {}", "RECORD", "VALUE", "HOLDER");
    for metric in Metric::ALL {
        match tracker.holder_record(metric) {
            Some((entry, record)) => println!(
                "{:<24} {:>10}  {}{}",
                metric.title(),
                entry.value,
                record.name,
                format_game_summary(record)
            ),
            None => println!("{:<24} {:>10}  ---", metric.title(), "-"),
        }
    }

    println!("\nFALLEN HEROES ({} TOTAL)", tracker.len());
    for (_, record) in tracker.recent(RECENT_GAMES_LISTED) {
        println!(
            "  {} {}{}",
            record.name,
            record.death,
            format_game_summary(record)
        );
    }
    Ok(())
}

fn run_replay(args: ReplayArgs) -> Result<()> {
    let path = args.path;
    let mut store = FrameStore::open(&path)
        .with_context(|| format!("failed to open recording {}", path.display()))?;
    let window = match locate(&mut store) {
        Ok(Some(window)) => window,
        Ok(None) => {
            println!("No death found in {}.", path.display());
            return Ok(());
        }
        Err(err) => return Err(recording_failure(&path, err)),
    };

    let death_frame = frame_at(&mut store, window)
        .map_err(|err| recording_failure(&path, err))?;
    println!(
        "Death at frame {} ({}); replaying {} frame(s).",
        window.last,
        format_capture_time(&death_frame),
        window.last - window.first + 1
    );

    let session = TerminalSession::enter()?;
    let mut screen = TerminalScreen::new(io::stdout(), BigFont::default());
    let mut clock = TerminalClock::new();
    screen.begin_replay()?;
    let outcome = replay(
        &mut store,
        window,
        lead_in(args.fast_forward),
        screen.output(),
        &mut clock,
    );
    screen.end_replay()?;
    session.leave()?;

    match outcome.map_err(|err| recording_failure(&path, err))? {
        ReplayOutcome::Completed { frames } => println!("Replayed {frames} frame(s)."),
        ReplayOutcome::Interrupted { frames } => {
            println!("Replay stopped after {frames} frame(s).")
        }
    }
    Ok(())
}

fn load_font(path: Option<PathBuf>) -> Result<BigFont> {
    let path = match path {
        Some(path) => path,
        None => default_font_path()?,
    };
    match BigFont::load(&path) {
        Ok(font) => Ok(font),
        Err(err) => {
            tracing::warn!(
                "no block-letter font at {} ({err}); using plain text",
                path.display()
            );
            Ok(BigFont::default())
        }
    }
}

fn lead_in(fast_forward: bool) -> LeadIn {
    if fast_forward {
        LeadIn::FastForward
    } else {
        LeadIn::Skip
    }
}

fn frame_at<R: io::Read + io::Seek>(
    store: &mut FrameStore<R>,
    window: ReplayWindow,
) -> Result<Frame, RecordingError> {
    store.rewind()?;
    let mut death_frame = None;
    while store.position() <= window.last {
        let Some(frame) = store.next()? else {
            return Err(RecordingError::EndedEarly {
                frames: store.position(),
                last: window.last,
            });
        };
        death_frame = Some(frame);
    }
    store.rewind()?;
    death_frame.ok_or(RecordingError::EndedEarly {
        frames: 0,
        last: window.last,
    })
}

fn format_capture_time(frame: &Frame) -> String {
    DateTime::from_timestamp(i64::from(frame.sec), frame.usec.saturating_mul(1000))
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| format!("{}s", frame.sec))
}

fn recording_failure(path: &Path, err: RecordingError) -> anyhow::Error {
    if err.is_truncated() {
        return anyhow::anyhow!("{} is truncated or corrupt: {err}", path.display());
    }
    anyhow::Error::new(err).context(format!("failed reading recording {}", path.display()))
}
