use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "halloffame",
    version,
    about = "Hall of fame for a dgamelaunch server, with replays of every death"
)]
pub struct Cli {
    /// Write diagnostics to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the hall of fame and replay deaths as they happen. Any key exits.
    Watch(WatchArgs),
    /// Print the current highscores and most recent games.
    Scores {
        /// dgamelaunch root directory.
        dglroot: PathBuf,
    },
    /// Replay the last 30 seconds before the death in one recording.
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// dgamelaunch root directory.
    pub dglroot: PathBuf,

    /// Milliseconds between checks of the xlogfile.
    #[arg(long, default_value_t = 1000)]
    pub poll_ms: u64,

    /// Banner shown above the hall of fame.
    #[arg(long, default_value = "NH2018")]
    pub title: String,

    /// Block-letter font file.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Directory holding the wav cues; silent without it.
    #[arg(long)]
    pub sounds: Option<PathBuf>,

    /// Draw frames before the replay window instantly instead of skipping them.
    #[arg(long)]
    pub fast_forward: bool,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// ttyrec file.
    pub path: PathBuf,

    /// Draw frames before the replay window instantly instead of skipping them.
    #[arg(long)]
    pub fast_forward: bool,
}
