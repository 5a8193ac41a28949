use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use super::font::BigFont;
use crate::app::scores::{HighscoreTracker, Metric};
use crate::app::xlog::GameRecord;

const HIGHSCORE_Y: u16 = 17;
const FALLEN_HEROES_SHOWN: usize = 8;

pub(crate) struct TerminalScreen<W> {
    out: W,
    font: BigFont,
}

impl<W: Write> TerminalScreen<W> {
    pub(crate) fn new(out: W, font: BigFont) -> Self {
        Self { out, font }
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    pub(crate) fn big_text(&mut self, x: u16, y: u16, color: Color, text: &str) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(color))?;
        for (row, line) in (0u16..).zip(self.font.render(text)) {
            queue!(self.out, MoveTo(x, y + row), Print(line))?;
        }
        self.out.flush()
    }

    pub(crate) fn begin_replay(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::White),
            Clear(ClearType::All),
            MoveTo(0, 0),
            Show
        )?;
        self.out.flush()
    }

    pub(crate) fn end_replay(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Hide)?;
        self.out.flush()
    }

    pub(crate) fn draw_board(&mut self, title: &str, tracker: &HighscoreTracker) -> io::Result<()> {
        queue!(self.out, Hide, ResetColor, Clear(ClearType::All))?;
        self.big_text(28, 2, Color::White, title)?;
        self.big_text(3, 10, Color::Yellow, "HALL OF FAME")?;

        self.draw_highscore(Metric::Turns, HIGHSCORE_Y, tracker)?;
        self.draw_highscore(Metric::Depth, HIGHSCORE_Y + 2, tracker)?;
        self.draw_highscore(Metric::Points, HIGHSCORE_Y + 4, tracker)?;

        queue!(
            self.out,
            MoveTo(40, HIGHSCORE_Y + 7),
            SetForegroundColor(Color::Red),
            Print(format!("FALLEN HEROES ({} TOTAL)", tracker.len()))
        )?;
        for (row, (index, record)) in (0u16..).zip(tracker.recent(FALLEN_HEROES_SHOWN)) {
            let holder = tracker.is_record_holder(index);
            self.draw_game(HIGHSCORE_Y + 8 + row, record, holder)?;
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn draw_highscore(&mut self, metric: Metric, y: u16, tracker: &HighscoreTracker) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(35, y),
            SetForegroundColor(Color::Yellow),
            Print(metric.title())
        )?;

        match tracker.holder_record(metric) {
            Some((entry, record)) => {
                queue!(
                    self.out,
                    SetForegroundColor(Color::White),
                    Print(" - "),
                    SetForegroundColor(Color::Green),
                    Print(format!("{} by {}", entry.value, record.name))
                )?;
                self.draw_game(y + 1, record, true)
            }
            None => queue!(
                self.out,
                MoveTo(8, y + 1),
                SetForegroundColor(Color::White),
                Print("---")
            ),
        }
    }

    fn draw_game(&mut self, y: u16, record: &GameRecord, holder: bool) -> io::Result<()> {
        let name_color = if holder { Color::Green } else { Color::Red };
        queue!(
            self.out,
            MoveTo(8, y),
            SetForegroundColor(name_color),
            Print(&record.name),
            SetForegroundColor(Color::Cyan),
            Print(format!(" {}", record.death)),
            SetForegroundColor(Color::White),
            Print(format_game_summary(record))
        )
    }
}

pub(crate) fn format_game_summary(record: &GameRecord) -> String {
    format!(
        " - ({} {} {} {}) P: {}, T: {}, L: {}, HP: {}",
        record.role,
        record.race,
        record.gender,
        record.align,
        record.points,
        record.turns,
        record.max_level,
        record.max_hp
    )
}
