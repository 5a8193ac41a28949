mod record;
mod tailer;

pub(crate) use record::*;
pub(crate) use tailer::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameRecord {
    pub(crate) name: String,
    pub(crate) points: i64,
    pub(crate) max_level: i64,
    pub(crate) max_hp: i64,
    pub(crate) turns: i64,
    pub(crate) role: String,
    pub(crate) race: String,
    pub(crate) gender: String,
    pub(crate) align: String,
    pub(crate) death: String,
}

impl GameRecord {
    pub(crate) fn is_death(&self) -> bool {
        self.death != "quit"
    }
}
