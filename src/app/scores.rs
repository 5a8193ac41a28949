use super::xlog::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Metric {
    Points,
    Turns,
    Depth,
}

impl Metric {
    pub(crate) const ALL: [Metric; 3] = [Metric::Points, Metric::Turns, Metric::Depth];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Points => "MOST POINTS SCORED",
            Self::Turns => "MOST TURNS SURVIVED",
            Self::Depth => "DEEPEST DUNGEON LEVEL",
        }
    }

    fn value_of(self, record: &GameRecord) -> i64 {
        match self {
            Self::Points => record.points,
            Self::Turns => record.turns,
            Self::Depth => record.max_level,
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Points => 0,
            Self::Turns => 1,
            Self::Depth => 2,
        }
    }
}

// A value of 0 means nobody holds the record yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct HighscoreEntry {
    pub(crate) index: usize,
    pub(crate) value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NewRecords([bool; 3]);

impl NewRecords {
    pub(crate) fn any(self) -> bool {
        self.0.iter().any(|set| *set)
    }

    pub(crate) fn contains(self, metric: Metric) -> bool {
        self.0[metric.slot()]
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = Metric> {
        Metric::ALL.into_iter().filter(move |metric| self.contains(*metric))
    }
}

#[derive(Debug, Default)]
pub(crate) struct HighscoreTracker {
    history: Vec<GameRecord>,
    best: [HighscoreEntry; 3],
}

impl HighscoreTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn observe(&mut self, record: GameRecord) -> NewRecords {
        let index = self.history.len();
        let mut new_records = NewRecords::default();
        for metric in Metric::ALL {
            let value = metric.value_of(&record);
            let entry = &mut self.best[metric.slot()];
            // Ties keep the earlier holder.
            if value > entry.value {
                *entry = HighscoreEntry { index, value };
                new_records.0[metric.slot()] = true;
            }
        }
        self.history.push(record);
        new_records
    }

    pub(crate) fn holder(&self, metric: Metric) -> Option<HighscoreEntry> {
        let entry = self.best[metric.slot()];
        (entry.value != 0 && entry.index < self.history.len()).then_some(entry)
    }

    pub(crate) fn holder_record(&self, metric: Metric) -> Option<(HighscoreEntry, &GameRecord)> {
        let entry = self.holder(metric)?;
        Some((entry, &self.history[entry.index]))
    }

    #[cfg(test)]
    pub(crate) fn record(&self, index: usize) -> Option<&GameRecord> {
        self.history.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub(crate) fn recent(&self, limit: usize) -> impl Iterator<Item = (usize, &GameRecord)> {
        self.history.iter().enumerate().rev().take(limit)
    }

    pub(crate) fn is_record_holder(&self, index: usize) -> bool {
        Metric::ALL
            .into_iter()
            .filter_map(|metric| self.holder(metric))
            .any(|entry| entry.index == index)
    }
}
