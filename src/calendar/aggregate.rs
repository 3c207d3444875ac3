use crate::model::{Commit, CommitHistory};
use chrono::{Days, NaiveDate};

pub const ROWS: usize = 7;
pub const COLUMNS: usize = 52;
pub const DEFAULT_MAX_LEVEL: usize = 5;

/// Per-day commit counts for the `ROWS * COLUMNS` days starting at `start_date`.
///
/// Cells are laid out row-major: `(row, col)` is `start_date + row * COLUMNS + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    start_date: NaiveDate,
    counts: [[u32; COLUMNS]; ROWS],
}

impl Grid {
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn count(&self, row: usize, col: usize) -> u32 {
        self.counts[row][col]
    }

    pub fn date_at(&self, row: usize, col: usize) -> NaiveDate {
        offset(self.start_date, row * COLUMNS + col)
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, NaiveDate, u32)> + '_ {
        (0..ROWS).flat_map(move |row| {
            (0..COLUMNS).map(move |col| (row, col, self.date_at(row, col), self.counts[row][col]))
        })
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().map(|&c| c as u64).sum()
    }
}

/// First day of the window ending at `as_of`.
pub fn start_date(as_of: NaiveDate) -> NaiveDate {
    as_of - Days::new((ROWS * COLUMNS - 1) as u64)
}

pub fn aggregate(history: &CommitHistory, as_of: NaiveDate) -> Grid {
    let start = start_date(as_of);

    // Both ends of the window are exclusive.
    let in_window: Vec<&Commit> = history
        .commits
        .iter()
        .filter(|c| c.timestamp > start && c.timestamp < as_of)
        .collect();

    let mut counts = [[0u32; COLUMNS]; ROWS];
    for (row, row_counts) in counts.iter_mut().enumerate() {
        for (col, cell) in row_counts.iter_mut().enumerate() {
            let date = offset(start, row * COLUMNS + col);
            *cell = in_window.iter().filter(|c| c.timestamp == date).count() as u32;
        }
    }

    tracing::debug!(
        %start,
        %as_of,
        in_window = in_window.len(),
        total = history.len(),
        "aggregated commit history"
    );

    Grid {
        start_date: start,
        counts,
    }
}

/// Contribution level used as a palette index: counts at or above `max_level - 1` share the top tier.
pub fn level(count: u32, max_level: usize) -> usize {
    (count as usize).min(max_level.saturating_sub(1))
}

fn offset(date: NaiveDate, days: usize) -> NaiveDate {
    date + Days::new(days as u64)
}
