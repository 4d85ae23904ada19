use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Inclusive trailing range of calendar years ending at `current_year`.
///
/// The current year is always data, never an implicit wall-clock read, so
/// every aligner stays deterministic and testable. `ending_today` is the
/// single boundary where the clock is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub current_year: i32,
    pub lookback: u32,
}

impl YearWindow {
    #[must_use]
    pub fn new(current_year: i32, lookback: u32) -> Self {
        Self {
            current_year,
            lookback,
        }
    }

    /// Window ending in the wall-clock year.
    #[must_use]
    pub fn ending_today(lookback: u32) -> Self {
        Self::new(chrono::Utc::now().year(), lookback)
    }

    #[must_use]
    pub fn start_year(self) -> i32 {
        self.current_year - self.lookback as i32
    }

    /// Ascending inclusive years of the window.
    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start_year()..=self.current_year
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        year >= self.start_year() && year <= self.current_year
    }
}

/// Two-digit zero-padded month label, `1 -> "01"`.
#[must_use]
pub fn month_label(month: u32) -> String {
    format!("{month:02}")
}

/// Four-digit year label.
#[must_use]
pub fn year_label(year: i32) -> String {
    format!("{year}")
}
