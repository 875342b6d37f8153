use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Period – the time-window selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Week,
    Month,
    Quarter,
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period '{0}' (expected week, month, quarter or all)")]
pub struct ParsePeriodError(pub String);

impl Period {
    /// Button order, narrowest window first.
    pub const ALL: [Period; 4] = [Period::Week, Period::Month, Period::Quarter, Period::All];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::All => "all",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Period::Week => "Last Week",
            Period::Month => "Last Month",
            Period::Quarter => "Last Quarter",
            Period::All => "All Time",
        }
    }

    /// Parse a selector, falling back to [`Period::All`] for anything that is
    /// not an exact selector name (case variants included).
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: ParsePeriodError| {
            log::debug!("{e}; using 'all'");
            Period::All
        })
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "quarter" => Ok(Period::Quarter),
            "all" => Ok(Period::All),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Index range over the monthly series
// ---------------------------------------------------------------------------

/// Inclusive index range into the monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of samples covered (0 if `start > end`).
    pub fn len(&self) -> usize {
        self.end.saturating_add(1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Map a period to its slice of the 6-month series (index 5 = current month).
///
/// The series is monthly, so `Week` can only narrow down to the current month.
pub fn resolve_range(period: Period) -> IndexRange {
    match period {
        Period::Week => IndexRange::new(5, 5),
        Period::Month => IndexRange::new(4, 5),
        Period::Quarter => IndexRange::new(2, 5),
        Period::All => IndexRange::new(0, 5),
    }
}

// ---------------------------------------------------------------------------
// Calendar window shown next to the period buttons
// ---------------------------------------------------------------------------

/// Calendar dates a period covers, ending on `today`.
///
/// Month arithmetic clamps to the last day of the target month
/// (e.g. 31 May minus one month is 30 April). Overflowing days are not
/// rolled into the next month, which would give 1 May instead.
pub fn date_window(period: Period, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = match period {
        Period::Week => today.checked_sub_days(Days::new(7)),
        Period::Month => today.checked_sub_months(Months::new(1)),
        Period::Quarter => today.checked_sub_months(Months::new(3)),
        Period::All => today.checked_sub_months(Months::new(5)),
    };
    (start.unwrap_or(NaiveDate::MIN), today)
}
