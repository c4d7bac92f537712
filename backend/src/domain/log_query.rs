//! Exercise log filtering: date bound normalisation and result truncation.
//!
//! Both halves are pure. Malformed filter input never fails a query; it
//! degrades to the widest possible bound instead:
//!
//! - an absent or malformed `from` admits every date below,
//! - an absent or malformed `to` admits every date above,
//! - an absent, zero, negative or non-numeric `limit` keeps every entry.
//!
//! ```
//! use exercise_tracker::domain::log_query::LogCriteria;
//!
//! let criteria = LogCriteria::from_raw(Some("2020-01-01"), Some("garbage"), Some("2"));
//! assert!(criteria.range().to().date().is_none());
//! assert_eq!(criteria.limit().map(|limit| limit.get()), Some(2));
//! ```

use std::num::NonZeroUsize;

use chrono::NaiveDate;

use super::ExerciseEntry;

/// Wire format accepted for date bounds and entry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date, rejecting any other shape.
///
/// Chrono alone accepts unpadded fields such as `2020-1-5`; the length and
/// separator checks keep the accepted form to exactly ten characters.
pub fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// One end of a date range: a concrete day or no bound at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// No restriction on this side.
    Unbounded,
    /// Inclusive bound at the given day.
    On(NaiveDate),
}

impl DateBound {
    /// Normalise raw input; anything that is not a strict date is unbounded.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(parse_strict_date)
            .map_or(Self::Unbounded, Self::On)
    }

    /// The bounding day, if any.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Unbounded => None,
            Self::On(date) => Some(date),
        }
    }
}

/// Inclusive range of days used to select log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: DateBound,
    to: DateBound,
}

impl DateRange {
    /// Build a range from explicit bounds.
    pub fn new(from: DateBound, to: DateBound) -> Self {
        Self { from, to }
    }

    /// A range admitting every date.
    pub fn unbounded() -> Self {
        Self::new(DateBound::Unbounded, DateBound::Unbounded)
    }

    /// Normalise raw `from`/`to` query values.
    pub fn normalize(from: Option<&str>, to: Option<&str>) -> Self {
        Self::new(DateBound::parse(from), DateBound::parse(to))
    }

    /// Lower bound as given.
    pub fn from(&self) -> DateBound {
        self.from
    }

    /// Upper bound as given.
    pub fn to(&self) -> DateBound {
        self.to
    }

    /// Comparable lower bound; unbounded maps to the earliest representable day.
    pub fn lower(&self) -> NaiveDate {
        self.from.date().unwrap_or(NaiveDate::MIN)
    }

    /// Comparable upper bound; unbounded maps to the latest representable day.
    pub fn upper(&self) -> NaiveDate {
        self.to.date().unwrap_or(NaiveDate::MAX)
    }

    /// Whether `date` lies within the range, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lower() <= date && date <= self.upper()
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Maximum number of entries a log query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimit(NonZeroUsize);

impl LogLimit {
    /// A limit of `count` entries; `None` when `count` is zero.
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    /// Normalise a raw `limit` query value.
    ///
    /// Only positive integers produce a limit. Values too large for the
    /// platform cannot truncate anything and are treated as absent.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let parsed = raw?.trim().parse::<i64>().ok()?;
        usize::try_from(parsed).ok().and_then(Self::new)
    }

    /// The limit as a count.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// Fully normalised filter parameters for a log query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogCriteria {
    range: DateRange,
    limit: Option<LogLimit>,
}

impl LogCriteria {
    /// Build criteria from already-normalised parts.
    pub fn new(range: DateRange, limit: Option<LogLimit>) -> Self {
        Self { range, limit }
    }

    /// Normalise raw `from`, `to` and `limit` values.
    pub fn from_raw(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(DateRange::normalize(from, to), LogLimit::parse(limit))
    }

    /// Date range entries must fall within.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Optional truncation limit.
    pub fn limit(&self) -> Option<LogLimit> {
        self.limit
    }

    /// Select the matching entries; see [`filter_log`].
    pub fn apply(&self, entries: &[ExerciseEntry]) -> Vec<ExerciseEntry> {
        filter_log(entries, &self.range, self.limit)
    }
}

/// Select entries dated within `range`, keeping their original order, then
/// keep at most the first `limit` of them.
pub fn filter_log(
    entries: &[ExerciseEntry],
    range: &DateRange,
    limit: Option<LogLimit>,
) -> Vec<ExerciseEntry> {
    let take = limit.map_or(usize::MAX, LogLimit::get);
    entries
        .iter()
        .filter(|entry| range.contains(entry.date()))
        .take(take)
        .cloned()
        .collect()
}
