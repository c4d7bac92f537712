//! Exercise entry data model.
//!
//! An [`ExerciseEntry`] is immutable once built: it records what was done,
//! for how long, and on which calendar day. Ownership by a user is tracked by
//! the persistence layer, not by the entry itself.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing exercise components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("duration must be a positive whole number of minutes")]
    NonPositiveDuration,
    #[error("duration must be at most {max} minutes")]
    DurationTooLong { max: u32 },
}

/// Maximum allowed description length, in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// Largest duration accepted, bounded by the storage column width.
pub const DURATION_MAX_MINUTES: u32 = i32::MAX.unsigned_abs();

/// Free-text description of the activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`]; surrounding whitespace is
    /// trimmed.
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        if trimmed.chars().count() > DESCRIPTION_MAX {
            return Err(ExerciseValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Positive exercise duration in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ExerciseDuration(u32);

impl ExerciseDuration {
    /// Validate and construct a duration from a signed minute count.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::ExerciseDuration;
    ///
    /// assert_eq!(ExerciseDuration::new(30).map(|d| d.minutes()), Ok(30));
    /// assert!(ExerciseDuration::new(0).is_err());
    /// ```
    pub fn new(minutes: i64) -> Result<Self, ExerciseValidationError> {
        if minutes <= 0 {
            return Err(ExerciseValidationError::NonPositiveDuration);
        }
        u32::try_from(minutes)
            .ok()
            .filter(|value| *value <= DURATION_MAX_MINUTES)
            .map(Self)
            .ok_or(ExerciseValidationError::DurationTooLong {
                max: DURATION_MAX_MINUTES,
            })
    }

    /// Duration in minutes.
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl From<ExerciseDuration> for u32 {
    fn from(value: ExerciseDuration) -> Self {
        value.0
    }
}

impl TryFrom<i64> for ExerciseDuration {
    type Error = ExerciseValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    description: Description,
    duration: ExerciseDuration,
    date: NaiveDate,
}

impl ExerciseEntry {
    /// Build an entry from validated components.
    pub fn new(description: Description, duration: ExerciseDuration, date: NaiveDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }

    /// What was done.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// How long it took.
    pub fn duration(&self) -> ExerciseDuration {
        self.duration
    }

    /// Calendar day the exercise is logged against.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[case(i64::MIN)]
    fn duration_rejects_non_positive(#[case] minutes: i64) {
        assert_eq!(
            ExerciseDuration::new(minutes),
            Err(ExerciseValidationError::NonPositiveDuration)
        );
    }

    #[rstest]
    #[case(i64::from(DURATION_MAX_MINUTES) + 1)]
    #[case(i64::MAX)]
    fn duration_rejects_values_beyond_storage(#[case] minutes: i64) {
        assert!(matches!(
            ExerciseDuration::new(minutes),
            Err(ExerciseValidationError::DurationTooLong { .. })
        ));
    }

    #[rstest]
    fn duration_accepts_upper_bound() {
        let duration =
            ExerciseDuration::new(i64::from(DURATION_MAX_MINUTES)).expect("bound is inclusive");
        assert_eq!(duration.minutes(), DURATION_MAX_MINUTES);
    }

    #[rstest]
    fn description_is_trimmed() {
        let description = Description::new("  morning run ").expect("valid description");
        assert_eq!(description.as_ref(), "morning run");
    }

    #[rstest]
    fn description_rejects_blank() {
        assert_eq!(
            Description::new("  "),
            Err(ExerciseValidationError::EmptyDescription)
        );
    }

    #[rstest]
    fn description_rejects_overlong_text() {
        assert!(matches!(
            Description::new("x".repeat(DESCRIPTION_MAX + 1)),
            Err(ExerciseValidationError::DescriptionTooLong { .. })
        ));
    }

    #[rstest]
    fn entry_serialises_duration_as_number() {
        let entry = ExerciseEntry::new(
            Description::new("swim").expect("valid description"),
            ExerciseDuration::new(45).expect("valid duration"),
            NaiveDate::from_ymd_opt(2020, 6, 15).expect("valid date"),
        );
        let value = serde_json::to_value(entry).expect("serialise entry");
        assert_eq!(
            value,
            serde_json::json!({ "description": "swim", "duration": 45, "date": "2020-06-15" })
        );
    }
}
