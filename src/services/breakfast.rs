use crate::models::Locations;
use chrono::{DateTime, Datelike, TimeZone, Weekday};
use derive_more::Display;
use tracing::{debug, warn};

/// Saturday is the last day that can resolve to a location.
const BREAKFAST_DAYS: usize = 6;

/// Which day a question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Day {
    #[display(fmt = "today")]
    Today,
    #[display(fmt = "tomorrow")]
    Tomorrow,
}

impl Day {
    /// Any case-insensitive mention of "tomorrow" asks about the next day.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.to_lowercase().contains("tomorrow") {
            Self::Tomorrow
        } else {
            Self::Today
        }
    }

    const fn offset(self) -> usize {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
        }
    }
}

/// Monday-based index of a weekday: Monday is 0, Sunday is 6.
#[must_use]
pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

/// Location for `day`, counted from the weekday `index`, or a
/// no-breakfast message when that falls on Sunday or past it.
#[must_use]
pub fn resolve(locations: &Locations, index: usize, day: Day) -> String {
    let effective = index + day.offset();
    if effective < BREAKFAST_DAYS {
        if let Some(location) = locations.get(effective) {
            return location.to_owned();
        }
        warn!(
            effective,
            configured = locations.len(),
            "No location configured for weekday"
        );
    }
    format!("No breakfast for you {day} :)")
}

/// Reply to `text` sent at `now`.
#[tracing::instrument(skip(locations))]
pub fn reply<Tz>(now: DateTime<Tz>, text: &str, locations: &Locations) -> String
where
    Tz: TimeZone,
{
    let index = weekday_index(now.weekday());
    let day = Day::from_text(text);
    debug!(index, %day, "Resolving location");
    resolve(locations, index, day)
}
