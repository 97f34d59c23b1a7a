//! Menu availability schedules
//!
//! Schedules are venue-owned; menus reference one by id so several menus
//! can share a service window (lunch, dinner, happy hour).

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{ScheduleId, VenueId};

/// A recurring weekly service window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub venue_id: VenueId,
    pub name: String,
    pub rules: Vec<ScheduleRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// True when any rule covers the venue-local instant
    pub fn is_active_at(&self, local: NaiveDateTime) -> bool {
        let day = DayOfWeek::from(local.weekday());
        let time = local.time();
        self.rules.iter().any(|rule| rule.covers(day, time))
    }
}

/// One weekly recurrence: listed days, start and end time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRule {
    pub days: Vec<DayOfWeek>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl ScheduleRule {
    /// Windows ending before they start run past midnight into the next day
    pub fn spans_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Whether the window covers `time` on `day`.
    ///
    /// Start is inclusive, end exclusive. A window whose start equals its
    /// end covers the whole day. An overnight window covers its listed day
    /// from the start time and the following day until the end time.
    pub fn covers(&self, day: DayOfWeek, time: NaiveTime) -> bool {
        if self.start_time == self.end_time {
            return self.days.contains(&day);
        }
        if self.spans_midnight() {
            (self.days.contains(&day) && time >= self.start_time)
                || (self.days.contains(&day.previous()) && time < self.end_time)
        } else {
            self.days.contains(&day) && time >= self.start_time && time < self.end_time
        }
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn previous(&self) -> DayOfWeek {
        match self {
            DayOfWeek::Monday => DayOfWeek::Sunday,
            DayOfWeek::Tuesday => DayOfWeek::Monday,
            DayOfWeek::Wednesday => DayOfWeek::Tuesday,
            DayOfWeek::Thursday => DayOfWeek::Wednesday,
            DayOfWeek::Friday => DayOfWeek::Thursday,
            DayOfWeek::Saturday => DayOfWeek::Friday,
            DayOfWeek::Sunday => DayOfWeek::Saturday,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

/// Input for creating a schedule
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScheduleInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1))]
    pub rules: Vec<ScheduleRule>,
}
