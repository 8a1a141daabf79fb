use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use weekplan_core::WeekplanError;

const NAMES: [&str; 8] = [
    "Inbox",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Panel index: 0 is the Inbox, 1..=7 are Monday..Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Day(u8);

impl Day {
    pub const COUNT: usize = 8;
    pub const INBOX: Day = Day(0);
    pub const MONDAY: Day = Day(1);
    pub const SUNDAY: Day = Day(7);
    pub const ALL: [Day; Self::COUNT] = [
        Day(0),
        Day(1),
        Day(2),
        Day(3),
        Day(4),
        Day(5),
        Day(6),
        Day(7),
    ];

    /// `None` for anything outside 0..=7.
    pub fn new(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Day(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Day 0 holds undated tasks.
    pub fn is_inbox(self) -> bool {
        self.0 == 0
    }

    /// "Inbox", "Monday", ..., "Sunday".
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Monday maps to 1, Sunday to 7.
    pub fn from_weekday(weekday: Weekday) -> Self {
        Day(weekday.number_from_monday() as u8)
    }

    /// Panel of the local weekday.
    pub fn today() -> Self {
        Self::from_weekday(Local::now().weekday())
    }

    /// Following panel in tab order, wrapping Sunday back to the Inbox.
    pub fn cycle_next(self) -> Self {
        Day((self.0 + 1) % Self::COUNT as u8)
    }

    /// Preceding panel in tab order, wrapping the Inbox back to Sunday.
    pub fn cycle_prev(self) -> Self {
        Day((self.0 + Self::COUNT as u8 - 1) % Self::COUNT as u8)
    }

    /// Next panel without wrapping; `None` on Sunday.
    pub fn right(self) -> Option<Self> {
        Self::new(self.index() + 1)
    }

    /// Previous panel without wrapping; `None` on the Inbox.
    pub fn left(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::new)
    }
}

impl TryFrom<i64> for Day {
    type Error = WeekplanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Day::new)
            .ok_or_else(|| WeekplanError::Validation(format!("day {} is outside 0..7", value)))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
