use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use weekplan_core::{EngineConfig, InsertionPolicy, WeekplanError, WeekplanResult};

use crate::{board::Board, day::Day, task::Task};

/// True when `name` starts with an `HH:MM` clock prefix, e.g. "08:30 standup".
pub fn is_scheduled(name: &str) -> bool {
    match name.as_bytes() {
        [h1, h2, b':', m1, m2, ..] => {
            h1.is_ascii_digit() && h2.is_ascii_digit() && m1.is_ascii_digit() && m2.is_ascii_digit()
        }
        _ => false,
    }
}

/// Index at which a new or moved task enters `tasks`.
pub fn insertion_index(policy: InsertionPolicy, tasks: &[Task]) -> usize {
    match policy {
        InsertionPolicy::Prepend => 0,
        InsertionPolicy::ScheduleAware => tasks
            .iter()
            .rposition(Task::is_scheduled)
            .map_or(0, |last| last + 1),
    }
}

/// Displayed week number, always within 1..=52.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Week(u32);

impl Week {
    pub const FIRST: Week = Week(1);
    pub const LAST: Week = Week(52);

    /// `None` outside 1..=52.
    pub fn new(number: u32) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&number)
            .then_some(Week(number))
    }

    /// Fold any number into 1..=52.
    pub fn clamped(number: u32) -> Self {
        Week(number.clamp(Self::FIRST.0, Self::LAST.0))
    }

    /// Week of `date` within its own year, counted the way panel dates are
    /// laid out: the year's first Monday opens week 2, the days before it
    /// belong to week 1, and anything past week 52 folds into 52.
    pub fn containing(date: NaiveDate) -> Self {
        let jan1_weekday = (i64::from(date.weekday().num_days_from_monday())
            - i64::from(date.ordinal0()))
        .rem_euclid(7);
        let first_monday = (7 - jan1_weekday) % 7;
        let week = (i64::from(date.ordinal0()) - first_monday).div_euclid(7) + 2;
        Self::clamped(u32::try_from(week).unwrap_or(0))
    }

    /// Week of today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The 1-based week number.
    pub fn number(self) -> u32 {
        self.0
    }

    /// `None` at week 52.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// `None` at week 1.
    pub fn prev(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }
}

/// Week bookkeeping, panel labels, and the insertion policy of one board.
#[derive(Debug, Clone)]
pub struct Scheduler {
    week: Week,
    reference_year: i32,
    first_monday: NaiveDate,
    dated_panels: bool,
    insertion_policy: InsertionPolicy,
}

impl Scheduler {
    /// Fails only for years chrono cannot represent.
    pub fn new(week: Week, reference_year: i32, config: &EngineConfig) -> WeekplanResult<Self> {
        let first_monday = first_monday_of_year(reference_year)?;
        Ok(Self {
            week,
            reference_year,
            first_monday,
            dated_panels: config.dated_panels,
            insertion_policy: config.insertion_policy,
        })
    }

    /// True when `date` is one of the seven dates on display.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let monday = self.monday();
        date >= monday && date < monday + Duration::days(7)
    }

    /// True when today's local date is on display.
    pub fn is_current_week(&self) -> bool {
        self.contains(Local::now().date_naive())
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn insertion_policy(&self) -> InsertionPolicy {
        self.insertion_policy
    }

    /// Returns false when already at week 52.
    pub fn next_week(&mut self) -> bool {
        match self.week.next() {
            Some(week) => {
                self.week = week;
                true
            }
            None => false,
        }
    }

    /// Returns false when already at week 1.
    pub fn prev_week(&mut self) -> bool {
        match self.week.prev() {
            Some(week) => {
                self.week = week;
                true
            }
            None => false,
        }
    }

    /// Monday of the displayed week. Week 2 starts on the year's first Monday.
    pub fn monday(&self) -> NaiveDate {
        let offset = (i64::from(self.week.number()) - 2) * 7;
        self.first_monday + Duration::days(offset)
    }

    /// Calendar date shown for a weekday panel; `None` for the Inbox.
    pub fn date_of(&self, day: Day) -> Option<NaiveDate> {
        if day.is_inbox() {
            return None;
        }
        Some(self.monday() + Duration::days(day.index() as i64 - 1))
    }

    /// `"Inbox (Week N)"` and `"<Weekday> (DD.MM.YYYY)"`, or bare day names
    /// when panels are undated.
    pub fn label_for(&self, day: Day) -> String {
        if !self.dated_panels {
            return day.name().to_string();
        }
        match self.date_of(day) {
            None => format!("{} (Week {})", day.name(), self.week.number()),
            Some(date) => format!("{} ({})", day.name(), date.format("%d.%m.%Y")),
        }
    }

    /// Relabel every panel of `board` for the displayed week.
    pub fn apply_labels(&self, board: &mut Board) {
        for day in Day::ALL {
            board.panel_mut(day).set_label(self.label_for(day));
        }
    }
}

fn first_monday_of_year(year: i32) -> WeekplanResult<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| WeekplanError::Validation(format!("year {} is out of range", year)))?;
    while date.weekday() != Weekday::Mon {
        date = date.succ_opt().ok_or_else(|| {
            WeekplanError::Validation(format!("year {} is out of range", year))
        })?;
    }
    Ok(date)
}
