//! Calendar source for the daily lives refill.

use chrono::{Local, NaiveDate};
use std::cell::Cell;

/// Supplies the player's current local date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a date that can be moved by hand
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    /// Move forward one calendar day
    pub fn advance_day(&self) {
        if let Some(next) = self.date.get().succ_opt() {
            self.date.set(next);
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Storage form of a date, one per calendar day
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
