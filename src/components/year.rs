//! This module implements `BroadcastYear` and the year resolution algorithm.
//!
//! Broadcast year `Y` starts on the Monday on or before January 1 of `Y`,
//! so the days from December 26 through 31 may belong to the next year. A
//! year runs until the day before the following year's start, giving 364 or
//! 371 days.

use crate::{
    iso::GregorianDate, BroadcastError, BroadcastResult, DAYS_PER_WEEK, MAX_YEAR,
    MIN_YEAR, MONTHS_PER_YEAR,
};

/// A typed reverse lookup request: the period whose start date is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastPeriod {
    /// The whole broadcast year.
    Year,
    /// A 1-based week of the year.
    Week(u8),
    /// A 1-based month of the year.
    Month(u8),
}

/// A broadcast calendar year and the Monday on which it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BroadcastYear {
    year_id: i32,
    start: GregorianDate,
    weeks: u8,
}

impl BroadcastYear {
    /// Creates the broadcast year numbered `year_id`.
    ///
    /// Fails with an `InvalidDateError` when the year's start date is outside
    /// the representable range.
    pub fn try_new(year_id: i32) -> BroadcastResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year_id) {
            return Err(BroadcastError::invalid_date().with_message(alloc::format!(
                "broadcast year {year_id} is outside the representable range"
            )));
        }

        let start_days = year_start_epoch_days(year_id);
        let weeks = (year_start_epoch_days(year_id + 1) - start_days) / i64::from(DAYS_PER_WEEK);
        crate::broadcast_assert!(
            weeks == 52 || weeks == 53,
            "broadcast year {} has {} weeks",
            year_id,
            weeks
        );

        Ok(Self {
            year_id,
            start: GregorianDate::from_epoch_days(start_days)?,
            weeks: weeks as u8,
        })
    }

    /// Resolves the broadcast year containing `date`.
    pub fn for_date(date: GregorianDate) -> BroadcastResult<Self> {
        let epoch_days = date.to_epoch_days();

        // Late December may already belong to the next broadcast year.
        let mut year_id = date.year();
        if year_id < MAX_YEAR && epoch_days >= year_start_epoch_days(year_id + 1) {
            year_id += 1;
        }
        log::trace!("{date} resolves to broadcast year {year_id}");

        let year = Self::try_new(year_id)?;
        crate::broadcast_assert!(
            year.contains(&date),
            "{} is outside resolved broadcast year {}",
            date,
            year_id
        );
        Ok(year)
    }

    /// Returns the broadcast year number.
    #[inline]
    #[must_use]
    pub const fn year_id(&self) -> i32 {
        self.year_id
    }

    /// Returns the Monday that starts this year.
    #[inline]
    #[must_use]
    pub const fn start_date(&self) -> GregorianDate {
        self.start
    }

    /// Returns the Sunday that ends this year.
    pub fn end_date(&self) -> BroadcastResult<GregorianDate> {
        self.start.add_days(i64::from(self.days_in_year()) - 1)
    }

    /// Returns the number of weeks in this year, 52 or 53.
    #[inline]
    #[must_use]
    pub const fn weeks_in_year(&self) -> u8 {
        self.weeks
    }

    /// Returns the number of days in this year, 364 or 371.
    #[inline]
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        self.weeks as u16 * DAYS_PER_WEEK
    }

    /// Returns whether `date` falls within this year.
    #[must_use]
    pub fn contains(&self, date: &GregorianDate) -> bool {
        let offset = self.start.days_until(date);
        (0..i64::from(self.days_in_year())).contains(&offset)
    }

    /// Returns the 1-based day of year of `date`, or `None` when the date is
    /// outside this year.
    #[must_use]
    pub fn day_of_year(&self, date: &GregorianDate) -> Option<u16> {
        self.contains(date)
            .then(|| self.start.days_until(date) as u16 + 1)
    }

    /// Returns the Monday starting week `week_id`.
    ///
    /// Fails with an `InvalidArgumentError` when the week does not exist in
    /// this year.
    pub fn week_start(&self, week_id: u8) -> BroadcastResult<GregorianDate> {
        self.validate_week(week_id)?;
        self.start
            .add_days(i64::from(week_id - 1) * i64::from(DAYS_PER_WEEK))
    }

    /// Returns the Monday starting month `month_id`.
    pub fn month_start(&self, month_id: u8) -> BroadcastResult<GregorianDate> {
        let week_id = self.first_week_of_month(month_id)?;
        self.week_start(week_id)
    }

    /// Returns the week number of the first week of month `month_id`.
    pub fn first_week_of_month(&self, month_id: u8) -> BroadcastResult<u8> {
        validate_month(month_id)?;
        let offset = year_start_epoch_days(self.year_id)
            .abs_diff(month_start_epoch_days(self.year_id, month_id));
        Ok((offset / u64::from(DAYS_PER_WEEK)) as u8 + 1)
    }

    /// Returns the number of weeks in month `month_id`, 4 or 5.
    pub fn weeks_in_month(&self, month_id: u8) -> BroadcastResult<u8> {
        let first = self.first_week_of_month(month_id)?;
        let next = if month_id == MONTHS_PER_YEAR {
            self.weeks + 1
        } else {
            self.first_week_of_month(month_id + 1)?
        };
        Ok(next - first)
    }

    /// Returns the start date of `period` within this year.
    pub fn period_start(&self, period: BroadcastPeriod) -> BroadcastResult<GregorianDate> {
        match period {
            BroadcastPeriod::Year => Ok(self.start),
            BroadcastPeriod::Week(week_id) => self.week_start(week_id),
            BroadcastPeriod::Month(month_id) => self.month_start(month_id),
        }
    }

    fn validate_week(&self, week_id: u8) -> BroadcastResult<()> {
        if !(1..=self.weeks).contains(&week_id) {
            return Err(BroadcastError::invalid_argument().with_message(alloc::format!(
                "week_id {week_id} must be in 1..={} for broadcast year {}",
                self.weeks,
                self.year_id
            )));
        }
        Ok(())
    }
}

fn validate_month(month_id: u8) -> BroadcastResult<()> {
    if !(1..=MONTHS_PER_YEAR).contains(&month_id) {
        return Err(BroadcastError::invalid_argument().with_message(alloc::format!(
            "month_id {month_id} must be in 1..={MONTHS_PER_YEAR}"
        )));
    }
    Ok(())
}

// ==== Broadcast calendar equations ====
//
// These operate on raw epoch days so that neighbouring years can be probed
// without the representable range getting in the way.

/// Returns the epoch days of the Monday on or before `epoch_days`.
#[inline]
pub(crate) const fn monday_on_or_before(epoch_days: i64) -> i64 {
    epoch_days - (date_equations::gregorian::iso_weekday(epoch_days) as i64 - 1)
}

/// Returns the epoch days of the Monday that starts broadcast month `month` of `year`.
#[inline]
pub(crate) const fn month_start_epoch_days(year: i32, month: u8) -> i64 {
    monday_on_or_before(date_equations::gregorian::epoch_days_from_ymd(year, month, 1))
}

/// Returns the epoch days of the Monday that starts broadcast year `year`.
#[inline]
pub(crate) const fn year_start_epoch_days(year: i32) -> i64 {
    month_start_epoch_days(year, 1)
}
