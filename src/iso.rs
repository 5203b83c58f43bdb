//! This module implements the Gregorian date record and weekday.
//!
//! A `GregorianDate` is a validated `(year, month, day)` triple. All arithmetic
//! goes through epoch days, the number of days since 1970-01-01, using the
//! integer equations in `date_equations`.

use core::str::FromStr;

use date_equations::gregorian;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    BroadcastError, BroadcastResult, MAX_EPOCH_DAYS, MAX_YEAR, MIN_EPOCH_DAYS, MIN_YEAR,
};

/// A plain calendar date in the proleptic Gregorian calendar.
///
/// Dates are always valid and lie within
/// [`MIN_EPOCH_DAYS`]..=[`MAX_EPOCH_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `GregorianDate`.
    ///
    /// Fails with an `InvalidDateError` when the month or day does not exist
    /// or the date is outside the representable range.
    pub fn try_new(year: i32, month: u8, day: u8) -> BroadcastResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(BroadcastError::invalid_date()
                .with_message(alloc::format!("year {year} is outside the representable range")));
        }
        let Some(days_in_month) = gregorian::days_in_month(year, month) else {
            return Err(BroadcastError::invalid_date()
                .with_message(alloc::format!("month {month} must be in 1..=12")));
        };
        if !(1..=days_in_month).contains(&day) {
            return Err(BroadcastError::invalid_date().with_message(alloc::format!(
                "day {day} is not valid for {year}-{month:02} (max {days_in_month})"
            )));
        }

        let date = Self::new_unchecked(year, month, day);
        date.is_valid_day_range()?;
        Ok(date)
    }

    /// Creates a `GregorianDate` from a count of days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i64) -> BroadcastResult<Self> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(BroadcastError::invalid_date()
                .with_message("Date is outside the representable range."));
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days between 1970-01-01 and this date.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(self) -> i64 {
        gregorian::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    pub(crate) fn is_valid_day_range(&self) -> BroadcastResult<()> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&self.to_epoch_days()) {
            return Err(BroadcastError::invalid_date()
                .with_message("Date is outside the representable range."));
        }
        Ok(())
    }

    /// Returns the year value.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month value (1-12).
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month value.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(self.to_epoch_days())
    }

    /// Returns this date moved by `days`, which may be negative.
    pub fn add_days(&self, days: i64) -> BroadcastResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or_else(|| BroadcastError::invalid_date().with_message("Day offset overflowed."))?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the number of days from this date until `other`.
    #[inline]
    #[must_use]
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.to_epoch_days() - self.to_epoch_days()
    }

    /// Returns the Monday that starts the Monday-Sunday week containing this date.
    pub fn monday_on_or_before(&self) -> BroadcastResult<Self> {
        self.add_days(-i64::from(self.weekday().as_u8() - 1))
    }
}

impl FromStr for GregorianDate {
    type Err = BroadcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parsers::parse_date(s)
    }
}

/// A day of the week, numbered Monday = 1 through Sunday = 7.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    #[inline]
    pub(crate) const fn from_epoch_days(epoch_days: i64) -> Self {
        match gregorian::iso_weekday(epoch_days) {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Returns the weekday number, Monday = 1 through Sunday = 7.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the two letter lowercase abbreviation, e.g. `"mo"`.
    #[must_use]
    pub fn abbreviation(self) -> TinyAsciiStr<2> {
        match self {
            Self::Monday => tinystr!(2, "mo"),
            Self::Tuesday => tinystr!(2, "tu"),
            Self::Wednesday => tinystr!(2, "we"),
            Self::Thursday => tinystr!(2, "th"),
            Self::Friday => tinystr!(2, "fr"),
            Self::Saturday => tinystr!(2, "sa"),
            Self::Sunday => tinystr!(2, "su"),
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = BroadcastError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(BroadcastError::invalid_argument()
                .with_message("weekday_id must be in 1..=7")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn try_new_validates_fields() {
        assert!(GregorianDate::try_new(2024, 2, 29).is_ok());
        let err = GregorianDate::try_new(2023, 2, 29).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(
            GregorianDate::try_new(2023, 13, 1).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            GregorianDate::try_new(2023, 4, 0).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            GregorianDate::try_new(2023, 4, 31).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
    }

    #[test]
    fn try_new_rejects_unrepresentable_dates() {
        assert!(GregorianDate::try_new(275_760, 9, 13).is_ok());
        assert!(GregorianDate::try_new(275_760, 9, 14).is_err());
        assert!(GregorianDate::try_new(-271_821, 4, 20).is_ok());
        assert!(GregorianDate::try_new(-271_821, 4, 19).is_err());
        assert!(GregorianDate::try_new(i32::MAX, 1, 1).is_err());
        assert!(GregorianDate::try_new(i32::MIN, 1, 1).is_err());
    }

    #[test]
    fn epoch_day_conversions() {
        let date = GregorianDate::try_new(2023, 2, 21).unwrap();
        assert_eq!(date.to_epoch_days(), 19_409);
        assert_eq!(GregorianDate::from_epoch_days(19_409).unwrap(), date);
        assert!(GregorianDate::from_epoch_days(MAX_EPOCH_DAYS + 1).is_err());
        assert!(GregorianDate::from_epoch_days(MIN_EPOCH_DAYS - 1).is_err());
    }

    #[test]
    fn add_days_and_difference() {
        let date = GregorianDate::try_new(2021, 12, 27).unwrap();
        let later = date.add_days(7).unwrap();
        assert_eq!(later, GregorianDate::try_new(2022, 1, 3).unwrap());
        assert_eq!(date.days_until(&later), 7);
        assert_eq!(later.days_until(&date), -7);
        assert_eq!(later.add_days(-7).unwrap(), date);
        assert!(date.add_days(i64::MAX).is_err());
    }

    #[test]
    fn weekdays() {
        let tuesday = GregorianDate::try_new(2023, 2, 21).unwrap();
        assert_eq!(tuesday.weekday(), Weekday::Tuesday);
        assert_eq!(tuesday.weekday().as_u8(), 2);
        assert_eq!(tuesday.weekday().abbreviation().as_str(), "tu");
        assert_eq!(
            tuesday.monday_on_or_before().unwrap(),
            GregorianDate::try_new(2023, 2, 20).unwrap()
        );

        let sunday = GregorianDate::try_new(2023, 1, 1).unwrap();
        assert_eq!(sunday.weekday(), Weekday::Sunday);
        assert_eq!(
            sunday.monday_on_or_before().unwrap(),
            GregorianDate::try_new(2022, 12, 26).unwrap()
        );
    }

    #[test]
    fn weekday_from_u8() {
        for id in 1..=7u8 {
            assert_eq!(Weekday::try_from(id).unwrap().as_u8(), id);
        }
        assert!(Weekday::try_from(0).is_err());
        assert!(Weekday::try_from(8).is_err());
    }
}
