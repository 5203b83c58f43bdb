//! This module implements `BroadcastDate` and `BroadcastWeek`.

use core::str::FromStr;

use crate::{
    components::year::BroadcastYear,
    iso::{GregorianDate, Weekday},
    BroadcastError, BroadcastResult, BroadcastUnwrap, DAYS_PER_WEEK, MAX_DAYS_PER_YEAR,
    MONTHS_PER_QUARTER,
};

/// The broadcast calendar indices of a Gregorian date.
///
/// ```rust
/// use broadcast_calendar::BroadcastDate;
///
/// let date: BroadcastDate = "2023-02-21".parse().unwrap();
/// assert_eq!(date.year_id(), 2023);
/// assert_eq!(date.week_id(), 9);
/// assert_eq!(date.week_start().to_string(), "2023-02-20");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BroadcastDate {
    report_date: GregorianDate,
    year_id: i32,
    qtr_id: u8,
    month_id: u8,
    day_id: u16,
    weekday_id: u8,
    week_id: u8,
    year_start: GregorianDate,
    month_start: GregorianDate,
    week_start: GregorianDate,
}

// ==== Public API ====

impl BroadcastDate {
    /// Computes the broadcast calendar indices of `date`.
    ///
    /// Fails with an `InvalidDateError` when the start of the date's broadcast
    /// year is outside the representable range.
    pub fn new(date: GregorianDate) -> BroadcastResult<Self> {
        let year = BroadcastYear::for_date(date)?;
        let day_id = year.day_of_year(&date).broadcast_unwrap()?;
        crate::broadcast_assert!(
            day_id <= MAX_DAYS_PER_YEAR,
            "day_id {} exceeds {}",
            day_id,
            MAX_DAYS_PER_YEAR
        );

        let weekday_id = ((day_id - 1) % DAYS_PER_WEEK + 1) as u8;
        let week_id = ((day_id - 1) / DAYS_PER_WEEK + 1) as u8;
        crate::broadcast_assert!(
            weekday_id == date.weekday().as_u8(),
            "{} is not weekday {} of its broadcast week",
            date,
            weekday_id
        );

        let week_start = year.week_start(week_id)?;
        let month_id = week_month(week_start);
        let month_start = year.month_start(month_id)?;

        Ok(Self {
            report_date: date,
            year_id: year.year_id(),
            qtr_id: (month_id - 1) / MONTHS_PER_QUARTER + 1,
            month_id,
            day_id,
            weekday_id,
            week_id,
            year_start: year.start_date(),
            month_start,
            week_start,
        })
    }

    /// Computes the broadcast calendar indices of a Gregorian year, month and day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> BroadcastResult<Self> {
        Self::new(GregorianDate::try_new(year, month, day)?)
    }

    /// Returns the Gregorian date these indices were computed from.
    #[inline]
    #[must_use]
    pub const fn report_date(&self) -> GregorianDate {
        self.report_date
    }

    /// Returns the broadcast year.
    #[inline]
    #[must_use]
    pub const fn year_id(&self) -> i32 {
        self.year_id
    }

    /// Returns the broadcast quarter, 1 through 4.
    #[inline]
    #[must_use]
    pub const fn qtr_id(&self) -> u8 {
        self.qtr_id
    }

    /// Returns the broadcast month, 1 through 12.
    #[inline]
    #[must_use]
    pub const fn month_id(&self) -> u8 {
        self.month_id
    }

    /// Returns the day of the broadcast year, 1 through 371.
    #[inline]
    #[must_use]
    pub const fn day_id(&self) -> u16 {
        self.day_id
    }

    /// Returns the day of the broadcast week, Monday = 1 through Sunday = 7.
    #[inline]
    #[must_use]
    pub const fn weekday_id(&self) -> u8 {
        self.weekday_id
    }

    /// Returns the broadcast week, 1 through 53.
    #[inline]
    #[must_use]
    pub const fn week_id(&self) -> u8 {
        self.week_id
    }

    /// Returns the Monday that starts the broadcast year.
    #[inline]
    #[must_use]
    pub const fn year_start(&self) -> GregorianDate {
        self.year_start
    }

    /// Returns the Monday that starts the broadcast month.
    #[inline]
    #[must_use]
    pub const fn month_start(&self) -> GregorianDate {
        self.month_start
    }

    /// Returns the Monday that starts the broadcast week.
    #[inline]
    #[must_use]
    pub const fn week_start(&self) -> GregorianDate {
        self.week_start
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.report_date.weekday()
    }

    /// Returns the two letter weekday abbreviation, e.g. `"tu"`.
    #[inline]
    #[must_use]
    pub fn weekday_abbreviation(&self) -> tinystr::TinyAsciiStr<2> {
        self.weekday().abbreviation()
    }

    /// Returns the broadcast week containing this date.
    #[inline]
    #[must_use]
    pub const fn week(&self) -> BroadcastWeek {
        BroadcastWeek {
            year_id: self.year_id,
            qtr_id: self.qtr_id,
            month_id: self.month_id,
            week_id: self.week_id,
            start: self.week_start,
        }
    }

    /// Returns the broadcast week seven days before this date.
    pub fn previous_week(&self) -> BroadcastResult<BroadcastWeek> {
        BroadcastWeek::for_date(self.report_date.add_days(-i64::from(DAYS_PER_WEEK))?)
    }

    /// Returns the broadcast week seven days after this date.
    pub fn next_week(&self) -> BroadcastResult<BroadcastWeek> {
        BroadcastWeek::for_date(self.report_date.add_days(i64::from(DAYS_PER_WEEK))?)
    }

    /// Computes the broadcast calendar indices of today's date in UTC.
    #[cfg(feature = "sys")]
    pub fn today() -> BroadcastResult<Self> {
        Self::new(GregorianDate::today_utc()?)
    }
}

impl TryFrom<GregorianDate> for BroadcastDate {
    type Error = BroadcastError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl FromStr for BroadcastDate {
    type Err = BroadcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(GregorianDate::from_str(s)?)
    }
}

/// A broadcast week, identified by its year and week number.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BroadcastWeek {
    year_id: i32,
    qtr_id: u8,
    month_id: u8,
    week_id: u8,
    start: GregorianDate,
}

impl BroadcastWeek {
    /// Returns the broadcast week containing `date`.
    pub fn for_date(date: GregorianDate) -> BroadcastResult<Self> {
        BroadcastDate::new(date).map(|d| d.week())
    }

    /// Returns the broadcast year.
    #[inline]
    #[must_use]
    pub const fn year_id(&self) -> i32 {
        self.year_id
    }

    /// Returns the broadcast quarter.
    #[inline]
    #[must_use]
    pub const fn qtr_id(&self) -> u8 {
        self.qtr_id
    }

    /// Returns the broadcast month.
    #[inline]
    #[must_use]
    pub const fn month_id(&self) -> u8 {
        self.month_id
    }

    /// Returns the week number within the broadcast year.
    #[inline]
    #[must_use]
    pub const fn week_id(&self) -> u8 {
        self.week_id
    }

    /// Returns the Monday that starts this week.
    #[inline]
    #[must_use]
    pub const fn start_date(&self) -> GregorianDate {
        self.start
    }
}

/// A broadcast week belongs to the Gregorian month of its Sunday.
#[inline]
fn week_month(week_start: GregorianDate) -> u8 {
    // The Sunday may lie past the representable range, so stay on raw epoch days.
    let sunday = week_start.to_epoch_days() + i64::from(DAYS_PER_WEEK) - 1;
    date_equations::gregorian::ymd_from_epoch_days(sunday).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn date(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn mid_quarter_date() {
        let b = BroadcastDate::new(date(2023, 2, 21)).unwrap();
        assert_eq!(b.report_date(), date(2023, 2, 21));
        assert_eq!(b.year_id(), 2023);
        assert_eq!(b.qtr_id(), 1);
        assert_eq!(b.month_id(), 2);
        assert_eq!(b.day_id(), 58);
        assert_eq!(b.weekday_id(), 2);
        assert_eq!(b.week_id(), 9);
        assert_eq!(b.year_start(), date(2022, 12, 26));
        assert_eq!(b.month_start(), date(2023, 1, 30));
        assert_eq!(b.week_start(), date(2023, 2, 20));
        assert_eq!(b.weekday(), Weekday::Tuesday);
        assert_eq!(b.weekday_abbreviation().as_str(), "tu");
    }

    #[test]
    fn first_day_of_year() {
        let b = BroadcastDate::new(date(2018, 12, 31)).unwrap();
        assert_eq!(b.year_id(), 2019);
        assert_eq!((b.qtr_id(), b.month_id(), b.week_id()), (1, 1, 1));
        assert_eq!((b.day_id(), b.weekday_id()), (1, 1));
    }

    #[test]
    fn last_day_of_long_year() {
        let b = BroadcastDate::new(date(2023, 12, 31)).unwrap();
        assert_eq!(b.year_id(), 2023);
        assert_eq!(b.qtr_id(), 4);
        assert_eq!(b.month_id(), 12);
        assert_eq!(b.day_id(), 371);
        assert_eq!(b.weekday_id(), 7);
        assert_eq!(b.week_id(), 53);
    }

    #[test]
    fn month_follows_the_sunday() {
        // Monday 2023-03-27 through Sunday 2023-04-02 is the first week of April.
        let b = BroadcastDate::new(date(2023, 3, 27)).unwrap();
        assert_eq!((b.qtr_id(), b.month_id(), b.week_id()), (2, 4, 14));
        assert_eq!(b.month_start(), date(2023, 3, 27));

        // Sunday 2023-03-26 still closes a March week.
        let b = BroadcastDate::new(date(2023, 3, 26)).unwrap();
        assert_eq!((b.qtr_id(), b.month_id(), b.week_id()), (1, 3, 13));
    }

    #[test]
    fn quarter_boundaries() {
        let cases = [
            (date(2022, 3, 27), 1, 3),
            (date(2022, 3, 28), 2, 4),
            (date(2022, 6, 26), 2, 6),
            (date(2022, 6, 27), 3, 7),
            (date(2022, 9, 25), 3, 9),
            (date(2022, 9, 26), 4, 10),
        ];
        for (d, qtr_id, month_id) in cases {
            let b = BroadcastDate::new(d).unwrap();
            assert_eq!((b.qtr_id(), b.month_id()), (qtr_id, month_id), "{d}");
        }
    }

    #[test]
    fn neighbouring_weeks_cross_years() {
        let b = BroadcastDate::new(date(2022, 12, 28)).unwrap();
        assert_eq!((b.year_id(), b.week_id()), (2023, 1));

        let previous = b.previous_week().unwrap();
        assert_eq!(previous.year_id(), 2022);
        assert_eq!(previous.week_id(), 52);
        assert_eq!(previous.qtr_id(), 4);
        assert_eq!(previous.month_id(), 12);
        assert_eq!(previous.start_date(), date(2022, 12, 19));

        let next = b.next_week().unwrap();
        assert_eq!((next.year_id(), next.week_id()), (2023, 2));
        assert_eq!(next.start_date(), date(2023, 1, 2));
    }

    #[test]
    fn week_summary_matches_fields() {
        let b = BroadcastDate::new(date(2019, 7, 24)).unwrap();
        let week = b.week();
        assert_eq!(week.year_id(), 2019);
        assert_eq!(week.week_id(), 30);
        assert_eq!(week.start_date(), date(2019, 7, 22));
        assert_eq!(BroadcastWeek::for_date(date(2019, 7, 28)).unwrap(), week);
    }

    #[test]
    fn construction_paths_agree() {
        let from_date = BroadcastDate::new(date(2020, 2, 29)).unwrap();
        assert_eq!(BroadcastDate::from_ymd(2020, 2, 29).unwrap(), from_date);
        assert_eq!(BroadcastDate::try_from(date(2020, 2, 29)).unwrap(), from_date);
        assert_eq!("2020-02-29".parse::<BroadcastDate>().unwrap(), from_date);
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            BroadcastDate::from_ymd(2023, 2, 30).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            "2023-02-xx".parse::<BroadcastDate>().unwrap_err().kind(),
            ErrorKind::Syntax
        );
        // The broadcast year of the first representable day starts before it.
        assert_eq!(
            BroadcastDate::from_ymd(-271_821, 4, 20).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
    }
}
