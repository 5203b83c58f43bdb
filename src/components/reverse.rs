//! This module implements the reverse lookup from broadcast indices to a
//! Gregorian start date.

use crate::{
    components::year::{BroadcastPeriod, BroadcastYear},
    iso::GregorianDate,
    BroadcastResult,
};

/// Returns the Gregorian date that starts a broadcast period.
///
/// With neither `week_id` nor `month_id` the start of broadcast year
/// `year_id` is returned; otherwise the Monday starting the given week or
/// month of that year.
///
/// When both are supplied `week_id` takes precedence, `month_id` is ignored
/// and a `warn` record is sent to the [`log`] facade.
///
/// ```rust
/// use broadcast_calendar::{reverse_broadcastdate, GregorianDate};
///
/// let start = reverse_broadcastdate(2020, None, Some(5)).unwrap();
/// assert_eq!(start, GregorianDate::try_new(2020, 4, 27).unwrap());
/// ```
///
/// Fails with an `InvalidArgumentError` when `week_id` does not exist in the
/// year or `month_id` is outside `1..=12`, and with an `InvalidDateError` when
/// the result is outside the representable range.
pub fn reverse_broadcastdate(
    year_id: i32,
    week_id: Option<u8>,
    month_id: Option<u8>,
) -> BroadcastResult<GregorianDate> {
    let period = match (week_id, month_id) {
        (None, None) => BroadcastPeriod::Year,
        (Some(week_id), None) => BroadcastPeriod::Week(week_id),
        (None, Some(month_id)) => BroadcastPeriod::Month(month_id),
        (Some(week_id), Some(month_id)) => {
            log::warn!(
                "both week_id={week_id} and month_id={month_id} supplied for broadcast year \
                 {year_id}; using week_id, month_id={month_id} ignored"
            );
            BroadcastPeriod::Week(week_id)
        }
    };

    BroadcastYear::try_new(year_id)?.period_start(period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn date(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn year_only() {
        assert_eq!(reverse_broadcastdate(2022, None, None).unwrap(), date(2021, 12, 27));
        assert_eq!(reverse_broadcastdate(2024, None, None).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn week_only() {
        assert_eq!(reverse_broadcastdate(2019, Some(30), None).unwrap(), date(2019, 7, 22));
        assert_eq!(reverse_broadcastdate(2019, Some(1), None).unwrap(), date(2018, 12, 31));
    }

    #[test]
    fn month_only() {
        assert_eq!(reverse_broadcastdate(2020, None, Some(5)).unwrap(), date(2020, 4, 27));
        assert_eq!(reverse_broadcastdate(2020, None, Some(1)).unwrap(), date(2019, 12, 30));
    }

    #[test]
    fn week_takes_precedence() {
        assert_eq!(
            reverse_broadcastdate(2022, Some(50), Some(12)).unwrap(),
            date(2022, 12, 5)
        );
        // An out of range month is ignored along with the rest of the month.
        assert_eq!(
            reverse_broadcastdate(2022, Some(50), Some(99)).unwrap(),
            date(2022, 12, 5)
        );
    }

    #[test]
    fn out_of_range_indices() {
        let err = reverse_broadcastdate(2022, Some(53), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(reverse_broadcastdate(2023, Some(53), None).is_ok());
        assert_eq!(
            reverse_broadcastdate(2022, Some(0), None).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            reverse_broadcastdate(2022, None, Some(13)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            reverse_broadcastdate(2022, None, Some(0)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn unrepresentable_year() {
        assert_eq!(
            reverse_broadcastdate(i32::MIN, None, None).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
    }
}
