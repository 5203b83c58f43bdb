/// Gregorian Date Calculations
///
/// ## Extending the Neri-Schneider shift window
///
/// The paper's equations run on an unsigned "computational" calendar that
/// starts on March 1 of year 0. Dates before that are handled by shifting
/// the input forward by whole 400-year cycles and shifting the result back.
/// A shift of 680 cycles keeps every supported date non-negative.
///
/// | Significant Date | Computational Rata Die | Shifted Rata Die |
/// | -----------------|------------------------|------------------|
/// | April 19, -271_821 | -99,280,532 | 65,428 |
/// | January 1, 1970 | 719,468 | 100,065,428 |
/// | September 14, 275,760 | 100,719,469 | 200,065,429 |
///
/// Inputs must lie within `[MIN_SUPPORTED_EPOCH_DAYS, MAX_SUPPORTED_EPOCH_DAYS]`.
pub mod neri_schneider;

pub use neri_schneider::{
    epoch_days_from_ymd, ymd_from_epoch_days, MAX_SUPPORTED_EPOCH_DAYS,
    MIN_SUPPORTED_EPOCH_DAYS,
};

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (1-12) of `year`, or `None` for an
/// invalid month.
#[inline]
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Returns the ISO day of week for the given epoch days, Monday = 1 through
/// Sunday = 7.
#[inline]
pub const fn iso_weekday(epoch_days: i64) -> u8 {
    // 1970-01-01 is a Thursday.
    (epoch_days + 3).rem_euclid(7) as u8 + 1
}
