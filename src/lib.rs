//! The `broadcast_calendar` crate converts between Gregorian dates and the
//! broadcast calendar used for media and retail reporting.
//!
//! ```rust
//! use broadcast_calendar::{reverse_broadcastdate, BroadcastDate, GregorianDate};
//!
//! let date = GregorianDate::try_new(2023, 2, 21).unwrap();
//! let broadcast = BroadcastDate::new(date).unwrap();
//! assert_eq!(broadcast.year_id(), 2023);
//! assert_eq!(broadcast.qtr_id(), 1);
//! assert_eq!(broadcast.month_id(), 2);
//! assert_eq!(broadcast.week_id(), 9);
//! assert_eq!(broadcast.day_id(), 58);
//! assert_eq!(broadcast.weekday_id(), 2);
//!
//! // The Gregorian date that starts broadcast week 30 of 2019.
//! let start = reverse_broadcastdate(2019, Some(30), None).unwrap();
//! assert_eq!(start, GregorianDate::try_new(2019, 7, 22).unwrap());
//! ```
//!
//! A broadcast week runs Monday through Sunday and belongs to the Gregorian
//! month and year of its Sunday. As a result:
//!
//! - a broadcast year starts on the Monday on or before January 1 and has
//!   52 or 53 weeks,
//! - a broadcast month starts on the Monday on or before the first of its
//!   Gregorian month and has 4 or 5 weeks,
//! - quarters group three broadcast months.
//!
//! The only side effect in the crate is a `warn` record sent to the [`log`]
//! facade when [`reverse_broadcastdate`] receives both a week and a month.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;

mod components;
mod parsers;

#[cfg(feature = "sys")]
pub(crate) mod sys;

#[doc(inline)]
pub use error::{BroadcastError, ErrorKind};

pub use crate::components::{
    reverse_broadcastdate, BroadcastDate, BroadcastPeriod, BroadcastWeek, BroadcastYear,
};
pub use crate::iso::{GregorianDate, Weekday};

/// The `broadcast_calendar` result type
pub type BroadcastResult<T> = Result<T, BroadcastError>;

/// A library specific trait for unwrapping assertions.
pub(crate) trait BroadcastUnwrap {
    type Output;

    /// `broadcast_calendar` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn broadcast_unwrap(self) -> BroadcastResult<Self::Output>;
}

impl<T> BroadcastUnwrap for Option<T> {
    type Output = T;

    fn broadcast_unwrap(self) -> BroadcastResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(BroadcastError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! broadcast_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::BroadcastError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            log::error!($($args)+);
            return Err($crate::BroadcastError::assert());
        }
    };
}

// Relevant calendar constants
/// Days in a broadcast week.
pub const DAYS_PER_WEEK: u16 = 7;
/// Months in a broadcast year.
pub const MONTHS_PER_YEAR: u8 = 12;
/// Months in a broadcast quarter.
pub const MONTHS_PER_QUARTER: u8 = 3;
/// Largest number of weeks in a broadcast year.
pub const MAX_WEEKS_PER_YEAR: u8 = 53;
/// Largest number of days in a broadcast year.
pub const MAX_DAYS_PER_YEAR: u16 = MAX_WEEKS_PER_YEAR as u16 * DAYS_PER_WEEK;

/// Smallest representable epoch day (`-271821-04-20`).
pub const MIN_EPOCH_DAYS: i64 = -100_000_000;
/// Largest representable epoch day (`+275760-09-13`).
pub const MAX_EPOCH_DAYS: i64 = 100_000_000;
/// Smallest representable Gregorian year.
pub const MIN_YEAR: i32 = -271_821;
/// Largest representable Gregorian year.
pub const MAX_YEAR: i32 = 275_760;
