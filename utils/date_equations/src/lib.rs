//! # Date Equations
//!
//! Small integer calendar calculations over epoch days (days since
//! 1970-01-01). The Gregorian conversions follow the Euclidean affine
//! functions described by Cassio Neri and Lorenz Schneider.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! assert_eq!(gregorian::ymd_from_epoch_days(0), (1970, 1, 1));
//! assert_eq!(gregorian::epoch_days_from_ymd(2023, 2, 21), 19_409);
//! // 1970-01-01 was a Thursday.
//! assert_eq!(gregorian::iso_weekday(0), 4);
//! ```

#![no_std]

pub mod gregorian;
