//! The broadcast calendar components.
//!
//! - `year`: broadcast year resolution and per-year queries
//! - `date`: the forward conversion from a Gregorian date
//! - `reverse`: the reverse lookup of a period's start date

mod date;
mod reverse;
mod year;

pub use date::{BroadcastDate, BroadcastWeek};
pub use reverse::reverse_broadcastdate;
pub use year::{BroadcastPeriod, BroadcastYear};
