use crate::iso::GregorianDate;
use crate::BroadcastError;
use crate::BroadcastResult;

use web_time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

impl GregorianDate {
    /// Returns today's date in UTC according to the host system clock.
    pub fn today_utc() -> BroadcastResult<Self> {
        Self::from_epoch_days(get_system_epoch_days()?)
    }
}

/// Returns the days elapsed since 1970-01-01 in UTC.
pub(crate) fn get_system_epoch_days() -> BroadcastResult<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| BroadcastError::general("Error fetching system time"))
        .map(|d| (d.as_secs() / SECONDS_PER_DAY) as i64)
}
