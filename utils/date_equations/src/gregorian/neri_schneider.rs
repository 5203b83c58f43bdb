// NOTE: The supported range is the epoch day range |epoch_days| <= 100_000_001,
// i.e. the years [-271_821, 275_760]. The shift below covers
// ceil(271_821 / 400) = 680 cycles.

/// The computational rata die of 1970-01-01.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
const SHIFTS: i64 = 680;

const RATA_DIE_SHIFT: i64 = EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_A_400Y_CYCLE * SHIFTS;
const YEAR_SHIFT: i64 = 400 * SHIFTS;

/// Smallest epoch day value accepted by [`ymd_from_epoch_days`].
pub const MIN_SUPPORTED_EPOCH_DAYS: i64 = -100_000_001;
/// Largest epoch day value accepted by [`ymd_from_epoch_days`].
pub const MAX_SUPPORTED_EPOCH_DAYS: i64 = 100_000_001;

/// Returns the epoch days for a Gregorian year, month (1-12) and day (1-31).
///
/// The date is not validated; out of range day values roll over into the
/// adjacent month.
pub const fn epoch_days_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let j = (month <= 2) as i64;
    let year = year as i64 + YEAR_SHIFT - j;
    let month = month as i64 + 12 * j;
    let century = year / 100;

    let year_days = 1461 * year / 4 - century + century / 4;
    let month_days = (979 * month - 2919) / 32;
    year_days + month_days + day as i64 - 1 - RATA_DIE_SHIFT
}

/// Returns the Gregorian `(year, month, day)` for the given epoch days.
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = (epoch_days + RATA_DIE_SHIFT) as u64;

    // Century and day of century.
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE as u64;
    let n_two = (n_one % DAYS_IN_A_400Y_CYCLE as u64) | 3;

    // Year of century and day of (computational) year.
    let year_of_century = (376_287_347 * n_two) >> 39;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;

    // Month and day, with March as month 3.
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three >> 16;
    let day = (n_three & 0xFFFF) / 2141;

    // Days 306 and later are January and February of the next year.
    let j = (day_of_year >= 306) as u64;
    let year = (100 * century + year_of_century + j) as i64 - YEAR_SHIFT;
    (year as i32, (month - 12 * j) as u8, (day + 1) as u8)
}
