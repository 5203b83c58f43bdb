//! This module implements date string parsing and formatting.
use ixdtf::{encoding::Utf8, parsers::IxdtfParser, records::IxdtfParseRecord};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::GregorianDate, BroadcastError, BroadcastResult};

const ACCEPTED_CALENDARS: [&[u8]; 2] = [b"iso8601", b"gregory"];

/// Parses a date string such as `2023-02-21` or `+002023-02-21[u-ca=iso8601]`.
///
/// Strings carrying a time, UTC offset or time zone are rejected; a broadcast
/// date is a plain calendar date.
pub(crate) fn parse_date(source: &str) -> BroadcastResult<GregorianDate> {
    let record = parse_ixdtf(source.as_bytes())?;

    if record.time.is_some() || record.offset.is_some() || record.tz.is_some() {
        return Err(BroadcastError::syntax()
            .with_message("Date strings must not contain a time, offset or time zone."));
    }

    if let Some(calendar) = record.calendar {
        if !ACCEPTED_CALENDARS
            .iter()
            .any(|c| c.eq_ignore_ascii_case(calendar))
        {
            return Err(BroadcastError::syntax()
                .with_message("Only the Gregorian (iso8601) calendar is supported."));
        }
    }

    let date = record.date.ok_or_else(|| {
        BroadcastError::syntax().with_message("Date strings must contain a date value.")
    })?;

    GregorianDate::try_new(date.year, date.month, date.day)
}

#[inline]
fn parse_ixdtf(source: &[u8]) -> BroadcastResult<IxdtfParseRecord<'_, Utf8>> {
    IxdtfParser::from_utf8(source).parse().map_err(|e| {
        log::trace!("ixdtf rejected date string: {e:?}");
        BroadcastError::syntax().with_message("Malformed date string.")
    })
}

// ==== Formatting ====

impl Writeable for GregorianDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.year(), sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.month(), sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day(), sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.year()) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

impl_display_with_writeable!(GregorianDate);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_digits(year.unsigned_abs(), 4, sink)
    } else {
        // Extended years always carry a sign and six digits.
        sink.write_char(if year < 0 { '-' } else { '+' })?;
        write_digits(year.unsigned_abs(), 6, sink)
    }
}

fn write_digits<W: core::fmt::Write + ?Sized>(
    value: u32,
    width: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let mut divisor = 10u32.pow(width - 1);
    while divisor > 0 {
        (value / divisor % 10).write_to(sink)?;
        divisor /= 10;
    }
    Ok(())
}
