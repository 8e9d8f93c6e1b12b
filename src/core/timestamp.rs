//! Timestamp rendering for line headers
//!
//! Produces the `2009/01/23 01:23:23.123123 ` portion of a line according
//! to the `DATE`, `TIME`, `MICROSECONDS` and `UTC` flags.

use super::flags::Flags;
use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Utc};
use std::fmt::Write;

/// Resolve `now` into the wall clock selected by `flags`.
fn wall_clock(flags: Flags, now: &DateTime<Utc>) -> NaiveDateTime {
    if flags.contains(Flags::UTC) {
        now.naive_utc()
    } else {
        now.with_timezone(&Local).naive_local()
    }
}

/// Append the date/time header fields for `now` to `buf`.
///
/// Writes nothing unless `DATE` or `TIME` is set. `MICROSECONDS` only
/// extends `TIME`; on its own it renders nothing.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use logf::Flags;
/// use logf::core::timestamp::write_timestamp;
///
/// let now = Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).unwrap();
/// let mut header = String::new();
/// write_timestamp(&mut header, Flags::DATE | Flags::TIME | Flags::UTC, &now);
/// assert_eq!(header, "2009/01/23 01:23:23 ");
/// ```
pub fn write_timestamp(buf: &mut String, flags: Flags, now: &DateTime<Utc>) {
    if !flags.intersects(Flags::DATE | Flags::TIME) {
        return;
    }

    let t = wall_clock(flags, now);

    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{:04}/{:02}/{:02} ", t.year(), t.month(), t.day());
    }

    if flags.contains(Flags::TIME) {
        let _ = write!(buf, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second());
        if flags.contains(Flags::MICROSECONDS) {
            // Leap seconds report nanoseconds past 1e9.
            let micros = (t.nanosecond() % 1_000_000_000) / 1_000;
            let _ = write!(buf, ".{:06}", micros);
        }
        buf.push(' ');
    }
}
