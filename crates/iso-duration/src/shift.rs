//! Applying an [`IsoDuration`] to a timestamp.
//!
//! Shifting happens in two phases:
//!
//! 1. **Calendar phase** (years, months, weeks, days) works on the local
//!    wall-clock date and keeps the local time of day. Adding `P1D` across a
//!    DST transition lands on the same local hour, 23 or 25 real hours later.
//! 2. **Elapsed phase** (hours, minutes, seconds) adds an absolute span to
//!    the instant. Adding `PT24H` across the same transition advances exactly
//!    24 real hours, so the local hour moves.
//!
//! # Month-end rollover
//!
//! A day-of-month that does not exist in the target month rolls over into the
//! next one instead of being clamped: `2018-01-31 + P1M` is `2018-03-03`, and
//! `2020-02-29 + P1Y` is `2021-03-01`. Shifting by months is only predictable
//! for start dates before the 29th.
//!
//! # Local time resolution
//!
//! After the calendar phase the new wall-clock time is mapped back into the
//! time zone. A time that occurs twice (fall back) resolves to the earlier
//! instant. A time skipped by a spring-forward gap is read with the offset in
//! effect before the gap, so it lands after the gap by the same amount
//! (`02:30` on a day clocks jump from 02:00 to 03:00 becomes `03:30`).

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};

use crate::duration::IsoDuration;

impl IsoDuration {
    /// Shift `t` forward by this duration.
    ///
    /// Weeks and days are combined as `weeks * 7 + days`. See the
    /// [module documentation](crate::shift) for the calendar rules.
    ///
    /// # Panics
    ///
    /// Panics if the result, or any intermediate date, is outside the range
    /// chrono can represent. Use [`checked_shift`](Self::checked_shift) to
    /// get `None` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use iso_duration::IsoDuration;
    ///
    /// let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
    /// let d = IsoDuration::parse("P10Y5M8DT5H10M6S").unwrap();
    /// assert_eq!(d.shift(&start), Utc.with_ymd_and_hms(2028, 6, 9, 5, 10, 6).unwrap());
    /// ```
    pub fn shift<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTime<Tz> {
        match self.checked_shift(t) {
            Some(shifted) => shifted,
            None => panic!("shifting {t:?} by {self} is out of the representable range"),
        }
    }

    /// Shift `t` forward by this duration, returning `None` if the result is
    /// out of range.
    pub fn checked_shift<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let mut shifted = t.clone();

        if self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0 {
            let local = add_calendar(t.naive_local(), self)?;
            shifted = resolve_local(&t.timezone(), local)?;
        }

        shifted.checked_add_signed(self.time_delta()?)
    }
}

/// Add the calendar components to a wall-clock datetime.
///
/// The target month is found first; the day offset is then counted from the
/// first of that month, which is what rolls `Feb 31` over into March.
fn add_calendar(local: NaiveDateTime, d: &IsoDuration) -> Option<NaiveDateTime> {
    let months = i64::from(local.year())
        .checked_mul(12)?
        .checked_add(i64::from(local.month0()))?
        .checked_add(i64::try_from(d.years).ok()?.checked_mul(12)?)?
        .checked_add(i64::try_from(d.months).ok()?)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let days = d
        .weeks
        .checked_mul(7)?
        .checked_add(d.days)?
        .checked_add(u64::from(local.day0()))?;

    let date = NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(days))?;
    Some(date.and_time(local.time()))
}

/// Map a wall-clock datetime back into `tz`.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return Some(dt);
    }

    // Skipped by a gap: use the offset from a day earlier, before the transition.
    let before = local.checked_sub_signed(TimeDelta::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc))
}

// ── Tests ───────────────────────────────────────────────────────────────────
