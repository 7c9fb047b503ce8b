//! The ISO 8601 duration value type and its canonical text form.
//!
//! An [`IsoDuration`] keeps each component exactly as written: `P1M` is one
//! calendar month, not 30 days, and `PT36H` stays 36 hours rather than being
//! folded into a day. Nothing is normalized until the duration is applied to a
//! timestamp (see [`IsoDuration::shift`]).
//!
//! # Text form
//!
//! [`Display`](fmt::Display) writes the canonical form: zero components are
//! omitted, `T` appears only when an hour, minute or second component is
//! non-zero, and the all-zero duration is written `P0D`. Parsing accepts more
//! than the formatter emits (leading zeros, explicit zero components, a bare
//! `P` or `PT`), so formatting a parsed value canonicalizes it.
//!
//! # Serde
//!
//! A duration serializes as a single string holding its canonical form and
//! deserializes only from a string, which is run through the parser.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DurationError, Result};
use crate::parser::parse_iso8601;

/// An ISO 8601 duration: calendar years, months, weeks, days, plus clock
/// hours, minutes and seconds.
///
/// Equality is field-wise, so `P1W` and `P7D` are different values even
/// though they shift a timestamp identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration {
    /// Calendar years.
    pub years: u64,
    /// Calendar months.
    pub months: u64,
    /// Weeks, combined with `days` as `weeks * 7 + days` when shifting.
    pub weeks: u64,
    /// Calendar days.
    pub days: u64,
    /// Clock hours.
    pub hours: u64,
    /// Clock minutes.
    pub minutes: u64,
    /// Clock seconds.
    pub seconds: u64,
}

impl IsoDuration {
    /// The zero duration, written `P0D`.
    pub const ZERO: IsoDuration = IsoDuration {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Parse an ISO 8601 duration string.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::GrammarMismatch`] if `s` is not of the form
    /// `P[nY][nM][nW][nD][T[nH][nM][nS]]` (components in that order, unsigned
    /// integers only), or [`DurationError::NumericOverflow`] if a component
    /// does not fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_duration::IsoDuration;
    ///
    /// let d = IsoDuration::parse("P1Y2M3W4DT5H6M7S").unwrap();
    /// assert_eq!(d.weeks, 3);
    /// assert_eq!(d.minutes, 6);
    ///
    /// assert!(IsoDuration::parse("P1M1Y").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<IsoDuration> {
        parse_iso8601(s)
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == IsoDuration::ZERO
    }

    /// Whether any of the hour, minute or second components is non-zero.
    pub fn has_time_part(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0
    }

    /// The hour, minute and second components as an absolute span of time.
    ///
    /// Returns `None` if the total number of seconds does not fit in a
    /// [`TimeDelta`].
    pub fn time_delta(&self) -> Option<TimeDelta> {
        let total = self
            .hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?;
        TimeDelta::try_seconds(i64::try_from(total).ok()?)
    }

    fn date_components(&self) -> [(u64, char); 4] {
        [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ]
    }

    fn time_components(&self) -> [(u64, char); 3] {
        [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')]
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }

        f.write_str("P")?;
        for (value, designator) in self.date_components() {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        if self.has_time_part() {
            f.write_str("T")?;
            for (value, designator) in self.time_components() {
                if value != 0 {
                    write!(f, "{value}{designator}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self> {
        parse_iso8601(s)
    }
}

// ── Serde ───────────────────────────────────────────────────────────────────

impl Serialize for IsoDuration {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct IsoDurationVisitor;

impl Visitor<'_> for IsoDurationVisitor {
    type Value = IsoDuration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO 8601 duration string such as \"P1DT2H\"")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_iso8601(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IsoDurationVisitor)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value() {
        assert!(IsoDuration::ZERO.is_zero());
        assert_eq!(IsoDuration::default(), IsoDuration::ZERO);
        assert!(!IsoDuration { seconds: 1, ..IsoDuration::ZERO }.is_zero());
    }

    #[test]
    fn test_has_time_part() {
        assert!(!IsoDuration::ZERO.has_time_part());
        assert!(!IsoDuration { days: 3, ..IsoDuration::ZERO }.has_time_part());
        assert!(IsoDuration { minutes: 1, ..IsoDuration::ZERO }.has_time_part());
        assert!(IsoDuration { days: 1, seconds: 1, ..IsoDuration::ZERO }.has_time_part());
    }

    // ── formatting ──────────────────────────────────────────────────────

    #[test]
    fn test_format_zero_value() {
        assert_eq!(IsoDuration::ZERO.to_string(), "P0D");
    }

    #[test]
    fn test_format_all_components() {
        let d = IsoDuration {
            years: 1,
            months: 2,
            weeks: 3,
            days: 4,
            hours: 5,
            minutes: 6,
            seconds: 7,
        };
        assert_eq!(d.to_string(), "P1Y2M3W4DT5H6M7S");
    }

    #[test]
    fn test_format_reproduces_canonical_input() {
        for want in ["P1Y", "P2M", "P3W", "P4D", "PT5H", "PT6M", "PT7S", "P1Y2M3W4DT5H6M7S"] {
            let d = IsoDuration::parse(want).unwrap();
            assert_eq!(d.to_string(), want);
        }
    }

    #[test]
    fn test_format_omits_zero_components() {
        let d = IsoDuration { years: 1, days: 2, minutes: 30, ..IsoDuration::ZERO };
        assert_eq!(d.to_string(), "P1Y2DT30M");
    }

    #[test]
    fn test_format_canonicalizes_parsed_input() {
        let cases = [
            ("P", "P0D"),
            ("PT", "P0D"),
            ("P0Y0M0W0DT0H0M0S", "P0D"),
            ("P007D", "P7D"),
            ("P1DT0H", "P1D"),
            ("P0DT1S", "PT1S"),
        ];
        for (input, want) in cases {
            assert_eq!(IsoDuration::parse(input).unwrap().to_string(), want, "input: {input}");
        }
    }

    #[test]
    fn test_from_str() {
        let d: IsoDuration = "PT90M".parse().unwrap();
        assert_eq!(d.minutes, 90);
        assert!("90M".parse::<IsoDuration>().is_err());
    }

    // ── time_delta ──────────────────────────────────────────────────────

    #[test]
    fn test_time_delta_sums_clock_components() {
        let d = IsoDuration { days: 9, hours: 1, minutes: 2, seconds: 3, ..IsoDuration::ZERO };
        assert_eq!(d.time_delta(), Some(TimeDelta::seconds(3723)));
        assert_eq!(IsoDuration::ZERO.time_delta(), Some(TimeDelta::zero()));
    }

    #[test]
    fn test_time_delta_out_of_range() {
        let d = IsoDuration { hours: u64::MAX, ..IsoDuration::ZERO };
        assert_eq!(d.time_delta(), None);
        let d = IsoDuration { seconds: u64::MAX, ..IsoDuration::ZERO };
        assert_eq!(d.time_delta(), None);
    }

    // ── serde ───────────────────────────────────────────────────────────

    #[test]
    fn test_serialize_as_string() {
        let d = IsoDuration::parse("P1Y2M3W4DT5H6M7S").unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""P1Y2M3W4DT5H6M7S""#);
    }

    #[test]
    fn test_deserialize_from_string() {
        let got: IsoDuration = serde_json::from_str(r#""P1Y2M3W4DT5H6M7S""#).unwrap();
        assert_eq!(got, IsoDuration::parse("P1Y2M3W4DT5H6M7S").unwrap());
    }

    #[test]
    fn test_deserialize_propagates_parse_error() {
        let err = serde_json::from_str::<IsoDuration>(r#""P1D2F""#).unwrap_err();
        let parse_err = IsoDuration::parse("P1D2F").unwrap_err();
        assert!(err.to_string().contains(&parse_err.to_string()), "got: {err}");
    }
}
