//! Scanner for the fixed-order ISO 8601 duration grammar.
//!
//! ```text
//! P (<n>Y)? (<n>M)? (<n>W)? (<n>D)? ( T (<n>H)? (<n>M)? (<n>S)? )?
//! ```
//!
//! Every component is optional, but those present must appear in the order
//! above, each at most once. Components are unsigned runs of ASCII digits.
//! The whole input must be consumed; designators are case-sensitive.
//!
//! Scanning happens in two passes: the grammar is checked over the whole
//! input first, and digit runs are converted only once it matched. An input
//! that is malformed *and* carries an oversized number therefore reports
//! [`DurationError::GrammarMismatch`], never [`DurationError::NumericOverflow`].

use crate::duration::IsoDuration;
use crate::error::{DurationError, Result};

const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

/// Parse an ISO 8601 duration string such as `"P1Y2M3W4DT5H6M7S"`.
pub(crate) fn parse_iso8601(input: &str) -> Result<IsoDuration> {
    let mismatch = || DurationError::GrammarMismatch(input.to_string());

    let rest = input.strip_prefix('P').ok_or_else(mismatch)?;
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => (date, time),
        None => (rest, ""),
    };

    let [years, months, weeks, days] =
        scan_section(date, DATE_DESIGNATORS).ok_or_else(mismatch)?;
    let [hours, minutes, seconds] = scan_section(time, TIME_DESIGNATORS).ok_or_else(mismatch)?;

    Ok(IsoDuration {
        years: component(years, 'Y')?,
        months: component(months, 'M')?,
        weeks: component(weeks, 'W')?,
        days: component(days, 'D')?,
        hours: component(hours, 'H')?,
        minutes: component(minutes, 'M')?,
        seconds: component(seconds, 'S')?,
    })
}

/// Split one section (date or time) into per-designator digit runs.
///
/// Returns `None` if the section has anything other than `<digits><designator>`
/// pairs whose designators appear in `designators` order without repeats.
fn scan_section<const N: usize>(
    section: &str,
    designators: [char; N],
) -> Option<[Option<&str>; N]> {
    let mut found = [None; N];
    let mut next = 0;
    let mut rest = section;

    while !rest.is_empty() {
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        let (digits, tail) = rest.split_at(len);
        let designator = tail.chars().next()?;
        let slot = next + designators[next..].iter().position(|&c| c == designator)?;

        found[slot] = Some(digits);
        next = slot + 1;
        rest = &tail[designator.len_utf8()..];
    }

    Some(found)
}

/// Convert a matched digit run; absent components are zero.
fn component(digits: Option<&str>, designator: char) -> Result<u64> {
    match digits {
        None => Ok(0),
        Some(digits) => digits
            .parse::<u64>()
            .map_err(|_| DurationError::NumericOverflow {
                component: designator,
                digits: digits.to_string(),
            }),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
