//! # iso-duration
//!
//! ISO 8601 durations (`P1Y2M3W4DT5H6M7S`): parsing, canonical formatting,
//! serde support, and shifting of [`chrono::DateTime`] values.
//!
//! Shifting treats calendar components and clock components differently.
//! Years, months, weeks and days move the local calendar date and keep the
//! wall-clock time, so `P1D` across a DST change lands on the same local
//! hour. Hours, minutes and seconds add elapsed time, so `PT24H` across the
//! same change is exactly 24 real hours.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use iso_duration::IsoDuration;
//!
//! let d: IsoDuration = "P1MT12H".parse().unwrap();
//! let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
//! assert_eq!(d.shift(&start), Utc.with_ymd_and_hms(2018, 2, 1, 12, 0, 0).unwrap());
//! assert_eq!(d.to_string(), "P1MT12H");
//! ```
//!
//! ## Modules
//!
//! - [`duration`] — The [`IsoDuration`] value type, formatting, and serde
//! - [`shift`] — Applying a duration to a timestamp
//! - [`error`] — Error types

pub mod duration;
pub mod error;
mod parser;
pub mod shift;

pub use duration::IsoDuration;
pub use error::DurationError;
