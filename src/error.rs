// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the yearfrac crate.

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The search window did not hold a December solstice on both sides of "now".
    #[error(
        "no bracketing December solstice: {before} before and {after} after the reference instant"
    )]
    NoBracketingSolstice {
        /// December solstices found strictly before the instant.
        before: usize,
        /// December solstices found strictly after the instant.
        after: usize,
    },

    /// An interval whose end does not lie after its start.
    #[error("interval length must be positive, got {days} days")]
    InvalidInterval {
        /// Signed length of the rejected interval.
        days: f64,
    },

    /// Observer coordinate out of range or non-finite.
    #[error("observer {field} out of range: {value}")]
    InvalidObserver {
        /// `"latitude"` or `"longitude"`.
        field: &'static str,
        /// The rejected value in degrees.
        value: f64,
    },

    /// Ephemeris configuration value rejected at construction.
    #[error("invalid ephemeris {field}: {value}")]
    InvalidConfig {
        /// Name of the rejected setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Year outside the validity range of the seasons table.
    #[error("year {year} outside the supported range -1000..=3000")]
    OutOfRange {
        /// The offending year.
        year: i32,
    },

    /// Instant not representable as a `chrono::DateTime<Utc>`.
    #[error("JD(TT) {jd} cannot be represented as a UTC timestamp")]
    UtcConversion {
        /// The instant as a Julian day.
        jd: f64,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
