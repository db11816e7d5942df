// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year Fraction
//!
//! Where "now" sits inside the astronomical year that runs from one
//! December solstice to the next, reported as binary subdivisions of that
//! year: halves, quarters, eighths, sixteenths, thirty-seconds and
//! sixty-fourths.
//!
//! # Core types
//!
//! - [`YearFractionCalculator`]: finds the bracketing December solstices
//!   and locates an instant between them.
//! - [`YearFraction`]: the bracketing year, the fraction and its six indices.
//! - [`SeasonEventSource`]: capability listing equinoxes and solstices in a
//!   window; implemented by [`SolarEphemeris`] and [`MeeusSeasonTable`].
//! - [`Time<S>`]: instant parameterised by a [`TimeScale`] marker.
//! - [`Period<S>`]: interval between two instants.
//! - [`TimeSource`]: where "now" comes from ([`SystemClock`], [`FixedClock`]).
//! - [`ObserverLocation`]: latitude and longitude of the observer.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`TT`] | Terrestrial Time |
//! | [`TDB`] | Barycentric Dynamical Time |
//! | [`UT`] | Universal Time (Earth rotation) |
//!
//! # Example
//!
//! ```
//! use yearfrac::{compute, MeeusSeasonTable, ObserverLocation, Time, TT};
//!
//! let observer = ObserverLocation::new(38.478752, -107.877739)?;
//! // 2024-06-20 12:00 TT, six months into the 2023/24 solstice year
//! let now = Time::<TT>::new(2_460_482.0);
//! let result = compute(&observer, now, MeeusSeasonTable)?;
//! assert_eq!(result.index_for(2), Some(1));
//! assert_eq!(result.index_for(4), Some(2));
//! println!("{result}");
//! # Ok::<(), yearfrac::Error>(())
//! ```

mod clock;
mod delta_t;
mod error;
mod fraction;
pub(crate) mod instant;
mod julian_date_ext;
mod observer;
mod period;
pub(crate) mod scales;
pub mod search;
mod seasons;
pub mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use error::{Error, Result};
pub use fraction::{compute, YearFraction, YearFractionCalculator, DIVISORS, SEARCH_HALF_WIDTH};
pub use instant::{Time, TimeScale};
pub use observer::{ObserverLocation, DEGREES_PER_HOUR};
pub use period::Period;
pub use scales::{JD, TDB, TT, UT};
pub use seasons::{
    EphemerisConfig, EphemerisModel, MeeusSeasonTable, Season, SeasonEvent, SeasonEventSource,
    SolarEphemeris, MAX_STEP_DAYS, MEEUS_YEARS, MIN_EPSILON_SECONDS,
};

/// Julian Date on the TT axis, the instant type used throughout the crate.
pub type JulianDate = Time<TT>;

/// Universal Time, the Earth-rotation civil time scale.
pub type UniversalTime = Time<UT>;
