// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! Mean longitude plus the equation of the centre, referred to the true
//! equinox of date with the dominant nutation term and corrected for
//! annual aberration (Meeus 1998, ch. 25, low-accuracy method). Accuracy
//! is about 0.01°; at the solstice the Sun moves ~1.02° per day, so a
//! season transition is placed within roughly a quarter of an hour.

use crate::instant::Time;
use crate::scales::{TDB, TT};

/// Width of a season in ecliptic longitude, degrees.
pub const SEASON_WIDTH_DEG: f64 = 90.0;

/// Normalise an angle to `[0, 360)`.
#[inline]
fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Geometric (true) longitude of the Sun, degrees, mean equinox of date.
pub fn true_longitude(t: Time<TDB>) -> f64 {
    let t = t.to::<TT>().julian_centuries();

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    normalize_degrees(l0 + c)
}

/// Apparent longitude of the Sun in degrees, `[0, 360)`.
///
/// # Examples
///
/// ```
/// use yearfrac::{sun, Time, TDB};
///
/// // 1992 October 13.0 TD
/// let lambda = sun::apparent_longitude(Time::<TDB>::new(2_448_908.5));
/// assert!((lambda - 199.909).abs() < 0.01);
/// ```
pub fn apparent_longitude(t: Time<TDB>) -> f64 {
    let tc = t.to::<TT>().julian_centuries();
    // Longitude of the Moon's ascending node
    let omega = (125.04 - 1_934.136 * tc).to_radians();
    normalize_degrees(true_longitude(t) - 0.005_69 - 0.004_78 * omega.sin())
}

/// Season index `floor(λ / 90°)`: 0 after the March equinox, 1 after the
/// June solstice, 2 after the September equinox, 3 after the December
/// solstice.
#[inline]
pub fn season_index(t: Time<TDB>) -> i64 {
    ((apparent_longitude(t) / SEASON_WIDTH_DEG).floor() as i64).rem_euclid(4)
}
