// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): UT↔TT correction
//!
//! ΔT = TT − UT from the polynomial expressions of Espenak & Meeus (2006),
//! *Five Millennium Canon of Solar Eclipses*, NASA/TP-2006-214141, with
//! the Morrison & Stephenson long-term parabola outside −500..2150.
//!
//! The correction is applied by the [`UT`](super::UT) scale, so
//! [`Time::from_utc`](super::Time::from_utc) lands on TT without callers
//! touching this module.
//!
//! ## Quick Example
//! ```rust
//! use yearfrac::{Time, TT, UT};
//!
//! let ut = Time::<UT>::new(2_460_310.5);
//! let tt = ut.to::<TT>();
//! println!("ΔT = {}", ut.delta_t());
//! assert!(tt > Time::<TT>::new(ut.value()));
//! ```
//!
//! ## Accuracy
//! Around ±1 s since 1900; the post-2005 branch is an extrapolation and
//! overestimates the observed value by a few seconds in the 2020s. A few
//! seconds shift a solstice year fraction by ~1e-7, far below the width of a
//! sixty-fourth.

use super::instant::Time;
use super::scales::UT;
use qtty::{Days, Seconds};

/// One segment of the piecewise model: `ΔT = Σ cᵢ·tⁱ` with `t = (y − origin) / scale`.
struct Segment {
    until: f64,
    origin: f64,
    scale: f64,
    coeffs: &'static [f64],
}

#[rustfmt::skip]
const SEGMENTS: &[Segment] = &[
    Segment { until: 500.0,  origin: 0.0,    scale: 100.0, coeffs: &[10_583.6, -1_014.41, 33.783_11, -5.952_053, -0.179_845_2, 0.022_174_192, 0.009_031_652_1] },
    Segment { until: 1600.0, origin: 1000.0, scale: 100.0, coeffs: &[1_574.2, -556.01, 71.234_72, 0.319_781, -0.850_346_3, -0.005_050_998, 0.008_357_207_3] },
    Segment { until: 1700.0, origin: 1600.0, scale: 1.0,   coeffs: &[120.0, -0.980_8, -0.015_32, 1.0 / 7_129.0] },
    Segment { until: 1800.0, origin: 1700.0, scale: 1.0,   coeffs: &[8.83, 0.160_3, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0] },
    Segment { until: 1860.0, origin: 1800.0, scale: 1.0,   coeffs: &[13.72, -0.332_447, 0.006_861_2, 0.004_111_6, -0.000_374_36, 0.000_012_127_2, -0.000_000_169_9, 0.000_000_000_875] },
    Segment { until: 1900.0, origin: 1860.0, scale: 1.0,   coeffs: &[7.62, 0.573_7, -0.251_754, 0.016_806_68, -0.000_447_362_4, 1.0 / 233_174.0] },
    Segment { until: 1920.0, origin: 1900.0, scale: 1.0,   coeffs: &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197] },
    Segment { until: 1941.0, origin: 1920.0, scale: 1.0,   coeffs: &[21.20, 0.844_93, -0.076_100, 0.002_093_6] },
    Segment { until: 1961.0, origin: 1950.0, scale: 1.0,   coeffs: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2_547.0] },
    Segment { until: 1986.0, origin: 1975.0, scale: 1.0,   coeffs: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0] },
    Segment { until: 2005.0, origin: 2000.0, scale: 1.0,   coeffs: &[63.86, 0.334_5, -0.060_374, 0.001_727_5, 0.000_651_814, 0.000_023_735_99] },
    Segment { until: 2050.0, origin: 2000.0, scale: 1.0,   coeffs: &[62.92, 0.322_17, 0.005_589] },
];

const J2000_JD: f64 = 2_451_545.0;
const JULIAN_YEAR_D: f64 = 365.25;

/// Long-term parabola, `u` in centuries from 1820.
#[inline]
fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[inline]
fn horner(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Decimal year of a Julian day, counted in Julian years from J2000.0.
#[inline]
fn decimal_year(jd: Days) -> f64 {
    2000.0 + (jd.value() - J2000_JD) / JULIAN_YEAR_D
}

/// Returns **ΔT** in seconds for a Julian Day on the **UT** axis.
pub(crate) fn delta_t_seconds_from_ut(jd_ut: Days) -> Seconds {
    let y = decimal_year(jd_ut);
    let dt = if !(-500.0..2150.0).contains(&y) {
        long_term(y)
    } else if y >= 2050.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        SEGMENTS
            .iter()
            .find(|s| y < s.until)
            .map(|s| horner((y - s.origin) / s.scale, s.coeffs))
            .unwrap_or_else(|| long_term(y))
    };
    Seconds::new(dt)
}

impl Time<UT> {
    /// Returns **ΔT = TT − UT** in seconds for this UT epoch.
    ///
    /// The same correction is applied automatically by `.to::<TT>()`.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds_from_ut(self.quantity())
    }
}
