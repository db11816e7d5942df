// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch constants and dynamical-time arguments on `Time<TT>`.

use qtty::*;

use super::instant::Time;
use super::scales::TT;

impl Time<TT> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0, the `T` argument of the solar theory.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        ((*self - Self::J2000) / Self::JULIAN_CENTURY)
            .simplify()
            .value()
    }

    /// Approximate calendar year, counted in Julian years from J2000.0.
    ///
    /// Good enough to pick the civil year around an instant; not a
    /// calendar conversion.
    #[inline]
    pub fn decimal_year(&self) -> f64 {
        2000.0
            + ((*self - Self::J2000) / Self::JULIAN_YEAR)
                .simplify()
                .value()
    }
}
