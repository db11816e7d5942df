// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Relation to JD(TT) |
//! |--------|-------------|--------------------|
//! | [`JD`]  | Julian Date counter | identity |
//! | [`TT`]  | Terrestrial Time | identity |
//! | [`TDB`] | Barycentric Dynamical Time | identity (≈1.7 ms periodic term ignored) |
//! | [`UT`]  | Universal Time | `JD(TT) = JD(UT) + ΔT` |
//!
//! Solstice searches and year fractions run on [`TT`]; the solar model reads
//! [`TDB`]; [`UT`] only appears when crossing to or from civil UTC.

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Terrestrial Time, the uniform axis every year fraction is measured on.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Barycentric Dynamical Time.
///
/// Treated as numerically equal to TT. The solar model is accurate to
/// roughly a hundredth of a degree, many orders above the millisecond
/// TDB − TT term.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TDB;

impl TimeScale for TDB {
    const LABEL: &'static str = "TDB";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Universal Time, tied to Earth's rotation.
///
/// `to_jd_tt` adds ΔT from [`delta_t`](super::delta_t); the inverse solves
/// `ut + ΔT(ut) = tt` by fixed-point iteration. ΔT changes by well under a
/// second per year, so three rounds settle to sub-microsecond level.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        let dt = super::delta_t::delta_t_seconds_from_ut(ut_value);
        ut_value + dt.to::<qtty::Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut ut = jd_tt;
        for _ in 0..3 {
            let dt = super::delta_t::delta_t_seconds_from_ut(ut).to::<qtty::Day>();
            ut = jd_tt - dt;
        }
        ut
    }
}

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, TT, TDB, UT);
