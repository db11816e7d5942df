// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Closed intervals between two instants on one time scale.
//!
//! A [`Period`] is both the search window handed to a
//! [`SeasonEventSource`](crate::SeasonEventSource) and the solstice-to-solstice
//! year an instant is located in.

use super::{Time, TimeScale};
use crate::error::{Error, Result};
use qtty::{Days, Simplify};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interval `[start, end]` on time scale `S`.
///
/// # Examples
///
/// ```
/// use yearfrac::{Period, Time, TT};
/// use qtty::Days;
///
/// let year = Period::new(Time::<TT>::new(2_459_934.5), Time::<TT>::new(2_460_299.5));
/// assert_eq!(year.duration(), Days::new(365.0));
/// assert_eq!(year.fraction_at(Time::<TT>::new(2_460_117.0)), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct Period<S: TimeScale> {
    pub start: Time<S>,
    pub end: Time<S>,
}

impl<S: TimeScale> Period<S> {
    /// Creates a period without checking the endpoint order.
    pub const fn new(start: Time<S>, end: Time<S>) -> Self {
        Period { start, end }
    }

    /// Creates a period, rejecting `end <= start` (and NaN endpoints).
    pub fn try_new(start: Time<S>, end: Time<S>) -> Result<Self> {
        let days = end - start;
        if days > Days::new(0.0) {
            Ok(Period { start, end })
        } else {
            Err(Error::InvalidInterval { days: days.value() })
        }
    }

    /// Symmetric window `[center − half_width, center + half_width]`.
    pub fn around(center: Time<S>, half_width: Days) -> Result<Self> {
        Self::try_new(center - half_width, center + half_width)
    }

    /// Length of the period, `end − start`.
    pub fn duration(&self) -> Days {
        self.end - self.start
    }

    /// Whether `t` lies within the closed interval.
    pub fn contains(&self, t: Time<S>) -> bool {
        self.start <= t && t <= self.end
    }

    /// Position of `t` along the period: 0 at `start`, 1 at `end`.
    ///
    /// Not clamped; instants outside the period give values outside [0, 1].
    pub fn fraction_at(&self, t: Time<S>) -> f64 {
        ((t - self.start) / self.duration()).simplify().value()
    }
}

impl<S: TimeScale> fmt::Display for Period<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
