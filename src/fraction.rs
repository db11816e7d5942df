// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Position of an instant within its December-solstice year.
//!
//! The year runs from the most recent December solstice to the next one.
//! The instant is shifted by the observer's mean-solar-time offset
//! (1 h per 15° of longitude) before it is located; the solstices
//! themselves are not shifted. Near a solstice and at large longitudes
//! the fraction can therefore leave [0, 1), and the indices are left
//! unclamped when it does.

use std::fmt;

use qtty::Days;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::TimeSource;
use crate::error::{Error, Result};
use crate::instant::Time;
use crate::observer::ObserverLocation;
use crate::period::Period;
use crate::scales::TT;
use crate::seasons::{Season, SeasonEventSource};

/// Binary subdivisions reported for every instant.
pub const DIVISORS: [u32; 6] = [2, 4, 8, 16, 32, 64];

/// Half-width of the window searched for December solstices around "now".
/// Solstices recur yearly, so ±365 days always holds one on each side.
pub const SEARCH_HALF_WIDTH: Days = Days::new(365.0);

/// Fraction of the solstice year and its six subdivision indices.
///
/// `indices[k]` is `floor(fraction · DIVISORS[k]) + 1`: 1-based, and within
/// `1..=d` whenever the fraction lies in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearFraction {
    /// The bracketing December solstices, `[recent, next]`.
    pub year: Period<TT>,
    pub fraction: f64,
    pub indices: [i64; 6],
}

impl YearFraction {
    /// Bucket a fraction already computed within `year`.
    pub fn from_fraction(year: Period<TT>, fraction: f64) -> Self {
        let indices = DIVISORS.map(|d| (fraction * f64::from(d)).floor() as i64 + 1);
        Self {
            year,
            fraction,
            indices,
        }
    }

    /// `(index, divisor)` pairs in divisor order.
    pub fn subdivisions(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.indices.iter().copied().zip(DIVISORS)
    }

    /// Index for divisor `d`, if `d` is one of [`DIVISORS`].
    pub fn index_for(&self, divisor: u32) -> Option<i64> {
        DIVISORS
            .iter()
            .position(|&d| d == divisor)
            .map(|k| self.indices[k])
    }
}

/// One `<index>/<divisor>` line per subdivision.
impl fmt::Display for YearFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, (index, divisor)) in self.subdivisions().enumerate() {
            if k > 0 {
                writeln!(f)?;
            }
            write!(f, "{index}/{divisor}")?;
        }
        Ok(())
    }
}

/// Locates instants within their December-solstice year using one
/// [`SeasonEventSource`].
#[derive(Debug, Clone)]
pub struct YearFractionCalculator<S> {
    source: S,
}

impl<S: SeasonEventSource> YearFractionCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The event source in use.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The December solstices immediately before and after `now`.
    ///
    /// Queries the source once over `now ± 365 d` and returns
    /// `[recent, next]` with `recent < now < next`. An event exactly at
    /// `now` counts on neither side.
    pub fn bracketing_solstices(&self, now: Time<TT>) -> Result<Period<TT>> {
        self.bracket_within(Period::around(now, SEARCH_HALF_WIDTH)?, now)
    }

    fn bracket_within(&self, window: Period<TT>, now: Time<TT>) -> Result<Period<TT>> {
        let events = self.source.find_events(window)?;

        let mut recent: Option<Time<TT>> = None;
        let mut next: Option<Time<TT>> = None;
        let (mut before, mut after) = (0usize, 0usize);

        for t in events
            .iter()
            .filter(|e| e.kind == Season::DecemberSolstice)
            .map(|e| e.time)
        {
            if t < now {
                before += 1;
                if recent.map_or(true, |r| t > r) {
                    recent = Some(t);
                }
            } else if t > now {
                after += 1;
                if next.map_or(true, |n| t < n) {
                    next = Some(t);
                }
            }
        }

        match (recent, next) {
            (Some(recent), Some(next)) => {
                debug!(%recent, %next, "bracketing December solstices");
                Period::try_new(recent, next)
            }
            _ => Err(Error::NoBracketingSolstice { before, after }),
        }
    }

    /// Fraction of the solstice year elapsed at `now` for `observer`.
    pub fn compute(&self, observer: &ObserverLocation, now: Time<TT>) -> Result<YearFraction> {
        let year = self.bracketing_solstices(now)?;
        Ok(locate(year, observer, now))
    }

    /// Like [`compute`](Self::compute), reading "now" from `clock` and
    /// letting the clock derive the window edges.
    pub fn compute_now<C: TimeSource + ?Sized>(
        &self,
        observer: &ObserverLocation,
        clock: &C,
    ) -> Result<YearFraction> {
        let now = clock.now();
        let half = SEARCH_HALF_WIDTH.value();
        let window = Period::try_new(clock.from_offset(now, -half), clock.from_offset(now, half))?;
        let year = self.bracket_within(window, now)?;
        Ok(locate(year, observer, now))
    }
}

/// Shift `now` by the observer's longitude offset and bucket its position
/// within `year`.
fn locate(year: Period<TT>, observer: &ObserverLocation, now: Time<TT>) -> YearFraction {
    let adjusted_now = now + observer.longitudinal_offset();
    let fraction = year.fraction_at(adjusted_now);
    debug!(
        offset_hours = observer.longitudinal_offset_hours(),
        %adjusted_now,
        year_days = year.duration().value(),
        fraction,
        "located instant in solstice year"
    );
    YearFraction::from_fraction(year, fraction)
}

/// Fraction of the December-solstice year elapsed at `now` for `observer`,
/// using `source` for the solstice instants.
///
/// # Errors
///
/// [`Error::NoBracketingSolstice`] when the source lists no December
/// solstice strictly before or strictly after `now`;
/// [`Error::InvalidInterval`] if the bracketing solstices are not ordered;
/// any error raised by the source itself.
pub fn compute<S: SeasonEventSource>(
    observer: &ObserverLocation,
    now: Time<TT>,
    source: S,
) -> Result<YearFraction> {
    YearFractionCalculator::new(source).compute(observer, now)
}
