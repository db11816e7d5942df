// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Where "now" comes from.
//!
//! [`TimeSource`] is the seam between the wall clock and the computation:
//! the binary uses [`SystemClock`], tests and `--at` use [`FixedClock`].

use chrono::{DateTime, Utc};
use qtty::Days;

use crate::instant::Time;
use crate::scales::TT;

/// Supplies instants on the TT axis.
pub trait TimeSource {
    /// The current instant.
    fn now(&self) -> Time<TT>;

    /// `reference` shifted by `delta_days` (negative moves back).
    fn from_offset(&self, reference: Time<TT>, delta_days: f64) -> Time<TT> {
        reference + Days::new(delta_days)
    }
}

/// Reads the system clock through `chrono::Utc::now()` and applies ΔT.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Time<TT> {
        Time::from_utc(Utc::now())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    now: Time<TT>,
}

impl FixedClock {
    pub const fn new(now: Time<TT>) -> Self {
        Self { now }
    }

    /// Pin the clock to a UTC timestamp.
    pub fn at_utc(datetime: DateTime<Utc>) -> Self {
        Self::new(Time::from_utc(datetime))
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Time<TT> {
        self.now
    }
}
