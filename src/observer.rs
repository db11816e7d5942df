// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location and its mean-solar-time offset.

use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Degrees of longitude per hour of mean solar time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Geographic position of the observer, in degrees.
///
/// Only the longitude takes part in the year-fraction computation;
/// latitude is validated and carried along.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverLocation {
    /// Degrees north, −90..=90.
    pub latitude: f64,
    /// Degrees east, −180..=180 (west is negative).
    pub longitude: f64,
}

impl ObserverLocation {
    /// Validated constructor.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || latitude.abs() > 90.0 {
            return Err(Error::InvalidObserver {
                field: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || longitude.abs() > 180.0 {
            return Err(Error::InvalidObserver {
                field: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Local mean solar time offset from Greenwich, in hours (east positive).
    #[inline]
    pub fn longitudinal_offset_hours(&self) -> f64 {
        self.longitude / DEGREES_PER_HOUR
    }

    /// The same offset expressed in days.
    #[inline]
    pub fn longitudinal_offset(&self) -> Days {
        Days::new(self.longitudinal_offset_hours() / 24.0)
    }
}
