// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Seasonal transitions: equinoxes and solstices.
//!
//! A [`SeasonEventSource`] answers one question: which seasonal transitions
//! happen inside a window of time. Two sources are provided:
//!
//! - [`SolarEphemeris`] searches the apparent solar longitude for its
//!   crossings of 0°, 90°, 180° and 270° with [`find_discrete`].
//! - [`MeeusSeasonTable`] evaluates closed-form expressions for each
//!   event's instant (Meeus 1998, ch. 27), valid for years −1000..=3000.
//!
//! Both are immutable after construction and can be shared across threads.

use std::fmt;

use qtty::{Day, Days, Seconds};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::instant::Time;
use crate::period::Period;
use crate::scales::{TDB, TT};
use crate::search::{find_discrete, DEFAULT_NUM};
use crate::sun;

// ═══════════════════════════════════════════════════════════════════════════
// Season / SeasonEvent
// ═══════════════════════════════════════════════════════════════════════════

/// The four seasonal transitions, numbered by the solar-longitude quadrant
/// the Sun enters at the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    /// λ☉ = 0°.
    MarchEquinox = 0,
    /// λ☉ = 90°.
    JuneSolstice = 1,
    /// λ☉ = 180°.
    SeptemberEquinox = 2,
    /// λ☉ = 270°.
    DecemberSolstice = 3,
}

impl Season {
    /// All four transitions in calendar order.
    pub const ALL: [Season; 4] = [
        Season::MarchEquinox,
        Season::JuneSolstice,
        Season::SeptemberEquinox,
        Season::DecemberSolstice,
    ];

    /// Map a quadrant index to its transition; any integer is reduced mod 4.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// Quadrant index, 0..=3.
    pub const fn index(self) -> i64 {
        self as i64
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Season::MarchEquinox => "March equinox",
            Season::JuneSolstice => "June solstice",
            Season::SeptemberEquinox => "September equinox",
            Season::DecemberSolstice => "December solstice",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One seasonal transition at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonEvent {
    pub time: Time<TT>,
    pub kind: Season,
}

impl SeasonEvent {
    pub const fn new(time: Time<TT>, kind: Season) -> Self {
        Self { time, kind }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SeasonEventSource
// ═══════════════════════════════════════════════════════════════════════════

/// Capability to list the seasonal transitions inside a window.
pub trait SeasonEventSource: Send + Sync {
    /// Events whose instant lies in `window`, in chronological order.
    fn find_events(&self, window: Period<TT>) -> Result<Vec<SeasonEvent>>;
}

impl<T: SeasonEventSource + ?Sized> SeasonEventSource for &T {
    fn find_events(&self, window: Period<TT>) -> Result<Vec<SeasonEvent>> {
        (**self).find_events(window)
    }
}

impl<T: SeasonEventSource + ?Sized> SeasonEventSource for Box<T> {
    fn find_events(&self, window: Period<TT>) -> Result<Vec<SeasonEvent>> {
        (**self).find_events(window)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// Which season model backs the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EphemerisModel {
    /// Search of the analytic solar longitude ([`SolarEphemeris`]).
    #[default]
    Analytic,
    /// Closed-form season table ([`MeeusSeasonTable`]).
    Meeus,
}

/// Largest sampling step the solar search accepts. Consecutive transitions
/// are never closer than ~88.9 days.
pub const MAX_STEP_DAYS: f64 = 60.0;

/// Finest accepted search threshold, seconds. Julian dates near the present
/// resolve to about 40 µs, so finer values cannot be met.
pub const MIN_EPSILON_SECONDS: f64 = 1e-4;

/// Settings for the season event source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EphemerisConfig {
    pub model: EphemerisModel,
    /// Sampling interval of the solar-longitude search, days.
    pub step_days: f64,
    /// Convergence threshold of the search, seconds.
    pub epsilon_seconds: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            model: EphemerisModel::Analytic,
            step_days: 30.0,
            epsilon_seconds: 0.001,
        }
    }
}

impl EphemerisConfig {
    /// Build the configured source.
    pub fn build(&self) -> Result<Box<dyn SeasonEventSource>> {
        Ok(match self.model {
            EphemerisModel::Analytic => Box::new(SolarEphemeris::new(*self)?),
            EphemerisModel::Meeus => Box::new(MeeusSeasonTable),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SolarEphemeris
// ═══════════════════════════════════════════════════════════════════════════

/// Finds transitions by searching the analytic apparent solar longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    step: Days,
    epsilon: Days,
}

impl SolarEphemeris {
    /// Validates `step_days` (0 < step ≤ [`MAX_STEP_DAYS`]) and
    /// `epsilon_seconds` (finite, ≥ [`MIN_EPSILON_SECONDS`]). The model
    /// field is ignored.
    pub fn new(config: EphemerisConfig) -> Result<Self> {
        let EphemerisConfig {
            step_days,
            epsilon_seconds,
            ..
        } = config;
        if !(step_days.is_finite() && step_days > 0.0 && step_days <= MAX_STEP_DAYS) {
            return Err(Error::InvalidConfig {
                field: "step_days",
                value: step_days,
            });
        }
        if !(epsilon_seconds.is_finite() && epsilon_seconds >= MIN_EPSILON_SECONDS) {
            return Err(Error::InvalidConfig {
                field: "epsilon_seconds",
                value: epsilon_seconds,
            });
        }
        Ok(Self {
            step: Days::new(step_days),
            epsilon: Seconds::new(epsilon_seconds).to::<Day>(),
        })
    }
}

impl Default for SolarEphemeris {
    fn default() -> Self {
        let config = EphemerisConfig::default();
        Self {
            step: Days::new(config.step_days),
            epsilon: Seconds::new(config.epsilon_seconds).to::<Day>(),
        }
    }
}

impl SeasonEventSource for SolarEphemeris {
    fn find_events(&self, window: Period<TT>) -> Result<Vec<SeasonEvent>> {
        let season_at = |t: Time<TT>| sun::season_index(t.to::<TDB>());
        let events: Vec<SeasonEvent> =
            find_discrete(window, season_at, self.step, self.epsilon, DEFAULT_NUM)
                .into_iter()
                .map(|(time, index)| SeasonEvent::new(time, Season::from_index(index)))
                .collect();
        debug!(count = events.len(), %window, "solar longitude search finished");
        Ok(events)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MeeusSeasonTable
// ═══════════════════════════════════════════════════════════════════════════

/// Closed-form equinox and solstice instants (Meeus 1998, ch. 27).
///
/// A mean instant per year from a quartic in the millennium, corrected by
/// 24 periodic terms. Agrees with full ephemerides to about a minute over
/// 1951–2050.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeeusSeasonTable;

/// Supported years.
pub const MEEUS_YEARS: std::ops::RangeInclusive<i32> = -1000..=3000;

/// Mean-instant polynomials for years −1000..1000, `Y = year / 1000`.
#[rustfmt::skip]
const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1_721_139.291_89, 365_242.137_40,  0.061_34,  0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23,  0.009_07,  0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97,  0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Mean-instant polynomials for years 1000..=3000, `Y = (year − 2000) / 1000`.
#[rustfmt::skip]
const MEAN_FROM_1000: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04,  0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03,  0.003_25,  0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75,  0.003_37,  0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23,  0.000_32],
];

/// Periodic terms `A·cos(B + C·T)`, B and C in degrees.
#[rustfmt::skip]
const PERIODIC: [(f64, f64, f64); 24] = [
    (485.0, 324.96,   1_934.136), (203.0, 337.23,  32_964.467),
    (199.0, 342.08,      20.186), (182.0,  27.85, 445_267.112),
    (156.0,  73.14,  45_036.886), (136.0, 171.52,  22_518.443),
    ( 77.0, 222.54,  65_928.934), ( 74.0, 296.72,   3_034.906),
    ( 70.0, 243.58,   9_037.513), ( 58.0, 119.81,  33_718.147),
    ( 52.0, 297.17,     150.678), ( 50.0,  21.02,   2_281.226),
    ( 45.0, 247.54,  29_929.562), ( 44.0, 325.15,  31_555.956),
    ( 29.0,  60.93,   4_443.417), ( 18.0, 155.12,  67_555.328),
    ( 17.0, 288.79,   4_562.452), ( 16.0, 198.04,  62_894.029),
    ( 14.0, 199.76,  31_436.921), ( 12.0,  95.39,  14_577.848),
    ( 12.0, 287.11,  31_931.756), ( 12.0, 320.81,  34_777.259),
    (  9.0, 227.73,   1_222.114), (  8.0,  15.45,  16_859.074),
];

impl MeeusSeasonTable {
    /// Instant of `season` in civil year `year`.
    pub fn event(&self, year: i32, season: Season) -> Result<SeasonEvent> {
        if !MEEUS_YEARS.contains(&year) {
            return Err(Error::OutOfRange { year });
        }
        let (coeffs, y) = if year < 1000 {
            (&MEAN_BEFORE_1000, f64::from(year) / 1000.0)
        } else {
            (&MEAN_FROM_1000, f64::from(year - 2000) / 1000.0)
        };
        let c = coeffs[season as usize];
        let jde0 = c[0] + y * (c[1] + y * (c[2] + y * (c[3] + y * c[4])));

        let t = Time::<TT>::new(jde0).julian_centuries();
        let w = (35_999.373 * t - 2.47).to_radians();
        let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
        let s: f64 = PERIODIC
            .iter()
            .map(|&(a, b, c)| a * (b + c * t).to_radians().cos())
            .sum();

        Ok(SeasonEvent::new(
            Time::new(jde0 + 0.000_01 * s / dl),
            season,
        ))
    }
}

impl SeasonEventSource for MeeusSeasonTable {
    fn find_events(&self, window: Period<TT>) -> Result<Vec<SeasonEvent>> {
        let first = window.start.decimal_year().floor() as i32;
        let last = window.end.decimal_year().floor() as i32;
        for year in [first, last] {
            if !MEEUS_YEARS.contains(&year) {
                return Err(Error::OutOfRange { year });
            }
        }

        // Julian-year arithmetic drifts from the civil year by days per
        // millennium; one padding year on each side absorbs it.
        let lo = (first - 1).max(*MEEUS_YEARS.start());
        let hi = (last + 1).min(*MEEUS_YEARS.end());

        let mut events = Vec::new();
        for year in lo..=hi {
            for season in Season::ALL {
                let event = self.event(year, season)?;
                if window.contains(event.time) {
                    events.push(event);
                }
            }
        }
        events.sort_by(|a, b| a.time.value().total_cmp(&b.time.value()));
        debug!(count = events.len(), %window, "season table evaluated");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: f64, end: f64) -> Period<TT> {
        Period::new(Time::new(start), Time::new(end))
    }

    #[test]
    fn season_index_roundtrip_and_names() {
        for season in Season::ALL {
            assert_eq!(Season::from_index(season.index()), season);
        }
        assert_eq!(Season::from_index(7), Season::DecemberSolstice);
        assert_eq!(Season::from_index(-1), Season::DecemberSolstice);
        assert_eq!(Season::DecemberSolstice.to_string(), "December solstice");
    }

    #[test]
    fn meeus_example_27a_june_solstice_1962() {
        // JDE 2437837.39245 = 1962 June 21, 21h25m TD
        let event = MeeusSeasonTable.event(1962, Season::JuneSolstice).unwrap();
        assert!((event.time.value() - 2_437_837.392_45).abs() < 1e-3);
    }

    #[test]
    fn meeus_december_solstice_2024() {
        // 2024-12-21 09:20 UTC, plus ~69 s ΔT
        let event = MeeusSeasonTable.event(2024, Season::DecemberSolstice).unwrap();
        assert!((event.time.value() - 2_460_665.889).abs() < 2e-3, "{}", event.time);
    }

    #[test]
    fn meeus_rejects_years_outside_table() {
        assert_eq!(
            MeeusSeasonTable.event(3001, Season::MarchEquinox),
            Err(Error::OutOfRange { year: 3001 })
        );
        assert!(MeeusSeasonTable.event(-1001, Season::MarchEquinox).is_err());
        assert!(MeeusSeasonTable
            .find_events(window(3_000_000.0, 3_000_100.0))
            .is_err());
    }

    #[test]
    fn meeus_window_of_two_years_brackets_two_december_solstices() {
        let events = MeeusSeasonTable
            .find_events(window(2_459_752.0, 2_460_482.0))
            .unwrap();
        // Sep 2022 .. Mar 2024; the June 2024 solstice falls just outside
        assert_eq!(events.len(), 7);
        assert!(events.windows(2).all(|w| w[0].time < w[1].time));
        let kinds: Vec<Season> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds.iter().filter(|&&k| k == Season::DecemberSolstice).count(), 2);
    }

    #[test]
    fn analytic_search_finds_four_events_per_year() {
        // 2024-01-01 .. 2025-01-01
        let events = SolarEphemeris::default()
            .find_events(window(2_460_310.5, 2_460_676.5))
            .unwrap();
        let kinds: Vec<Season> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, Season::ALL.to_vec());
    }

    #[test]
    fn analytic_and_table_agree_on_december_solstices() {
        let span = window(2_459_752.0, 2_460_847.0);
        let analytic = SolarEphemeris::default().find_events(span).unwrap();
        let table = MeeusSeasonTable.find_events(span).unwrap();
        assert_eq!(analytic.len(), table.len());
        for (a, b) in analytic.iter().zip(&table) {
            assert_eq!(a.kind, b.kind);
            let minutes = (a.time - b.time).abs().value() * 1_440.0;
            assert!(minutes < 30.0, "{} differs by {minutes} min", a.kind);
        }
    }

    #[test]
    fn solar_ephemeris_validates_config() {
        let bad_step = EphemerisConfig {
            step_days: 0.0,
            ..EphemerisConfig::default()
        };
        assert_eq!(
            SolarEphemeris::new(bad_step),
            Err(Error::InvalidConfig {
                field: "step_days",
                value: 0.0
            })
        );
        let coarse = EphemerisConfig {
            step_days: 90.0,
            ..EphemerisConfig::default()
        };
        assert!(SolarEphemeris::new(coarse).is_err());
        let bad_eps = EphemerisConfig {
            epsilon_seconds: f64::NAN,
            ..EphemerisConfig::default()
        };
        assert!(SolarEphemeris::new(bad_eps).is_err());
    }

    #[test]
    fn epsilon_finer_than_julian_date_resolution_is_rejected() {
        let fine = EphemerisConfig {
            epsilon_seconds: 1e-5,
            ..EphemerisConfig::default()
        };
        assert_eq!(
            SolarEphemeris::new(fine),
            Err(Error::InvalidConfig {
                field: "epsilon_seconds",
                value: 1e-5
            })
        );
        assert!(fine.build().is_err());
        let floor = EphemerisConfig {
            epsilon_seconds: MIN_EPSILON_SECONDS,
            ..EphemerisConfig::default()
        };
        assert!(SolarEphemeris::new(floor).is_ok());
    }

    #[test]
    fn search_with_unreachable_epsilon_still_returns() {
        let ephemeris = SolarEphemeris {
            step: Days::new(30.0),
            epsilon: Seconds::new(1e-5).to::<Day>(),
        };
        let events = ephemeris
            .find_events(window(2_460_310.5, 2_460_676.5))
            .unwrap();
        let kinds: Vec<Season> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, Season::ALL.to_vec());
    }

    #[test]
    fn config_builds_either_model() {
        let span = window(2_460_310.5, 2_460_676.5);
        for model in [EphemerisModel::Analytic, EphemerisModel::Meeus] {
            let source = EphemerisConfig {
                model,
                ..EphemerisConfig::default()
            }
            .build()
            .unwrap();
            assert_eq!(source.find_events(span).unwrap().len(), 4);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserialises_with_defaults() {
        let config: EphemerisConfig = serde_json::from_str(r#"{"model":"meeus"}"#).unwrap();
        assert_eq!(config.model, EphemerisModel::Meeus);
        assert_eq!(config.step_days, 30.0);
        assert!(serde_json::from_str::<EphemerisConfig>(r#"{"stepdays":1}"#).is_err());
    }
}
