// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use yearfrac::EphemerisModel;

/// Position of the current moment within the December-solstice year.
#[derive(Parser, Debug)]
#[command(
    name = "yearfrac",
    version,
    about = "Position of now within the December-solstice year, in halves through sixty-fourths"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Observer latitude in degrees north; overrides the config file.
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Observer longitude in degrees east (west negative); overrides the config file.
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Season model; overrides the config file.
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// Evaluate at this RFC 3339 instant instead of now.
    #[arg(long, value_name = "RFC3339")]
    pub at: Option<String>,
}

/// Season models selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Search of the analytic solar longitude.
    Analytic,
    /// Closed-form equinox/solstice table.
    Meeus,
}

impl From<ModelArg> for EphemerisModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Analytic => EphemerisModel::Analytic,
            ModelArg::Meeus => EphemerisModel::Meeus,
        }
    }
}
