// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

mod cli;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;

use yearfrac::{FixedClock, ObserverLocation, SystemClock, TimeSource, YearFractionCalculator};

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::resolve(cli)?;

    let observer = ObserverLocation::new(config.observer.latitude, config.observer.longitude)
        .context("invalid observer location")?;
    let source = config
        .ephemeris
        .build()
        .context("failed to set up the season event source")?;

    let clock: Box<dyn TimeSource> = match &cli.at {
        Some(text) => {
            let at = DateTime::parse_from_rfc3339(text)
                .with_context(|| format!("invalid --at timestamp: {text}"))?
                .with_timezone(&Utc);
            Box::new(FixedClock::at_utc(at))
        }
        None => Box::new(SystemClock),
    };

    info!(
        latitude = observer.latitude,
        longitude = observer.longitude,
        model = ?config.ephemeris.model,
        "computing solstice-year fraction"
    );

    let result = YearFractionCalculator::new(source)
        .compute_now(&observer, &*clock)
        .context("failed to locate the current instant in its solstice year")?;

    info!(fraction = result.fraction, "done");
    println!("{result}");
    Ok(())
}
