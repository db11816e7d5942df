use chrono::{TimeZone, Utc};
use qtty::{Second, Seconds};
use yearfrac::{
    compute, Error, FixedClock, JulianDate, MeeusSeasonTable, ObserverLocation, Period, Result,
    Season, SeasonEvent, SeasonEventSource, SolarEphemeris, Time, YearFractionCalculator, TT, UT,
};

fn colorado() -> ObserverLocation {
    ObserverLocation::new(38.478752, -107.877739).unwrap()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> JulianDate {
    JulianDate::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

/// December solstices only, at fixed instants.
struct Solstices(Vec<f64>);

impl SeasonEventSource for Solstices {
    fn find_events(&self, window: Period<TT>) -> Result<Vec<SeasonEvent>> {
        Ok(self
            .0
            .iter()
            .map(|&jd| SeasonEvent::new(Time::new(jd), Season::DecemberSolstice))
            .filter(|e| window.contains(e.time))
            .collect())
    }
}

#[test]
fn ut_applies_delta_t_in_2024() {
    let ut = Time::<UT>::new(2_460_482.0);
    let offset = (ut.to::<TT>().quantity() - ut.quantity()).to::<Second>();
    assert!(offset > Seconds::new(65.0) && offset < Seconds::new(80.0), "{offset}");
}

#[test]
fn midsummer_2024_sits_in_second_half_of_first_half() {
    let now = utc(2024, 6, 20, 12, 0);
    let result = compute(&colorado(), now, MeeusSeasonTable).unwrap();
    assert!((result.fraction - 0.4957).abs() < 1e-3, "{}", result.fraction);
    // 2023-12-22 03:27 UTC to 2024-12-21 09:20 UTC
    assert!((result.year.start.value() - 2_460_300.645).abs() < 2e-3);
    assert!((result.year.end.value() - 2_460_665.890).abs() < 2e-3);
    assert_eq!(result.indices, [1, 2, 4, 8, 16, 32]);
    assert_eq!(result.to_string(), "1/2\n2/4\n4/8\n8/16\n16/32\n32/64");
}

#[test]
fn hours_before_the_solstice_report_last_subdivisions() {
    // the 2023 December solstice is at 03:27 UTC on the 22nd
    let now = utc(2023, 12, 22, 0, 0);
    for result in [
        compute(&colorado(), now, MeeusSeasonTable).unwrap(),
        compute(&colorado(), now, SolarEphemeris::default()).unwrap(),
    ] {
        assert_eq!(result.indices, [2, 4, 8, 16, 32, 64]);
        assert!(result.fraction > 0.998 && result.fraction < 1.0);
    }
}

#[test]
fn day_after_the_solstice_reports_first_subdivisions() {
    let now = utc(2024, 12, 22, 0, 0);
    let result = compute(&colorado(), now, SolarEphemeris::default()).unwrap();
    assert_eq!(result.indices, [1; 6]);
}

#[test]
fn western_offset_can_push_fraction_below_zero() {
    // 2.4 h after the 2024 December solstice, 7.2 h west of Greenwich
    let now = Time::<TT>::new(2_460_665.99);
    let result = compute(&colorado(), now, MeeusSeasonTable).unwrap();
    assert!(result.fraction < 0.0);
    assert_eq!(result.indices, [0; 6]);
}

#[test]
fn analytic_and_table_sources_agree_on_the_year() {
    let now = utc(2024, 3, 20, 12, 0);
    let analytic = YearFractionCalculator::new(SolarEphemeris::default())
        .bracketing_solstices(now)
        .unwrap();
    let table = YearFractionCalculator::new(MeeusSeasonTable)
        .bracketing_solstices(now)
        .unwrap();
    for (a, b) in [(analytic.start, table.start), (analytic.end, table.end)] {
        assert!((a - b).abs().value() * 1_440.0 < 30.0);
    }
    let length = table.duration().value();
    assert!((365.0..366.0).contains(&length), "{length}");
}

#[test]
fn halfway_through_a_synthetic_year() {
    let source = Solstices(vec![1_000.0, 1_365.0]);
    let greenwich = ObserverLocation::new(51.48, 0.0).unwrap();
    let result = compute(&greenwich, Time::new(1_182.5), source).unwrap();
    assert_eq!(result.fraction, 0.5);
    assert_eq!(result.indices, [2, 3, 5, 9, 17, 33]);
}

#[test]
fn missing_solstice_is_an_error() {
    let source = Solstices(vec![1_000.0]);
    let err = compute(&colorado(), Time::new(1_100.0), source).unwrap_err();
    assert_eq!(err, Error::NoBracketingSolstice { before: 1, after: 0 });
}

#[test]
fn fixed_clock_drives_compute_now() {
    let clock = FixedClock::at_utc(Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap());
    let calculator = YearFractionCalculator::new(MeeusSeasonTable);
    let via_clock = calculator.compute_now(&colorado(), &clock).unwrap();
    let direct = calculator.compute(&colorado(), utc(2024, 6, 20, 12, 0)).unwrap();
    assert_eq!(via_clock, direct);
}

#[test]
fn invalid_observer_is_rejected() {
    assert_eq!(
        ObserverLocation::new(12.0, -181.0),
        Err(Error::InvalidObserver {
            field: "longitude",
            value: -181.0
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_period_uses_plain_julian_days() {
    let period = Period::new(Time::<TT>::new(1.5), Time::<TT>::new(2.5));
    let json = serde_json::to_string(&period).unwrap();
    assert_eq!(json, r#"{"start":1.5,"end":2.5}"#);
    let back: Period<TT> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, period);
}
