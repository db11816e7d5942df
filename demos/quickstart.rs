use chrono::Utc;
use yearfrac::{
    JulianDate, MeeusSeasonTable, ObserverLocation, SolarEphemeris, Time, YearFractionCalculator,
    UT,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now_ut: Time<UT> = now_jd.to::<UT>();

    println!("JD(TT): {now_jd}");
    println!("UT: {now_ut}");
    println!("ΔT: {}", now_ut.delta_t());

    let observer = ObserverLocation::new(38.478752, -107.877739)?;

    let analytic = YearFractionCalculator::new(SolarEphemeris::default());
    let year = analytic.bracketing_solstices(now_jd)?;
    println!("solstice year: {year}");
    println!("{}", analytic.compute(&observer, now_jd)?);

    let table = YearFractionCalculator::new(MeeusSeasonTable).compute(&observer, now_jd)?;
    println!("fraction (table): {:.6}", table.fraction);
    Ok(())
}
