// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bracket-and-refine search for the instants where a discrete function of
//! time changes value.
//!
//! The window is sampled on an even grid no coarser than `step`. Every pair
//! of adjacent samples whose values differ brackets one transition; each
//! bracket is then re-sampled with `num` points until all brackets are
//! narrower than `epsilon`. The step must be shorter than the shortest gap
//! between two transitions, otherwise a pair of changes can cancel out
//! between samples and go unseen.

use qtty::{Days, Seconds};
use tracing::trace;

use crate::instant::Time;
use crate::period::Period;
use crate::scales::TT;

/// Default convergence threshold: one millisecond.
pub const EPSILON_DISCRETE: Seconds = Seconds::new(0.001);

/// Default number of samples per bracket refinement.
pub const DEFAULT_NUM: usize = 12;

/// `n` evenly spaced values from `start` to `end`, both included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
        .collect()
}

/// Find the transitions of `f` over `window`.
///
/// Returns `(instant, new_value)` pairs in chronological order. Each
/// instant is the right edge of a converged bracket, so it lies no more
/// than `epsilon` after the true change, or one representable step after it
/// when `epsilon` is finer than the float resolution at the window's
/// Julian dates. `step` and `epsilon` must be
/// positive and `num` at least 3; the callers in this crate validate
/// their configuration before getting here.
pub fn find_discrete<F>(
    window: Period<TT>,
    mut f: F,
    step: Days,
    epsilon: Days,
    num: usize,
) -> Vec<(Time<TT>, i64)>
where
    F: FnMut(Time<TT>) -> i64,
{
    debug_assert!(step > Days::new(0.0) && epsilon > Days::new(0.0) && num >= 3);

    let span = window.duration().value();
    let samples = (span / step.value()).ceil() as usize + 1;
    let mut jd = linspace(window.start.value(), window.end.value(), samples.max(2));
    let eps = epsilon.value();
    let mut rounds = 0usize;
    let mut previous_widest = f64::INFINITY;

    loop {
        rounds += 1;
        let y: Vec<i64> = jd.iter().map(|&v| f(Time::new(v))).collect();

        let brackets: Vec<usize> = (0..y.len() - 1).filter(|&i| y[i] != y[i + 1]).collect();
        if brackets.is_empty() {
            return Vec::new();
        }

        let widest = brackets
            .iter()
            .map(|&i| jd[i + 1] - jd[i])
            .fold(0.0_f64, f64::max);

        // A bracket one ulp wide cannot be split further, so stop once the
        // grid no longer narrows even if `epsilon` is below the resolution.
        if widest <= eps || widest >= previous_widest {
            trace!(
                rounds,
                transitions = brackets.len(),
                widest,
                "discrete search converged"
            );
            return brackets
                .iter()
                .map(|&i| (Time::new(jd[i + 1]), y[i + 1]))
                .collect();
        }

        previous_widest = widest;

        // Re-sample every bracket; endpoints are shared with the old grid,
        // so values outside the brackets are never revisited.
        jd = brackets
            .iter()
            .flat_map(|&i| linspace(jd[i], jd[i + 1], num))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tt(v: f64) -> Time<TT> {
        Time::new(v)
    }

    fn default_eps() -> Days {
        EPSILON_DISCRETE.to::<qtty::Day>()
    }

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 3.0, 1), vec![3.0]);
    }

    #[test]
    fn finds_single_step_function_change() {
        let window = Period::new(tt(0.0), tt(100.0));
        let events = find_discrete(
            window,
            |t| i64::from(t.value() >= 37.25),
            Days::new(10.0),
            default_eps(),
            DEFAULT_NUM,
        );
        assert_eq!(events.len(), 1);
        let (at, value) = events[0];
        assert_eq!(value, 1);
        assert!(at.value() >= 37.25 && at.value() - 37.25 <= default_eps().value());
    }

    #[test]
    fn finds_every_transition_in_order() {
        let window = Period::new(tt(0.0), tt(365.0));
        // changes at 50, 140, 230, 320
        let f = |t: Time<TT>| (((t.value() - 50.0) / 90.0).floor() as i64 + 1).rem_euclid(4);
        let events = find_discrete(window, f, Days::new(30.0), default_eps(), DEFAULT_NUM);
        let values: Vec<i64> = events.iter().map(|e| e.1).collect();
        assert_eq!(values, vec![1, 2, 3, 0]);
        for ((at, _), expected) in events.iter().zip([50.0, 140.0, 230.0, 320.0]) {
            assert!((at.value() - expected).abs() < 1e-6, "{at} vs {expected}");
        }
    }

    #[test]
    fn constant_function_has_no_events() {
        let window = Period::new(tt(0.0), tt(10.0));
        let events = find_discrete(window, |_| 7, Days::new(1.0), default_eps(), DEFAULT_NUM);
        assert!(events.is_empty());
    }

    #[test]
    fn epsilon_below_float_resolution_still_terminates() {
        // one ulp near JD 2.46e6 is about 4.66e-10 d
        let change = 2_460_665.889;
        let window = Period::new(tt(2_460_600.0), tt(2_460_700.0));
        let events = find_discrete(
            window,
            |t| i64::from(t.value() >= change),
            Days::new(10.0),
            Days::new(1e-13),
            DEFAULT_NUM,
        );
        assert_eq!(events.len(), 1);
        let (at, value) = events[0];
        assert_eq!(value, 1);
        assert!(at.value() >= change && at.value() - change < 1e-9);
    }

    #[test]
    fn step_longer_than_window_still_samples_endpoints() {
        let window = Period::new(tt(0.0), tt(1.0));
        let events = find_discrete(
            window,
            |t| i64::from(t.value() > 0.5),
            Days::new(30.0),
            default_eps(),
            DEFAULT_NUM,
        );
        assert_eq!(events.len(), 1);
        assert!((events[0].0.value() - 0.5).abs() < 1e-6);
    }
}
