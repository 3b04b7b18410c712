//! Performance harness timing both matchers across list sizes
//!
//! For every size one sample pair is generated and both matchers run on that
//! same pair, each under its own timer. Matcher outputs are not compared;
//! only their lengths are kept for diagnostics.

use crate::{
    error::Result,
    generator::generate_user_ids,
    models::{PerformanceReport, SizeMeasurement},
    types::{Identifier, MatchStrategy},
};
use chrono::Utc;
use rand::Rng;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run one matcher under a wall-clock timer, returning elapsed time and match count
pub fn time_matcher(strategy: MatchStrategy, list_a: &[Identifier], list_b: &[Identifier]) -> (Duration, usize) {
    let start = Instant::now();
    let matches = black_box(strategy.run(black_box(list_a), black_box(list_b)));
    let elapsed = start.elapsed();
    (elapsed, matches.len())
}

/// Measure one size: generate a sample pair and time both matchers on it
pub fn measure_size<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<SizeMeasurement> {
    let list_a = generate_user_ids(rng, size)?;
    let list_b = generate_user_ids(rng, size)?;

    let (nested_duration, nested_matches) = time_matcher(MatchStrategy::NestedLoops, &list_a, &list_b);
    let (set_duration, set_matches) = time_matcher(MatchStrategy::SetLookup, &list_a, &list_b);

    Ok(SizeMeasurement {
        size,
        nested_duration,
        set_duration,
        nested_matches,
        set_matches,
        measured_at: Utc::now(),
    })
}

/// Measure the sizes one at a time, each only when the iterator is advanced
pub fn measure_each<'a, R: Rng + ?Sized>(
    sizes: &'a [usize],
    rng: &'a mut R,
) -> impl Iterator<Item = Result<SizeMeasurement>> + 'a {
    sizes.iter().map(move |&size| measure_size(&mut *rng, size))
}

/// Time both matchers for every size, in order
pub fn measure_performance<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<PerformanceReport> {
    let mut report = PerformanceReport::new(None);
    for measurement in measure_each(sizes, rng) {
        report.add_measurement(measurement?);
    }
    report.complete();
    Ok(report)
}

/// Nested-loop and set-based duration series, index-aligned with `sizes`
pub fn measure_durations<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<(Vec<Duration>, Vec<Duration>)> {
    let report = measure_performance(sizes, rng)?;
    Ok((report.nested_times(), report.set_times()))
}
