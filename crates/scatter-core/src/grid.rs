// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 steps for numbers and calendar-aligned steps for clock times.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick indices plus increment. A negative increment means "divide by -inc".
fn tick_range(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced, human-friendly values covering `[start, stop]`.
/// Steps are 1, 2 or 5 times a power of ten; ticks always lie inside the interval.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_range(lo, hi, count as f64);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { out.reverse(); }
    out
}

/// Tick step as a plain number (e.g. 2.0 for years 1993..2016), used for millisecond time steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let (_, _, inc) = tick_range(start, stop, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Candidate clock intervals, in milliseconds, smallest first.
const TIME_INTERVALS: [i64; 13] = [
    SECOND, 5 * SECOND, 15 * SECOND, 30 * SECOND,
    MINUTE, 5 * MINUTE, 15 * MINUTE, 30 * MINUTE,
    HOUR, 3 * HOUR, 6 * HOUR, 12 * HOUR,
    DAY,
];

/// Pick the clock interval whose tick count lands closest to `count` over `[start, stop]` (ms).
pub fn time_interval(start: i64, stop: i64, count: usize) -> i64 {
    let target = (stop - start).abs() as f64 / count.max(1) as f64;
    let i = TIME_INTERVALS.partition_point(|&d| (d as f64) <= target);
    if i == TIME_INTERVALS.len() {
        // Beyond a day: whole days in nice multiples.
        let days = tick_increment(start as f64 / DAY as f64, stop as f64 / DAY as f64, count).max(1.0);
        return days as i64 * DAY;
    }
    if i == 0 {
        return (tick_increment(start as f64, stop as f64, count).max(1.0)) as i64;
    }
    let (below, above) = (TIME_INTERVALS[i - 1] as f64, TIME_INTERVALS[i] as f64);
    if target / below < above / target { TIME_INTERVALS[i - 1] } else { TIME_INTERVALS[i] }
}

/// Millisecond timestamps that are whole multiples of the chosen interval inside `[start, stop]`.
pub fn time_ticks(start: i64, stop: i64, count: usize) -> Vec<i64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let step = time_interval(lo, hi, count);
    let first = lo.div_euclid(step) * step;
    let first = if first < lo { first + step } else { first };
    let mut out: Vec<i64> = (0..)
        .map(|i| first + i * step)
        .take_while(|&t| t <= hi)
        .collect();
    if start > stop { out.reverse(); }
    out
}
