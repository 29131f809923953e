// File: crates/scatter-core/src/scale.rs
// Summary: Linear (year) and time (finish clock) scales mapping data domains to pixel ranges,
//          plus the categorical colour scale.

use crate::grid::{nice_ticks, time_ticks};
use crate::record::FinishTime;

/// A pure mapping from a data domain to a pixel range.
pub trait Scale {
    type Domain;
    fn apply(&self, v: &Self::Domain) -> f64;
    fn range(&self) -> (f64, f64);
}

/// Scales that can propose tick values for an axis.
pub trait TickScale: Scale {
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
}

/// Continuous linear scale `[d0, d1] -> [r0, r1]`.
/// A degenerate domain (d0 == d1) maps everything to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }

    #[inline]
    pub fn to_px(&self, x: f64) -> f64 {
        let span = self.d1 - self.d0;
        let t = if span == 0.0 { 0.5 } else { (x - self.d0) / span };
        self.r0 + t * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        let t = if span == 0.0 { 0.5 } else { (px - self.r0) / span };
        self.d0 + t * (self.d1 - self.d0)
    }
}

impl Scale for LinearScale {
    type Domain = f64;
    fn apply(&self, v: &f64) -> f64 { self.to_px(*v) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

impl TickScale for LinearScale {
    fn ticks(&self, count: usize) -> Vec<f64> { nice_ticks(self.d0, self.d1, count) }
}

/// Time scale over finish clocks; linear in milliseconds, ticks on clock boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    start: FinishTime,
    stop: FinishTime,
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (FinishTime, FinishTime), range: (f64, f64)) -> Self {
        let inner = LinearScale::new((domain.0.millis() as f64, domain.1.millis() as f64), range);
        Self { start: domain.0, stop: domain.1, inner }
    }

    pub fn domain(&self) -> (FinishTime, FinishTime) { (self.start, self.stop) }

    #[inline]
    pub fn to_px(&self, t: &FinishTime) -> f64 { self.inner.to_px(t.millis() as f64) }
}

impl Scale for TimeScale {
    type Domain = FinishTime;
    fn apply(&self, v: &FinishTime) -> f64 { self.to_px(v) }
    fn range(&self) -> (f64, f64) { self.inner.range() }
}

impl TickScale for TimeScale {
    fn ticks(&self, count: usize) -> Vec<FinishTime> {
        time_ticks(self.start.millis(), self.stop.millis(), count)
            .into_iter()
            .filter_map(FinishTime::from_millis)
            .collect()
    }
}

/// Categorical scale: keys in first-appearance order, colours assigned cyclically from `range`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale<K> {
    domain: Vec<K>,
    range: Vec<u32>,
}

impl<K: PartialEq + Clone> OrdinalScale<K> {
    pub fn new(range: &[u32]) -> Self {
        Self { domain: Vec::new(), range: range.to_vec() }
    }

    /// Build a scale whose domain is the distinct keys of `keys`, in order of appearance.
    pub fn from_keys(range: &[u32], keys: impl IntoIterator<Item = K>) -> Self {
        let mut s = Self::new(range);
        for k in keys {
            if !s.domain.contains(&k) {
                s.domain.push(k);
            }
        }
        s
    }

    pub fn domain(&self) -> &[K] { &self.domain }

    /// Colour for `key`, or `None` if the key is not in the domain (or the range is empty).
    pub fn get(&self, key: &K) -> Option<u32> {
        if self.range.is_empty() {
            return None;
        }
        let i = self.domain.iter().position(|k| k == key)?;
        Some(self.range[i % self.range.len()])
    }
}
