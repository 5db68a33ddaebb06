//! Zig-zag ("waved") line between two points, memoized process-wide.

use std::sync::{Arc, LazyLock, Mutex};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::Point;
use crate::core::math::distance;
use crate::render::path::line_to;
use crate::render::smoothing::{Smoothing, Tension};

/// Default number of distinct wave patterns kept by the global cache.
pub const DEFAULT_WAVE_CACHE_CAPACITY: usize = 512;

/// Geometry of one waved line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    pub from: Point,
    pub to: Point,
    pub wave_length: f64,
    pub wave_height: f64,
    pub tension: f64,
    /// Stretch `wave_length` so a whole number of half waves fits exactly.
    pub adjust_wave_length: bool,
}

impl WaveSpec {
    #[must_use]
    pub fn new(from: Point, to: Point, wave_length: f64, wave_height: f64, tension: f64) -> Self {
        Self {
            from,
            to,
            wave_length,
            wave_height,
            tension,
            adjust_wave_length: false,
        }
    }

    #[must_use]
    pub fn with_adjusted_wave_length(mut self, adjust: bool) -> Self {
        self.adjust_wave_length = adjust;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct WaveCacheKey([OrderedFloat<f64>; 7]);

/// Runtime metrics of a [`WavedLineCache`].
///
/// `misses` equals the number of times the wave was actually built and smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WavedLineCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Bounded memo of waved-line paths keyed by the full parameter tuple.
///
/// Oldest entries are evicted first once `capacity` is reached.
#[derive(Debug)]
pub struct WavedLineCache {
    capacity: usize,
    entries: IndexMap<WaveCacheKey, Arc<str>>,
    hits: u64,
    misses: u64,
}

impl WavedLineCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: IndexMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the waved path for `spec`, building it on first request.
    pub fn waved_line(&mut self, spec: WaveSpec) -> Arc<str> {
        let length = distance(spec.from, spec.to);
        let wave_length = effective_wave_length(spec, length);
        let key = WaveCacheKey([
            OrderedFloat(spec.from.x),
            OrderedFloat(spec.from.y),
            OrderedFloat(spec.to.x),
            OrderedFloat(spec.to.y),
            OrderedFloat(wave_length),
            OrderedFloat(spec.wave_height),
            OrderedFloat(spec.tension),
        ]);

        if let Some(path) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(path);
        }

        self.misses += 1;
        let path: Arc<str> = Arc::from(build_waved_line(spec, length, wave_length));
        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, Arc::clone(&path));
        trace!(size = self.entries.len(), "waved line cached");
        path
    }

    #[must_use]
    pub fn stats(&self) -> WavedLineCacheStats {
        WavedLineCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for WavedLineCache {
    fn default() -> Self {
        Self::new(DEFAULT_WAVE_CACHE_CAPACITY)
    }
}

static GLOBAL_WAVE_CACHE: LazyLock<Mutex<WavedLineCache>> =
    LazyLock::new(|| Mutex::new(WavedLineCache::default()));

/// Waved path between `spec.from` and `spec.to`, served from the
/// process-wide cache.
#[must_use]
pub fn waved_line(spec: WaveSpec) -> Arc<str> {
    match GLOBAL_WAVE_CACHE.lock() {
        Ok(mut cache) => cache.waved_line(spec),
        // Entries are immutable once inserted.
        Err(poisoned) => poisoned.into_inner().waved_line(spec),
    }
}

/// Metrics of the process-wide cache used by [`waved_line`].
#[must_use]
pub fn global_waved_line_stats() -> WavedLineCacheStats {
    match GLOBAL_WAVE_CACHE.lock() {
        Ok(cache) => cache.stats(),
        Err(poisoned) => poisoned.into_inner().stats(),
    }
}

fn effective_wave_length(spec: WaveSpec, length: f64) -> f64 {
    if !spec.adjust_wave_length || spec.wave_length <= 0.0 || length <= 0.0 {
        return spec.wave_length;
    }
    let half_waves = (2.0 * length / spec.wave_length).round();
    if half_waves < 1.0 {
        return spec.wave_length;
    }
    2.0 * length / half_waves
}

/// Upper bound on half waves in one path; finer waves draw as a straight line.
const MAX_HALF_WAVES: f64 = 100_000.0;

fn build_waved_line(spec: WaveSpec, length: f64, wave_length: f64) -> String {
    if !length.is_finite() || length <= 0.0 {
        return String::new();
    }
    if wave_length <= 1.0 || spec.wave_height <= 1.0 {
        return line_to(spec.to);
    }

    let angle = (spec.to.y - spec.from.y).atan2(spec.to.x - spec.from.x);
    let (sin, cos) = angle.sin_cos();
    let step_x = wave_length * cos / 2.0;
    let step_y = wave_length * sin / 2.0;
    let amplitude = spec.wave_height / 2.0;

    let half_waves = (2.0 * length / wave_length).round();
    if half_waves.is_nan() || half_waves > MAX_HALF_WAVES {
        return line_to(spec.to);
    }
    let half_waves = half_waves as usize;
    let mut sign = 1.0;
    if spec.to.x < spec.from.x {
        sign = -sign;
    }
    if spec.to.y < spec.from.y {
        sign = -sign;
    }

    let mut points = Vec::with_capacity(half_waves + 1);
    for index in 0..=half_waves {
        sign = -sign;
        let i = index as f64;
        points.push(Point::new(
            spec.from.x + i * step_x + sign * amplitude * sin,
            spec.from.y + i * step_y - sign * amplitude * cos,
        ));
    }
    Tension::new(spec.tension, spec.tension).smooth(&points)
}
