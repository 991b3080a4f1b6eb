use serde::Serialize;
use std::time::Duration;

/// Timings for one slow/fast pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub label: String,
    #[serde(serialize_with = "as_secs")]
    pub slow: Duration,
    #[serde(serialize_with = "as_secs")]
    pub fast: Duration,
    #[serde(serialize_with = "speedup_value")]
    pub speedup: f64,
}

impl Measurement {
    pub fn new(label: impl Into<String>, slow: Duration, fast: Duration) -> Self {
        Measurement {
            label: label.into(),
            slow,
            fast,
            speedup: speedup(slow, fast),
        }
    }

    pub fn slow_secs(&self) -> f64 {
        self.slow.as_secs_f64()
    }

    pub fn fast_secs(&self) -> f64 {
        self.fast.as_secs_f64()
    }

    /// `(t_slow, t_fast, speedup)` in seconds.
    pub fn as_triple(&self) -> (f64, f64, f64) {
        (self.slow_secs(), self.fast_secs(), self.speedup)
    }
}

/// Ratio of slow to fast elapsed time. A fast side that finished below clock
/// resolution counts as infinitely faster.
pub fn speedup(slow: Duration, fast: Duration) -> f64 {
    if fast.is_zero() {
        f64::INFINITY
    } else {
        slow.as_secs_f64() / fast.as_secs_f64()
    }
}

fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

// JSON has no infinity, so it goes out as null.
fn speedup_value<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        s.serialize_f64(*v)
    } else {
        s.serialize_none()
    }
}
