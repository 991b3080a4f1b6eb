//! Single-shot comparative timing of a slow/fast pair.
//!
//! Each side is called exactly once with the same arguments and timed with a
//! monotonic clock. There is no warm-up and no repetition; the criterion
//! benches under `benches/` exist for that.

use crate::error::{BenchError, Result};
use crate::measurement::Measurement;
use crate::report;
use std::fmt::Debug;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

fn time_call<A: ?Sized, R, C>(call: C, args: &A) -> (R, Duration)
where
    C: FnOnce(&A) -> R,
{
    let start = Instant::now();
    let result = black_box(call(black_box(args)));
    (result, start.elapsed())
}

/// Times pairs and writes one report block per pair to `out`.
pub struct Timer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Timer<W> {
    pub fn new(out: W) -> Self {
        Timer { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Calls `slow(args)` then `fast(args)`, once each, and reports the
    /// speedup. Results are discarded. A panic in either callable is not
    /// caught.
    pub fn measure<A, R1, R2, S, F>(
        &mut self,
        label: &str,
        slow: S,
        fast: F,
        args: &A,
    ) -> Result<Measurement>
    where
        A: ?Sized,
        S: FnOnce(&A) -> R1,
        F: FnOnce(&A) -> R2,
    {
        if label.is_empty() {
            return Err(BenchError::EmptyLabel);
        }

        let (_, slow_elapsed) = time_call(slow, args);
        let (_, fast_elapsed) = time_call(fast, args);

        self.finish(label, slow_elapsed, fast_elapsed)
    }

    /// Like [`Timer::measure`], but also compares the two results and logs a
    /// warning when they differ. A mismatch never fails the measurement.
    pub fn measure_checked<A, R, S, F>(
        &mut self,
        label: &str,
        slow: S,
        fast: F,
        args: &A,
    ) -> Result<Measurement>
    where
        A: ?Sized,
        R: PartialEq + Debug,
        S: FnOnce(&A) -> R,
        F: FnOnce(&A) -> R,
    {
        if label.is_empty() {
            return Err(BenchError::EmptyLabel);
        }

        let (slow_result, slow_elapsed) = time_call(slow, args);
        let (fast_result, fast_elapsed) = time_call(fast, args);

        if slow_result != fast_result {
            tracing::warn!(
                label,
                slow = ?slow_result,
                fast = ?fast_result,
                "implementations disagree"
            );
        }

        self.finish(label, slow_elapsed, fast_elapsed)
    }

    /// For fallible pairs. An error from the slow side aborts before the fast
    /// side runs; the time spent is lost either way.
    pub fn try_measure<A, R1, R2, E, S, F>(
        &mut self,
        label: &str,
        slow: S,
        fast: F,
        args: &A,
    ) -> Result<Measurement>
    where
        A: ?Sized,
        S: FnOnce(&A) -> std::result::Result<R1, E>,
        F: FnOnce(&A) -> std::result::Result<R2, E>,
        BenchError: From<E>,
    {
        if label.is_empty() {
            return Err(BenchError::EmptyLabel);
        }

        let (slow_result, slow_elapsed) = time_call(slow, args);
        slow_result?;
        let (fast_result, fast_elapsed) = time_call(fast, args);
        fast_result?;

        self.finish(label, slow_elapsed, fast_elapsed)
    }

    fn finish(&mut self, label: &str, slow: Duration, fast: Duration) -> Result<Measurement> {
        let measurement = Measurement::new(label, slow, fast);
        tracing::debug!(
            label,
            slow_secs = measurement.slow_secs(),
            fast_secs = measurement.fast_secs(),
            speedup = measurement.speedup,
            "measured pair"
        );
        report::write_measurement(&mut self.out, &measurement, self.color)?;
        Ok(measurement)
    }
}

/// Measures one pair and prints its block to stdout.
pub fn measure<A, R1, R2, S, F>(label: &str, slow: S, fast: F, args: &A) -> Result<Measurement>
where
    A: ?Sized,
    S: FnOnce(&A) -> R1,
    F: FnOnce(&A) -> R2,
{
    Timer::new(io::stdout().lock()).measure(label, slow, fast, args)
}
