//! The fixed benchmark sequence.
//!
//! Six trials always run, in a fixed order. With `extended` set, the key-check
//! and file-write trials follow them.

use crate::config::BenchConfig;
use crate::error::Result;
use crate::measurement::Measurement;
use crate::patterns::{
    dictionary_access, file_writes, filtering, insertion, lookups, membership, nested_loops,
    string_building,
};
use crate::report::{self, Report};
use crate::timer::Timer;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub struct Runner<W: Write> {
    config: BenchConfig,
    timer: Timer<W>,
    report: Report,
}

impl<W: Write> Runner<W> {
    pub fn new(config: BenchConfig, out: W) -> Self {
        let timer = Timer::new(out).with_color(config.color);
        Runner {
            config,
            timer,
            report: Report::new(),
        }
    }

    /// Prints the header, every trial and the summary, then hands back the
    /// collected report.
    pub fn run(mut self) -> Result<Report> {
        report::write_header(self.timer.writer())?;

        self.core_trials()?;
        if self.config.extended {
            self.extended_trials()?;
        }

        report::write_summary(self.timer.writer(), &self.report, self.config.color)?;
        self.timer.writer().flush()?;

        tracing::info!(
            trials = self.report.len(),
            average = ?self.report.average_speedup(),
            "benchmark run finished"
        );
        Ok(self.report)
    }

    fn record(&mut self, measurement: Measurement) {
        self.report.push(measurement);
    }

    fn core_trials(&mut self) -> Result<()> {
        let c = self.config.clone();

        let m = self.timer.measure_checked(
            &format!("String Concatenation (n={})", c.string_n),
            |n: &usize| string_building::inefficient(*n),
            |n: &usize| string_building::optimized(*n),
            &c.string_n,
        )?;
        self.record(m);

        let items: Vec<i64> = (0..c.search_n as i64).collect();
        let m = self.timer.measure_checked(
            &format!("List vs Set Search (n={})", c.search_n),
            |(items, target): &(Vec<i64>, i64)| membership::inefficient(items, *target),
            |(items, target): &(Vec<i64>, i64)| membership::optimized(items, *target),
            &(items, c.search_target),
        )?;
        self.record(m);

        let data: Vec<i64> = (0..c.nested_n as i64).collect();
        let m = self.timer.measure_checked(
            &format!("Nested Loops with Calculations (n={})", c.nested_n),
            nested_loops::inefficient,
            nested_loops::optimized,
            data.as_slice(),
        )?;
        self.record(m);

        let numbers: Vec<i64> = (0..c.filter_n as i64).collect();
        let m = self.timer.measure_checked(
            &format!("Multiple Passes vs Single Pass (n={})", c.filter_n),
            filtering::inefficient,
            filtering::optimized,
            numbers.as_slice(),
        )?;
        self.record(m);

        let m = self.timer.measure_checked(
            &format!("List Insert vs Deque (n={})", c.insert_n),
            |n: &usize| insertion::inefficient(*n),
            |n: &usize| insertion::optimized(*n),
            &c.insert_n,
        )?;
        self.record(m);

        let m = self.timer.measure_checked(
            &format!("Global Lookups (n={})", c.lookup_n),
            |n: &usize| lookups::inefficient(*n),
            |n: &usize| lookups::optimized(*n),
            &c.lookup_n,
        )?;
        self.record(m);

        Ok(())
    }

    fn extended_trials(&mut self) -> Result<()> {
        let c = self.config.clone();

        let map: HashMap<String, usize> = (0..c.dict_n)
            .map(|i| (format!("key_{}", i), i))
            .collect();
        let m = self.timer.measure_checked(
            &format!("Repeated Key Checks vs Direct Access (n={})", c.dict_n),
            |map: &HashMap<String, usize>| dictionary_access::inefficient(map),
            |map: &HashMap<String, usize>| dictionary_access::optimized(map),
            &map,
        )?;
        self.record(m);

        let lines = c.file_lines;
        // Only a file this run created is ours to remove.
        let preexisting = c.file_path.exists();
        let outcome = self.timer.try_measure(
            &format!("Reopen vs Buffered File Writes (n={})", lines),
            |path: &Path| file_writes::inefficient(path, lines),
            |path: &Path| file_writes::optimized(path, lines),
            c.file_path.as_path(),
        );
        if !preexisting {
            remove_scratch_file(&c.file_path)?;
        }
        self.record(outcome?);

        Ok(())
    }
}

fn remove_scratch_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed scratch file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Runs the suite against stdout.
pub fn run_suite(config: &BenchConfig) -> Result<Report> {
    Runner::new(config.clone(), io::stdout().lock()).run()
}
