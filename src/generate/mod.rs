//! The generation loop.
//!
//! Three modes share one run state:
//! - forever: one line per tick on logical time, write errors ignored
//! - count: sessions stamped with wall-clock time until `number` records,
//!   write errors abort
//! - bytes: one line per tick on logical time until `bytes` bytes, write
//!   errors ignored
//!
//! Count and byte modes rotate the physical file once the running volume
//! crosses `split_by * rotation_index`. Only sink opens (initial or rotated)
//! and count-mode writes are fatal.

mod options;

pub use options::Options;

use crate::Error;
use crate::format::Timestamp;
use crate::internal;
use crate::rotation;
use crate::sink::{FsSinkFactory, NullSink, Sink, SinkFactory};
use chrono::{Local, TimeDelta};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// What a finished run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Records written.
    pub lines: u64,
    /// Bytes written, excluding newlines.
    pub bytes: u64,
    /// Every finalized physical file, in creation order. Empty for stdout.
    pub created: Vec<PathBuf>,
}

/// Wall-clock pause and logical-time step, fixed for the run.
#[derive(Debug, Clone, Copy)]
struct Pacing {
    delay: Duration,
    interval: Duration,
}

impl Pacing {
    fn new(options: &Options) -> Self {
        let mut interval = Duration::ZERO;
        let mut delay = Duration::ZERO;
        if !options.delay.is_zero() {
            interval = options.delay;
            delay = options.delay;
        }
        if !options.sleep.is_zero() {
            interval = options.sleep;
        }
        Self { delay, interval }
    }

    fn wait(self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn advance(self, ts: Timestamp) -> Timestamp {
        TimeDelta::from_std(self.interval)
            .ok()
            .and_then(|step| ts.checked_add_signed(step))
            .unwrap_or(ts)
    }
}

/// Mutable state owned by a single run.
struct RunState {
    sink: Box<dyn Sink>,
    path: PathBuf,
    rotation_index: u32,
    report: Report,
}

impl RunState {
    fn record(&mut self, line: &str) {
        self.report.lines += 1;
        self.report.bytes += line.len() as u64;
    }
}

/// Drives one generation run against a sink factory.
pub struct Generator {
    options: Options,
    factory: Box<dyn SinkFactory>,
    stop: Option<Arc<AtomicBool>>,
}

impl Generator {
    /// Writes through the real filesystem factory.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            factory: Box::new(FsSinkFactory),
            stop: None,
        }
    }

    /// Swaps the sink factory, e.g. for in-memory sinks.
    #[must_use]
    pub fn factory(mut self, factory: impl SinkFactory + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    /// Lets forever mode end once `flag` is set. Without one it only ends
    /// with the process.
    #[must_use]
    pub fn stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    /// Runs to completion.
    ///
    /// # Errors
    /// `Error::SinkOpen` if the initial or a rotated sink cannot be opened;
    /// `Error::Write` if a count-mode write fails.
    pub fn run(&self) -> Result<Report, Error> {
        let options = &self.options;
        let pacing = Pacing::new(options);
        internal::debug(
            "GENERATE",
            &format!(
                "format={} type={} output={} delay={:?} interval={:?}",
                options.format,
                options.kind,
                options.output.display(),
                pacing.delay,
                pacing.interval
            ),
        );

        let sink = self
            .factory
            .open(options.kind, &options.output, options.append())?;
        let mut state = RunState {
            sink,
            path: options.output.clone(),
            rotation_index: 1,
            report: Report::default(),
        };

        if options.forever {
            self.run_forever(&mut state, pacing);
        } else if options.byte_mode() {
            self.run_bytes(&mut state, pacing)?;
        } else {
            self.run_count(&mut state, pacing)?;
        }

        self.finish(state)
    }

    fn stopped(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    fn run_forever(&self, state: &mut RunState, pacing: Pacing) {
        let format = self.options.format;
        let mut created = self.options.start_time;
        while !self.stopped() {
            pacing.wait();
            let line = format.render_one(&created);
            if let Err(e) = state.sink.write_line(&line) {
                internal::warn("GENERATE", &format!("Dropped record: {e}"));
            }
            state.record(&line);
            created = pacing.advance(created);
        }
        internal::debug("GENERATE", "Stop requested, leaving forever mode");
    }

    fn run_count(&self, state: &mut RunState, pacing: Pacing) -> Result<(), Error> {
        let options = &self.options;
        let mut line = 0u64;
        while line < options.number {
            pacing.wait();

            let session = options.format.render_session(&Local::now().fixed_offset());
            for record in &session.lines {
                state.sink.write_line(record).map_err(Error::Write)?;
                state.record(record);
            }

            if self.should_rotate(line, state.rotation_index, 0) {
                self.rotate(state)?;
            }

            line += session.lines.len() as u64;
        }
        Ok(())
    }

    fn run_bytes(&self, state: &mut RunState, pacing: Pacing) -> Result<(), Error> {
        let options = &self.options;
        let mut created = options.start_time;
        let mut bytes = 0u64;
        while bytes < options.bytes {
            pacing.wait();

            let line = options.format.render_one(&created);
            if let Err(e) = state.sink.write_line(&line) {
                internal::warn("GENERATE", &format!("Dropped record: {e}"));
            }
            state.record(&line);

            bytes += line.len() as u64;
            if self.should_rotate(bytes, state.rotation_index, 1) {
                self.rotate(state)?;
            }
            created = pacing.advance(created);
        }
        Ok(())
    }

    /// True once `volume` is strictly past `split_by * index + slack`.
    fn should_rotate(&self, volume: u64, index: u32, slack: u64) -> bool {
        let options = &self.options;
        !options.kind.is_stream()
            && options.split_by > 0
            && volume > options.split_by.saturating_mul(u64::from(index)) + slack
    }

    /// Finalizes the current file and opens the next numbered one, always
    /// named from the original destination.
    fn rotate(&self, state: &mut RunState) -> Result<(), Error> {
        let old = std::mem::replace(&mut state.sink, Box::new(NullSink));
        self.finalize(old, &state.path, &mut state.report);

        let next = rotation::next_name(&self.options.output, state.rotation_index);
        internal::debug(
            "ROTATE",
            &format!("Rotating to {} (index {})", next.display(), state.rotation_index),
        );
        state.sink = self
            .factory
            .open(self.options.kind, &next, self.options.append())?;
        state.path = next;
        state.rotation_index += 1;
        Ok(())
    }

    fn finish(&self, state: RunState) -> Result<Report, Error> {
        let RunState {
            sink,
            path,
            mut report,
            ..
        } = state;
        if self.options.kind.is_stream() {
            sink.close()?;
        } else {
            self.finalize(sink, &path, &mut report);
        }
        internal::info(
            "GENERATE",
            &format!(
                "Wrote {} records ({}) to {} file(s)",
                report.lines,
                crate::size::format_size(report.bytes),
                report.created.len()
            ),
        );
        Ok(report)
    }

    /// Closes a file-backed sink and announces it on stdout.
    fn finalize(&self, sink: Box<dyn Sink>, path: &Path, report: &mut Report) {
        debug_assert!(!self.options.kind.is_stream());
        if let Err(e) = sink.close() {
            internal::warn(
                "GENERATE",
                &format!("Failed to finalize {}: {e}", path.display()),
            );
        }
        println!("{} is created.", path.display());
        report.created.push(path.to_path_buf());
    }
}

/// Runs `options` against the filesystem.
///
/// # Errors
/// See [`Generator::run`].
pub fn generate(options: &Options) -> Result<Report, Error> {
    Generator::new(options.clone()).run()
}
