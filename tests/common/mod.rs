//! In-memory sinks with injectable failures, shared by integration tests.

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use synthlog::{Error, Sink, SinkFactory, SinkKind};

#[derive(Debug, Default)]
pub struct Recorded {
    /// Every `open` call: kind, path, append.
    pub opened: Vec<(SinkKind, PathBuf, bool)>,
    /// Successfully written lines with the path of the sink they went to.
    pub lines: Vec<(PathBuf, String)>,
    /// Paths whose sink was closed, in order.
    pub closed: Vec<PathBuf>,
    /// Write attempts across all sinks, including failed ones.
    pub attempts: usize,
}

#[derive(Clone, Default)]
pub struct MemoryFactory {
    pub recorded: Arc<Mutex<Recorded>>,
    /// 1-based write attempt that fails.
    fail_write_at: Option<usize>,
    /// 1-based write attempts from which every write fails.
    fail_writes_from: Option<usize>,
    /// 1-based `open` call that fails.
    fail_open_at: Option<usize>,
    /// Raised once this many write attempts have happened.
    stop_after: Option<(usize, Arc<AtomicBool>)>,
}

impl MemoryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_write_at(mut self, attempt: usize) -> Self {
        self.fail_write_at = Some(attempt);
        self
    }

    pub fn fail_writes_from(mut self, attempt: usize) -> Self {
        self.fail_writes_from = Some(attempt);
        self
    }

    pub fn fail_open_at(mut self, call: usize) -> Self {
        self.fail_open_at = Some(call);
        self
    }

    pub fn stop_after(mut self, attempts: usize, flag: Arc<AtomicBool>) -> Self {
        self.stop_after = Some((attempts, flag));
        self
    }

    pub fn lines(&self) -> Vec<String> {
        self.recorded
            .lock()
            .unwrap()
            .lines
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn lines_for(&self, path: &Path) -> Vec<String> {
        self.recorded
            .lock()
            .unwrap()
            .lines
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.recorded
            .lock()
            .unwrap()
            .opened
            .iter()
            .map(|(_, path, _)| path.clone())
            .collect()
    }

    pub fn closed(&self) -> Vec<PathBuf> {
        self.recorded.lock().unwrap().closed.clone()
    }
}

impl SinkFactory for MemoryFactory {
    fn open(&self, kind: SinkKind, path: &Path, append: bool) -> Result<Box<dyn Sink>, Error> {
        let mut recorded = self.recorded.lock().unwrap();
        recorded.opened.push((kind, path.to_path_buf(), append));
        if self.fail_open_at == Some(recorded.opened.len()) {
            return Err(Error::SinkOpen {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "injected"),
            });
        }
        Ok(Box::new(MemorySink {
            path: path.to_path_buf(),
            factory: self.clone(),
        }))
    }
}

pub struct MemorySink {
    path: PathBuf,
    factory: MemoryFactory,
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut recorded = self.factory.recorded.lock().unwrap();
        recorded.attempts += 1;
        let attempt = recorded.attempts;

        if let Some((after, ref flag)) = self.factory.stop_after
            && attempt >= after
        {
            flag.store(true, Ordering::SeqCst);
        }

        let failing = self.factory.fail_write_at == Some(attempt)
            || self.factory.fail_writes_from.is_some_and(|from| attempt >= from);
        if failing {
            return Err(io::Error::other("injected write failure"));
        }

        recorded.lines.push((self.path.clone(), line.to_string()));
        Ok(())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        self.factory
            .recorded
            .lock()
            .unwrap()
            .closed
            .push(self.path.clone());
        Ok(())
    }
}
