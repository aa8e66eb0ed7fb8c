//! `synthlog` - synthetic log record generator.
//!
//! Produces a bounded or endless stream of formatted log lines with:
//! - A registry of formats (Apache access/error, syslog RFC 3164/5424, JSON,
//!   multi-line audio player sessions)
//! - Record-count or byte-budget stopping criteria
//! - Optional pacing and logical-time stepping
//! - Output to stdout, plain files or gzip files, with numbered rotation
//!
//! # Example
//!
//! ```
//! use synthlog::Format;
//!
//! let ts = chrono::DateTime::parse_from_rfc3339("2024-03-01T12:00:00+00:00").unwrap();
//! let line = Format::ApacheCommon.render_one(&ts);
//!
//! assert!(line.contains("[01/Mar/2024:12:00:00 +0000]"));
//! assert_eq!(line, Format::ApacheCommon.render_one(&ts));
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `synthlog` binary and its argument parser

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod internal;
pub mod level;
pub mod rotation;
pub mod sink;
pub mod size;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use format::{Format, Session, Timestamp, render_one, render_session};
pub use generate::{Generator, Options, Report, generate};
pub use level::Level;
pub use rotation::next_name;
pub use sink::{FsSinkFactory, Sink, SinkFactory, SinkKind};
pub use size::{format_size, parse_duration, parse_size};
