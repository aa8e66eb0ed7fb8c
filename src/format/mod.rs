//! Formatter registry: maps a format tag to the function that renders it.
//!
//! Renderers are pure. They take a timestamp, do no I/O, and return the
//! same text for the same instant. Lookup goes through one static table.

mod apache;
mod audio_player;
mod fake;
mod json;
mod syslog;

use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::time::Duration;

/// Instant a record is stamped with.
pub type Timestamp = DateTime<FixedOffset>;

type RenderFn = fn(&Timestamp) -> String;
type SessionFn = fn(&Timestamp) -> Session;

/// Every known format plus an explicit fallback for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    ApacheCommon,
    ApacheCombined,
    ApacheError,
    Rfc3164,
    Rfc5424,
    CommonLog,
    Json,
    AudioPlayer,
    /// Unrecognized name. Renders as an empty string, so the output is a
    /// stream of blank lines rather than an error.
    Unknown,
}

/// An ordered burst of related lines and how long the burst spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub lines: Vec<String>,
    pub elapsed: Duration,
}

struct Entry {
    format: Format,
    name: &'static str,
    render: RenderFn,
    session: Option<SessionFn>,
}

static REGISTRY: &[Entry] = &[
    Entry {
        format: Format::ApacheCommon,
        name: "apache_common",
        render: apache::apache_common,
        session: None,
    },
    Entry {
        format: Format::ApacheCombined,
        name: "apache_combined",
        render: apache::apache_combined,
        session: None,
    },
    Entry {
        format: Format::ApacheError,
        name: "apache_error",
        render: apache::apache_error,
        session: None,
    },
    Entry {
        format: Format::Rfc3164,
        name: "rfc3164",
        render: syslog::rfc3164,
        session: None,
    },
    Entry {
        format: Format::Rfc5424,
        name: "rfc5424",
        render: syslog::rfc5424,
        session: None,
    },
    Entry {
        format: Format::CommonLog,
        name: "common_log",
        render: apache::common_log,
        session: None,
    },
    Entry {
        format: Format::Json,
        name: "json",
        render: json::json,
        session: None,
    },
    Entry {
        format: Format::AudioPlayer,
        name: "audio_player",
        render: first_session_line,
        session: Some(audio_player::session),
    },
];

/// Session formats rendered one line at a time emit the session's opening line.
fn first_session_line(ts: &Timestamp) -> String {
    audio_player::session(ts)
        .lines
        .into_iter()
        .next()
        .unwrap_or_default()
}

impl Format {
    /// Resolves a name; anything unregistered becomes `Format::Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        REGISTRY
            .iter()
            .find(|entry| entry.name == name)
            .map_or(Self::Unknown, |entry| entry.format)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().map_or("unknown", |entry| entry.name)
    }

    /// Registered names, in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|entry| entry.name)
    }

    /// True for formats that emit a multi-line session per call.
    #[must_use]
    pub fn is_session(self) -> bool {
        self.entry().is_some_and(|entry| entry.session.is_some())
    }

    fn entry(self) -> Option<&'static Entry> {
        REGISTRY.iter().find(|entry| entry.format == self)
    }

    /// Exactly one line, without a trailing newline.
    #[must_use]
    pub fn render_one(self, ts: &Timestamp) -> String {
        self.entry()
            .map(|entry| (entry.render)(ts))
            .unwrap_or_default()
    }

    /// The session for session formats, otherwise `render_one` as a
    /// one-line session with no elapsed time.
    #[must_use]
    pub fn render_session(self, ts: &Timestamp) -> Session {
        match self.entry() {
            Some(Entry {
                session: Some(session),
                ..
            }) => session(ts),
            _ => Session {
                lines: vec![self.render_one(ts)],
                elapsed: Duration::ZERO,
            },
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-function form of [`Format::render_one`].
#[must_use]
pub fn render_one(format: Format, ts: &Timestamp) -> String {
    format.render_one(ts)
}

/// Free-function form of [`Format::render_session`].
#[must_use]
pub fn render_session(format: Format, ts: &Timestamp) -> Session {
    format.render_session(ts)
}
