//! A simulated listening session: one user opens a track, plays, pauses,
//! seeks and eventually stops. All lines share one session id and are
//! stamped at increasing offsets from the session's start.

use super::fake::Faker;
use super::{Session, Timestamp};
use chrono::{SecondsFormat, TimeDelta};
use std::time::Duration;
use ulid::Ulid;

const SALT: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Open,
    Play,
    Pause,
    Resume,
    Seek,
    Stop,
}

impl Action {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Seek => "seek",
            Self::Stop => "stop",
        }
    }
}

/// Builds the full session anchored at `ts`.
pub fn session(ts: &Timestamp) -> Session {
    let mut faker = Faker::new(ts, SALT);

    let millis = u64::try_from(ts.timestamp_millis()).unwrap_or_default();
    let id = Ulid::from_parts(millis, faker.u128());
    let user = faker.username();
    let host = faker.hostname();
    let track = faker.title();
    let track_len = faker.range(120, 420);

    let mut steps = vec![Action::Open, Action::Play];
    let middle = faker.range(0, 4);
    let mut paused = false;
    for _ in 0..middle {
        let next = if paused {
            Action::Resume
        } else if faker.chance(0.5) {
            Action::Pause
        } else {
            Action::Seek
        };
        paused = next == Action::Pause;
        steps.push(next);
    }
    steps.push(Action::Stop);

    let mut offset = 0u32;
    let mut step = 0u32;
    let mut position = 0u32;
    let mut lines = Vec::with_capacity(steps.len());
    for action in steps {
        offset += step;
        let at = *ts + TimeDelta::seconds(i64::from(offset));
        let level = if action == Action::Stop && faker.chance(0.1) {
            "WARN"
        } else {
            "INFO"
        };
        lines.push(format!(
            "{} {level} audio_player[{host}] session={id} user={user} action={} track=\"{track}\" position={position}/{track_len}",
            at.to_rfc3339_opts(SecondsFormat::Millis, false),
            action.as_str(),
        ));

        step = match action {
            Action::Open => faker.range(0, 2),
            Action::Pause => faker.range(2, 30),
            _ => faker.range(5, 90),
        };
        match action {
            Action::Play | Action::Resume => position = (position + step).min(track_len),
            Action::Seek => position = faker.range(0, track_len),
            _ => {}
        }
    }

    Session {
        lines,
        elapsed: Duration::from_secs(u64::from(offset)),
    }
}
