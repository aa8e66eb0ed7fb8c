//! Tests for the formatter registry.

use chrono::{DateTime, TimeDelta};
use regex::Regex;
use std::time::Duration;
use synthlog::{Format, Timestamp, render_one, render_session};

fn ts() -> Timestamp {
    DateTime::parse_from_rfc3339("2024-03-01T12:00:00+00:00").unwrap()
}

#[test]
fn every_format_is_deterministic() {
    for name in Format::names() {
        let format = Format::from_name(name);
        assert_eq!(
            format.render_one(&ts()),
            format.render_one(&ts()),
            "{name} is not deterministic"
        );
        assert_eq!(format.render_session(&ts()), format.render_session(&ts()));
    }
}

#[test]
fn different_instants_render_differently() {
    let later = ts() + TimeDelta::milliseconds(1);
    assert_ne!(
        Format::ApacheCombined.render_one(&ts()),
        Format::ApacheCombined.render_one(&later)
    );
}

#[test]
fn names_round_trip() {
    for name in Format::names() {
        let format = Format::from_name(name);
        assert_ne!(format, Format::Unknown);
        assert_eq!(format.name(), name);
        assert_eq!(format.to_string(), name);
    }
    assert_eq!(Format::names().count(), 8);
}

#[test]
fn rendered_lines_have_no_newline() {
    for name in Format::names() {
        let line = Format::from_name(name).render_one(&ts());
        assert!(!line.is_empty(), "{name} rendered nothing");
        assert!(!line.contains('\n'), "{name} contains a newline");
    }
}

#[test]
fn apache_common_shape() {
    let re = Regex::new(
        r#"^\d+\.\d+\.\d+\.\d+ - \S+ \[01/Mar/2024:12:00:00 \+0000\] "(GET|POST|PUT|PATCH|DELETE|HEAD) /\S+ HTTP/\d\.\d" \d{3} \d+$"#,
    )
    .unwrap();
    let line = render_one(Format::ApacheCommon, &ts());
    assert!(re.is_match(&line), "{line}");
    let line = render_one(Format::CommonLog, &ts());
    assert!(re.is_match(&line), "{line}");
}

#[test]
fn apache_combined_shape() {
    let re = Regex::new(r#"^\S+ - \S+ \[[^\]]+\] "[^"]+" \d{3} \d+ "https?://[^"]+" "[^"]+"$"#)
        .unwrap();
    let line = Format::ApacheCombined.render_one(&ts());
    assert!(re.is_match(&line), "{line}");
}

#[test]
fn apache_error_shape() {
    let re = Regex::new(
        r"^\[Fri Mar 01 12:00:00 2024\] \[\w+:\w+\] \[pid \d+:tid \d+\] \[client [\d.]+:\d+\] .+$",
    )
    .unwrap();
    let line = Format::ApacheError.render_one(&ts());
    assert!(re.is_match(&line), "{line}");
}

#[test]
fn syslog_shapes() {
    let bsd = Regex::new(r"^<\d{1,3}>Mar 01 12:00:00 \S+ \S+\[\d+\]: .+$").unwrap();
    let line = Format::Rfc3164.render_one(&ts());
    assert!(bsd.is_match(&line), "{line}");

    let ietf = Regex::new(r"^<\d{1,3}>\d 2024-03-01T12:00:00\.000\+00:00 \S+ \S+ \d+ ID\d+ - .+$")
        .unwrap();
    let line = Format::Rfc5424.render_one(&ts());
    assert!(ietf.is_match(&line), "{line}");
}

#[test]
fn json_is_one_object() {
    let line = Format::Json.render_one(&ts());
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    for key in [
        "host",
        "user-identifier",
        "datetime",
        "method",
        "request",
        "protocol",
        "status",
        "bytes",
        "referer",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["datetime"], "01/Mar/2024:12:00:00 +0000");
}

#[test]
fn unknown_format_renders_empty() {
    let format = Format::from_name("syslog-ng");
    assert_eq!(format, Format::Unknown);
    assert_eq!(format.render_one(&ts()), "");

    let session = render_session(format, &ts());
    assert_eq!(session.lines, vec![String::new()]);
    assert_eq!(session.elapsed, Duration::ZERO);
}

#[test]
fn single_line_formats_degenerate_to_one_line_sessions() {
    let session = Format::Rfc3164.render_session(&ts());
    assert_eq!(session.lines, vec![Format::Rfc3164.render_one(&ts())]);
    assert_eq!(session.elapsed, Duration::ZERO);
    assert!(!Format::Rfc3164.is_session());
}

#[test]
fn audio_player_session_is_one_story() {
    let session = Format::AudioPlayer.render_session(&ts());
    assert!(Format::AudioPlayer.is_session());
    assert!(session.lines.len() >= 3);
    assert!(session.lines.len() <= 7);
    assert!(session.lines[0].contains("action=open"));
    assert!(session.lines[1].contains("action=play"));
    assert!(session.lines.last().unwrap().contains("action=stop"));

    let id = Regex::new(r"session=(\S+)").unwrap();
    let ids: Vec<&str> = session
        .lines
        .iter()
        .map(|line| id.captures(line).unwrap().get(1).unwrap().as_str())
        .collect();
    assert!(ids.iter().all(|s| *s == ids[0]));

    assert!(session.lines[0].starts_with("2024-03-01T12:00:0"));
    assert_eq!(
        Format::AudioPlayer.render_one(&ts()),
        session.lines[0],
        "single-line rendering uses the session's opening line"
    );
}

#[test]
fn audio_player_elapsed_matches_last_line() {
    for offset in 0..20 {
        let start = ts() + TimeDelta::seconds(offset);
        let session = Format::AudioPlayer.render_session(&start);
        let end = start + TimeDelta::from_std(session.elapsed).unwrap();
        let last = session.lines.last().unwrap();
        let stamp = end.to_rfc3339_opts(chrono::SecondsFormat::Millis, false);
        assert!(last.starts_with(&stamp), "{last} does not start with {stamp}");
    }
}
