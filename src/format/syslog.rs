//! BSD (RFC 3164) and IETF (RFC 5424) syslog lines.

use super::Timestamp;
use super::fake::Faker;
use chrono::SecondsFormat;

/// PRI = facility * 8 + severity; facilities 0..=23, severities 0..=7.
fn priority(faker: &mut Faker) -> u32 {
    faker.range(0, 191)
}

pub fn rfc3164(ts: &Timestamp) -> String {
    let mut faker = Faker::new(ts, 4);
    format!(
        "<{}>{} {} {}[{}]: {}",
        priority(&mut faker),
        ts.format("%b %d %H:%M:%S"),
        faker.domain(),
        faker.app_name(),
        faker.pid(),
        faker.hacker_phrase()
    )
}

pub fn rfc5424(ts: &Timestamp) -> String {
    let mut faker = Faker::new(ts, 5);
    format!(
        "<{}>{} {} {} {} {} ID{} - {}",
        priority(&mut faker),
        faker.range(1, 3),
        ts.to_rfc3339_opts(SecondsFormat::Millis, false),
        faker.domain(),
        faker.app_name(),
        faker.pid(),
        faker.range(0, 1000),
        faker.hacker_phrase()
    )
}
