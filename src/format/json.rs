//! One JSON object per line, carrying the access-log fields.

use super::Timestamp;
use super::fake::Faker;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRecord<'a> {
    host: String,
    #[serde(rename = "user-identifier")]
    user_identifier: String,
    datetime: String,
    method: &'a str,
    request: String,
    protocol: &'a str,
    status: u16,
    bytes: u32,
    referer: String,
}

pub fn json(ts: &Timestamp) -> String {
    let mut faker = Faker::new(ts, 7);
    let record = JsonRecord {
        host: faker.ipv4(),
        user_identifier: faker.user_identifier(),
        datetime: ts.format("%d/%b/%Y:%H:%M:%S %z").to_string(),
        method: faker.http_method(),
        request: faker.url_path(),
        protocol: faker.http_version(),
        status: faker.http_status(),
        bytes: faker.body_size(),
        referer: faker.url(),
    };
    // Plain strings and integers only; serialization cannot fail.
    serde_json::to_string(&record).unwrap_or_default()
}
