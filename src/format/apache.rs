//! Apache httpd access and error log lines.

use super::Timestamp;
use super::fake::Faker;

/// `%d/%b/%Y:%H:%M:%S %z`, the access log clock.
const ACCESS_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";
/// `%a %b %d %H:%M:%S %Y`, the error log clock.
const ERROR_TIME: &str = "%a %b %d %H:%M:%S %Y";

/// Fields shared by every access-log variant.
struct Access {
    host: String,
    user: String,
    method: &'static str,
    path: String,
    protocol: &'static str,
    status: u16,
    bytes: u32,
}

impl Access {
    fn fake(faker: &mut Faker) -> Self {
        Self {
            host: faker.ipv4(),
            user: faker.user_identifier(),
            method: faker.http_method(),
            path: faker.url_path(),
            protocol: faker.http_version(),
            status: faker.http_status(),
            bytes: faker.body_size(),
        }
    }

    fn common(&self, ts: &Timestamp) -> String {
        format!(
            "{} - {} [{}] \"{} {} {}\" {} {}",
            self.host,
            self.user,
            ts.format(ACCESS_TIME),
            self.method,
            self.path,
            self.protocol,
            self.status,
            self.bytes
        )
    }
}

pub fn apache_common(ts: &Timestamp) -> String {
    Access::fake(&mut Faker::new(ts, 1)).common(ts)
}

pub fn apache_combined(ts: &Timestamp) -> String {
    let mut faker = Faker::new(ts, 2);
    let access = Access::fake(&mut faker);
    let referer = faker.url();
    let agent = faker.user_agent();
    format!("{} \"{referer}\" \"{agent}\"", access.common(ts))
}

pub fn apache_error(ts: &Timestamp) -> String {
    let mut faker = Faker::new(ts, 3);
    format!(
        "[{}] [{}:{}] [pid {}:tid {}] [client {}:{}] {}",
        ts.format(ERROR_TIME),
        faker.error_module(),
        faker.error_level(),
        faker.pid(),
        faker.pid(),
        faker.ipv4(),
        faker.port(),
        faker.hacker_phrase()
    )
}

/// NCSA common log format; same layout as Apache's, separate field stream.
pub fn common_log(ts: &Timestamp) -> String {
    Access::fake(&mut Faker::new(ts, 6)).common(ts)
}
