//! Field values shared by the renderers.
//!
//! Every `Faker` is seeded from the record timestamp, so rendering the same
//! format at the same instant always produces the same line.

use super::Timestamp;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const ADJECTIVES: &[&str] = &[
    "back-end", "bleeding-edge", "clicks-and-mortar", "cross-platform", "distributed",
    "dynamic", "efficient", "end-to-end", "enterprise", "granular", "holistic", "impactful",
    "interactive", "magnetic", "mission-critical", "open-source", "proactive", "real-time",
    "robust", "scalable", "seamless", "sticky", "strategic", "turn-key", "viral", "wireless",
];

const VERBS: &[&str] = &[
    "aggregate", "architect", "benchmark", "brand", "cultivate", "deliver", "deploy",
    "disintermediate", "embrace", "empower", "enable", "engage", "envisioneer", "evolve",
    "facilitate", "generate", "harness", "incentivize", "innovate", "integrate", "leverage",
    "monetize", "optimize", "orchestrate", "reinvent", "repurpose", "scale", "streamline",
    "syndicate", "synergize", "target", "transform", "unleash", "utilize", "visualize",
];

const NOUNS: &[&str] = &[
    "action-items", "applications", "architectures", "bandwidth", "channels", "communities",
    "content", "convergence", "deliverables", "e-business", "e-commerce", "e-markets",
    "experiences", "functionalities", "infrastructures", "initiatives", "interfaces",
    "markets", "methodologies", "metrics", "models", "networks", "paradigms", "partnerships",
    "platforms", "portals", "relationships", "schemas", "solutions", "supply-chains",
    "synergies", "systems", "technologies", "users", "web-readiness",
];

const HACKER_NOUNS: &[&str] = &[
    "alarm", "application", "array", "bandwidth", "bus", "capacitor", "card", "circuit",
    "driver", "feed", "firewall", "hard drive", "interface", "matrix", "microchip", "monitor",
    "panel", "pixel", "port", "program", "protocol", "sensor", "system", "transmitter",
];

const HACKER_ADJECTIVES: &[&str] = &[
    "auxiliary", "back-end", "bluetooth", "cross-platform", "digital", "haptic", "mobile",
    "multi-byte", "neural", "online", "open-source", "optical", "primary", "redundant",
    "solid state", "virtual", "wireless",
];

const HACKER_VERBS: &[&str] = &[
    "back up", "bypass", "calculate", "compress", "connect", "copy", "generate", "hack",
    "index", "input", "navigate", "override", "parse", "program", "quantify", "reboot",
    "synthesize", "transmit",
];

const ABBREVIATIONS: &[&str] = &[
    "ADP", "AGP", "AI", "CSS", "EXE", "FTP", "GB", "HDD", "HTTP", "IB", "JBOD", "JSON", "PCI",
    "RAM", "SAS", "SCSI", "SDD", "SMS", "SMTP", "SQL", "SSL", "TCP", "THX", "USB", "XML", "XSS",
];

const FIRST_NAMES: &[&str] = &[
    "adrienne", "alec", "bart", "cassie", "dorian", "elna", "fabian", "greta", "hollis", "ines",
    "jarret", "kaia", "lenny", "mabel", "nash", "odette", "pierce", "quincy", "rosa", "soren",
    "tamsin", "ulric", "vera", "wendell", "xena", "yusuf", "zora",
];

const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "io", "biz", "info", "name"];

const HTTP_METHODS: &[&str] = &["GET", "GET", "GET", "POST", "PUT", "PATCH", "DELETE", "HEAD"];

const HTTP_VERSIONS: &[&str] = &["HTTP/1.0", "HTTP/1.1", "HTTP/2.0"];

const HTTP_STATUSES: &[u16] = &[
    200, 200, 200, 200, 201, 204, 301, 302, 304, 400, 401, 403, 404, 405, 406, 416, 500, 501,
    502, 503,
];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
    "curl/8.7.1",
    "Wget/1.21.4",
];

const ERROR_MODULES: &[&str] = &["core", "authz_core", "proxy", "ssl", "rewrite", "mpm_event"];

const ERROR_LEVELS: &[&str] = &["emerg", "alert", "crit", "error", "warn", "notice", "info", "debug"];

/// Seeded field source for one record.
pub struct Faker {
    rng: StdRng,
}

impl Faker {
    /// Same timestamp and salt, same sequence of values.
    #[must_use]
    pub fn new(ts: &Timestamp, salt: u64) -> Self {
        let nanos = ts
            .timestamp_nanos_opt()
            .unwrap_or_else(|| ts.timestamp().wrapping_mul(1_000_000_000));
        #[allow(clippy::cast_sign_loss)]
        let seed = (nanos as u64) ^ salt.rotate_left(32);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    pub fn range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    pub fn u128(&mut self) -> u128 {
        self.rng.random()
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    pub fn ipv4(&mut self) -> String {
        let octets: [u8; 4] = self.rng.random();
        format!(
            "{}.{}.{}.{}",
            octets[0].max(1),
            octets[1],
            octets[2],
            octets[3].max(1)
        )
    }

    pub fn port(&mut self) -> u32 {
        self.range(1024, 65535)
    }

    /// Either `-` or a lower-case username with a numeric suffix.
    pub fn user_identifier(&mut self) -> String {
        if self.chance(0.35) {
            "-".to_string()
        } else {
            self.username()
        }
    }

    pub fn username(&mut self) -> String {
        let name = self.pick(FIRST_NAMES);
        let n = self.range(1, 9999);
        format!("{name}{n}")
    }

    pub fn http_method(&mut self) -> &'static str {
        self.pick(HTTP_METHODS)
    }

    pub fn http_version(&mut self) -> &'static str {
        self.pick(HTTP_VERSIONS)
    }

    pub fn http_status(&mut self) -> u16 {
        HTTP_STATUSES.choose(&mut self.rng).copied().unwrap_or(200)
    }

    /// Response size in bytes.
    pub fn body_size(&mut self) -> u32 {
        self.range(0, 50_000)
    }

    /// Buzzword path such as `/synergize/scalable/e-markets`.
    pub fn url_path(&mut self) -> String {
        let mut path = String::new();
        if self.chance(0.5) {
            path.push('/');
            path.push_str(self.pick(ADJECTIVES));
        }
        path.push('/');
        path.push_str(self.pick(VERBS));
        path.push('/');
        path.push_str(self.pick(NOUNS));
        path
    }

    pub fn domain(&mut self) -> String {
        let verb = self.pick(VERBS);
        let noun = self.pick(NOUNS);
        let tld = self.pick(DOMAIN_SUFFIXES);
        format!("{verb}{noun}.{tld}")
    }

    pub fn url(&mut self) -> String {
        let scheme = if self.chance(0.8) { "https" } else { "http" };
        let host = self.domain();
        let path = self.url_path();
        format!("{scheme}://www.{host}{path}")
    }

    pub fn user_agent(&mut self) -> &'static str {
        self.pick(USER_AGENTS)
    }

    pub fn hostname(&mut self) -> String {
        let adjective = self.pick(ADJECTIVES);
        let tld = self.pick(DOMAIN_SUFFIXES);
        format!("{adjective}.{tld}")
    }

    /// Single-word process name for syslog headers.
    pub fn app_name(&mut self) -> &'static str {
        self.pick(VERBS)
    }

    pub fn pid(&mut self) -> u32 {
        self.range(1, 10_000)
    }

    pub fn error_module(&mut self) -> &'static str {
        self.pick(ERROR_MODULES)
    }

    pub fn error_level(&mut self) -> &'static str {
        self.pick(ERROR_LEVELS)
    }

    /// Jargon sentence like "We need to back up the neural SMTP firewall!".
    pub fn hacker_phrase(&mut self) -> String {
        let verb = self.pick(HACKER_VERBS);
        let adjective = self.pick(HACKER_ADJECTIVES);
        let abbreviation = self.pick(ABBREVIATIONS);
        let noun = self.pick(HACKER_NOUNS);
        match self.range(0, 3) {
            0 => format!("If we {verb} the {noun}, we can get to the {abbreviation} {noun} through the {adjective} {abbreviation} {noun}!"),
            1 => format!("We need to {verb} the {adjective} {abbreviation} {noun}!"),
            2 => format!("Try to {verb} the {abbreviation} {noun}, maybe it will {verb} the {adjective} {noun}!"),
            _ => format!("You can't {verb} the {noun} without the {adjective} {abbreviation} {noun}!"),
        }
    }

    /// Two-word title-cased phrase, used for track names.
    pub fn title(&mut self) -> String {
        let adjective = capitalize(self.pick(HACKER_ADJECTIVES));
        let noun = capitalize(self.pick(HACKER_NOUNS));
        format!("{adjective} {noun}")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
