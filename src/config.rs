use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub alerts: AlertSettings,
    pub boot_alert: bool,
}

/// Sizing and timing of the alert queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSettings {
    /// Alerts retained before the oldest is silently evicted.
    pub store_capacity: usize,
    /// Alerts handed to the renderer at once.
    pub visible_limit: usize,
    /// Rolling auto-dismiss interval.
    pub ttl: Duration,
    pub emphasis: bool,
}

pub const DEFAULT_STORE_CAPACITY: usize = 5;
pub const DEFAULT_VISIBLE_LIMIT: usize = 3;
pub const DEFAULT_TTL_MS: u64 = 10_000;

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            store_capacity: DEFAULT_STORE_CAPACITY,
            visible_limit: DEFAULT_VISIBLE_LIMIT,
            ttl: Duration::from_millis(DEFAULT_TTL_MS),
            emphasis: true,
        }
    }
}

impl AlertSettings {
    pub fn new(store_capacity: usize, visible_limit: usize, ttl: Duration) -> Self {
        Self {
            store_capacity,
            visible_limit,
            ttl,
            emphasis: true,
        }
        .normalized()
    }

    /// Capacity and limit are at least 1, the window never exceeds the store,
    /// and a zero TTL is bumped to 1ms.
    pub fn normalized(mut self) -> Self {
        self.store_capacity = self.store_capacity.max(1);
        self.visible_limit = self.visible_limit.clamp(1, self.store_capacity);
        if self.ttl.is_zero() {
            self.ttl = Duration::from_millis(1);
        }
        self
    }
}

/// Whole milliseconds in `d`, saturating at `u64::MAX`.
pub fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse::<T>().ok())
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env_parse::<u16>("PORT").unwrap_or(3000);

    let alerts = AlertSettings {
        store_capacity: env_parse("ALERT_STORE_CAPACITY").unwrap_or(DEFAULT_STORE_CAPACITY),
        visible_limit: env_parse("ALERT_VISIBLE_LIMIT").unwrap_or(DEFAULT_VISIBLE_LIMIT),
        ttl: Duration::from_millis(env_parse("ALERT_TTL_MS").unwrap_or(DEFAULT_TTL_MS)),
        emphasis: env_flag("ALERT_EMPHASIS", true),
    }
    .normalized();

    let boot_alert = env_flag("BOOT_ALERT", true);

    Settings {
        host,
        port,
        alerts,
        boot_alert,
    }
}
