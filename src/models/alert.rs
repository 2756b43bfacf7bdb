use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};

/// Longest message body kept on an alert, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;
const TRUNCATION_SUFFIX: &str = "...\n\n[Message truncated due to length]";

/// Opaque alert identity. Producers may bring their own (string or number);
/// otherwise one is minted from a process-wide counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(format!("alert-{}", COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlertId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for AlertId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for AlertId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => AlertId::from(n),
            Raw::Text(s) => AlertId(s),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Buy,
    Sell,
    Error,
    Warning,
    Info,
    Success,
}

/// A short beep the browser plays when an alert of this kind arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

impl AlertKind {
    pub const ALL: [AlertKind; 6] = [
        AlertKind::Buy,
        AlertKind::Sell,
        AlertKind::Error,
        AlertKind::Warning,
        AlertKind::Info,
        AlertKind::Success,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Some(AlertKind::Buy),
            "sell" => Some(AlertKind::Sell),
            "error" => Some(AlertKind::Error),
            "warning" => Some(AlertKind::Warning),
            "info" => Some(AlertKind::Info),
            "success" => Some(AlertKind::Success),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Buy => "buy",
            AlertKind::Sell => "sell",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
            AlertKind::Success => "success",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Buy => "Buy",
            AlertKind::Sell => "Sell",
            AlertKind::Error => "Error",
            AlertKind::Warning => "Warning",
            AlertKind::Info => "Info",
            AlertKind::Success => "Success",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            AlertKind::Buy => "🟢",
            AlertKind::Sell => "🔴",
            AlertKind::Error => "❌",
            AlertKind::Warning => "⚠️",
            AlertKind::Info => "ℹ️",
            AlertKind::Success => "✅",
        }
    }

    /// CSS class applied to the newly-arrived head toast.
    pub fn emphasis_class(self) -> &'static str {
        match self {
            AlertKind::Buy => "toast-emphasis-buy",
            AlertKind::Sell => "toast-emphasis-sell",
            AlertKind::Error => "toast-emphasis-error",
            AlertKind::Warning => "toast-emphasis-warning",
            AlertKind::Info => "toast-emphasis-info",
            AlertKind::Success => "toast-emphasis-success",
        }
    }

    pub fn tone(self) -> Tone {
        let (frequency_hz, duration_ms) = match self {
            AlertKind::Buy => (880.0, 120),
            AlertKind::Sell => (660.0, 120),
            AlertKind::Error => (220.0, 400),
            AlertKind::Warning => (330.0, 250),
            AlertKind::Info => (523.25, 90),
            AlertKind::Success => (1046.5, 150),
        };
        Tone {
            frequency_hz,
            duration_ms,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transient notification. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub title: Option<String>,
    pub message: String,
    pub details: Option<String>,
    pub timestamp: String,
}

/// Wall-clock display time, e.g. `14:03:27`.
pub fn display_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Cuts `message` down to `MAX_MESSAGE_CHARS`, marking the cut.
pub fn clip_message(message: String) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message;
    }
    let keep = MAX_MESSAGE_CHARS - TRUNCATION_SUFFIX.chars().count();
    let mut out: String = message.chars().take(keep).collect();
    out.push_str(TRUNCATION_SUFFIX);
    out
}

/// `first8...last4` for wallet and mint addresses.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Whole-dollar amount with thousands separators, e.g. `1,234,568`.
pub fn grouped_dollars(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if amount.is_sign_negative() && rounded != "0" {
        out.insert(0, '-');
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Screener verdict attached to a freshly discovered token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recommendation {
    Buy,
    #[default]
    Hold,
    Avoid,
}

impl Recommendation {
    /// Unknown verdicts read as `Hold`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Recommendation::Buy,
            "AVOID" => Recommendation::Avoid,
            _ => Recommendation::Hold,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Avoid => "AVOID",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Recommendation::Buy => "🟢",
            Recommendation::Hold => "🟡",
            Recommendation::Avoid => "🔴",
        }
    }
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::generate(),
            kind,
            title: None,
            message: clip_message(message.into()),
            details: None,
            timestamp: display_timestamp(),
        }
    }

    pub fn with_id(mut self, id: impl Into<AlertId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn trade_fill(
        side: TradeSide,
        symbol: &str,
        amount: f64,
        price: f64,
        reasons: &[String],
    ) -> Self {
        let (kind, action, amount_text) = match side {
            TradeSide::Buy => (AlertKind::Buy, "BUY", format!("{amount:.3} SOL")),
            TradeSide::Sell => (AlertKind::Sell, "SELL", format!("{amount} tokens")),
        };

        let mut alert = Alert::new(kind, format!("{amount_text} @ ${price:.8}"))
            .with_title(format!("{action} {symbol}"));

        // Only the top three reasons make it onto the toast.
        let top: Vec<String> = reasons.iter().take(3).map(|r| format!("- {r}")).collect();
        if !top.is_empty() {
            alert = alert.with_details(top.join("\n"));
        }
        alert
    }

    pub fn connection(connected: bool, wallet: &str) -> Self {
        let (kind, message) = if connected {
            (AlertKind::Success, "wallet connected")
        } else {
            (AlertKind::Warning, "wallet disconnected")
        };
        let alert = Alert::new(kind, message).with_title("Wallet");
        if wallet.is_empty() {
            alert
        } else {
            alert.with_details(short_address(wallet))
        }
    }

    pub fn token_selected(symbol: &str, address: &str) -> Self {
        Alert::new(AlertKind::Info, format!("{symbol} selected"))
            .with_title("Token")
            .with_details(short_address(address))
    }

    /// Discovery notice for a token the screener just picked up.
    pub fn new_token(
        symbol: &str,
        name: &str,
        address: &str,
        price: f64,
        liquidity: f64,
        recommendation: Recommendation,
    ) -> Self {
        let kind = match recommendation {
            Recommendation::Buy => AlertKind::Success,
            Recommendation::Hold => AlertKind::Info,
            Recommendation::Avoid => AlertKind::Warning,
        };
        let details = format!(
            "Liquidity: ${}\nRecommendation: {} {}\nAddress: {}",
            grouped_dollars(liquidity),
            recommendation.emoji(),
            recommendation.as_str(),
            short_address(address),
        );

        Alert::new(kind, format!("{name} ({symbol}) @ ${price:.8}"))
            .with_title("New Token Detected")
            .with_details(details)
    }

    pub fn system(kind: AlertKind, message: impl Into<String>) -> Self {
        Alert::new(kind, message).with_title(format!("System Alert: {}", kind.label()))
    }
}
