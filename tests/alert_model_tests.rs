use sniperdesk::models::{
    alert::{clip_message, grouped_dollars, short_address, MAX_MESSAGE_CHARS},
    Alert, AlertId, AlertKind, Recommendation, TradeSide,
};

#[test]
fn generated_ids_are_unique() {
    let a = Alert::new(AlertKind::Info, "a");
    let b = Alert::new(AlertKind::Info, "b");
    assert_ne!(a.id, b.id);
}

#[test]
fn ids_deserialize_from_numbers_and_strings() {
    let n: AlertId = serde_json::from_str("1").unwrap();
    let s: AlertId = serde_json::from_str("\"fill-7\"").unwrap();
    assert_eq!(n, AlertId::from("1"));
    assert_eq!(s.as_str(), "fill-7");
}

#[test]
fn kind_parses_case_insensitively() {
    assert_eq!(AlertKind::parse("SUCCESS"), Some(AlertKind::Success));
    assert_eq!(AlertKind::parse(" sell "), Some(AlertKind::Sell));
    assert_eq!(AlertKind::parse("panic"), None);
}

#[test]
fn buy_fill_formats_sol_amount_and_top_reasons() {
    let reasons: Vec<String> = ["volume spike", "whale entry", "fresh LP", "ignored"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let alert = Alert::trade_fill(TradeSide::Buy, "BONK", 0.5, 0.000_012_34, &reasons);

    assert_eq!(alert.kind, AlertKind::Buy);
    assert_eq!(alert.title.as_deref(), Some("BUY BONK"));
    assert_eq!(alert.message, "0.500 SOL @ $0.00001234");
    let details = alert.details.unwrap();
    assert_eq!(details.lines().count(), 3);
    assert!(!details.contains("ignored"));
}

#[test]
fn sell_fill_reports_tokens() {
    let alert = Alert::trade_fill(TradeSide::Sell, "WIF", 1200.0, 2.5, &[]);
    assert_eq!(alert.kind, AlertKind::Sell);
    assert_eq!(alert.message, "1200 tokens @ $2.50000000");
    assert!(alert.details.is_none());
}

#[test]
fn connection_alerts_shorten_wallet() {
    let wallet = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
    let up = Alert::connection(true, wallet);
    let down = Alert::connection(false, "");

    assert_eq!(up.kind, AlertKind::Success);
    assert_eq!(up.message, "wallet connected");
    assert_eq!(up.details.as_deref(), Some("9xQeWvG8...VFin"));
    assert_eq!(down.kind, AlertKind::Warning);
    assert!(down.details.is_none());
}

#[test]
fn system_alert_is_titled_by_kind() {
    let alert = Alert::system(AlertKind::Error, "RPC unreachable");
    assert_eq!(alert.title.as_deref(), Some("System Alert: Error"));
}

#[test]
fn token_selection_is_info() {
    let alert = Alert::token_selected("JUP", "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN");
    assert_eq!(alert.kind, AlertKind::Info);
    assert_eq!(alert.message, "JUP selected");
}

#[test]
fn new_token_formats_price_liquidity_and_verdict() {
    let alert = Alert::new_token(
        "BONK",
        "Bonk",
        "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
        0.000_012_34,
        1_234_567.6,
        Recommendation::Buy,
    );

    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.title.as_deref(), Some("New Token Detected"));
    assert_eq!(alert.message, "Bonk (BONK) @ $0.00001234");
    assert_eq!(
        alert.details.as_deref(),
        Some("Liquidity: $1,234,568\nRecommendation: 🟢 BUY\nAddress: DezXAZ8z...B263")
    );
}

#[test]
fn recommendation_verdicts_and_fallback() {
    assert_eq!(Recommendation::parse("avoid"), Recommendation::Avoid);
    assert_eq!(Recommendation::parse("BUY"), Recommendation::Buy);
    assert_eq!(Recommendation::parse("moon"), Recommendation::Hold);
    assert_eq!(Recommendation::Hold.emoji(), "🟡");
    assert_eq!(Recommendation::Avoid.emoji(), "🔴");

    let avoid = Alert::new_token("RUG", "Rug", "x", 1.0, 0.0, Recommendation::Avoid);
    assert_eq!(avoid.kind, AlertKind::Warning);
    assert!(avoid.details.unwrap().contains("Liquidity: $0\nRecommendation: 🔴 AVOID"));
}

#[test]
fn dollars_are_grouped_by_thousands() {
    assert_eq!(grouped_dollars(0.4), "0");
    assert_eq!(grouped_dollars(999.0), "999");
    assert_eq!(grouped_dollars(1000.0), "1,000");
    assert_eq!(grouped_dollars(12_345_678.0), "12,345,678");
    assert_eq!(grouped_dollars(-4200.0), "-4,200");
}

#[test]
fn short_addresses_are_left_alone() {
    assert_eq!(short_address("abc"), "abc");
}

#[test]
fn long_messages_are_clipped() {
    let long = "x".repeat(MAX_MESSAGE_CHARS + 10);
    let clipped = clip_message(long);
    assert_eq!(clipped.chars().count(), MAX_MESSAGE_CHARS);
    assert!(clipped.ends_with("[Message truncated due to length]"));

    assert_eq!(clip_message("short".to_string()), "short");
}

#[test]
fn alert_serializes_kind_lowercase() {
    let alert = Alert::new(AlertKind::Warning, "careful").with_id("w1");
    let v = serde_json::to_value(&alert).unwrap();
    assert_eq!(v["id"], "w1");
    assert_eq!(v["kind"], "warning");
    assert!(v["title"].is_null());
}
