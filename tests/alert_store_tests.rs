use sniperdesk::models::{Alert, AlertId, AlertKind};
use sniperdesk::services::alert_store::AlertStore;

fn alert(id: &str) -> Alert {
    Alert::new(AlertKind::Info, format!("message {id}")).with_id(id)
}

fn ids(alerts: &[Alert]) -> Vec<&str> {
    alerts.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn add_keeps_newest_first_and_window_is_prefix() {
    let mut store = AlertStore::new(5, 3);
    for id in ["A", "B", "C", "D"] {
        store.add(alert(id));
    }

    assert_eq!(ids(&store.visible(10)), vec!["D", "C", "B", "A"]);
    assert_eq!(ids(&store.visible(3)), vec!["D", "C", "B"]);
    assert_eq!(ids(&store.visible_default()), vec!["D", "C", "B"]);
}

#[test]
fn overflow_evicts_least_recent_silently() {
    let mut store = AlertStore::new(5, 3);
    for id in ["A", "B", "C", "D", "E"] {
        let change = store.add(alert(id));
        assert!(change.evicted.is_none());
    }

    let change = store.add(alert("F"));
    assert_eq!(change.evicted.map(|a| a.id), Some(AlertId::from("A")));
    assert!(change.removed.is_none());
    assert_eq!(ids(&store.visible(10)), vec!["F", "E", "D", "C", "B"]);
}

#[test]
fn store_never_exceeds_capacity() {
    let mut store = AlertStore::new(5, 3);
    for i in 0..50u64 {
        store.add(Alert::new(AlertKind::Buy, "fill").with_id(i));
        assert!(store.len() <= 5);
    }
    assert_eq!(ids(&store.visible(5)), vec!["49", "48", "47", "46", "45"]);
}

#[test]
fn insertion_order_wins_over_timestamps() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("late").with_timestamp("23:59:59"));
    store.add(alert("early").with_timestamp("00:00:01"));
    store.add(alert("same").with_timestamp("00:00:01"));

    assert_eq!(ids(&store.visible(3)), vec!["same", "early", "late"]);
}

#[test]
fn visible_shorter_than_limit_when_store_is_small() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("A"));

    assert_eq!(store.visible(3).len(), 1);
    assert!(store.visible(0).is_empty());
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("A"));
    store.add(alert("B"));

    let change = store.dismiss(&AlertId::from("unknown-id"));
    assert!(!change.changed);
    assert!(!change.window_changed);
    assert_eq!(ids(&store.visible(5)), vec!["B", "A"]);
}

#[test]
fn dismiss_twice_equals_dismiss_once() {
    let mut store = AlertStore::new(5, 3);
    for id in ["A", "B", "C"] {
        store.add(alert(id));
    }

    let first = store.dismiss(&AlertId::from("B"));
    let after_once = ids(&store.visible(5)).join(",");
    let second = store.dismiss(&AlertId::from("B"));

    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(ids(&store.visible(5)).join(","), after_once);
    assert_eq!(after_once, "C,A");
}

#[test]
fn dismiss_removes_only_first_of_colliding_ids() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("dup").with_title("older"));
    store.add(alert("dup").with_title("newer"));

    store.dismiss(&AlertId::from("dup"));

    let left = store.visible(5);
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].title.as_deref(), Some("older"));
}

#[test]
fn snapshot_does_not_follow_later_mutations() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("A"));
    let snapshot = store.visible(3);

    store.add(alert("B"));
    store.dismiss(&AlertId::from("A"));

    assert_eq!(ids(&snapshot), vec!["A"]);
    assert_eq!(ids(&store.visible(3)), vec!["B"]);
}

#[test]
fn malformed_alert_is_stored() {
    let mut store = AlertStore::new(5, 3);
    store.add(Alert::new(AlertKind::Info, "").with_id("blank"));

    let visible = store.visible(3);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].message, "");
}

#[test]
fn every_add_announces_its_new_head_once() {
    let mut store = AlertStore::new(5, 3);

    let change = store.add(Alert::new(AlertKind::Success, "wallet connected").with_id(1u64));
    assert_eq!(change.new_head, Some((AlertId::from(1u64), AlertKind::Success)));

    let change = store.add(Alert::new(AlertKind::Sell, "sold").with_id(2u64));
    assert_eq!(change.new_head, Some((AlertId::from(2u64), AlertKind::Sell)));
}

#[test]
fn dismiss_of_non_head_does_not_announce() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("A"));
    store.add(alert("B"));

    let change = store.dismiss(&AlertId::from("A"));
    assert!(change.changed);
    assert!(change.new_head.is_none());
}

#[test]
fn dismiss_of_head_announces_the_alert_beneath() {
    let mut store = AlertStore::new(5, 3);
    store.add(Alert::new(AlertKind::Buy, "bought").with_id("A"));
    store.add(Alert::new(AlertKind::Sell, "sold").with_id("B"));

    let change = store.dismiss(&AlertId::from("B"));
    assert_eq!(store.head().map(|a| a.id.as_str()), Some("A"));
    assert_eq!(change.new_head, Some((AlertId::from("A"), AlertKind::Buy)));
}

#[test]
fn dismiss_of_last_alert_has_no_new_head() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("A"));

    let change = store.dismiss(&AlertId::from("A"));
    assert!(change.changed);
    assert!(change.new_head.is_none());
}

#[test]
fn re_adding_an_id_that_is_already_head_is_not_a_new_head() {
    let mut store = AlertStore::new(5, 3);
    store.add(alert("same"));

    let change = store.add(alert("same"));
    assert!(change.new_head.is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn window_tail_is_oldest_visible() {
    let mut store = AlertStore::new(5, 3);
    assert!(store.window_tail().is_none());

    store.add(alert("A"));
    assert_eq!(store.window_tail(), Some(AlertId::from("A")));

    for id in ["B", "C", "D"] {
        store.add(alert(id));
    }
    assert_eq!(store.window_tail(), Some(AlertId::from("B")));
}

#[test]
fn window_changed_only_when_visible_prefix_moves() {
    let mut store = AlertStore::new(5, 3);
    for id in ["A", "B", "C", "D", "E"] {
        store.add(alert(id));
    }

    // A sits beyond the window.
    let change = store.dismiss(&AlertId::from("A"));
    assert!(change.changed);
    assert!(!change.window_changed);

    let change = store.dismiss(&AlertId::from("D"));
    assert!(change.window_changed);
    assert_eq!(ids(&store.visible_default()), vec!["E", "C", "B"]);
}

#[test]
fn limits_are_normalized() {
    let store = AlertStore::new(0, 10);
    assert_eq!(store.capacity(), 1);
    assert_eq!(store.visible_limit(), 1);
}
