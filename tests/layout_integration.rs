//! Integration tests for the ring layout engine
//!
//! Tests the full path: contacts → classify_ring → RingLayoutEngine → nodes

use std::collections::HashSet;
use std::f64::consts::FRAC_PI_2;

use chrono::{Duration, NaiveDate};

use warmth::config::{LayoutConfig, OverflowPolicy, WarmthConfig};
use warmth::core::{demo_contacts, partition_by_ring, RingLayoutEngine};
use warmth::types::{Contact, Ring};
use warmth::RING_RADII;

const EPS: f64 = 1e-6;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
}

fn seen(id: &str, days: i64) -> Contact {
    Contact::new(id, id).with_last_interaction(today() - Duration::days(days))
}

/// Two contacts seen today sit on the weekly ring, a diameter apart
#[test]
fn test_two_same_day_contacts() {
    let engine = RingLayoutEngine::default();
    let contacts = vec![seen("a", 0), seen("b", 0)];
    let nodes = engine.layout(&contacts, today());

    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|n| n.ring == Ring::Weekly));
    let dist = (nodes[1].x - nodes[0].x).hypot(nodes[1].y - nodes[0].y);
    assert!((dist - 2.0 * RING_RADII[0]).abs() < EPS, "dist={}", dist);
}

/// One contact per ring: each at the top of its own ring
#[test]
fn test_single_contact_per_ring_at_top() {
    let engine = RingLayoutEngine::default();
    let contacts = vec![seen("w", 3), seen("m", 15), seen("q", 60), Contact::new("d", "D")];
    let nodes = engine.layout(&contacts, today());

    assert_eq!(nodes.len(), 4);
    for node in &nodes {
        assert!((node.angle_from(220.0, 220.0) + FRAC_PI_2).abs() < EPS);
        assert!((node.distance_from(220.0, 220.0) - engine.ring_radius(node.ring)).abs() < EPS);
    }
}

/// Demo contacts fit on their rings without truncation
#[test]
fn test_demo_layout_round_trip() {
    let contacts = demo_contacts();
    let engine = RingLayoutEngine::new(WarmthConfig::default().layout);
    let nodes = engine.layout(&contacts, today());

    let laid_out: HashSet<&str> = nodes.iter().map(|n| n.contact.id.as_str()).collect();
    let original: HashSet<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(laid_out, original);

    let groups = partition_by_ring(&contacts, today());
    let regrouped: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(regrouped, contacts.len());
}

/// Truncation drops only the overflow, per ring
#[test]
fn test_truncation_per_ring() {
    let engine = RingLayoutEngine::default();
    let mut contacts: Vec<Contact> = (0..25).map(|i| seen(&format!("m{}", i), 20)).collect();
    contacts.extend((0..5).map(|i| seen(&format!("w{}", i), 1)));

    let nodes = engine.layout(&contacts, today());
    let monthly = nodes.iter().filter(|n| n.ring == Ring::Monthly).count();
    let weekly = nodes.iter().filter(|n| n.ring == Ring::Weekly).count();

    assert_eq!(monthly, 20);
    assert_eq!(weekly, 5);
    assert_eq!(engine.hidden_counts(&contacts, today()), [0, 5, 0, 0]);
}

/// Show-all places every contact and keeps them on the ring
#[test]
fn test_show_all_keeps_everyone() {
    let engine = RingLayoutEngine::new(LayoutConfig {
        overflow: OverflowPolicy::ShowAll,
        ..LayoutConfig::default()
    });
    let contacts: Vec<Contact> = (0..25).map(|i| seen(&format!("m{}", i), 20)).collect();
    let nodes = engine.layout(&contacts, today());

    assert_eq!(nodes.len(), 25);
    for node in &nodes {
        assert!((node.distance_from(220.0, 220.0) - RING_RADII[1]).abs() < EPS);
    }
}

/// Custom geometry from config
#[test]
fn test_custom_canvas() {
    let config: WarmthConfig = serde_json::from_str(
        r#"{"layout": {"canvas_size": 1000, "ring_radii": [100, 200, 300, 400]}}"#,
    )
    .unwrap();
    config.layout.validate().unwrap();

    let engine = RingLayoutEngine::new(config.layout);
    let nodes = engine.layout(&[Contact::new("d", "D")], today());
    assert!((nodes[0].x - 500.0).abs() < EPS);
    assert!((nodes[0].y - 100.0).abs() < EPS);
}
