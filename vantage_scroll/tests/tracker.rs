// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vantage_scroll` crate.
//!
//! These simulate a page with many cards mounting, scrolling and unmounting,
//! and check that observers report exactly what the closed form predicts.

use kurbo::Rect;
use vantage_scroll::{ObserverId, ScrollTracker, ScrollWindow};

fn card(top: f64) -> Rect {
    Rect::new(0.0, top, 320.0, top + 240.0)
}

fn viewport_at(top: f64) -> Rect {
    Rect::new(0.0, top, 1024.0, top + 768.0)
}

fn expected(bounds: Rect, viewport: Rect) -> f64 {
    (viewport.y1 - bounds.y0) / (viewport.height() + bounds.height())
}

#[test]
fn scroll_sweep_matches_closed_form() {
    let tops: Vec<f64> = (0..12).map(|i| 300.0 * f64::from(i)).collect();
    let mut tracker = ScrollTracker::new(viewport_at(0.0));
    let ids: Vec<ObserverId> = tops.iter().map(|&t| tracker.observe(card(t))).collect();

    for step in 0..80 {
        let vp = viewport_at(f64::from(step) * 45.0);
        tracker.set_viewport(vp);
        for (id, progress) in tracker.update() {
            let i = ids.iter().position(|&x| x == id).unwrap();
            let want = expected(card(tops[i]), vp);
            assert!((progress.value() - want).abs() < 1e-12);
        }
    }
}

#[test]
fn unobserve_is_immediate_and_final() {
    let mut tracker = ScrollTracker::new(viewport_at(0.0));
    let keep = tracker.observe(card(500.0));
    let gone = tracker.observe(card(900.0));
    let _ = tracker.update();

    // Scroll, then unmount before the host gets to process the update.
    tracker.set_viewport(viewport_at(200.0));
    assert!(tracker.unobserve(gone));
    let ids: Vec<ObserverId> = tracker.update().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, [keep]);

    for top in [300.0, 400.0, 500.0] {
        tracker.set_viewport(viewport_at(top));
        let mut saw_gone = false;
        tracker.update_with(|id, _| saw_gone |= id == gone);
        assert!(!saw_gone);
    }
    assert_eq!(tracker.len(), 1);
}

#[test]
fn churn_reuses_slots_without_leaks() {
    let mut tracker = ScrollTracker::new(viewport_at(0.0));
    let mut stale = Vec::new();
    for round in 0..50 {
        let ids: Vec<ObserverId> = (0..8)
            .map(|i| tracker.observe(card(100.0 * f64::from(i + round))))
            .collect();
        assert_eq!(tracker.len(), 8);
        assert_eq!(tracker.update().len(), 8);
        for &old in &stale {
            assert!(!tracker.is_alive(old));
        }
        for &id in &ids {
            assert!(tracker.unobserve(id));
        }
        assert!(tracker.is_empty());
        stale.extend(ids);
    }
}

#[test]
fn out_of_range_progress_is_emitted_unclamped() {
    let mut tracker = ScrollTracker::with_window(viewport_at(0.0), ScrollWindow::ENTER_EXIT);
    let below = tracker.observe(card(2000.0));
    let changes = tracker.update();
    assert_eq!(changes[0].0, below);
    assert!(changes[0].1.value() < 0.0);
    assert_eq!(changes[0].1.clamped(), 0.0);
}

#[test]
fn visibility_follows_scroll() {
    let mut tracker = ScrollTracker::new(viewport_at(0.0));
    let id = tracker.observe(card(700.0));
    // 68px of 240px visible.
    let f = tracker.visible_fraction(id).unwrap();
    assert!((f - 68.0 / 240.0).abs() < 1e-12);
    tracker.set_viewport(viewport_at(700.0));
    assert_eq!(tracker.visible_fraction(id), Some(1.0));
    assert!(tracker.unobserve(id));
    assert_eq!(tracker.visible_fraction(id), None);
}

#[test]
fn resizing_the_viewport_recomputes_every_observer() {
    let tops = [100.0, 600.0, 1100.0];
    let mut tracker = ScrollTracker::new(viewport_at(0.0));
    let ids: Vec<ObserverId> = tops.iter().map(|&t| tracker.observe(card(t))).collect();
    let _ = tracker.update();

    // Same scroll position, shorter then taller window.
    for height in [500.0, 1200.0] {
        let vp = Rect::new(0.0, 0.0, 1024.0, height);
        tracker.set_viewport(vp);
        let changes = tracker.update();
        assert_eq!(changes.len(), ids.len(), "height {height}");
        for (id, progress) in changes {
            let i = ids.iter().position(|&x| x == id).unwrap();
            let want = expected(card(tops[i]), vp);
            assert!((progress.value() - want).abs() < 1e-12, "height {height}");
        }
    }
}

#[cfg(feature = "serde")]
mod serde_config {
    use vantage_scroll::{Edge, ScrollWindow};

    #[test]
    fn windows_deserialize_from_edges() {
        let window: ScrollWindow = serde_json::from_str(
            r#"{
                "start": { "element": 0.0, "viewport": 1.0 },
                "end": { "element": 1.0, "viewport": 1.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(window, ScrollWindow::ENTER);
        assert_eq!(window.end, Edge::new(1.0, 1.0));
    }

    #[test]
    fn windows_round_trip() {
        let text = serde_json::to_string(&ScrollWindow::EXIT).unwrap();
        let back: ScrollWindow = serde_json::from_str(&text).unwrap();
        assert_eq!(back, ScrollWindow::EXIT);
    }
}
