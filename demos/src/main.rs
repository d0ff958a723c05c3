// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of a services section.
//!
//! Tracks the hero banner on its own, then mounts four cards, scrolls the page
//! in steps and prints the frames each card receives. Finally it opens the
//! detail overlay and pages through it.
//!
//! Run:
//! - `cargo run -p vantage_demos`
//! - `RUST_LOG=vantage_section=debug cargo run -p vantage_demos` to see transitions

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use vantage_scroll::{RevealLatch, ScrollTracker};
use vantage_section::{Cascade, Key, OverlayTarget, Section, SectionConfig};

const SERVICES: [&str; 4] = [
    "Student visas",
    "Work permits",
    "Permanent residency",
    "Citizenship",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    hero();

    let config = SectionConfig {
        cascade: Cascade::ByPosition,
        ..SectionConfig::default()
    };
    let mut section = Section::new(SERVICES.to_vec(), &config);

    // Two columns, two rows, starting one screen below the hero.
    for i in 0..SERVICES.len() {
        let x = if i % 2 == 0 { 40.0 } else { 660.0 };
        let y = if i < 2 { 900.0 } else { 1300.0 };
        section.mount_card(i, Rect::new(x, y, x + 580.0, y + 360.0));
    }
    tracing::info!(cards = section.len(), "services section mounted");

    println!("-- scrolling --");
    for top in (0..=1600).step_by(200) {
        let viewport = Rect::new(0.0, f64::from(top), 1280.0, f64::from(top) + 800.0);
        for frame in section.on_scroll(viewport) {
            println!(
                "scroll {top:>4}: card {} p={:+.3} y={:>7.2} opacity={:.2}{}",
                frame.index,
                frame.progress.value(),
                frame.offset_y,
                frame.opacity,
                if frame.newly_revealed { " (revealed)" } else { "" },
            );
        }
    }

    println!("-- overlay --");
    section.on_card_click(3);
    show(&section);
    section.on_overlay_click(OverlayTarget::Next);
    show(&section);
    section.on_key(Key::ArrowLeft);
    show(&section);
    section.on_overlay_click(OverlayTarget::Content);
    show(&section);
    section.on_overlay_click(OverlayTarget::Backdrop);
    show(&section);
}

/// A single banner observed directly, outside any section.
fn hero() {
    let banner = Rect::new(0.0, 0.0, 1280.0, 600.0);
    let mut tracker = ScrollTracker::new(Rect::new(0.0, 0.0, 1280.0, 800.0));
    let id = tracker.observe(banner);
    let mut latch = RevealLatch::default();

    println!("-- hero --");
    for top in (0..=600).step_by(150) {
        let top = f64::from(top);
        tracker.set_viewport(Rect::new(0.0, top, 1280.0, top + 800.0));
        for (_, progress) in tracker.update() {
            let fraction = tracker.visible_fraction(id).unwrap_or(0.0);
            let revealed = latch.update(fraction);
            println!(
                "scroll {top:>4}: hero p={:.3} visible={fraction:.2}{}",
                progress.value(),
                if revealed { " (revealed)" } else { "" },
            );
        }
    }
    tracker.unobserve(id);
}

fn show(section: &Section<&str>) {
    match section.overlay() {
        Some(overlay) => println!(
            "rev {}: showing {}/{} {:?}",
            section.revision(),
            overlay.index + 1,
            overlay.len,
            overlay.item
        ),
        None => println!("rev {}: closed", section.revision()),
    }
}
