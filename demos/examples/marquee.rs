// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee and staggered entrance timing.
//!
//! Samples a logo marquee over a little more than one period, compares the
//! easing curves, and prints the entrance of three cards revealed together.
//!
//! Run:
//! - `cargo run -p vantage_demos --example marquee`

use core::time::Duration;

use vantage_keyframes::Easing;
use vantage_timing::{Entrance, Marquee};

fn main() {
    let marquee = Marquee::default();
    println!(
        "marquee: {} px every {:?}, {} copies",
        marquee.distance, marquee.period, marquee.copies
    );
    // A strip of logos 2400px wide hides the seam.
    println!("covers loop at 2400px: {}", marquee.covers_loop(2400.0));

    // Timestamps are host clock readings; here the page loaded 3s in.
    let started = Duration::from_secs(3);
    let mut task = marquee.start(started);
    for secs in [0_u64, 5, 15, 29, 30, 31, 45] {
        let now = started + Duration::from_secs(secs);
        if let Some(x) = task.offset(now) {
            println!("t={secs:>2}s x={x:>9.2}");
        }
    }
    task.cancel();
    assert_eq!(task.offset(started), None);

    for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
        let row: Vec<String> = [0.0, 0.25, 0.5, 0.75, 1.0]
            .into_iter()
            .map(|t| format!("{:.3}", easing.apply(t)))
            .collect();
        println!("{easing:?}: {}", row.join(" "));
    }

    let entrance = Entrance::default();
    for ms in (0..=1000).step_by(250) {
        let elapsed = Duration::from_millis(ms);
        let row: Vec<String> = (0..3)
            .map(|i| {
                let f = entrance.sample(i, elapsed);
                format!("[y={:>5.1} a={:.2}]", f.offset_y, f.opacity)
            })
            .collect();
        println!("t={ms:>4}ms {}", row.join(" "));
    }
}
