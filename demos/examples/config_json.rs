// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section configuration and overlay commands from JSON.
//!
//! Run:
//! - `cargo run -p vantage_demos --example config_json`

use vantage_carousel::{Carousel, Command};
use vantage_section::{Section, SectionConfig};

const CONFIG: &str = r#"{
    "offset": [[0, 300], [0.5, 0], [1, -300]],
    "opacity": [[0, 0], [0.3, 1]],
    "cascade": "by_position",
    "reveal_threshold": 0.2
}"#;

const BROKEN: &str = r#"{ "opacity": [[0.8, 0], [0.2, 1]] }"#;

const SCRIPT: &str = r#"[{"open": 1}, "next", "next", "prev", "close", "next"]"#;

fn main() -> Result<(), serde_json::Error> {
    let config: SectionConfig = serde_json::from_str(CONFIG)?;
    let section = Section::new(vec!["a", "b", "c"], &config);
    for i in 0..section.len() {
        if let Some(motion) = section.card_motion(i) {
            println!("card {i}: offset {:?}", motion.offset().output_range());
        }
    }

    let broken: SectionConfig = serde_json::from_str(BROKEN)?;
    let section = Section::new(vec!["a"], &broken);
    for err in section.config_errors() {
        println!("config error: {err}");
    }

    let commands: Vec<Command> = serde_json::from_str(SCRIPT)?;
    let mut carousel = Carousel::new(vec!["Study", "Work", "Migrate"]);
    for command in commands {
        match carousel.apply(command) {
            Ok(changed) => println!("{command:?}: changed={changed} active={:?}", carousel.active()),
            Err(err) => println!("{command:?}: {err}"),
        }
    }
    Ok(())
}
