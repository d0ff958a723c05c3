// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section configuration and setup-time validation.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use vantage_keyframes::CurveError;
use vantage_scroll::{RevealLatch, ScrollWindow};
use vantage_timing::Entrance;

/// How card offsets vary across a section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Cascade {
    /// Every card uses the configured offset curve as is.
    #[default]
    None,
    /// Card `i` multiplies the offset curve by `i + 1`, so later cards travel
    /// further and the grid fans out while scrolling.
    ByPosition,
}

/// Configuration supplied when a section is built.
///
/// Curves are given as raw `(input, output)` pairs and validated once, when
/// the section is constructed; invalid curves fall back to static values
/// instead of failing construction. With the `serde` feature, every field is
/// optional in serialized form and defaults to the values below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct SectionConfig {
    /// Vertical offset in pixels over scroll progress. Default `0 → 100, 1 → -100`.
    pub offset: Vec<(f64, f64)>,
    /// Opacity over scroll progress. Default `0 → 0, 0.2 → 1, 0.8 → 1, 1 → 0`.
    pub opacity: Vec<(f64, f64)>,
    /// Per-card scaling of the offset curve.
    pub cascade: Cascade,
    /// Which intersections define progress for each card.
    pub window: ScrollWindow,
    /// Visible share of a card that triggers its entrance.
    pub reveal_threshold: f64,
    /// Entrance played once a card is revealed.
    pub entrance: Entrance,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            offset: vec![(0.0, 100.0), (1.0, -100.0)],
            opacity: vec![(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)],
            cascade: Cascade::None,
            window: ScrollWindow::ENTER_EXIT,
            reveal_threshold: RevealLatch::DEFAULT_THRESHOLD,
            entrance: Entrance::default(),
        }
    }
}

/// The visual property a curve drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MotionProperty {
    /// Vertical offset.
    Offset,
    /// Opacity.
    Opacity,
}

impl MotionProperty {
    /// Value used when this property's curve is unusable.
    ///
    /// Both leave the card at rest and fully visible.
    #[must_use]
    pub const fn resting_value(self) -> f64 {
        match self {
            Self::Offset => 0.0,
            Self::Opacity => 1.0,
        }
    }
}

impl fmt::Display for MotionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Offset => "offset",
            Self::Opacity => "opacity",
        })
    }
}

/// A configuration problem detected while building a section.
///
/// These never prevent a section from working; the affected animation is
/// replaced by a static value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A motion curve was rejected.
    #[error("invalid {property} curve, animation disabled: {source}")]
    Curve {
        /// Which property the curve drives.
        property: MotionProperty,
        /// Why the curve was rejected.
        source: CurveError,
    },
}
