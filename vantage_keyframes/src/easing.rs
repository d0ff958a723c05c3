// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing functions for time-driven tweens.
///
/// Scroll-linked motion is linear by construction (the keyframe curve *is* the
/// easing); these are used where a value is driven by elapsed time instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Cubic ease-out: fast start, gentle landing.
    EaseOut,
    /// Smoothstep: gentle start and landing.
    EaseInOut,
}

impl Easing {
    /// Maps a linear fraction `t` to an eased fraction.
    ///
    /// `t` is clamped to `[0, 1]`; the result is in `[0, 1]` with
    /// `apply(0) == 0` and `apply(1) == 1` for every easing.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}
