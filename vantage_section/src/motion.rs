// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card scroll-linked motion.

use alloc::vec::Vec;

use vantage_keyframes::Keyframes;
use vantage_scroll::Progress;

use crate::config::{Cascade, ConfigError, MotionProperty, SectionConfig};

/// The pair of curves that turn one card's scroll progress into visuals.
#[derive(Clone, Debug, PartialEq)]
pub struct CardMotion {
    offset: Keyframes,
    opacity: Keyframes,
}

impl CardMotion {
    /// Creates motion from explicit curves.
    #[must_use]
    pub fn new(offset: Keyframes, opacity: Keyframes) -> Self {
        Self { offset, opacity }
    }

    /// Motion that never moves: offset `0`, opacity `1`.
    #[must_use]
    pub fn resting() -> Self {
        Self {
            offset: Keyframes::constant(MotionProperty::Offset.resting_value()),
            opacity: Keyframes::constant(MotionProperty::Opacity.resting_value()),
        }
    }

    /// Returns the offset curve.
    #[must_use]
    pub fn offset(&self) -> &Keyframes {
        &self.offset
    }

    /// Returns the opacity curve.
    #[must_use]
    pub fn opacity(&self) -> &Keyframes {
        &self.opacity
    }

    /// Evaluates both curves at `progress`, returning `(offset_y, opacity)`.
    ///
    /// Each curve is evaluated independently from the same progress value.
    #[must_use]
    pub fn sample(&self, progress: Progress) -> (f64, f64) {
        let p = progress.value();
        (self.offset.evaluate(p), self.opacity.evaluate(p))
    }
}

impl Default for CardMotion {
    fn default() -> Self {
        Self::new(Keyframes::default_offset(), Keyframes::default_opacity())
    }
}

fn build_curve(
    pairs: &[(f64, f64)],
    property: MotionProperty,
    errors: &mut Vec<ConfigError>,
) -> Keyframes {
    let (curve, err) = Keyframes::or_constant(pairs.iter().copied(), property.resting_value());
    if let Some(source) = err {
        let err = ConfigError::Curve { property, source };
        tracing::warn!(%err, "falling back to static card motion");
        errors.push(err);
    }
    curve
}

/// Builds one [`CardMotion`] per card from `config`.
///
/// Curves are validated once, not per card; problems are appended to `errors`.
pub(crate) fn card_motions(
    config: &SectionConfig,
    len: usize,
    errors: &mut Vec<ConfigError>,
) -> Vec<CardMotion> {
    let offset = build_curve(&config.offset, MotionProperty::Offset, errors);
    let opacity = build_curve(&config.opacity, MotionProperty::Opacity, errors);
    (0..len)
        .map(|index| {
            let offset = match config.cascade {
                Cascade::None => offset.clone(),
                Cascade::ByPosition => offset.scaled(cascade_factor(index)),
            };
            CardMotion::new(offset, opacity.clone())
        })
        .collect()
}

fn cascade_factor(index: usize) -> f64 {
    let position = u32::try_from(index).unwrap_or(u32::MAX);
    f64::from(position) + 1.0
}
