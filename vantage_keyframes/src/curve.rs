// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;

/// A single `(input, output)` control point of a [`Keyframes`] curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Progress at which `output` is reached.
    pub input: f64,
    /// Value produced at `input`.
    pub output: f64,
}

impl Keyframe {
    /// Creates a keyframe.
    #[must_use]
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

impl From<(f64, f64)> for Keyframe {
    fn from((input, output): (f64, f64)) -> Self {
        Self { input, output }
    }
}

/// Error returned when a keyframe curve cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// A curve needs at least two keyframes.
    #[error("a keyframe curve needs at least two keyframes, got {len}")]
    TooFewKeyframes {
        /// Number of keyframes supplied.
        len: usize,
    },
    /// Keyframe inputs must be non-decreasing.
    #[error("keyframe {index} has an input smaller than its predecessor")]
    NonMonotonic {
        /// Index of the first keyframe whose input goes backwards.
        index: usize,
    },
    /// Keyframe inputs and outputs must be finite.
    #[error("keyframe {index} has a non-finite input or output")]
    NonFinite {
        /// Index of the offending keyframe.
        index: usize,
    },
}

/// Piecewise-linear curve over normalized progress.
///
/// Invariants, established by every constructor:
/// - at least two keyframes;
/// - inputs are non-decreasing;
/// - all inputs and outputs are finite.
///
/// Curves are immutable once built; derive new curves with [`Keyframes::scaled`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")
)]
pub struct Keyframes {
    frames: SmallVec<[Keyframe; 4]>,
}

impl Keyframes {
    /// Builds a curve from `(input, output)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] if fewer than two pairs are supplied, if any
    /// input is smaller than the one before it, or if any value is NaN or
    /// infinite.
    pub fn new<I, K>(pairs: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = K>,
        K: Into<Keyframe>,
    {
        let frames: SmallVec<[Keyframe; 4]> = pairs.into_iter().map(Into::into).collect();
        if frames.len() < 2 {
            return Err(CurveError::TooFewKeyframes { len: frames.len() });
        }
        for (index, frame) in frames.iter().enumerate() {
            if !frame.input.is_finite() || !frame.output.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
        }
        if let Some(index) = frames
            .windows(2)
            .position(|pair| pair[1].input < pair[0].input)
        {
            return Err(CurveError::NonMonotonic { index: index + 1 });
        }
        Ok(Self { frames })
    }

    /// A flat curve that yields `value` for every progress.
    ///
    /// Non-finite values are replaced by `0.0` so the curve invariants hold.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        let mut frames = SmallVec::new();
        frames.push(Keyframe::new(0.0, value));
        frames.push(Keyframe::new(1.0, value));
        Self { frames }
    }

    /// Builds a curve, falling back to [`Keyframes::constant`] on error.
    ///
    /// The error, if any, is returned alongside so the caller can report it.
    pub fn or_constant<I, K>(pairs: I, fallback: f64) -> (Self, Option<CurveError>)
    where
        I: IntoIterator<Item = K>,
        K: Into<Keyframe>,
    {
        match Self::new(pairs) {
            Ok(curve) => (curve, None),
            Err(err) => (Self::constant(fallback), Some(err)),
        }
    }

    /// The default parallax offset curve: `0 → 100`, `1 → -100`.
    #[must_use]
    pub fn default_offset() -> Self {
        Self::from_valid(&[(0.0, 100.0), (1.0, -100.0)])
    }

    /// The default opacity curve: `0 → 0`, `0.2 → 1`, `0.8 → 1`, `1 → 0`.
    #[must_use]
    pub fn default_opacity() -> Self {
        Self::from_valid(&[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)])
    }

    fn from_valid(pairs: &[(f64, f64)]) -> Self {
        Self {
            frames: pairs.iter().copied().map(Keyframe::from).collect(),
        }
    }

    /// Returns the keyframes in input order.
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.frames
    }

    /// Returns the number of keyframes (always at least two).
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; curves hold at least two keyframes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns `true` if every keyframe has the same output.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        let (lo, hi) = self.output_range();
        lo == hi
    }

    /// Returns the smallest and largest output of the curve.
    ///
    /// Every value produced by [`Keyframes::evaluate`] lies within this range.
    #[must_use]
    pub fn output_range(&self) -> (f64, f64) {
        self.frames
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), k| {
                (lo.min(k.output), hi.max(k.output))
            })
    }

    /// Returns a copy of this curve with every output multiplied by `factor`.
    ///
    /// A non-finite `factor` leaves the curve unchanged.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        if !factor.is_finite() {
            return self.clone();
        }
        Self {
            frames: self
                .frames
                .iter()
                .map(|k| Keyframe::new(k.input, k.output * factor))
                .collect(),
        }
    }

    /// Evaluates the curve at `progress`.
    ///
    /// `progress` is clamped to `[0, 1]` first (NaN counts as `0`). Values at or
    /// before the first keyframe return its output; values at or after the last
    /// keyframe return its output. Between keyframes the output is linearly
    /// interpolated. Two keyframes sharing an input act as a step: the earlier
    /// output wins at that exact input.
    #[must_use]
    pub fn evaluate(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        if p <= first.input {
            return first.output;
        }
        if p >= last.input {
            return last.output;
        }
        for pair in self.frames.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if p <= b.input {
                let span = b.input - a.input;
                if span == 0.0 {
                    return a.output;
                }
                let t = (p - a.input) / span;
                return a.output + (b.output - a.output) * t;
            }
        }
        last.output
    }
}

impl TryFrom<Vec<[f64; 2]>> for Keyframes {
    type Error = CurveError;

    fn try_from(pairs: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(pairs.into_iter().map(|[input, output]| (input, output)))
    }
}

impl From<Keyframes> for Vec<[f64; 2]> {
    fn from(curve: Keyframes) -> Self {
        curve
            .frames
            .iter()
            .map(|k| [k.input, k.output])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveError, Keyframe, Keyframes};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn offset_curve_scenario() {
        let curve = Keyframes::new([(0.0, 100.0), (1.0, -100.0)]).unwrap();
        assert!(close(curve.evaluate(0.0), 100.0));
        assert!(close(curve.evaluate(0.5), 0.0));
        assert!(close(curve.evaluate(1.0), -100.0));
    }

    #[test]
    fn opacity_curve_scenario() {
        let curve = Keyframes::default_opacity();
        assert!(close(curve.evaluate(0.1), 0.5));
        assert!(close(curve.evaluate(0.5), 1.0));
        assert!(close(curve.evaluate(0.9), 0.5));
    }

    #[test]
    fn progress_outside_unit_range_clamps() {
        let curve = Keyframes::default_offset();
        assert!(close(curve.evaluate(-0.25), 100.0));
        assert!(close(curve.evaluate(1.75), -100.0));
        assert!(close(curve.evaluate(f64::NAN), 100.0));
    }

    #[test]
    fn inner_domain_clamps_to_boundary_outputs() {
        let curve = Keyframes::new([(0.25, 2.0), (0.75, 4.0)]).unwrap();
        assert!(close(curve.evaluate(0.0), 2.0));
        assert!(close(curve.evaluate(0.5), 3.0));
        assert!(close(curve.evaluate(1.0), 4.0));
    }

    #[test]
    fn duplicate_inputs_step_without_dividing_by_zero() {
        let curve = Keyframes::new([(0.0, 0.0), (0.5, 1.0), (0.5, 5.0), (1.0, 5.0)]).unwrap();
        assert!(close(curve.evaluate(0.5), 1.0));
        assert!(close(curve.evaluate(0.75), 5.0));
        assert!(curve.evaluate(0.49) < 1.0);
    }

    #[test]
    fn validation_rejects_degenerate_curves() {
        assert_eq!(
            Keyframes::new(core::iter::empty::<Keyframe>()),
            Err(CurveError::TooFewKeyframes { len: 0 })
        );
        assert_eq!(
            Keyframes::new([(0.0, 1.0)]),
            Err(CurveError::TooFewKeyframes { len: 1 })
        );
        assert_eq!(
            Keyframes::new([(0.0, 1.0), (0.6, 2.0), (0.4, 3.0)]),
            Err(CurveError::NonMonotonic { index: 2 })
        );
        assert_eq!(
            Keyframes::new([(0.0, 1.0), (1.0, f64::INFINITY)]),
            Err(CurveError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn or_constant_falls_back_and_reports() {
        let (curve, err) = Keyframes::or_constant([(1.0, 0.0), (0.0, 1.0)], 1.0);
        assert_eq!(err, Some(CurveError::NonMonotonic { index: 1 }));
        assert!(curve.is_constant());
        assert!(close(curve.evaluate(0.3), 1.0));

        let (curve, err) = Keyframes::or_constant([(0.0, 0.0), (1.0, 1.0)], 1.0);
        assert_eq!(err, None);
        assert!(!curve.is_constant());
    }

    #[test]
    fn scaled_multiplies_outputs() {
        let curve = Keyframes::default_offset().scaled(3.0);
        assert!(close(curve.evaluate(0.0), 300.0));
        assert!(close(curve.evaluate(1.0), -300.0));
        assert_eq!(curve.output_range(), (-300.0, 300.0));
    }

    #[test]
    fn constant_sanitizes_non_finite_values() {
        let curve = Keyframes::constant(f64::NAN);
        assert!(close(curve.evaluate(0.5), 0.0));
        assert_eq!(curve.len(), 2);
    }
}
