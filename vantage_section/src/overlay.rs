// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay hit targets and click propagation.
//!
//! The overlay is a small fixed tree:
//!
//! ```text
//! Backdrop
//! └── Content
//!     ├── Prev
//!     ├── Next
//!     └── Close
//! ```
//!
//! A click on a node bubbles from that node towards the backdrop. The content
//! node stops propagation, so clicks inside the content area (including on
//! its controls) never reach the backdrop's close handler.

/// Where inside the open overlay a click landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayTarget {
    /// The dimmed area around the content. Closes the overlay.
    Backdrop,
    /// Anywhere in the content panel that is not a control.
    Content,
    /// The "previous" control.
    Prev,
    /// The "next" control.
    Next,
    /// The explicit close control.
    Close,
}

impl OverlayTarget {
    /// Bubble path from this target to the root.
    pub(crate) fn bubble_path(self) -> &'static [Self] {
        match self {
            Self::Backdrop => &[Self::Backdrop],
            Self::Content => &[Self::Content, Self::Backdrop],
            Self::Prev => &[Self::Prev, Self::Content, Self::Backdrop],
            Self::Next => &[Self::Next, Self::Content, Self::Backdrop],
            Self::Close => &[Self::Close, Self::Content, Self::Backdrop],
        }
    }
}

/// What a handler tells the bubbling walk to do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Keep bubbling.
    Continue,
    /// Stop before reaching ancestors.
    Stop,
}

/// Walks `target`'s bubble path, calling `handler` until it returns
/// [`Outcome::Stop`].
pub(crate) fn bubble(target: OverlayTarget, mut handler: impl FnMut(OverlayTarget) -> Outcome) {
    for &node in target.bubble_path() {
        if handler(node) == Outcome::Stop {
            return;
        }
    }
}

/// Keys the overlay responds to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Step to the next item.
    ArrowRight,
    /// Step to the previous item.
    ArrowLeft,
    /// Close the overlay.
    Escape,
}

/// The item currently shown in an open overlay.
#[derive(Debug)]
pub struct Overlay<'a, T> {
    /// Index of the item within the section.
    pub index: usize,
    /// Number of items in the section.
    pub len: usize,
    /// The item itself.
    pub item: &'a T,
}

impl<T> Clone for Overlay<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Overlay<'_, T> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Outcome, OverlayTarget, bubble};

    fn visited(target: OverlayTarget, stop_at: Option<OverlayTarget>) -> Vec<OverlayTarget> {
        let mut seen = Vec::new();
        bubble(target, |node| {
            seen.push(node);
            if Some(node) == stop_at {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        seen
    }

    #[test]
    fn controls_bubble_through_content_to_backdrop() {
        assert_eq!(
            visited(OverlayTarget::Next, None),
            [OverlayTarget::Next, OverlayTarget::Content, OverlayTarget::Backdrop]
        );
    }

    #[test]
    fn stop_prevents_ancestors() {
        assert_eq!(
            visited(OverlayTarget::Prev, Some(OverlayTarget::Content)),
            [OverlayTarget::Prev, OverlayTarget::Content]
        );
        assert_eq!(
            visited(OverlayTarget::Backdrop, Some(OverlayTarget::Content)),
            [OverlayTarget::Backdrop]
        );
    }
}
