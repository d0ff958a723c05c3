// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::HashMap;
use kurbo::Rect;
use vantage_carousel::{Carousel, Command};
use vantage_scroll::{ObserverId, Progress, RevealLatch, ScrollTracker};
use vantage_timing::{Entrance, EntranceFrame};

use crate::config::{ConfigError, SectionConfig};
use crate::motion::{CardMotion, card_motions};
use crate::overlay::{self, Key, Outcome, Overlay, OverlayTarget};

/// Visual state of one card, produced whenever its scroll progress changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardFrame {
    /// Index of the card within the section.
    pub index: usize,
    /// Raw scroll progress the frame was computed from.
    pub progress: Progress,
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Opacity in the range of the opacity curve (normally `[0, 1]`).
    pub opacity: f64,
    /// Whether the card has been revealed since it was mounted.
    pub revealed: bool,
    /// Whether this frame is the one that revealed the card.
    pub newly_revealed: bool,
}

#[derive(Clone, Debug)]
struct Card {
    motion: CardMotion,
    observer: Option<ObserverId>,
    reveal: RevealLatch,
    frame: Option<CardFrame>,
}

/// Wires a list of items to scroll-linked cards and one detail overlay.
///
/// The section owns:
/// - one [`Carousel`] over the items, shared by every card;
/// - one scroll observer per *mounted* card, so each card moves according to
///   its own position on the page;
/// - one [`CardMotion`] per card, built once from the [`SectionConfig`].
///
/// The item list is fixed at construction. Caller errors such as clicking an
/// unknown card or opening an empty section are logged and ignored.
#[derive(Debug)]
pub struct Section<T> {
    carousel: Carousel<T>,
    cards: Vec<Card>,
    tracker: ScrollTracker,
    by_observer: HashMap<ObserverId, usize>,
    entrance: Entrance,
    errors: Vec<ConfigError>,
}

impl<T> Section<T> {
    /// Builds a section over `items`.
    ///
    /// Curves in `config` are validated here. Invalid curves are reported via
    /// `tracing` and [`config_errors`](Self::config_errors), and replaced by
    /// static values so the section still renders its content.
    pub fn new(items: Vec<T>, config: &SectionConfig) -> Self {
        let mut errors = Vec::new();
        let motions = card_motions(config, items.len(), &mut errors);
        let cards = motions
            .into_iter()
            .map(|motion| Card {
                motion,
                observer: None,
                reveal: RevealLatch::new(config.reveal_threshold),
                frame: None,
            })
            .collect();
        tracing::debug!(len = items.len(), "section created");
        Self {
            carousel: Carousel::new(items),
            cards,
            tracker: ScrollTracker::with_window(Rect::ZERO, config.window),
            by_observer: HashMap::new(),
            entrance: config.entrance,
            errors,
        }
    }

    /// Returns the items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.carousel.items()
    }

    /// Returns the number of items (and cards).
    #[must_use]
    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    /// Returns `true` if the section has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carousel.is_empty()
    }

    /// Configuration problems found at construction.
    #[must_use]
    pub fn config_errors(&self) -> &[ConfigError] {
        &self.errors
    }

    /// Returns the carousel state backing the overlay.
    #[must_use]
    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    /// Returns the motion curves of card `index`.
    #[must_use]
    pub fn card_motion(&self, index: usize) -> Option<&CardMotion> {
        self.cards.get(index).map(|c| &c.motion)
    }

    // --- scroll-linked cards ---

    /// Starts tracking card `index` at page-space `bounds`.
    ///
    /// Mounting an already mounted card only updates its bounds. Returns
    /// `false` for unknown cards.
    pub fn mount_card(&mut self, index: usize, bounds: Rect) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            tracing::warn!(index, len = self.cards.len(), "mount of unknown card ignored");
            return false;
        };
        if let Some(id) = card.observer {
            return self.tracker.set_bounds(id, bounds);
        }
        let id = self.tracker.observe(bounds);
        card.observer = Some(id);
        card.reveal.reset();
        card.frame = None;
        self.by_observer.insert(id, index);
        tracing::trace!(index, ?id, "card mounted");
        true
    }

    /// Stops tracking card `index`.
    ///
    /// Deregistration is synchronous: no frame for this card is produced after
    /// this returns, until it is mounted again. Returns `false` if the card was
    /// not mounted.
    pub fn unmount_card(&mut self, index: usize) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        let Some(id) = card.observer.take() else {
            return false;
        };
        card.frame = None;
        self.by_observer.remove(&id);
        self.tracker.unobserve(id);
        tracing::trace!(index, ?id, "card unmounted");
        true
    }

    /// Returns `true` if card `index` is mounted.
    #[must_use]
    pub fn is_mounted(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|c| c.observer.is_some())
    }

    /// Updates the bounds of a mounted card after a layout shift.
    ///
    /// The new position takes effect on the next [`refresh`](Self::refresh) or
    /// [`on_scroll`](Self::on_scroll).
    pub fn set_card_bounds(&mut self, index: usize, bounds: Rect) -> bool {
        match self.cards.get(index).and_then(|c| c.observer) {
            Some(id) => self.tracker.set_bounds(id, bounds),
            None => false,
        }
    }

    /// Handles a scroll or resize: moves the viewport and recomputes cards.
    ///
    /// Returns a frame for every mounted card whose progress changed.
    pub fn on_scroll(&mut self, viewport: Rect) -> Vec<CardFrame> {
        self.tracker.set_viewport(viewport);
        self.refresh()
    }

    /// Recomputes cards whose geometry changed since the last refresh.
    pub fn refresh(&mut self) -> Vec<CardFrame> {
        let changes = self.tracker.update();
        let mut frames = Vec::with_capacity(changes.len());
        for (id, progress) in changes {
            let Some(&index) = self.by_observer.get(&id) else {
                continue;
            };
            let fraction = self.tracker.visible_fraction(id).unwrap_or(0.0);
            let card = &mut self.cards[index];
            let newly_revealed = card.reveal.update(fraction);
            let (offset_y, opacity) = card.motion.sample(progress);
            let frame = CardFrame {
                index,
                progress,
                offset_y,
                opacity,
                revealed: card.reveal.is_revealed(),
                newly_revealed,
            };
            card.frame = Some(frame);
            frames.push(frame);
        }
        frames
    }

    /// Latest frame of card `index`, if it is mounted and has been computed.
    #[must_use]
    pub fn card_frame(&self, index: usize) -> Option<CardFrame> {
        self.cards.get(index).and_then(|c| c.frame)
    }

    /// Entrance frame of a revealed card, `elapsed` time after its reveal.
    ///
    /// Returns `None` until the card has been revealed.
    #[must_use]
    pub fn entrance_frame(&self, index: usize, elapsed: Duration) -> Option<EntranceFrame> {
        let card = self.cards.get(index)?;
        card.reveal
            .is_revealed()
            .then(|| self.entrance.sample(index, elapsed))
    }

    // --- overlay ---

    /// Returns `true` while the detail overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.carousel.is_open()
    }

    /// Revision of the overlay state; changes whenever it must re-render.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.carousel.revision()
    }

    /// What the overlay should show, or `None` when closed.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay<'_, T>> {
        let (index, item) = self.carousel.active()?;
        Some(Overlay {
            index,
            len: self.carousel.len(),
            item,
        })
    }

    /// Handles a click on card `index`: opens the overlay on it.
    ///
    /// Returns whether the overlay state changed.
    pub fn on_card_click(&mut self, index: usize) -> bool {
        self.dispatch(Command::Open(index))
    }

    /// Handles the overlay's "next" control.
    pub fn on_next(&mut self) -> bool {
        self.dispatch(Command::Next)
    }

    /// Handles the overlay's "previous" control.
    pub fn on_prev(&mut self) -> bool {
        self.dispatch(Command::Prev)
    }

    /// Handles an explicit close.
    pub fn on_close(&mut self) -> bool {
        self.dispatch(Command::Close)
    }

    /// Handles a click inside the open overlay.
    ///
    /// The click bubbles from `target` towards the backdrop. Controls act and
    /// let it continue; the content area stops it, so only a click directly on
    /// the backdrop closes the overlay.
    pub fn on_overlay_click(&mut self, target: OverlayTarget) -> bool {
        if !self.carousel.is_open() {
            tracing::debug!(?target, "overlay click while closed ignored");
            return false;
        }
        let before = self.carousel.revision();
        overlay::bubble(target, |node| match node {
            OverlayTarget::Next => {
                self.dispatch(Command::Next);
                Outcome::Continue
            }
            OverlayTarget::Prev => {
                self.dispatch(Command::Prev);
                Outcome::Continue
            }
            OverlayTarget::Close => {
                self.dispatch(Command::Close);
                Outcome::Continue
            }
            OverlayTarget::Content => Outcome::Stop,
            OverlayTarget::Backdrop => {
                self.dispatch(Command::Close);
                Outcome::Stop
            }
        });
        self.carousel.revision() != before
    }

    /// Handles a key press while the overlay is open.
    pub fn on_key(&mut self, key: Key) -> bool {
        if !self.carousel.is_open() {
            return false;
        }
        self.dispatch(match key {
            Key::ArrowRight => Command::Next,
            Key::ArrowLeft => Command::Prev,
            Key::Escape => Command::Close,
        })
    }

    fn dispatch(&mut self, command: Command) -> bool {
        match self.carousel.apply(command) {
            Ok(changed) => {
                if changed {
                    tracing::debug!(
                        ?command,
                        open = self.carousel.is_open(),
                        selected = self.carousel.selected(),
                        "overlay transition"
                    );
                }
                changed
            }
            Err(err) => {
                tracing::warn!(%err, ?command, "overlay command ignored");
                false
            }
        }
    }
}
