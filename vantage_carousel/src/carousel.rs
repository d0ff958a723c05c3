// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::command::Command;

/// Error returned when a carousel transition is rejected.
///
/// A rejected transition never mutates the carousel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CarouselError {
    /// The carousel has no items, so nothing can be shown.
    #[error("cannot open an empty carousel")]
    Empty,
    /// The requested index is not in `0..len`.
    #[error("index {index} is out of range for a carousel of {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items in the carousel.
        len: usize,
    },
}

/// Selected index plus open/closed flag over a fixed item list.
///
/// States are **Closed** (initial, `selected == 0`) and **Open(selected)**.
/// `selected` is always `< len()` for non-empty carousels, in both states.
///
/// The item list is fixed at construction; there is no way to add or remove
/// items afterwards, which keeps `selected` valid without re-clamping.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    items: Box<[T]>,
    selected: usize,
    open: bool,
    revision: u64,
}

impl<T> Carousel<T> {
    /// Creates a closed carousel over `items`, with index `0` selected.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
            selected: 0,
            open: false,
            revision: 0,
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the selected index.
    ///
    /// This is meaningful while closed too: it is where the next
    /// [`open`](Self::open) of the same index resumes.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the selected item, whether or not the carousel is open.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Returns `true` while the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the index and item to show in the overlay, or `None` if closed.
    #[must_use]
    pub fn active(&self) -> Option<(usize, &T)> {
        if !self.open {
            return None;
        }
        self.items.get(self.selected).map(|item| (self.selected, item))
    }

    /// Returns the revision counter.
    ///
    /// The counter is local to this carousel and bumps whenever the open flag
    /// or the selected index changes. No-op transitions leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Opens the overlay on `index`, from any state.
    ///
    /// # Errors
    ///
    /// - [`CarouselError::Empty`] if there are no items.
    /// - [`CarouselError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// On error the carousel is left unchanged.
    pub fn open(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.items.len();
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        if self.open && self.selected == index {
            return Ok(());
        }
        self.selected = index;
        self.open = true;
        self.bump_revision();
        Ok(())
    }

    /// Closes the overlay, keeping the selected index.
    ///
    /// Returns `false` if the carousel was already closed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.bump_revision();
        true
    }

    /// Advances to the next item, wrapping from the last to the first.
    ///
    /// Returns the new selected index, or `None` if the carousel is closed.
    /// With a single item this stays on index `0` and the overlay stays open.
    #[allow(
        clippy::should_implement_trait,
        reason = "navigation step, not an iterator"
    )]
    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    /// Steps back to the previous item, wrapping from the first to the last.
    ///
    /// Returns the new selected index, or `None` if the carousel is closed.
    pub fn prev(&mut self) -> Option<usize> {
        let len = self.items.len();
        self.step(len.saturating_sub(1))
    }

    /// Applies a [`Command`], returning whether the state changed.
    ///
    /// `Next` and `Prev` on a closed carousel are accepted no-ops.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`open`](Self::open).
    pub fn apply(&mut self, command: Command) -> Result<bool, CarouselError> {
        let before = self.revision;
        match command {
            Command::Open(index) => self.open(index)?,
            Command::Close => {
                self.close();
            }
            Command::Next => {
                self.next();
            }
            Command::Prev => {
                self.prev();
            }
        }
        Ok(self.revision != before)
    }

    /// Moves `forward` steps ahead modulo `len`.
    ///
    /// `prev` is expressed as `len - 1` steps forward so the arithmetic never
    /// goes negative.
    fn step(&mut self, forward: usize) -> Option<usize> {
        if !self.open {
            return None;
        }
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let next = (self.selected + forward % len) % len;
        if next != self.selected {
            self.selected = next;
            self.bump_revision();
        }
        Some(next)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for Carousel<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Carousel, CarouselError};
    use crate::Command;

    #[test]
    fn four_item_walkthrough() {
        let mut c = Carousel::new(vec!['a', 'b', 'c', 'd']);
        assert_eq!((c.is_open(), c.selected()), (false, 0));
        c.open(2).unwrap();
        assert_eq!((c.is_open(), c.selected()), (true, 2));
        assert_eq!(c.next(), Some(3));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.prev(), Some(3));
        assert_eq!(c.active(), Some((3, &'d')));
    }

    #[test]
    fn single_item_next_stays_open_on_zero() {
        let mut c = Carousel::new(vec!["only"]);
        c.open(0).unwrap();
        let rev = c.revision();
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.prev(), Some(0));
        assert!(c.is_open());
        assert_eq!(c.revision(), rev);
    }

    #[test]
    fn empty_carousel_rejects_open_without_change() {
        let mut c = Carousel::<u8>::new(Vec::new());
        assert_eq!(c.open(0), Err(CarouselError::Empty));
        assert!(!c.is_open());
        assert_eq!(c.selected(), 0);
        assert_eq!(c.revision(), 0);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert!(!c.close());
    }

    #[test]
    fn out_of_range_open_is_rejected() {
        let mut c = Carousel::new(vec![1, 2, 3]);
        c.open(1).unwrap();
        let rev = c.revision();
        assert_eq!(
            c.open(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c.active(), Some((1, &2)));
        assert_eq!(c.revision(), rev);
    }

    #[test]
    fn navigation_requires_open() {
        let mut c = Carousel::new(vec![1, 2, 3]);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn close_keeps_selection_and_is_idempotent() {
        let mut c = Carousel::new(vec![1, 2, 3]);
        c.open(2).unwrap();
        assert!(c.close());
        assert!(!c.close());
        assert_eq!(c.selected(), 2);
        assert_eq!(c.selected_item(), Some(&3));
        assert_eq!(c.active(), None);
    }

    #[test]
    fn apply_reports_changes() {
        let mut c: Carousel<u32> = (0..5).collect();
        assert_eq!(c.apply(Command::Next), Ok(false));
        assert_eq!(c.apply(Command::Open(4)), Ok(true));
        assert_eq!(c.apply(Command::Open(4)), Ok(false));
        assert_eq!(c.apply(Command::Next), Ok(true));
        assert_eq!(c.selected(), 0);
        assert_eq!(c.apply(Command::Close), Ok(true));
        assert_eq!(c.apply(Command::Close), Ok(false));
        assert_eq!(
            c.apply(Command::Open(9)),
            Err(CarouselError::IndexOutOfRange { index: 9, len: 5 })
        );
    }
}
