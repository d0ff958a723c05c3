// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer registry: per-element progress recomputed on scroll and layout.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::reveal::visible_fraction;
use crate::window::{Progress, ScrollWindow};

/// Handle to an element registered with a [`ScrollTracker`].
///
/// This is a small, copyable handle made of a slot index and a generation.
///
/// - On [`observe`](ScrollTracker::observe), a slot is allocated; fresh slots
///   start at generation `1`.
/// - On [`unobserve`](ScrollTracker::unobserve), the slot is freed and every
///   existing handle to it becomes stale.
/// - On reuse of a freed slot, its generation is incremented, so stale handles
///   never alias a newer observer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(u32, u32);

impl ObserverId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Observer {
    bounds: Rect,
    window: ScrollWindow,
    /// Last value handed out by `update`, if any.
    reported: Option<Progress>,
    dirty: bool,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    observer: Option<Observer>,
}

/// Tracks scroll progress for a set of elements against one viewport.
///
/// All geometry is in page space. The tracker is purely synchronous: geometry
/// setters only mark observers dirty, and [`update`](Self::update) recomputes
/// dirty observers and reports the ones whose progress changed.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    viewport: Rect,
    window: ScrollWindow,
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl ScrollTracker {
    /// Creates a tracker for `viewport` using [`ScrollWindow::ENTER_EXIT`].
    #[must_use]
    pub fn new(viewport: Rect) -> Self {
        Self::with_window(viewport, ScrollWindow::ENTER_EXIT)
    }

    /// Creates a tracker whose observers default to `window`.
    #[must_use]
    pub fn with_window(viewport: Rect, window: ScrollWindow) -> Self {
        Self {
            viewport,
            window,
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Returns the window used by [`observe`](Self::observe).
    #[must_use]
    pub fn default_window(&self) -> ScrollWindow {
        self.window
    }

    /// Number of live observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Registers an element with the tracker's default window.
    pub fn observe(&mut self, bounds: Rect) -> ObserverId {
        self.observe_with(bounds, self.window)
    }

    /// Registers an element with an explicit window.
    ///
    /// The new observer is reported by the next [`update`](Self::update).
    pub fn observe_with(&mut self, bounds: Rect, window: ScrollWindow) -> ObserverId {
        let observer = Observer {
            bounds,
            window,
            reported: None,
            dirty: true,
        };
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.observer = Some(observer);
            return ObserverId(idx, slot.generation);
        }
        let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 1,
            observer: Some(observer),
        });
        ObserverId(idx, 1)
    }

    /// Deregisters an element.
    ///
    /// After this returns, `id` is stale: it is never reported by
    /// [`update`](Self::update) again and all queries on it return `None`.
    /// Returns `false` if `id` was already stale.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let Some(slot) = self.slot_mut(id) else {
            tracing::trace!(?id, "unobserve on stale observer");
            return false;
        };
        slot.observer = None;
        self.free.push(id.0);
        self.live -= 1;
        true
    }

    /// Returns `true` if `id` refers to a live observer.
    #[must_use]
    pub fn is_alive(&self, id: ObserverId) -> bool {
        self.observer(id).is_some()
    }

    /// Moves the viewport (scroll) or resizes it.
    ///
    /// Every observer is recomputed on the next update. Setting the same
    /// rectangle again is a no-op.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        for observer in self.slots.iter_mut().filter_map(|s| s.observer.as_mut()) {
            observer.dirty = true;
        }
    }

    /// Updates an element's bounds after a layout shift.
    ///
    /// Returns `false` if `id` is stale.
    pub fn set_bounds(&mut self, id: ObserverId, bounds: Rect) -> bool {
        let Some(observer) = self.slot_mut(id).and_then(|s| s.observer.as_mut()) else {
            tracing::trace!(?id, "set_bounds on stale observer");
            return false;
        };
        if observer.bounds != bounds {
            observer.bounds = bounds;
            observer.dirty = true;
        }
        true
    }

    /// Returns an element's bounds.
    #[must_use]
    pub fn bounds(&self, id: ObserverId) -> Option<Rect> {
        self.observer(id).map(|o| o.bounds)
    }

    /// Returns an element's current progress, computed from current geometry.
    #[must_use]
    pub fn progress(&self, id: ObserverId) -> Option<Progress> {
        self.observer(id)
            .map(|o| o.window.progress(o.bounds, self.viewport))
    }

    /// Returns the visible share of an element's height.
    #[must_use]
    pub fn visible_fraction(&self, id: ObserverId) -> Option<f64> {
        self.observer(id)
            .map(|o| visible_fraction(o.bounds, self.viewport))
    }

    /// Recomputes dirty observers, calling `f` for each changed progress.
    ///
    /// Observers are visited in slot order. An observer is reported when it has
    /// never been reported or when its progress differs from the last report.
    pub fn update_with(&mut self, mut f: impl FnMut(ObserverId, Progress)) {
        let viewport = self.viewport;
        for (idx, slot) in (0_u32..).zip(self.slots.iter_mut()) {
            let generation = slot.generation;
            let Some(observer) = slot.observer.as_mut() else {
                continue;
            };
            if !observer.dirty {
                continue;
            }
            observer.dirty = false;
            let progress = observer.window.progress(observer.bounds, viewport);
            if observer.reported == Some(progress) {
                continue;
            }
            observer.reported = Some(progress);
            f(ObserverId(idx, generation), progress);
        }
    }

    /// Recomputes dirty observers and returns the changed progress values.
    pub fn update(&mut self) -> Vec<(ObserverId, Progress)> {
        let mut changes = Vec::new();
        self.update_with(|id, progress| changes.push((id, progress)));
        changes
    }

    fn observer(&self, id: ObserverId) -> Option<&Observer> {
        self.slots
            .get(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.observer.as_ref())
    }

    fn slot_mut(&mut self, id: ObserverId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.idx())
            .filter(|s| s.generation == id.1 && s.observer.is_some())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::ScrollTracker;
    use crate::ScrollWindow;

    fn viewport_at(top: f64) -> Rect {
        Rect::new(0.0, top, 800.0, top + 600.0)
    }

    #[test]
    fn new_observers_are_reported_once() {
        let mut tracker = ScrollTracker::new(viewport_at(0.0));
        let a = tracker.observe(Rect::new(0.0, 200.0, 100.0, 600.0));
        let changes = tracker.update();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].0, a);
        // Nothing moved: nothing to report.
        assert!(tracker.update().is_empty());
    }

    #[test]
    fn unchanged_progress_is_not_re_emitted() {
        let mut tracker = ScrollTracker::new(viewport_at(0.0));
        let _ = tracker.observe(Rect::new(0.0, 200.0, 100.0, 600.0));
        let _ = tracker.update();
        // Widening the viewport horizontally does not change vertical progress.
        tracker.set_viewport(Rect::new(0.0, 0.0, 1600.0, 600.0));
        assert!(tracker.update().is_empty());
    }

    #[test]
    fn each_observer_uses_its_own_geometry() {
        let mut tracker = ScrollTracker::new(viewport_at(0.0));
        let near = tracker.observe(Rect::new(0.0, 400.0, 100.0, 600.0));
        let far = tracker.observe(Rect::new(0.0, 1400.0, 100.0, 1600.0));
        tracker.set_viewport(viewport_at(400.0));
        let _ = tracker.update();
        let p_near = tracker.progress(near).unwrap().value();
        let p_far = tracker.progress(far).unwrap().value();
        assert_eq!(p_near, 0.75);
        assert!(p_far < 0.0);
    }

    #[test]
    fn stale_ids_never_alias_reused_slots() {
        let mut tracker = ScrollTracker::new(viewport_at(0.0));
        let a = tracker.observe(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(tracker.unobserve(a));
        assert!(!tracker.unobserve(a));
        let b = tracker.observe(Rect::new(0.0, 50.0, 10.0, 60.0));
        assert_ne!(a, b);
        assert!(!tracker.is_alive(a));
        assert!(tracker.is_alive(b));
        assert_eq!(tracker.progress(a), None);
        assert!(!tracker.set_bounds(a, Rect::ZERO));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn layout_shift_marks_only_that_observer() {
        let mut tracker = ScrollTracker::new(viewport_at(0.0));
        let a = tracker.observe(Rect::new(0.0, 200.0, 100.0, 400.0));
        let b = tracker.observe(Rect::new(0.0, 300.0, 100.0, 500.0));
        let _ = tracker.update();
        assert!(tracker.set_bounds(b, Rect::new(0.0, 350.0, 100.0, 550.0)));
        let ids: Vec<_> = tracker.update().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [b]);
        assert!(tracker.is_alive(a));
    }

    #[test]
    fn per_observer_windows() {
        let mut tracker = ScrollTracker::new(viewport_at(0.0));
        let bounds = Rect::new(0.0, 700.0, 100.0, 900.0);
        let whole = tracker.observe(bounds);
        let enter = tracker.observe_with(bounds, ScrollWindow::ENTER);
        tracker.set_viewport(viewport_at(200.0));
        assert_eq!(tracker.progress(whole).unwrap().value(), 0.125);
        assert_eq!(tracker.progress(enter).unwrap().value(), 0.5);
    }
}
