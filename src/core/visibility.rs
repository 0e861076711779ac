//! Auto-hide state machine for the player controls.
//!
//! ```text
//!            pointer enter/move              timer elapsed
//!   Hidden ───────────────────► VisibleTimed ─────────────► Hidden
//!     ▲  │ touch                   │ hover control / menu open
//!     │  ▼                         ▼
//!     └── VisiblePersistent ◄──────┘
//!          touch / pointer leave
//! ```
//!
//! A single inactivity timer is owned by the machine. Every transition drops
//! the previous timer (which cancels it) and `VisibleTimed` arms a new one.
//! Open menus keep the controls shown whatever the state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Visibility state of the player controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Shown until an explicit event hides them.
    VisiblePersistent,
    /// Shown until the inactivity timer elapses.
    VisibleTimed,
    Hidden,
}

/// Delayed-callback scheduler.
///
/// Dropping the returned handle cancels the callback if it has not run yet.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

struct Inner<T: Timer> {
    timer: T,
    delay_ms: u32,
    state: Visibility,
    speed_menu_open: bool,
    panel_open: bool,
    pending: Option<T::Handle>,
    /// Bumped on every transition; a timer callback only acts on its own.
    generation: u64,
}

impl<T: Timer> Inner<T> {
    fn controls_shown(&self) -> bool {
        self.state != Visibility::Hidden || self.speed_menu_open || self.panel_open
    }
}

/// Shared handle to the controls' visibility.
///
/// `on_change` is called with [`controls_shown`](Self::controls_shown) after
/// every transition, including ones triggered by the timer.
pub struct ControlsVisibility<T: Timer + 'static> {
    inner: Rc<RefCell<Inner<T>>>,
    on_change: Rc<dyn Fn(bool)>,
}

impl<T: Timer + 'static> Clone for ControlsVisibility<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            on_change: Rc::clone(&self.on_change),
        }
    }
}

impl<T: Timer + 'static> ControlsVisibility<T> {
    /// Controls start visible and hide after the first inactivity window.
    pub fn new(timer: T, delay_ms: u32, on_change: impl Fn(bool) + 'static) -> Self {
        let visibility = Self {
            inner: Rc::new(RefCell::new(Inner {
                timer,
                delay_ms,
                state: Visibility::Hidden,
                speed_menu_open: false,
                panel_open: false,
                pending: None,
                generation: 0,
            })),
            on_change: Rc::new(on_change),
        };
        visibility.transition(Visibility::VisibleTimed);
        visibility
    }

    #[cfg(test)]
    pub fn state(&self) -> Visibility {
        self.inner.borrow().state
    }

    pub fn controls_shown(&self) -> bool {
        self.inner.borrow().controls_shown()
    }

    #[cfg(test)]
    pub fn speed_menu_open(&self) -> bool {
        self.inner.borrow().speed_menu_open
    }

    #[cfg(test)]
    pub fn panel_open(&self) -> bool {
        self.inner.borrow().panel_open
    }

    /// Pointer entered or moved over the player surface.
    pub fn pointer_activity(&self) {
        self.transition(Visibility::VisibleTimed);
    }

    /// Pointer is resting on a control affordance.
    pub fn pointer_on_controls(&self) {
        self.transition(Visibility::VisiblePersistent);
    }

    pub fn pointer_left(&self) {
        self.transition(Visibility::Hidden);
    }

    /// Touch has no hover, so it flips straight between hidden and shown.
    pub fn touch(&self) {
        let next = if self.controls_shown() {
            Visibility::Hidden
        } else {
            Visibility::VisiblePersistent
        };
        self.transition(next);
    }

    pub fn set_speed_menu_open(&self, open: bool) {
        self.inner.borrow_mut().speed_menu_open = open;
        self.menu_changed(open);
    }

    pub fn set_panel_open(&self, open: bool) {
        self.inner.borrow_mut().panel_open = open;
        self.menu_changed(open);
    }

    /// Release the timer. Later timer callbacks are ignored.
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.generation += 1;
        inner.pending = None;
    }

    fn menu_changed(&self, open: bool) {
        if open {
            self.transition(Visibility::VisiblePersistent);
        } else {
            self.transition(Visibility::VisibleTimed);
        }
    }

    fn transition(&self, next: Visibility) {
        let shown = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            inner.pending = None;
            inner.generation += 1;
            inner.state = next;

            if next == Visibility::VisibleTimed {
                let generation = inner.generation;
                let weak = Rc::downgrade(&self.inner);
                let on_change = Rc::clone(&self.on_change);
                let callback = Box::new(move || Self::elapse(&weak, generation, &on_change));
                inner.pending = Some(inner.timer.schedule(inner.delay_ms, callback));
            }
            inner.controls_shown()
        };
        (self.on_change)(shown);
    }

    fn elapse(inner: &Weak<RefCell<Inner<T>>>, generation: u64, on_change: &Rc<dyn Fn(bool)>) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let shown = {
            let mut inner = inner.borrow_mut();
            if inner.generation != generation || inner.state != Visibility::VisibleTimed {
                return;
            }
            // The fired handle stays in `pending` until the next transition;
            // dropping it here would free the callback while it runs.
            inner.state = Visibility::Hidden;
            inner.controls_shown()
        };
        on_change(shown);
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::FakeTimer;
    use super::*;

    fn machine() -> (ControlsVisibility<FakeTimer>, FakeTimer, Rc<RefCell<Vec<bool>>>) {
        let timer = FakeTimer::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let visibility =
            ControlsVisibility::new(timer.clone(), 1000, move |shown| sink.borrow_mut().push(shown));
        (visibility, timer, seen)
    }

    #[test]
    fn test_starts_visible_then_hides() {
        let (visibility, timer, seen) = machine();
        assert_eq!(visibility.state(), Visibility::VisibleTimed);
        assert_eq!(timer.pending(), 1);

        timer.elapse();
        assert_eq!(visibility.state(), Visibility::Hidden);
        assert!(!visibility.controls_shown());
        assert_eq!(seen.borrow().last(), Some(&false));
    }

    #[test]
    fn test_hover_from_hidden_then_inactivity() {
        let (visibility, timer, _) = machine();
        visibility.pointer_left();
        assert_eq!(visibility.state(), Visibility::Hidden);
        assert_eq!(timer.pending(), 0);

        visibility.pointer_activity();
        assert_eq!(visibility.state(), Visibility::VisibleTimed);
        assert!(visibility.controls_shown());

        timer.elapse();
        assert_eq!(visibility.state(), Visibility::Hidden);
    }

    #[test]
    fn test_movement_restarts_timer() {
        let (visibility, timer, _) = machine();
        visibility.pointer_activity();
        visibility.pointer_activity();
        assert_eq!(timer.pending(), 1);

        // Callbacks from replaced timers do nothing even if they fire late.
        visibility.pointer_on_controls();
        timer.elapse_including_cancelled();
        assert_eq!(visibility.state(), Visibility::VisiblePersistent);
    }

    #[test]
    fn test_hovering_controls_suspends_timer() {
        let (visibility, timer, _) = machine();
        visibility.pointer_on_controls();
        assert_eq!(visibility.state(), Visibility::VisiblePersistent);
        assert_eq!(timer.pending(), 0);

        timer.elapse();
        assert_eq!(visibility.state(), Visibility::VisiblePersistent);
    }

    #[test]
    fn test_speed_menu_forces_visible_until_closed() {
        let (visibility, timer, _) = machine();
        timer.elapse();
        assert_eq!(visibility.state(), Visibility::Hidden);

        visibility.set_speed_menu_open(true);
        assert_eq!(visibility.state(), Visibility::VisiblePersistent);
        assert!(visibility.speed_menu_open());
        assert!(visibility.controls_shown());

        // Leaving the player while the menu is open keeps the controls up.
        visibility.pointer_left();
        assert!(visibility.controls_shown());
        timer.elapse();
        assert!(visibility.controls_shown());

        visibility.set_speed_menu_open(false);
        assert_eq!(visibility.state(), Visibility::VisibleTimed);
        timer.elapse();
        assert!(!visibility.controls_shown());
    }

    #[test]
    fn test_panel_forces_visible() {
        let (visibility, timer, _) = machine();
        visibility.set_panel_open(true);
        visibility.pointer_activity();
        timer.elapse();
        assert_eq!(visibility.state(), Visibility::Hidden);
        assert!(visibility.controls_shown());
        assert!(visibility.panel_open());
    }

    #[test]
    fn test_touch_toggles_without_timer() {
        let (visibility, timer, _) = machine();
        visibility.touch();
        assert_eq!(visibility.state(), Visibility::Hidden);

        visibility.touch();
        assert_eq!(visibility.state(), Visibility::VisiblePersistent);
        assert_eq!(timer.pending(), 0);

        visibility.touch();
        assert_eq!(visibility.state(), Visibility::Hidden);
    }

    #[test]
    fn test_teardown_releases_timer() {
        let (visibility, timer, seen) = machine();
        let notifications = seen.borrow().len();

        visibility.teardown();
        assert_eq!(timer.pending(), 0);
        timer.elapse_including_cancelled();
        assert_eq!(visibility.state(), Visibility::VisibleTimed);
        assert_eq!(seen.borrow().len(), notifications);
    }
}
