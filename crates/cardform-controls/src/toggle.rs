#![forbid(unsafe_code)]

//! Checkable toggle control.

use std::cell::Cell;
use std::rc::Rc;

use cardform_core::event::{EventHub, ListenerToken};

/// A check-box style control.
///
/// Backs toggle input elements and the individual choices of an
/// expanded choice set. `click` models user interaction (flips the
/// state, then notifies); [`ToggleBox::set_checked`] is the programmatic
/// path and stays silent, matching toolkit click semantics.
#[derive(Debug, Default)]
pub struct ToggleBox {
    checked: Cell<bool>,
    click: EventHub<()>,
    focus_lost: EventHub<()>,
}

impl ToggleBox {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_checked(checked: bool) -> Rc<Self> {
        let toggle = Self::default();
        toggle.checked.set(checked);
        Rc::new(toggle)
    }

    /// Whether the box is currently checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the state without raising `click`.
    pub fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    /// Simulate a user click: flip the state, then notify.
    pub fn click(&self) {
        self.checked.set(!self.checked.get());
        self.click.emit(&());
    }

    /// Simulate the control losing input focus.
    pub fn blur(&self) {
        self.focus_lost.emit(&());
    }

    /// Subscribe to user clicks.
    pub fn on_click(self: &Rc<Self>, listener: impl Fn(&()) + 'static) -> ListenerToken {
        let id = self.click.subscribe(listener);
        let this = Rc::clone(self);
        ListenerToken::new(id, move || {
            this.click.unsubscribe(id);
        })
    }

    /// Subscribe to focus loss.
    pub fn on_focus_lost(self: &Rc<Self>, listener: impl Fn(&()) + 'static) -> ListenerToken {
        let id = self.focus_lost.subscribe(listener);
        let this = Rc::clone(self);
        ListenerToken::new(id, move || {
            this.focus_lost.unsubscribe(id);
        })
    }

    /// Number of `click` listeners. Test hook.
    pub fn click_listeners(&self) -> usize {
        self.click.listener_count()
    }

    /// Number of `focus_lost` listeners. Test hook.
    pub fn focus_lost_listeners(&self) -> usize {
        self.focus_lost.listener_count()
    }
}
