#![forbid(unsafe_code)]

//! Compact single-select choice control.

use std::cell::Cell;
use std::rc::Rc;

use cardform_core::event::{EventHub, ListenerToken};

/// Dropdown-like selector backing a compact, single-select choice set.
///
/// `None` means no item is selected (the toolkit's index of -1).
#[derive(Debug, Default)]
pub struct Selector {
    selected_index: Cell<Option<usize>>,
    selection_changed: EventHub<Option<usize>>,
    focus_lost: EventHub<()>,
}

impl Selector {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Index of the selected item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index.get()
    }

    /// Change the selection and notify `selection_changed` listeners.
    pub fn set_selected_index(&self, index: Option<usize>) {
        self.selected_index.set(index);
        self.selection_changed.emit(&index);
    }

    /// Simulate the control losing input focus.
    pub fn blur(&self) {
        self.focus_lost.emit(&());
    }

    /// Subscribe to selection changes.
    pub fn on_selection_changed(
        self: &Rc<Self>,
        listener: impl Fn(&Option<usize>) + 'static,
    ) -> ListenerToken {
        let id = self.selection_changed.subscribe(listener);
        let this = Rc::clone(self);
        ListenerToken::new(id, move || {
            this.selection_changed.unsubscribe(id);
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

    /// Number of `selection_changed` listeners. Test hook.
    pub fn selection_changed_listeners(&self) -> usize {
        self.selection_changed.listener_count()
    }

    /// Number of `focus_lost` listeners. Test hook.
    pub fn focus_lost_listeners(&self) -> usize {
        self.focus_lost.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn starts_with_nothing_selected() {
        assert_eq!(Selector::new().selected_index(), None);
    }

    #[test]
    fn set_selected_index_notifies() {
        let selector = Selector::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        let _token = selector.on_selection_changed(move |i| seen2.borrow_mut().push(*i));

        selector.set_selected_index(Some(2));
        selector.set_selected_index(None);

        assert_eq!(selector.selected_index(), None);
        assert_eq!(seen.borrow().as_slice(), [Some(2), None]);
    }
}
