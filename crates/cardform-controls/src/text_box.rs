#![forbid(unsafe_code)]

//! Single-line text entry control.

use std::cell::RefCell;
use std::rc::Rc;

use cardform_core::event::{EventHub, ListenerToken};

/// A text box bound to a text or number input element.
///
/// Number inputs share this control; the engine treats their value as
/// raw text either way.
#[derive(Debug, Default)]
pub struct TextBox {
    text: RefCell<String>,
    text_changed: EventHub<String>,
    focus_lost: EventHub<()>,
}

impl TextBox {
    /// Create an empty text box.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create a text box with initial content.
    ///
    /// Setting the initial value does not emit `text_changed`; nothing
    /// can be subscribed yet.
    pub fn with_text(text: impl Into<String>) -> Rc<Self> {
        let text_box = Self::default();
        *text_box.text.borrow_mut() = text.into();
        Rc::new(text_box)
    }

    /// Current raw text content.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Replace the content and notify `text_changed` listeners.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        *self.text.borrow_mut() = text.clone();
        self.text_changed.emit(&text);
    }

    /// Simulate the control losing input focus.
    pub fn blur(&self) {
        self.focus_lost.emit(&());
    }

    /// Subscribe to content changes.
    pub fn on_text_changed(self: &Rc<Self>, listener: impl Fn(&String) + 'static) -> ListenerToken {
        let id = self.text_changed.subscribe(listener);
        let this = Rc::clone(self);
        ListenerToken::new(id, move || {
            this.text_changed.unsubscribe(id);
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

    /// Number of `text_changed` listeners. Test hook.
    pub fn text_changed_listeners(&self) -> usize {
        self.text_changed.listener_count()
    }

    /// Number of `focus_lost` listeners. Test hook.
    pub fn focus_lost_listeners(&self) -> usize {
        self.focus_lost.listener_count()
    }
}
