#![forbid(unsafe_code)]

//! Date and time picker controls.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use cardform_core::datetime::CivilDate;
use cardform_core::event::{EventHub, ListenerToken};

/// Calendar date picker. Starts with no date selected.
#[derive(Debug, Default)]
pub struct DatePicker {
    date: Cell<Option<CivilDate>>,
    date_changed: EventHub<Option<CivilDate>>,
    focus_lost: EventHub<()>,
}

impl DatePicker {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Currently selected date, if any.
    pub fn date(&self) -> Option<CivilDate> {
        self.date.get()
    }

    /// Select or clear the date and notify `date_changed` listeners.
    pub fn set_date(&self, date: Option<CivilDate>) {
        self.date.set(date);
        self.date_changed.emit(&date);
    }

    /// Simulate the control losing input focus.
    pub fn blur(&self) {
        self.focus_lost.emit(&());
    }

    /// Subscribe to selection changes.
    pub fn on_date_changed(
        self: &Rc<Self>,
        listener: impl Fn(&Option<CivilDate>) + 'static,
    ) -> ListenerToken {
        let id = self.date_changed.subscribe(listener);
        let this = Rc::clone(self);
        ListenerToken::new(id, move || {
            this.date_changed.unsubscribe(id);
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

    /// Number of `date_changed` listeners. Test hook.
    pub fn date_changed_listeners(&self) -> usize {
        self.date_changed.listener_count()
    }

    /// Number of `focus_lost` listeners. Test hook.
    pub fn focus_lost_listeners(&self) -> usize {
        self.focus_lost.listener_count()
    }
}

/// Time-of-day picker.
///
/// Unlike the date picker there is no "nothing selected" state: the
/// control always carries a duration since midnight, defaulting to
/// midnight itself.
#[derive(Debug, Default)]
pub struct TimePicker {
    time: Cell<Duration>,
    time_changed: EventHub<Duration>,
    focus_lost: EventHub<()>,
}

impl TimePicker {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Selected duration since midnight.
    pub fn time(&self) -> Duration {
        self.time.get()
    }

    /// Set the selection and notify `time_changed` listeners.
    pub fn set_time(&self, since_midnight: Duration) {
        self.time.set(since_midnight);
        self.time_changed.emit(&since_midnight);
    }

    /// Simulate the control losing input focus.
    pub fn blur(&self) {
        self.focus_lost.emit(&());
    }

    /// Subscribe to selection changes.
    pub fn on_time_changed(
        self: &Rc<Self>,
        listener: impl Fn(&Duration) + 'static,
    ) -> ListenerToken {
        let id = self.time_changed.subscribe(listener);
        let this = Rc::clone(self);
        ListenerToken::new(id, move || {
            this.time_changed.unsubscribe(id);
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

    /// Number of `time_changed` listeners. Test hook.
    pub fn time_changed_listeners(&self) -> usize {
        self.time_changed.listener_count()
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
    fn date_picker_starts_unselected() {
        assert_eq!(DatePicker::new().date(), None);
    }

    #[test]
    fn set_date_notifies_with_new_value() {
        let picker = DatePicker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        let _token = picker.on_date_changed(move |d| seen2.borrow_mut().push(*d));

        let date = CivilDate::new(2021, 3, 9);
        picker.set_date(Some(date));
        picker.set_date(None);

        assert_eq!(seen.borrow().as_slice(), [Some(date), None]);
    }

    #[test]
    fn time_picker_defaults_to_midnight() {
        assert_eq!(TimePicker::new().time(), Duration::ZERO);
    }

    #[test]
    fn set_time_notifies() {
        let picker = TimePicker::new();
        let seen = Rc::new(Cell::new(Duration::ZERO));
        let seen2 = Rc::clone(&seen);
        let _token = picker.on_time_changed(move |t| seen2.set(*t));

        picker.set_time(Duration::from_secs(9 * 3600));

        assert_eq!(picker.time(), Duration::from_secs(9 * 3600));
        assert_eq!(seen.get(), Duration::from_secs(9 * 3600));
    }
}
