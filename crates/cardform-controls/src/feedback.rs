#![forbid(unsafe_code)]

//! Validation feedback regions.
//!
//! The renderer may place a border region around a control and an error
//! message region beneath it. The engine only toggles them: a zero
//! border thickness and a collapsed message mean "valid". Styling is the
//! host's concern.

use std::cell::Cell;
use std::rc::Rc;

/// Border thickness per edge, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thickness {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Thickness {
    /// No border on any edge.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// The same thickness on all four edges.
    pub const fn uniform(value: u16) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Whether every edge is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Whether a region takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Collapsed,
}

/// Border region drawn around an invalid control.
#[derive(Debug, Default)]
pub struct ErrorBorder {
    thickness: Cell<Thickness>,
}

impl ErrorBorder {
    /// Border with zero thickness (hidden).
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness.get()
    }

    pub fn set_thickness(&self, thickness: Thickness) {
        self.thickness.set(thickness);
    }

    /// Whether the border is currently invisible.
    pub fn is_collapsed(&self) -> bool {
        self.thickness.get().is_zero()
    }
}

/// Error message region shown for an invalid control.
#[derive(Debug)]
pub struct ErrorMessage {
    visibility: Cell<Visibility>,
}

impl Default for ErrorMessage {
    fn default() -> Self {
        Self {
            visibility: Cell::new(Visibility::Collapsed),
        }
    }
}

impl ErrorMessage {
    /// Message region, initially collapsed.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn set_visibility(&self, visibility: Visibility) {
        self.visibility.set(visibility);
    }

    /// Whether the message is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visibility.get() == Visibility::Visible
    }
}
