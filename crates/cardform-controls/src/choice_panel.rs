#![forbid(unsafe_code)]

//! Expanded choice set panel.

use std::rc::Rc;

use crate::toggle::ToggleBox;

/// Panel of individually checkable choices, in rendering order.
///
/// Backs expanded and multi-select choice sets. The children are
/// ordinary [`ToggleBox`] controls; the i-th child corresponds to the
/// i-th declared choice of the bound model.
#[derive(Debug, Default)]
pub struct ChoicePanel {
    children: Vec<Rc<ToggleBox>>,
}

impl ChoicePanel {
    /// Panel over already-rendered choice controls.
    pub fn new(children: Vec<Rc<ToggleBox>>) -> Rc<Self> {
        Rc::new(Self { children })
    }

    /// Panel with `count` fresh unchecked choices. Test convenience.
    pub fn with_choice_count(count: usize) -> Rc<Self> {
        Self::new((0..count).map(|_| ToggleBox::new()).collect())
    }

    /// Choice controls in rendering order.
    pub fn children(&self) -> &[Rc<ToggleBox>] {
        &self.children
    }

    /// Child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<&Rc<ToggleBox>> {
        self.children.get(index)
    }

    /// Last choice in rendering order; focus-loss wiring targets this.
    pub fn last_child(&self) -> Option<&Rc<ToggleBox>> {
        self.children.last()
    }

    /// Indices of currently checked children, in rendering order.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_checked())
            .map(|(i, _)| i)
            .collect()
    }
}
