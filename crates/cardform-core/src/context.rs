#![forbid(unsafe_code)]

//! Hosting context for a rendered card.
//!
//! The renderer constructs one [`RenderContext`] per card view and hands
//! it to every input binding it creates. The engine reads exactly one
//! capability from it: whether fields should revalidate inline on focus
//! loss, before any explicit form submission.

/// Per-card configuration supplied by the hosting renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    inline_validation: bool,
}

impl RenderContext {
    /// Context with inline validation disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable focus-loss revalidation (builder).
    pub fn with_inline_validation(mut self, enabled: bool) -> Self {
        self.inline_validation = enabled;
        self
    }

    /// Whether fields revalidate when they lose focus.
    pub fn inline_validation(&self) -> bool {
        self.inline_validation
    }
}
