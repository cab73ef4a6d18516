//! Indentation bookkeeping for generated argument lists.
//!
//! One `FormattingContext` belongs to one quoting run. `indent()` and
//! `unindent()` bracket the assembly of a single node's (or list's)
//! arguments; the depth at that point decides where those arguments are
//! laid out. Columns are the renderer's business: it turns
//! `ArgLayout::Lines { depth }` into `depth * indent_width` spaces.

use crate::expr::ArgLayout;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattingContext {
    depth: usize,
    indent_calls: usize,
    unindent_calls: usize,
}

impl FormattingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
        self.indent_calls += 1;
    }

    pub fn unindent(&mut self) {
        debug_assert!(self.depth > 0, "unindent() without matching indent()");
        self.depth = self.depth.saturating_sub(1);
        self.unindent_calls += 1;
    }

    /// Layout for arguments assembled at the current depth.
    pub fn layout(&self) -> ArgLayout {
        ArgLayout::Lines { depth: self.depth }
    }

    pub fn indent_calls(&self) -> usize {
        self.indent_calls
    }

    pub fn unindent_calls(&self) -> usize {
        self.unindent_calls
    }

    /// Whether every `indent()` so far has been matched.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.indent_calls == self.unindent_calls
    }
}
