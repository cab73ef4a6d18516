//! Wadler-Lindig document IR for rendered builder expressions.
//!
//! The renderer lowers a `BuilderExpr` into this IR and the printer lays it
//! out. Node and list calls carry their absolute indentation (`Align`), token
//! calls are `Group`s that stay on one line unless they overflow.

/// A document IR node in the Wadler-Lindig style.
///
/// The printer decides at each `Group` boundary whether to render flat (all on
/// one line) or broken (with line breaks and indentation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIR {
    /// Literal text to emit verbatim.
    Text(String),
    /// A space in flat mode; a newline + indent in broken mode.
    Space,
    /// Always emits a newline + current indentation, regardless of mode.
    Hardline,
    /// Increase indentation for the child IR by the configured indent width.
    Indent(Box<FormatIR>),
    /// Set the indentation of the child IR to an absolute column.
    Align(usize, Box<FormatIR>),
    /// Try to render the child flat (on one line). If it exceeds the remaining
    /// line width, render in broken mode instead.
    Group(Box<FormatIR>),
    /// Emit different content depending on whether the enclosing group is
    /// in flat or broken mode.
    IfBreak {
        flat: Box<FormatIR>,
        broken: Box<FormatIR>,
    },
    /// A sequence of IR nodes rendered in order.
    Concat(Vec<FormatIR>),
    /// Produces no output.
    Empty,
}

/// Create a `Text` node from a string-like value.
pub fn text(s: impl Into<String>) -> FormatIR {
    FormatIR::Text(s.into())
}

/// Create a `Space` node (space in flat mode, newline in broken mode).
pub fn space() -> FormatIR {
    FormatIR::Space
}

pub fn hardline() -> FormatIR {
    FormatIR::Hardline
}

pub fn indent(ir: FormatIR) -> FormatIR {
    FormatIR::Indent(Box::new(ir))
}

/// Render `ir` with its line starts at column `column`.
pub fn align(column: usize, ir: FormatIR) -> FormatIR {
    FormatIR::Align(column, Box::new(ir))
}

/// Create a `Group` that tries flat layout first, breaking if it exceeds width.
pub fn group(ir: FormatIR) -> FormatIR {
    FormatIR::Group(Box::new(ir))
}

pub fn concat(parts: Vec<FormatIR>) -> FormatIR {
    FormatIR::Concat(parts)
}

/// Create an `IfBreak` that selects content based on the enclosing group's mode.
pub fn if_break(flat: FormatIR, broken: FormatIR) -> FormatIR {
    FormatIR::IfBreak {
        flat: Box::new(flat),
        broken: Box::new(broken),
    }
}

/// Join `parts` with `sep` between consecutive elements.
pub fn join(parts: Vec<FormatIR>, sep: impl Fn() -> FormatIR) -> FormatIR {
    let mut out = Vec::with_capacity(parts.len() * 2);
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(sep());
        }
        out.push(part);
    }
    concat(out)
}
