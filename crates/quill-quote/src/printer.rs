//! Wadler-Lindig printer for the format IR.
//!
//! The printer converts a `FormatIR` tree into a string by deciding at each
//! `Group` boundary whether to render flat (all on one line) or broken (with
//! line breaks and indentation). Output is a Rust expression fragment, so no
//! trailing newline is added.

use crate::ir::FormatIR;

#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Spaces added by each `Indent`. Default: 4.
    pub indent_width: usize,
    /// Maximum line width before groups break. Default: 100.
    pub max_width: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            max_width: 100,
        }
    }
}

/// Whether the current context is rendering flat or broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Everything on one line; `Space` renders as " ".
    Flat,
    /// Line breaks at `Space` positions; `Space` renders as newline + indent.
    Break,
}

/// A command on the printer's work stack.
#[derive(Debug)]
struct PrintCmd<'a> {
    indent: usize,
    mode: Mode,
    ir: &'a FormatIR,
}

/// Render a `FormatIR` tree as a string respecting the given config.
///
/// Stack-based: at each `Group` the flat width of its contents is measured
/// against the remaining line, and the group is printed flat if it fits.
pub fn print(ir: &FormatIR, config: &PrintConfig) -> String {
    let mut out = String::new();
    let mut col: usize = 0;
    let mut stack: Vec<PrintCmd> = vec![PrintCmd {
        indent: 0,
        mode: Mode::Break,
        ir,
    }];

    while let Some(cmd) = stack.pop() {
        match cmd.ir {
            FormatIR::Empty => {}

            FormatIR::Text(s) => {
                out.push_str(s);
                col += s.chars().count();
            }

            FormatIR::Space => match cmd.mode {
                Mode::Flat => {
                    out.push(' ');
                    col += 1;
                }
                Mode::Break => col = newline(&mut out, cmd.indent),
            },

            FormatIR::Hardline => col = newline(&mut out, cmd.indent),

            FormatIR::Indent(child) => stack.push(PrintCmd {
                indent: cmd.indent + config.indent_width,
                mode: cmd.mode,
                ir: child,
            }),

            FormatIR::Align(column, child) => stack.push(PrintCmd {
                indent: *column,
                mode: cmd.mode,
                ir: child,
            }),

            FormatIR::Group(child) => {
                let fits = col.saturating_add(measure_flat(child)) <= config.max_width;
                stack.push(PrintCmd {
                    indent: cmd.indent,
                    mode: if fits { Mode::Flat } else { Mode::Break },
                    ir: child,
                });
            }

            FormatIR::IfBreak { flat, broken } => stack.push(PrintCmd {
                indent: cmd.indent,
                mode: cmd.mode,
                ir: if cmd.mode == Mode::Flat { flat } else { broken },
            }),

            FormatIR::Concat(parts) => {
                // Reverse so the first part is popped first.
                for part in parts.iter().rev() {
                    stack.push(PrintCmd {
                        indent: cmd.indent,
                        mode: cmd.mode,
                        ir: part,
                    });
                }
            }
        }
    }

    out
}

fn newline(out: &mut String, indent: usize) -> usize {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(indent));
    indent
}

/// Measure the width of an IR node when rendered flat (all on one line).
///
/// Returns `usize::MAX` if the node contains a `Hardline`.
fn measure_flat(ir: &FormatIR) -> usize {
    match ir {
        FormatIR::Empty => 0,
        FormatIR::Text(s) => s.chars().count(),
        FormatIR::Space => 1,
        FormatIR::Hardline => usize::MAX,
        FormatIR::Indent(child) | FormatIR::Align(_, child) | FormatIR::Group(child) => {
            measure_flat(child)
        }
        FormatIR::IfBreak { flat, .. } => measure_flat(flat),
        FormatIR::Concat(parts) => {
            let mut total: usize = 0;
            for part in parts {
                let w = measure_flat(part);
                if w == usize::MAX {
                    return usize::MAX;
                }
                total = total.saturating_add(w);
            }
            total
        }
    }
}
