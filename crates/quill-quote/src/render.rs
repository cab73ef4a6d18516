//! Rendering a builder expression as Rust source.
//!
//! The output is an expression calling into the factory module of
//! `quill-syntax`; it evaluates (inside a function returning
//! `Result<_, FactoryError>`) to the quoted tree.

use quill_syntax::grammar::ChildShape;

use crate::expr::{ArgLayout, BuilderCall, BuilderExpr, Factory};
use crate::ir::{align, concat, group, hardline, indent, join, space, text, FormatIR};
use crate::printer::{print, PrintConfig};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Path of the syntax crate in generated code.
    pub crate_path: String,
    /// Write `crate_path::factory::f` and `crate_path::SyntaxKind` instead of
    /// bare names that the caller has imported.
    pub qualify_paths: bool,
    pub indent_width: usize,
    pub max_width: usize,
    /// Put the `)` of multi-line calls on a line of its own.
    pub closing_paren_on_new_line: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            crate_path: "quill_syntax".to_string(),
            qualify_paths: true,
            indent_width: 4,
            max_width: 100,
            closing_paren_on_new_line: false,
        }
    }
}

/// Render `expr` as Rust source.
pub fn render(expr: &BuilderExpr, options: &RenderOptions) -> String {
    let doc = Renderer { options }.expr(expr);
    let config = PrintConfig {
        indent_width: options.indent_width,
        max_width: options.max_width,
    };
    print(&doc, &config)
}

struct Renderer<'a> {
    options: &'a RenderOptions,
}

/// How an argument is wrapped at its call site.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Wrap {
    Plain,
    /// Argument of type `Option<_>`.
    Optional,
    /// Element of `separated_list`, converted with `.into()`.
    Into,
}

impl Renderer<'_> {
    fn path(&self, item: &str) -> String {
        if self.options.qualify_paths {
            format!("{}::{item}", self.options.crate_path)
        } else {
            item.to_string()
        }
    }

    fn function(&self, factory: Factory) -> String {
        if self.options.qualify_paths {
            format!("{}::factory::{}", self.options.crate_path, factory.name())
        } else {
            factory.name().to_string()
        }
    }

    fn expr(&self, expr: &BuilderExpr) -> FormatIR {
        match expr {
            BuilderExpr::Call(call) => self.call(call),
            BuilderExpr::Opaque(opaque) => text(opaque.source.as_str()),
            BuilderExpr::Null => text("None"),
            BuilderExpr::Kind(kind) => text(self.path(&format!("SyntaxKind::{kind:?}"))),
            BuilderExpr::Discriminant(disc) => text(self.path(&disc.to_string())),
            BuilderExpr::Str(s) => text(format!("{s:?}")),
            BuilderExpr::Value(value) => text(self.path(&value.to_string())),
        }
    }

    fn argument(&self, arg: &BuilderExpr, wrap: Wrap) -> FormatIR {
        match (wrap, arg) {
            (Wrap::Optional, BuilderExpr::Null) | (Wrap::Plain, _) => self.expr(arg),
            (Wrap::Optional, _) => concat(vec![text("Some("), self.expr(arg), text(")")]),
            (Wrap::Into, BuilderExpr::Opaque(opaque)) => text(format!("({}).into()", opaque.source)),
            (Wrap::Into, _) => concat(vec![self.expr(arg), text(".into()")]),
        }
    }

    /// Wrapping for argument `index` of a call to `factory`.
    fn wrap(factory: Factory, index: usize) -> Wrap {
        match factory {
            Factory::Node(shape) => {
                let offset = usize::from(shape.discriminant.is_some());
                let Some(slot) = index.checked_sub(offset).and_then(|i| shape.slots.get(i)) else {
                    return Wrap::Plain;
                };
                match slot.shape {
                    ChildShape::OptionalNode(_) | ChildShape::OptionalToken(_) => Wrap::Optional,
                    _ => Wrap::Plain,
                }
            }
            Factory::TokenFull if index == 3 => Wrap::Optional,
            Factory::SeparatedList => Wrap::Into,
            _ => Wrap::Plain,
        }
    }

    fn call(&self, call: &BuilderCall) -> FormatIR {
        let vec = call.factory.takes_vec();
        let open = format!("{}({}", self.function(call.factory), if vec { "vec![" } else { "" });
        let close = format!(
            "{}){}",
            if vec { "]" } else { "" },
            if call.factory.is_fallible() { "?" } else { "" }
        );
        if call.args.is_empty() {
            return text(format!("{open}{close}"));
        }

        let args: Vec<FormatIR> = call
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| self.argument(arg, Self::wrap(call.factory, i)))
            .collect();

        match call.layout {
            ArgLayout::Inline => group(concat(vec![
                text(open),
                indent(join(args, || concat(vec![text(","), space()]))),
                text(close),
            ])),
            ArgLayout::Lines { depth } => {
                let mut lines = Vec::with_capacity(args.len() * 3);
                for (i, arg) in args.into_iter().enumerate() {
                    if i > 0 {
                        lines.push(text(","));
                    }
                    lines.push(hardline());
                    lines.push(arg);
                }
                let mut parts = vec![text(open), align(depth * self.options.indent_width, concat(lines))];
                if self.options.closing_paren_on_new_line {
                    parts.push(hardline());
                }
                parts.push(text(close));
                concat(parts)
            }
        }
    }
}
