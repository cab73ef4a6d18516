//! The builder expression tree produced by quoting.
//!
//! A `BuilderExpr` is an in-memory form of the generated code: nested calls
//! into the factory API, opaque pass-through fragments and literal
//! arguments. It can be rendered to source text ([`crate::render`]) or run
//! directly against the factory ([`crate::eval`]).

use quill_syntax::{Discriminant, NodeShape, SyntaxKind, SyntaxNode, TokenValue};
use rowan::{GreenNode, TextRange};

/// A factory function a builder call invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factory {
    /// The full-shape constructor of one node kind.
    Node(&'static NodeShape),
    Token,
    TokenText,
    TokenValue,
    TokenFull,
    MissingToken,
    Trivia,
    TriviaList,
    NodeList,
    SeparatedList,
}

impl Factory {
    /// The canonical function name called by generated code.
    pub fn name(self) -> &'static str {
        match self {
            Factory::Node(shape) => shape.factory,
            Factory::Token => "token",
            Factory::TokenText => "token_text",
            Factory::TokenValue => "token_value",
            Factory::TokenFull => "token_full",
            Factory::MissingToken => "missing_token",
            Factory::Trivia => "trivia",
            Factory::TriviaList => "trivia_list",
            Factory::NodeList => "node_list",
            Factory::SeparatedList => "separated_list",
        }
    }

    /// Whether the factory returns a `Result` in generated code.
    pub fn is_fallible(self) -> bool {
        !self.takes_vec()
    }

    /// Whether the factory takes its arguments as a single `Vec`.
    pub fn takes_vec(self) -> bool {
        matches!(self, Factory::TriviaList | Factory::NodeList | Factory::SeparatedList)
    }

    pub fn is_list(self) -> bool {
        matches!(self, Factory::NodeList | Factory::SeparatedList)
    }
}

/// How a call's arguments are laid out in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLayout {
    /// On one line, broken only when wider than the line width.
    Inline,
    /// One argument per line, indented to `depth` levels.
    Lines { depth: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuilderCall {
    pub factory: Factory,
    pub args: Vec<BuilderExpr>,
    pub layout: ArgLayout,
}

/// A pass-through subtree, emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueExpr {
    pub kind: SyntaxKind,
    pub green: GreenNode,
    /// Source text of the subtree, trivia included.
    pub source: String,
    pub range: TextRange,
}

impl OpaqueExpr {
    pub fn new(node: &SyntaxNode) -> Self {
        Self {
            kind: node.kind(),
            green: node.green().into_owned(),
            source: node.text().to_string(),
            range: node.text_range(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuilderExpr {
    Call(BuilderCall),
    Opaque(OpaqueExpr),
    /// An absent optional child.
    Null,
    Kind(SyntaxKind),
    Discriminant(Discriminant),
    Str(String),
    Value(TokenValue),
}

impl BuilderExpr {
    pub fn call(factory: Factory, args: Vec<BuilderExpr>, layout: ArgLayout) -> Self {
        BuilderExpr::Call(BuilderCall {
            factory,
            args,
            layout,
        })
    }

    pub fn as_call(&self) -> Option<&BuilderCall> {
        match self {
            BuilderExpr::Call(call) => Some(call),
            _ => None,
        }
    }

    /// The called factory's name, for calls.
    pub fn factory_name(&self) -> Option<&'static str> {
        self.as_call().map(|call| call.factory.name())
    }

    /// Arguments of a call; empty for every other expression.
    pub fn args(&self) -> &[BuilderExpr] {
        match self {
            BuilderExpr::Call(call) => &call.args,
            _ => &[],
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BuilderExpr::Null)
    }

    /// Visit this expression and every nested argument, depth first.
    pub fn walk(&self, f: &mut impl FnMut(&BuilderExpr)) {
        f(self);
        for arg in self.args() {
            arg.walk(f);
        }
    }

    /// Number of calls to `name` in this tree.
    pub fn count_calls(&self, name: &str) -> usize {
        let mut count = 0;
        self.walk(&mut |expr| {
            if expr.factory_name() == Some(name) {
                count += 1;
            }
        });
        count
    }
}
