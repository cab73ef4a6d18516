//! In-process evaluation of builder expressions.
//!
//! Runs a `BuilderExpr` against the factory API directly, without going
//! through generated source. This is what the round-trip tests use to check
//! that quoting a tree and building the result gives the tree back.
//!
//! Evaluation runs on an explicit work stack, so the nesting depth of the
//! expression is bounded by memory rather than by the native call stack.

use std::fmt;

use quill_syntax::factory::{self, Child, FactoryError, ListItem, NodeList};
use quill_syntax::{Discriminant, NodeShape, SyntaxKind, Token, TokenValue, Trivia, TriviaList};
use rowan::GreenNode;

use crate::expr::{BuilderCall, BuilderExpr, Factory};

/// The result of evaluating a builder expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Node(GreenNode),
    Token(Token),
    Trivia(Trivia),
    TriviaList(TriviaList),
    List(NodeList),
    Null,
    Kind(SyntaxKind),
    Discriminant(Discriminant),
    Str(String),
    TokenValue(TokenValue),
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Value::Node(_) => "a node",
            Value::Token(_) => "a token",
            Value::Trivia(_) => "a trivia piece",
            Value::TriviaList(_) => "a trivia list",
            Value::List(_) => "a node list",
            Value::Null => "null",
            Value::Kind(_) => "a kind",
            Value::Discriminant(_) => "a discriminant",
            Value::Str(_) => "a string",
            Value::TokenValue(_) => "a literal value",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The factory rejected a call.
    Factory(FactoryError),
    Arity {
        factory: &'static str,
        expected: usize,
        found: usize,
    },
    /// An argument of the wrong sort.
    Type {
        factory: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// `evaluate_node` on an expression that is not a node.
    NotANode { found: &'static str },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Factory(err) => write!(f, "{err}"),
            EvalError::Arity {
                factory,
                expected,
                found,
            } => write!(f, "{factory} takes {expected} arguments, given {found}"),
            EvalError::Type {
                factory,
                index,
                expected,
                found,
            } => write!(f, "{factory}: argument {index} should be {expected}, found {found}"),
            EvalError::NotANode { found } => write!(f, "expected a node, found {found}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Factory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FactoryError> for EvalError {
    fn from(err: FactoryError) -> Self {
        EvalError::Factory(err)
    }
}

enum Frame<'a> {
    /// Evaluate an expression and push its value.
    Visit(&'a BuilderExpr),
    /// Pop the call's evaluated arguments and push the call's value.
    Apply(&'a BuilderCall),
}

/// Evaluate `expr` through the factory API.
pub fn evaluate(expr: &BuilderExpr) -> Result<Value, EvalError> {
    let mut work = vec![Frame::Visit(expr)];
    let mut values: Vec<Value> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Visit(BuilderExpr::Call(call)) => {
                work.push(Frame::Apply(call));
                work.extend(call.args.iter().rev().map(Frame::Visit));
            }
            Frame::Visit(leaf) => values.push(leaf_value(leaf)),
            Frame::Apply(call) => {
                let start = values.len().saturating_sub(call.args.len());
                let args = values.split_off(start);
                values.push(apply(call, args)?);
            }
        }
    }
    Ok(values.pop().unwrap_or(Value::Null))
}

fn leaf_value(expr: &BuilderExpr) -> Value {
    match expr {
        BuilderExpr::Opaque(opaque) => Value::Node(opaque.green.clone()),
        BuilderExpr::Kind(kind) => Value::Kind(*kind),
        BuilderExpr::Discriminant(disc) => Value::Discriminant(*disc),
        BuilderExpr::Str(s) => Value::Str(s.clone()),
        BuilderExpr::Value(value) => Value::TokenValue(value.clone()),
        BuilderExpr::Null | BuilderExpr::Call(_) => Value::Null,
    }
}

/// Evaluate `expr`, which must produce a node.
pub fn evaluate_node(expr: &BuilderExpr) -> Result<GreenNode, EvalError> {
    match evaluate(expr)? {
        Value::Node(node) => Ok(node),
        other => Err(EvalError::NotANode {
            found: other.describe(),
        }),
    }
}

/// Evaluated arguments of one call, consumed left to right.
struct Args {
    factory: &'static str,
    values: std::vec::IntoIter<Value>,
    index: usize,
}

impl Args {
    fn next(&mut self) -> Value {
        self.index += 1;
        self.values.next().unwrap_or(Value::Null)
    }

    fn mismatch(&self, expected: &'static str, found: &Value) -> EvalError {
        EvalError::Type {
            factory: self.factory,
            index: self.index - 1,
            expected,
            found: found.describe(),
        }
    }

    fn kind(&mut self) -> Result<SyntaxKind, EvalError> {
        match self.next() {
            Value::Kind(kind) => Ok(kind),
            other => Err(self.mismatch("a kind", &other)),
        }
    }

    fn string(&mut self) -> Result<String, EvalError> {
        match self.next() {
            Value::Str(s) => Ok(s),
            other => Err(self.mismatch("a string", &other)),
        }
    }

    fn value(&mut self) -> Result<Option<TokenValue>, EvalError> {
        match self.next() {
            Value::TokenValue(value) => Ok(Some(value)),
            Value::Null => Ok(None),
            other => Err(self.mismatch("a literal value", &other)),
        }
    }

    fn trivia_list(&mut self) -> Result<TriviaList, EvalError> {
        match self.next() {
            Value::TriviaList(list) => Ok(list),
            other => Err(self.mismatch("a trivia list", &other)),
        }
    }
}

/// Run one call on its already evaluated arguments.
fn apply(call: &BuilderCall, values: Vec<Value>) -> Result<Value, EvalError> {
    let name = call.factory.name();

    if let Some(expected) = fixed_arity(call.factory) {
        if values.len() != expected {
            return Err(EvalError::Arity {
                factory: name,
                expected,
                found: values.len(),
            });
        }
    }
    let mut args = Args {
        factory: name,
        values: values.into_iter(),
        index: 0,
    };

    Ok(match call.factory {
        Factory::Node(shape) => Value::Node(node_call(shape, &mut args)?),
        Factory::Token => Value::Token(factory::token(args.kind()?)?),
        Factory::TokenText => {
            let kind = args.kind()?;
            Value::Token(factory::token_text(kind, &args.string()?)?)
        }
        Factory::TokenValue => {
            let kind = args.kind()?;
            let text = args.string()?;
            match args.value()? {
                Some(value) => Value::Token(factory::token_value(kind, &text, value)?),
                None => return Err(args.mismatch("a literal value", &Value::Null)),
            }
        }
        Factory::TokenFull => {
            let leading = args.trivia_list()?;
            let kind = args.kind()?;
            let text = args.string()?;
            let value = args.value()?;
            let trailing = args.trivia_list()?;
            Value::Token(factory::token_full(leading, kind, &text, value, trailing)?)
        }
        Factory::MissingToken => Value::Token(factory::missing_token(args.kind()?)?),
        Factory::Trivia => {
            let kind = args.kind()?;
            Value::Trivia(factory::trivia(kind, &args.string()?)?)
        }
        Factory::TriviaList => {
            let mut pieces = Vec::new();
            while args.values.len() > 0 {
                match args.next() {
                    Value::Trivia(piece) => pieces.push(piece),
                    other => return Err(args.mismatch("a trivia piece", &other)),
                }
            }
            Value::TriviaList(factory::trivia_list(pieces))
        }
        Factory::NodeList => {
            let mut nodes = Vec::new();
            while args.values.len() > 0 {
                match args.next() {
                    Value::Node(node) => nodes.push(node),
                    other => return Err(args.mismatch("a node", &other)),
                }
            }
            Value::List(factory::node_list(nodes))
        }
        Factory::SeparatedList => {
            let mut items = Vec::new();
            while args.values.len() > 0 {
                match args.next() {
                    Value::Node(node) => items.push(ListItem::Node(node)),
                    Value::Token(token) => items.push(ListItem::Separator(token)),
                    other => return Err(args.mismatch("a node or separator", &other)),
                }
            }
            Value::List(factory::separated_list(items))
        }
    })
}

fn fixed_arity(factory: Factory) -> Option<usize> {
    match factory {
        Factory::Node(shape) => Some(shape.arity()),
        Factory::Token | Factory::MissingToken => Some(1),
        Factory::TokenText | Factory::Trivia => Some(2),
        Factory::TokenValue => Some(3),
        Factory::TokenFull => Some(5),
        Factory::TriviaList | Factory::NodeList | Factory::SeparatedList => None,
    }
}

fn node_call(shape: &'static NodeShape, args: &mut Args) -> Result<GreenNode, EvalError> {
    let discriminant = match shape.discriminant {
        Some(_) => match args.next() {
            Value::Discriminant(disc) => Some(disc),
            other => return Err(args.mismatch("a discriminant", &other)),
        },
        None => None,
    };
    let mut children = Vec::with_capacity(shape.slots.len());
    for _ in shape.slots {
        let child = match args.next() {
            Value::Node(node) => Child::Node(node),
            Value::Token(token) => Child::Token(token),
            Value::List(list) => Child::List(list),
            Value::Null => Child::Absent,
            other => return Err(args.mismatch("a child", &other)),
        };
        children.push(child);
    }
    Ok(factory::build_node(shape, discriminant, children)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ArgLayout;
    use quill_syntax::grammar::shapes;

    fn call(factory: Factory, args: Vec<BuilderExpr>) -> BuilderExpr {
        BuilderExpr::call(factory, args, ArgLayout::Inline)
    }

    fn ident(text: &str) -> BuilderExpr {
        call(
            Factory::TokenText,
            vec![BuilderExpr::Kind(SyntaxKind::IDENT), BuilderExpr::Str(text.to_string())],
        )
    }

    #[test]
    fn evaluates_node_calls() {
        let expr = call(Factory::Node(&shapes::NAME_REF), vec![ident("x")]);
        let node = evaluate_node(&expr).unwrap();
        assert_eq!(node.kind(), SyntaxKind::NAME_REF.into());
        assert_eq!(quill_syntax::SyntaxNode::new_root(node).text().to_string(), "x");
    }

    #[test]
    fn factory_errors_are_wrapped() {
        let expr = call(Factory::Token, vec![BuilderExpr::Kind(SyntaxKind::IDENT)]);
        assert_eq!(
            evaluate(&expr).unwrap_err(),
            EvalError::Factory(FactoryError::NoFixedText { kind: SyntaxKind::IDENT })
        );
    }

    #[test]
    fn argument_sorts_are_checked() {
        let expr = call(Factory::Node(&shapes::NAME_REF), vec![BuilderExpr::Str("x".into())]);
        assert!(matches!(
            evaluate(&expr).unwrap_err(),
            EvalError::Type { index: 0, expected: "a child", .. }
        ));
        let expr = call(Factory::Token, vec![]);
        assert!(matches!(evaluate(&expr).unwrap_err(), EvalError::Arity { expected: 1, found: 0, .. }));
    }

    #[test]
    fn tokens_are_not_nodes() {
        let err = evaluate_node(&ident("x")).unwrap_err();
        assert_eq!(err, EvalError::NotANode { found: "a token" });
    }

    #[test]
    fn deeply_nested_calls_do_not_recurse() {
        let mut expr = call(Factory::Node(&shapes::NAME_REF), vec![ident("x")]);
        for _ in 0..1_000 {
            let l_paren = call(Factory::Token, vec![BuilderExpr::Kind(SyntaxKind::L_PAREN)]);
            let r_paren = call(Factory::Token, vec![BuilderExpr::Kind(SyntaxKind::R_PAREN)]);
            expr = call(Factory::Node(&shapes::PAREN_EXPR), vec![l_paren, expr, r_paren]);
        }
        let node = evaluate_node(&expr).unwrap();
        assert_eq!(node.kind(), SyntaxKind::PAREN_EXPR.into());
        assert_eq!(node.text_len(), rowan::TextSize::from(2_001));
    }

    #[test]
    fn separated_lists_accept_separators() {
        let comma = call(Factory::Token, vec![BuilderExpr::Kind(SyntaxKind::COMMA)]);
        let element = call(Factory::Node(&shapes::NAME_REF), vec![ident("a")]);
        let list = call(Factory::SeparatedList, vec![element.clone(), comma, element]);
        let Value::List(list) = evaluate(&list).unwrap() else { panic!("expected a list") };
        assert!(list.separated);
        assert_eq!(list.len(), 3);
    }
}
