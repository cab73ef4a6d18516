//! Slot binding: matching a node's children against its shape.
//!
//! The binder walks a node's direct children once. Significant children are
//! matched to slots in order, failing fast on anything the shape does not
//! allow. Trivia is attributed on the way:
//!
//! - trivia after a token, up to and including the first newline, is that
//!   token's trailing trivia;
//! - any other trivia is recorded in front of the next significant child
//!   (or at the node's tail) and carried forward in document order until a
//!   token claims it as leading trivia.
//!
//! A separated list never ends in a separator. A separator after the last
//! element is left for the next slot when that slot is an optional token of
//! the same kind (`{ a; }`), and is malformed otherwise.

use std::collections::VecDeque;

use quill_syntax::grammar::{ChildShape, NodeClass, NodeShape};
use quill_syntax::{SyntaxKind, SyntaxNode, SyntaxToken, Trivia, TriviaList};
use rowan::{NodeOrToken, TextRange};

use crate::error::QuoteError;

/// A significant token with the trivia attributed to it.
#[derive(Debug, Clone)]
pub struct BoundToken {
    pub kind: SyntaxKind,
    pub text: String,
    pub range: TextRange,
    /// Carried trivia that precedes the token in its parent.
    pub before: Vec<Trivia>,
    pub trailing: TriviaList,
}

#[derive(Debug, Clone)]
pub struct BoundNode {
    pub node: SyntaxNode,
    /// Carried trivia that precedes the node in its parent.
    pub before: Vec<Trivia>,
}

#[derive(Debug, Clone)]
pub enum ListEntry {
    Element(BoundNode),
    Separator(BoundToken),
}

/// The contents of one slot.
#[derive(Debug, Clone)]
pub enum Bound {
    Node(BoundNode),
    Token(BoundToken),
    Absent,
    List {
        separator: Option<SyntaxKind>,
        entries: Vec<ListEntry>,
    },
}

#[derive(Debug, Clone)]
pub struct Binding {
    /// One entry per shape slot, in slot order.
    pub slots: Vec<Bound>,
    /// Carried trivia after the last significant child.
    pub tail: Vec<Trivia>,
}

enum Piece {
    Node(BoundNode),
    Token(BoundToken),
}

impl Piece {
    fn describe(&self) -> String {
        match self {
            Piece::Node(bound) => format!("node {:?}", bound.node.kind()),
            Piece::Token(token) => format!("token {:?}", token.kind),
        }
    }

    fn node_of(&self, class: NodeClass) -> bool {
        matches!(self, Piece::Node(bound) if class.contains(bound.node.kind()))
    }

    fn token_of(&self, kinds: &[SyntaxKind]) -> bool {
        matches!(self, Piece::Token(token) if kinds.contains(&token.kind))
    }
}

fn trivia_of(token: &SyntaxToken) -> Trivia {
    Trivia::new(token.kind(), token.text())
}

/// Split a node's children into significant pieces with attributed trivia.
fn pieces(node: &SyntaxNode) -> (Vec<Piece>, Vec<Trivia>) {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut carried: Vec<Trivia> = Vec::new();
    // Whether trivia still attaches to the preceding token.
    let mut trailing_open = false;

    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Token(token) if token.kind().is_trivia() => {
                let piece = trivia_of(&token);
                match pieces.last_mut() {
                    Some(Piece::Token(last)) if trailing_open => {
                        trailing_open = !piece.is_newline();
                        last.trailing.push(piece);
                    }
                    _ => carried.push(piece),
                }
            }
            NodeOrToken::Token(token) => {
                pieces.push(Piece::Token(BoundToken {
                    kind: token.kind(),
                    text: token.text().to_string(),
                    range: token.text_range(),
                    before: std::mem::take(&mut carried),
                    trailing: TriviaList::new(),
                }));
                trailing_open = true;
            }
            NodeOrToken::Node(child) => {
                pieces.push(Piece::Node(BoundNode {
                    node: child,
                    before: std::mem::take(&mut carried),
                }));
                trailing_open = false;
            }
        }
    }
    (pieces, carried)
}

fn take_if(rest: &mut VecDeque<Piece>, fits: impl FnOnce(&Piece) -> bool) -> Option<Piece> {
    if rest.front().is_some_and(fits) {
        rest.pop_front()
    } else {
        None
    }
}

/// Whether the slot after `index` is an optional `sep` token.
fn takes_trailing(shape: &NodeShape, index: usize, sep: SyntaxKind) -> bool {
    matches!(
        shape.slots.get(index + 1).map(|slot| slot.shape),
        Some(ChildShape::OptionalToken(kinds)) if kinds.contains(&sep)
    )
}

/// Bind the children of `node` to the slots of `shape`.
pub fn bind(node: &SyntaxNode, shape: &NodeShape) -> Result<Binding, QuoteError> {
    let kind = node.kind();
    let (pieces, tail) = pieces(node);

    for piece in &pieces {
        if let Piece::Node(bound) = piece {
            if bound.node.kind() == SyntaxKind::ERROR_NODE {
                return Err(QuoteError::malformed(
                    kind,
                    bound.node.text_range(),
                    "contains a syntax error",
                ));
            }
            if !bound.node.kind().is_node() {
                return Err(QuoteError::UnsupportedKind {
                    kind: bound.node.kind(),
                    range: bound.node.text_range(),
                });
            }
        }
    }

    let malformed = |message: String| QuoteError::malformed(kind, node.text_range(), message);
    let mut rest = VecDeque::from(pieces);
    let mut slots = Vec::with_capacity(shape.slots.len());

    for (index, slot) in shape.slots.iter().enumerate() {
        let bound = match slot.shape {
            ChildShape::Node(class) => match rest.pop_front() {
                Some(Piece::Node(bound)) if class.contains(bound.node.kind()) => Bound::Node(bound),
                Some(other) => {
                    return Err(malformed(format!(
                        "`{}` expects {class}, found {}",
                        slot.name,
                        other.describe()
                    )))
                }
                None => return Err(malformed(format!("missing required `{}` ({class})", slot.name))),
            },
            ChildShape::OptionalNode(class) => match take_if(&mut rest, |p| p.node_of(class)) {
                Some(Piece::Node(bound)) => Bound::Node(bound),
                _ => Bound::Absent,
            },
            ChildShape::Token(kinds) => match rest.pop_front() {
                Some(Piece::Token(token)) if kinds.contains(&token.kind) => Bound::Token(token),
                Some(other) => {
                    return Err(malformed(format!(
                        "`{}` expects {}, found {}",
                        slot.name,
                        slot.shape,
                        other.describe()
                    )))
                }
                None => {
                    return Err(malformed(format!(
                        "missing required `{}` ({})",
                        slot.name, slot.shape
                    )))
                }
            },
            ChildShape::OptionalToken(kinds) => match take_if(&mut rest, |p| p.token_of(kinds)) {
                Some(Piece::Token(token)) => Bound::Token(token),
                _ => Bound::Absent,
            },
            ChildShape::List { element, separator } => {
                let mut entries = Vec::new();
                while let Some(Piece::Node(bound)) = take_if(&mut rest, |p| p.node_of(element)) {
                    entries.push(ListEntry::Element(bound));
                    let Some(sep) = separator else { continue };
                    if !rest.front().is_some_and(|p| p.token_of(&[sep])) {
                        break;
                    }
                    if !rest.get(1).is_some_and(|p| p.node_of(element)) {
                        if takes_trailing(shape, index, sep) {
                            break;
                        }
                        return Err(malformed(format!(
                            "dangling {sep:?} in `{}`: expected {element} after it",
                            slot.name
                        )));
                    }
                    if let Some(Piece::Token(token)) = rest.pop_front() {
                        entries.push(ListEntry::Separator(token));
                    }
                }
                Bound::List { separator, entries }
            }
        };
        slots.push(bound);
    }

    if let Some(extra) = rest.pop_front() {
        return Err(malformed(format!(
            "unexpected {} after the last child",
            extra.describe()
        )));
    }

    Ok(Binding { slots, tail })
}
