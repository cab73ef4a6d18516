//! Rowan-based concrete syntax tree types for Quill.
//!
//! Defines the `QuillLanguage` marker type that connects [`SyntaxKind`] to
//! rowan's generic tree infrastructure, plus type aliases and a couple of
//! tree utilities shared by the factory and the quoting engine.

use std::fmt::Write;

use rowan::{GreenNode, GreenNodeData, GreenTokenData, NodeOrToken};

use crate::syntax_kind::SyntaxKind;

/// Marker type for Quill's language in rowan's generic tree system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuillLanguage {}

impl rowan::Language for QuillLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        // Unknown raw kinds surface as the sentinel, which no rule accepts.
        SyntaxKind::from_raw(raw.0).unwrap_or(SyntaxKind::TOMBSTONE)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A CST node (interior node with children).
pub type SyntaxNode = rowan::SyntaxNode<QuillLanguage>;

/// A CST token (leaf node with text).
pub type SyntaxToken = rowan::SyntaxToken<QuillLanguage>;

/// Either a node or a token in the CST.
pub type SyntaxElement = rowan::SyntaxElement<QuillLanguage>;

/// Render a tree as an indented `KIND@range` listing, one element per line.
///
/// Tokens also show their text. Used by tests and error messages.
pub fn debug_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_tree(node, 0, &mut out);
    out
}

fn write_tree(node: &SyntaxNode, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{}{:?}@{:?}", "  ".repeat(depth), node.kind(), node.text_range());
    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(n) => write_tree(&n, depth + 1, out),
            NodeOrToken::Token(t) => {
                let _ = writeln!(
                    out,
                    "{}{:?}@{:?} {:?}",
                    "  ".repeat(depth + 1),
                    t.kind(),
                    t.text_range(),
                    t.text()
                );
            }
        }
    }
}

/// Whether two trees are equal once every trivia token is ignored.
///
/// This is the structural equality the quoting round trip guarantees:
/// trivia may move between neighbouring nodes without changing meaning.
pub fn equivalent_modulo_trivia(a: &GreenNode, b: &GreenNode) -> bool {
    equivalent_data(a, b)
}

fn equivalent_data(a: &GreenNodeData, b: &GreenNodeData) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    let left = significant_children(a);
    let right = significant_children(b);
    if left.len() != right.len() {
        return false;
    }
    left.iter().zip(right.iter()).all(|pair| match pair {
        (NodeOrToken::Node(x), NodeOrToken::Node(y)) => equivalent_data(x, y),
        (NodeOrToken::Token(x), NodeOrToken::Token(y)) => {
            x.kind() == y.kind() && x.text() == y.text()
        }
        _ => false,
    })
}

fn significant_children(node: &GreenNodeData) -> Vec<NodeOrToken<&GreenNodeData, &GreenTokenData>> {
    node.children()
        .filter(|child| match child {
            NodeOrToken::Token(t) => !is_trivia_raw(t.kind()),
            NodeOrToken::Node(_) => true,
        })
        .collect()
}

fn is_trivia_raw(raw: rowan::SyntaxKind) -> bool {
    SyntaxKind::from_raw(raw.0).is_some_and(SyntaxKind::is_trivia)
}
