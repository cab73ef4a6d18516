//! Quill syntax: the host grammar and its factory API.
//!
//! This crate defines the closed set of Quill syntax kinds, the rowan-based
//! CST types, the grammar shape table that gives every composite kind its
//! ordered child slots, and the factory functions that build green trees
//! from those slots. Code produced by `quill-quote` calls into [`factory`].

pub mod cst;
pub mod factory;
pub mod grammar;
pub mod ops;
pub mod syntax_kind;
pub mod token;

pub use cst::{debug_tree, equivalent_modulo_trivia, QuillLanguage, SyntaxElement, SyntaxNode, SyntaxToken};
pub use factory::{Child, FactoryError, ListItem, NodeList};
pub use grammar::{ChildShape, ChildSlot, KindRule, NodeClass, NodeShape};
pub use ops::{BinaryOp, Discriminant, DiscriminantKind, LiteralKind, UnaryOp};
pub use syntax_kind::SyntaxKind;
pub use token::{Token, TokenValue, Trivia, TriviaList};
