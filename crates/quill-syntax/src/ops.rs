//! Discriminants for node kinds that stand for several logical forms.
//!
//! `BINARY_EXPR` covers every binary operator, `UNARY_EXPR` every prefix
//! operator and `LITERAL` every literal form. Builder calls for these kinds
//! carry the discriminant as their first argument so the receiving factory
//! can check it against the operator token.

use std::fmt;

use crate::syntax_kind::SyntaxKind;

/// Binary operators, one per operator token accepted by `BINARY_EXPR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
    Pipe,
    Range,
}

impl BinaryOp {
    /// Operator tokens accepted by `BINARY_EXPR`.
    pub const TOKENS: &'static [SyntaxKind] = &[
        SyntaxKind::PLUS,
        SyntaxKind::MINUS,
        SyntaxKind::STAR,
        SyntaxKind::SLASH,
        SyntaxKind::PERCENT,
        SyntaxKind::EQ_EQ,
        SyntaxKind::NOT_EQ,
        SyntaxKind::LT,
        SyntaxKind::GT,
        SyntaxKind::LT_EQ,
        SyntaxKind::GT_EQ,
        SyntaxKind::AMP_AMP,
        SyntaxKind::PIPE_PIPE,
        SyntaxKind::PIPE,
        SyntaxKind::DOT_DOT,
    ];

    pub fn from_token(kind: SyntaxKind) -> Option<BinaryOp> {
        let op = match kind {
            SyntaxKind::PLUS => BinaryOp::Add,
            SyntaxKind::MINUS => BinaryOp::Sub,
            SyntaxKind::STAR => BinaryOp::Mul,
            SyntaxKind::SLASH => BinaryOp::Div,
            SyntaxKind::PERCENT => BinaryOp::Rem,
            SyntaxKind::EQ_EQ => BinaryOp::Eq,
            SyntaxKind::NOT_EQ => BinaryOp::NotEq,
            SyntaxKind::LT => BinaryOp::Lt,
            SyntaxKind::GT => BinaryOp::Gt,
            SyntaxKind::LT_EQ => BinaryOp::LtEq,
            SyntaxKind::GT_EQ => BinaryOp::GtEq,
            SyntaxKind::AMP_AMP => BinaryOp::And,
            SyntaxKind::PIPE_PIPE => BinaryOp::Or,
            SyntaxKind::PIPE => BinaryOp::Pipe,
            SyntaxKind::DOT_DOT => BinaryOp::Range,
            _ => return None,
        };
        Some(op)
    }
}

/// Prefix operators accepted by `UNARY_EXPR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const TOKENS: &'static [SyntaxKind] = &[SyntaxKind::MINUS, SyntaxKind::BANG];

    pub fn from_token(kind: SyntaxKind) -> Option<UnaryOp> {
        match kind {
            SyntaxKind::MINUS => Some(UnaryOp::Neg),
            SyntaxKind::BANG => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

/// Literal forms accepted by `LITERAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    True,
    False,
    Nil,
}

impl LiteralKind {
    pub const TOKENS: &'static [SyntaxKind] = &[
        SyntaxKind::INT_LITERAL,
        SyntaxKind::FLOAT_LITERAL,
        SyntaxKind::STRING_LITERAL,
        SyntaxKind::TRUE_KW,
        SyntaxKind::FALSE_KW,
        SyntaxKind::NIL_KW,
    ];

    pub fn from_token(kind: SyntaxKind) -> Option<LiteralKind> {
        let lit = match kind {
            SyntaxKind::INT_LITERAL => LiteralKind::Int,
            SyntaxKind::FLOAT_LITERAL => LiteralKind::Float,
            SyntaxKind::STRING_LITERAL => LiteralKind::String,
            SyntaxKind::TRUE_KW => LiteralKind::True,
            SyntaxKind::FALSE_KW => LiteralKind::False,
            SyntaxKind::NIL_KW => LiteralKind::Nil,
            _ => return None,
        };
        Some(lit)
    }
}

/// Which discriminant family a node kind uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscriminantKind {
    Binary,
    Unary,
    Literal,
}

impl DiscriminantKind {
    /// Derive the discriminant from the node's operator or literal token.
    pub fn derive(self, token: SyntaxKind) -> Option<Discriminant> {
        match self {
            DiscriminantKind::Binary => BinaryOp::from_token(token).map(Discriminant::Binary),
            DiscriminantKind::Unary => UnaryOp::from_token(token).map(Discriminant::Unary),
            DiscriminantKind::Literal => LiteralKind::from_token(token).map(Discriminant::Literal),
        }
    }
}

/// A discriminant value, as passed to the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Literal(LiteralKind),
}

impl Discriminant {
    pub fn kind(self) -> DiscriminantKind {
        match self {
            Discriminant::Binary(_) => DiscriminantKind::Binary,
            Discriminant::Unary(_) => DiscriminantKind::Unary,
            Discriminant::Literal(_) => DiscriminantKind::Literal,
        }
    }
}

impl From<BinaryOp> for Discriminant {
    fn from(op: BinaryOp) -> Self {
        Discriminant::Binary(op)
    }
}

impl From<UnaryOp> for Discriminant {
    fn from(op: UnaryOp) -> Self {
        Discriminant::Unary(op)
    }
}

impl From<LiteralKind> for Discriminant {
    fn from(kind: LiteralKind) -> Self {
        Discriminant::Literal(kind)
    }
}

/// Displays as the path written in generated code, e.g. `BinaryOp::Add`.
impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminant::Binary(op) => write!(f, "BinaryOp::{op:?}"),
            Discriminant::Unary(op) => write!(f, "UnaryOp::{op:?}"),
            Discriminant::Literal(kind) => write!(f, "LiteralKind::{kind:?}"),
        }
    }
}
