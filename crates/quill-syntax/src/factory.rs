//! The factory API: the functions generated builder code calls to construct
//! Quill trees.
//!
//! Leaf constructors (`token`, `token_text`, ...) produce [`Token`]s that own
//! their trivia. Node constructors are generated per kind from the grammar
//! table and all funnel through [`build_node`], which validates the children
//! against the kind's shape and flattens them into a `rowan::GreenNode`.

use std::fmt;

use rowan::{GreenNode, NodeOrToken};

use crate::grammar::{ChildShape, NodeClass, NodeShape};
use crate::ops::Discriminant;
use crate::syntax_kind::SyntaxKind;
use crate::token::{GreenElement, Token, TokenValue, Trivia, TriviaList};

pub use crate::grammar::nodes::*;

// ── Errors ─────────────────────────────────────────────────────────────

/// Why a factory call was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// `token()` on a kind without canonical text.
    NoFixedText { kind: SyntaxKind },
    /// Text that disagrees with the kind's canonical text.
    TextMismatch { kind: SyntaxKind, text: String },
    /// A token constructor given a node, trivia or sentinel kind.
    NotAToken { kind: SyntaxKind },
    /// `trivia()` given a non-trivia kind.
    NotTrivia { kind: SyntaxKind },
    /// A literal value for a kind that has none.
    NotALiteral { kind: SyntaxKind },
    /// A literal value that does not match the token text.
    ValueMismatch {
        kind: SyntaxKind,
        text: String,
        value: TokenValue,
    },
    Arity {
        factory: &'static str,
        expected: usize,
        found: usize,
    },
    MissingChild {
        factory: &'static str,
        slot: &'static str,
    },
    WrongChild {
        factory: &'static str,
        slot: &'static str,
        expected: String,
        found: String,
    },
    /// A list whose separators do not alternate with its elements.
    BadSeparator {
        factory: &'static str,
        slot: &'static str,
        index: usize,
    },
    MissingDiscriminant { factory: &'static str },
    UnexpectedDiscriminant { factory: &'static str },
    DiscriminantMismatch {
        factory: &'static str,
        discriminant: Discriminant,
        token: SyntaxKind,
    },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::NoFixedText { kind } => {
                write!(f, "{kind:?} has no canonical text; use token_text")
            }
            FactoryError::TextMismatch { kind, text } => {
                write!(f, "{kind:?} cannot have text {text:?}")
            }
            FactoryError::NotAToken { kind } => write!(f, "{kind:?} is not a token kind"),
            FactoryError::NotTrivia { kind } => write!(f, "{kind:?} is not a trivia kind"),
            FactoryError::NotALiteral { kind } => write!(f, "{kind:?} does not carry a value"),
            FactoryError::ValueMismatch { kind, text, value } => {
                write!(f, "{kind:?} {text:?} does not denote {value}")
            }
            FactoryError::Arity {
                factory,
                expected,
                found,
            } => write!(f, "{factory} expects {expected} children, found {found}"),
            FactoryError::MissingChild { factory, slot } => {
                write!(f, "{factory}: required child `{slot}` is missing")
            }
            FactoryError::WrongChild {
                factory,
                slot,
                expected,
                found,
            } => write!(f, "{factory}: `{slot}` expects {expected}, found {found}"),
            FactoryError::BadSeparator {
                factory,
                slot,
                index,
            } => write!(f, "{factory}: list `{slot}` is not separated correctly at item {index}"),
            FactoryError::MissingDiscriminant { factory } => {
                write!(f, "{factory} requires a discriminant")
            }
            FactoryError::UnexpectedDiscriminant { factory } => {
                write!(f, "{factory} does not take a discriminant")
            }
            FactoryError::DiscriminantMismatch {
                factory,
                discriminant,
                token,
            } => write!(f, "{factory}: discriminant {discriminant} does not match {token:?}"),
        }
    }
}

impl std::error::Error for FactoryError {}

// ── Children ───────────────────────────────────────────────────────────

/// One entry of a node list: an element, or a separator between elements.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Node(GreenNode),
    Separator(Token),
}

impl From<GreenNode> for ListItem {
    fn from(node: GreenNode) -> Self {
        ListItem::Node(node)
    }
}

impl From<Token> for ListItem {
    fn from(token: Token) -> Self {
        ListItem::Separator(token)
    }
}

/// The value of a list slot, as built by [`node_list`] or [`separated_list`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeList {
    pub items: Vec<ListItem>,
    pub separated: bool,
}

impl NodeList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One child handed to [`build_node`], in slot order.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(GreenNode),
    Token(Token),
    List(NodeList),
    /// An absent optional child.
    Absent,
}

impl Child {
    fn describe(&self) -> String {
        match self {
            Child::Node(node) => format!("node {:?}", kind_of(node)),
            Child::Token(token) => format!("token {:?}", token.kind),
            Child::List(_) => "a list".to_string(),
            Child::Absent => "nothing".to_string(),
        }
    }
}

impl From<GreenNode> for Child {
    fn from(node: GreenNode) -> Self {
        Child::Node(node)
    }
}

impl From<Option<GreenNode>> for Child {
    fn from(node: Option<GreenNode>) -> Self {
        node.map_or(Child::Absent, Child::Node)
    }
}

impl From<Token> for Child {
    fn from(token: Token) -> Self {
        Child::Token(token)
    }
}

impl From<Option<Token>> for Child {
    fn from(token: Option<Token>) -> Self {
        token.map_or(Child::Absent, Child::Token)
    }
}

impl From<NodeList> for Child {
    fn from(list: NodeList) -> Self {
        Child::List(list)
    }
}

fn kind_of(node: &GreenNode) -> SyntaxKind {
    SyntaxKind::from_raw(node.kind().0).unwrap_or(SyntaxKind::TOMBSTONE)
}

// ── Leaf constructors ──────────────────────────────────────────────────

fn check_token_kind(kind: SyntaxKind) -> Result<(), FactoryError> {
    if kind.is_token() && !kind.is_trivia() {
        Ok(())
    } else {
        Err(FactoryError::NotAToken { kind })
    }
}

fn check_text(kind: SyntaxKind, text: &str) -> Result<(), FactoryError> {
    match kind.fixed_text() {
        Some(fixed) if !text.is_empty() && text != fixed => Err(FactoryError::TextMismatch {
            kind,
            text: text.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_value(kind: SyntaxKind, text: &str, value: &TokenValue) -> Result<(), FactoryError> {
    if !kind.is_literal() {
        return Err(FactoryError::NotALiteral { kind });
    }
    if TokenValue::from_text(kind, text).as_ref() != Some(value) {
        return Err(FactoryError::ValueMismatch {
            kind,
            text: text.to_string(),
            value: value.clone(),
        });
    }
    Ok(())
}

fn bare(kind: SyntaxKind, text: &str) -> Token {
    Token {
        kind,
        text: text.to_string(),
        leading: TriviaList::new(),
        trailing: TriviaList::new(),
    }
}

/// A fixed-text token with its canonical text and no trivia.
pub fn token(kind: SyntaxKind) -> Result<Token, FactoryError> {
    check_token_kind(kind)?;
    let text = kind.fixed_text().ok_or(FactoryError::NoFixedText { kind })?;
    Ok(bare(kind, text))
}

/// A token with explicit text and no trivia.
pub fn token_text(kind: SyntaxKind, text: &str) -> Result<Token, FactoryError> {
    check_token_kind(kind)?;
    check_text(kind, text)?;
    Ok(bare(kind, text))
}

/// A literal token whose text denotes `value`.
pub fn token_value(kind: SyntaxKind, text: &str, value: TokenValue) -> Result<Token, FactoryError> {
    check_token_kind(kind)?;
    check_value(kind, text, &value)?;
    Ok(bare(kind, text))
}

/// A token with every field explicit, trivia included.
pub fn token_full(
    leading: TriviaList,
    kind: SyntaxKind,
    text: &str,
    value: Option<TokenValue>,
    trailing: TriviaList,
) -> Result<Token, FactoryError> {
    check_token_kind(kind)?;
    check_text(kind, text)?;
    if let Some(value) = &value {
        check_value(kind, text, value)?;
    }
    Ok(Token {
        kind,
        text: text.to_string(),
        leading,
        trailing,
    })
}

/// A token the parser expected but did not find: the kind with empty text.
pub fn missing_token(kind: SyntaxKind) -> Result<Token, FactoryError> {
    check_token_kind(kind)?;
    Ok(bare(kind, ""))
}

pub fn trivia(kind: SyntaxKind, text: &str) -> Result<Trivia, FactoryError> {
    if !kind.is_trivia() {
        return Err(FactoryError::NotTrivia { kind });
    }
    Ok(Trivia::new(kind, text))
}

pub fn trivia_list(pieces: Vec<Trivia>) -> TriviaList {
    TriviaList::from(pieces)
}

/// A list of nodes without separators.
pub fn node_list(nodes: Vec<GreenNode>) -> NodeList {
    NodeList {
        items: nodes.into_iter().map(ListItem::Node).collect(),
        separated: false,
    }
}

/// A list of nodes with separator tokens between consecutive elements.
pub fn separated_list(items: Vec<ListItem>) -> NodeList {
    NodeList {
        items,
        separated: true,
    }
}

// ── Node construction ──────────────────────────────────────────────────

/// Build a node of `shape` from its children in slot order.
///
/// Every child is checked against its slot; the discriminant, when the shape
/// has one, must agree with the token it is derived from.
pub fn build_node(
    shape: &NodeShape,
    discriminant: Option<Discriminant>,
    children: Vec<Child>,
) -> Result<GreenNode, FactoryError> {
    let factory = shape.factory;
    if children.len() != shape.slots.len() {
        return Err(FactoryError::Arity {
            factory,
            expected: shape.slots.len(),
            found: children.len(),
        });
    }

    match (shape.discriminant_slot(), discriminant) {
        (Some((family, index)), Some(disc)) => {
            let token = match &children[index] {
                Child::Token(token) => token.kind,
                _ => {
                    return Err(FactoryError::MissingChild {
                        factory,
                        slot: shape.slots[index].name,
                    })
                }
            };
            if family.derive(token) != Some(disc) {
                return Err(FactoryError::DiscriminantMismatch {
                    factory,
                    discriminant: disc,
                    token,
                });
            }
        }
        (Some(_), None) => return Err(FactoryError::MissingDiscriminant { factory }),
        (None, Some(_)) => return Err(FactoryError::UnexpectedDiscriminant { factory }),
        (None, None) => {}
    }

    let mut elements: Vec<GreenElement> = Vec::new();
    for (slot, child) in shape.slots.iter().zip(children) {
        let wrong = |child: &Child| FactoryError::WrongChild {
            factory,
            slot: slot.name,
            expected: slot.shape.to_string(),
            found: child.describe(),
        };
        match (slot.shape, child) {
            (ChildShape::Node(class) | ChildShape::OptionalNode(class), Child::Node(node)) => {
                if !class.contains(kind_of(&node)) {
                    return Err(wrong(&Child::Node(node)));
                }
                elements.push(NodeOrToken::Node(node));
            }
            (ChildShape::Token(kinds) | ChildShape::OptionalToken(kinds), Child::Token(token)) => {
                if !kinds.contains(&token.kind) {
                    return Err(wrong(&Child::Token(token)));
                }
                token.into_green_elements(&mut elements);
            }
            (ChildShape::OptionalNode(_) | ChildShape::OptionalToken(_), Child::Absent) => {}
            (ChildShape::Node(_) | ChildShape::Token(_), Child::Absent) => {
                return Err(FactoryError::MissingChild {
                    factory,
                    slot: slot.name,
                });
            }
            (ChildShape::List { element, separator }, Child::List(list)) => {
                push_list(factory, slot.name, element, separator, list, &mut elements)?;
            }
            (_, child) => return Err(wrong(&child)),
        }
    }

    Ok(GreenNode::new(shape.kind.into(), elements))
}

fn push_list(
    factory: &'static str,
    slot: &'static str,
    element: NodeClass,
    separator: Option<SyntaxKind>,
    list: NodeList,
    out: &mut Vec<GreenElement>,
) -> Result<(), FactoryError> {
    if list.separated != separator.is_some() {
        return Err(FactoryError::WrongChild {
            factory,
            slot,
            expected: if separator.is_some() {
                "a separated list".to_string()
            } else {
                "an unseparated list".to_string()
            },
            found: if list.separated {
                "a separated list".to_string()
            } else {
                "an unseparated list".to_string()
            },
        });
    }
    if separator.is_some() && !list.items.is_empty() && list.items.len() % 2 == 0 {
        // Elements and separators alternate, starting and ending with an element.
        return Err(FactoryError::BadSeparator {
            factory,
            slot,
            index: list.items.len() - 1,
        });
    }

    for (index, item) in list.items.into_iter().enumerate() {
        let expect_separator = separator.is_some() && index % 2 == 1;
        match item {
            ListItem::Node(node) if !expect_separator => {
                if !element.contains(kind_of(&node)) {
                    return Err(FactoryError::WrongChild {
                        factory,
                        slot,
                        expected: element.to_string(),
                        found: format!("node {:?}", kind_of(&node)),
                    });
                }
                out.push(NodeOrToken::Node(node));
            }
            ListItem::Separator(token) if expect_separator && Some(token.kind) == separator => {
                token.into_green_elements(out);
            }
            _ => return Err(FactoryError::BadSeparator { factory, slot, index }),
        }
    }
    Ok(())
}
