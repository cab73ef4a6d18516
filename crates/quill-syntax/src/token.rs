//! Token-level data used by the factory: literal values, trivia and tokens
//! that own their surrounding trivia.
//!
//! In the CST trivia are sibling tokens. Factory-side tokens own their
//! leading and trailing trivia instead, and flatten back into siblings when a
//! node is built.

use std::fmt;

use rowan::{GreenToken, NodeOrToken};

use crate::syntax_kind::SyntaxKind;

/// A green element as accepted by `rowan::GreenNode::new`.
pub type GreenElement = NodeOrToken<rowan::GreenNode, GreenToken>;

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl TokenValue {
    /// Derive the value of a literal token from its source text.
    ///
    /// Returns `None` for non-literal kinds and for text that does not denote
    /// a representable value (overflowing integers, bad escapes).
    pub fn from_text(kind: SyntaxKind, text: &str) -> Option<TokenValue> {
        match kind {
            SyntaxKind::INT_LITERAL => parse_int(text).map(TokenValue::Int),
            SyntaxKind::FLOAT_LITERAL => parse_float(text).map(TokenValue::Float),
            SyntaxKind::STRING_LITERAL => unescape_string(text).map(TokenValue::Str),
            _ => None,
        }
    }
}

/// Displays as the expression written in generated code.
impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(v) => write!(f, "TokenValue::Int({v})"),
            TokenValue::Float(v) => write!(f, "TokenValue::Float({v:?})"),
            TokenValue::Str(s) => write!(f, "TokenValue::Str({s:?}.to_string())"),
        }
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let (radix, body) = if let Some(rest) = digits.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = digits.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = digits.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, digits.as_str())
    };
    if body.is_empty() {
        return None;
    }
    i64::from_str_radix(body, radix).ok()
}

fn parse_float(text: &str) -> Option<f64> {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn unescape_string(text: &str) -> Option<String> {
    let body = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '"' => '"',
            _ => return None,
        };
        out.push(escaped);
    }
    Some(out)
}

/// A single trivia piece (whitespace, newline or comment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub kind: SyntaxKind,
    pub text: String,
}

impl Trivia {
    pub fn new(kind: SyntaxKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_newline(&self) -> bool {
        self.kind == SyntaxKind::NEWLINE
    }

    fn to_green(&self) -> GreenElement {
        NodeOrToken::Token(GreenToken::new(self.kind.into(), &self.text))
    }
}

/// An ordered run of trivia attached to one side of a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriviaList(Vec<Trivia>);

impl TriviaList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trivia> {
        self.0.iter()
    }

    pub fn push(&mut self, trivia: Trivia) {
        self.0.push(trivia);
    }

    /// Concatenated source text of every piece.
    pub fn text(&self) -> String {
        self.0.iter().map(|t| t.text.as_str()).collect()
    }
}

impl From<Vec<Trivia>> for TriviaList {
    fn from(pieces: Vec<Trivia>) -> Self {
        TriviaList(pieces)
    }
}

impl IntoIterator for TriviaList {
    type Item = Trivia;
    type IntoIter = std::vec::IntoIter<Trivia>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A token as handed to the factory, owning its trivia.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub text: String,
    pub leading: TriviaList,
    pub trailing: TriviaList,
}

impl Token {
    /// Whether this token stands in for one the parser expected but did not
    /// find: empty text where the kind has non-empty canonical text.
    pub fn is_missing(&self) -> bool {
        is_missing(self.kind, &self.text)
    }

    pub fn has_trivia(&self) -> bool {
        !self.leading.is_empty() || !self.trailing.is_empty()
    }

    /// Full source text including trivia.
    pub fn full_text(&self) -> String {
        format!("{}{}{}", self.leading.text(), self.text, self.trailing.text())
    }

    /// Flatten into CST siblings: leading trivia, the token, trailing trivia.
    pub fn into_green_elements(self, out: &mut Vec<GreenElement>) {
        out.extend(self.leading.iter().map(Trivia::to_green));
        out.push(NodeOrToken::Token(GreenToken::new(self.kind.into(), &self.text)));
        out.extend(self.trailing.iter().map(Trivia::to_green));
    }
}

/// Missing-token test shared by the factory and the quoting engine.
pub fn is_missing(kind: SyntaxKind, text: &str) -> bool {
    text.is_empty() && kind.fixed_text() != Some("")
}
