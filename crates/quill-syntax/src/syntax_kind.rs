//! SyntaxKind enum for the Quill CST.
//!
//! One flat enum covers leaf token kinds, trivia kinds and the composite node
//! kinds a parser produces. The first two values are sentinels.

/// Every kind of syntax element in the Quill CST.
///
/// Token kinds (leaves) come first, composite node kinds follow. The grammar
/// table in [`crate::grammar`] assigns every variant exactly one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // ── Sentinels ──────────────────────────────────────────────────────
    /// Placeholder kind for incomplete/unfinished parser events.
    TOMBSTONE = 0,
    /// Wrapper for tokens/nodes that couldn't be parsed.
    ERROR_NODE = 1,

    // ── Keywords (18) ──────────────────────────────────────────────────
    BREAK_KW,
    CONTINUE_KW,
    ELSE_KW,
    FALSE_KW,
    FN_KW,
    FOR_KW,
    IF_KW,
    IMPORT_KW,
    IN_KW,
    LET_KW,
    MATCH_KW,
    NIL_KW,
    PUB_KW,
    RETURN_KW,
    STRUCT_KW,
    TRUE_KW,
    TYPE_KW,
    WHILE_KW,

    // ── Operators (21) ─────────────────────────────────────────────────
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    EQ_EQ,
    NOT_EQ,
    LT,
    GT,
    LT_EQ,
    GT_EQ,
    AMP_AMP,
    PIPE_PIPE,
    BANG,
    /// `|>` pipe operator
    PIPE,
    /// `|` bare pipe for or-patterns
    BAR,
    DOT_DOT,
    EQ,
    ARROW,
    FAT_ARROW,
    QUESTION,

    // ── Delimiters (6) ─────────────────────────────────────────────────
    L_PAREN,
    R_PAREN,
    L_BRACKET,
    R_BRACKET,
    L_BRACE,
    R_BRACE,

    // ── Punctuation (6) ────────────────────────────────────────────────
    COMMA,
    DOT,
    COLON,
    COLON_COLON,
    SEMICOLON,
    UNDERSCORE,

    // ── Literals and identifiers (4) ───────────────────────────────────
    INT_LITERAL,
    FLOAT_LITERAL,
    STRING_LITERAL,
    IDENT,

    // ── Trivia (4) ─────────────────────────────────────────────────────
    WHITESPACE,
    NEWLINE,
    COMMENT,
    DOC_COMMENT,

    // ── Special (2) ────────────────────────────────────────────────────
    EOF,
    /// Lexer error token
    ERROR,

    // ── Items and declarations ─────────────────────────────────────────
    /// Root node of a parsed source file.
    SOURCE_FILE,
    /// Function definition: `fn name(params) -> Ret { ... }`
    FN_DEF,
    /// Visibility modifier: `pub`
    VISIBILITY,
    /// Parameter list: `(a, b: Int)`
    PARAM_LIST,
    /// Single parameter in a parameter list.
    PARAM,
    /// Type annotation: `: Type`
    TYPE_ANNOTATION,
    /// Return type: `-> Type`
    RET_TYPE,
    /// Struct definition: `struct Point { x: Int, y: Int }`
    STRUCT_DEF,
    /// Single field in a struct definition.
    STRUCT_FIELD,
    /// Import declaration: `import std::io;`
    IMPORT_DECL,
    /// Type alias: `type Name = Type;`
    TYPE_ALIAS_DEF,
    /// Name in a definition position.
    NAME,
    /// Name reference (identifier used as expression).
    NAME_REF,
    /// Qualified path: `module::name`
    PATH,

    // ── Statements ─────────────────────────────────────────────────────
    /// Let binding: `let x: Int = expr`
    LET_STMT,
    /// Expression in statement position.
    EXPR_STMT,

    // ── Expressions ────────────────────────────────────────────────────
    /// Literal expression (int, float, string, bool, nil).
    LITERAL,
    /// Binary expression: `a + b`, `a == b`, etc.
    BINARY_EXPR,
    /// Unary expression: `-x`, `!x`
    UNARY_EXPR,
    /// Parenthesized expression: `(a)`
    PAREN_EXPR,
    /// Tuple expression: `(a, b, c)`
    TUPLE_EXPR,
    /// Array expression: `[a, b, c]`
    ARRAY_EXPR,
    /// Function call: `f(args)`
    CALL_EXPR,
    /// Argument list: `(a, b, c)`
    ARG_LIST,
    /// Method call: `recv.name(args)`
    METHOD_CALL_EXPR,
    /// Field access: `expr.field`
    FIELD_EXPR,
    /// Index expression: `expr[index]`
    INDEX_EXPR,
    /// Assignment: `target = value`
    ASSIGN_EXPR,
    /// If expression: `if cond { ... } else { ... }`
    IF_EXPR,
    /// Else branch of an if expression.
    ELSE_BRANCH,
    /// While loop: `while cond { ... }`
    WHILE_EXPR,
    /// For loop: `for pat in expr { ... }`
    FOR_EXPR,
    /// Match expression: `match expr { arms }`
    MATCH_EXPR,
    /// Single arm in a match expression.
    MATCH_ARM,
    /// Guard on a match arm: `if cond`
    MATCH_GUARD,
    /// Closure expression: `fn (x) -> x + 1`
    CLOSURE_EXPR,
    /// Block: `;`-separated statements between braces.
    BLOCK,
    /// Return expression: `return expr`
    RETURN_EXPR,
    /// `break`
    BREAK_EXPR,
    /// `continue`
    CONTINUE_EXPR,
    /// Struct literal: `Point { x: 1, y: 2 }`
    STRUCT_LITERAL,
    /// Single field in a struct literal.
    STRUCT_LITERAL_FIELD,

    // ── Patterns ───────────────────────────────────────────────────────
    /// Wildcard pattern: `_`
    WILDCARD_PAT,
    /// Identifier pattern: `x`
    IDENT_PAT,
    /// Literal pattern: `42`, `"hello"`, `true`
    LITERAL_PAT,
    /// Tuple pattern: `(a, b, c)`
    TUPLE_PAT,
    /// Constructor pattern: `Some(x)`
    CONSTRUCTOR_PAT,
    /// Or-pattern: `A | B`
    OR_PAT,

    // ── Types ──────────────────────────────────────────────────────────
    /// Named type with optional generic arguments: `List<Int>`
    PATH_TYPE,
    /// Generic argument list in type application: `<Int, String>`
    GENERIC_ARG_LIST,
    /// Tuple type: `(Int, String)`
    TUPLE_TYPE,
    /// Function type: `fn(Int) -> Int`
    FN_TYPE,
    /// Option type sugar: `Int?`
    OPTION_TYPE,
}

impl SyntaxKind {
    /// The highest-numbered kind.
    pub const LAST: SyntaxKind = SyntaxKind::OPTION_TYPE;

    /// Convert a raw discriminant back into a kind.
    ///
    /// Returns `None` for values outside the enum's range.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        if raw <= SyntaxKind::LAST as u16 {
            // Safety: SyntaxKind is #[repr(u16)] with contiguous discriminants
            // starting at 0, and `raw` is within range.
            Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
        } else {
            None
        }
    }

    /// Every kind, in discriminant order.
    pub fn all() -> impl Iterator<Item = SyntaxKind> {
        (0..=SyntaxKind::LAST as u16).filter_map(SyntaxKind::from_raw)
    }

    /// Whether this kind represents trivia (tokens that don't affect parsing).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE
                | SyntaxKind::NEWLINE
                | SyntaxKind::COMMENT
                | SyntaxKind::DOC_COMMENT
        )
    }

    /// Whether this kind is a leaf token (trivia included).
    pub fn is_token(self) -> bool {
        self > SyntaxKind::ERROR_NODE && self < SyntaxKind::SOURCE_FILE
    }

    /// Whether this kind is a composite node produced by a parser.
    pub fn is_node(self) -> bool {
        self >= SyntaxKind::SOURCE_FILE
    }

    /// Whether tokens of this kind carry a literal value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::INT_LITERAL | SyntaxKind::FLOAT_LITERAL | SyntaxKind::STRING_LITERAL
        )
    }

    /// The canonical source text of fixed-text tokens (keywords, operators,
    /// punctuation). `EOF` is the empty string.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::BREAK_KW => "break",
            SyntaxKind::CONTINUE_KW => "continue",
            SyntaxKind::ELSE_KW => "else",
            SyntaxKind::FALSE_KW => "false",
            SyntaxKind::FN_KW => "fn",
            SyntaxKind::FOR_KW => "for",
            SyntaxKind::IF_KW => "if",
            SyntaxKind::IMPORT_KW => "import",
            SyntaxKind::IN_KW => "in",
            SyntaxKind::LET_KW => "let",
            SyntaxKind::MATCH_KW => "match",
            SyntaxKind::NIL_KW => "nil",
            SyntaxKind::PUB_KW => "pub",
            SyntaxKind::RETURN_KW => "return",
            SyntaxKind::STRUCT_KW => "struct",
            SyntaxKind::TRUE_KW => "true",
            SyntaxKind::TYPE_KW => "type",
            SyntaxKind::WHILE_KW => "while",
            SyntaxKind::PLUS => "+",
            SyntaxKind::MINUS => "-",
            SyntaxKind::STAR => "*",
            SyntaxKind::SLASH => "/",
            SyntaxKind::PERCENT => "%",
            SyntaxKind::EQ_EQ => "==",
            SyntaxKind::NOT_EQ => "!=",
            SyntaxKind::LT => "<",
            SyntaxKind::GT => ">",
            SyntaxKind::LT_EQ => "<=",
            SyntaxKind::GT_EQ => ">=",
            SyntaxKind::AMP_AMP => "&&",
            SyntaxKind::PIPE_PIPE => "||",
            SyntaxKind::BANG => "!",
            SyntaxKind::PIPE => "|>",
            SyntaxKind::BAR => "|",
            SyntaxKind::DOT_DOT => "..",
            SyntaxKind::EQ => "=",
            SyntaxKind::ARROW => "->",
            SyntaxKind::FAT_ARROW => "=>",
            SyntaxKind::QUESTION => "?",
            SyntaxKind::L_PAREN => "(",
            SyntaxKind::R_PAREN => ")",
            SyntaxKind::L_BRACKET => "[",
            SyntaxKind::R_BRACKET => "]",
            SyntaxKind::L_BRACE => "{",
            SyntaxKind::R_BRACE => "}",
            SyntaxKind::COMMA => ",",
            SyntaxKind::DOT => ".",
            SyntaxKind::COLON => ":",
            SyntaxKind::COLON_COLON => "::",
            SyntaxKind::SEMICOLON => ";",
            SyntaxKind::UNDERSCORE => "_",
            SyntaxKind::EOF => "",
            _ => return None,
        };
        Some(text)
    }

    /// The variant name, as written in generated code (`SyntaxKind::PLUS`).
    pub fn name(self) -> String {
        format!("{self:?}")
    }

    /// Look a kind up by its variant name.
    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        SyntaxKind::all().find(|kind| kind.name() == name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}
