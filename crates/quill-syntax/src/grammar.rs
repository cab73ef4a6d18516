//! The grammar shape table.
//!
//! Every composite node kind has one [`NodeShape`]: the canonical factory that
//! builds it, an optional discriminant, and its ordered child slots. The
//! `grammar!` invocation below is the single place node shapes are authored;
//! it produces both the static shapes (read by the quoting engine) and the
//! typed per-kind factory functions (called by generated code).
//!
//! [`rule`] maps every [`SyntaxKind`] to exactly one [`KindRule`]. It is a
//! plain `match` with no wildcard arm, so a new kind without a rule does not
//! compile.

use std::fmt;

use crate::ops::DiscriminantKind;
use crate::syntax_kind::SyntaxKind;

// ── Shape types ────────────────────────────────────────────────────────

/// A set of node kinds accepted by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Expr,
    Stmt,
    Item,
    Pat,
    Type,
    /// The body of an `else`: a block or a chained `if`.
    ElseBody,
    /// Exactly one node kind.
    Kind(SyntaxKind),
}

impl NodeClass {
    pub fn contains(self, kind: SyntaxKind) -> bool {
        use SyntaxKind::*;
        match self {
            NodeClass::Expr => matches!(
                kind,
                LITERAL
                    | BINARY_EXPR
                    | UNARY_EXPR
                    | PAREN_EXPR
                    | TUPLE_EXPR
                    | ARRAY_EXPR
                    | CALL_EXPR
                    | METHOD_CALL_EXPR
                    | FIELD_EXPR
                    | INDEX_EXPR
                    | ASSIGN_EXPR
                    | IF_EXPR
                    | WHILE_EXPR
                    | FOR_EXPR
                    | MATCH_EXPR
                    | CLOSURE_EXPR
                    | BLOCK
                    | RETURN_EXPR
                    | BREAK_EXPR
                    | CONTINUE_EXPR
                    | STRUCT_LITERAL
                    | NAME_REF
                    | PATH
            ),
            NodeClass::Stmt => matches!(kind, LET_STMT | EXPR_STMT),
            NodeClass::Item => matches!(kind, FN_DEF | STRUCT_DEF | IMPORT_DECL | TYPE_ALIAS_DEF),
            NodeClass::Pat => matches!(
                kind,
                WILDCARD_PAT | IDENT_PAT | LITERAL_PAT | TUPLE_PAT | CONSTRUCTOR_PAT | OR_PAT
            ),
            NodeClass::Type => matches!(kind, PATH_TYPE | TUPLE_TYPE | FN_TYPE | OPTION_TYPE),
            NodeClass::ElseBody => matches!(kind, BLOCK | IF_EXPR),
            NodeClass::Kind(k) => k == kind,
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeClass::Expr => write!(f, "an expression"),
            NodeClass::Stmt => write!(f, "a statement"),
            NodeClass::Item => write!(f, "an item"),
            NodeClass::Pat => write!(f, "a pattern"),
            NodeClass::Type => write!(f, "a type"),
            NodeClass::ElseBody => write!(f, "a block or if expression"),
            NodeClass::Kind(k) => write!(f, "{k:?}"),
        }
    }
}

/// What a single child slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildShape {
    Node(NodeClass),
    OptionalNode(NodeClass),
    Token(&'static [SyntaxKind]),
    OptionalToken(&'static [SyntaxKind]),
    /// An ordered run of nodes, with a separator token between consecutive
    /// elements when `separator` is set.
    List {
        element: NodeClass,
        separator: Option<SyntaxKind>,
    },
}

impl ChildShape {
    pub fn is_optional(self) -> bool {
        matches!(self, ChildShape::OptionalNode(_) | ChildShape::OptionalToken(_))
    }

    pub fn is_list(self) -> bool {
        matches!(self, ChildShape::List { .. })
    }
}

impl fmt::Display for ChildShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildShape::Node(class) => write!(f, "{class}"),
            ChildShape::OptionalNode(class) => write!(f, "optional {class}"),
            ChildShape::Token(kinds) | ChildShape::OptionalToken(kinds) => {
                if self.is_optional() {
                    write!(f, "optional ")?;
                }
                let names: Vec<String> = kinds.iter().map(|k| k.name()).collect();
                write!(f, "{}", names.join(" | "))
            }
            ChildShape::List {
                element,
                separator: None,
            } => write!(f, "list of {element}"),
            ChildShape::List {
                element,
                separator: Some(sep),
            } => write!(f, "{sep:?}-separated list of {element}"),
        }
    }
}

/// One named child position of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSlot {
    pub name: &'static str,
    pub shape: ChildShape,
}

/// Where a node kind's discriminant comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscriminantSpec {
    pub kind: DiscriminantKind,
    /// Name of the token slot the discriminant is derived from.
    pub slot: &'static str,
}

/// The full child shape of one composite node kind.
#[derive(Debug, PartialEq, Eq)]
pub struct NodeShape {
    pub kind: SyntaxKind,
    /// Name of the canonical full-shape factory function.
    pub factory: &'static str,
    pub discriminant: Option<DiscriminantSpec>,
    pub slots: &'static [ChildSlot],
}

impl NodeShape {
    /// Number of arguments a builder call for this shape takes, the
    /// discriminant included.
    pub fn arity(&self) -> usize {
        self.slots.len() + usize::from(self.discriminant.is_some())
    }

    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Index of the token slot the discriminant is derived from.
    pub fn discriminant_slot(&self) -> Option<(DiscriminantKind, usize)> {
        let spec = self.discriminant?;
        self.slot_index(spec.slot).map(|index| (spec.kind, index))
    }
}

/// How the quoting engine must treat a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRule {
    /// A composite node, reconstructed through its shape.
    Node(&'static NodeShape),
    /// A significant leaf token.
    Token,
    /// Whitespace or comments.
    Trivia,
    /// The parser's error wrapper; a tree containing it cannot be quoted.
    ErrorNode,
    /// Internal placeholder that never appears in a finished tree.
    Sentinel,
}

// ── Shape authoring macros ─────────────────────────────────────────────

macro_rules! class {
    (Expr) => { NodeClass::Expr };
    (Stmt) => { NodeClass::Stmt };
    (Item) => { NodeClass::Item };
    (Pat) => { NodeClass::Pat };
    (Type) => { NodeClass::Type };
    (ElseBody) => { NodeClass::ElseBody };
    ($kind:ident) => { NodeClass::Kind(SyntaxKind::$kind) };
}

macro_rules! slot_shape {
    (node ($class:ident)) => { ChildShape::Node(class!($class)) };
    (opt_node ($class:ident)) => { ChildShape::OptionalNode(class!($class)) };
    (token [$($kind:ident),+]) => { ChildShape::Token(&[$(SyntaxKind::$kind),+]) };
    (tokens ($set:expr)) => { ChildShape::Token($set) };
    (opt_token [$($kind:ident),+]) => { ChildShape::OptionalToken(&[$(SyntaxKind::$kind),+]) };
    (list ($class:ident)) => {
        ChildShape::List { element: class!($class), separator: None }
    };
    (sep_list ($class:ident, $sep:ident)) => {
        ChildShape::List { element: class!($class), separator: Some(SyntaxKind::$sep) }
    };
}

macro_rules! slot_type {
    (node) => { GreenNode };
    (opt_node) => { Option<GreenNode> };
    (token) => { Token };
    (tokens) => { Token };
    (opt_token) => { Option<Token> };
    (list) => { NodeList };
    (sep_list) => { NodeList };
}

macro_rules! discriminant_spec {
    () => { None };
    ($family:ident $slot:ident) => {
        Some(DiscriminantSpec { kind: DiscriminantKind::$family, slot: stringify!($slot) })
    };
}

macro_rules! discriminant_type {
    (Binary) => { crate::ops::BinaryOp };
    (Unary) => { crate::ops::UnaryOp };
    (Literal) => { crate::ops::LiteralKind };
}

macro_rules! node_fn {
    ($kind:ident => $factory:ident [] { $($slot:ident : $form:ident),* }) => {
        #[doc = concat!("Build a `", stringify!($kind), "` node.")]
        pub fn $factory($($slot: slot_type!($form)),*) -> Result<GreenNode, FactoryError> {
            build_node(&shapes::$kind, None, vec![$(Child::from($slot)),*])
        }
    };
    ($kind:ident => $factory:ident [$family:ident] { $($slot:ident : $form:ident),* }) => {
        #[doc = concat!(
            "Build a `", stringify!($kind), "` node. The discriminant must agree with the operator token."
        )]
        pub fn $factory(
            discriminant: discriminant_type!($family),
            $($slot: slot_type!($form)),*
        ) -> Result<GreenNode, FactoryError> {
            build_node(
                &shapes::$kind,
                Some(Discriminant::from(discriminant)),
                vec![$(Child::from($slot)),*],
            )
        }
    };
}

macro_rules! grammar {
    ($(
        $kind:ident => $factory:ident $([$family:ident from $disc_slot:ident])? {
            $($slot:ident : $form:ident $shape:tt),* $(,)?
        }
    )*) => {
        /// Static shapes, one per composite node kind, named after the kind.
        pub mod shapes {
            use super::*;

            $(
                pub static $kind: NodeShape = NodeShape {
                    kind: SyntaxKind::$kind,
                    factory: stringify!($factory),
                    discriminant: discriminant_spec!($($family $disc_slot)?),
                    slots: &[$(ChildSlot { name: stringify!($slot), shape: slot_shape!($form $shape) }),*],
                };
            )*

            pub(crate) static ALL: &[&NodeShape] = &[$(&$kind),*];
        }

        /// Typed full-shape factory functions, one per composite node kind.
        pub mod nodes {
            use rowan::GreenNode;

            use crate::factory::{build_node, Child, FactoryError, NodeList};
            use crate::ops::Discriminant;
            use crate::token::Token;

            use super::shapes;

            $(
                node_fn!($kind => $factory [$($family)?] { $($slot : $form),* });
            )*
        }
    };
}

grammar! {
    // ── Items and declarations ─────────────────────────────────────────
    SOURCE_FILE => source_file {
        items: list(Item),
        eof: token[EOF],
    }
    FN_DEF => fn_def {
        visibility: opt_node(VISIBILITY),
        fn_kw: token[FN_KW],
        name: node(NAME),
        params: node(PARAM_LIST),
        ret_type: opt_node(RET_TYPE),
        body: node(BLOCK),
    }
    VISIBILITY => visibility {
        pub_kw: token[PUB_KW],
    }
    PARAM_LIST => param_list {
        l_paren: token[L_PAREN],
        params: sep_list(PARAM, COMMA),
        r_paren: token[R_PAREN],
    }
    PARAM => param {
        pat: node(Pat),
        annotation: opt_node(TYPE_ANNOTATION),
    }
    TYPE_ANNOTATION => type_annotation {
        colon: token[COLON],
        ty: node(Type),
    }
    RET_TYPE => ret_type {
        arrow: token[ARROW],
        ty: node(Type),
    }
    STRUCT_DEF => struct_def {
        visibility: opt_node(VISIBILITY),
        struct_kw: token[STRUCT_KW],
        name: node(NAME),
        l_brace: token[L_BRACE],
        fields: sep_list(STRUCT_FIELD, COMMA),
        r_brace: token[R_BRACE],
    }
    STRUCT_FIELD => struct_field {
        name: node(NAME),
        colon: token[COLON],
        ty: node(Type),
    }
    IMPORT_DECL => import_decl {
        import_kw: token[IMPORT_KW],
        path: node(PATH),
        semicolon: token[SEMICOLON],
    }
    TYPE_ALIAS_DEF => type_alias_def {
        visibility: opt_node(VISIBILITY),
        type_kw: token[TYPE_KW],
        name: node(NAME),
        eq: token[EQ],
        ty: node(Type),
        semicolon: token[SEMICOLON],
    }
    NAME => name {
        ident: token[IDENT],
    }
    NAME_REF => name_ref {
        ident: token[IDENT],
    }
    PATH => path {
        segments: sep_list(NAME_REF, COLON_COLON),
    }

    // ── Statements ─────────────────────────────────────────────────────
    LET_STMT => let_stmt {
        let_kw: token[LET_KW],
        pat: node(Pat),
        annotation: opt_node(TYPE_ANNOTATION),
        eq: token[EQ],
        initializer: node(Expr),
    }
    EXPR_STMT => expr_stmt {
        expr: node(Expr),
    }

    // ── Expressions ────────────────────────────────────────────────────
    LITERAL => literal [Literal from token] {
        token: tokens(crate::ops::LiteralKind::TOKENS),
    }
    BINARY_EXPR => binary_expr [Binary from op_token] {
        lhs: node(Expr),
        op_token: tokens(crate::ops::BinaryOp::TOKENS),
        rhs: node(Expr),
    }
    UNARY_EXPR => unary_expr [Unary from op_token] {
        op_token: tokens(crate::ops::UnaryOp::TOKENS),
        operand: node(Expr),
    }
    PAREN_EXPR => paren_expr {
        l_paren: token[L_PAREN],
        expr: node(Expr),
        r_paren: token[R_PAREN],
    }
    TUPLE_EXPR => tuple_expr {
        l_paren: token[L_PAREN],
        elements: sep_list(Expr, COMMA),
        r_paren: token[R_PAREN],
    }
    ARRAY_EXPR => array_expr {
        l_bracket: token[L_BRACKET],
        elements: sep_list(Expr, COMMA),
        r_bracket: token[R_BRACKET],
    }
    CALL_EXPR => call_expr {
        callee: node(Expr),
        args: node(ARG_LIST),
    }
    ARG_LIST => arg_list {
        l_paren: token[L_PAREN],
        args: sep_list(Expr, COMMA),
        r_paren: token[R_PAREN],
    }
    METHOD_CALL_EXPR => method_call_expr {
        receiver: node(Expr),
        dot: token[DOT],
        method: node(NAME_REF),
        args: node(ARG_LIST),
    }
    FIELD_EXPR => field_expr {
        receiver: node(Expr),
        dot: token[DOT],
        field: node(NAME_REF),
    }
    INDEX_EXPR => index_expr {
        base: node(Expr),
        l_bracket: token[L_BRACKET],
        index: node(Expr),
        r_bracket: token[R_BRACKET],
    }
    ASSIGN_EXPR => assign_expr {
        target: node(Expr),
        eq: token[EQ],
        value: node(Expr),
    }
    IF_EXPR => if_expr {
        if_kw: token[IF_KW],
        condition: node(Expr),
        then_branch: node(BLOCK),
        else_branch: opt_node(ELSE_BRANCH),
    }
    ELSE_BRANCH => else_branch {
        else_kw: token[ELSE_KW],
        body: node(ElseBody),
    }
    WHILE_EXPR => while_expr {
        while_kw: token[WHILE_KW],
        condition: node(Expr),
        body: node(BLOCK),
    }
    FOR_EXPR => for_expr {
        for_kw: token[FOR_KW],
        pat: node(Pat),
        in_kw: token[IN_KW],
        iterable: node(Expr),
        body: node(BLOCK),
    }
    MATCH_EXPR => match_expr {
        match_kw: token[MATCH_KW],
        scrutinee: node(Expr),
        l_brace: token[L_BRACE],
        arms: sep_list(MATCH_ARM, COMMA),
        r_brace: token[R_BRACE],
    }
    MATCH_ARM => match_arm {
        pat: node(Pat),
        guard: opt_node(MATCH_GUARD),
        fat_arrow: token[FAT_ARROW],
        body: node(Expr),
    }
    MATCH_GUARD => match_guard {
        if_kw: token[IF_KW],
        condition: node(Expr),
    }
    CLOSURE_EXPR => closure_expr {
        fn_kw: token[FN_KW],
        params: node(PARAM_LIST),
        ret_type: opt_node(RET_TYPE),
        body: node(Expr),
    }
    BLOCK => block {
        l_brace: token[L_BRACE],
        stmts: sep_list(Stmt, SEMICOLON),
        trailing_semicolon: opt_token[SEMICOLON],
        r_brace: token[R_BRACE],
    }
    RETURN_EXPR => return_expr {
        return_kw: token[RETURN_KW],
        value: opt_node(Expr),
    }
    BREAK_EXPR => break_expr {
        break_kw: token[BREAK_KW],
    }
    CONTINUE_EXPR => continue_expr {
        continue_kw: token[CONTINUE_KW],
    }
    STRUCT_LITERAL => struct_literal {
        name: node(NAME_REF),
        l_brace: token[L_BRACE],
        fields: sep_list(STRUCT_LITERAL_FIELD, COMMA),
        r_brace: token[R_BRACE],
    }
    STRUCT_LITERAL_FIELD => struct_literal_field {
        name: node(NAME_REF),
        colon: token[COLON],
        value: node(Expr),
    }

    // ── Patterns ───────────────────────────────────────────────────────
    WILDCARD_PAT => wildcard_pat {
        underscore: token[UNDERSCORE],
    }
    IDENT_PAT => ident_pat {
        name: node(NAME),
    }
    LITERAL_PAT => literal_pat {
        literal: node(LITERAL),
    }
    TUPLE_PAT => tuple_pat {
        l_paren: token[L_PAREN],
        elements: sep_list(Pat, COMMA),
        r_paren: token[R_PAREN],
    }
    CONSTRUCTOR_PAT => constructor_pat {
        path: node(PATH),
        l_paren: token[L_PAREN],
        fields: sep_list(Pat, COMMA),
        r_paren: token[R_PAREN],
    }
    OR_PAT => or_pat {
        lhs: node(Pat),
        bar: token[BAR],
        rhs: node(Pat),
    }

    // ── Types ──────────────────────────────────────────────────────────
    PATH_TYPE => path_type {
        path: node(PATH),
        generic_args: opt_node(GENERIC_ARG_LIST),
    }
    GENERIC_ARG_LIST => generic_arg_list {
        l_angle: token[LT],
        args: sep_list(Type, COMMA),
        r_angle: token[GT],
    }
    TUPLE_TYPE => tuple_type {
        l_paren: token[L_PAREN],
        elements: sep_list(Type, COMMA),
        r_paren: token[R_PAREN],
    }
    FN_TYPE => fn_type {
        fn_kw: token[FN_KW],
        l_paren: token[L_PAREN],
        params: sep_list(Type, COMMA),
        r_paren: token[R_PAREN],
        ret_type: node(RET_TYPE),
    }
    OPTION_TYPE => option_type {
        inner: node(Type),
        question: token[QUESTION],
    }
}

// ── Dispatch ───────────────────────────────────────────────────────────

/// The rule for `kind`.
pub fn rule(kind: SyntaxKind) -> KindRule {
    use SyntaxKind::*;
    match kind {
        TOMBSTONE => KindRule::Sentinel,
        ERROR_NODE => KindRule::ErrorNode,

        BREAK_KW | CONTINUE_KW | ELSE_KW | FALSE_KW | FN_KW | FOR_KW | IF_KW | IMPORT_KW
        | IN_KW | LET_KW | MATCH_KW | NIL_KW | PUB_KW | RETURN_KW | STRUCT_KW | TRUE_KW
        | TYPE_KW | WHILE_KW => KindRule::Token,
        PLUS | MINUS | STAR | SLASH | PERCENT | EQ_EQ | NOT_EQ | LT | GT | LT_EQ | GT_EQ
        | AMP_AMP | PIPE_PIPE | BANG | PIPE | BAR | DOT_DOT | EQ | ARROW | FAT_ARROW
        | QUESTION => KindRule::Token,
        L_PAREN | R_PAREN | L_BRACKET | R_BRACKET | L_BRACE | R_BRACE => KindRule::Token,
        COMMA | DOT | COLON | COLON_COLON | SEMICOLON | UNDERSCORE => KindRule::Token,
        INT_LITERAL | FLOAT_LITERAL | STRING_LITERAL | IDENT => KindRule::Token,
        EOF | ERROR => KindRule::Token,

        WHITESPACE | NEWLINE | COMMENT | DOC_COMMENT => KindRule::Trivia,

        SOURCE_FILE => KindRule::Node(&shapes::SOURCE_FILE),
        FN_DEF => KindRule::Node(&shapes::FN_DEF),
        VISIBILITY => KindRule::Node(&shapes::VISIBILITY),
        PARAM_LIST => KindRule::Node(&shapes::PARAM_LIST),
        PARAM => KindRule::Node(&shapes::PARAM),
        TYPE_ANNOTATION => KindRule::Node(&shapes::TYPE_ANNOTATION),
        RET_TYPE => KindRule::Node(&shapes::RET_TYPE),
        STRUCT_DEF => KindRule::Node(&shapes::STRUCT_DEF),
        STRUCT_FIELD => KindRule::Node(&shapes::STRUCT_FIELD),
        IMPORT_DECL => KindRule::Node(&shapes::IMPORT_DECL),
        TYPE_ALIAS_DEF => KindRule::Node(&shapes::TYPE_ALIAS_DEF),
        NAME => KindRule::Node(&shapes::NAME),
        NAME_REF => KindRule::Node(&shapes::NAME_REF),
        PATH => KindRule::Node(&shapes::PATH),

        LET_STMT => KindRule::Node(&shapes::LET_STMT),
        EXPR_STMT => KindRule::Node(&shapes::EXPR_STMT),

        LITERAL => KindRule::Node(&shapes::LITERAL),
        BINARY_EXPR => KindRule::Node(&shapes::BINARY_EXPR),
        UNARY_EXPR => KindRule::Node(&shapes::UNARY_EXPR),
        PAREN_EXPR => KindRule::Node(&shapes::PAREN_EXPR),
        TUPLE_EXPR => KindRule::Node(&shapes::TUPLE_EXPR),
        ARRAY_EXPR => KindRule::Node(&shapes::ARRAY_EXPR),
        CALL_EXPR => KindRule::Node(&shapes::CALL_EXPR),
        ARG_LIST => KindRule::Node(&shapes::ARG_LIST),
        METHOD_CALL_EXPR => KindRule::Node(&shapes::METHOD_CALL_EXPR),
        FIELD_EXPR => KindRule::Node(&shapes::FIELD_EXPR),
        INDEX_EXPR => KindRule::Node(&shapes::INDEX_EXPR),
        ASSIGN_EXPR => KindRule::Node(&shapes::ASSIGN_EXPR),
        IF_EXPR => KindRule::Node(&shapes::IF_EXPR),
        ELSE_BRANCH => KindRule::Node(&shapes::ELSE_BRANCH),
        WHILE_EXPR => KindRule::Node(&shapes::WHILE_EXPR),
        FOR_EXPR => KindRule::Node(&shapes::FOR_EXPR),
        MATCH_EXPR => KindRule::Node(&shapes::MATCH_EXPR),
        MATCH_ARM => KindRule::Node(&shapes::MATCH_ARM),
        MATCH_GUARD => KindRule::Node(&shapes::MATCH_GUARD),
        CLOSURE_EXPR => KindRule::Node(&shapes::CLOSURE_EXPR),
        BLOCK => KindRule::Node(&shapes::BLOCK),
        RETURN_EXPR => KindRule::Node(&shapes::RETURN_EXPR),
        BREAK_EXPR => KindRule::Node(&shapes::BREAK_EXPR),
        CONTINUE_EXPR => KindRule::Node(&shapes::CONTINUE_EXPR),
        STRUCT_LITERAL => KindRule::Node(&shapes::STRUCT_LITERAL),
        STRUCT_LITERAL_FIELD => KindRule::Node(&shapes::STRUCT_LITERAL_FIELD),

        WILDCARD_PAT => KindRule::Node(&shapes::WILDCARD_PAT),
        IDENT_PAT => KindRule::Node(&shapes::IDENT_PAT),
        LITERAL_PAT => KindRule::Node(&shapes::LITERAL_PAT),
        TUPLE_PAT => KindRule::Node(&shapes::TUPLE_PAT),
        CONSTRUCTOR_PAT => KindRule::Node(&shapes::CONSTRUCTOR_PAT),
        OR_PAT => KindRule::Node(&shapes::OR_PAT),

        PATH_TYPE => KindRule::Node(&shapes::PATH_TYPE),
        GENERIC_ARG_LIST => KindRule::Node(&shapes::GENERIC_ARG_LIST),
        TUPLE_TYPE => KindRule::Node(&shapes::TUPLE_TYPE),
        FN_TYPE => KindRule::Node(&shapes::FN_TYPE),
        OPTION_TYPE => KindRule::Node(&shapes::OPTION_TYPE),
    }
}

/// The shape of a composite node kind, or `None` for leaves and sentinels.
pub fn shape(kind: SyntaxKind) -> Option<&'static NodeShape> {
    match rule(kind) {
        KindRule::Node(shape) => Some(shape),
        _ => None,
    }
}

/// Every node shape, in kind order.
pub fn node_shapes() -> impl Iterator<Item = &'static NodeShape> {
    shapes::ALL.iter().copied()
}

/// Look a shape up by its factory function name.
pub fn shape_by_factory(name: &str) -> Option<&'static NodeShape> {
    node_shapes().find(|shape| shape.factory == name)
}
