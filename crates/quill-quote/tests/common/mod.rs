//! Tree builders shared by the quoting integration tests.
//!
//! Trees are built through the factory, so every sample is well formed by
//! construction.

#![allow(dead_code)]

use quill_syntax::factory::*;
use quill_syntax::{BinaryOp, LiteralKind, SyntaxKind, SyntaxNode, Token, TriviaList, UnaryOp};
use rowan::GreenNode;

pub fn ws(text: &str) -> TriviaList {
    trivia_list(vec![trivia(SyntaxKind::WHITESPACE, text).unwrap()])
}

pub fn nl() -> TriviaList {
    trivia_list(vec![trivia(SyntaxKind::NEWLINE, "\n").unwrap()])
}

pub fn tok(kind: SyntaxKind) -> Token {
    token(kind).unwrap()
}

/// A fixed-text token followed by a space.
pub fn sp(kind: SyntaxKind) -> Token {
    let text = kind.fixed_text().unwrap();
    token_full(TriviaList::new(), kind, text, None, ws(" ")).unwrap()
}

/// A fixed-text token followed by a newline.
pub fn eol(kind: SyntaxKind) -> Token {
    let text = kind.fixed_text().unwrap();
    token_full(TriviaList::new(), kind, text, None, nl()).unwrap()
}

/// A fixed-text token preceded by a space.
pub fn lead(kind: SyntaxKind) -> Token {
    let text = kind.fixed_text().unwrap();
    token_full(ws(" "), kind, text, None, TriviaList::new()).unwrap()
}

pub fn ident(text: &str) -> Token {
    token_text(SyntaxKind::IDENT, text).unwrap()
}

pub fn ident_sp(text: &str) -> Token {
    token_full(TriviaList::new(), SyntaxKind::IDENT, text, None, ws(" ")).unwrap()
}

pub fn name_node(text: &str) -> GreenNode {
    name(ident(text)).unwrap()
}

pub fn name_ref_node(text: &str) -> GreenNode {
    name_ref(ident(text)).unwrap()
}

pub fn int(text: &str) -> GreenNode {
    literal(LiteralKind::Int, token_text(SyntaxKind::INT_LITERAL, text).unwrap()).unwrap()
}

pub fn path_of(segments: &[&str]) -> GreenNode {
    let nodes = segments.iter().map(|s| name_ref_node(s)).collect();
    path(separated(nodes, SyntaxKind::COLON_COLON)).unwrap()
}

pub fn named_type(text: &str) -> GreenNode {
    path_type(path_of(&[text]), None).unwrap()
}

pub fn ident_pat_node(text: &str) -> GreenNode {
    ident_pat(name_node(text)).unwrap()
}

/// Interleave `items` with plain separator tokens.
pub fn separated(items: Vec<GreenNode>, sep: SyntaxKind) -> NodeList {
    let mut list = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            list.push(ListItem::from(tok(sep)));
        }
        list.push(ListItem::from(item));
    }
    separated_list(list)
}

/// Interleave `items` with `, ` separators.
pub fn comma_list(items: Vec<GreenNode>) -> NodeList {
    let mut list = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            list.push(ListItem::from(sp(SyntaxKind::COMMA)));
        }
        list.push(ListItem::from(item));
    }
    separated_list(list)
}

pub fn stmt(expr: GreenNode) -> GreenNode {
    expr_stmt(expr).unwrap()
}

pub fn block_of(stmts: Vec<GreenNode>) -> GreenNode {
    block(sp(SyntaxKind::L_BRACE), separated(stmts, SyntaxKind::SEMICOLON), None, lead(SyntaxKind::R_BRACE)).unwrap()
}

pub fn binary(op: BinaryOp, kind: SyntaxKind, lhs: GreenNode, rhs: GreenNode) -> GreenNode {
    binary_expr(op, lhs, lead(kind), rhs).unwrap()
}

/// `a + b`, without trivia.
pub fn a_plus_b() -> GreenNode {
    binary_expr(BinaryOp::Add, name_ref_node("a"), tok(SyntaxKind::PLUS), name_ref_node("b")).unwrap()
}

pub fn root(green: GreenNode) -> SyntaxNode {
    SyntaxNode::new_root(green)
}

/// A source file exercising every composite node kind.
pub fn sample_source_file() -> GreenNode {
    let items = vec![import_item(), type_alias_item(), struct_item(), fn_item()];
    source_file(node_list(items), tok(SyntaxKind::EOF)).unwrap()
}

/// `import std::io;`
fn import_item() -> GreenNode {
    import_decl(sp(SyntaxKind::IMPORT_KW), path_of(&["std", "io"]), eol(SyntaxKind::SEMICOLON)).unwrap()
}

/// `pub type Pair = (Int, Float?);`
fn type_alias_item() -> GreenNode {
    let float_opt = option_type(named_type("Float"), tok(SyntaxKind::QUESTION)).unwrap();
    let pair = tuple_type(
        tok(SyntaxKind::L_PAREN),
        comma_list(vec![named_type("Int"), float_opt]),
        tok(SyntaxKind::R_PAREN),
    )
    .unwrap();
    type_alias_def(
        Some(visibility(sp(SyntaxKind::PUB_KW)).unwrap()),
        sp(SyntaxKind::TYPE_KW),
        name(ident_sp("Pair")).unwrap(),
        sp(SyntaxKind::EQ),
        pair,
        eol(SyntaxKind::SEMICOLON),
    )
    .unwrap()
}

/// `struct Point { x: Int, y: List<Int> }`
fn struct_item() -> GreenNode {
    let list_int = path_type(
        path_of(&["List"]),
        Some(generic_arg_list(tok(SyntaxKind::LT), comma_list(vec![named_type("Int")]), tok(SyntaxKind::GT)).unwrap()),
    )
    .unwrap();
    let fields = comma_list(vec![
        struct_field(name_node("x"), sp(SyntaxKind::COLON), named_type("Int")).unwrap(),
        struct_field(name_node("y"), sp(SyntaxKind::COLON), list_int).unwrap(),
    ]);
    let r_brace = token_full(ws(" "), SyntaxKind::R_BRACE, "}", None, nl()).unwrap();
    struct_def(None, sp(SyntaxKind::STRUCT_KW), name(ident_sp("Point")).unwrap(), sp(SyntaxKind::L_BRACE), fields, r_brace)
        .unwrap()
}

/// A commented function whose body touches every expression, pattern and
/// statement kind.
fn fn_item() -> GreenNode {
    let comment = trivia_list(vec![
        trivia(SyntaxKind::COMMENT, "// entry point").unwrap(),
        trivia(SyntaxKind::NEWLINE, "\n").unwrap(),
    ]);
    let fn_kw = token_full(comment, SyntaxKind::FN_KW, "fn", None, ws(" ")).unwrap();

    // (a: Int, f: fn(Int) -> Int)
    let int_to_int = fn_type(
        tok(SyntaxKind::FN_KW),
        tok(SyntaxKind::L_PAREN),
        comma_list(vec![named_type("Int")]),
        tok(SyntaxKind::R_PAREN),
        ret_type(sp(SyntaxKind::ARROW), named_type("Int")).unwrap(),
    )
    .unwrap();
    let params = param_list(
        tok(SyntaxKind::L_PAREN),
        comma_list(vec![
            param(ident_pat_node("a"), Some(type_annotation(sp(SyntaxKind::COLON), named_type("Int")).unwrap())).unwrap(),
            param(ident_pat_node("f"), Some(type_annotation(sp(SyntaxKind::COLON), int_to_int).unwrap())).unwrap(),
        ]),
        tok(SyntaxKind::R_PAREN),
    )
    .unwrap();
    let ret = ret_type(lead(SyntaxKind::ARROW), named_type("Int")).unwrap();

    let stmts = vec![
        let_neg(),
        let_tuple(),
        stmt(assign_index()),
        stmt(method_call()),
        stmt(field_expr(name_ref_node("q"), tok(SyntaxKind::DOT), name_ref_node("field")).unwrap()),
        stmt(call_expr(name_ref_node("f"), args(vec![name_ref_node("x")])).unwrap()),
        stmt(if_chain()),
        stmt(while_loop()),
        stmt(for_loop()),
        stmt(match_expr_node()),
        stmt(struct_lit()),
        stmt(closure()),
        stmt(path_of(&["io", "stdout"])),
        stmt(return_expr(sp(SyntaxKind::RETURN_KW), Some(name_ref_node("x"))).unwrap()),
    ];
    let body = block(
        sp(SyntaxKind::L_BRACE),
        separated(stmts, SyntaxKind::SEMICOLON),
        Some(tok(SyntaxKind::SEMICOLON)),
        token_full(ws(" "), SyntaxKind::R_BRACE, "}", None, nl()).unwrap(),
    )
    .unwrap();

    fn_def(None, fn_kw, name_node("main"), params, Some(ret), body).unwrap()
}

fn args(items: Vec<GreenNode>) -> GreenNode {
    arg_list(tok(SyntaxKind::L_PAREN), comma_list(items), tok(SyntaxKind::R_PAREN)).unwrap()
}

/// `let x = -a * (1 + 2)`
fn let_neg() -> GreenNode {
    let neg = unary_expr(UnaryOp::Neg, tok(SyntaxKind::MINUS), name_ref_node("a")).unwrap();
    let sum = binary(BinaryOp::Add, SyntaxKind::PLUS, int("1"), int("2"));
    let paren = paren_expr(tok(SyntaxKind::L_PAREN), sum, tok(SyntaxKind::R_PAREN)).unwrap();
    let product = binary(BinaryOp::Mul, SyntaxKind::STAR, neg, paren);
    let_stmt(sp(SyntaxKind::LET_KW), ident_pat_node("x"), None, lead(SyntaxKind::EQ), product).unwrap()
}

/// `let (p, _): (Int, Float) = (x, 2.5)`
fn let_tuple() -> GreenNode {
    let pat = tuple_pat(
        tok(SyntaxKind::L_PAREN),
        comma_list(vec![ident_pat_node("p"), wildcard_pat(tok(SyntaxKind::UNDERSCORE)).unwrap()]),
        tok(SyntaxKind::R_PAREN),
    )
    .unwrap();
    let annotation = type_annotation(
        sp(SyntaxKind::COLON),
        tuple_type(
            tok(SyntaxKind::L_PAREN),
            comma_list(vec![named_type("Int"), named_type("Float")]),
            tok(SyntaxKind::R_PAREN),
        )
        .unwrap(),
    )
    .unwrap();
    let float = literal(
        LiteralKind::Float,
        token_value(SyntaxKind::FLOAT_LITERAL, "2.5", quill_syntax::TokenValue::Float(2.5)).unwrap(),
    )
    .unwrap();
    let value = tuple_expr(
        tok(SyntaxKind::L_PAREN),
        comma_list(vec![name_ref_node("x"), float]),
        tok(SyntaxKind::R_PAREN),
    )
    .unwrap();
    let_stmt(sp(SyntaxKind::LET_KW), pat, Some(annotation), lead(SyntaxKind::EQ), value).unwrap()
}

/// `y = [1, 2][0]`
fn assign_index() -> GreenNode {
    let array = array_expr(tok(SyntaxKind::L_BRACKET), comma_list(vec![int("1"), int("2")]), tok(SyntaxKind::R_BRACKET))
        .unwrap();
    let indexed = index_expr(array, tok(SyntaxKind::L_BRACKET), int("0"), tok(SyntaxKind::R_BRACKET)).unwrap();
    assign_expr(name_ref_node("y"), lead(SyntaxKind::EQ), indexed).unwrap()
}

/// `p.len()`
fn method_call() -> GreenNode {
    method_call_expr(name_ref_node("p"), tok(SyntaxKind::DOT), name_ref_node("len"), args(vec![])).unwrap()
}

/// `if x == 1 { break } else if !true { continue } else { return }`
fn if_chain() -> GreenNode {
    let cond = binary(BinaryOp::Eq, SyntaxKind::EQ_EQ, name_ref_node("x"), int("1"));
    let not_true = unary_expr(
        UnaryOp::Not,
        tok(SyntaxKind::BANG),
        literal(LiteralKind::True, tok(SyntaxKind::TRUE_KW)).unwrap(),
    )
    .unwrap();
    let last = else_branch(
        lead(SyntaxKind::ELSE_KW),
        block_of(vec![stmt(return_expr(tok(SyntaxKind::RETURN_KW), None).unwrap())]),
    )
    .unwrap();
    let inner = if_expr(
        sp(SyntaxKind::IF_KW),
        not_true,
        block_of(vec![stmt(continue_expr(tok(SyntaxKind::CONTINUE_KW)).unwrap())]),
        Some(last),
    )
    .unwrap();
    if_expr(
        sp(SyntaxKind::IF_KW),
        cond,
        block_of(vec![stmt(break_expr(tok(SyntaxKind::BREAK_KW)).unwrap())]),
        Some(else_branch(token_full(ws(" "), SyntaxKind::ELSE_KW, "else", None, ws(" ")).unwrap(), inner).unwrap()),
    )
    .unwrap()
}

/// `while x < 10 { x }`
fn while_loop() -> GreenNode {
    let cond = binary(BinaryOp::Lt, SyntaxKind::LT, name_ref_node("x"), int("10"));
    while_expr(sp(SyntaxKind::WHILE_KW), cond, block_of(vec![stmt(name_ref_node("x"))])).unwrap()
}

/// `for i in 0..10 { i }`
fn for_loop() -> GreenNode {
    let range = binary_expr(BinaryOp::Range, int("0"), tok(SyntaxKind::DOT_DOT), int("10")).unwrap();
    for_expr(
        sp(SyntaxKind::FOR_KW),
        ident_pat_node("i"),
        lead(SyntaxKind::IN_KW),
        range,
        block_of(vec![stmt(name_ref_node("i"))]),
    )
    .unwrap()
}

/// `match x { 1 | 2 if x > 0 => "a", Some(z) => nil, w => w }`
fn match_expr_node() -> GreenNode {
    let one_or_two = or_pat(
        literal_pat(int("1")).unwrap(),
        lead(SyntaxKind::BAR),
        literal_pat(int("2")).unwrap(),
    )
    .unwrap();
    let guard = match_guard(
        lead(SyntaxKind::IF_KW),
        binary(BinaryOp::Gt, SyntaxKind::GT, name_ref_node("x"), int("0")),
    )
    .unwrap();
    let string = literal(
        LiteralKind::String,
        token_text(SyntaxKind::STRING_LITERAL, "\"a\"").unwrap(),
    )
    .unwrap();
    let some_z = constructor_pat(
        path_of(&["Some"]),
        tok(SyntaxKind::L_PAREN),
        comma_list(vec![ident_pat_node("z")]),
        tok(SyntaxKind::R_PAREN),
    )
    .unwrap();
    let nil = literal(LiteralKind::Nil, tok(SyntaxKind::NIL_KW)).unwrap();
    let arms = comma_list(vec![
        match_arm(one_or_two, Some(guard), lead(SyntaxKind::FAT_ARROW), string).unwrap(),
        match_arm(some_z, None, lead(SyntaxKind::FAT_ARROW), nil).unwrap(),
        match_arm(ident_pat_node("w"), None, lead(SyntaxKind::FAT_ARROW), name_ref_node("w")).unwrap(),
    ]);
    match_expr(sp(SyntaxKind::MATCH_KW), name_ref_node("x"), lead(SyntaxKind::L_BRACE), arms, lead(SyntaxKind::R_BRACE))
        .unwrap()
}

/// `Point { x: 1 }`
fn struct_lit() -> GreenNode {
    struct_literal(
        name_ref_node("Point"),
        lead(SyntaxKind::L_BRACE),
        comma_list(vec![struct_literal_field(name_ref_node("x"), sp(SyntaxKind::COLON), int("1")).unwrap()]),
        lead(SyntaxKind::R_BRACE),
    )
    .unwrap()
}

/// `fn (k) k`
fn closure() -> GreenNode {
    let params = param_list(
        lead(SyntaxKind::L_PAREN),
        comma_list(vec![param(ident_pat_node("k"), None).unwrap()]),
        sp(SyntaxKind::R_PAREN),
    )
    .unwrap();
    closure_expr(tok(SyntaxKind::FN_KW), params, None, name_ref_node("k")).unwrap()
}
