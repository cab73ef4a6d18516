//! Token reconstruction.
//!
//! Turns one leaf token into the shortest factory call that reproduces it.
//! Kind, text and literal value are always recoverable from the shorter
//! forms; only trivia forces the full five-argument `token_full`.

use quill_syntax::token::is_missing;
use quill_syntax::{SyntaxKind, TokenValue, Trivia, TriviaList};

use crate::expr::{ArgLayout, BuilderExpr, Factory};

fn inline(factory: Factory, args: Vec<BuilderExpr>) -> BuilderExpr {
    BuilderExpr::call(factory, args, ArgLayout::Inline)
}

/// Reconstruct a token from its kind, text and attributed trivia.
pub fn reconstruct(
    kind: SyntaxKind,
    text: &str,
    leading: TriviaList,
    trailing: TriviaList,
) -> BuilderExpr {
    let value = if kind.is_literal() {
        TokenValue::from_text(kind, text)
    } else {
        None
    };

    if !leading.is_empty() || !trailing.is_empty() {
        return inline(
            Factory::TokenFull,
            vec![
                trivia_list(leading),
                BuilderExpr::Kind(kind),
                BuilderExpr::Str(text.to_string()),
                value.map_or(BuilderExpr::Null, BuilderExpr::Value),
                trivia_list(trailing),
            ],
        );
    }

    if is_missing(kind, text) {
        return inline(Factory::MissingToken, vec![BuilderExpr::Kind(kind)]);
    }
    if kind.fixed_text() == Some(text) {
        return inline(Factory::Token, vec![BuilderExpr::Kind(kind)]);
    }
    match value {
        Some(value) => inline(
            Factory::TokenValue,
            vec![
                BuilderExpr::Kind(kind),
                BuilderExpr::Str(text.to_string()),
                BuilderExpr::Value(value),
            ],
        ),
        None => inline(
            Factory::TokenText,
            vec![BuilderExpr::Kind(kind), BuilderExpr::Str(text.to_string())],
        ),
    }
}

fn trivia_list(list: TriviaList) -> BuilderExpr {
    inline(Factory::TriviaList, list.into_iter().map(trivia).collect())
}

fn trivia(piece: Trivia) -> BuilderExpr {
    inline(
        Factory::Trivia,
        vec![BuilderExpr::Kind(piece.kind), BuilderExpr::Str(piece.text)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(kind: SyntaxKind, text: &str) -> BuilderExpr {
        reconstruct(kind, text, TriviaList::new(), TriviaList::new())
    }

    #[test]
    fn default_trivia_uses_kind_only_form() {
        let expr = plain(SyntaxKind::SEMICOLON, ";");
        assert_eq!(expr.factory_name(), Some("token"));
        assert_eq!(expr.args(), &[BuilderExpr::Kind(SyntaxKind::SEMICOLON)]);
    }

    #[test]
    fn eof_is_a_plain_token_not_a_missing_one() {
        assert_eq!(plain(SyntaxKind::EOF, "").factory_name(), Some("token"));
    }

    #[test]
    fn missing_tokens_use_missing_form() {
        let expr = plain(SyntaxKind::R_PAREN, "");
        assert_eq!(expr.factory_name(), Some("missing_token"));
    }

    #[test]
    fn literals_carry_their_value() {
        let expr = plain(SyntaxKind::INT_LITERAL, "0x2A");
        assert_eq!(expr.factory_name(), Some("token_value"));
        assert_eq!(expr.args()[2], BuilderExpr::Value(TokenValue::Int(42)));
    }

    #[test]
    fn underivable_literals_fall_back_to_text() {
        let expr = plain(SyntaxKind::INT_LITERAL, "99999999999999999999");
        assert_eq!(expr.factory_name(), Some("token_text"));
        assert_eq!(plain(SyntaxKind::IDENT, "x").factory_name(), Some("token_text"));
    }

    #[test]
    fn trivia_forces_full_form() {
        let trailing = TriviaList::from(vec![Trivia::new(SyntaxKind::NEWLINE, "\n")]);
        let expr = reconstruct(SyntaxKind::SEMICOLON, ";", TriviaList::new(), trailing);
        assert_eq!(expr.factory_name(), Some("token_full"));
        let args = expr.args();
        assert_eq!(args.len(), 5);
        assert_eq!(args[0].factory_name(), Some("trivia_list"));
        assert!(args[0].args().is_empty());
        assert!(args[3].is_null());
        assert_eq!(args[4].args()[0].factory_name(), Some("trivia"));
    }

    #[test]
    fn full_form_keeps_literal_value() {
        let leading = TriviaList::from(vec![Trivia::new(SyntaxKind::WHITESPACE, " ")]);
        let expr = reconstruct(SyntaxKind::STRING_LITERAL, "\"hi\"", leading, TriviaList::new());
        assert_eq!(expr.args()[3], BuilderExpr::Value(TokenValue::Str("hi".into())));
    }
}
