//! Builder-call construction.
//!
//! Maps a node shape and its transformed children onto the one canonical
//! full-shape factory call, and wraps list children in a single list call.

use quill_syntax::{Discriminant, NodeShape};

use crate::error::QuoteError;
use crate::expr::{ArgLayout, BuilderExpr, Factory};

/// Assemble the call for a node of `shape`.
///
/// `args` holds one transformed argument per slot; the discriminant, when
/// the shape has one, is placed first.
pub fn construct(
    shape: &'static NodeShape,
    discriminant: Option<Discriminant>,
    args: Vec<BuilderExpr>,
    layout: ArgLayout,
) -> Result<BuilderExpr, QuoteError> {
    let found = args.len() + usize::from(discriminant.is_some());
    if args.len() != shape.slots.len() || discriminant.is_some() != shape.discriminant.is_some() {
        return Err(QuoteError::ArityMismatch {
            factory: shape.factory,
            expected: shape.arity(),
            found,
        });
    }

    let mut full = Vec::with_capacity(found);
    full.extend(discriminant.map(BuilderExpr::Discriminant));
    full.extend(args);
    Ok(BuilderExpr::call(Factory::Node(shape), full, layout))
}

/// Wrap transformed list entries in one list call.
///
/// For separated lists `entries` interleaves elements and separators. An
/// empty list still produces a (zero-argument) call.
pub fn list_call(separated: bool, entries: Vec<BuilderExpr>, layout: ArgLayout) -> BuilderExpr {
    let factory = if separated {
        Factory::SeparatedList
    } else {
        Factory::NodeList
    };
    BuilderExpr::call(factory, entries, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_syntax::grammar::shapes;
    use quill_syntax::{BinaryOp, SyntaxKind};

    fn kind(k: SyntaxKind) -> BuilderExpr {
        BuilderExpr::Kind(k)
    }

    #[test]
    fn discriminant_is_the_first_argument() {
        let call = construct(
            &shapes::BINARY_EXPR,
            Some(BinaryOp::Add.into()),
            vec![BuilderExpr::Null, kind(SyntaxKind::PLUS), BuilderExpr::Null],
            ArgLayout::Lines { depth: 1 },
        )
        .unwrap();
        assert_eq!(call.factory_name(), Some("binary_expr"));
        assert_eq!(call.args()[0], BuilderExpr::Discriminant(BinaryOp::Add.into()));
        assert_eq!(call.args().len(), 4);
    }

    #[test]
    fn wrong_argument_count_is_internal() {
        let err = construct(&shapes::BLOCK, None, vec![BuilderExpr::Null], ArgLayout::Inline).unwrap_err();
        assert_eq!(
            err,
            QuoteError::ArityMismatch {
                factory: "block",
                expected: 4,
                found: 1
            }
        );
        let err = construct(
            &shapes::BINARY_EXPR,
            None,
            vec![BuilderExpr::Null, BuilderExpr::Null, BuilderExpr::Null],
            ArgLayout::Inline,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::ArityMismatch { expected: 4, found: 3, .. }));
    }

    #[test]
    fn empty_lists_still_produce_a_call() {
        let call = list_call(true, vec![], ArgLayout::Lines { depth: 2 });
        assert_eq!(call.factory_name(), Some("separated_list"));
        assert!(call.args().is_empty());
        assert_eq!(list_call(false, vec![], ArgLayout::Inline).factory_name(), Some("node_list"));
    }
}
