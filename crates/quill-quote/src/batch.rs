//! Parallel quoting of independent templates.

use quill_syntax::SyntaxNode;
use rayon::prelude::*;
use rowan::GreenNode;
use tracing::debug;

use crate::classify::Classifier;
use crate::config::QuoteOptions;
use crate::error::QuoteError;
use crate::expr::BuilderExpr;
use crate::rewrite::Quoter;

/// Quote every template, in parallel. Results are in input order.
///
/// Each template gets its own root and its own [`Quoter`]; only the
/// classifier and the options are shared.
pub fn quote_batch(
    templates: &[GreenNode],
    classifier: &(dyn Classifier + Sync),
    options: &QuoteOptions,
) -> Vec<Result<BuilderExpr, QuoteError>> {
    debug!(templates = templates.len(), "quoting batch");
    templates
        .par_iter()
        .map(|green| {
            let root = SyntaxNode::new_root(green.clone());
            Quoter::new(classifier, options).quote(&root)
        })
        .collect()
}
