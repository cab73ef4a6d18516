//! The tree rewriter: turns a CST into a builder expression.
//!
//! For each visited node the rewriter consults the dispatch table and the
//! classifier. Pass-through nodes become opaque fragments; reconstructed
//! nodes are bound to their shape and every slot is transformed in grammar
//! order (nodes recursively, tokens through the token reconstructor, lists
//! through the list combinator, absent optionals as `Null`).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use quill_syntax::grammar::{rule, KindRule, NodeShape};
use quill_syntax::{SyntaxNode, Trivia, TriviaList};
use tracing::{debug, trace};

use crate::bind::{bind, Binding, Bound, BoundNode, BoundToken, ListEntry};
use crate::builder;
use crate::classify::{Classifier, TransformationKind};
use crate::config::QuoteOptions;
use crate::error::QuoteError;
use crate::expr::{BuilderExpr, OpaqueExpr};
use crate::format::FormattingContext;
use crate::token;

/// Cooperative cancellation, checked once per visited node.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters collected during one quoting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteStats {
    pub nodes: usize,
    pub tokens: usize,
    pub lists: usize,
    pub opaque: usize,
    /// Trivia pieces left out of the output.
    pub dropped_trivia: usize,
}

/// One quoting run's state. Not shared between templates.
pub struct Quoter<'a> {
    classifier: &'a dyn Classifier,
    options: &'a QuoteOptions,
    cancel: Option<&'a CancelFlag>,
    format: FormattingContext,
    /// Trivia waiting for the next reconstructed token.
    pending: Vec<Trivia>,
    depth: usize,
    stats: QuoteStats,
}

impl<'a> Quoter<'a> {
    pub fn new(classifier: &'a dyn Classifier, options: &'a QuoteOptions) -> Self {
        Self {
            classifier,
            options,
            cancel: None,
            format: FormattingContext::new(),
            pending: Vec::new(),
            depth: 0,
            stats: QuoteStats::default(),
        }
    }

    pub fn with_cancel(mut self, cancel: &'a CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn stats(&self) -> QuoteStats {
        self.stats
    }

    pub fn formatting(&self) -> &FormattingContext {
        &self.format
    }

    /// Quote the tree rooted at `root`.
    pub fn quote(&mut self, root: &SyntaxNode) -> Result<BuilderExpr, QuoteError> {
        self.format = FormattingContext::new();
        self.pending.clear();
        self.depth = 0;
        self.stats = QuoteStats::default();

        debug!(kind = ?root.kind(), range = ?root.text_range(), "quoting template");
        let expr = self.transform_node(root)?;
        if !self.pending.is_empty() {
            debug!(count = self.pending.len(), "no token follows trailing trivia; dropping it");
            self.stats.dropped_trivia += self.pending.len();
            self.pending.clear();
        }
        debug!(
            nodes = self.stats.nodes,
            tokens = self.stats.tokens,
            opaque = self.stats.opaque,
            "quoted template"
        );
        Ok(expr)
    }

    fn transform_node(&mut self, node: &SyntaxNode) -> Result<BuilderExpr, QuoteError> {
        if self.cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(QuoteError::Cancelled);
        }
        let kind = node.kind();
        let shape = match rule(kind) {
            KindRule::Node(shape) => shape,
            KindRule::ErrorNode => {
                return Err(QuoteError::malformed(
                    kind,
                    node.text_range(),
                    "template contains a syntax error",
                ))
            }
            KindRule::Token | KindRule::Trivia | KindRule::Sentinel => {
                return Err(QuoteError::UnsupportedKind {
                    kind,
                    range: node.text_range(),
                })
            }
        };

        let classification = self
            .classifier
            .classify(node)
            .map_err(|source| QuoteError::Classifier {
                kind,
                range: node.text_range(),
                source,
            })?;
        trace!(?kind, ?classification, depth = self.depth, "dispatch");

        match classification {
            TransformationKind::PassThrough => {
                self.stats.opaque += 1;
                Ok(BuilderExpr::Opaque(OpaqueExpr::new(node)))
            }
            TransformationKind::Reconstruct => {
                // Depth counts reconstructed nodes only.
                if self.depth >= self.options.max_depth {
                    return Err(QuoteError::DepthLimit {
                        limit: self.options.max_depth,
                        range: node.text_range(),
                    });
                }
                self.stats.nodes += 1;
                self.depth += 1;
                self.format.indent();
                let result = bind(node, shape).and_then(|binding| self.assemble(shape, binding));
                self.format.unindent();
                self.depth -= 1;
                result
            }
        }
    }

    fn assemble(&mut self, shape: &'static NodeShape, binding: Binding) -> Result<BuilderExpr, QuoteError> {
        let layout = self.format.layout();
        let discriminant_slot = shape.discriminant_slot();
        let mut discriminant = None;
        let mut args = Vec::with_capacity(binding.slots.len());

        for (index, bound) in binding.slots.into_iter().enumerate() {
            if let (Some((family, slot)), Bound::Token(token)) = (discriminant_slot, &bound) {
                if slot == index {
                    discriminant = family.derive(token.kind);
                }
            }
            args.push(self.transform_slot(bound)?);
        }
        self.pending.extend(binding.tail);

        builder::construct(shape, discriminant, args, layout)
    }

    fn transform_slot(&mut self, bound: Bound) -> Result<BuilderExpr, QuoteError> {
        match bound {
            Bound::Node(node) => self.transform_child(node),
            Bound::Token(token) => Ok(self.transform_token(token)),
            Bound::Absent => Ok(BuilderExpr::Null),
            Bound::List { separator, entries } => self.transform_list(separator.is_some(), entries),
        }
    }

    fn transform_child(&mut self, child: BoundNode) -> Result<BuilderExpr, QuoteError> {
        self.pending.extend(child.before);
        self.transform_node(&child.node)
    }

    fn transform_token(&mut self, token: BoundToken) -> BuilderExpr {
        self.stats.tokens += 1;
        self.pending.extend(token.before);
        let leading = TriviaList::from(std::mem::take(&mut self.pending));
        let trailing = token.trailing;
        if self.options.keep_trivia {
            token::reconstruct(token.kind, &token.text, leading, trailing)
        } else {
            let dropped = leading.len() + trailing.len();
            if dropped > 0 {
                trace!(kind = ?token.kind, dropped, "dropping trivia");
                self.stats.dropped_trivia += dropped;
            }
            token::reconstruct(token.kind, &token.text, TriviaList::new(), TriviaList::new())
        }
    }

    /// The list combinator: one list call wrapping every element, with the
    /// separators between consecutive elements.
    fn transform_list(&mut self, separated: bool, entries: Vec<ListEntry>) -> Result<BuilderExpr, QuoteError> {
        self.stats.lists += 1;
        self.format.indent();
        let layout = self.format.layout();
        let result = self.transform_entries(entries);
        self.format.unindent();
        Ok(builder::list_call(separated, result?, layout))
    }

    fn transform_entries(&mut self, entries: Vec<ListEntry>) -> Result<Vec<BuilderExpr>, QuoteError> {
        let mut args = Vec::with_capacity(entries.len());
        for entry in entries {
            let arg = match entry {
                ListEntry::Element(node) => self.transform_child(node)?,
                ListEntry::Separator(token) => self.transform_token(token),
            };
            args.push(arg);
        }
        Ok(args)
    }
}

/// Quote `root` with a fresh [`Quoter`].
pub fn quote(
    root: &SyntaxNode,
    classifier: &dyn Classifier,
    options: &QuoteOptions,
) -> Result<BuilderExpr, QuoteError> {
    Quoter::new(classifier, options).quote(root)
}

/// Like [`quote`], giving up with [`QuoteError::Cancelled`] once `cancel` is set.
pub fn quote_with_cancel(
    root: &SyntaxNode,
    classifier: &dyn Classifier,
    options: &QuoteOptions,
    cancel: &CancelFlag,
) -> Result<BuilderExpr, QuoteError> {
    Quoter::new(classifier, options).with_cancel(cancel).quote(root)
}
