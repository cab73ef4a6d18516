//! Quill tree quoting.
//!
//! Given a Quill CST, this crate produces the builder expression that
//! reconstructs it through the factory API of `quill-syntax`:
//!
//! 1. A [`Classifier`] decides per node whether to rebuild it or pass it
//!    through verbatim.
//! 2. The [`Quoter`] walks the tree, binds each node's children to its
//!    grammar shape and turns them into factory calls (tokens in their
//!    shortest form, lists through one list call).
//! 3. The resulting [`BuilderExpr`] is rendered to Rust source with
//!    [`render()`], or evaluated in-process with [`evaluate`].
//!
//! ```
//! use quill_quote::{quote, render, QuoteOptions, ReconstructAll, RenderOptions};
//! use quill_syntax::factory::{name_ref, token_text};
//! use quill_syntax::{SyntaxKind, SyntaxNode};
//!
//! let green = name_ref(token_text(SyntaxKind::IDENT, "x").unwrap()).unwrap();
//! let expr = quote(&SyntaxNode::new_root(green), &ReconstructAll, &QuoteOptions::default()).unwrap();
//! let options = RenderOptions { qualify_paths: false, ..RenderOptions::default() };
//! assert_eq!(
//!     render(&expr, &options),
//!     "name_ref(\n    token_text(SyntaxKind::IDENT, \"x\")?)?"
//! );
//! ```

pub mod batch;
pub mod bind;
pub mod builder;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod ir;
pub mod printer;
pub mod render;
pub mod rewrite;
pub mod token;

pub use batch::quote_batch;
pub use classify::{Classifier, ClassifyError, PassThroughKinds, ReconstructAll, TransformationKind};
pub use config::{ConfigError, QuoteConfig, QuoteOptions};
pub use diagnostics::render_diagnostic;
pub use error::{ErrorCategory, QuoteError};
pub use eval::{evaluate, evaluate_node, EvalError, Value};
pub use expr::{ArgLayout, BuilderCall, BuilderExpr, Factory, OpaqueExpr};
pub use format::FormattingContext;
pub use render::{render, RenderOptions};
pub use rewrite::{quote, quote_with_cancel, CancelFlag, QuoteStats, Quoter};
