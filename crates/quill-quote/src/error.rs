//! Quoting errors.
//!
//! Every error aborts the whole template; there is no partial output.

use std::fmt;

use quill_syntax::SyntaxKind;
use rowan::TextRange;

use crate::classify::ClassifyError;

/// Broad failure classes, used to pick how a failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A defect in the dispatch or shape tables, never the template's fault.
    Internal,
    /// The input tree does not fit the grammar.
    MalformedInput,
    /// The classifier failed.
    Classifier,
    /// A resource guard tripped (depth limit, cancellation).
    Resource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// A node whose kind has no node rule: a token kind, a sentinel or an
    /// unknown raw kind reported as a node.
    UnsupportedKind { kind: SyntaxKind, range: TextRange },
    /// A builder call assembled with the wrong number of arguments.
    ArityMismatch {
        factory: &'static str,
        expected: usize,
        found: usize,
    },
    /// The input tree is missing a required child, has an extra one, or
    /// contains a syntax error.
    Malformed {
        kind: SyntaxKind,
        range: TextRange,
        message: String,
    },
    Classifier {
        kind: SyntaxKind,
        range: TextRange,
        source: ClassifyError,
    },
    DepthLimit { limit: usize, range: TextRange },
    Cancelled,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::UnsupportedKind { .. } | QuoteError::ArityMismatch { .. } => {
                ErrorCategory::Internal
            }
            QuoteError::Malformed { .. } => ErrorCategory::MalformedInput,
            QuoteError::Classifier { .. } => ErrorCategory::Classifier,
            QuoteError::DepthLimit { .. } | QuoteError::Cancelled => ErrorCategory::Resource,
        }
    }

    /// Source range of the offending node, when there is one.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            QuoteError::UnsupportedKind { range, .. }
            | QuoteError::Malformed { range, .. }
            | QuoteError::Classifier { range, .. }
            | QuoteError::DepthLimit { range, .. } => Some(*range),
            QuoteError::ArityMismatch { .. } | QuoteError::Cancelled => None,
        }
    }

    pub(crate) fn malformed(kind: SyntaxKind, range: TextRange, message: impl Into<String>) -> Self {
        QuoteError::Malformed {
            kind,
            range,
            message: message.into(),
        }
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::UnsupportedKind { kind, range } => {
                write!(f, "internal error: no node rule for {kind:?} at {range:?}")
            }
            QuoteError::ArityMismatch {
                factory,
                expected,
                found,
            } => write!(
                f,
                "internal error: {factory} takes {expected} arguments, assembled {found}"
            ),
            QuoteError::Malformed { kind, message, .. } => write!(f, "malformed {kind:?}: {message}"),
            QuoteError::Classifier { kind, source, .. } => {
                write!(f, "classifier failed on {kind:?}: {source}")
            }
            QuoteError::DepthLimit { limit, .. } => {
                write!(f, "template nesting exceeds the depth limit of {limit}")
            }
            QuoteError::Cancelled => write!(f, "quoting was cancelled"),
        }
    }
}

impl std::error::Error for QuoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuoteError::Classifier { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::TextSize;
    use std::error::Error;

    fn range() -> TextRange {
        TextRange::new(TextSize::from(0), TextSize::from(3))
    }

    #[test]
    fn internal_errors_are_categorised_apart() {
        let unsupported = QuoteError::UnsupportedKind {
            kind: SyntaxKind::PLUS,
            range: range(),
        };
        assert_eq!(unsupported.category(), ErrorCategory::Internal);
        assert_eq!(
            QuoteError::malformed(SyntaxKind::BLOCK, range(), "x").category(),
            ErrorCategory::MalformedInput
        );
        assert_eq!(QuoteError::Cancelled.category(), ErrorCategory::Resource);
        assert_eq!(QuoteError::Cancelled.range(), None);
    }

    #[test]
    fn classifier_errors_keep_their_source() {
        let err = QuoteError::Classifier {
            kind: SyntaxKind::CALL_EXPR,
            range: range(),
            source: ClassifyError::new("unresolved symbol"),
        };
        assert_eq!(err.to_string(), "classifier failed on CALL_EXPR: unresolved symbol");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("unresolved symbol"));
    }
}
