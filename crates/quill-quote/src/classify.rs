//! The classifier seam.
//!
//! Deciding whether a node is reconstructed or passed through is not the
//! quoting engine's business: it asks a [`Classifier`] once per visited node
//! and follows the answer. Implementations must be deterministic and free
//! of side effects.

use std::fmt;

use quill_syntax::{SyntaxKind, SyntaxNode};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    /// Rebuild the node through builder calls.
    Reconstruct,
    /// Emit the node verbatim as an opaque fragment.
    PassThrough,
}

/// A classifier failure. Aborts the whole template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyError {
    pub message: String,
}

impl ClassifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ClassifyError {}

pub trait Classifier {
    fn classify(&self, node: &SyntaxNode) -> Result<TransformationKind, ClassifyError>;
}

impl<F> Classifier for F
where
    F: Fn(&SyntaxNode) -> Result<TransformationKind, ClassifyError>,
{
    fn classify(&self, node: &SyntaxNode) -> Result<TransformationKind, ClassifyError> {
        self(node)
    }
}

/// Reconstructs every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconstructAll;

impl Classifier for ReconstructAll {
    fn classify(&self, _node: &SyntaxNode) -> Result<TransformationKind, ClassifyError> {
        Ok(TransformationKind::Reconstruct)
    }
}

/// Passes through every node whose kind is in the set.
#[derive(Debug, Clone, Default)]
pub struct PassThroughKinds {
    kinds: FxHashSet<SyntaxKind>,
}

impl PassThroughKinds {
    pub fn new(kinds: impl IntoIterator<Item = SyntaxKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn contains(&self, kind: SyntaxKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Classifier for PassThroughKinds {
    fn classify(&self, node: &SyntaxNode) -> Result<TransformationKind, ClassifyError> {
        if self.kinds.contains(&node.kind()) {
            Ok(TransformationKind::PassThrough)
        } else {
            Ok(TransformationKind::Reconstruct)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_syntax::factory::{name_ref, token_text};

    fn name_ref_node() -> SyntaxNode {
        let ident = token_text(SyntaxKind::IDENT, "x").unwrap();
        SyntaxNode::new_root(name_ref(ident).unwrap())
    }

    #[test]
    fn reconstruct_all_never_passes_through() {
        assert_eq!(
            ReconstructAll.classify(&name_ref_node()),
            Ok(TransformationKind::Reconstruct)
        );
    }

    #[test]
    fn kind_set_selects_pass_through() {
        let classifier = PassThroughKinds::new([SyntaxKind::NAME_REF]);
        assert_eq!(
            classifier.classify(&name_ref_node()),
            Ok(TransformationKind::PassThrough)
        );
        assert!(PassThroughKinds::default().is_empty());
    }

    #[test]
    fn closures_are_classifiers() {
        let failing = |_: &SyntaxNode| -> Result<TransformationKind, ClassifyError> {
            Err(ClassifyError::new("no symbol table"))
        };
        let err = failing.classify(&name_ref_node()).unwrap_err();
        assert_eq!(err.to_string(), "no symbol table");
    }
}
