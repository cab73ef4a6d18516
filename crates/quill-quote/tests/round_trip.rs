//! Round-trip tests: quoting a tree and evaluating the builder expression
//! must give the tree back.

mod common;

use std::collections::BTreeSet;

use quill_quote::{
    evaluate_node, quote, PassThroughKinds, QuoteOptions, Quoter, ReconstructAll,
};
use quill_syntax::{equivalent_modulo_trivia, SyntaxKind, SyntaxNode};

use common::*;

#[test]
fn sample_covers_every_node_kind() {
    let root = root(sample_source_file());
    let present: BTreeSet<SyntaxKind> = root.descendants().map(|node| node.kind()).collect();
    let expected: BTreeSet<SyntaxKind> = SyntaxKind::all().filter(|kind| kind.is_node()).collect();
    let missing: Vec<_> = expected.difference(&present).collect();
    assert!(missing.is_empty(), "sample lacks {missing:?}");
}

#[test]
fn reconstructing_everything_round_trips() {
    let green = sample_source_file();
    let original = root(green.clone());
    let options = QuoteOptions::default();
    let mut quoter = Quoter::new(&ReconstructAll, &options);
    let expr = quoter.quote(&original).unwrap();

    let rebuilt = evaluate_node(&expr).unwrap();
    assert!(equivalent_modulo_trivia(&green, &rebuilt));
    assert_eq!(SyntaxNode::new_root(rebuilt).text().to_string(), original.text().to_string());
    assert_eq!(quoter.stats().opaque, 0);
    assert_eq!(quoter.stats().dropped_trivia, 0);
    assert!(quoter.formatting().is_balanced());
}

#[test]
fn every_subtree_round_trips_on_its_own() {
    let original = root(sample_source_file());
    let options = QuoteOptions::default();
    for node in original.descendants() {
        // A detached subtree starts at offset zero; compare by structure.
        let subtree = SyntaxNode::new_root(node.green().into_owned());
        let expr = quote(&subtree, &ReconstructAll, &options)
            .unwrap_or_else(|err| panic!("{:?}: {err}", node.kind()));
        let rebuilt = evaluate_node(&expr).unwrap_or_else(|err| panic!("{:?}: {err}", node.kind()));
        assert!(
            equivalent_modulo_trivia(&node.green().into_owned(), &rebuilt),
            "{:?} did not round trip",
            node.kind()
        );
    }
}

#[test]
fn pass_through_subtrees_are_spliced_back_unchanged() {
    let green = sample_source_file();
    let original = root(green.clone());
    let options = QuoteOptions::default();
    let classifier = PassThroughKinds::new([SyntaxKind::BLOCK, SyntaxKind::PATH_TYPE]);
    let mut quoter = Quoter::new(&classifier, &options);
    let expr = quoter.quote(&original).unwrap();

    assert!(quoter.stats().opaque > 0);
    assert_eq!(expr.count_calls("block"), 0);
    assert_eq!(expr.count_calls("path_type"), 0);
    let rebuilt = evaluate_node(&expr).unwrap();
    assert!(equivalent_modulo_trivia(&green, &rebuilt));
}

#[test]
fn structural_quoting_drops_trivia_but_keeps_structure() {
    let green = sample_source_file();
    let options = QuoteOptions {
        keep_trivia: false,
        ..QuoteOptions::default()
    };
    let mut quoter = Quoter::new(&ReconstructAll, &options);
    let expr = quoter.quote(&root(green.clone())).unwrap();

    assert_eq!(expr.count_calls("token_full"), 0);
    assert_eq!(expr.count_calls("trivia"), 0);
    assert!(quoter.stats().dropped_trivia > 0);
    let rebuilt = evaluate_node(&expr).unwrap();
    assert!(equivalent_modulo_trivia(&green, &rebuilt));
    assert!(!SyntaxNode::new_root(rebuilt).text().to_string().contains("// entry point"));
}
