//! Ariadne-based rendering of quoting errors.
//!
//! Output is colorless so it can be snapshot tested. Every error gets a
//! `Q` code; internal errors additionally say that they are engine bugs
//! rather than problems with the template.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::{ErrorCategory, QuoteError};

fn error_code(err: &QuoteError) -> &'static str {
    match err {
        QuoteError::UnsupportedKind { .. } => "Q0001",
        QuoteError::ArityMismatch { .. } => "Q0002",
        QuoteError::Malformed { .. } => "Q0003",
        QuoteError::Classifier { .. } => "Q0004",
        QuoteError::DepthLimit { .. } => "Q0005",
        QuoteError::Cancelled => "Q0006",
    }
}

fn label_message(err: &QuoteError) -> String {
    match err {
        QuoteError::UnsupportedKind { kind, .. } => format!("{kind:?} cannot be quoted as a node"),
        QuoteError::Malformed { message, .. } => message.clone(),
        QuoteError::Classifier { source, .. } => source.to_string(),
        QuoteError::DepthLimit { limit, .. } => format!("nesting exceeds {limit} levels here"),
        QuoteError::ArityMismatch { .. } | QuoteError::Cancelled => String::new(),
    }
}

/// Render a quoting error against the template source it came from.
pub fn render_diagnostic(error: &QuoteError, source: &str, _filename: &str) -> String {
    let config = Config::default().with_color(false);
    let source_len = source.len();

    let clamp = |r: Range<usize>| -> Range<usize> {
        let s = r.start.min(source_len);
        let e = r.end.min(source_len).max(s);
        // ariadne needs at least a one-character span.
        if s == e {
            s..e.saturating_add(1).min(source_len)
        } else {
            s..e
        }
    };

    let span = match error.range() {
        Some(range) => clamp(usize::from(range.start())..usize::from(range.end())),
        None => clamp(0..source_len),
    };

    let mut builder = Report::build(ReportKind::Error, span.clone())
        .with_code(error_code(error))
        .with_message(error.to_string())
        .with_config(config);

    let message = label_message(error);
    if error.range().is_some() && !message.is_empty() {
        builder.add_label(Label::new(span).with_message(message).with_color(Color::Red));
    }
    if error.category() == ErrorCategory::Internal {
        builder.set_note("this is a bug in the quoting engine, not in the template");
    }
    match error {
        QuoteError::DepthLimit { .. } => {
            builder.set_help("raise `max_depth` in quill.toml or split the template");
        }
        QuoteError::Cancelled => builder.set_help("the run was cancelled before it finished"),
        _ => {}
    }

    let report = builder.finish();
    let mut buf = Vec::new();
    let _ = report.write(Source::from(source), &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
