//! Quoting options and their `quill.toml` loader.

use std::fmt;
use std::path::Path;

use quill_syntax::SyntaxKind;
use serde::Deserialize;

use crate::classify::PassThroughKinds;
use crate::render::RenderOptions;

/// Options for one quoting run and the rendering of its result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteOptions {
    /// Path of the syntax crate in generated code.
    pub crate_path: String,
    pub qualify_paths: bool,
    /// Reproduce trivia exactly; when off, every token uses its short form.
    pub keep_trivia: bool,
    pub indent_width: usize,
    pub max_width: usize,
    pub closing_paren_on_new_line: bool,
    /// Deepest nesting of reconstructed nodes accepted before giving up.
    /// Pass-through nodes are not entered and do not count.
    pub max_depth: usize,
    /// Kind names handed to [`PassThroughKinds`] by [`QuoteOptions::passthrough_classifier`].
    pub passthrough_kinds: Vec<String>,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            crate_path: "quill_syntax".to_string(),
            qualify_paths: true,
            keep_trivia: true,
            indent_width: 4,
            max_width: 100,
            closing_paren_on_new_line: false,
            max_depth: 256,
            passthrough_kinds: Vec::new(),
        }
    }
}

impl QuoteOptions {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            crate_path: self.crate_path.clone(),
            qualify_paths: self.qualify_paths,
            indent_width: self.indent_width,
            max_width: self.max_width,
            closing_paren_on_new_line: self.closing_paren_on_new_line,
        }
    }

    /// A classifier passing through the configured kinds.
    pub fn passthrough_classifier(&self) -> Result<PassThroughKinds, ConfigError> {
        let kinds = self
            .passthrough_kinds
            .iter()
            .map(|name| match SyntaxKind::from_name(name) {
                Some(kind) if kind.is_node() => Ok(kind),
                _ => Err(ConfigError::UnknownKind(name.clone())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PassThroughKinds::new(kinds))
    }
}

/// A parsed `quill.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteConfig {
    #[serde(default)]
    pub quote: QuoteOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Read { path: String, message: String },
    Parse(String),
    /// A pass-through entry that names no composite node kind.
    UnknownKind(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, message } => write!(f, "failed to read {path}: {message}"),
            ConfigError::Parse(message) => write!(f, "failed to parse quill.toml: {message}"),
            ConfigError::UnknownKind(name) => write!(f, "`{name}` is not a node kind"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl QuoteConfig {
    /// Read and parse a quill.toml file.
    pub fn from_file(path: &Path) -> Result<QuoteConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<QuoteConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = QuoteConfig::from_str("").unwrap();
        assert_eq!(config.quote, QuoteOptions::default());
        assert_eq!(config.quote.max_depth, 256);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = QuoteConfig::from_str(
            r#"
[quote]
crate_path = "::syntax"
keep_trivia = false
passthrough_kinds = ["NAME_REF", "PATH"]
"#,
        )
        .unwrap();
        assert_eq!(config.quote.crate_path, "::syntax");
        assert!(!config.quote.keep_trivia);
        assert_eq!(config.quote.indent_width, 4);
        let classifier = config.quote.passthrough_classifier().unwrap();
        assert!(classifier.contains(SyntaxKind::NAME_REF));
        assert_eq!(classifier.len(), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = QuoteConfig::from_str("[quote]\nindent = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn token_kinds_cannot_pass_through() {
        let options = QuoteOptions {
            passthrough_kinds: vec!["IDENT".to_string()],
            ..QuoteOptions::default()
        };
        assert_eq!(
            options.passthrough_classifier().unwrap_err(),
            ConfigError::UnknownKind("IDENT".to_string())
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = QuoteConfig::from_file(Path::new("/nonexistent/quill.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
