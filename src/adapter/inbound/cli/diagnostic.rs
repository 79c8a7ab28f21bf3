//! Miette-based diagnostics for configuration errors.
//!
//! TOML parse failures are rendered with the offending file content and a
//! label pointing at the error location.

use std::path::Path;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(proptrade::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>, src: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a source-annotated diagnostic for a config parse error, if the
/// error carries a location and the file can be re-read.
#[must_use]
pub fn for_config_error(path: &Path, err: &Error) -> Option<ConfigDiagnostic> {
    let Error::Config(ConfigError::Parse(parse)) = err else {
        return None;
    };
    let span = parse.span()?;
    let src = std::fs::read_to_string(path).ok()?;
    Some(
        ConfigDiagnostic::new(
            format!("invalid configuration in {}", path.display()),
            src,
            span.start,
            span.end.saturating_sub(span.start),
        )
        .with_help(parse.message().to_string()),
    )
}
