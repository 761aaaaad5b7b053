//! Error types for atun-docs.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust's uses the Debug trait to show errors when they're returned from main
                    // But, thiserror uses the Display trait to show errors. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Why a raw rewrite pattern could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("the pattern has no `:name` placeholder")]
    MissingParameter,
    #[error("the placeholder name is empty")]
    EmptyParameterName,
    #[error(
        "`{0}` is not a valid placeholder name, only ASCII letters, digits and `_` are allowed"
    )]
    InvalidParameterName(String),
    #[error("only one placeholder is allowed per pattern")]
    MultipleParameters,
    #[error("the placeholder must be the last part of the pattern")]
    TrailingLiteral,
    #[error("the pattern must start with a literal prefix")]
    EmptyPrefix,
}

/// Errors raised while declaring rewrite rules. All of them abort configuration loading.
#[derive(Error)]
pub enum RewriteError {
    #[error("Invalid rewrite pattern `{pattern}`: {reason}")]
    InvalidPattern {
        pattern: String,
        #[source]
        reason: PatternError,
    },
    #[error(
        "Rewrite pattern `{pattern}` uses the literal prefix `{prefix}`, which is already used by `{existing}`"
    )]
    DuplicatePattern {
        pattern: String,
        prefix: String,
        existing: String,
    },
    #[error(
        "The target of rewrite pattern `{pattern}` references `{{{name}}}`, but the only parameter of this pattern is `{param}`"
    )]
    UnknownTemplateParameter {
        pattern: String,
        name: String,
        param: String,
    },
    #[error("The target of rewrite pattern `{pattern}` is malformed: {reason}")]
    MalformedTemplate { pattern: String, reason: String },
}

/// Why a matched rule failed to produce a target.
#[derive(Error, Debug)]
pub enum ResolutionFailure {
    #[error("the target function failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("the target is empty")]
    Empty,
}

/// A matched rewrite rule could not produce a valid target.
///
/// This is a configuration error and should fail the build, it is never a reason to fall back to rendering the page.
#[derive(Error)]
#[error("Rewrite `{pattern}` failed to resolve `{path}`: {reason}")]
pub struct ResolutionError {
    pub pattern: String,
    pub path: String,
    #[source]
    pub reason: ResolutionFailure,
}

#[derive(Error)]
pub enum ConfigError {
    #[error("Failed to read site configuration: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse site configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Error)]
pub enum BuildError {
    #[error(
        "Refusing to write a redirect for `{path}`, as it would not land inside the output directory. Paths must be relative and may not contain `..` or empty segments."
    )]
    UnsafeOutputPath { path: String },
    #[error("Failed to write redirect page: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error)]
pub enum AtunDocsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(
    RewriteError,
    ResolutionError,
    ConfigError,
    BuildError,
    AtunDocsError
);
