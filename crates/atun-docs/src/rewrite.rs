//! Rewrites of parameterized paths into external redirect targets.
//!
//! A rule pairs a pattern, a literal prefix followed by one named placeholder such as `release/:version`, with a [`RewriteTarget`].
//! Rules are declared on a [`RewritesBuilder`] and finalized into an immutable [`Rewrites`], which is then queried with [`Rewrites::resolve`].
//!
//! ## Example
//! ```rust
//! use atun_docs::rewrite::{Resolution, Rewrites};
//!
//! let mut builder = Rewrites::builder();
//! builder
//!     .register("release/:version", "https://github.com/AutomationD/atun/releases/tag/{version}")
//!     .unwrap();
//! let rewrites = builder.build();
//!
//! let resolution = rewrites.resolve("release/v2.0.0").unwrap();
//! assert_eq!(resolution.target(), Some("https://github.com/AutomationD/atun/releases/tag/v2.0.0"));
//! assert_eq!(rewrites.resolve("guide/quickstart").unwrap(), Resolution::Passthrough);
//! ```
use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::errors::{ResolutionError, RewriteError};

pub mod pattern;
pub mod target;

pub use pattern::RewritePattern;
pub use target::RewriteTarget;

use target::CompiledTarget;

/// Parameters bound by a matched rule, by name.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct RewriteParams(pub FxHashMap<String, String>);

impl RewriteParams {
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = FxHashMap::default();
        map.insert(name.into(), value.into());
        RewriteParams(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// A declared rewrite rule.
#[derive(Clone)]
pub struct RewriteRule {
    pattern: RewritePattern,
    target: CompiledTarget,
}

impl RewriteRule {
    pub fn pattern(&self) -> &RewritePattern {
        &self.pattern
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule")
            .field("pattern", &self.pattern.raw())
            .finish_non_exhaustive()
    }
}

/// A redirect produced by a matched rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// The raw pattern of the rule that matched, e.g. `release/:version`.
    pub pattern: String,
    pub params: RewriteParams,
    pub target: String,
}

/// The outcome of resolving a path.
///
/// `Passthrough` is the expected outcome for most paths and means the page should be rendered normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect(Redirect),
    Passthrough,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Redirect(_))
    }

    pub fn params(&self) -> Option<&RewriteParams> {
        match self {
            Resolution::Redirect(redirect) => Some(&redirect.params),
            Resolution::Passthrough => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Resolution::Redirect(redirect) => Some(&redirect.target),
            Resolution::Passthrough => None,
        }
    }
}

/// Collects rewrite rules until they are finalized with [`RewritesBuilder::build`].
#[derive(Default, Debug)]
pub struct RewritesBuilder {
    rules: Vec<RewriteRule>,
}

impl RewritesBuilder {
    /// Declares a rule. Rules are matched in the order they are registered.
    ///
    /// Fails if the pattern is invalid, if its literal prefix is already used by another rule, or if a template target references anything but the pattern's parameter.
    /// A failed registration leaves the builder unchanged.
    pub fn register(
        &mut self,
        pattern: &str,
        target: impl Into<RewriteTarget>,
    ) -> Result<&mut Self, RewriteError> {
        let pattern =
            RewritePattern::parse(pattern).map_err(|reason| RewriteError::InvalidPattern {
                pattern: pattern.to_string(),
                reason,
            })?;

        if let Some(existing) = self
            .rules
            .iter()
            .find(|rule| rule.pattern.prefix() == pattern.prefix())
        {
            return Err(RewriteError::DuplicatePattern {
                pattern: pattern.raw().to_string(),
                prefix: pattern.prefix().to_string(),
                existing: existing.pattern.raw().to_string(),
            });
        }

        let target = CompiledTarget::compile(target.into(), &pattern)?;

        debug!(target: "rewrites", prefix = pattern.prefix(), param = pattern.param(); "Registered rewrite {}", pattern.raw());
        self.rules.push(RewriteRule { pattern, target });

        Ok(self)
    }

    pub fn build(self) -> Rewrites {
        Rewrites { rules: self.rules }
    }
}

/// A finalized, read-only set of rewrite rules.
///
/// Resolution holds no state between calls, so a `Rewrites` can be shared freely across threads.
#[derive(Clone, Default, Debug)]
pub struct Rewrites {
    rules: Vec<RewriteRule>,
}

impl Rewrites {
    pub fn builder() -> RewritesBuilder {
        RewritesBuilder::default()
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves a path against the rules, in registration order.
    ///
    /// The first rule whose literal prefix starts the path, and leaves a non-empty remainder, wins.
    /// The remainder is bound verbatim to the rule's parameter.
    pub fn resolve(&self, path: &str) -> Result<Resolution, ResolutionError> {
        let Some((rule, value)) = self
            .rules
            .iter()
            .find_map(|rule| rule.pattern.bind(path).map(|value| (rule, value)))
        else {
            trace!(target: "rewrites", "No rewrite for {}", path);
            return Ok(Resolution::Passthrough);
        };

        let params = RewriteParams::single(rule.pattern.param(), value);
        let target = rule
            .target
            .apply(&params)
            .map_err(|reason| ResolutionError {
                pattern: rule.pattern.raw().to_string(),
                path: path.to_string(),
                reason,
            })?;

        trace!(target: "rewrites", "{} -> {}", path, target);

        Ok(Resolution::Redirect(Redirect {
            pattern: rule.pattern.raw().to_string(),
            params,
            target,
        }))
    }
}
