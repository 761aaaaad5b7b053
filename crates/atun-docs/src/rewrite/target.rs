use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::errors::{ResolutionFailure, RewriteError};
use crate::rewrite::{RewriteParams, pattern::RewritePattern};

pub type TargetFn =
    dyn Fn(&RewriteParams) -> Result<String, Box<dyn Error + Send + Sync>> + Send + Sync;

/// How a matched rule computes its redirect target.
///
/// ## Example
/// ```rust
/// use atun_docs::rewrite::{RewriteTarget, Rewrites};
///
/// let mut builder = Rewrites::builder();
/// builder
///     .register(
///         "release/:version",
///         "https://github.com/AutomationD/atun/releases/tag/{version}",
///     )
///     .unwrap()
///     .register(
///         "changelog/:version",
///         RewriteTarget::function(|params| {
///             Ok(format!("https://example.com/changelog#{}", params.get("version").unwrap_or_default()))
///         }),
///     )
///     .unwrap();
/// ```
#[derive(Clone)]
pub enum RewriteTarget {
    /// A URL with `{name}` substitution points. `{{` and `}}` are literal braces.
    Template(String),
    Function(Arc<TargetFn>),
}

impl RewriteTarget {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&RewriteParams) -> Result<String, Box<dyn Error + Send + Sync>>
            + Send
            + Sync
            + 'static,
    {
        RewriteTarget::Function(Arc::new(f))
    }
}

impl Debug for RewriteTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RewriteTarget::Template(template) => f.debug_tuple("Template").field(template).finish(),
            RewriteTarget::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for RewriteTarget {
    fn from(val: &str) -> Self {
        RewriteTarget::Template(val.to_string())
    }
}

impl From<String> for RewriteTarget {
    fn from(val: String) -> Self {
        RewriteTarget::Template(val)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TemplatePart {
    Literal(String),
    Param(String),
}

/// A target checked against its pattern, ready to be applied.
#[derive(Clone)]
pub(crate) enum CompiledTarget {
    Template(Vec<TemplatePart>),
    Function(Arc<TargetFn>),
}

impl CompiledTarget {
    pub(crate) fn compile(
        target: RewriteTarget,
        pattern: &RewritePattern,
    ) -> Result<Self, RewriteError> {
        match target {
            RewriteTarget::Function(f) => Ok(CompiledTarget::Function(f)),
            RewriteTarget::Template(template) => {
                let parts = parse_template(&template).map_err(|reason| {
                    RewriteError::MalformedTemplate {
                        pattern: pattern.raw().to_string(),
                        reason,
                    }
                })?;

                if let Some(name) = parts.iter().find_map(|part| match part {
                    TemplatePart::Param(name) if name != pattern.param() => Some(name),
                    _ => None,
                }) {
                    return Err(RewriteError::UnknownTemplateParameter {
                        pattern: pattern.raw().to_string(),
                        name: name.clone(),
                        param: pattern.param().to_string(),
                    });
                }

                Ok(CompiledTarget::Template(parts))
            }
        }
    }

    pub(crate) fn apply(&self, params: &RewriteParams) -> Result<String, ResolutionFailure> {
        let target = match self {
            CompiledTarget::Function(f) => (f.as_ref())(params).map_err(ResolutionFailure::Failed)?,
            CompiledTarget::Template(parts) => {
                parts.iter().fold(String::new(), |mut target, part| {
                    match part {
                        TemplatePart::Literal(literal) => target.push_str(literal),
                        TemplatePart::Param(name) => {
                            target.push_str(params.get(name).unwrap_or_default())
                        }
                    }
                    target
                })
            }
        };

        if target.is_empty() {
            return Err(ResolutionFailure::Empty);
        }

        Ok(target)
    }
}

fn parse_template(template: &str) -> Result<Vec<TemplatePart>, String> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(format!("unclosed `{{` in `{}`", template)),
                    }
                }

                if name.is_empty() {
                    return Err(format!("empty `{{}}` in `{}`", template));
                }

                if !literal.is_empty() {
                    parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(TemplatePart::Param(name));
            }
            '}' => return Err(format!("unmatched `}}` in `{}`", template)),
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(literal));
    }

    Ok(parts)
}
