use std::fmt::{self, Display, Formatter};

use crate::errors::PatternError;

/// A rewrite pattern, split into its literal prefix and its single named parameter.
///
/// `release/:version` has the prefix `release/` and the parameter `version`. A colon can be kept in the prefix by escaping it (`\:`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePattern {
    raw: String,
    prefix: String,
    param: String,
}

impl RewritePattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let placeholder = find_placeholder(raw, 0).ok_or(PatternError::MissingParameter)?;
        let name = &raw[placeholder + 1..];

        if name.is_empty() {
            return Err(PatternError::EmptyParameterName);
        }

        if find_placeholder(raw, placeholder + 1).is_some() {
            return Err(PatternError::MultipleParameters);
        }

        if name.contains('/') {
            return Err(PatternError::TrailingLiteral);
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PatternError::InvalidParameterName(name.to_string()));
        }

        let prefix = unescape_literal(&raw[..placeholder]);
        if prefix.is_empty() {
            return Err(PatternError::EmptyPrefix);
        }

        Ok(Self {
            raw: raw.to_string(),
            prefix,
            param: name.to_string(),
        })
    }

    /// The pattern as it was declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The literal part that must match the start of a path character-for-character.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Returns the part of `path` bound to the parameter, if the path starts with the literal prefix.
    ///
    /// The value is returned verbatim. A path equal to the prefix binds nothing and does not match.
    pub fn bind<'p>(&self, path: &'p str) -> Option<&'p str> {
        path.strip_prefix(self.prefix.as_str())
            .filter(|value| !value.is_empty())
    }
}

impl Display for RewritePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn find_placeholder(raw: &str, from: usize) -> Option<usize> {
    let mut start = from;

    while let Some(colon_pos) = raw[start..].find(':') {
        let abs_pos = start + colon_pos;

        // Check if escaped by counting preceding backslashes
        let backslash_count = raw[..abs_pos]
            .chars()
            .rev()
            .take_while(|&c| c == '\\')
            .count();

        if backslash_count % 2 == 1 {
            start = abs_pos + 1;
            continue;
        }

        return Some(abs_pos);
    }

    None
}

fn unescape_literal(literal: &str) -> String {
    let mut unescaped = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some(next @ (':' | '\\')) => unescaped.push(next),
            Some(next) => {
                unescaped.push(c);
                unescaped.push(next);
            }
            None => unescaped.push(c),
        }
    }

    unescaped
}

#[cfg(test)]
mod tests {
    use super::RewritePattern;
    use crate::errors::PatternError;

    #[test]
    fn test_parse_pattern() {
        let pattern = RewritePattern::parse("release/:version").unwrap();

        assert_eq!(pattern.raw(), "release/:version");
        assert_eq!(pattern.prefix(), "release/");
        assert_eq!(pattern.param(), "version");
    }

    #[test]
    fn test_parse_pattern_without_slash_before_placeholder() {
        let pattern = RewritePattern::parse("v:tag").unwrap();

        assert_eq!(pattern.prefix(), "v");
        assert_eq!(pattern.param(), "tag");
    }

    #[test]
    fn test_parse_pattern_no_params() {
        assert_eq!(
            RewritePattern::parse("release/latest"),
            Err(PatternError::MissingParameter)
        );
    }

    #[test]
    fn test_parse_pattern_empty_name() {
        assert_eq!(
            RewritePattern::parse("release/:"),
            Err(PatternError::EmptyParameterName)
        );
    }

    #[test]
    fn test_parse_pattern_multiple() {
        assert_eq!(
            RewritePattern::parse("release/:version/:asset"),
            Err(PatternError::MultipleParameters)
        );
    }

    #[test]
    fn test_parse_pattern_trailing_literal() {
        assert_eq!(
            RewritePattern::parse("release/:version/notes"),
            Err(PatternError::TrailingLiteral)
        );
    }

    #[test]
    fn test_parse_pattern_invalid_name() {
        assert_eq!(
            RewritePattern::parse("release/:ver-sion"),
            Err(PatternError::InvalidParameterName("ver-sion".to_string()))
        );
    }

    #[test]
    fn test_parse_pattern_empty_prefix() {
        assert_eq!(
            RewritePattern::parse(":version"),
            Err(PatternError::EmptyPrefix)
        );
    }

    #[test]
    fn test_parse_pattern_escaped() {
        assert_eq!(
            RewritePattern::parse("release\\:latest"),
            Err(PatternError::MissingParameter)
        );
    }

    #[test]
    fn test_parse_pattern_escaped_with_param() {
        let pattern = RewritePattern::parse("docs\\:v1/:page").unwrap();

        assert_eq!(pattern.prefix(), "docs:v1/");
        assert_eq!(pattern.param(), "page");
    }

    #[test]
    fn test_parse_pattern_escaped_backslash() {
        let pattern = RewritePattern::parse("odd\\\\:name").unwrap();

        assert_eq!(pattern.prefix(), "odd\\");
        assert_eq!(pattern.param(), "name");
    }

    #[test]
    fn test_bind_verbatim() {
        let pattern = RewritePattern::parse("release/:version").unwrap();

        assert_eq!(pattern.bind("release/v1.2.3"), Some("v1.2.3"));
        assert_eq!(pattern.bind("release/v1%2E2 /x"), Some("v1%2E2 /x"));
        assert_eq!(pattern.bind("guide/quickstart"), None);
        assert_eq!(pattern.bind("/release/v1.2.3"), None);
    }

    #[test]
    fn test_bind_empty_suffix() {
        let pattern = RewritePattern::parse("release/:version").unwrap();

        assert_eq!(pattern.bind("release/"), None);
        assert_eq!(pattern.bind("release"), None);
        assert_eq!(pattern.bind(""), None);
    }
}
