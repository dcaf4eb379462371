use std::fmt;

use thiserror::Error;

/// Rejected scene path text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("scene path is empty")]
    Empty,
    #[error("scene path `{0}` is not absolute")]
    NotAbsolute(String),
    #[error("scene path `{0}` has an empty element")]
    EmptyElement(String),
}

/// Absolute path identifying a node in the imaging engine's scene.
///
/// Paths are `/`-separated, start at the pseudo-root `/`, and have no empty
/// elements or trailing separator (other than the root itself).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScenePath(String);

impl ScenePath {
    pub fn parse(text: &str) -> Result<Self, ScopeError> {
        if text.is_empty() {
            return Err(ScopeError::Empty);
        }
        if !text.starts_with('/') {
            return Err(ScopeError::NotAbsolute(text.to_owned()));
        }
        if text != "/" && text[1..].split('/').any(str::is_empty) {
            return Err(ScopeError::EmptyElement(text.to_owned()));
        }
        Ok(Self(text.to_owned()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_absolute_paths() {
        assert_eq!(ScenePath::parse("/").unwrap().as_str(), "/");
        assert_eq!(ScenePath::parse("/World/Set").unwrap().as_str(), "/World/Set");
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(ScenePath::parse(""), Err(ScopeError::Empty));
        assert!(matches!(ScenePath::parse("World"), Err(ScopeError::NotAbsolute(_))));
        assert!(matches!(ScenePath::parse("/World//Set"), Err(ScopeError::EmptyElement(_))));
        assert!(matches!(ScenePath::parse("/World/"), Err(ScopeError::EmptyElement(_))));
    }
}
