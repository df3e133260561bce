//! Repository references (`owner/name`)

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A GitHub repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    /// Create a reference from already-split parts
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        let display = format!("{}/{}", owner, name);
        Self::from_parts(&display, &owner, &name)
    }

    /// Parse a repository reference
    ///
    /// Supports formats:
    /// - owner/repo
    /// - https://github.com/owner/repo
    /// - git@github.com:owner/repo.git
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.starts_with("https://") || input.starts_with("http://") {
            let url = url::Url::parse(input)
                .map_err(|e| Error::invalid_reference(input, e.to_string()))?;
            let path = url.path().trim_matches('/');
            return Self::split_path(input, path);
        }

        if let Some(rest) = input.strip_prefix("git@") {
            let path = rest
                .split_once(':')
                .map(|(_, path)| path)
                .ok_or_else(|| Error::invalid_reference(input, "SSH URL is missing ':'"))?;
            return Self::split_path(input, path);
        }

        Self::split_path(input, input)
    }

    /// Repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both references name the same repository
    ///
    /// GitHub owner and repository names are case-insensitive.
    pub fn same_repository(&self, other: &RepoRef) -> bool {
        self.owner.eq_ignore_ascii_case(&other.owner) && self.name.eq_ignore_ascii_case(&other.name)
    }

    fn split_path(input: &str, path: &str) -> Result<Self> {
        let (owner, name) = path
            .split_once('/')
            .ok_or_else(|| Error::invalid_reference(input, "expected owner/name"))?;
        Self::from_parts(input, owner, name.trim_end_matches(".git"))
    }

    fn from_parts(input: &str, owner: &str, name: &str) -> Result<Self> {
        if owner.is_empty() || name.is_empty() {
            return Err(Error::invalid_reference(
                input,
                "owner and name must both be non-empty",
            ));
        }
        let bad = |c: char| c == '/' || c.is_whitespace();
        if owner.contains(bad) || name.contains(bad) {
            return Err(Error::invalid_reference(input, "expected owner/name"));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let repo = RepoRef::parse("octo-org/widgets").unwrap();
        assert_eq!(repo.owner(), "octo-org");
        assert_eq!(repo.name(), "widgets");
        assert_eq!(repo.to_string(), "octo-org/widgets");
    }

    #[test]
    fn test_parse_shorthand_with_git_suffix() {
        let repo: RepoRef = "octo-org/widgets.git".parse().unwrap();
        assert_eq!(repo.name(), "widgets");
    }

    #[test]
    fn test_parse_https_url() {
        let repo = RepoRef::parse("https://github.com/octo-org/widgets").unwrap();
        assert_eq!(repo, RepoRef::new("octo-org", "widgets").unwrap());
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let repo = RepoRef::parse("https://github.com/octo-org/widgets.git").unwrap();
        assert_eq!(repo.name(), "widgets");
    }

    #[test]
    fn test_parse_ssh_url() {
        let repo = RepoRef::parse("git@github.com:octo-org/widgets.git").unwrap();
        assert_eq!(repo.owner(), "octo-org");
        assert_eq!(repo.name(), "widgets");
    }

    #[test]
    fn test_missing_separator_is_invalid_reference() {
        let err = RepoRef::parse("not-a-valid-ref").unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));
        assert!(err.to_string().contains("not-a-valid-ref"));
    }

    #[test]
    fn test_empty_parts_rejected() {
        assert!(RepoRef::parse("/widgets").is_err());
        assert!(RepoRef::parse("octo-org/").is_err());
        assert!(RepoRef::parse("").is_err());
    }

    #[test]
    fn test_extra_segments_rejected() {
        let err = RepoRef::parse("octo-org/widgets/issues").unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));
    }

    #[test]
    fn test_same_repository_ignores_case() {
        let upper = RepoRef::parse("Octo-Org/Source").unwrap();
        let lower = RepoRef::parse("octo-org/source").unwrap();
        assert!(upper.same_repository(&lower));
        assert!(!upper.same_repository(&RepoRef::parse("octo-org/target").unwrap()));
    }

    #[test]
    fn test_new_validates() {
        assert!(RepoRef::new("", "widgets").is_err());
        assert!(RepoRef::new("octo/org", "widgets").is_err());
        assert!(RepoRef::new("octo-org", "widgets").is_ok());
    }
}
