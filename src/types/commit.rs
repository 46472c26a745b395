//! Commits from a comparison range

/// A commit entry; classification only looks at its subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub message: String,
}

impl Commit {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
        }
    }

    /// First line of the commit message
    pub fn subject(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_is_first_line() {
        let commit = Commit::new("abc123", "fix(api): handle nulls\n\nLonger body here");
        assert_eq!(commit.subject(), "fix(api): handle nulls");
    }

    #[test]
    fn test_subject_of_empty_message() {
        let commit = Commit::new("abc123", "");
        assert_eq!(commit.subject(), "");
    }
}
