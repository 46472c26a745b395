use crate::types::Commit;
use once_cell::sync::Lazy;
use regex::Regex;

// `<type>[(<scope>)]: <description>` anchored at the start of the subject line
static CONVENTIONAL_COMMIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(feat|fix|perf|refactor|chore|ci|docs|style|test)(?:\(([\w\s-]+)\))?:\s(.+)")
        .expect("Should compile: CONVENTIONAL_COMMIT_RE")
});

const DEFAULT_SCOPE: &str = "General";

/// Buckets a classified commit can land in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Features,
    Fixes,
    Performance,
    Internal,
}

impl Category {
    /// Rendering order in the prompt
    pub const ALL: [Category; 4] = [
        Category::Features,
        Category::Fixes,
        Category::Performance,
        Category::Internal,
    ];

    /// Map a conventional-commit type to its bucket.
    ///
    /// `docs` and `test` have no bucket, so those commits are dropped.
    pub fn from_commit_type(commit_type: &str) -> Option<Self> {
        match commit_type {
            "feat" => Some(Self::Features),
            "fix" => Some(Self::Fixes),
            "perf" => Some(Self::Performance),
            "refactor" | "chore" | "ci" | "style" => Some(Self::Internal),
            _ => None,
        }
    }

    /// Markdown heading used for this bucket in the prompt context
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Features => "### ✨ New Features",
            Self::Fixes => "### 🐛 Bug Fixes",
            Self::Performance => "### ⚡️ Performance Improvements",
            Self::Internal => "### 🔧 Internal Changes",
        }
    }
}

/// Formatted bullets per category, in commit order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    features: Vec<String>,
    fixes: Vec<String>,
    performance: Vec<String>,
    internal: Vec<String>,
}

impl CategoryBuckets {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Features => &self.features,
            Category::Fixes => &self.fixes,
            Category::Performance => &self.performance,
            Category::Internal => &self.internal,
        }
    }

    fn push(&mut self, category: Category, bullet: String) {
        let bucket = match category {
            Category::Features => &mut self.features,
            Category::Fixes => &mut self.fixes,
            Category::Performance => &mut self.performance,
            Category::Internal => &mut self.internal,
        };
        bucket.push(bullet);
    }

    /// Number of bullets across all buckets
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify a single commit message by its first line.
///
/// Returns the bucket and the formatted bullet, or `None` when the subject does
/// not follow the grammar or its type has no bucket.
pub fn classify_commit(message: &str) -> Option<(Category, String)> {
    let subject = message.split('\n').next().unwrap_or_default();
    let captures = CONVENTIONAL_COMMIT_RE.captures(subject)?;

    let category = Category::from_commit_type(captures.get(1)?.as_str())?;
    let scope = captures
        .get(2)
        .map_or_else(|| DEFAULT_SCOPE.to_string(), |m| capitalize(m.as_str()));
    let description = captures.get(3)?.as_str();

    Some((category, format!("- **{scope}:** {description}")))
}

/// Fold a commit sequence into category buckets, preserving commit order.
pub fn categorize_commits(commits: &[Commit]) -> CategoryBuckets {
    commits
        .iter()
        .filter_map(|commit| classify_commit(commit.subject()))
        .fold(CategoryBuckets::default(), |mut buckets, (category, bullet)| {
            buckets.push(category, bullet);
            buckets
        })
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
