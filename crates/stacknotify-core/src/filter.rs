use std::collections::HashSet;

use crate::models::Question;

/// Decides which fetched questions are relevant to the user.
///
/// The tracked set is fixed at construction. An empty set means
/// untracked mode: everything matches.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    tracked: HashSet<String>,
}

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracked: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the question carries at least one tracked tag, or when
    /// no tags are tracked at all. Pure and total; tags match exactly
    /// (Stack Overflow tags are lowercase slugs already).
    pub fn matches(&self, question: &Question) -> bool {
        self.tracked.is_empty() || question.tags.iter().any(|tag| self.tracked.contains(tag))
    }

    pub fn is_unrestricted(&self) -> bool {
        self.tracked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question_with_tags(tags: &[&str]) -> Question {
        Question {
            id: 42,
            title: "a question".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            up_votes: 0,
            down_votes: 0,
            answer_count: 0,
            created_at: Utc::now(),
            url: "https://stackoverflow.com/questions/42/".to_string(),
        }
    }

    #[test]
    fn test_empty_tracked_set_matches_everything() {
        let filter = TagFilter::new(Vec::<String>::new());
        assert!(filter.is_unrestricted());
        assert!(filter.matches(&question_with_tags(&["python"])));
        assert!(filter.matches(&question_with_tags(&[])));
    }

    #[test]
    fn test_matches_on_tag_intersection() {
        let filter = TagFilter::new(["python"]);
        assert!(filter.matches(&question_with_tags(&["python", "django"])));
        assert!(!filter.matches(&question_with_tags(&["rust", "tokio"])));
    }

    #[test]
    fn test_any_tracked_tag_is_enough() {
        let filter = TagFilter::new(["go", "rust"]);
        assert!(filter.matches(&question_with_tags(&["rust"])));
        assert!(filter.matches(&question_with_tags(&["go", "testing"])));
        assert!(!filter.matches(&question_with_tags(&["java"])));
    }

    #[test]
    fn test_matching_is_exact() {
        let filter = TagFilter::new(["Python"]);
        assert!(!filter.matches(&question_with_tags(&["python"])));
    }
}
