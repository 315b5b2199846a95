//! The in-memory draft of a user's report.

/// What kind of report the user is filing. Closed set, exactly one selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IssueCategory {
    /// Something a generated project does wrong.
    #[default]
    Bug,
    /// A suggestion for the scaffolder.
    Feature,
    /// A usage question.
    Question,
}

impl IssueCategory {
    /// All categories, in picker order.
    pub const ALL: [IssueCategory; 3] = [Self::Bug, Self::Feature, Self::Question];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "Bug Report",
            Self::Feature => "Feature Request",
            Self::Question => "Question",
        }
    }

    /// Lowercase form for running text ("your bug report has been…").
    pub fn label_lower(self) -> &'static str {
        match self {
            Self::Bug => "bug report",
            Self::Feature => "feature request",
            Self::Question => "question",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Bug => "🐛",
            Self::Feature => "💡",
            Self::Question => "💬",
        }
    }

    /// One-liner on the picker card.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Bug => "Something isn't working as expected",
            Self::Feature => "Suggest a new feature or improvement",
            Self::Question => "Ask about usage or get help",
        }
    }

    /// Accent class shared by the picker card and the submit button.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Bug => "red",
            Self::Feature => "yellow",
            Self::Question => "blue",
        }
    }

    /// Placeholder for the description field, phrased per category.
    pub fn description_prompt(self) -> &'static str {
        match self {
            Self::Bug => {
                "Describe the bug in detail. What happened? What did you expect to happen?"
            }
            Self::Feature => "Describe the feature you'd like to see. How would it help you?",
            Self::Question => "What would you like to know? Provide as much context as possible.",
        }
    }

    /// Reproduction steps only make sense for bugs.
    pub fn needs_reproduction(self) -> bool {
        matches!(self, Self::Bug)
    }
}

/// A required field the submit guard can report as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Email,
    Description,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Email => "email",
            Self::Description => "description",
        }
    }
}

/// The in-memory, unpersisted record of an in-progress report.
///
/// Lives in one signal on the report view. Never serialized, never survives
/// navigation; a successful submission eventually resets it to `default()`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct IssueDraft {
    pub category: IssueCategory,
    pub title: String,
    pub email: String,
    pub description: String,
    pub reproduction: String,
}

impl IssueDraft {
    /// Required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(RequiredField::Title);
        }
        if self.email.is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.description.is_empty() {
            missing.push(RequiredField::Description);
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_bug_draft() -> IssueDraft {
        IssueDraft {
            category: IssueCategory::Bug,
            title: "Crash on load".into(),
            email: "a@b.com".into(),
            description: "App crashes".into(),
            reproduction: "1. Open app".into(),
        }
    }

    #[test]
    fn defaults_to_an_empty_bug_report() {
        let draft = IssueDraft::default();
        assert_eq!(draft.category, IssueCategory::Bug);
        assert_eq!(draft.title, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.reproduction, "");
    }

    #[test]
    fn complete_draft_is_submittable() {
        let draft = complete_bug_draft();
        assert!(draft.is_submittable());
        assert_eq!(draft.missing_required(), vec![]);
    }

    #[test]
    fn each_required_field_blocks_submission_on_its_own() {
        let mut draft = complete_bug_draft();
        draft.title.clear();
        assert_eq!(draft.missing_required(), vec![RequiredField::Title]);

        let mut draft = complete_bug_draft();
        draft.email.clear();
        assert_eq!(draft.missing_required(), vec![RequiredField::Email]);

        let mut draft = complete_bug_draft();
        draft.description.clear();
        assert_eq!(draft.missing_required(), vec![RequiredField::Description]);
    }

    #[test]
    fn reproduction_steps_are_optional_even_for_bugs() {
        let mut draft = complete_bug_draft();
        draft.reproduction.clear();
        assert!(draft.is_submittable());
    }

    #[test]
    fn question_without_a_title_is_not_submittable() {
        let draft = IssueDraft {
            category: IssueCategory::Question,
            email: "x@y.com".into(),
            description: "How do I configure?".into(),
            ..IssueDraft::default()
        };
        assert!(!draft.is_submittable());
        assert_eq!(draft.missing_required(), vec![RequiredField::Title]);
    }

    #[test]
    fn switching_category_keeps_every_other_field() {
        let mut draft = complete_bug_draft();
        draft.category = IssueCategory::Question;
        assert_eq!(draft.title, "Crash on load");
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.description, "App crashes");
        assert_eq!(draft.reproduction, "1. Open app");
    }

    #[test]
    fn only_bugs_ask_for_reproduction_steps() {
        assert!(IssueCategory::Bug.needs_reproduction());
        assert!(!IssueCategory::Feature.needs_reproduction());
        assert!(!IssueCategory::Question.needs_reproduction());
    }

    #[test]
    fn category_metadata_is_distinct_per_variant() {
        let labels: Vec<_> = IssueCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Bug Report", "Feature Request", "Question"]);

        let accents: Vec<_> = IssueCategory::ALL.iter().map(|c| c.accent()).collect();
        assert_eq!(accents, vec!["red", "yellow", "blue"]);
    }
}
