//! Submission phases and guards for the report form.

use std::time::Duration;

use super::RequiredField;

/// Simulated round-trip before a submission is acknowledged.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// How long the thank-you screen stays up before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Where the form is in its submit cycle.
///
/// `Editing → Submitting → Submitted → Editing`. The first transition is the
/// guarded submit action; the other two are timeouts. Returning to `Editing`
/// clears the draft back to its defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    /// Only an idle form takes a submit; re-triggers are dropped.
    pub fn accepts_submit(self) -> bool {
        matches!(self, Self::Editing)
    }

    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// Inline notice for a refused submit, naming the fields still to fill in.
/// `None` when nothing is missing.
pub fn missing_fields_notice(missing: &[RequiredField]) -> Option<String> {
    match missing {
        [] => None,
        [field] => Some(format!("Please fill in the {} field.", field.label())),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|field| field.label())
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!(
                "Please fill in the {head} and {} fields.",
                last.label()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::report::{IssueCategory, IssueDraft};

    #[test]
    fn a_fresh_form_is_editing() {
        assert_eq!(SubmitPhase::default(), SubmitPhase::Editing);
    }

    #[test]
    fn only_editing_accepts_a_submit() {
        assert!(SubmitPhase::Editing.accepts_submit());
        assert!(!SubmitPhase::Submitting.accepts_submit());
        assert!(!SubmitPhase::Submitted.accepts_submit());
    }

    #[test]
    fn no_notice_when_nothing_is_missing() {
        assert_eq!(missing_fields_notice(&[]), None);
    }

    #[test]
    fn notice_names_a_single_missing_field() {
        assert_eq!(
            missing_fields_notice(&[RequiredField::Title]).as_deref(),
            Some("Please fill in the title field.")
        );
    }

    #[test]
    fn notice_lists_every_missing_field() {
        let missing = [
            RequiredField::Title,
            RequiredField::Email,
            RequiredField::Description,
        ];
        assert_eq!(
            missing_fields_notice(&missing).as_deref(),
            Some("Please fill in the title, email and description fields.")
        );
    }

    #[test]
    fn two_missing_fields_read_naturally() {
        let missing = [RequiredField::Email, RequiredField::Description];
        assert_eq!(
            missing_fields_notice(&missing).as_deref(),
            Some("Please fill in the email and description fields.")
        );
    }

    #[test]
    fn incomplete_question_draft_is_refused_with_the_right_notice() {
        let draft = IssueDraft {
            category: IssueCategory::Question,
            email: "x@y.com".into(),
            description: "How do I configure?".into(),
            ..IssueDraft::default()
        };
        let notice = missing_fields_notice(&draft.missing_required());
        assert_eq!(notice.as_deref(), Some("Please fill in the title field."));
    }

    #[test]
    fn complete_bug_draft_passes_the_gate() {
        let draft = IssueDraft {
            category: IssueCategory::Bug,
            title: "Crash on load".into(),
            email: "a@b.com".into(),
            description: "App crashes".into(),
            reproduction: "1. Open app".into(),
        };
        assert_eq!(missing_fields_notice(&draft.missing_required()), None);
    }

    // The submit handler gates on `is_submittable` and formats the refusal
    // from `missing_required`; the two must never disagree.
    #[test]
    fn refusal_notice_agrees_with_the_submit_gate() {
        let complete = IssueDraft {
            category: IssueCategory::Bug,
            title: "Crash on load".into(),
            email: "a@b.com".into(),
            description: "App crashes".into(),
            reproduction: "1. Open app".into(),
        };
        assert!(complete.is_submittable());
        assert_eq!(missing_fields_notice(&complete.missing_required()), None);

        let empty = IssueDraft::default();
        assert!(!empty.is_submittable());
        assert!(missing_fields_notice(&empty.missing_required()).is_some());
    }
}
