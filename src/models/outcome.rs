use serde::{Deserialize, Serialize};

/// Result of the most recent completed submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionOutcome::Idle => "idle",
            SubmissionOutcome::Success => "success",
            SubmissionOutcome::Error => "error",
        }
    }

    /// Status banner under the submit button, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            SubmissionOutcome::Idle => None,
            SubmissionOutcome::Success => Some("Booking request sent! We'll contact you soon."),
            SubmissionOutcome::Error => Some("Error submitting. Please try again."),
        }
    }
}
