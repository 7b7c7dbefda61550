//! Submission lifecycle — which stage of the connect form the page is in.
//!
//! ```text
//! NotSubmitted --submit--> Pending --response--> Complete
//! ```
//!
//! Transitions only move forward. There is no error state and no timeout:
//! a failed submission simply stays [`Pending`](SubmissionLifecycle::Pending).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SubmissionLifecycle {
    #[default]
    NotSubmitted,
    Pending,
    Complete,
}

impl SubmissionLifecycle {
    /// Transition for a submit action.
    #[must_use]
    pub fn submit(self) -> Self {
        match self {
            Self::NotSubmitted | Self::Pending => Self::Pending,
            Self::Complete => Self::Complete,
        }
    }

    /// Transition for a received `/connect` response.
    ///
    /// A response that was never asked for leaves the state unchanged.
    #[must_use]
    pub fn respond(self) -> Self {
        match self {
            Self::Pending | Self::Complete => Self::Complete,
            Self::NotSubmitted => Self::NotSubmitted,
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

impl fmt::Display for SubmissionLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSubmitted => f.write_str("not-submitted"),
            Self::Pending => f.write_str("submitted-pending"),
            Self::Complete => f.write_str("submitted-complete"),
        }
    }
}
