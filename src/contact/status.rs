//! Submission status

use std::fmt;

use crate::error::handlers::CONTACT_FAILED_MESSAGE;

/// Where the form is in its submission lifecycle.
///
/// `Idle -> Submitting -> {Success, Error}`. `Error` drops back to `Idle` on
/// the next field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Status line shown under the form, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Submitting => Some("제출 중..."),
            SubmitStatus::Success => Some("문의가 성공적으로 제출되었습니다."),
            SubmitStatus::Error => Some(CONTACT_FAILED_MESSAGE),
        }
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Submitting => "submitting",
            SubmitStatus::Success => "success",
            SubmitStatus::Error => "error",
        };
        f.write_str(name)
    }
}
