//! Contact form validation and notice wording. No network is involved; a
//! submission only produces local feedback.

pub const SUCCESS_NOTICE: &str = "Thank you! Your message has been sent successfully.";
pub const ERROR_NOTICE: &str = "Please fill in all required fields.";

const SUCCESS_NOTICE_SECS: f64 = 5.0;
const ERROR_NOTICE_SECS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
}

impl Feedback {
    pub fn notice(self) -> &'static str {
        match self {
            Feedback::Success => SUCCESS_NOTICE,
            Feedback::Error => ERROR_NOTICE,
        }
    }

    /// How long the notice stays up before auto-hiding.
    pub fn hide_after_secs(self) -> f64 {
        match self {
            Feedback::Success => SUCCESS_NOTICE_SECS,
            Feedback::Error => ERROR_NOTICE_SECS,
        }
    }

    pub fn is_success(self) -> bool {
        self == Feedback::Success
    }
}

/// Tags the pending notice-hide timer so a superseded timer can be told from
/// the live one. Each new notice bumps the generation; an expiry only counts
/// if it still carries the current value, so a stale timer never hides a
/// newer notice early.
#[derive(Debug, Default)]
pub struct NoticeGuard {
    generation: u64,
}

impl NoticeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new notice; returns the tag its hide timer must present.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

/// All three fields are required; any empty one fails the submission. There is
/// deliberately no email-shape check.
pub fn review(name: &str, email: &str, message: &str) -> Feedback {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        Feedback::Error
    } else {
        Feedback::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present_succeeds() {
        assert_eq!(review("A", "a@b.c", "hi"), Feedback::Success);
    }

    #[test]
    fn test_each_missing_field_fails() {
        assert_eq!(review("", "a@b.c", "hi"), Feedback::Error);
        assert_eq!(review("A", "", "hi"), Feedback::Error);
        assert_eq!(review("A", "a@b.c", ""), Feedback::Error);
        assert_eq!(review("", "", ""), Feedback::Error);
    }

    #[test]
    fn test_no_email_format_check() {
        assert_eq!(review("A", "not-an-email", "hi"), Feedback::Success);
    }

    #[test]
    fn test_stale_notice_timer_is_ignored() {
        let mut guard = NoticeGuard::new();
        let first = guard.bump();
        // A second submission lands before the first timer fires
        let second = guard.bump();

        assert!(!guard.is_current(first), "superseded timer must not hide the newer notice");
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_current_notice_timer_hides() {
        let mut guard = NoticeGuard::new();
        let tag = guard.bump();
        assert!(guard.is_current(tag));
    }

    #[test]
    fn test_notice_wording_and_durations() {
        assert_eq!(Feedback::Success.notice(), SUCCESS_NOTICE);
        assert_eq!(Feedback::Error.notice(), ERROR_NOTICE);
        assert!(Feedback::Success.hide_after_secs() > Feedback::Error.hide_after_secs());
        assert_eq!(Feedback::Success.hide_after_secs(), 5.0);
        assert_eq!(Feedback::Error.hide_after_secs(), 3.0);
    }
}
