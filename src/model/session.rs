use crate::model::copy_result::GeneratedCopyResult;
use crate::model::event_form::EventFormData;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Awaiting,
    Ready(GeneratedCopyResult),
    Failed(String),
}

/// Form plus the outcome of the latest generation attempt.
/// The UI thread is the only writer.
#[derive(Debug, Default)]
pub struct CopySession {
    pub form: EventFormData,
    status: GenerationStatus,
    has_generated: bool,
}

impl CopySession {
    pub fn with_form(form: EventFormData) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    pub fn is_awaiting(&self) -> bool {
        self.status == GenerationStatus::Awaiting
    }

    pub fn has_generated(&self) -> bool {
        self.has_generated
    }

    pub fn can_generate(&self) -> bool {
        self.form.is_ready() && !self.is_awaiting()
    }

    pub fn result(&self) -> Option<&GeneratedCopyResult> {
        match &self.status {
            GenerationStatus::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            GenerationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Starts an attempt and hands back the form to send.
    /// Returns None when the theme is empty or a request is already out.
    pub fn begin(&mut self) -> Option<EventFormData> {
        if !self.can_generate() {
            return None;
        }

        self.status = GenerationStatus::Awaiting;
        Some(self.form.clone())
    }

    pub fn finish_success(&mut self, result: GeneratedCopyResult) {
        self.status = GenerationStatus::Ready(result);
        self.has_generated = true;
    }

    pub fn finish_failure(&mut self, message: impl Into<String>) {
        self.status = GenerationStatus::Failed(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> GeneratedCopyResult {
        GeneratedCopyResult {
            concise: "c".into(),
            playful: "p".into(),
            detailed: "d".into(),
            emoji_str: "🎉".into(),
        }
    }

    fn session_with_theme() -> CopySession {
        let mut session = CopySession::default();
        session.form.theme = "夏日清凉跑".into();
        session
    }

    #[test]
    fn empty_theme_blocks_begin() {
        let mut session = CopySession::default();
        assert!(session.begin().is_none());
        assert_eq!(session.status(), &GenerationStatus::Idle);
    }

    #[test]
    fn second_begin_while_awaiting_is_refused() {
        let mut session = session_with_theme();
        assert!(session.begin().is_some());
        assert!(session.is_awaiting());
        assert!(!session.can_generate());
        assert!(session.begin().is_none());
    }

    #[test]
    fn begin_clears_previous_result_and_error() {
        let mut session = session_with_theme();
        session.begin();
        session.finish_success(sample_result());
        assert!(session.result().is_some());

        session.begin();
        assert!(session.result().is_none());
        assert!(session.error().is_none());

        session.finish_failure("boom");
        session.begin();
        assert!(session.error().is_none());
    }

    #[test]
    fn failure_leaves_no_result() {
        let mut session = session_with_theme();
        session.begin();
        session.finish_failure("Failed to generate copy. Please try again.");

        assert!(session.result().is_none());
        assert_eq!(
            session.error(),
            Some("Failed to generate copy. Please try again.")
        );
        assert!(!session.has_generated());
        assert!(session.can_generate());
    }

    #[test]
    fn success_marks_session_as_generated() {
        let mut session = session_with_theme();
        session.begin();
        session.finish_success(sample_result());

        assert!(session.has_generated());
        assert_eq!(session.result(), Some(&sample_result()));
        assert!(session.error().is_none());
    }
}
