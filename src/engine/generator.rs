use thiserror::Error;

use crate::engine::llm_client::{BackendError, CopyBackend};
use crate::engine::prompt_builder::PromptBuilder;
use crate::model::copy_decode::{decode_copy_result, DecodeError};
use crate::model::copy_result::GeneratedCopyResult;
use crate::model::event_form::EventFormData;

/// The only failure text the user ever sees.
pub const FAILED_MESSAGE: &str = "Failed to generate copy. Please try again.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("an event theme is required before generating copy")]
    MissingTheme,

    #[error("{}", FAILED_MESSAGE)]
    Backend(#[from] BackendError),

    #[error("{}", FAILED_MESSAGE)]
    Decode(#[from] DecodeError),
}

/// Turns one form into one result with a single backend call.
/// Causes are logged here and never shown to the user.
pub fn generate_event_copy(
    backend: &dyn CopyBackend,
    form: &EventFormData,
) -> Result<GeneratedCopyResult, GenerationError> {
    if !form.is_ready() {
        return Err(GenerationError::MissingTheme);
    }

    let prompt = PromptBuilder::build(form);

    let outcome = backend
        .generate(&prompt)
        .map_err(GenerationError::from)
        .and_then(|text| decode_copy_result(&text).map_err(GenerationError::from));

    match &outcome {
        Ok(_) => tracing::info!(theme = %form.theme, "event copy generated"),
        Err(GenerationError::Backend(cause)) => {
            tracing::error!(error = %cause, "generation backend call failed")
        }
        Err(GenerationError::Decode(cause)) => {
            tracing::error!(error = %cause, "generation response rejected")
        }
        Err(GenerationError::MissingTheme) => {}
    }

    outcome
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::prompt_builder::CopyPrompt;
    use crate::model::event_form::CopyStyle;
    use crate::model::prize::{PrizeItem, PrizeList};
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Canned backend that counts calls and records the prompts it saw.
    pub(crate) struct FakeBackend {
        reply: Box<dyn Fn() -> Result<String, BackendError> + Send>,
        pub(crate) calls: Arc<AtomicUsize>,
        pub(crate) prompts: Arc<Mutex<Vec<CopyPrompt>>>,
    }

    impl FakeBackend {
        pub(crate) fn replying(text: &str) -> Self {
            let text = text.to_string();
            Self::with(move || Ok(text.clone()))
        }

        pub(crate) fn failing_with_status(status: StatusCode) -> Self {
            Self::with(move || {
                Err(BackendError::Status {
                    status,
                    body: "backend unavailable".into(),
                })
            })
        }

        fn with(reply: impl Fn() -> Result<String, BackendError> + Send + 'static) -> Self {
            Self {
                reply: Box::new(reply),
                calls: Arc::new(AtomicUsize::new(0)),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl CopyBackend for FakeBackend {
        fn generate(&self, prompt: &CopyPrompt) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.clone());
            (self.reply)()
        }
    }

    pub(crate) const SUMMER_RUN_REPLY: &str = r#"{"concise":"夏日清凉跑来啦","playful":"🏃冲！\n一起流汗","detailed":"【主题】夏日清凉跑\n【时间】7月1日-7月7日","emojiStr":"🏃🔥🎉"}"#;

    pub(crate) fn summer_run_form() -> EventFormData {
        EventFormData {
            theme: "夏日清凉跑".into(),
            duration: "7月1日-7月7日".into(),
            prizes: PrizeList::from_items(vec![PrizeItem::new("一等奖", "跑鞋")]),
            style: CopyStyle::HypeExcited,
            platform: "微信群".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_theme_never_reaches_backend() {
        let backend = FakeBackend::replying(SUMMER_RUN_REPLY);
        let form = EventFormData::default();

        let err = generate_event_copy(&backend, &form).unwrap_err();
        assert!(matches!(err, GenerationError::MissingTheme));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn success_returns_payload_exactly() {
        let backend = FakeBackend::replying(SUMMER_RUN_REPLY);

        let result = generate_event_copy(&backend, &summer_run_form()).unwrap();
        assert_eq!(
            result,
            GeneratedCopyResult {
                concise: "夏日清凉跑来啦".into(),
                playful: "🏃冲！\n一起流汗".into(),
                detailed: "【主题】夏日清凉跑\n【时间】7月1日-7月7日".into(),
                emoji_str: "🏃🔥🎉".into(),
            }
        );
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backend_receives_built_prompt() {
        let backend = FakeBackend::replying(SUMMER_RUN_REPLY);
        let form = summer_run_form();
        generate_event_copy(&backend, &form).unwrap();

        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptBuilder::build(&form));
    }

    #[test]
    fn every_failure_has_the_same_message() {
        let cases = vec![
            FakeBackend::replying(""),
            FakeBackend::replying(r#"{"concise":"a","playful":"b","detailed":"c"}"#),
            FakeBackend::replying("not json at all"),
            FakeBackend::failing_with_status(StatusCode::UNAUTHORIZED),
            FakeBackend::failing_with_status(StatusCode::SERVICE_UNAVAILABLE),
        ];

        for backend in cases {
            let err = generate_event_copy(&backend, &summer_run_form()).unwrap_err();
            assert_eq!(err.to_string(), FAILED_MESSAGE);
            assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        }
    }
}
