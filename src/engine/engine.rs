use std::sync::mpsc::{Receiver, Sender};

use crate::engine::generator::generate_event_copy;
use crate::engine::llm_client::CopyBackend;
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Runs generation calls off the UI thread, one command at a time.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    backend: Box<dyn CopyBackend>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        backend: Box<dyn CopyBackend>,
    ) -> Self {
        Self { rx, tx, backend }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Generate(form) => {
                    let response = match generate_event_copy(&*self.backend, &form) {
                        Ok(result) => EngineResponse::CopyGenerated(result),
                        Err(err) => EngineResponse::GenerationFailed {
                            message: err.to_string(),
                        },
                    };

                    if self.tx.send(response).is_err() {
                        tracing::debug!("UI went away, stopping engine");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generator::tests::{summer_run_form, FakeBackend, SUMMER_RUN_REPLY};
    use crate::engine::generator::FAILED_MESSAGE;
    use crate::model::copy_result::GeneratedCopyResult;
    use crate::model::session::{CopySession, GenerationStatus};
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;

    struct Harness {
        cmd_tx: Sender<EngineCommand>,
        resp_rx: Receiver<EngineResponse>,
        calls: Arc<AtomicUsize>,
    }

    fn spawn_engine(backend: FakeBackend) -> Harness {
        let calls = backend.calls.clone();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, Box::new(backend));
            engine.run();
        });

        Harness {
            cmd_tx,
            resp_rx,
            calls,
        }
    }

    fn apply(session: &mut CopySession, response: EngineResponse) {
        match response {
            EngineResponse::CopyGenerated(result) => session.finish_success(result),
            EngineResponse::GenerationFailed { message } => session.finish_failure(message),
        }
    }

    #[test]
    fn successful_generation_shows_result_without_banner() {
        let harness = spawn_engine(FakeBackend::replying(SUMMER_RUN_REPLY));
        let mut session = CopySession::with_form(summer_run_form());

        let form = session.begin().expect("form is ready");
        assert_eq!(session.status(), &GenerationStatus::Awaiting);
        harness.cmd_tx.send(EngineCommand::Generate(form)).unwrap();

        apply(&mut session, harness.resp_rx.recv().unwrap());

        assert_eq!(
            session.result(),
            Some(&GeneratedCopyResult {
                concise: "夏日清凉跑来啦".into(),
                playful: "🏃冲！\n一起流汗".into(),
                detailed: "【主题】夏日清凉跑\n【时间】7月1日-7月7日".into(),
                emoji_str: "🏃🔥🎉".into(),
            })
        );
        assert!(session.error().is_none());
        assert!(!session.is_awaiting());
        assert_eq!(harness.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn transport_failure_shows_banner_and_reenables_generate() {
        let harness = spawn_engine(FakeBackend::failing_with_status(StatusCode::BAD_GATEWAY));
        let mut session = CopySession::with_form(summer_run_form());

        let form = session.begin().expect("form is ready");
        assert!(!session.can_generate());
        harness.cmd_tx.send(EngineCommand::Generate(form)).unwrap();

        apply(&mut session, harness.resp_rx.recv().unwrap());

        assert!(session.result().is_none());
        assert_eq!(session.error(), Some(FAILED_MESSAGE));
        assert!(session.can_generate());
    }

    #[test]
    fn empty_theme_is_answered_without_backend_call() {
        let harness = spawn_engine(FakeBackend::replying(SUMMER_RUN_REPLY));
        harness
            .cmd_tx
            .send(EngineCommand::Generate(Default::default()))
            .unwrap();

        let response = harness.resp_rx.recv().unwrap();
        assert!(matches!(response, EngineResponse::GenerationFailed { .. }));
        assert_eq!(harness.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn engine_stops_when_commands_close() {
        let harness = spawn_engine(FakeBackend::replying(SUMMER_RUN_REPLY));
        drop(harness.cmd_tx);
        assert!(harness.resp_rx.recv().is_err());
    }
}
