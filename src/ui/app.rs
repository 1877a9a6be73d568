use eframe::egui;
use egui::{Align, Layout, RichText};
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::engine::Engine;
use crate::engine::generator::FAILED_MESSAGE;
use crate::engine::llm_client::CopyBackend;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::session::CopySession;

use super::input_panel::draw_input_panel;
use super::result_panel::{draw_result_panel, CopyFeedback};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/* =========================
   App
   ========================= */

pub struct CopywizApp {
    session: CopySession,
    feedback: CopyFeedback,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl CopywizApp {
    pub fn new(backend: Box<dyn CopyBackend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, backend);
            engine.run();
        });

        Self {
            session: CopySession::default(),
            feedback: CopyFeedback::default(),
            cmd_tx,
            resp_rx,
        }
    }

    fn handle_response(&mut self, resp: EngineResponse) {
        match resp {
            EngineResponse::CopyGenerated(result) => self.session.finish_success(result),
            EngineResponse::GenerationFailed { message } => self.session.finish_failure(message),
        }
    }

    fn request_generation(&mut self) {
        let Some(form) = self.session.begin() else {
            return;
        };

        tracing::debug!(theme = %form.theme, style = %form.style, "generation requested");

        if self.cmd_tx.send(EngineCommand::Generate(form)).is_err() {
            tracing::error!("engine thread is gone, cannot generate");
            self.session.finish_failure(FAILED_MESSAGE);
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for CopywizApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            self.handle_response(resp);
        }

        draw_header(ctx);

        let generate_clicked = draw_input_panel(ctx, &mut self.session);
        draw_result_panel(ctx, &self.session, &mut self.feedback);

        if generate_clicked {
            self.request_generation();
        }

        // Nothing wakes egui when the engine answers, so keep polling.
        if self.session.is_awaiting() || self.feedback.is_active() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

fn draw_header(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("✨ Community Copywiz").strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new("九元飞跑团 · 社群运营助手").weak());
            });
        });
        ui.add_space(6.0);
    });
}
