use eframe::egui;
use egui::{Align, Color32, Layout, RichText};
use std::time::{Duration, Instant};

use crate::model::copy_result::{CopySection, GeneratedCopyResult};
use crate::model::session::CopySession;

const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Remembers which section was copied last, for the check mark.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    last: Option<(CopySection, Instant)>,
}

impl CopyFeedback {
    pub fn mark(&mut self, section: CopySection) {
        self.mark_at(section, Instant::now());
    }

    pub fn is_showing(&self, section: CopySection) -> bool {
        self.is_showing_at(section, Instant::now())
    }

    pub fn is_active(&self) -> bool {
        self.last
            .is_some_and(|(_, at)| at.elapsed() < FEEDBACK_DURATION)
    }

    fn mark_at(&mut self, section: CopySection, at: Instant) {
        self.last = Some((section, at));
    }

    fn is_showing_at(&self, section: CopySection, now: Instant) -> bool {
        matches!(
            self.last,
            Some((copied, at)) if copied == section && now.saturating_duration_since(at) < FEEDBACK_DURATION
        )
    }
}

pub fn draw_result_panel(ctx: &egui::Context, session: &CopySession, feedback: &mut CopyFeedback) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(message) = session.error() {
            error_banner(ui, message);
            ui.add_space(10.0);
        }

        if !session.has_generated() {
            placeholder(ui);
            return;
        }

        let Some(result) = session.result() else {
            return;
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for section in CopySection::VARIANTS {
                    copy_card(ui, section, result, feedback);
                    ui.add_space(12.0);
                }
                emoji_strip(ui, result, feedback);
            });
    });
}

fn accent(section: CopySection) -> Color32 {
    match section {
        CopySection::Concise => Color32::from_rgb(6, 95, 70),
        CopySection::Playful => Color32::from_rgb(91, 33, 182),
        CopySection::Detailed => Color32::from_rgb(30, 64, 175),
        CopySection::Emojis => Color32::from_rgb(100, 116, 139),
    }
}

fn card_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(226, 232, 240)))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(14))
}

fn copy_card(
    ui: &mut egui::Ui,
    section: CopySection,
    result: &GeneratedCopyResult,
    feedback: &mut CopyFeedback,
) {
    let text = section.text(result);

    card_frame(Color32::WHITE).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(section.title()).strong().color(accent(section)));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                copy_button(ui, section, text, feedback, "复制文案");
            });
        });
        ui.separator();
        ui.label(RichText::new(text).size(14.0));
    });
}

fn emoji_strip(ui: &mut egui::Ui, result: &GeneratedCopyResult, feedback: &mut CopyFeedback) {
    let section = CopySection::Emojis;

    card_frame(Color32::from_rgb(248, 250, 252)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(section.title()).small().strong().color(accent(section)));
                ui.label(RichText::new(&result.emoji_str).size(22.0));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                copy_button(ui, section, &result.emoji_str, feedback, "复制 Emojis");
            });
        });
    });
}

fn copy_button(
    ui: &mut egui::Ui,
    section: CopySection,
    text: &str,
    feedback: &mut CopyFeedback,
    hover: &str,
) {
    let label = if feedback.is_showing(section) {
        "✔ 已复制"
    } else {
        "📋 复制"
    };

    if ui.small_button(label).on_hover_text(hover).clicked() {
        ui.ctx().copy_text(text.to_owned());
        feedback.mark(section);
        tracing::debug!(?section, "copied to clipboard");
    }
}

fn error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::new()
        .fill(Color32::from_rgb(254, 242, 242))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(254, 202, 202)))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("💬 {message}")).color(Color32::from_rgb(185, 28, 28)));
        });
}

fn placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("✨").size(48.0).weak());
        ui.label(RichText::new("等待生成").size(18.0).strong());
        ui.label(
            RichText::new("在左侧填写活动信息并点击生成，AI 将为您创作多个版本的精彩文案。").weak(),
        );
    });
}
