use eframe::egui;
use egui::{RichText, TextEdit};

use crate::model::event_form::{CopyStyle, EventFormData};
use crate::model::prize::PrizeList;
use crate::model::session::CopySession;

/// Draws the event form. Returns true when "generate" was clicked.
pub fn draw_input_panel(ctx: &egui::Context, session: &mut CopySession) -> bool {
    let mut generate = false;

    egui::SidePanel::left("event_form")
        .resizable(true)
        .default_width(430.0)
        .min_width(340.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("⚡ 九元飞跑团 · 活动设置");
            ui.label(RichText::new("输入线上跑活动详情，AI 将生成社群运营文案。").weak());
            ui.separator();

            egui::TopBottomPanel::bottom("generate_bar")
                .show_separator_line(true)
                .show_inside(ui, |ui| {
                    ui.add_space(8.0);
                    generate = draw_generate_button(ui, session);
                    ui.add_space(8.0);
                });

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| draw_form(ui, &mut session.form));
        });

    generate
}

/* =========================
   Form
   ========================= */

fn draw_form(ui: &mut egui::Ui, form: &mut EventFormData) {
    field_label(ui, "# 活动主题");
    single_line(ui, &mut form.theme, "例如：夏日清凉跑、国庆7天乐跑...");

    field_label(ui, "📅 活动时间");
    single_line(ui, &mut form.duration, "例如：10月1日 - 10月7日，不限时间段");

    field_label(ui, "🎁 奖项设置");
    draw_prizes(ui, &mut form.prizes);

    field_label(ui, "📄 活动规则");
    multi_line(ui, &mut form.rules, "例如：使用指定APP记录，单次跑步里程>3km...");

    field_label(ui, "👥 参与方式");
    multi_line(ui, &mut form.participation, "例如：活动结束后将跑步截图发到群相册...");

    field_label(ui, "⚠ 其他要求");
    multi_line(ui, &mut form.other_requirements, "例如：必须穿戴团服，注意安全...");

    ui.columns(2, |cols| {
        field_label(&mut cols[0], "💬 文案风格");
        egui::ComboBox::from_id_salt("copy_style")
            .selected_text(form.style.label())
            .width(cols[0].available_width())
            .show_ui(&mut cols[0], |ui| {
                for style in CopyStyle::ALL {
                    ui.selectable_value(&mut form.style, style, style.label());
                }
            });

        field_label(&mut cols[1], "📣 发布平台");
        single_line(&mut cols[1], &mut form.platform, "微信群, 朋友圈...");
    });

    ui.add_space(8.0);
}

fn draw_prizes(ui: &mut egui::Ui, prizes: &mut PrizeList) {
    let mut to_remove: Option<usize> = None;

    for (i, prize) in prizes.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 40.0).max(160.0);
            ui.add(
                TextEdit::singleline(&mut prize.name)
                    .hint_text("奖项 (如: 一等奖)")
                    .desired_width(width * 0.4),
            );
            ui.add(
                TextEdit::singleline(&mut prize.content)
                    .hint_text("奖品内容 (如: 跑鞋一双)")
                    .desired_width(width * 0.6),
            );
            if ui.small_button("🗑").on_hover_text("删除奖项").clicked() {
                to_remove = Some(i);
            }
        });
    }

    if let Some(i) = to_remove {
        prizes.remove(i);
    }

    if ui.button("➕ 添加更多奖项").clicked() {
        prizes.push_blank();
    }
}

fn draw_generate_button(ui: &mut egui::Ui, session: &CopySession) -> bool {
    let awaiting = session.is_awaiting();
    let label = if awaiting {
        "⏳ 生成活动文案"
    } else {
        "⚡ 生成文案"
    };

    let button = egui::Button::new(RichText::new(label).strong().size(16.0))
        .min_size(egui::vec2(ui.available_width(), 40.0));
    let clicked = ui.add_enabled(session.can_generate(), button).clicked();

    if awaiting {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("AI 正在创作文案…").weak());
        });
    } else if !session.form.is_ready() {
        ui.label(RichText::new("填写活动主题后即可生成").weak());
    }

    clicked
}

/* =========================
   UI Helpers
   ========================= */

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).strong());
}

fn single_line(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}

fn multi_line(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );
}
