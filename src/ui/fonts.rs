use eframe::egui;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CJK_FONT_NAME: &str = "cjk_fallback";

// Common locations of a Chinese-capable font per platform.
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
];

/// Adds a CJK font behind egui's defaults so Chinese labels render.
/// A configured path is tried before the platform candidates.
pub fn install_cjk_font(ctx: &egui::Context, configured: Option<&Path>) {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CJK_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            CJK_FONT_NAME.to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(CJK_FONT_NAME.to_owned());
        }

        ctx.set_fonts(fonts);
        tracing::info!(path = %path.display(), "installed CJK font");
        return;
    }

    tracing::warn!("no CJK font found, Chinese text may not render; set font_path in config.json");
}
