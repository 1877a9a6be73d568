use serde::{Deserialize, Serialize};

/// The four pieces of copy returned by one successful generation.
/// Every field is required on the wire; there is no partial form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopyResult {
    pub concise: String,
    pub playful: String,
    pub detailed: String,
    #[serde(rename = "emojiStr")]
    pub emoji_str: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopySection {
    Concise,
    Playful,
    Detailed,
    Emojis,
}

impl CopySection {
    /// The three prose panels, in display order.
    pub const VARIANTS: [CopySection; 3] = [
        CopySection::Concise,
        CopySection::Playful,
        CopySection::Detailed,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CopySection::Concise => "简洁版 (Concise)",
            CopySection::Playful => "好玩版 (Playful)",
            CopySection::Detailed => "详细公告版 (Detailed)",
            CopySection::Emojis => "推荐 Emojis",
        }
    }

    pub fn text(self, result: &GeneratedCopyResult) -> &str {
        match self {
            CopySection::Concise => &result.concise,
            CopySection::Playful => &result.playful,
            CopySection::Detailed => &result.detailed,
            CopySection::Emojis => &result.emoji_str,
        }
    }
}
