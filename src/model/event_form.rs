use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::prize::PrizeList;

/// Tone hint passed through to the prompt. The backend treats it as advice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyStyle {
    #[default]
    CasualFriendly,
    HypeExcited,
    ProfessionalClean,
    FunnyWitty,
    UrgentFomo,
}

impl CopyStyle {
    pub const ALL: [CopyStyle; 5] = [
        CopyStyle::CasualFriendly,
        CopyStyle::HypeExcited,
        CopyStyle::ProfessionalClean,
        CopyStyle::FunnyWitty,
        CopyStyle::UrgentFomo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CopyStyle::CasualFriendly => "Casual & Friendly",
            CopyStyle::HypeExcited => "Hype & Excited",
            CopyStyle::ProfessionalClean => "Professional & Clean",
            CopyStyle::FunnyWitty => "Funny & Witty",
            CopyStyle::UrgentFomo => "Urgent & FOMO",
        }
    }
}

impl fmt::Display for CopyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFormData {
    pub theme: String,
    pub duration: String,
    pub prizes: PrizeList,
    pub rules: String,
    pub participation: String,
    pub other_requirements: String,
    pub style: CopyStyle,
    pub platform: String,
}

impl EventFormData {
    /// Generation needs a theme; everything else may stay empty.
    pub fn is_ready(&self) -> bool {
        !self.theme.is_empty()
    }
}
