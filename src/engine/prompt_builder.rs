use serde_json::{json, Value};

use crate::model::event_form::EventFormData;
use crate::model::prize::PrizeList;

const COMMUNITY_NAME: &str = "\"九元飞跑团\" (Nine Yuan Flying Running Group)";

/// Field names the backend must return, in display order.
pub const RESPONSE_FIELDS: [&str; 4] = ["concise", "playful", "detailed", "emojiStr"];

/// Prompt text plus the structured-output schema it is sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPrompt {
    pub text: String,
    pub schema: Value,
}

/// Builds the prompt sent to the LLM.
/// Only formats text: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(form: &EventFormData) -> CopyPrompt {
        let mut prompt = String::new();

        push_role(&mut prompt);
        push_event_details(&mut prompt, form);
        push_requirements(&mut prompt);

        CopyPrompt {
            text: prompt,
            schema: response_schema(),
        }
    }
}

/// One `- name: content` line per non-blank prize, newline-joined.
pub fn render_prizes(prizes: &PrizeList) -> String {
    prizes
        .filled()
        .map(|p| format!("- {}: {}", p.name, p.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "concise": {
                "type": "STRING",
                "description": "A short version of the copy, max 50 words."
            },
            "playful": {
                "type": "STRING",
                "description": "A fun, emoji-rich version of the copy."
            },
            "detailed": {
                "type": "STRING",
                "description": "A comprehensive version with bullet points and clear structure."
            },
            "emojiStr": {
                "type": "STRING",
                "description": "A string of 5-10 emojis relevant to the event."
            }
        },
        "required": RESPONSE_FIELDS,
        "propertyOrdering": RESPONSE_FIELDS
    })
}

fn push_role(prompt: &mut String) {
    prompt.push_str(&format!(
        "Role: You are an expert Community Operations Manager for {COMMUNITY_NAME}, an online running community.\n"
    ));
    prompt.push_str(
        "Task: Create promotional copy for an online running event based on the details below.\n\n",
    );
}

fn push_event_details(prompt: &mut String, form: &EventFormData) {
    prompt.push_str("Event Details:\n");
    prompt.push_str(&format!("- Theme/Topic: {}\n", form.theme));
    prompt.push_str(&format!("- Duration/Time: {}\n", form.duration));

    prompt.push_str("- Prizes & Awards:\n");
    let prizes = render_prizes(&form.prizes);
    if !prizes.is_empty() {
        prompt.push_str(&prizes);
        prompt.push('\n');
    }

    prompt.push_str(&format!("- Activity Rules: {}\n", form.rules));
    prompt.push_str(&format!("- How to Participate: {}\n", form.participation));
    prompt.push_str(&format!("- Other Requirements: {}\n", form.other_requirements));
    prompt.push_str(&format!("- Preferred Tone: {}\n", form.style.label()));
    prompt.push_str(&format!("- Platform: {}\n\n", form.platform));
}

fn push_requirements(prompt: &mut String) {
    prompt.push_str(
        r#"Requirements:
1. Generate THREE distinct versions:
   - concise: Short, punchy, perfect for a quick notification or tweet.
   - playful: Fun, engaging, heavily uses emojis and slang where appropriate, high energy suitable for runners.
   - detailed: A structured announcement with clear sections (Theme, Time, How to Join, Prizes, Rules), suitable for a pinned post or newsletter.
2. Also generate emojiStr: a string of 5-10 emojis relevant to this event topic.
3. Ensure the copy is formatted nicely with line breaks.
4. Language: Simplified Chinese.
5. Respond only with a JSON object containing the fields concise, playful, detailed and emojiStr. No prose outside the JSON.
"#,
    );
}
