pub mod engine;
pub mod protocol;

pub mod gemini_types;
pub mod generator;
pub mod llm_client;
pub mod prompt_builder;
