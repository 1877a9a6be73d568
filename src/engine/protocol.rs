use crate::model::copy_result::GeneratedCopyResult;
use crate::model::event_form::EventFormData;

pub enum EngineCommand {
    Generate(EventFormData),
}

#[derive(Debug)]
pub enum EngineResponse {
    CopyGenerated(GeneratedCopyResult),

    GenerationFailed {
        message: String,
    },
}
