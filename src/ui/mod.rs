pub mod app;
pub mod fonts;
pub mod input_panel;
pub mod result_panel;
