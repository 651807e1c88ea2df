pub mod code_panel;
pub mod generator;
