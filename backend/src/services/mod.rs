pub mod assets;
pub mod codegen;
