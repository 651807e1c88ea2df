//! Shared model and logic for the notebook generator studio.
//!
//! Everything here is target independent: the frontend compiles it to WASM,
//! the host binary and the unit tests compile it natively.

pub mod endpoints;
pub mod error;
pub mod model;
pub mod payload;
pub mod requests;
pub mod selection;
pub mod sequence;
pub mod upload;
