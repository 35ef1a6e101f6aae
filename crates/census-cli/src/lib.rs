//! CLI library components for the `census` binary.

pub mod logging;
pub mod render;
pub mod request;
