//! Render loop driven by the host's per-frame callback.

mod renderer;
mod types;

pub use renderer::*;
pub use types::LoopState;

#[cfg(test)]
mod tests;
