mod context;
mod shader;
mod types;
mod uniforms;

pub use context::*;
pub use shader::*;
pub use types::*;
pub use uniforms::*;
