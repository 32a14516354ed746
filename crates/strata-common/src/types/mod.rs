mod color;

pub use color::*;

/// Three-component vector (`x, y, z`), e.g. a light direction.
pub type Vec3 = [f32; 3];
