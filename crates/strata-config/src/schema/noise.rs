//! Elevation noise configuration.

use serde::{Deserialize, Serialize};

/// Multi-octave noise parameters for the elevation field.
///
/// `seed` is carried through to the GPU but does not currently influence the
/// hash domain: two configs differing only in seed render the same terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub octaves: f32,
    pub frequency: f32,
    pub persistence: f32,
    pub seed: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 5.0,
            frequency: 1.2,
            persistence: 0.5,
            seed: 0.0,
        }
    }
}
