//! Elevation band colors and thresholds.

use serde::{Deserialize, Serialize};

use super::ColorToken;

/// Four elevation bands separated by three ascending thresholds.
///
/// Elevation `e` maps to `colors[0]` below `thresholds[0]`, `colors[1]` below
/// `thresholds[1]`, `colors[2]` below `thresholds[2]`, and `colors[3]` above.
/// The arity is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(deserialize = "C: Deserialize<'de>, PaletteConfig<C>: Default")
)]
pub struct PaletteConfig<C> {
    pub colors: [C; 4],
    pub thresholds: [f32; 3],
}

impl Default for PaletteConfig<ColorToken> {
    fn default() -> Self {
        Self {
            colors: [
                "terrain.abyss".into(),
                "terrain.lowland".into(),
                "terrain.highland".into(),
                "terrain.peak".into(),
            ],
            thresholds: [0.35, 0.5, 0.68],
        }
    }
}

impl<C> PaletteConfig<C> {
    pub fn try_map_colors<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<PaletteConfig<D>, E> {
        let [c0, c1, c2, c3] = &self.colors;
        Ok(PaletteConfig {
            colors: [f(c0)?, f(c1)?, f(c2)?, f(c3)?],
            thresholds: self.thresholds,
        })
    }
}
