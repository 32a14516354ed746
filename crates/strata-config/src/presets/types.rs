//! Preset override and selection types.
//!
//! Contains the override struct used to partially replace config sections
//! when a preset is customized, plus the list of built-in preset names.

use serde::{Deserialize, Serialize};
use strata_common::Rgb;

use crate::schema::{
    CameraConfig, ColorToken, ContourConfig, ElevationConfig, FallbackConfig, GeometryConfig,
    GrainConfig, MaskConfig, NoiseConfig, PaletteConfig, RotationConfig, ShadingConfig,
    TerrainConfig,
};

/// Built-in preset names.
pub const BUILT_IN_PRESETS: &[&str] = &["default", "landing"];

/// Preset applied when a selection names none.
pub const DEFAULT_PRESET: &str = "default";

/// Section-level overrides.
///
/// All fields are optional; a present section replaces the whole section of
/// the base config (shallow merge at the top level). Fields missing from a
/// present section take their schema defaults, not the base config's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(deserialize = "C: Deserialize<'de>, PaletteConfig<C>: Default, \
        ContourConfig<C>: Default, GrainConfig<C>: Default, FallbackConfig<C>: Default")
)]
pub struct TerrainOverrides<C> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteConfig<C>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contour: Option<ContourConfig<C>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grain: Option<GrainConfig<C>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading: Option<ShadingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<ElevationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackConfig<C>>,
}

impl<C> Default for TerrainOverrides<C> {
    fn default() -> Self {
        Self {
            geometry: None,
            noise: None,
            palette: None,
            contour: None,
            grain: None,
            rotation: None,
            mask: None,
            shading: None,
            elevation: None,
            camera: None,
            fallback: None,
        }
    }
}

impl<C> TerrainOverrides<C> {
    /// True when no section is overridden.
    pub fn is_empty(&self) -> bool {
        self.geometry.is_none()
            && self.noise.is_none()
            && self.palette.is_none()
            && self.contour.is_none()
            && self.grain.is_none()
            && self.rotation.is_none()
            && self.mask.is_none()
            && self.shading.is_none()
            && self.elevation.is_none()
            && self.camera.is_none()
            && self.fallback.is_none()
    }

    /// Convert every color field of the present sections.
    pub fn try_map_colors<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<TerrainOverrides<D>, E> {
        Ok(TerrainOverrides {
            geometry: self.geometry.clone(),
            noise: self.noise.clone(),
            palette: self
                .palette
                .as_ref()
                .map(|p| p.try_map_colors(&mut f))
                .transpose()?,
            contour: self
                .contour
                .as_ref()
                .map(|c| c.try_map_colors(&mut f))
                .transpose()?,
            grain: self
                .grain
                .as_ref()
                .map(|g| g.try_map_colors(&mut f))
                .transpose()?,
            rotation: self.rotation.clone(),
            mask: self.mask.clone(),
            shading: self.shading.clone(),
            elevation: self.elevation.clone(),
            camera: self.camera.clone(),
            fallback: self
                .fallback
                .as_ref()
                .map(|fb| fb.try_map_colors(&mut f))
                .transpose()?,
        })
    }
}

impl<C> From<TerrainConfig<C>> for TerrainOverrides<C> {
    /// Overrides that replace every section.
    fn from(config: TerrainConfig<C>) -> Self {
        Self {
            geometry: Some(config.geometry),
            noise: Some(config.noise),
            palette: Some(config.palette),
            contour: Some(config.contour),
            grain: Some(config.grain),
            rotation: Some(config.rotation),
            mask: Some(config.mask),
            shading: Some(config.shading),
            elevation: Some(config.elevation),
            camera: Some(config.camera),
            fallback: Some(config.fallback),
        }
    }
}

/// Token-form overrides, as written in presets and config files.
pub type SpecOverrides = TerrainOverrides<ColorToken>;

/// Resolved-form overrides.
pub type ResolvedOverrides = TerrainOverrides<Rgb>;

/// How a renderer's configuration is chosen at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererSelection {
    /// A preset by name.
    Preset(String),
    /// A preset plus section overrides.
    PresetWithOverrides {
        preset: String,
        overrides: SpecOverrides,
    },
    /// Overrides applied over the `default` preset.
    Overrides(SpecOverrides),
}

impl RendererSelection {
    pub fn preset_name(&self) -> &str {
        match self {
            Self::Preset(name) | Self::PresetWithOverrides { preset: name, .. } => name,
            Self::Overrides(_) => DEFAULT_PRESET,
        }
    }

    pub fn overrides(&self) -> Option<&SpecOverrides> {
        match self {
            Self::Preset(_) => None,
            Self::PresetWithOverrides { overrides, .. } | Self::Overrides(overrides) => {
                Some(overrides)
            }
        }
    }

    /// The same overrides on top of a different preset.
    pub fn with_preset(self, preset: impl Into<String>) -> Self {
        let preset = preset.into();
        match self {
            Self::Preset(_) => Self::Preset(preset),
            Self::PresetWithOverrides { overrides, .. } | Self::Overrides(overrides) => {
                Self::PresetWithOverrides { preset, overrides }
            }
        }
    }
}

impl Default for RendererSelection {
    fn default() -> Self {
        Self::Preset(DEFAULT_PRESET.into())
    }
}

impl From<&str> for RendererSelection {
    fn from(name: &str) -> Self {
        Self::Preset(name.to_string())
    }
}

impl From<String> for RendererSelection {
    fn from(name: String) -> Self {
        Self::Preset(name)
    }
}

impl From<SpecOverrides> for RendererSelection {
    fn from(overrides: SpecOverrides) -> Self {
        Self::Overrides(overrides)
    }
}

/// On-disk selection: an optional preset name plus top-level section tables.
///
/// ```toml
/// preset = "landing"
///
/// [contour]
/// width = 0.01
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionFile {
    pub preset: Option<String>,
    #[serde(flatten)]
    pub overrides: SpecOverrides,
}

impl From<SelectionFile> for RendererSelection {
    fn from(file: SelectionFile) -> Self {
        match (file.preset, file.overrides.is_empty()) {
            (Some(preset), true) => Self::Preset(preset),
            (Some(preset), false) => Self::PresetWithOverrides {
                preset,
                overrides: file.overrides,
            },
            (None, _) => Self::Overrides(file.overrides),
        }
    }
}
