//! Color token resolution.
//!
//! The renderer never sees symbolic colors: every token in a
//! [`TerrainSpec`](crate::schema::TerrainSpec) is passed through a
//! [`ColorResolver`] exactly once, when a preset is resolved or an update is
//! applied. Literal `#RGB`, `#RRGGBB` and `rgb(r,g,b)` values are accepted
//! anywhere a token is.

mod parse;


use std::collections::HashMap;

use strata_common::{ConfigError, Rgb};
use tracing::debug;

use parse::{parse_literal, TOKEN_RE};

/// Resolves a symbolic color reference to a concrete color.
///
/// Implemented by the host application's design system.
pub trait ColorResolver {
    fn resolve_color(&self, token: &str) -> Result<Rgb, ConfigError>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Result<Rgb, ConfigError>,
{
    fn resolve_color(&self, token: &str) -> Result<Rgb, ConfigError> {
        self(token)
    }
}

/// Design-token palette with literal passthrough.
#[derive(Debug, Clone, Default)]
pub struct PaletteResolver {
    tokens: HashMap<String, Rgb>,
}

impl PaletteResolver {
    /// An empty palette: only literal colors resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in design-system palette used by the bundled presets.
    pub fn design_system() -> Self {
        let entries: &[(&str, &str)] = &[
            ("terrain.abyss", "#0b1f33"),
            ("terrain.lowland", "#1f4e5a"),
            ("terrain.highland", "#8c9a6b"),
            ("terrain.peak", "#e8e2cf"),
            ("terrain.contour", "#f4efe1"),
            ("terrain.grain", "#ffffff"),
            ("accent.ink", "#101820"),
            ("accent.dusk", "#2b3a55"),
            ("accent.sand", "#d9c7a3"),
            ("accent.ember", "#e07a4f"),
            ("surface.base", "#0d1117"),
            ("surface.raised", "#1b2633"),
        ];

        let mut palette = Self::new();
        for (token, hex) in entries {
            if let Some(color) = Rgb::from_hex(hex) {
                palette.tokens.insert((*token).to_string(), color);
            }
        }
        palette
    }

    /// Register or replace a token.
    pub fn with_token(mut self, token: impl Into<String>, color: Rgb) -> Self {
        self.tokens.insert(token.into(), color);
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl ColorResolver for PaletteResolver {
    fn resolve_color(&self, token: &str) -> Result<Rgb, ConfigError> {
        let token = token.trim();

        if let Some(color) = parse_literal(token) {
            return Ok(color);
        }
        if token.starts_with('#') || token.starts_with("rgb(") {
            return Err(ConfigError::UnresolvedColor {
                token: token.to_string(),
                reason: "malformed color literal".into(),
            });
        }
        if !TOKEN_RE.is_match(token) {
            return Err(ConfigError::UnresolvedColor {
                token: token.to_string(),
                reason: "not a color literal or design token".into(),
            });
        }

        match self.tokens.get(token) {
            Some(color) => {
                debug!(token, hex = %color.to_hex(), "resolved color token");
                Ok(*color)
            }
            None => Err(ConfigError::UnresolvedColor {
                token: token.to_string(),
                reason: "no such token in palette".into(),
            }),
        }
    }
}
