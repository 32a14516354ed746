//! Non-interactive subcommands: `check`, `probe` and `sample`.

use std::sync::Arc;

use serde::Serialize;
use strata_common::{ConfigError, StrataError, Vec3};
use strata_config::{
    config_to_json, resolve, toml_loader, PaletteResolver, RendererConfig, RendererSelection,
    SharedResolver,
};
use strata_renderer::sphere::matrix::IDENTITY;
use strata_renderer::{shade_surface, SurfaceSample};

use crate::cli::Args;

/// The design-system color table shared by every command.
pub fn resolver() -> SharedResolver {
    Arc::new(PaletteResolver::design_system())
}

/// Replace the selection's preset with the `--preset` flag, if given.
pub fn apply_preset_flag(selection: RendererSelection, preset: Option<&str>) -> RendererSelection {
    match preset {
        Some(name) => selection.with_preset(name),
        None => selection,
    }
}

/// Selection named by `--config` and `--preset`.
///
/// Without `--config`, a bare `--preset` stands alone; otherwise the platform
/// default file is read (and created if missing).
pub fn load_selection(args: &Args) -> Result<RendererSelection, ConfigError> {
    let selection = match (&args.config, &args.preset) {
        (Some(path), _) => toml_loader::load_from_path(path)?,
        (None, Some(_)) => RendererSelection::default(),
        (None, None) => toml_loader::load_default()?,
    };
    Ok(apply_preset_flag(selection, args.preset.as_deref()))
}

fn load_config(args: &Args) -> Result<RendererConfig, ConfigError> {
    let selection = load_selection(args)?;
    resolve(&selection, &*resolver())
}

pub fn check(args: &Args) -> Result<(), StrataError> {
    let config = load_config(args)?;
    println!("{}", config_to_json(&config));
    Ok(())
}

pub fn probe() -> Result<(), StrataError> {
    let supported = strata_renderer::is_supported();
    tracing::info!(supported, "GPU probe finished");
    println!("{supported}");
    Ok(())
}

/// Terrain evaluated at one point, as printed by `strata sample`.
#[derive(Debug, Serialize)]
pub struct SampleReport {
    /// Unit-sphere direction that was sampled.
    pub point: Vec3,
    pub time: f64,
    #[serde(flatten)]
    pub surface: SurfaceSample,
}

/// Evaluate the CPU shading mirror at the sphere point in direction `point`.
///
/// The sphere is unrotated and the point is projected onto its surface.
pub fn sample_point(
    config: &RendererConfig,
    point: Vec3,
    time: f64,
) -> Result<SampleReport, StrataError> {
    let [x, y, z] = point;
    let len = (x * x + y * y + z * z).sqrt();
    if !len.is_finite() || len <= f32::EPSILON {
        return Err(StrataError::Other(
            "sample point must be a finite, non-zero vector".into(),
        ));
    }

    let normal = [x / len, y / len, z / len];
    let radius = config.geometry.radius;
    let world = normal.map(|c| c * radius);
    let surface = shade_surface(config, world, normal, &IDENTITY, time);

    Ok(SampleReport {
        point: normal,
        time,
        surface,
    })
}

pub fn sample(args: &Args, point: Vec3, time: f64) -> Result<(), StrataError> {
    let config = load_config(args)?;
    let report = sample_point(&config, point, time)?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| StrataError::Other(format!("failed to serialize sample: {e}")))?;
    println!("{json}");
    Ok(())
}
