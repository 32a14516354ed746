//! Shader module creation with up-front validation.
//!
//! WGSL is parsed and validated with naga before it reaches the device, so a
//! broken shader surfaces as a [`RendererError::ShaderError`] instead of a
//! device-lost panic. Pipeline creation is wrapped in a validation error
//! scope for the same reason.

use super::types::RendererError;

/// Parse and validate WGSL source without a device.
pub fn validate_wgsl(label: &str, source: &str) -> Result<(), RendererError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| {
        RendererError::ShaderError(format!("{label}: {}", e.emit_to_string(source)))
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    validator
        .validate(&module)
        .map_err(|e| RendererError::ShaderError(format!("{label}: {e}")))?;

    tracing::debug!(
        shader = label,
        entry_points = module.entry_points.len(),
        "shader validated"
    );
    Ok(())
}

/// Validate `source` and create a shader module from it.
pub fn create_shader_module(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, RendererError> {
    validate_wgsl(label, source)?;
    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    }))
}

/// Run `build` inside a validation error scope, turning any captured wgpu
/// validation error into a [`RendererError::ShaderError`].
pub fn with_validation_scope<T>(
    device: &wgpu::Device,
    label: &str,
    build: impl FnOnce() -> Result<T, RendererError>,
) -> Result<T, RendererError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let result = build();
    let scope_error = pollster::block_on(device.pop_error_scope());
    let value = result?;
    match scope_error {
        Some(e) => Err(RendererError::ShaderError(format!("{label}: {e}"))),
        None => Ok(value),
    }
}
