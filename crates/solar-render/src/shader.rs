//! WGSL compilation with validation surfaced as an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader '{label}' failed validation: {message}")]
    Compile { label: String, message: String },
}

/// Compile a WGSL source string into a shader module.
///
/// wgpu reports bad WGSL through its error scopes rather than a return
/// value, so the call is wrapped in a validation scope and any captured
/// error becomes a [`ShaderError::Compile`].
pub fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(error) = pollster::block_on(scope.pop()) {
        return Err(ShaderError::Compile {
            label: label.to_string(),
            message: error.to_string(),
        });
    }

    log::debug!("Compiled shader '{label}'");
    Ok(module)
}
