use std::ffi::CString;
use crate::context::error::BootstrapError;

/// Contains configuration options for the graphics context, like whether validation is enabled
/// and which layers it needs.
///
/// Validation messages are logged under the `vkboot::validation` target, verbose ones at trace
/// level. The binary enables that target down to trace by default; `RUST_LOG` overrides it.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub application_name: CString,
    pub enable_validation: bool,
    pub validation_layers: Vec<CString>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            application_name: c"Hello Triangle".to_owned(),
            enable_validation: cfg!(debug_assertions),
            validation_layers: vec![c"VK_LAYER_KHRONOS_validation".to_owned()],
        }
    }
}

impl ContextConfig {
    pub const VALIDATION_ENV: &'static str = "VKBOOT_VALIDATION";
    pub const VALIDATION_LAYERS_ENV: &'static str = "VKBOOT_VALIDATION_LAYERS";

    /// Defaults, overridden by `VKBOOT_VALIDATION` and `VKBOOT_VALIDATION_LAYERS` when set
    pub fn from_env() -> Result<Self, BootstrapError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BootstrapError> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::VALIDATION_ENV) {
            config.enable_validation = parse_flag(&value).ok_or_else(|| {
                BootstrapError::InvalidConfig(format!(
                    "{} must be one of 1/0, true/false, on/off, got {:?}",
                    Self::VALIDATION_ENV,
                    value,
                ))
            })?;
        }

        if let Some(value) = lookup(Self::VALIDATION_LAYERS_ENV) {
            config.validation_layers = value
                .split(',')
                .map(str::trim)
                .filter(|layer| !layer.is_empty())
                .map(|layer| {
                    CString::new(layer).map_err(|err| {
                        BootstrapError::InvalidConfig(format!(
                            "{}: {}",
                            Self::VALIDATION_LAYERS_ENV,
                            err,
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}
