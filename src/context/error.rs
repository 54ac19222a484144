use ash::vk;
use thiserror::Error;

/// Every way bootstrapping the graphics context can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Vulkan loader unavailable: {0}")]
    LoaderUnavailable(String),

    #[error("Validation layer {layer:?} requested, but not available")]
    UnsupportedFeature { layer: String },

    #[error("Failed to create Vulkan instance: {0}")]
    InstanceCreationFailed(vk::Result),

    #[error("Failed to set up debug messenger: {0}")]
    DebugSetupFailed(vk::Result),

    #[error("Failed to find a GPU with a graphics-capable queue family")]
    NoSuitableDevice,

    #[error("Failed to create logical device: {0}")]
    DeviceCreationFailed(vk::Result),

    #[error("Failed to enumerate {what}: {result}")]
    EnumerationFailed {
        what: &'static str,
        result: vk::Result,
    },

    #[error("Graphics context is already initialized")]
    AlreadyInitialized,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
