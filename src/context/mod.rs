//! The graphics context owns the Vulkan handle chain:
//! instance -> debug messenger (optional) -> physical device -> logical device -> graphics queue.
//! Handles are acquired in that order and released in reverse.

pub mod api;
pub mod config;
pub mod error;
pub mod queue;
pub mod vk;

use std::ffi::CString;
use api::{DeviceRequest, GraphicsApi, InstanceRequest};
use config::ContextConfig;
use error::BootstrapError;
use queue::{AdapterInfo, Queue, QueueFamily, QueueFamilyIndices};

pub struct GraphicsContext<A: GraphicsApi> {
    api: A,
    instance: Option<A::Instance>,
    debug_messenger: Option<A::Messenger>,
    physical_device: Option<A::PhysicalDevice>,
    adapter_info: Option<AdapterInfo>,
    queue_family_indices: Option<QueueFamilyIndices>,
    device: Option<A::Device>,
    graphics_queue: Option<Queue<A::Queue>>,
}

impl<A: GraphicsApi> GraphicsContext<A> {
    const QUEUE_PRIORITIES: [f32; 1] = [1.0];

    pub fn new(api: A) -> Self {
        Self {
            api,
            instance: None,
            debug_messenger: None,
            physical_device: None,
            adapter_info: None,
            queue_family_indices: None,
            device: None,
            graphics_queue: None,
        }
    }

    /// Acquires the whole handle chain. On failure, whatever was created so far stays owned by
    /// the context and is released by [`Self::shutdown`] or on drop.
    pub fn initialize(
        &mut self,
        config: &ContextConfig,
        platform_extensions: &[CString],
    ) -> Result<(), BootstrapError> {
        if self.instance.is_some() {
            return Err(BootstrapError::AlreadyInitialized);
        }

        if config.enable_validation {
            Self::check_validation_layers_supported(&self.api, &config.validation_layers)?;
        }

        let extensions = required_instance_extensions(
            platform_extensions,
            config.enable_validation,
        );
        let layers: &[CString] = if config.enable_validation {
            &config.validation_layers
        } else {
            &[]
        };

        let instance = self.api
            .create_instance(&InstanceRequest {
                application_name: &config.application_name,
                layers,
                extensions: &extensions,
                debug_messenger: config.enable_validation,
            })
            .map_err(BootstrapError::InstanceCreationFailed)?;
        let instance = self.instance.insert(instance);
        log::debug!("Created instance with extensions {:?} and layers {:?}", extensions, layers);

        Self::log_available_extensions(&self.api);

        if config.enable_validation {
            let messenger = self.api
                .create_debug_messenger(instance)
                .map_err(BootstrapError::DebugSetupFailed)?;
            self.debug_messenger = Some(messenger);
            log::debug!("Debug messenger registered");
        }

        let (physical_device, graphics_family) =
            Self::select_physical_device(&self.api, instance)?;
        let adapter_info = self.api.adapter_info(instance, physical_device);
        log::info!("Physical device: {}", adapter_info);
        self.physical_device = Some(physical_device);
        self.adapter_info = Some(adapter_info);
        self.queue_family_indices = Some(QueueFamilyIndices {
            graphics: Some(graphics_family.index),
        });

        let device = self.api
            .create_device(
                instance,
                physical_device,
                &DeviceRequest {
                    queue_family_index: graphics_family.index,
                    queue_priorities: &Self::QUEUE_PRIORITIES,
                },
            )
            .map_err(BootstrapError::DeviceCreationFailed)?;
        let device = self.device.insert(device);

        let handle = self.api.get_device_queue(device, graphics_family.index, 0);
        self.graphics_queue = Some(Queue::new(graphics_family, handle));
        log::debug!("Graphics queue acquired from family {}", graphics_family.index);

        Ok(())
    }

    /// Releases device, debug messenger and instance, in that order.
    /// Calling it again, or on a context that never initialized, does nothing.
    pub fn shutdown(&mut self) {
        self.graphics_queue = None;

        if let Some(device) = self.device.take() {
            unsafe {
                self.api.destroy_device(device);
            }
            log::debug!("Destroyed logical device");
        }

        if let Some(messenger) = self.debug_messenger.take() {
            // A messenger only ever exists alongside its instance
            if let Some(instance) = self.instance.as_ref() {
                unsafe {
                    self.api.destroy_debug_messenger(instance, messenger);
                }
                log::debug!("Destroyed debug messenger");
            }
        }

        self.physical_device = None;
        self.adapter_info = None;
        self.queue_family_indices = None;

        if let Some(instance) = self.instance.take() {
            unsafe {
                self.api.destroy_instance(instance);
            }
            log::debug!("Destroyed instance");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.graphics_queue.is_some()
    }

    pub fn graphics_queue(&self) -> Option<&Queue<A::Queue>> {
        self.graphics_queue.as_ref()
    }

    pub fn queue_family_indices(&self) -> Option<QueueFamilyIndices> {
        self.queue_family_indices
    }

    pub fn physical_device(&self) -> Option<A::PhysicalDevice> {
        self.physical_device
    }

    pub fn adapter_info(&self) -> Option<&AdapterInfo> {
        self.adapter_info.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn check_validation_layers_supported(
        api: &A,
        requested: &[CString],
    ) -> Result<(), BootstrapError> {
        let supported_layers = api
            .enumerate_instance_layers()
            .map_err(|result| BootstrapError::EnumerationFailed {
                what: "instance layers",
                result,
            })?;

        for layer in requested {
            if !supported_layers.contains(layer) {
                return Err(BootstrapError::UnsupportedFeature {
                    layer: layer.to_string_lossy().into_owned(),
                });
            }
        }

        Ok(())
    }

    fn log_available_extensions(api: &A) {
        match api.enumerate_instance_extensions() {
            Ok(extensions) => {
                log::info!("Available Vulkan extensions:");
                for ext in extensions {
                    log::info!("\t{}", ext.to_string_lossy());
                }
            }
            Err(err) => log::warn!("Could not enumerate instance extensions: {}", err),
        }
    }

    /// First adapter in enumeration order with a graphics-capable queue family
    fn select_physical_device(
        api: &A,
        instance: &A::Instance,
    ) -> Result<(A::PhysicalDevice, QueueFamily), BootstrapError> {
        api.enumerate_physical_devices(instance)
            .map_err(|result| BootstrapError::EnumerationFailed {
                what: "physical devices",
                result,
            })?
            .into_iter()
            .find_map(|device| {
                let families = api.queue_family_properties(instance, device);
                QueueFamilyIndices::find(&families)
                    .graphics
                    .map(|index| (device, QueueFamily::new(index, families[index as usize])))
            })
            .ok_or(BootstrapError::NoSuitableDevice)
    }
}

impl<A: GraphicsApi> Drop for GraphicsContext<A> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Platform extensions plus debug utils when validation is on, without duplicates
fn required_instance_extensions(
    platform_extensions: &[CString],
    enable_validation: bool,
) -> Vec<CString> {
    let mut exts: Vec<CString> = Vec::with_capacity(platform_extensions.len() + 1);
    for ext in platform_extensions {
        if !exts.contains(ext) {
            exts.push(ext.clone());
        }
    }

    if enable_validation {
        let debug_utils = ash::ext::debug_utils::NAME.to_owned();
        if !exts.contains(&debug_utils) {
            exts.push(debug_utils);
        }
    }

    exts
}
