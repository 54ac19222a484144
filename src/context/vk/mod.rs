//! [`GraphicsApi`] on top of `ash` and the system Vulkan loader.

mod debug;
mod device;
mod instance;

use std::ffi::CString;
use ash::prelude::VkResult;
use ash::vk;
use crate::context::api::{DeviceRequest, GraphicsApi, InstanceRequest};
use crate::context::error::BootstrapError;
use crate::context::queue::AdapterInfo;

pub use debug::{DebugMessenger, VALIDATION_LOG_TARGET};

pub struct AshApi {
    entry: ash::Entry,
}

impl AshApi {
    pub fn load() -> Result<Self, BootstrapError> {
        let entry = unsafe { ash::Entry::load() }
            .map_err(|err| BootstrapError::LoaderUnavailable(err.to_string()))?;
        Ok(Self { entry })
    }
}

impl GraphicsApi for AshApi {
    type Instance = ash::Instance;
    type Messenger = DebugMessenger;
    type PhysicalDevice = vk::PhysicalDevice;
    type Device = ash::Device;
    type Queue = vk::Queue;

    fn enumerate_instance_layers(&self) -> VkResult<Vec<CString>> {
        instance::enumerate_layers(&self.entry)
    }

    fn enumerate_instance_extensions(&self) -> VkResult<Vec<CString>> {
        instance::enumerate_extensions(&self.entry)
    }

    fn create_instance(
        &mut self,
        request: &InstanceRequest,
    ) -> VkResult<ash::Instance> {
        instance::create_instance(&self.entry, request)
    }

    fn create_debug_messenger(
        &mut self,
        instance: &ash::Instance,
    ) -> VkResult<DebugMessenger> {
        DebugMessenger::new(&self.entry, instance)
    }

    fn enumerate_physical_devices(
        &self,
        instance: &ash::Instance,
    ) -> VkResult<Vec<vk::PhysicalDevice>> {
        unsafe { instance.enumerate_physical_devices() }
    }

    fn queue_family_properties(
        &self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> Vec<vk::QueueFamilyProperties> {
        unsafe { instance.get_physical_device_queue_family_properties(physical_device) }
    }

    fn adapter_info(
        &self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> AdapterInfo {
        device::adapter_info(instance, physical_device)
    }

    fn create_device(
        &mut self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
        request: &DeviceRequest,
    ) -> VkResult<ash::Device> {
        device::create_logical_device(instance, physical_device, request)
    }

    fn get_device_queue(
        &self,
        device: &ash::Device,
        queue_family_index: u32,
        queue_index: u32,
    ) -> vk::Queue {
        unsafe { device.get_device_queue(queue_family_index, queue_index) }
    }

    unsafe fn destroy_device(&mut self, device: ash::Device) {
        unsafe {
            device.destroy_device(None);
        }
    }

    unsafe fn destroy_debug_messenger(
        &mut self,
        _instance: &ash::Instance,
        messenger: DebugMessenger,
    ) {
        unsafe {
            messenger.destroy();
        }
    }

    unsafe fn destroy_instance(&mut self, instance: ash::Instance) {
        unsafe {
            instance.destroy_instance(None);
        }
    }
}
