use std::ffi::{CStr, CString};
use ash::prelude::VkResult;
use ash::vk;
use crate::context::queue::AdapterInfo;

/// What the context asks of instance creation
pub struct InstanceRequest<'a> {
    pub application_name: &'a CStr,
    pub layers: &'a [CString],
    pub extensions: &'a [CString],
    /// Chain debug messenger create info into instance creation, so messages emitted while the
    /// instance itself is created or destroyed are reported as well
    pub debug_messenger: bool,
}

/// What the context asks of logical device creation
pub struct DeviceRequest<'a> {
    pub queue_family_index: u32,
    pub queue_priorities: &'a [f32],
}

/// The native calls needed to acquire and release the handle chain.
///
/// Implemented by [`crate::context::vk::AshApi`] on top of the Vulkan loader, and by
/// instrumented fakes in tests.
pub trait GraphicsApi {
    type Instance;
    type Messenger;
    type PhysicalDevice: Copy;
    type Device;
    type Queue: Copy;

    fn enumerate_instance_layers(&self) -> VkResult<Vec<CString>>;

    fn enumerate_instance_extensions(&self) -> VkResult<Vec<CString>>;

    fn create_instance(
        &mut self,
        request: &InstanceRequest,
    ) -> VkResult<Self::Instance>;

    fn create_debug_messenger(
        &mut self,
        instance: &Self::Instance,
    ) -> VkResult<Self::Messenger>;

    fn enumerate_physical_devices(
        &self,
        instance: &Self::Instance,
    ) -> VkResult<Vec<Self::PhysicalDevice>>;

    fn queue_family_properties(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
    ) -> Vec<vk::QueueFamilyProperties>;

    fn adapter_info(
        &self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
    ) -> AdapterInfo;

    fn create_device(
        &mut self,
        instance: &Self::Instance,
        physical_device: Self::PhysicalDevice,
        request: &DeviceRequest,
    ) -> VkResult<Self::Device>;

    fn get_device_queue(
        &self,
        device: &Self::Device,
        queue_family_index: u32,
        queue_index: u32,
    ) -> Self::Queue;

    /// # Safety
    /// No queue retrieved from `device` may be used afterwards.
    unsafe fn destroy_device(&mut self, device: Self::Device);

    /// # Safety
    /// `messenger` must have been created from `instance`.
    unsafe fn destroy_debug_messenger(
        &mut self,
        instance: &Self::Instance,
        messenger: Self::Messenger,
    );

    /// # Safety
    /// Every device and messenger created from `instance` must already be destroyed.
    unsafe fn destroy_instance(&mut self, instance: Self::Instance);
}
