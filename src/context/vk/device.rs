use ash::prelude::VkResult;
use ash::vk;
use crate::context::api::DeviceRequest;
use crate::context::queue::AdapterInfo;

pub fn adapter_info(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
) -> AdapterInfo {
    let props = unsafe { instance.get_physical_device_properties(physical_device) };
    let name = props
        .device_name_as_c_str()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| String::from("<unnamed>"));

    AdapterInfo {
        name,
        device_type: props.device_type,
        api_version: props.api_version,
    }
}

pub fn create_logical_device(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    request: &DeviceRequest,
) -> VkResult<ash::Device> {
    let queue_create_infos = [
        vk::DeviceQueueCreateInfo::default()
            .queue_family_index(request.queue_family_index)
            .queue_priorities(request.queue_priorities),
    ];

    // Nothing beyond the core feature set is needed yet
    let enabled_features = vk::PhysicalDeviceFeatures::default();

    #[cfg(target_os = "macos")]
    let enabled_extension_names = [ash::khr::portability_subset::NAME.as_ptr()];
    #[cfg(not(target_os = "macos"))]
    let enabled_extension_names: [*const std::ffi::c_char; 0] = [];

    let device_create_info = vk::DeviceCreateInfo::default()
        .queue_create_infos(&queue_create_infos)
        .enabled_features(&enabled_features)
        .enabled_extension_names(&enabled_extension_names);

    unsafe {
        instance.create_device(physical_device, &device_create_info, None)
    }
}
