use std::ffi::{c_char, CString};
use ash::prelude::VkResult;
use ash::vk;
use crate::context::api::InstanceRequest;
use crate::context::vk::debug::debug_utils_messenger_create_info;

pub fn enumerate_layers(entry: &ash::Entry) -> VkResult<Vec<CString>> {
    let props = unsafe { entry.enumerate_instance_layer_properties()? };
    Ok(props
        .iter()
        .filter_map(|props| props.layer_name_as_c_str().ok())
        .map(|name| name.to_owned())
        .collect())
}

pub fn enumerate_extensions(entry: &ash::Entry) -> VkResult<Vec<CString>> {
    let props = unsafe { entry.enumerate_instance_extension_properties(None)? };
    Ok(props
        .iter()
        .filter_map(|props| props.extension_name_as_c_str().ok())
        .map(|name| name.to_owned())
        .collect())
}

pub fn create_instance(
    entry: &ash::Entry,
    request: &InstanceRequest,
) -> VkResult<ash::Instance> {
    let application_info = vk::ApplicationInfo::default()
        .application_name(request.application_name)
        .application_version(vk::make_api_version(0, 1, 0, 0))
        .engine_name(c"No Engine")
        .engine_version(vk::make_api_version(0, 1, 0, 0))
        .api_version(vk::API_VERSION_1_0);
    let enabled_layer_names = request.layers
        .iter()
        .map(|layer| layer.as_ptr())
        .collect::<Vec<*const c_char>>();
    #[allow(unused_mut)]
    let mut enabled_extension_names = request.extensions
        .iter()
        .map(|ext| ext.as_ptr())
        .collect::<Vec<*const c_char>>();

    #[cfg(target_os = "macos")]
    {
        enabled_extension_names.push(ash::khr::portability_enumeration::NAME.as_ptr());
        enabled_extension_names.push(ash::khr::get_physical_device_properties2::NAME.as_ptr());
    }

    let mut debug_info = debug_utils_messenger_create_info();
    let instance_info = vk::InstanceCreateInfo::default()
        .application_info(&application_info)
        .enabled_layer_names(&enabled_layer_names)
        .enabled_extension_names(&enabled_extension_names);
    let instance_info = if request.debug_messenger {
        instance_info.push_next(&mut debug_info)
    } else {
        instance_info
    };

    #[cfg(target_os = "macos")]
    let instance_info = instance_info
        .flags(vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR);

    unsafe { entry.create_instance(&instance_info, None) }
}
