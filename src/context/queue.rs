use std::hash::Hash;
use ash::vk;

/// Queue family indices matched against the capabilities the context requires.
/// Only a graphics-capable family is required for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    pub graphics: Option<u32>,
}

impl QueueFamilyIndices {
    /// Picks the first family in table order for every required capability
    pub fn find(families: &[vk::QueueFamilyProperties]) -> Self {
        let graphics = families
            .iter()
            .position(|props| {
                props.queue_count > 0
                    && props.queue_flags.contains(vk::QueueFlags::GRAPHICS)
            })
            .map(|index| index as u32);

        Self { graphics }
    }

    pub fn is_complete(&self) -> bool {
        self.graphics.is_some()
    }
}

pub struct Queue<Q> {
    pub family: QueueFamily,
    pub handle: Q,
}

impl<Q> Queue<Q> {
    pub fn new(
        family: QueueFamily,
        handle: Q,
    ) -> Self {
        Self {
            family,
            handle,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QueueFamily {
    pub index: u32,
    pub properties: vk::QueueFamilyProperties,
}

impl QueueFamily {
    pub fn new(
        index: u32,
        properties: vk::QueueFamilyProperties,
    ) -> Self {
        Self {
            index,
            properties,
        }
    }

    pub fn supports_graphics(&self) -> bool {
        self.properties.queue_flags.contains(vk::QueueFlags::GRAPHICS)
    }

    pub fn supports_compute(&self) -> bool {
        self.properties.queue_flags.contains(vk::QueueFlags::COMPUTE)
    }

    pub fn supports_transfer(&self) -> bool {
        self.properties.queue_flags.contains(vk::QueueFlags::TRANSFER)
    }
}

impl PartialEq for QueueFamily {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for QueueFamily {}

impl Hash for QueueFamily {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// Human-readable description of a physical device, used for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterInfo {
    pub name: String,
    pub device_type: vk::PhysicalDeviceType,
    pub api_version: u32,
}

impl std::fmt::Display for AdapterInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:?}, Vulkan {}.{}.{})",
            self.name,
            self.device_type,
            vk::api_version_major(self.api_version),
            vk::api_version_minor(self.api_version),
            vk::api_version_patch(self.api_version),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn family(flags: vk::QueueFlags, count: u32) -> vk::QueueFamilyProperties {
        vk::QueueFamilyProperties {
            queue_flags: flags,
            queue_count: count,
            ..Default::default()
        }
    }

    #[test]
    fn empty_table_is_incomplete() {
        let indices = QueueFamilyIndices::find(&[]);
        assert!(!indices.is_complete());
        assert_eq!(indices.graphics, None);
    }

    #[test]
    fn skips_families_without_queues() {
        let families = [
            family(vk::QueueFlags::GRAPHICS, 0),
            family(vk::QueueFlags::TRANSFER, 2),
            family(vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE, 1),
        ];
        assert_eq!(QueueFamilyIndices::find(&families).graphics, Some(2));
    }

    #[test]
    fn family_predicates_follow_flags() {
        let fam = QueueFamily::new(3, family(vk::QueueFlags::COMPUTE | vk::QueueFlags::TRANSFER, 1));
        assert!(!fam.supports_graphics());
        assert!(fam.supports_compute());
        assert!(fam.supports_transfer());
    }

    #[test]
    fn adapter_info_display_includes_version() {
        let info = AdapterInfo {
            name: "Fake GPU".to_owned(),
            device_type: vk::PhysicalDeviceType::DISCRETE_GPU,
            api_version: vk::make_api_version(0, 1, 3, 250),
        };
        assert_eq!(info.to_string(), "Fake GPU (DISCRETE_GPU, Vulkan 1.3.250)");
    }

    proptest! {
        #[test]
        fn finds_first_usable_graphics_family(
            table in proptest::collection::vec((any::<bool>(), 0u32..4), 0..12)
        ) {
            let families = table
                .iter()
                .map(|&(graphics, count)| {
                    let flags = if graphics {
                        vk::QueueFlags::GRAPHICS | vk::QueueFlags::TRANSFER
                    } else {
                        vk::QueueFlags::TRANSFER
                    };
                    family(flags, count)
                })
                .collect::<Vec<_>>();

            let expected = table
                .iter()
                .position(|&(graphics, count)| graphics && count > 0)
                .map(|i| i as u32);

            let indices = QueueFamilyIndices::find(&families);
            prop_assert_eq!(indices.graphics, expected);
            prop_assert_eq!(indices.is_complete(), expected.is_some());
        }
    }
}
