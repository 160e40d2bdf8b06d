//! Device registry — the fixed, ordered collection of devices.
//!
//! The list is established once at startup and never resized. Registration
//! order is display order. Devices are addressed by their [`DeviceKind`],
//! which must therefore be unique within a registry.

use smarttech_domain::device::{Device, DeviceKind};
use smarttech_domain::error::{NotFoundError, SmartTechError, ValidationError};

/// Kinds wired into the console station.
const CONSOLE_KINDS: [DeviceKind; 3] = [
    DeviceKind::IndustrialOven,
    DeviceKind::ConveyorBelt,
    DeviceKind::HydraulicPress,
];

/// Exclusive owner of every [`Device`].
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Register one device per kind, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SmartTechError::Validation`] when `kinds` is empty
    /// ([`ValidationError::EmptyRegistry`]) or names the same kind twice
    /// ([`ValidationError::DuplicateDevice`]).
    pub fn new(kinds: impl IntoIterator<Item = DeviceKind>) -> Result<Self, SmartTechError> {
        let mut devices: Vec<Device> = Vec::new();
        for kind in kinds {
            if devices.iter().any(|d| d.kind() == kind) {
                return Err(ValidationError::DuplicateDevice(kind).into());
            }
            devices.push(Device::new(kind));
        }
        if devices.is_empty() {
            return Err(ValidationError::EmptyRegistry.into());
        }
        Ok(Self { devices })
    }

    /// Resolve each key through the device factory, then register.
    ///
    /// # Errors
    ///
    /// Returns [`SmartTechError::InvalidArgument`] for the first unknown key,
    /// or any error from [`DeviceRegistry::new`].
    pub fn from_keys<I, S>(keys: I) -> Result<Self, SmartTechError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kinds = keys
            .into_iter()
            .map(|key| DeviceKind::from_key(key.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kinds)
    }

    /// Oven, belt and press — the three-device console station.
    #[must_use]
    pub fn console() -> Self {
        Self::with_distinct(&CONSOLE_KINDS)
    }

    /// Every known kind, in [`DeviceKind::ALL`] order.
    #[must_use]
    pub fn plant() -> Self {
        Self::with_distinct(&DeviceKind::ALL)
    }

    fn with_distinct(kinds: &[DeviceKind]) -> Self {
        Self {
            devices: kinds.iter().copied().map(Device::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = DeviceKind> + '_ {
        self.devices.iter().map(Device::kind)
    }

    /// Devices in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    #[must_use]
    pub fn get(&self, kind: DeviceKind) -> Option<&Device> {
        self.devices.iter().find(|d| d.kind() == kind)
    }

    /// Zero-based registration index of `kind`.
    #[must_use]
    pub fn position(&self, kind: DeviceKind) -> Option<usize> {
        self.devices.iter().position(|d| d.kind() == kind)
    }

    pub(crate) fn get_mut(&mut self, kind: DeviceKind) -> Result<&mut Device, NotFoundError> {
        self.devices
            .iter_mut()
            .find(|d| d.kind() == kind)
            .ok_or(NotFoundError { device: kind })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Device> {
        self.devices.iter_mut()
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_registration_order() {
        let registry = DeviceRegistry::new([
            DeviceKind::VibrationSensor,
            DeviceKind::IndustrialOven,
            DeviceKind::AirCompressor,
        ])
        .unwrap();

        let kinds: Vec<DeviceKind> = registry.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                DeviceKind::VibrationSensor,
                DeviceKind::IndustrialOven,
                DeviceKind::AirCompressor,
            ]
        );
        assert_eq!(registry.position(DeviceKind::IndustrialOven), Some(1));
    }

    #[test]
    fn should_start_every_device_off() {
        let registry = DeviceRegistry::plant();
        assert!(registry.iter().all(|d| !d.is_powered()));
    }

    #[test]
    fn should_return_validation_error_when_registry_is_empty() {
        let result = DeviceRegistry::new(Vec::<DeviceKind>::new());
        assert!(matches!(
            result,
            Err(SmartTechError::Validation(ValidationError::EmptyRegistry))
        ));
    }

    #[test]
    fn should_return_validation_error_when_kind_is_duplicated() {
        let result = DeviceRegistry::new([
            DeviceKind::ConveyorBelt,
            DeviceKind::HydraulicPress,
            DeviceKind::ConveyorBelt,
        ]);
        assert!(matches!(
            result,
            Err(SmartTechError::Validation(ValidationError::DuplicateDevice(
                DeviceKind::ConveyorBelt
            )))
        ));
    }

    #[test]
    fn should_build_from_factory_keys() {
        let registry = DeviceRegistry::from_keys(["forno", "esteira", "prensa"]).unwrap();
        let kinds: Vec<DeviceKind> = registry.kinds().collect();
        assert_eq!(kinds, CONSOLE_KINDS.to_vec());
    }

    #[test]
    fn should_propagate_invalid_argument_when_key_is_unknown() {
        let result = DeviceRegistry::from_keys(["oven", "furnace"]);
        assert!(matches!(
            result,
            Err(SmartTechError::InvalidArgument(ref e)) if e.key == "furnace"
        ));
    }

    #[test]
    fn should_provide_console_and_plant_presets() {
        assert_eq!(DeviceRegistry::console().len(), 3);
        let plant = DeviceRegistry::plant();
        assert_eq!(plant.len(), 8);
        assert_eq!(plant.kinds().collect::<Vec<_>>(), DeviceKind::ALL.to_vec());
    }

    #[test]
    fn should_return_none_when_kind_not_registered() {
        let registry = DeviceRegistry::console();
        assert!(registry.get(DeviceKind::IndustrialRobot).is_none());
        assert!(registry.position(DeviceKind::IndustrialRobot).is_none());
    }
}
