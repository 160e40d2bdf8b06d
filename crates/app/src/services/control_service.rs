//! Control service — power commands and status aggregation over the registry.

use smarttech_domain::device::{Device, DeviceKind, DeviceResult};
use smarttech_domain::error::SmartTechError;

use crate::registry::DeviceRegistry;

/// Application service dispatching power commands to registered devices.
pub struct ControlService {
    registry: DeviceRegistry,
}

impl ControlService {
    /// Create a new service owning the given registry.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self { registry }
    }

    /// Read-only view of the registry, for enumeration by front-ends.
    #[must_use]
    pub fn devices(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Switch the addressed device on.
    ///
    /// # Errors
    ///
    /// Returns [`SmartTechError::NotFound`] when `kind` is not registered.
    #[tracing::instrument(skip_all, fields(device = %kind))]
    pub fn power_on(&mut self, kind: DeviceKind) -> Result<DeviceResult, SmartTechError> {
        let result = self.device_mut(kind)?.power_on();
        log_result(&result);
        Ok(result)
    }

    /// Switch the addressed device off.
    ///
    /// # Errors
    ///
    /// Returns [`SmartTechError::NotFound`] when `kind` is not registered.
    #[tracing::instrument(skip_all, fields(device = %kind))]
    pub fn power_off(&mut self, kind: DeviceKind) -> Result<DeviceResult, SmartTechError> {
        let result = self.device_mut(kind)?.power_off();
        log_result(&result);
        Ok(result)
    }

    /// Switch every device off. Individual outcomes are discarded.
    #[tracing::instrument(skip_all)]
    pub fn power_off_all(&mut self) {
        let mut changed = 0_usize;
        for device in self.registry.iter_mut() {
            if device.power_off().outcome.changed_state() {
                changed += 1;
            }
        }
        tracing::info!(changed, total = self.registry.len(), "all devices powered off");
    }

    /// One status line per device, in registration order, computed fresh.
    #[must_use]
    pub fn status_snapshot(&self) -> Vec<String> {
        self.registry.iter().map(Device::status).collect()
    }

    fn device_mut(&mut self, kind: DeviceKind) -> Result<&mut Device, SmartTechError> {
        self.registry.get_mut(kind).map_err(|err| {
            tracing::warn!(error = %err, "command addressed an unregistered device");
            SmartTechError::from(err)
        })
    }
}

fn log_result(result: &DeviceResult) {
    if result.outcome.changed_state() {
        tracing::info!(outcome = ?result.outcome, "{}", result.message);
    } else {
        tracing::debug!(outcome = ?result.outcome, "{}", result.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarttech_domain::device::Outcome;

    fn oven_and_belt() -> ControlService {
        ControlService::new(
            DeviceRegistry::new([DeviceKind::IndustrialOven, DeviceKind::ConveyorBelt]).unwrap(),
        )
    }

    #[test]
    fn should_report_every_device_off_initially() {
        let svc = ControlService::new(DeviceRegistry::plant());
        let snapshot = svc.status_snapshot();
        assert_eq!(snapshot.len(), 8);
        assert!(snapshot.iter().all(|line| line.ends_with(": OFF")));
    }

    #[test]
    fn should_follow_oven_and_belt_scenario() {
        let mut svc = oven_and_belt();

        let first = svc.power_on(DeviceKind::IndustrialOven).unwrap();
        assert_eq!(first.outcome, Outcome::Activated);
        assert_eq!(
            svc.status_snapshot(),
            vec!["Industrial Oven: ON", "Conveyor Belt: OFF"]
        );

        let second = svc.power_on(DeviceKind::IndustrialOven).unwrap();
        assert_eq!(second.outcome, Outcome::AlreadyActive);
        assert_eq!(
            svc.status_snapshot(),
            vec!["Industrial Oven: ON", "Conveyor Belt: OFF"]
        );

        svc.power_off_all();
        assert_eq!(
            svc.status_snapshot(),
            vec!["Industrial Oven: OFF", "Conveyor Belt: OFF"]
        );
    }

    #[test]
    fn should_deactivate_then_report_already_inactive() {
        let mut svc = oven_and_belt();
        svc.power_on(DeviceKind::ConveyorBelt).unwrap();

        let off = svc.power_off(DeviceKind::ConveyorBelt).unwrap();
        assert_eq!(off.outcome, Outcome::Deactivated);
        assert_eq!(off.message, "Conveyor Belt turned off.");

        let again = svc.power_off(DeviceKind::ConveyorBelt).unwrap();
        assert_eq!(again.outcome, Outcome::AlreadyInactive);
    }

    #[test]
    fn should_only_touch_addressed_device() {
        let mut svc = oven_and_belt();
        svc.power_on(DeviceKind::ConveyorBelt).unwrap();
        let oven = svc.devices().get(DeviceKind::IndustrialOven).unwrap();
        assert!(!oven.is_powered());
    }

    #[test]
    fn should_power_off_all_regardless_of_prior_state() {
        let mut svc = ControlService::new(DeviceRegistry::plant());
        for kind in [
            DeviceKind::IndustrialRobot,
            DeviceKind::AirCompressor,
            DeviceKind::VibrationSensor,
        ] {
            svc.power_on(kind).unwrap();
        }

        svc.power_off_all();

        assert!(svc.devices().iter().all(|d| !d.is_powered()));
        svc.power_off_all();
        assert!(svc.devices().iter().all(|d| !d.is_powered()));
    }

    #[test]
    fn should_preserve_registration_order_in_snapshot() {
        let svc = ControlService::new(
            DeviceRegistry::new([DeviceKind::HydraulicPress, DeviceKind::IndustrialOven]).unwrap(),
        );
        assert_eq!(
            svc.status_snapshot(),
            vec!["Hydraulic Press: OFF", "Industrial Oven: OFF"]
        );
    }

    #[test]
    fn should_return_not_found_when_device_not_registered() {
        let mut svc = oven_and_belt();
        let result = svc.power_on(DeviceKind::IndustrialRobot);
        assert!(matches!(
            result,
            Err(SmartTechError::NotFound(ref e)) if e.device == DeviceKind::IndustrialRobot
        ));
        let result = svc.power_off(DeviceKind::IndustrialRobot);
        assert!(matches!(result, Err(SmartTechError::NotFound(_))));
    }
}
