//! Device kinds — the fixed catalogue of equipment, and the key → kind factory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDeviceKind;

/// Every kind of equipment the plant knows about.
///
/// Kinds carry no behaviour of their own; they only decide the display name
/// and the stable key used in configuration and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    #[serde(rename = "oven")]
    IndustrialOven,
    #[serde(rename = "belt")]
    ConveyorBelt,
    #[serde(rename = "press")]
    HydraulicPress,
    #[serde(rename = "robot")]
    IndustrialRobot,
    #[serde(rename = "compressor")]
    AirCompressor,
    #[serde(rename = "refrigeration")]
    RefrigerationSystem,
    #[serde(rename = "temperature_sensor")]
    TemperatureSensor,
    #[serde(rename = "vibration_sensor")]
    VibrationSensor,
}

impl DeviceKind {
    /// All kinds, in plant floor order.
    pub const ALL: [Self; 8] = [
        Self::IndustrialOven,
        Self::ConveyorBelt,
        Self::HydraulicPress,
        Self::IndustrialRobot,
        Self::AirCompressor,
        Self::RefrigerationSystem,
        Self::TemperatureSensor,
        Self::VibrationSensor,
    ];

    /// Human-readable name used in messages and status lines.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::IndustrialOven => "Industrial Oven",
            Self::ConveyorBelt => "Conveyor Belt",
            Self::HydraulicPress => "Hydraulic Press",
            Self::IndustrialRobot => "Industrial Robot",
            Self::AirCompressor => "Air Compressor",
            Self::RefrigerationSystem => "Refrigeration System",
            Self::TemperatureSensor => "Temperature Sensor",
            Self::VibrationSensor => "Vibration Sensor",
        }
    }

    /// Stable lowercase tag, e.g. `oven`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::IndustrialOven => "oven",
            Self::ConveyorBelt => "belt",
            Self::HydraulicPress => "press",
            Self::IndustrialRobot => "robot",
            Self::AirCompressor => "compressor",
            Self::RefrigerationSystem => "refrigeration",
            Self::TemperatureSensor => "temperature_sensor",
            Self::VibrationSensor => "vibration_sensor",
        }
    }

    /// Resolve a factory key to a kind.
    ///
    /// Matching ignores case and surrounding whitespace. Besides the stable
    /// tags returned by [`key`](Self::key), the legacy console keys `forno`,
    /// `esteira` and `prensa` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceKind`] for any other key.
    pub fn from_key(key: &str) -> Result<Self, UnknownDeviceKind> {
        let normalized = key.trim().to_lowercase();
        let kind = match normalized.as_str() {
            "oven" | "forno" => Self::IndustrialOven,
            "belt" | "esteira" => Self::ConveyorBelt,
            "press" | "prensa" => Self::HydraulicPress,
            "robot" => Self::IndustrialRobot,
            "compressor" => Self::AirCompressor,
            "refrigeration" => Self::RefrigerationSystem,
            "temperature_sensor" => Self::TemperatureSensor,
            "vibration_sensor" => Self::VibrationSensor,
            _ => {
                return Err(UnknownDeviceKind {
                    key: key.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DeviceKind {
    type Err = UnknownDeviceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
