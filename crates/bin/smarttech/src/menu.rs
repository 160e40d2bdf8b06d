//! Console menu — numbered options generated from the registry enumeration.
//!
//! Option numbers are derived from registration order at startup, so they
//! never need to be kept in sync with storage indices by hand.

use std::fmt;

use smarttech_app::registry::DeviceRegistry;
use smarttech_domain::device::DeviceKind;

/// A command the operator can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    PowerOn(DeviceKind),
    PowerOff(DeviceKind),
    Status,
    PowerOffAll,
    Exit,
}

/// One selectable line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: String,
    pub label: String,
    pub command: MenuCommand,
}

/// The full option list shown before each prompt.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Build the menu for every device in `registry`, in registration order.
    ///
    /// Each device gets a power-on and a power-off option, followed by the
    /// status listing, the bulk shutdown and `0` to exit.
    #[must_use]
    pub fn for_registry(registry: &DeviceRegistry) -> Self {
        let mut commands = Vec::with_capacity(registry.len() * 2 + 3);
        for kind in registry.kinds() {
            commands.push(MenuCommand::PowerOn(kind));
            commands.push(MenuCommand::PowerOff(kind));
        }
        commands.push(MenuCommand::Status);
        commands.push(MenuCommand::PowerOffAll);

        let mut entries: Vec<MenuEntry> = commands
            .into_iter()
            .zip(1_usize..)
            .map(|(command, n)| MenuEntry {
                key: n.to_string(),
                label: label(command),
                command,
            })
            .collect();
        entries.push(MenuEntry {
            key: "0".to_string(),
            label: label(MenuCommand::Exit),
            command: MenuCommand::Exit,
        });

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Map a line of operator input to a command. Surrounding whitespace is
    /// ignored; anything that is not an option key yields `None`.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<MenuCommand> {
        let input = input.trim();
        self.entries
            .iter()
            .find(|entry| entry.key == input)
            .map(|entry| entry.command)
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} - {}", entry.key, entry.label)?;
        }
        Ok(())
    }
}

fn label(command: MenuCommand) -> String {
    match command {
        MenuCommand::PowerOn(kind) => format!("Power on {}", kind.display_name()),
        MenuCommand::PowerOff(kind) => format!("Power off {}", kind.display_name()),
        MenuCommand::Status => "Show status of all devices".to_string(),
        MenuCommand::PowerOffAll => "Power off all devices".to_string(),
        MenuCommand::Exit => "Exit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_number_console_menu_like_the_station_layout() {
        let menu = Menu::for_registry(&DeviceRegistry::console());
        let rendered = menu.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "1 - Power on Industrial Oven",
                "2 - Power off Industrial Oven",
                "3 - Power on Conveyor Belt",
                "4 - Power off Conveyor Belt",
                "5 - Power on Hydraulic Press",
                "6 - Power off Hydraulic Press",
                "7 - Show status of all devices",
                "8 - Power off all devices",
                "0 - Exit",
            ]
        );
    }

    #[test]
    fn should_parse_selection_into_command() {
        let menu = Menu::for_registry(&DeviceRegistry::console());
        assert_eq!(
            menu.parse("3"),
            Some(MenuCommand::PowerOn(DeviceKind::ConveyorBelt))
        );
        assert_eq!(
            menu.parse(" 6\n"),
            Some(MenuCommand::PowerOff(DeviceKind::HydraulicPress))
        );
        assert_eq!(menu.parse("7"), Some(MenuCommand::Status));
        assert_eq!(menu.parse("0"), Some(MenuCommand::Exit));
    }

    #[test]
    fn should_return_none_for_unknown_selection() {
        let menu = Menu::for_registry(&DeviceRegistry::console());
        assert_eq!(menu.parse("9"), None);
        assert_eq!(menu.parse(""), None);
        assert_eq!(menu.parse("oven"), None);
    }

    #[test]
    fn should_follow_registration_order_not_catalogue_order() {
        let registry =
            DeviceRegistry::new([DeviceKind::VibrationSensor, DeviceKind::IndustrialOven]).unwrap();
        let menu = Menu::for_registry(&registry);
        assert_eq!(
            menu.parse("1"),
            Some(MenuCommand::PowerOn(DeviceKind::VibrationSensor))
        );
        assert_eq!(
            menu.parse("3"),
            Some(MenuCommand::PowerOn(DeviceKind::IndustrialOven))
        );
        assert_eq!(menu.parse("6"), Some(MenuCommand::PowerOffAll));
    }

    #[test]
    fn should_list_every_plant_device() {
        let menu = Menu::for_registry(&DeviceRegistry::plant());
        assert_eq!(menu.entries().len(), 8 * 2 + 3);
        assert_eq!(menu.parse("18"), Some(MenuCommand::PowerOffAll));
    }
}
