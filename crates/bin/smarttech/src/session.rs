//! Interactive session — the read-eval loop that turns menu selections into
//! control commands and renders what the core returns.

use std::io::{self, BufRead, Write};

use smarttech_app::services::control_service::ControlService;
use smarttech_domain::error::SmartTechError;

use crate::menu::{Menu, MenuCommand};
use crate::render::{Painter, Tone};

/// Message shown after a bulk shutdown; per-device outcomes are not reported.
pub const ALL_OFF_MESSAGE: &str = "All devices have been powered off.";

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    /// The control service rejected a command.
    #[error("control command failed")]
    Control(#[from] SmartTechError),
}

/// A console session over arbitrary input and output streams.
pub struct Session<R, W> {
    service: ControlService,
    menu: Menu,
    painter: Painter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session; the menu is built from the service's registry.
    pub fn new(service: ControlService, painter: Painter, input: R, output: W) -> Self {
        let menu = Menu::for_registry(service.devices());
        Self {
            service,
            menu,
            painter,
            input,
            output,
        }
    }

    /// Run until the operator selects exit or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the streams fail, or
    /// [`SessionError::Control`] when the service rejects a command.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.banner()?;
        let mut line = String::new();
        loop {
            self.show_menu()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed");
                break;
            }
            writeln!(self.output)?;

            let Some(command) = self.menu.parse(&line) else {
                writeln!(self.output, "Invalid option.")?;
                continue;
            };
            if !self.execute(command)? {
                break;
            }
        }
        let farewell = self.painter.paint(Tone::Heading, "System shut down successfully.");
        writeln!(self.output, "\n{farewell}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the session, handing back the service and the output stream.
    pub fn into_parts(self) -> (ControlService, W) {
        (self.service, self.output)
    }

    fn execute(&mut self, command: MenuCommand) -> Result<bool, SessionError> {
        match command {
            MenuCommand::PowerOn(kind) => {
                let result = self.service.power_on(kind)?;
                let text = self.painter.paint(Tone::for_outcome(result.outcome), &result.message);
                writeln!(self.output, "{text}")?;
            }
            MenuCommand::PowerOff(kind) => {
                let result = self.service.power_off(kind)?;
                let text = self.painter.paint(Tone::for_outcome(result.outcome), &result.message);
                writeln!(self.output, "{text}")?;
            }
            MenuCommand::Status => {
                let header = self.painter.paint(Tone::Success, "===== DEVICE STATUS =====");
                writeln!(self.output, "{header}")?;
                for line in self.service.status_snapshot() {
                    writeln!(self.output, "{line}")?;
                }
            }
            MenuCommand::PowerOffAll => {
                self.service.power_off_all();
                let text = self.painter.paint(Tone::Danger, ALL_OFF_MESSAGE);
                writeln!(self.output, "{text}")?;
            }
            MenuCommand::Exit => {
                writeln!(self.output, "Shutting down...")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn banner(&mut self) -> io::Result<()> {
        let rule = "==================================================";
        let title = self.painter.paint(Tone::Heading, "      SMARTTECH MACHINE CONTROL SYSTEM");
        writeln!(self.output, "{rule}\n{title}\n{rule}")
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let header = self
            .painter
            .paint(Tone::Heading, "\n===================== MENU =====================");
        writeln!(self.output, "{header}")?;
        write!(self.output, "{}", self.menu)?;
        let prompt = self.painter.paint(Tone::Prompt, "\nChoose an option: ");
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }
}
