//! Outcome → colour mapping for terminal output.

use smarttech_domain::device::Outcome;

const RESET: &str = "\x1b[0m";

/// Visual weight of a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Banners and menu headers.
    Heading,
    /// Operator prompt.
    Prompt,
    /// A device came up.
    Success,
    /// Redundant command, nothing changed.
    Warning,
    /// A device went down.
    Danger,
}

impl Tone {
    #[must_use]
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Activated => Self::Success,
            Outcome::AlreadyActive | Outcome::AlreadyInactive => Self::Warning,
            Outcome::Deactivated => Self::Danger,
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Self::Heading => "\x1b[36m",
            Self::Prompt => "\x1b[33m",
            Self::Success => "\x1b[32m",
            Self::Warning => "\x1b[38;5;208m",
            Self::Danger => "\x1b[31m",
        }
    }
}

/// Wraps text in ANSI colour codes, or passes it through when colour is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    #[must_use]
    pub fn paint(self, tone: Tone, text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", tone.ansi())
        } else {
            text.to_string()
        }
    }
}
