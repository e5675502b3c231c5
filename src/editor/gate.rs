//! PIN gate in front of the settings panel

use std::fmt;

/// Message shown after a wrong PIN
pub const WRONG_PIN_MESSAGE: &str = "Falscher PIN";

/// Visibility state of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Panel not shown
    #[default]
    Closed,
    /// PIN entry shown, settings hidden
    Locked,
    /// Settings shown, PIN entry hidden
    Unlocked,
}

impl GateState {
    pub fn is_open(&self) -> bool {
        !matches!(self, GateState::Closed)
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateState::Unlocked)
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateState::Closed => write!(f, "Closed"),
            GateState::Locked => write!(f, "Locked"),
            GateState::Unlocked => write!(f, "Unlocked"),
        }
    }
}

/// Outcome of a PIN submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCheck {
    Accepted,
    Rejected,
    /// Submitted while the panel was closed or already unlocked
    Ignored,
}

/// PIN entry plus panel state
#[derive(Debug, Clone, Default)]
pub struct PinGate {
    state: GateState,
    /// Text currently typed into the PIN field
    pub input: String,
    /// User-visible failure message after a wrong PIN
    pub error: Option<String>,
}

impl PinGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Show the panel; it always starts locked
    pub fn open(&mut self) {
        self.state = GateState::Locked;
        self.input.clear();
        self.error = None;
    }

    /// Hide the panel. Next `open` asks for the PIN again.
    pub fn close(&mut self) {
        self.state = GateState::Closed;
        self.input.clear();
        self.error = None;
    }

    /// Compare the typed input against `pin`.
    ///
    /// A mismatch clears the input and sets `error`; the gate stays locked.
    pub fn submit(&mut self, pin: &str) -> PinCheck {
        if self.state != GateState::Locked {
            return PinCheck::Ignored;
        }

        let check = if self.input == pin {
            self.state = GateState::Unlocked;
            self.error = None;
            PinCheck::Accepted
        } else {
            self.error = Some(WRONG_PIN_MESSAGE.to_string());
            PinCheck::Rejected
        };
        self.input.clear();
        check
    }
}
