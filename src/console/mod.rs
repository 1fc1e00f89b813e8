//! Command console
//!
//! Owns the session transcript, the command registry and the input buffer.
//! Every submission resolves synchronously to an appended entry or a no-op;
//! nothing here can fail.

mod input;
mod registry;
mod transcript;

pub use input::InputBuffer;
pub use registry::{command_names, complete, Command, Registry, CLEAR_COMMAND};
pub use transcript::{Entry, EntryKind, Transcript, INPUT_PREFIX};

use tracing::{debug, info};

use crate::profile::Profile;

/// Confirmation left behind by `clear`
pub const CLEARED_MESSAGE: &str = "Terminal cleared. Type \"help\" for commands.";

/// Display state of the console panel. Has no effect on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// What a submission did to the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing changed
    Ignored,
    /// Transcript reset to the confirmation entry
    Cleared,
    /// Echo plus the command's response appended
    Answered(Command),
    /// Echo plus the not-found message appended
    NotFound(String),
}

impl Submission {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Submission::Ignored)
    }
}

/// Message appended for a token the registry does not know
pub fn not_found_message(token: &str) -> String {
    format!("Command not found: \"{token}\"\n\nType \"help\" to see available commands.")
}

/// One console session
#[derive(Debug, Clone)]
pub struct Console {
    registry: Registry,
    transcript: Transcript,
    input: InputBuffer,
    display: DisplayState,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl Console {
    /// Fresh session seeded with the welcome entry
    pub fn new(profile: Profile) -> Self {
        let registry = Registry::new(profile);
        let transcript = Transcript::seeded(welcome_message(registry.profile()));
        Self {
            registry,
            transcript,
            input: InputBuffer::new(),
            display: DisplayState::Closed,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    /// Evaluate one raw line against the registry
    pub fn submit(&mut self, raw: &str) -> Submission {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Submission::Ignored;
        }

        let token = trimmed.to_lowercase();
        if token == CLEAR_COMMAND {
            self.transcript.reset(CLEARED_MESSAGE);
            info!("Transcript cleared");
            return Submission::Cleared;
        }

        self.transcript.push(Entry::input(raw));
        match self.registry.lookup(&token) {
            Some((cmd, response)) => {
                self.transcript.push(Entry::output(response));
                debug!(command = %cmd, entries = self.transcript.len(), "Command answered");
                Submission::Answered(cmd)
            }
            None => {
                self.transcript.push(Entry::output(not_found_message(trimmed)));
                debug!(token = %trimmed, "Command not found");
                Submission::NotFound(trimmed.to_string())
            }
        }
    }

    /// Submit whatever is in the input buffer. The buffer is cleared only
    /// when the submission was accepted.
    pub fn submit_input(&mut self) -> Submission {
        if self.input.is_blank() {
            return Submission::Ignored;
        }
        let line = self.input.take();
        self.submit(&line)
    }

    /// Launcher activation. No-op unless closed.
    pub fn open(&mut self) {
        if self.display == DisplayState::Closed {
            self.display = DisplayState::Open;
            info!("Console opened");
        }
    }

    /// Close from either visible state. The transcript is kept.
    pub fn close(&mut self) {
        if self.display != DisplayState::Closed {
            self.display = DisplayState::Closed;
            info!("Console closed");
        }
    }

    pub fn toggle_minimize(&mut self) {
        self.display = match self.display {
            DisplayState::Open => DisplayState::Minimized,
            DisplayState::Minimized => DisplayState::Open,
            DisplayState::Closed => DisplayState::Closed,
        };
    }
}

fn welcome_message(profile: &Profile) -> String {
    format!(
        "Welcome to {}'s Terminal! 🚀\n\nType \"help\" to see available commands.",
        profile.first_name()
    )
}
