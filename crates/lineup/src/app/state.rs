//! Application state types and core data structures.
//!
//! Defines the App struct which holds all mutable application state,
//! plus supporting types for modes, prompt focus, and the running
//! session.

use std::sync::mpsc::Sender;

use crate::config::Config;
use crate::events::AppEvent;
use crate::keymap::KeyChord;
use crate::prompt::GoalPrompt;

/// Which view owns the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the configured lines; Enter activates one.
    Browse,
    /// A session is running on a line.
    Session,
}

/// Which control inside the goal prompt overlay holds focus.
///
/// `App::prompt_focus` stays `None` between the overlay opening and the
/// queued `FocusPrompt` event landing, so focus is never grabbed
/// synchronously with open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFocus {
    Input,
    Start,
    Skip,
}

/// The session currently running on a line.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub line: String,
    pub accent: (u8, u8, u8),
    pub goal: Option<String>,
}

/// Main application state container.
///
/// Methods are split across input.rs (event handling) and render.rs
/// (UI drawing).
pub struct App {
    pub mode: Mode,
    pub selected: usize,
    pub goal_prompt: Option<GoalPrompt>,
    pub prompt_focus: Option<PromptFocus>,
    pub session: Option<ActiveSession>,
    pub output: Option<String>,
    pub should_quit: bool,
    pub quit_chord: Option<KeyChord>,
    pub config: Config,
    pub event_tx: Sender<AppEvent>,
}

pub const BOTTOM_HORIZONTAL_PADDING: u16 = 1;
