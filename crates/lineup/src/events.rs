//! Application event types.
//!
//! Defines the event enum used for communication between the input
//! thread and the main event loop. Events are sent via an mpsc channel
//! and processed sequentially, so anything that must happen "after the
//! current work" (deferred focus, post-resolution UI updates) is posted
//! here instead of being invoked inline.

use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Resize,
    /// Queued when the goal prompt opens; focus lands on the next pass
    /// through the event loop rather than synchronously with open.
    FocusPrompt,
    /// Posted by the goal prompt's resolution callback, after the
    /// overlay has been closed.
    SessionResolved {
        line: String,
        goal: Option<String>,
    },
}
