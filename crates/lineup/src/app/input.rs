//! Keyboard event handling.
//!
//! Routes events by mode: browse keys navigate the line list, session
//! keys end the running session, and prompt keys act as the goal
//! prompt's input surface (typing cap, focus cycling, and the mapping
//! from keys to the prompt's resolution triggers).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::DEFAULT_ACCENT;
use crate::events::AppEvent;
use crate::keymap::matches_chord;
use crate::prompt::{GoalPrompt, PromptSurface, GOAL_MAX_CHARS};

use super::state::{ActiveSession, App, Mode, PromptFocus};

pub(super) const NO_LINES_HINT: &str =
    "No lines configured. Add [[lines]] entries to .lineup/config.toml.";

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize => {}
        AppEvent::FocusPrompt => {
            with_prompt(app, |prompt, surface| prompt.request_focus(surface));
        }
        AppEvent::SessionResolved { line, goal } => start_session(app, line, goal),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if let Some(chord) = &app.quit_chord {
        if matches_chord(key, chord) {
            app.should_quit = true;
            return;
        }
    }
    if app.goal_prompt.is_some() {
        handle_prompt_key(app, key);
        return;
    }
    match app.mode {
        Mode::Browse => handle_browse_key(app, key),
        Mode::Session => handle_session_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Enter => open_goal_prompt(app),
        _ => {}
    }
}

fn handle_session_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('e') | KeyCode::Esc => end_session(app),
        _ => {}
    }
}

fn move_selection(app: &mut App, delta: isize) {
    if app.config.lines.is_empty() {
        return;
    }
    let len = app.config.lines.len() as isize;
    let mut next = app.selected as isize + delta;
    if next < 0 {
        next = len - 1;
    } else if next >= len {
        next = 0;
    }
    app.selected = next as usize;
}

/// Open the goal prompt for the selected line.
///
/// Focus is not grabbed here: a `FocusPrompt` event is queued so the
/// input field gains focus on the next pass through the event loop.
pub(super) fn open_goal_prompt(app: &mut App) {
    if app.goal_prompt.is_some() {
        return;
    }
    let Some(line) = app.config.lines.get(app.selected).cloned() else {
        app.set_output(NO_LINES_HINT.to_string());
        return;
    };

    tracing::debug!(line = %line.name, "opening goal prompt");
    let tx = app.event_tx.clone();
    let line_name = line.name.clone();
    let prompt = GoalPrompt::new(
        line.name,
        line.color,
        app.config.prompt.dismiss,
        move |goal| {
            let _ = tx.send(AppEvent::SessionResolved {
                line: line_name,
                goal,
            });
        },
    );
    app.goal_prompt = Some(prompt);
    app.prompt_focus = None;
    let _ = app.event_tx.send(AppEvent::FocusPrompt);
}

fn start_session(app: &mut App, line: String, goal: Option<String>) {
    let accent = app
        .config
        .lines
        .iter()
        .find(|candidate| candidate.name == line)
        .map(|candidate| candidate.color)
        .unwrap_or(DEFAULT_ACCENT);

    tracing::info!(line = %line, goal = goal.as_deref().unwrap_or(""), "session started");
    match &goal {
        Some(goal) => app.set_output(format!("Session started on {line}: {goal}")),
        None => app.set_output(format!("Session started on {line}.")),
    }
    app.session = Some(ActiveSession { line, accent, goal });
    app.mode = Mode::Session;
}

fn end_session(app: &mut App) {
    if app.session.take().is_some() {
        app.mode = Mode::Browse;
        app.set_output("Session ended.".to_string());
    }
}

/// Host actions requested by the prompt during one trigger. Applied to
/// the App after the controller call returns, which keeps the borrow of
/// the prompt and the borrow of the rest of the App apart.
#[derive(Debug, Default)]
struct SurfaceRequests {
    closed: bool,
    focus_input: bool,
}

impl PromptSurface for SurfaceRequests {
    fn close(&mut self) {
        self.closed = true;
    }

    fn focus_input(&mut self) {
        self.focus_input = true;
    }
}

/// Run a controller call against the open prompt, then apply whatever
/// the prompt asked of the surface.
fn with_prompt(app: &mut App, action: impl FnOnce(&mut GoalPrompt, &mut SurfaceRequests)) {
    let Some(mut prompt) = app.goal_prompt.take() else {
        return;
    };
    let mut requests = SurfaceRequests::default();
    action(&mut prompt, &mut requests);

    if requests.closed {
        app.prompt_focus = None;
    } else {
        if requests.focus_input {
            app.prompt_focus = Some(PromptFocus::Input);
        }
        app.goal_prompt = Some(prompt);
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => with_prompt(app, |prompt, surface| prompt.dismiss(surface)),
        KeyCode::Enter => {
            let skip = app.prompt_focus == Some(PromptFocus::Skip);
            with_prompt(app, |prompt, surface| {
                if skip {
                    prompt.skip(surface);
                } else {
                    // Enter in the input field is equivalent to Start.
                    prompt.submit(surface);
                }
            });
        }
        KeyCode::Tab => cycle_prompt_focus(app, 1),
        KeyCode::BackTab => cycle_prompt_focus(app, -1),
        KeyCode::Left => {
            if app.prompt_focus == Some(PromptFocus::Skip) {
                app.prompt_focus = Some(PromptFocus::Start);
            }
        }
        KeyCode::Right => {
            if app.prompt_focus == Some(PromptFocus::Start) {
                app.prompt_focus = Some(PromptFocus::Skip);
            }
        }
        KeyCode::Backspace => edit_draft(app, |draft| {
            draft.pop();
        }),
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                return;
            }
            edit_draft(app, |draft| {
                // The input surface enforces the cap; the prompt itself
                // accepts any content.
                if draft.chars().count() < GOAL_MAX_CHARS {
                    draft.push(ch);
                }
            });
        }
        _ => {}
    }
}

fn cycle_prompt_focus(app: &mut App, delta: isize) {
    const ORDER: [PromptFocus; 3] = [PromptFocus::Input, PromptFocus::Start, PromptFocus::Skip];
    let current = app
        .prompt_focus
        .and_then(|focus| ORDER.iter().position(|candidate| *candidate == focus))
        .unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(ORDER.len() as isize) as usize;
    app.prompt_focus = Some(ORDER[next]);
}

/// Apply an edit to the draft, handing the prompt its full new content.
fn edit_draft(app: &mut App, edit: impl FnOnce(&mut String)) {
    if app.prompt_focus != Some(PromptFocus::Input) {
        return;
    }
    let Some(prompt) = app.goal_prompt.as_mut() else {
        return;
    };
    let mut draft = prompt.draft().to_string();
    edit(&mut draft);
    prompt.set_draft(draft);
}
