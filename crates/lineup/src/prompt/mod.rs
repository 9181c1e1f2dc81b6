//! Session goal prompt state machine.
//!
//! When a line is activated the user is asked for an optional free-text
//! goal before the session starts. `GoalPrompt` owns the draft text and
//! the single terminal resolution; everything visual (the overlay, the
//! input field, the buttons) belongs to the host and is reached only
//! through the `PromptSurface` trait.
//!
//! The prompt has two states: open and resolved. Whichever trigger fires
//! first (Start, Skip, Enter in the field, or an outside dismissal) wins;
//! every trigger after that is a no-op. Resolution always requests the
//! surface close before the callback runs, so the callback never sees a
//! live prompt.

/// Ceiling for goal text, matched by the input surface's typing cap.
pub const GOAL_MAX_CHARS: usize = 200;

/// Presentation hooks the prompt can request from its host.
///
/// The prompt only ever asks; it never renders or disposes anything
/// itself, and it never assumes a request was honored synchronously.
pub trait PromptSurface {
    /// Tear down the prompt's visual container.
    fn close(&mut self);
    /// Move input focus to the goal text field.
    fn focus_input(&mut self);
}

/// What an outside dismissal (the host's escape affordance) does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DismissBehavior {
    /// Resolve with no goal, same as the Skip action.
    #[default]
    Skip,
    /// Leave the prompt open.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptState {
    Open,
    Resolved,
}

type ResolveFn = Box<dyn FnOnce(Option<String>)>;

pub struct GoalPrompt {
    line_name: String,
    accent: (u8, u8, u8),
    draft: String,
    state: PromptState,
    dismiss: DismissBehavior,
    on_resolved: Option<ResolveFn>,
}

impl GoalPrompt {
    pub fn new(
        line_name: String,
        accent: (u8, u8, u8),
        dismiss: DismissBehavior,
        on_resolved: impl FnOnce(Option<String>) + 'static,
    ) -> Self {
        Self {
            line_name,
            accent,
            draft: String::new(),
            state: PromptState::Open,
            dismiss,
            on_resolved: Some(Box::new(on_resolved)),
        }
    }

    pub fn line_name(&self) -> &str {
        &self.line_name
    }

    pub fn accent(&self) -> (u8, u8, u8) {
        self.accent
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.state == PromptState::Open
    }

    /// Store the field's current full content verbatim.
    ///
    /// No trimming happens here; the counter reflects raw length
    /// including whitespace. The 200-char cap is the input surface's
    /// job, not ours.
    pub fn set_draft(&mut self, raw: String) {
        if self.state == PromptState::Resolved {
            return;
        }
        self.draft = raw;
    }

    /// Live counter text shown under the input field.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.draft.chars().count(), GOAL_MAX_CHARS)
    }

    /// Ask the host to focus the input field.
    ///
    /// Callers schedule this through their event queue rather than
    /// invoking it inline at open time, so the focus grab cannot race
    /// the host's own mount.
    pub fn request_focus(&self, surface: &mut dyn PromptSurface) {
        if self.state == PromptState::Open {
            surface.focus_input();
        }
    }

    /// Start the session: a non-empty trimmed draft resolves with the
    /// goal, anything else resolves with no goal.
    pub fn submit(&mut self, surface: &mut dyn PromptSurface) {
        let trimmed = self.draft.trim();
        let goal = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.resolve(surface, goal);
    }

    /// Skip the goal regardless of draft content.
    pub fn skip(&mut self, surface: &mut dyn PromptSurface) {
        self.resolve(surface, None);
    }

    /// Host-side dismissal outside the explicit actions (e.g. Esc).
    pub fn dismiss(&mut self, surface: &mut dyn PromptSurface) {
        match self.dismiss {
            DismissBehavior::Skip => self.resolve(surface, None),
            DismissBehavior::Ignore => {}
        }
    }

    fn resolve(&mut self, surface: &mut dyn PromptSurface, goal: Option<String>) {
        // Repeated triggers (double activation, Start then Skip) land here
        // after the transition and must stay no-ops.
        if self.state == PromptState::Resolved {
            return;
        }
        self.state = PromptState::Resolved;
        tracing::debug!(line = %self.line_name, goal = goal.is_some(), "goal prompt resolved");
        surface.close();
        if let Some(notify) = self.on_resolved.take() {
            notify(goal);
        }
    }
}

#[cfg(test)]
mod tests;
