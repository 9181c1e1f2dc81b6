//! UI rendering.
//!
//! Handles all drawing for the TUI:
//! - Main area (line list or running session)
//! - Bottom stack (separator, transient output, status bar)
//! - Goal prompt overlay

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::layout::{centered_fixed_rect, inset_horizontal};
use crate::ui::widgets::{accent_color, button_span, dashed_line};

use super::input::NO_LINES_HINT;
use super::state::{App, Mode, PromptFocus, BOTTOM_HORIZONTAL_PADDING};

const PROMPT_PLACEHOLDER: &str = "What do you want to get done?";
const PROMPT_WIDTH: u16 = 58;
const PROMPT_HEIGHT: u16 = 6;

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    let output_height = u16::from(app.output.is_some());

    // Vertical layout: main area | separator | output | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(output_height),
            Constraint::Length(1),
        ])
        .split(area);

    match app.mode {
        Mode::Browse => render_lines(app, frame, chunks[0]),
        Mode::Session => render_session(app, frame, chunks[0]),
    }

    render_separator(frame, chunks[1], area.width as usize);

    if output_height > 0 {
        if let Some(message) = &app.output {
            let output_area = inset_horizontal(chunks[2], BOTTOM_HORIZONTAL_PADDING);
            let output = Paragraph::new(Line::raw(message.clone()))
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(output, output_area);
        }
    }

    render_status_bar(app, frame, chunks[3]);

    // Render the goal prompt overlay on top if open
    if app.goal_prompt.is_some() {
        render_goal_prompt(app, frame, area);
    }
}

/// Render the browsable list of configured lines.
fn render_lines(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let area = inset_horizontal(area, BOTTOM_HORIZONTAL_PADDING);
    let mut lines = Vec::new();

    if app.config.lines.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_LINES_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (idx, line) in app.config.lines.iter().enumerate() {
            let name_style = if idx == app.selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(accent_color(line.color))),
                Span::styled(line.name.clone(), name_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Enter starts a session on the selected line.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the running session.
fn render_session(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let area = inset_horizontal(area, BOTTOM_HORIZONTAL_PADDING);
    let Some(session) = &app.session else {
        return;
    };
    let accent = accent_color(session.accent);

    let goal_line = match &session.goal {
        Some(goal) => Line::from(vec![
            Span::styled("Goal: ", Style::default().fg(Color::Gray)),
            Span::styled(goal.clone(), Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled("No goal", Style::default().fg(Color::DarkGray))),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(accent)),
            Span::styled(
                session.line.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        goal_line,
        Line::raw(""),
        Line::from(Span::styled(
            "Press e to end the session.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render horizontal separator.
fn render_separator(frame: &mut ratatui::Frame, area: Rect, width: usize) {
    let separator = Paragraph::new(Line::raw(dashed_line(width))).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(separator, area);
}

/// Render the status bar (mode indicator plus version label).
fn render_status_bar(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let area = inset_horizontal(area, BOTTOM_HORIZONTAL_PADDING);
    let (label, style) = match (&app.mode, &app.session) {
        (Mode::Session, Some(session)) => (
            format!("-- SESSION: {} --", session.line),
            Style::default()
                .bg(accent_color(session.accent))
                .fg(Color::Black),
        ),
        _ => (
            "-- LINES --".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let version = env!("CARGO_PKG_VERSION");
    let version_text = format!("lineup v{version}");
    let width = area.width as usize;
    let label_len = label.chars().count();
    let version_len = version_text.chars().count();

    if width > label_len + version_len + 1 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(version_len as u16),
            ])
            .split(area);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                version_text,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Right),
            chunks[1],
        );
    } else {
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), area);
    }
}

/// Render the goal prompt overlay.
fn render_goal_prompt(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    // A resolved prompt is never drawn; the host tears it down first.
    let Some(prompt) = app.goal_prompt.as_ref().filter(|prompt| prompt.is_open()) else {
        return;
    };
    let accent = accent_color(prompt.accent());
    let overlay_rect = centered_fixed_rect(PROMPT_WIDTH.min(area.width), PROMPT_HEIGHT, area);
    frame.render_widget(Clear, overlay_rect);

    let inner_width = overlay_rect.width.saturating_sub(2) as usize;
    let input_focused = app.prompt_focus == Some(PromptFocus::Input);

    let mut lines = vec![input_line(prompt.draft(), input_focused, inner_width)];
    lines.push(Line::from(Span::styled(
        format!("{:>inner_width$}", prompt.counter()),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        button_span(
            "Start Session",
            accent,
            app.prompt_focus == Some(PromptFocus::Start),
        ),
        Span::raw("  "),
        button_span("Skip", Color::Gray, app.prompt_focus == Some(PromptFocus::Skip)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt.line_name()))
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        overlay_rect,
    );
}

/// Build the input field line: draft text (or placeholder) plus a block
/// cursor once focus has landed.
fn input_line(draft: &str, focused: bool, inner_width: usize) -> Line<'static> {
    let cursor_cells = usize::from(focused);
    let mut spans = Vec::new();

    if draft.is_empty() {
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }
        spans.push(Span::styled(
            PROMPT_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        // Keep the tail visible when the draft outgrows the field.
        let visible_width = inner_width.saturating_sub(cursor_cells).max(1);
        let chars: Vec<char> = draft.chars().collect();
        let start = chars.len().saturating_sub(visible_width);
        let visible: String = chars[start..].iter().collect();
        spans.push(Span::styled(visible, Style::default().fg(Color::White)));
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }
    }

    Line::from(spans)
}
