//! Stateless widget helpers.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Convert a config RGB tuple into a ratatui color.
pub fn accent_color((red, green, blue): (u8, u8, u8)) -> Color {
    Color::Rgb(red, green, blue)
}

/// A dashed separator line of the given width.
pub fn dashed_line(width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let pattern = "- ";
    pattern.repeat(width / pattern.len() + 1)[..width].to_string()
}

/// A bracketed button label, inverted onto its color when focused.
pub fn button_span(label: &str, color: Color, focused: bool) -> Span<'static> {
    let text = format!("[ {label} ]");
    let style = if focused {
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(text, style)
}
