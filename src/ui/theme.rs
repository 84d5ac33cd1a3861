use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn info_message() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn success_message() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn action_key() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn action_label() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn action_busy() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn pool_id() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
