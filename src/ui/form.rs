//! Helpers shared by the form panels.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::state::Field;
use crate::ui::theme::Theme;

/// One labeled single-line field; draws the cursor when focused.
pub fn render_field(frame: &mut Frame, area: Rect, label: &str, field: &Field, focused: bool) {
    if area.height == 0 {
        return;
    }
    let marker = if focused {
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT))
    } else {
        Span::raw("  ")
    };
    let line = Line::from(vec![
        marker,
        Span::styled(format!("{}: ", label), Theme::label()),
        Span::styled(field.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if focused {
        // Marker (2) + label + ": "
        let prefix = 2 + label.len() as u16 + 2;
        let cursor_x = area.x + prefix + field.text[..field.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
    }
}

/// `[key] label` with a spinner appended while the action is in flight.
pub fn action_line(key: &str, label: &str, busy: bool, tick: u64) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("[{}] ", key), Theme::action_key()),
        Span::styled(label.to_string(), Theme::action_label()),
    ];
    if busy {
        spans.push(Span::styled(
            format!("  {}", crate::ui::spinner(tick)),
            Theme::action_busy(),
        ));
    }
    Line::from(spans)
}

/// Middle-ellipsize long identifiers (account ids, pool ids) to fit a panel.
pub fn shorten(id: &str, width: usize) -> String {
    if id.len() <= width {
        return id.to_string();
    }
    if width < 8 {
        return id.chars().take(width).collect();
    }
    let keep = (width - 1) / 2;
    format!("{}…{}", &id[..keep], &id[id.len() - keep..])
}
