use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " lumenpool ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));
    parts.push(Span::styled(
        " F1 Keypair | F2 Fund | F3 Create | F4 Withdraw | Tab Fields | PgUp/PgDn Log | Esc Quit ",
        Theme::status_bar(),
    ));

    let mut in_flight: Vec<&str> = Vec::new();
    if state.busy.fund_account {
        in_flight.push("funding");
    }
    if state.busy.create_pool {
        in_flight.push("creating pool");
    }
    if state.busy.withdraw {
        in_flight.push("withdrawing");
    }
    if !in_flight.is_empty() {
        parts.push(Span::styled(
            format!(
                " {} {} ",
                crate::ui::spinner(state.tick_count),
                in_flight.join(", ")
            ),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    // Pad to fill the rest of the bar
    let used: usize = parts.iter().map(|s| s.content.as_ref().width()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
