use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::AppState;
use crate::ui::form::{action_line, shorten};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Account ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match &state.keypair {
        Some(kp) => {
            lines.push(Line::from(Span::styled("Public key:", Theme::label())));
            lines.push(Line::from(Span::styled(
                shorten(&kp.public_key(), inner.width as usize),
                Theme::value(),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No keypair yet.",
                Theme::label(),
            )));
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(""));
    lines.push(action_line(
        "F1",
        "Generate Keypair",
        state.busy.generate_keypair,
        state.tick_count,
    ));
    lines.push(action_line(
        "F2",
        "Fund Account",
        state.busy.fund_account,
        state.tick_count,
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
