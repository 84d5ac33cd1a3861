use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::app::state::{AppState, LogKind};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Log ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let lines = &state.log.lines;
    let visible = inner.height as usize;
    let end = lines.len().saturating_sub(state.log.scroll_offset);
    let start = end.saturating_sub(visible);

    let rendered: Vec<Line> = lines[start..end]
        .iter()
        .map(|l| {
            let style = match l.kind {
                LogKind::Info => Theme::info_message(),
                LogKind::Success => Theme::success_message(),
                LogKind::Error => Theme::error_message(),
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.timestamp), Theme::timestamp()),
                Span::styled(l.text.clone(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rendered), inner);

    if lines.len() > visible {
        let mut scrollbar_state =
            ScrollbarState::new(lines.len().saturating_sub(visible)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}
