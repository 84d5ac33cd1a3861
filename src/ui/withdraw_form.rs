use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{AppState, FocusField};
use crate::ui::form::{action_line, render_field, shorten};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusField::WithdrawAmount;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Withdraw from Pool ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(inner);

    render_field(
        frame,
        rows[0],
        "Withdrawal Amount",
        &state.withdraw_amount,
        focused,
    );

    let pool_line = match &state.pool_id {
        Some(id) => Line::from(vec![
            Span::styled("Pool ID: ", Theme::label()),
            Span::styled(
                shorten(id, (inner.width as usize).saturating_sub(9)),
                Theme::pool_id(),
            ),
        ]),
        None => Line::from(Span::styled(
            "Pool ID: (create a pool first)",
            Theme::label(),
        )),
    };
    frame.render_widget(Paragraph::new(pool_line), rows[2]);

    frame.render_widget(
        Paragraph::new(action_line(
            "F4",
            "Withdraw from Pool",
            state.busy.withdraw,
            state.tick_count,
        )),
        rows[4],
    );
}
