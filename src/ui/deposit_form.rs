use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{AppState, FocusField};
use crate::ui::form::{action_line, render_field};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(
        state.focus,
        FocusField::AssetName | FocusField::TokenAAmount | FocusField::TokenBAmount
    );
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Create Liquidity Pool ")
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
        "Asset Name",
        &state.asset_name,
        state.focus == FocusField::AssetName,
    );
    render_field(
        frame,
        rows[1],
        "Token A Amount",
        &state.token_a_amount,
        state.focus == FocusField::TokenAAmount,
    );
    render_field(
        frame,
        rows[2],
        "Token B Amount",
        &state.token_b_amount,
        state.focus == FocusField::TokenBAmount,
    );
    frame.render_widget(
        Paragraph::new(action_line(
            "F3",
            "Create Liquidity Pool",
            state.busy.create_pool,
            state.tick_count,
        )),
        rows[4],
    );
}
