mod account_panel;
mod deposit_form;
mod form;
mod layout;
mod log_pane;
mod status_bar;
mod theme;
mod withdraw_form;

use ratatui::prelude::*;

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    account_panel::render(frame, app_layout.account_panel, state);
    deposit_form::render(frame, app_layout.deposit_form, state);
    withdraw_form::render(frame, app_layout.withdraw_form, state);
    log_pane::render(frame, app_layout.log_pane, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Pick a spinner frame from the tick counter; ticks arrive at 20 Hz, so
/// halving keeps the animation readable.
pub(crate) fn spinner(tick: u64) -> char {
    SPINNER_FRAMES[(tick / 2) as usize % SPINNER_FRAMES.len()]
}
