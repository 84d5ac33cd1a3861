use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub account_panel: Rect,
    pub deposit_form: Rect,
    pub withdraw_form: Rect,
    pub log_pane: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: panels | log | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Action panels
            Constraint::Min(5),     // Log
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let panels = main_chunks[0];
    let log_pane = main_chunks[1];
    let status_bar = main_chunks[2];

    // Three side-by-side panels, mirroring the three action groups
    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(panels);

    AppLayout {
        account_panel: panel_chunks[0],
        deposit_form: panel_chunks[1],
        withdraw_form: panel_chunks[2],
        log_pane,
        status_bar,
    }
}
