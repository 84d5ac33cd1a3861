use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::event::{AppEvent, FundOutcome};
use crate::app::state::{ActionKind, AppState, FocusField};
use crate::stellar::Keypair;

const EXPLORER_TX_BASE_URL: &str = "https://stellar.expert/explorer/testnet/tx";

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::FundCompleted {
            public_key,
            outcome,
        } => {
            match outcome {
                FundOutcome::Funded => {
                    state.success(format!("Account {} successfully funded.", public_key))
                }
                FundOutcome::Rejected => {
                    state.error(format!(
                        "Something went wrong funding account: {}.",
                        public_key
                    ));
                }
                FundOutcome::Failed(message) => {
                    state.error(format!(
                        "Error funding account {}: {}",
                        public_key, message
                    ));
                }
            }
            state.busy.set(ActionKind::FundAccount, false);
            vec![]
        }
        AppEvent::PoolIdDerived { pool_id } => {
            state.pool_id = Some(pool_id);
            state.dirty = true;
            vec![]
        }
        AppEvent::PoolCreateCompleted { result } => {
            match result {
                Ok(hash) => state.success(format!(
                    "Liquidity Pool created. Transaction URL: {}/{}",
                    EXPLORER_TX_BASE_URL, hash
                )),
                Err(message) => state.error(format!("Error creating Liquidity Pool: {}", message)),
            }
            state.busy.set(ActionKind::CreatePool, false);
            vec![]
        }
        AppEvent::WithdrawCompleted { result } => {
            match result {
                Ok(hash) => state.success(format!(
                    "Withdrawal successful. Transaction URL: {}/{}",
                    EXPLORER_TX_BASE_URL, hash
                )),
                Err(message) => state.error(format!(
                    "Error withdrawing from Liquidity Pool: {}",
                    message
                )),
            }
            state.busy.set(ActionKind::Withdraw, false);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Spinners animate only while something is in flight.
            if state.busy.any() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::F(1) => trigger_generate_keypair(state),
        KeyCode::F(2) => trigger_fund_account(state),
        KeyCode::F(3) => trigger_create_pool(state),
        KeyCode::F(4) => trigger_withdraw(state),
        KeyCode::Enter => match state.focus {
            FocusField::AssetName | FocusField::TokenAAmount | FocusField::TokenBAmount => {
                trigger_create_pool(state)
            }
            FocusField::WithdrawAmount => trigger_withdraw(state),
        },
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::PageUp => {
            state.log.scroll_up(5);
            vec![]
        }
        KeyCode::PageDown => {
            state.log.scroll_down(5);
            vec![]
        }
        KeyCode::Left => {
            state.focused_field_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            state.focused_field_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            state.focused_field_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            state.focused_field_mut().move_end();
            vec![]
        }
        KeyCode::Backspace => {
            state.focused_field_mut().delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.focused_field_mut().delete_forward();
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.focused_field_mut().insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

/// Purely local: a new keypair replaces the old one unconditionally.
fn trigger_generate_keypair(state: &mut AppState) -> Vec<Action> {
    if state.busy.is_busy(ActionKind::GenerateKeypair) {
        return vec![];
    }
    state.busy.set(ActionKind::GenerateKeypair, true);
    let keypair = Keypair::random();
    state.info(format!(
        "Generated new keypair. Public key: {}",
        keypair.public_key()
    ));
    state.keypair = Some(keypair);
    state.busy.set(ActionKind::GenerateKeypair, false);
    vec![]
}

fn trigger_fund_account(state: &mut AppState) -> Vec<Action> {
    if state.busy.is_busy(ActionKind::FundAccount) {
        return vec![];
    }
    let Some(keypair) = &state.keypair else {
        state.info("Please generate a keypair first.");
        return vec![];
    };
    let public_key = keypair.public_key();
    state.busy.set(ActionKind::FundAccount, true);
    vec![Action::FundAccount { public_key }]
}

fn trigger_create_pool(state: &mut AppState) -> Vec<Action> {
    if state.busy.is_busy(ActionKind::CreatePool) {
        return vec![];
    }
    let asset_name = state.asset_name.text.clone();
    let token_a_amount = state.token_a_amount.text.clone();
    let token_b_amount = state.token_b_amount.text.clone();
    let keypair = match &state.keypair {
        Some(kp)
            if !asset_name.is_empty()
                && !token_a_amount.is_empty()
                && !token_b_amount.is_empty() =>
        {
            kp.clone()
        }
        _ => {
            state.info("Please ensure you have a keypair, asset name, and token amounts.");
            return vec![];
        }
    };
    state.busy.set(ActionKind::CreatePool, true);
    vec![Action::CreateLiquidityPool {
        keypair,
        asset_name,
        token_a_amount,
        token_b_amount,
    }]
}

fn trigger_withdraw(state: &mut AppState) -> Vec<Action> {
    if state.busy.is_busy(ActionKind::Withdraw) {
        return vec![];
    }
    let amount = state.withdraw_amount.text.clone();
    let (keypair, pool_id) = match (&state.keypair, &state.pool_id) {
        (Some(kp), Some(id)) if !amount.is_empty() => (kp.clone(), id.clone()),
        _ => {
            state.info(
                "Please ensure you have a keypair, liquidity pool ID, and withdrawal amount.",
            );
            return vec![];
        }
    };
    state.busy.set(ActionKind::Withdraw, true);
    vec![Action::WithdrawFromPool {
        keypair,
        pool_id,
        amount,
    }]
}
