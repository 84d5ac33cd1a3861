use chrono::Local;

use crate::stellar::Keypair;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Error,
}

/// One line in the session log pane.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp: String,
    pub text: String,
    pub kind: LogKind,
}

/// Append-only session log. Lines are never dropped or reordered; the pane
/// scrolls instead.
#[derive(Debug, Default)]
pub struct LogBuffer {
    pub lines: Vec<LogLine>,
    /// Distance from the tail; zero follows new lines.
    pub scroll_offset: usize,
}

impl LogBuffer {
    pub fn append(&mut self, kind: LogKind, text: String) {
        self.lines.push(LogLine {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            text,
            kind,
        });
    }

    pub fn scroll_up(&mut self, n: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + n).min(max);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }
}

/// A single-line text field: raw text plus a byte-offset cursor. No parsing
/// or validation happens here; strings go to the transaction layer as typed.
#[derive(Debug, Default)]
pub struct Field {
    pub text: String,
    pub cursor: usize,
}

impl Field {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// The four user-triggered operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    GenerateKeypair,
    FundAccount,
    CreatePool,
    Withdraw,
}

/// Independent in-flight flag per action. The handler refuses to restart an
/// action whose flag is set; other actions proceed and interleave freely.
#[derive(Debug, Default)]
pub struct BusyFlags {
    pub generate_keypair: bool,
    pub fund_account: bool,
    pub create_pool: bool,
    pub withdraw: bool,
}

impl BusyFlags {
    pub fn is_busy(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::GenerateKeypair => self.generate_keypair,
            ActionKind::FundAccount => self.fund_account,
            ActionKind::CreatePool => self.create_pool,
            ActionKind::Withdraw => self.withdraw,
        }
    }

    pub fn set(&mut self, kind: ActionKind, busy: bool) {
        match kind {
            ActionKind::GenerateKeypair => self.generate_keypair = busy,
            ActionKind::FundAccount => self.fund_account = busy,
            ActionKind::CreatePool => self.create_pool = busy,
            ActionKind::Withdraw => self.withdraw = busy,
        }
    }

    pub fn any(&self) -> bool {
        self.generate_keypair || self.fund_account || self.create_pool || self.withdraw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    AssetName,
    TokenAAmount,
    TokenBAmount,
    WithdrawAmount,
}

pub struct AppState {
    pub keypair: Option<Keypair>,
    /// Lowercase hex, set once derivation succeeds during pool creation.
    pub pool_id: Option<String>,
    pub asset_name: Field,
    pub token_a_amount: Field,
    pub token_b_amount: Field,
    pub withdraw_amount: Field,
    pub log: LogBuffer,
    pub busy: BusyFlags,
    pub focus: FocusField,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            keypair: None,
            pool_id: None,
            asset_name: Field::default(),
            token_a_amount: Field::default(),
            token_b_amount: Field::default(),
            withdraw_amount: Field::default(),
            log: LogBuffer::default(),
            busy: BusyFlags::default(),
            focus: FocusField::AssetName,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.log.append(LogKind::Info, text.into());
        self.dirty = true;
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.log.append(LogKind::Success, text.into());
        self.dirty = true;
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.log.append(LogKind::Error, text.into());
        self.dirty = true;
    }

    pub fn focused_field_mut(&mut self) -> &mut Field {
        match self.focus {
            FocusField::AssetName => &mut self.asset_name,
            FocusField::TokenAAmount => &mut self.token_a_amount,
            FocusField::TokenBAmount => &mut self.token_b_amount,
            FocusField::WithdrawAmount => &mut self.withdraw_amount,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusField::AssetName => FocusField::TokenAAmount,
            FocusField::TokenAAmount => FocusField::TokenBAmount,
            FocusField::TokenBAmount => FocusField::WithdrawAmount,
            FocusField::WithdrawAmount => FocusField::AssetName,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusField::AssetName => FocusField::WithdrawAmount,
            FocusField::TokenAAmount => FocusField::AssetName,
            FocusField::TokenBAmount => FocusField::TokenAAmount,
            FocusField::WithdrawAmount => FocusField::TokenBAmount,
        };
        self.dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
