use crossterm::event::Event as CrosstermEvent;

/// Result of a single faucet attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundOutcome {
    /// The faucet answered 2xx.
    Funded,
    /// The faucet answered, but not with success.
    Rejected,
    /// The request never completed.
    Failed(String),
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Faucet call finished
    FundCompleted {
        public_key: String,
        outcome: FundOutcome,
    },

    /// Pool id derived during pool creation; arrives before submission, so
    /// the session keeps the id even when the transaction later fails.
    PoolIdDerived { pool_id: String },

    /// Pool creation transaction finished; `Ok` carries the hash.
    PoolCreateCompleted { result: Result<String, String> },

    /// Withdrawal transaction finished; `Ok` carries the hash.
    WithdrawCompleted { result: Result<String, String> },

    /// Tick for UI refresh
    Tick,
}
