use crate::stellar::Keypair;

/// Work the event loop hands to the network manager. Keypair generation is
/// purely local and never becomes an action.
#[derive(Debug)]
pub enum Action {
    FundAccount {
        public_key: String,
    },
    CreateLiquidityPool {
        keypair: Keypair,
        asset_name: String,
        token_a_amount: String,
        token_b_amount: String,
    },
    WithdrawFromPool {
        keypair: Keypair,
        pool_id: String,
        amount: String,
    },
    Quit,
}
