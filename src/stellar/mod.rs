pub mod amount;
pub mod asset;
pub mod keypair;
pub mod strkey;
pub mod tx;
pub mod xdr;

pub use asset::{Asset, LiquidityPoolAsset, PoolId};
pub use keypair::Keypair;
pub use tx::{Operation, TransactionBuilder};

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Passphrase of the Stellar test network; its hash salts every signature.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Minimum network fee per operation, in stroops.
pub const BASE_FEE: u32 = 100;

/// Fee taken by constant-product pools, in basis points.
pub const LIQUIDITY_POOL_FEE: i32 = 30;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid asset code {0:?}: expected 1-12 alphanumeric characters")]
    InvalidAssetCode(String),
    #[error("invalid account id {0:?}")]
    InvalidAccountId(String),
    #[error("invalid amount {0:?}: expected a positive number with at most 7 decimal places")]
    InvalidAmount(String),
    #[error("invalid liquidity pool id {0:?}")]
    InvalidPoolId(String),
}

/// Network id used in signature payloads: the SHA-256 of the passphrase.
pub fn network_id() -> [u8; 32] {
    Sha256::digest(TESTNET_PASSPHRASE.as_bytes()).into()
}
