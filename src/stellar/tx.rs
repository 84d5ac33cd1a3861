//! Transaction building and signing.
//!
//! Produces the v1 transaction wire form: one source account, a fee scaled
//! by operation count, a time-bounded validity window, and the operation
//! bodies this client composes (change-trust, pool deposit, pool withdraw).

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::stellar::asset::{LiquidityPoolAsset, PoolId};
use crate::stellar::xdr::XdrWriter;
use crate::stellar::{network_id, Keypair, BASE_FEE};

const ENVELOPE_TYPE_TX: u32 = 2;

// OperationType wire discriminants.
const OP_CHANGE_TRUST: u32 = 6;
const OP_LIQUIDITY_POOL_DEPOSIT: u32 = 22;
const OP_LIQUIDITY_POOL_WITHDRAW: u32 = 23;

// ChangeTrustAsset arm for pool shares.
const ASSET_TYPE_POOL_SHARE: u32 = 3;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Establish a trust line in a pool-share asset, up to `limit` stroops.
    ChangeTrust { line: LiquidityPoolAsset, limit: i64 },
    /// Deposit into a pool, bounded by the two amounts and a price band.
    LiquidityPoolDeposit {
        pool_id: PoolId,
        max_amount_a: i64,
        max_amount_b: i64,
        min_price: (i32, i32),
        max_price: (i32, i32),
    },
    /// Burn pool shares in exchange for the underlying assets.
    LiquidityPoolWithdraw {
        pool_id: PoolId,
        amount: i64,
        min_amount_a: i64,
        min_amount_b: i64,
    },
}

impl Operation {
    fn write_xdr(&self, w: &mut XdrWriter) {
        // No per-operation source account; the transaction source signs.
        w.put_u32(0);
        match self {
            Operation::ChangeTrust { line, limit } => {
                w.put_u32(OP_CHANGE_TRUST);
                w.put_u32(ASSET_TYPE_POOL_SHARE);
                line.write_parameters_xdr(w);
                w.put_i64(*limit);
            }
            Operation::LiquidityPoolDeposit {
                pool_id,
                max_amount_a,
                max_amount_b,
                min_price,
                max_price,
            } => {
                w.put_u32(OP_LIQUIDITY_POOL_DEPOSIT);
                w.put_bytes(&pool_id.0);
                w.put_i64(*max_amount_a);
                w.put_i64(*max_amount_b);
                w.put_i32(min_price.0);
                w.put_i32(min_price.1);
                w.put_i32(max_price.0);
                w.put_i32(max_price.1);
            }
            Operation::LiquidityPoolWithdraw {
                pool_id,
                amount,
                min_amount_a,
                min_amount_b,
            } => {
                w.put_u32(OP_LIQUIDITY_POOL_WITHDRAW);
                w.put_bytes(&pool_id.0);
                w.put_i64(*amount);
                w.put_i64(*min_amount_a);
                w.put_i64(*min_amount_b);
            }
        }
    }
}

/// Builds one transaction for a source account at its next sequence number.
#[derive(Debug)]
pub struct TransactionBuilder {
    source: [u8; 32],
    sequence: i64,
    operations: Vec<Operation>,
    timeout_secs: u64,
}

impl TransactionBuilder {
    /// `current_sequence` is the account's sequence as reported by the
    /// network; the transaction consumes the next one.
    pub fn new(source: [u8; 32], current_sequence: i64) -> Self {
        Self {
            source,
            sequence: current_sequence + 1,
            operations: Vec::new(),
            timeout_secs: 0,
        }
    }

    pub fn add_operation(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    /// Expire the transaction this many seconds from now.
    pub fn set_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Transaction {
        let max_time = if self.timeout_secs == 0 {
            0
        } else {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            now + self.timeout_secs
        };
        Transaction {
            source: self.source,
            fee: BASE_FEE * self.operations.len() as u32,
            sequence: self.sequence,
            min_time: 0,
            max_time,
            operations: self.operations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    source: [u8; 32],
    pub fee: u32,
    pub sequence: i64,
    min_time: u64,
    max_time: u64,
    operations: Vec<Operation>,
}

impl Transaction {
    fn write_xdr(&self, w: &mut XdrWriter) {
        // MuxedAccount, KEY_TYPE_ED25519 arm
        w.put_u32(0);
        w.put_bytes(&self.source);
        w.put_u32(self.fee);
        w.put_i64(self.sequence);
        // Preconditions: PRECOND_TIME carrying the validity window
        w.put_u32(1);
        w.put_u64(self.min_time);
        w.put_u64(self.max_time);
        // MEMO_NONE
        w.put_u32(0);
        w.put_u32(self.operations.len() as u32);
        for op in &self.operations {
            op.write_xdr(w);
        }
        // ext
        w.put_u32(0);
    }

    /// The hash a signature must cover: SHA-256 over the network id and the
    /// tagged transaction body.
    pub fn signature_payload_hash(&self) -> [u8; 32] {
        let mut w = XdrWriter::new();
        w.put_bytes(&network_id());
        w.put_u32(ENVELOPE_TYPE_TX);
        self.write_xdr(&mut w);
        Sha256::digest(w.as_bytes()).into()
    }

    /// Sign with the keypair, yielding an envelope ready for submission.
    pub fn sign(&self, keypair: &Keypair) -> SignedTransaction {
        let hash = self.signature_payload_hash();
        SignedTransaction {
            tx: self.clone(),
            hint: keypair.signature_hint(),
            signature: keypair.sign(&hash),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignedTransaction {
    tx: Transaction,
    hint: [u8; 4],
    signature: [u8; 64],
}

impl SignedTransaction {
    pub fn to_envelope_xdr(&self) -> Vec<u8> {
        let mut w = XdrWriter::new();
        w.put_u32(ENVELOPE_TYPE_TX);
        self.tx.write_xdr(&mut w);
        // One decorated signature: hint plus the signature bytes.
        w.put_u32(1);
        w.put_bytes(&self.hint);
        w.put_var_bytes(&self.signature);
        w.into_bytes()
    }

    pub fn to_envelope_base64(&self) -> String {
        STANDARD.encode(self.to_envelope_xdr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stellar::{Asset, LIQUIDITY_POOL_FEE};
    use ed25519_dalek::Signature;

    fn deposit_transaction(kp: &Keypair) -> (Transaction, PoolId) {
        let custom = Asset::new("POOL", &kp.public_key()).unwrap();
        let line = LiquidityPoolAsset::new(Asset::native(), custom, LIQUIDITY_POOL_FEE);
        let pool_id = line.pool_id();
        let tx = TransactionBuilder::new(kp.public_bytes(), 41)
            .add_operation(Operation::ChangeTrust {
                line,
                limit: i64::MAX,
            })
            .add_operation(Operation::LiquidityPoolDeposit {
                pool_id,
                max_amount_a: 1_000_000_000,
                max_amount_b: 500_000_000,
                min_price: (1, 1),
                max_price: (1, 1),
            })
            .set_timeout(30)
            .build();
        (tx, pool_id)
    }

    #[test]
    fn test_fee_scales_with_operation_count() {
        let kp = Keypair::random();
        let (tx, _) = deposit_transaction(&kp);
        assert_eq!(tx.fee, 2 * BASE_FEE);
        assert_eq!(tx.sequence, 42);
    }

    #[test]
    fn test_envelope_layout() {
        let kp = Keypair::random();
        let (tx, pool_id) = deposit_transaction(&kp);
        let env = tx.sign(&kp).to_envelope_xdr();

        // ENVELOPE_TYPE_TX, then the ed25519 source account.
        assert_eq!(&env[0..4], [0, 0, 0, 2]);
        assert_eq!(&env[4..8], [0, 0, 0, 0]);
        assert_eq!(&env[8..40], kp.public_bytes());
        // Fee for two operations at the base fee.
        assert_eq!(&env[40..44], (2 * BASE_FEE).to_be_bytes());
        assert_eq!(&env[44..52], 42_i64.to_be_bytes());
        // Two operations: change-trust then pool deposit.
        assert_eq!(&env[76..80], [0, 0, 0, 2]);
        assert_eq!(&env[84..88], OP_CHANGE_TRUST.to_be_bytes());
        assert_eq!(&env[88..92], ASSET_TYPE_POOL_SHARE.to_be_bytes());
        assert_eq!(&env[160..164], OP_LIQUIDITY_POOL_DEPOSIT.to_be_bytes());
        assert_eq!(&env[164..196], pool_id.0);
        // One decorated signature hinted by the public key tail.
        assert_eq!(&env[232..236], [0, 0, 0, 1]);
        assert_eq!(&env[236..240], kp.signature_hint());
        assert_eq!(&env[240..244], 64_u32.to_be_bytes());
        assert_eq!(env.len(), 308);
    }

    #[test]
    fn test_signature_covers_payload_hash() {
        let kp = Keypair::random();
        let (tx, _) = deposit_transaction(&kp);
        let signed = tx.sign(&kp);
        let sig = Signature::from_bytes(&signed.signature);
        assert!(kp
            .verifying_key()
            .verify_strict(&tx.signature_payload_hash(), &sig)
            .is_ok());
    }

    #[test]
    fn test_validity_window_is_time_bounded() {
        let kp = Keypair::random();
        let (tx, _) = deposit_transaction(&kp);
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(tx.min_time, 0);
        assert!(tx.max_time >= now && tx.max_time <= now + 31);
    }
}
