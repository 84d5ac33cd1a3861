//! Assets, constant-product pool parameters, and pool-id derivation.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::stellar::xdr::XdrWriter;
use crate::stellar::{strkey, Error};

/// A Stellar asset: the native lumen or an issued credit asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Native,
    CreditAlphanum4 { code: String, issuer: [u8; 32] },
    CreditAlphanum12 { code: String, issuer: [u8; 32] },
}

impl Asset {
    pub fn native() -> Self {
        Asset::Native
    }

    /// Build an issued asset from a code and the issuer's `G...` account id.
    /// Codes of four characters or fewer take the short wire form.
    pub fn new(code: &str, issuer: &str) -> Result<Self, Error> {
        if code.is_empty() || code.len() > 12 || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidAssetCode(code.to_string()));
        }
        let issuer = strkey::decode_account_id(issuer)?;
        if code.len() <= 4 {
            Ok(Asset::CreditAlphanum4 {
                code: code.to_string(),
                issuer,
            })
        } else {
            Ok(Asset::CreditAlphanum12 {
                code: code.to_string(),
                issuer,
            })
        }
    }

    pub(crate) fn write_xdr(&self, w: &mut XdrWriter) {
        match self {
            Asset::Native => w.put_u32(0),
            Asset::CreditAlphanum4 { code, issuer } => {
                w.put_u32(1);
                w.put_fixed_str(code, 4);
                write_account_id(w, issuer);
            }
            Asset::CreditAlphanum12 { code, issuer } => {
                w.put_u32(2);
                w.put_fixed_str(code, 12);
                write_account_id(w, issuer);
            }
        }
    }
}

fn write_account_id(w: &mut XdrWriter, key: &[u8; 32]) {
    // PUBLIC_KEY_TYPE_ED25519
    w.put_u32(0);
    w.put_bytes(key);
}

/// Constant-product pool parameters pairing two assets at a fixed fee.
/// The network requires the pair in canonical order; callers put the native
/// asset first, which always satisfies it.
#[derive(Debug, Clone)]
pub struct LiquidityPoolAsset {
    pub asset_a: Asset,
    pub asset_b: Asset,
    pub fee: i32,
}

impl LiquidityPoolAsset {
    pub fn new(asset_a: Asset, asset_b: Asset, fee: i32) -> Self {
        Self {
            asset_a,
            asset_b,
            fee,
        }
    }

    /// XDR of the LiquidityPoolParameters union, constant-product arm.
    pub(crate) fn write_parameters_xdr(&self, w: &mut XdrWriter) {
        // LIQUIDITY_POOL_CONSTANT_PRODUCT
        w.put_u32(0);
        self.asset_a.write_xdr(w);
        self.asset_b.write_xdr(w);
        w.put_i32(self.fee);
    }

    /// Deterministic pool id: the SHA-256 of the pool parameters' XDR.
    pub fn pool_id(&self) -> PoolId {
        let mut w = XdrWriter::new();
        self.write_parameters_xdr(&mut w);
        PoolId(Sha256::digest(w.as_bytes()).into())
    }
}

/// A derived liquidity pool identifier, shown to users as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolId(pub [u8; 32]);

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl PoolId {
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidPoolId(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 64 {
            return Err(invalid());
        }
        let mut id = [0u8; 32];
        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            let hi = hex_val(pair[0]).ok_or_else(invalid)?;
            let lo = hex_val(pair[1]).ok_or_else(invalid)?;
            id[i] = (hi << 4) | lo;
        }
        Ok(PoolId(id))
    }

    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for b in self.0 {
            s.push(HEX_DIGITS[(b >> 4) as usize] as char);
            s.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
        }
        s
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stellar::{Keypair, LIQUIDITY_POOL_FEE};

    #[test]
    fn test_asset_code_length_picks_wire_form() {
        let issuer = Keypair::random().public_key();
        assert!(matches!(
            Asset::new("USD", &issuer).unwrap(),
            Asset::CreditAlphanum4 { .. }
        ));
        assert!(matches!(
            Asset::new("LONGASSET", &issuer).unwrap(),
            Asset::CreditAlphanum12 { .. }
        ));
    }

    #[test]
    fn test_asset_rejects_bad_codes_and_issuers() {
        let issuer = Keypair::random().public_key();
        assert!(Asset::new("", &issuer).is_err());
        assert!(Asset::new("THIRTEENCHARS", &issuer).is_err());
        assert!(Asset::new("US-D", &issuer).is_err());
        assert!(Asset::new("USD", "GNOTAKEY").is_err());
    }

    #[test]
    fn test_pool_id_is_deterministic_and_parameter_sensitive() {
        let issuer = Keypair::random().public_key();
        let custom = Asset::new("POOL", &issuer).unwrap();
        let a = LiquidityPoolAsset::new(Asset::native(), custom.clone(), LIQUIDITY_POOL_FEE);
        let b = LiquidityPoolAsset::new(Asset::native(), custom.clone(), LIQUIDITY_POOL_FEE);
        assert_eq!(a.pool_id(), b.pool_id());

        let other_fee = LiquidityPoolAsset::new(Asset::native(), custom, LIQUIDITY_POOL_FEE + 1);
        assert_ne!(a.pool_id(), other_fee.pool_id());
    }

    #[test]
    fn test_pool_id_hex_round_trip() {
        let issuer = Keypair::random().public_key();
        let custom = Asset::new("XY", &issuer).unwrap();
        let id = LiquidityPoolAsset::new(Asset::native(), custom, LIQUIDITY_POOL_FEE).pool_id();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(PoolId::from_hex(&hex).unwrap(), id);
        assert!(PoolId::from_hex("abc").is_err());
        assert!(PoolId::from_hex(&"zz".repeat(32)).is_err());
    }
}
