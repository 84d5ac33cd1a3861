use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::stellar::strkey;

/// An ed25519 account identity and signing credential.
#[derive(Clone)]
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    /// Generate a fresh random keypair.
    pub fn random() -> Self {
        let mut csprng = OsRng;
        Self {
            signing: SigningKey::generate(&mut csprng),
        }
    }

    /// The account id in strkey form (`G...`).
    pub fn public_key(&self) -> String {
        strkey::encode_account_id(&self.public_bytes())
    }

    pub fn public_bytes(&self) -> [u8; 32] {
        self.signing.verifying_key().to_bytes()
    }

    /// Last four bytes of the public key; identifies the signer on the wire.
    pub fn signature_hint(&self) -> [u8; 4] {
        let pk = self.public_bytes();
        [pk[28], pk[29], pk[30], pk[31]]
    }

    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }
}

// The secret half never leaves this struct, not even through Debug.
impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Signature;

    #[test]
    fn test_random_yields_distinct_account_ids() {
        let a = Keypair::random();
        let b = Keypair::random();
        assert_ne!(a.public_key(), b.public_key());
        assert_eq!(a.public_key().len(), 56);
        assert!(a.public_key().starts_with('G'));
    }

    #[test]
    fn test_signatures_verify() {
        let kp = Keypair::random();
        let message = b"pool deposit payload";
        let sig = Signature::from_bytes(&kp.sign(message));
        assert!(kp.verifying_key().verify_strict(message, &sig).is_ok());
    }

    #[test]
    fn test_hint_is_public_key_tail() {
        let kp = Keypair::random();
        assert_eq!(&kp.signature_hint()[..], &kp.public_bytes()[28..32]);
    }
}
