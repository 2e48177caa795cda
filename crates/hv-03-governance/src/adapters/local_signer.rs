//! Local-key personal_sign.
//!
//! Signs `keccak256("\x19Ethereum Signed Message:\n" || len || message)` with
//! a secp256k1 key and encodes the result as `0x || r || s || v`, `v = 27 + recid`.

use async_trait::async_trait;
use k256::ecdsa::SigningKey;
use shared_types::{keccak256, Address};

use crate::domain::GovernanceError;
use crate::ports::MessageSigner;

/// EIP-191 prefixed hash of `message`.
pub fn personal_message_hash(message: &str) -> [u8; 32] {
    let mut data = format!("\x19Ethereum Signed Message:\n{}", message.len()).into_bytes();
    data.extend_from_slice(message.as_bytes());
    keccak256(&data)
}

/// Signer holding a private key in process.
pub struct LocalKeySigner {
    key: SigningKey,
    address: Address,
}

impl LocalKeySigner {
    /// Signer from raw secret key bytes.
    pub fn from_bytes(secret: [u8; 32]) -> Result<Self, GovernanceError> {
        let key = SigningKey::from_bytes((&secret).into()).map_err(|_| GovernanceError::InvalidKey)?;
        let address = address_of(&key);
        Ok(Self { key, address })
    }

    /// Signer from a hex secret, with or without `0x`.
    pub fn from_hex(secret: &str) -> Result<Self, GovernanceError> {
        let digits = secret.strip_prefix("0x").unwrap_or(secret);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| GovernanceError::InvalidKey)?;
        Self::from_bytes(bytes)
    }

    /// Raw 65-byte signature over the personal message hash.
    pub fn sign_bytes(&self, message: &str) -> Result<[u8; 65], GovernanceError> {
        let hash = personal_message_hash(message);
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(&hash)
            .map_err(|e| GovernanceError::SignatureRejected(e.to_string()))?;

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.to_bytes());
        out[64] = recid.to_byte() + 27;
        Ok(out)
    }
}

fn address_of(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    // Skip the 0x04 prefix
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address::new(bytes)
}

#[async_trait]
impl MessageSigner for LocalKeySigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String, GovernanceError> {
        let sig = self.sign_bytes(message)?;
        Ok(format!("0x{}", hex::encode(sig)))
    }
}
