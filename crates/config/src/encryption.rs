//! Field-level encryption for configuration values.
//!
//! Responsibilities:
//! - Encrypt individual string values with AES-256-CBC (PKCS#7 padding).
//! - Encode ciphertext as `ENC:` + base64(IV || ciphertext).
//! - Detect and decrypt values carrying the `ENC:` marker.
//! - Derive the 32-byte key from the configured secret.
//!
//! Does NOT handle:
//! - Walking configuration trees (see `store.rs` and `merge.rs`).
//! - Reading the secret from the environment (see `loader`).
//!
//! Invariants:
//! - Encrypting an already-marked value is a no-op.
//! - Decrypting an unmarked value returns it unchanged.
//! - Every encryption uses a fresh random IV.
//! - Errors never include key bytes or plaintext.
//!
//! The key is the secret's UTF-8 bytes truncated or space-padded to 32 bytes.
//! This is not a KDF: secrets sharing a 32-byte prefix share a key.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngExt;
use secrecy::{ExposeSecret, SecretBox, SecretString};
use thiserror::Error;

use crate::constants::{ENCRYPTED_PREFIX, IV_LEN, KEY_LEN, KEY_PAD_BYTE};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Errors that can occur during encryption operations.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Invalid encrypted value format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, EncryptionError>;

/// Returns true if `value` carries the encrypted-value marker.
pub fn is_encrypted(value: &str) -> bool {
    value.starts_with(ENCRYPTED_PREFIX)
}

/// Symmetric codec for individual configuration values.
#[derive(Debug)]
pub struct ValueCodec {
    key: SecretBox<[u8; KEY_LEN]>,
}

impl ValueCodec {
    /// Creates a codec whose key is derived from `secret`.
    pub fn new(secret: &SecretString) -> Self {
        let key = derive_key(secret.expose_secret());
        Self {
            key: SecretBox::new(Box::new(key)),
        }
    }

    /// Encrypts a plaintext value.
    ///
    /// Values that already carry the marker, and empty strings, are returned
    /// unchanged.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        if plaintext.is_empty() || is_encrypted(plaintext) {
            return Ok(plaintext.to_string());
        }

        let mut iv = [0u8; IV_LEN];
        rand::rng().fill(&mut iv);
        let cipher = Aes256CbcEnc::new_from_slices(self.key.expose_secret(), &iv)
            .map_err(|e| EncryptionError::EncryptionFailed(e.to_string()))?;
        let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut payload = Vec::with_capacity(IV_LEN + ciphertext.len());
        payload.extend_from_slice(&iv);
        payload.extend_from_slice(&ciphertext);

        Ok(format!("{}{}", ENCRYPTED_PREFIX, STANDARD.encode(payload)))
    }

    /// Decrypts a marked value; unmarked values pass through unchanged.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the payload is not base64 or is shorter than
    /// the IV, and `DecryptionFailed` if the padding check fails (wrong key or
    /// corrupted data) or the plaintext is not UTF-8.
    pub fn decrypt(&self, value: &str) -> Result<String> {
        let Some(encoded) = value.strip_prefix(ENCRYPTED_PREFIX) else {
            return Ok(value.to_string());
        };

        let payload = STANDARD
            .decode(encoded)
            .map_err(|e| EncryptionError::InvalidFormat(e.to_string()))?;
        if payload.len() < IV_LEN {
            return Err(EncryptionError::InvalidFormat(format!(
                "payload is {} bytes, expected at least {}",
                payload.len(),
                IV_LEN
            )));
        }

        let (iv, ciphertext) = payload.split_at(IV_LEN);
        let cipher = Aes256CbcDec::new_from_slices(self.key.expose_secret(), iv)
            .map_err(|e| EncryptionError::DecryptionFailed(e.to_string()))?;
        let plaintext = cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| {
                EncryptionError::DecryptionFailed(
                    "padding check failed (wrong key or corrupted value)".to_string(),
                )
            })?;

        String::from_utf8(plaintext).map_err(|_| {
            EncryptionError::DecryptionFailed("decrypted bytes are not valid UTF-8".to_string())
        })
    }
}

/// Truncates or right-pads the secret to exactly [`KEY_LEN`] bytes.
fn derive_key(secret: &str) -> [u8; KEY_LEN] {
    let mut key = [KEY_PAD_BYTE; KEY_LEN];
    let bytes = secret.as_bytes();
    let len = bytes.len().min(KEY_LEN);
    key[..len].copy_from_slice(&bytes[..len]);
    key
}
