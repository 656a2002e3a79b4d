use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

use crate::cipher::Keystream;

/// User agent mixed into the payload when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

/// Character source for nonces. Only positions `0..NONCE_SPAN` are ever
/// drawn; the repeats give individual characters different weights, and that
/// skew is part of the token format — do not deduplicate.
pub const NONCE_SOURCE: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef6789abcdef789abcdef6789abcdef";

/// Number of leading positions of [`NONCE_SOURCE`] that are sampled.
pub const NONCE_SPAN: usize = 62;

/// Nonce length in characters. The nonce doubles as the cipher key and is
/// appended to the token in cleartext.
pub const NONCE_LEN: usize = 16;

/// A generated fingerprint token with the inputs that shaped it.
#[derive(Debug, Clone)]
pub struct Token {
    /// Wire value: lowercase hex of the obfuscated payload, nonce appended.
    pub token: String,
    /// Epoch milliseconds baked into the payload.
    pub timestamp: u64,
    /// The 16-character key transmitted as the token suffix.
    pub nonce: String,
}

#[derive(Debug, Default)]
pub struct TokenBuilder {
    user_agent: Option<String>,
}

impl TokenBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Generate a token from the platform clock and random source.
    pub fn generate(self) -> Result<Token, super::Error> {
        let timestamp = epoch_millis()?;
        self.generate_with(&mut nonce_rng(), timestamp)
    }

    /// Generate with caller-supplied randomness and timestamp. Every call
    /// builds its own table; nothing is shared or reused across calls.
    pub fn generate_with<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        timestamp: u64,
    ) -> Result<Token, super::Error> {
        let nonce = sample_nonce(rng);
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let payload = format!("{user_agent}{timestamp}");
        let ciphertext = Keystream::new(nonce.as_bytes())?.apply(payload.as_bytes());
        Ok(Token {
            token: hex::encode(ciphertext) + &nonce,
            timestamp,
            nonce,
        })
    }
}

/// Split a token and undo the payload obfuscation with the cleartext nonce
/// suffix. The cipher is XOR-based, so recovery is a second pass over a
/// keystream rebuilt from the same key.
pub fn recover_payload(token: &str) -> Result<String, super::Error> {
    let split = token
        .len()
        .checked_sub(NONCE_LEN)
        .filter(|&at| token.is_char_boundary(at))
        .ok_or(super::Error::Truncated(token.len()))?;
    let (body, nonce) = token.split_at(split);
    let ciphertext = hex::decode(body)?;
    let payload = Keystream::new(nonce.as_bytes())?.apply(&ciphertext);
    Ok(String::from_utf8(payload)?)
}

fn sample_nonce<R: Rng + ?Sized>(rng: &mut R) -> String {
    let source = NONCE_SOURCE.as_bytes();
    (0..NONCE_LEN)
        .map(|_| source[rng.random_range(0..NONCE_SPAN)] as char)
        .collect()
}

fn epoch_millis() -> Result<u64, super::Error> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .map_err(|_| super::Error::Clock)
}

/// Seed from the operating system when possible. Nonces only need to vary
/// between calls, so a failed OS source degrades to a clock seed instead of
/// failing token generation.
fn nonce_rng() -> StdRng {
    let mut seed = [0u8; 32];
    match OsRng.try_fill_bytes(&mut seed) {
        Ok(()) => StdRng::from_seed(seed),
        Err(_) => StdRng::seed_from_u64(epoch_millis().unwrap_or(0)),
    }
}
