//! Deterministic cipher doubles for CipherBench test suites.
//!
//! These are *measurement fixtures*, not cryptography: each double has a
//! predictable, easily reasoned-about effect on the metrics (keystream XOR
//! for exact avalanche counts, constant output for zero entropy, padded
//! blocks for variable-length ciphertexts, guaranteed failure for the
//! error path). Real providers live outside this workspace.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use bench_core::{CipherCapability, CipherResult};
use rand::RngCore;

/// Generates a pseudo-random corpus for tests and benches.
#[must_use]
pub fn random_corpus(len: usize) -> Vec<u8> {
    let mut corpus = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut corpus);
    corpus
}

/// Error returned by doubles that deliberately fail.
#[derive(Debug)]
pub struct DoubleFailure(&'static str);

impl fmt::Display for DoubleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DoubleFailure {}

/// XOR stream double: each byte is XORed with a position-dependent
/// keystream byte.
///
/// Involutive (`decrypt` == `encrypt`), length-preserving, and — because
/// the keystream is independent of the plaintext — it propagates exactly
/// the flipped input bits, so a single-bit flip yields an avalanche
/// distance of exactly 1.
#[derive(Debug, Clone)]
pub struct XorStreamCipher {
    name: String,
    key: Vec<u8>,
    key_bits: u32,
}

impl XorStreamCipher {
    /// Creates a double reporting the given key length.
    #[must_use]
    pub fn new(name: &str, key_bits: u32) -> Self {
        // Deterministic keystream seed derived from the declared key size.
        let key: Vec<u8> = (0..32u32)
            .map(|i| (i.wrapping_mul(97).wrapping_add(key_bits) & 0xFF) as u8)
            .collect();
        Self { name: name.to_string(), key, key_bits }
    }

    fn keystream_byte(&self, index: usize) -> u8 {
        let base = self.key[index % self.key.len()];
        base ^ ((index / self.key.len()) & 0xFF) as u8
    }

    fn apply(&self, data: &[u8]) -> Vec<u8> {
        data.iter().enumerate().map(|(i, &b)| b ^ self.keystream_byte(i)).collect()
    }
}

impl CipherCapability for XorStreamCipher {
    fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        Ok(self.apply(plaintext))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        Ok(self.apply(ciphertext))
    }

    fn key_length_bits(&self) -> u32 {
        self.key_bits
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Block-padding double: XOR keystream plus PKCS#7-style padding to a
/// 16-byte boundary, so ciphertexts are longer than plaintexts and two
/// inputs of different length produce different-length outputs. Exercises
/// the truncated Hamming comparison.
#[derive(Debug, Clone)]
pub struct PaddedBlockCipher {
    inner: XorStreamCipher,
}

/// Block size of [`PaddedBlockCipher`] in bytes.
pub const PAD_BLOCK: usize = 16;

impl PaddedBlockCipher {
    /// Creates a double reporting the given key length.
    #[must_use]
    pub fn new(name: &str, key_bits: u32) -> Self {
        Self { inner: XorStreamCipher::new(name, key_bits) }
    }
}

impl CipherCapability for PaddedBlockCipher {
    fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        let pad = PAD_BLOCK - (plaintext.len() % PAD_BLOCK);
        let mut padded = plaintext.to_vec();
        padded.resize(plaintext.len() + pad, (pad & 0xFF) as u8);
        Ok(self.inner.apply(&padded))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        let mut padded = self.inner.apply(ciphertext);
        let pad = usize::from(*padded.last().ok_or_else(|| DoubleFailure("empty ciphertext"))?);
        if pad == 0 || pad > PAD_BLOCK || pad > padded.len() {
            return Err(Box::new(DoubleFailure("invalid padding")));
        }
        padded.truncate(padded.len() - pad);
        Ok(padded)
    }

    fn key_length_bits(&self) -> u32 {
        self.inner.key_bits
    }

    fn name(&self) -> &str {
        &self.inner.name
    }
}

/// Constant-output double: every encryption returns the same repeated byte,
/// giving zero entropy and zero avalanche distance. Not invertible;
/// `decrypt` always fails.
#[derive(Debug, Clone)]
pub struct ConstantCipher {
    name: String,
    key_bits: u32,
}

impl ConstantCipher {
    /// Creates a double reporting the given key length.
    #[must_use]
    pub fn new(name: &str, key_bits: u32) -> Self {
        Self { name: name.to_string(), key_bits }
    }
}

impl CipherCapability for ConstantCipher {
    fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        Ok(vec![0xAA; plaintext.len()])
    }

    fn decrypt(&self, _ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        Err(Box::new(DoubleFailure("constant cipher is not invertible")))
    }

    fn key_length_bits(&self) -> u32 {
        self.key_bits
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Always-failing double for the exclusion path.
#[derive(Debug, Clone)]
pub struct FailingCipher {
    name: String,
}

impl FailingCipher {
    /// Creates a double with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl CipherCapability for FailingCipher {
    fn encrypt(&self, _plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        Err(Box::new(DoubleFailure("provider rejected the operation")))
    }

    fn decrypt(&self, _ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        Err(Box::new(DoubleFailure("provider rejected the operation")))
    }

    fn key_length_bits(&self) -> u32 {
        0
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn xor_stream_round_trips() {
        let cipher = XorStreamCipher::new("xor", 128);
        let plaintext = random_corpus(1000);
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        assert_ne!(ciphertext, plaintext);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn xor_stream_flips_exactly_the_flipped_bit() {
        let cipher = XorStreamCipher::new("xor", 128);
        let a = vec![0u8; 64];
        let mut b = a.clone();
        b[0] ^= 0x01;
        let ca = cipher.encrypt(&a).unwrap();
        let cb = cipher.encrypt(&b).unwrap();
        let differing: u32 = ca.iter().zip(&cb).map(|(x, y)| (x ^ y).count_ones()).sum();
        assert_eq!(differing, 1);
    }

    #[test]
    fn padded_block_round_trips_and_grows() {
        let cipher = PaddedBlockCipher::new("padded", 256);
        let plaintext = random_corpus(100);
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        assert!(ciphertext.len() > plaintext.len());
        assert_eq!(ciphertext.len() % PAD_BLOCK, 0);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn constant_cipher_outputs_one_byte_value() {
        let cipher = ConstantCipher::new("constant", 64);
        let ciphertext = cipher.encrypt(&random_corpus(256)).unwrap();
        assert!(ciphertext.iter().all(|&b| b == 0xAA));
        assert!(cipher.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn failing_cipher_fails_both_directions() {
        let cipher = FailingCipher::new("broken");
        assert!(cipher.encrypt(b"x").is_err());
        assert!(cipher.decrypt(b"x").is_err());
    }
}
