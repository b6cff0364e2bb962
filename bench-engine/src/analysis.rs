//! Ciphertext analysis probes: Hamming distance and Shannon entropy.
//!
//! Both are single-sample measurements. They order participants relative to
//! each other; they make no claim of statistical rigor.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Hamming distance between two byte buffers, truncated to the shorter
/// length: the number of set bits in the pairwise XOR.
///
/// Truncation keeps the measure defined for variable-length ciphertexts
/// (padding schemes), at the cost of ignoring the overhang — a known bias
/// of the protocol, documented rather than corrected.
#[must_use]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| u64::from((x ^ y).count_ones())).sum()
}

/// 256-bin byte-value histogram of the input.
#[must_use]
pub fn byte_histogram(data: &[u8]) -> [u64; 256] {
    let mut frequency = [0u64; 256];
    for &byte in data {
        // byte is 0-255, the array has 256 bins; the lookup always succeeds.
        if let Some(count) = frequency.get_mut(usize::from(byte)) {
            *count = count.saturating_add(1);
        }
    }
    frequency
}

/// Shannon entropy of the input in bits per byte, in `[0, 8]`.
///
/// `H = -Σ p_i · log2(p_i)` over the non-zero histogram bins. Returns `0.0`
/// for empty input.
///
/// # Note on precision
/// Counts are cast to f64, which can lose precision above 2^53 bytes; for
/// an entropy estimate bounded by 8.0 that is acceptable.
#[must_use]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let len = data.len() as f64;
    let mut entropy = 0.0_f64;

    for &count in &byte_histogram(data) {
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let probability = count as f64 / len;
            entropy -= probability * probability.log2();
        }
    }

    entropy
}
