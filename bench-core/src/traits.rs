//! Capability traits consumed by the benchmark engine.
//!
//! [`CipherCapability`] is the seam between the engine and concrete cipher
//! providers. It is deliberately flat — four operations, no inheritance
//! hierarchy — so that block ciphers, stream ciphers, public-key schemes,
//! and password-derived schemes all participate through the same contract.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Opaque error type returned by cipher providers.
///
/// Providers are external and bring their own error types; the engine only
/// needs the rendered cause for its failure log.
pub type CipherError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for cipher provider operations.
pub type CipherResult<T> = std::result::Result<T, CipherError>;

/// A cipher implementation measurable by the benchmark engine.
///
/// Implementations must be deterministic *per call* only in the sense that
/// `encrypt` returns a complete ciphertext for the given plaintext; internal
/// state such as nonces or stream positions is the provider's concern.
///
/// # Key length reporting
///
/// `key_length_bits` is self-reported and recorded verbatim — the engine
/// never computes or validates it. Some providers report the encoded public
/// key's byte length × 8, which includes encoding overhead and therefore
/// inflates the value relative to the true modulus size. That behavior is
/// accepted for compatibility; the reported figure is a ranking input, not
/// a security-accurate metric.
pub trait CipherCapability {
    /// Encrypts the plaintext, returning the complete ciphertext.
    ///
    /// # Errors
    /// Returns a provider-defined error on unsupported parameters or
    /// internal failure. The engine excludes the algorithm from the run.
    fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>>;

    /// Decrypts the ciphertext, returning the recovered plaintext.
    ///
    /// # Errors
    /// Returns a provider-defined error on malformed input or internal
    /// failure.
    fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>>;

    /// Self-reported key length in bits. See the trait docs for the
    /// compatibility caveat on encoded-key reporting.
    fn key_length_bits(&self) -> u32;

    /// Human-readable algorithm name, unique within a run.
    fn name(&self) -> &str;
}

/// A line-oriented destination for rendered benchmark output.
///
/// Passed explicitly into the reporting helpers instead of living behind a
/// process-wide writer, so the engine carries no global mutable state and
/// any presentation layer (console, file, test buffer) can consume results.
pub trait ReportSink {
    /// Emits one line of rendered output.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the destination rejects the
    /// write.
    fn emit(&mut self, line: &str) -> std::io::Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, line: &str) -> std::io::Result<()> {
        (**self).emit(line)
    }
}
