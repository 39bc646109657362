//! Digest verification
//! -------------------
//! The hash itself comes from RustCrypto; this module only fixes the contract
//! (bytes in, lowercase hex fingerprint out) and the expected‑value check.

use std::fmt;

use tracing::debug;

// Optional multi‑threaded batch API
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Deterministic fixed‑length fingerprint of a byte sequence.
pub trait Digester {
    /// Short algorithm name for logs.
    fn name(&self) -> &'static str;

    /// Lowercase hex digest of `data`.
    fn hex_digest(&self, data: &[u8]) -> String;
}

/// MD5, 32 hex characters. The Joyrun signatures use this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5;

/// SHA‑256, 64 hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl Digester for Md5 {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn hex_digest(&self, data: &[u8]) -> String {
        hex::encode(<md5::Md5 as md5::Digest>::digest(data))
    }
}

impl Digester for Sha256 {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn hex_digest(&self, data: &[u8]) -> String {
        hex::encode(<sha2::Sha256 as sha2::Digest>::digest(data))
    }
}

/// Outcome of comparing a computed digest with an expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub computed: String,
    pub expected: String,
    pub matched: bool,
}

/// Three lines: computed, expected, then `1` or `0`.
impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.computed)?;
        writeln!(f, "{}", self.expected)?;
        write!(f, "{}", u8::from(self.matched))
    }
}

/// Digests `data` and compares it with `expected`, case‑sensitively.
///
/// A mismatch is a result, not an error.
pub fn verify<D: Digester + ?Sized>(digester: &D, data: &[u8], expected: &str) -> Verification {
    let computed = digester.hex_digest(data);
    let matched = computed == expected;
    debug!(
        algorithm = digester.name(),
        len = data.len(),
        %computed,
        matched,
        "digest verified"
    );
    Verification {
        computed,
        expected: expected.to_owned(),
        matched,
    }
}

/// Verify many `(data, expected)` pairs in **parallel** using Rayon (feature `parallel`).
///
/// Results keep the input order.
#[cfg(feature = "parallel")]
pub fn verify_batch<D: Digester + Sync>(
    digester: &D,
    items: &[(&[u8], &str)],
) -> Vec<Verification> {
    items
        .par_iter()
        .map(|(data, expected)| verify(digester, data, expected))
        .collect()
}
