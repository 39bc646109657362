//! joytherun — Byte Packing & Signature Buffers
//! ============================================
//! The Joyrun upload signature hides three words inside integer literals:
//! `7958378`, `6645876` and `7239026` are, byte for byte in little‑endian
//! order, `"joy\0"`, `"the\0"` and `"run\0"`. This crate makes that trick
//! explicit and safe.
//!
//! ## Building blocks
//! * [`pack`]    – fixed‑width `u32` ⇄ `[u8; 4]` codec, **always little‑endian**.
//! * [`builder`] – capacity‑checked byte buffer assembled from fragments, with
//!   either raw placement or `strcat`‑style placement at the C‑string end.
//! * [`digest`]  – hex fingerprint trait (MD5, SHA‑256) and expected‑value check.
//! * [`sign`]    – the Joyrun request signatures built on the three above.
//! * [`cstr`]    – null‑terminated views over byte slices.
//!
//! ## Example
//! ```
//! use joytherun::builder::{AppendMode, BufferBuilder};
//! use joytherun::digest::{verify, Md5};
//! use joytherun::pack::{JOY, RUN, THE};
//!
//! let mut b = BufferBuilder::with_mode(50, AppendMode::CString).unwrap();
//! b.append_bytes(b"raowenyuan").unwrap();
//! b.append_bytes(b"po").unwrap();
//! b.append_packed_u32(JOY).unwrap();
//! b.append_bytes(b"1538284879").unwrap();
//! b.append_packed_u32(THE).unwrap();
//! b.append_bytes(b"153828487712981546").unwrap();
//! b.append_packed_u32(RUN).unwrap();
//!
//! let report = verify(&Md5, b.as_c_str(), "e4b8e9359e86247954f831cea60abc75");
//! assert!(report.matched);
//! ```
//!
//! Byte order is never taken from the host: the same bytes come out on every
//! platform, so the signature does too.

pub mod builder;
pub mod cstr;
pub mod digest;
pub mod pack;
pub mod sign;

pub use builder::{AppendMode, BufferBuilder, BuildError, Fragment};
pub use digest::{verify, Digester, Md5, Sha256, Verification};
pub use pack::{decode, encode, PackError, JOY, PACK_WIDTH, RUN, THE};
pub use sign::SignError;

#[cfg(feature = "parallel")]
pub use digest::verify_batch;
