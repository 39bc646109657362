//! Joyrun request signatures
//! -------------------------
//! * `loginUrlSign` / upload `sign`: MD5 over
//!   `raowenyuan{path}joy{dateline}the{keys}run`, lowercase hex. The three
//!   words are appended as packed integers into a C‑string buffer, so the
//!   bytes hashed are exactly those the upload client builds.
//! * `signature` (v1, query/body) and `_sign` (v2, header): MD5 over the
//!   sorted `key value` pairs, a salt, uid and sid, uppercase hex.

use std::fmt::Display;

use thiserror::Error;
use tracing::debug;

use crate::builder::{AppendMode, BufferBuilder, BuildError};
use crate::cstr;
use crate::digest::{Digester, Md5};
use crate::pack::{JOY, PACK_WIDTH, RUN, THE};

/// Literal prefix of the upload signature.
pub const SIGN_PREFIX: &str = "raowenyuan";

/// Salt for the v1 signature, sent with the request parameters.
pub const SALT_V1: &str = "1fd6e28fd158406995f77727b35bf20a";
/// Salt for the v2 signature, sent in the `_sign` header.
pub const SALT_V2: &str = "0C077B1E70F5FDDE6F497C1315687F9C";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("{field} contains a zero byte")]
    InteriorNul { field: &'static str },
}

/// Fields of a run record that take part in the upload signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    /// Request path, e.g. `po.aspx`.
    pub path: String,
    pub dateline: u64,
    /// End time of the run.
    pub lasttime: u64,
    /// Duration in seconds.
    pub second: u64,
    /// Distance in meters.
    pub meter: u64,
}

/// `path` up to its first `.`, lowercased.
fn path_stem(path: &str) -> String {
    path.split('.').next().unwrap_or_default().to_lowercase()
}

fn reject_nul(field: &'static str, value: &str) -> Result<(), SignError> {
    if value.as_bytes().contains(&0) {
        return Err(SignError::InteriorNul { field });
    }
    Ok(())
}

/// Signature of an upload URL, lowercase MD5 hex.
///
/// ```
/// use joytherun::sign::login_url_sign;
///
/// let sn = login_url_sign("po.aspx", 1538284879, [1538284877u64, 1298, 1546]).unwrap();
/// assert_eq!(sn, "e4b8e9359e86247954f831cea60abc75");
/// ```
pub fn login_url_sign<I>(path: &str, dateline: u64, keys: I) -> Result<String, SignError>
where
    I: IntoIterator,
    I::Item: Display,
{
    let stem = path_stem(path);
    let dateline = dateline.to_string();
    let keys = keys
        .into_iter()
        .map(|k| k.to_string())
        .collect::<String>()
        .to_lowercase();
    reject_nul("path", &stem)?;
    reject_nul("keys", &keys)?;

    let capacity = SIGN_PREFIX.len() + stem.len() + dateline.len() + keys.len() + 3 * PACK_WIDTH;
    let mut buf = BufferBuilder::with_mode(capacity, AppendMode::CString)?;
    buf.append_bytes(SIGN_PREFIX.as_bytes())?;
    buf.append_bytes(stem.as_bytes())?;
    buf.append_packed_u32(JOY)?;
    buf.append_bytes(dateline.as_bytes())?;
    buf.append_packed_u32(THE)?;
    buf.append_bytes(keys.as_bytes())?;
    buf.append_packed_u32(RUN)?;

    let sign = Md5.hex_digest(cstr::c_str(buf.finalize()));
    debug!(%stem, %dateline, %sign, "upload url signed");
    Ok(sign)
}

/// `sign` field of an uploaded record.
pub fn upload_signature(record: &UploadRecord) -> Result<String, SignError> {
    login_url_sign(
        &record.path,
        record.dateline,
        [record.lasttime, record.second, record.meter],
    )
}

fn salted_signature<I, K, V>(params: I, uid: u64, sid: &str, salt: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut pairs: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_owned(), v.to_string()))
        .collect();
    pairs.sort();

    let mut pre = String::new();
    for (k, v) in &pairs {
        pre.push_str(k);
        pre.push_str(v);
    }
    pre.push_str(salt);
    // An anonymous request (uid 0) signs without uid and sid.
    if uid != 0 {
        pre.push_str(&uid.to_string());
        pre.push_str(sid);
    }
    Md5.hex_digest(pre.as_bytes()).to_uppercase()
}

/// v1 signature, carried as the `signature` request parameter.
pub fn signature_v1<I, K, V>(params: I, uid: u64, sid: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    salted_signature(params, uid, sid, SALT_V1)
}

/// v2 signature, carried in the `_sign` header.
pub fn signature_v2<I, K, V>(params: I, uid: u64, sid: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    salted_signature(params, uid, sid, SALT_V2)
}
