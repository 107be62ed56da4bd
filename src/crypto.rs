// src/crypto.rs
use sha1::{Digest, Sha1};

/// Length in bytes of the digest behind [`password_hash`].
pub const PASSWORD_HASH_LEN: usize = 20;

/// Hash the concatenated bytes of `values` with SHA-1 and render the digest
/// as 40 uppercase hex characters.
///
/// No salt is mixed in here. Callers that want one pass it among `values`,
/// typically [`Config::password_salt`](crate::core::config::Config::password_salt).
pub fn password_hash<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut hasher = Sha1::new();
    for value in values {
        hasher.update(value.as_ref());
    }
    hex::encode_upper(hasher.finalize())
}
