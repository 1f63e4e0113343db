use sha2::{Digest, Sha256};

/// Cache key for a raw user-agent string.
///
/// Producers and readers address the same entry through this function,
/// so it must stay stable for the life of a cache directory.
pub fn fingerprint(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}
