use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a downloaded payload.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
