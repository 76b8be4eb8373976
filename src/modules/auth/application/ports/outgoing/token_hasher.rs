use sha2::{Digest, Sha256};

/// Digest a token for the revocation list. Raw tokens never reach the
/// store.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
