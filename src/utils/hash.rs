use sha2::Digest;

/// Hex-encoded (lowercase) digest of `data` using algorithm `D`
pub fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}
