use crate::models::{ComparisonResult, DigestSet};
use crate::utils::hash::hex_digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384};

pub struct DigestService;

impl DigestService {
    /// Each algorithm runs independently over the full content
    pub fn compute(content: &[u8]) -> DigestSet {
        DigestSet {
            md5: hex_digest::<Md5>(content),
            sha1: hex_digest::<Sha1>(content),
            sha256: hex_digest::<Sha256>(content),
            sha384: hex_digest::<Sha384>(content),
        }
    }

    /// Compares MD5, SHA-1 and SHA-256. SHA-384 is left out of the comparison.
    pub fn compare(first: &DigestSet, second: &DigestSet) -> ComparisonResult {
        ComparisonResult {
            md5: first.md5 == second.md5,
            sha1: first.sha1 == second.sha1,
            sha256: first.sha256 == second.sha256,
        }
    }
}
