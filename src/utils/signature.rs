use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verify an HMAC-SHA256 webhook signature.
///
/// `signature` is the hex-encoded digest from the signature header.
/// Returns false for malformed hex, length mismatch, or digest mismatch;
/// the caller must not parse the payload unless this returns true.
///
/// The comparison is constant-time so a caller probing signatures cannot
/// learn digest bytes from response timing.
pub fn verify(secret: &[u8], payload: &[u8], signature: &str) -> bool {
    let provided = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    let expected = mac.finalize().into_bytes();

    if expected.len() != provided.len() {
        return false;
    }

    expected.ct_eq(&provided).into()
}
