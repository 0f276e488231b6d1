//! Redaction of lookup subjects and exposed passwords.
//!
//! Subjects are masked before they reach the logs. Exposed passwords can be
//! replaced by a short SHA-256 fingerprint in exports, so two rows sharing a
//! password still look alike without revealing it.

use sha2::{Digest, Sha256};

/// Hex digits of the SHA-256 kept in a password fingerprint.
pub const FINGERPRINT_LEN: usize = 12;

const MASK: &str = "***";

/// Mask a lookup subject for logging.
///
/// Keeps the first character and, for email addresses, the domain:
/// `john@example.com` becomes `j***@example.com`, `johnsmith` becomes `j***`.
pub fn mask_subject(subject: &str) -> String {
    let (local, domain) = match subject.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (subject, None),
    };

    let mut masked: String = local.chars().take(1).collect();
    masked.push_str(MASK);
    if let Some(domain) = domain {
        masked.push('@');
        masked.push_str(domain);
    }
    masked
}

/// Compute SHA256 hash of content.
pub fn compute_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Short, stable stand-in for an exposed password.
pub fn password_fingerprint(password: &str) -> String {
    let hash = compute_hash(password);
    format!("sha256:{}", &hash[..FINGERPRINT_LEN])
}
