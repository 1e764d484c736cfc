//! Algorand address derivation.
//!
//! An address is the base32 encoding (RFC 4648 alphabet, no padding) of a
//! 32-byte public key followed by a 4-byte checksum, where the checksum is
//! the last 4 bytes of SHA-512/256 over the public key. An application's
//! escrow account uses the pseudo public key
//! `SHA-512/256("appID" || big-endian u64 app id)`.

use sha2::{Digest, Sha512_256};

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PUBLIC_KEY_LEN: usize = 32;
const CHECKSUM_LEN: usize = 4;

/// Base32-encode without padding.
fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

/// Encode a 32-byte public key as an Algorand address.
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    let digest = Sha512_256::digest(public_key);
    let checksum = &digest[digest.len() - CHECKSUM_LEN..];

    let mut payload = [0u8; PUBLIC_KEY_LEN + CHECKSUM_LEN];
    payload[..PUBLIC_KEY_LEN].copy_from_slice(public_key);
    payload[PUBLIC_KEY_LEN..].copy_from_slice(checksum);
    base32_encode(&payload)
}

/// The escrow address of a deployed application.
pub fn application_address(app_id: u64) -> String {
    let mut hasher = Sha512_256::new();
    hasher.update(b"appID");
    hasher.update(app_id.to_be_bytes());
    let pseudo_key: [u8; PUBLIC_KEY_LEN] = hasher.finalize().into();
    encode_address(&pseudo_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_public_key_is_the_zero_address() {
        // canonical Algorand zero address
        assert_eq!(
            encode_address(&[0u8; 32]),
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ"
        );
    }

    #[test]
    fn test_application_address_known_vector() {
        assert_eq!(
            application_address(123_456_789),
            "SFXPKU7WCLQDNYDQEPS5ZDO7C4IKIL2VKFCESAGXIUVWWQ7233NQZ5H3SU"
        );
    }

    #[test]
    fn test_application_address_shape() {
        let addr = application_address(1);
        assert_eq!(addr.len(), 58);
        assert!(addr
            .chars()
            .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
    }

    #[test]
    fn test_application_address_is_deterministic_and_distinct() {
        assert_eq!(application_address(42), application_address(42));
        assert_ne!(application_address(42), application_address(43));
    }

    #[test]
    fn test_base32_encode_empty() {
        assert_eq!(base32_encode(&[]), "");
    }
}
