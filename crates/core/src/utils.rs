//! Small shared helpers.

/// Shorten a wallet address for display: first 6 and last 4 characters.
///
/// Empty input renders as `"Unknown"`; addresses too short to shorten are
/// returned as-is.
pub fn short_address(address: &str) -> String {
    if address.is_empty() {
        return "Unknown".to_string();
    }
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
