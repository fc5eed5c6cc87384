//! Wallet address validation

/// Check whether a string is a syntactically valid EVM wallet address:
/// a literal "0x" prefix followed by exactly 40 hex digits.
///
/// This is a syntax check only. It does not verify the mixed-case
/// checksum (EIP-55) or that the address has any on-chain activity.
pub fn is_valid_eth_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(digits) => digits.len() == 40 && hex::decode(digits).is_ok(),
        None => false,
    }
}
