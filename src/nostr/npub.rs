use anyhow::{anyhow, Context, Result};
use bech32::{encode, u5, ToBase32, Variant};

use super::pubkey::{is_hex64, NPUB_HRP};
use crate::util::trim_input;

/// Encode a 32-byte key as `npub1…` in the layout `bech32_decode::decode` reads:
/// a zero version symbol ahead of the 5-bit groups, then a real bech32 checksum.
pub fn npub_from_xonly32(x: &[u8; 32]) -> Result<String> {
    let mut data = vec![u5::try_from_u8(0).context("version symbol")?];
    data.extend(x.to_base32());
    encode(NPUB_HRP, data, Variant::Bech32).context("npub encode")
}

pub fn npub_from_hex(hex_key: &str) -> Result<String> {
    let hex_key = trim_input(hex_key);
    if !is_hex64(hex_key) {
        return Err(anyhow!("expected 64 hex characters, got {:?}", hex_key));
    }
    let mut x = [0u8; 32];
    hex::decode_to_slice(hex_key, &mut x).context("decoding hex key")?;
    npub_from_xonly32(&x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nostr::pubkey::canonicalize;

    #[test]
    fn encoded_npub_canonicalizes_back_to_hex() {
        let hex_key = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";
        let npub = npub_from_hex(hex_key).unwrap();
        assert!(npub.starts_with("npub1"));
        assert_eq!(canonicalize(&npub).unwrap().as_str(), hex_key);
    }

    #[test]
    fn rejects_non_key_hex() {
        assert!(npub_from_hex("abcd").is_err());
        assert!(npub_from_hex(&"z".repeat(64)).is_err());
    }
}
