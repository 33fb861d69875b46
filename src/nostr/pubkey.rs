use serde::Serialize;
use std::fmt;
use tracing::warn;

use super::bech32_decode;
use crate::errors::FormatError;
use crate::util::trim_input;

pub const NPUB_HRP: &str = "npub";
pub const NPUB_PREFIX: &str = "npub1";
pub const PUBKEY_HEX_LEN: usize = 64;

/// Lowercase hex form of a public key.
///
/// Hex input is always 64 characters. Input taken through the npub path is
/// rendered from whatever payload the decoder produced, so its length is not
/// guaranteed; see [`CanonicalPubkey::is_full_length`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPubkey(String);

impl CanonicalPubkey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_full_length(&self) -> bool {
        self.0.len() == PUBKEY_HEX_LEN
    }
}

impl fmt::Display for CanonicalPubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_hex64(s: &str) -> bool {
    s.len() == PUBKEY_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Reduce a raw hex key or an `npub1…` identifier to lowercase hex.
pub fn canonicalize(input: &str) -> Result<CanonicalPubkey, FormatError> {
    let input = trim_input(input);

    if is_hex64(input) {
        return Ok(CanonicalPubkey(input.to_ascii_lowercase()));
    }

    if input.starts_with(NPUB_PREFIX) {
        let decoded = bech32_decode::decode(input)?;
        if decoded.hrp != NPUB_HRP {
            return Err(FormatError::WrongPrefix { hrp: decoded.hrp });
        }
        if decoded.payload.len() * 2 != PUBKEY_HEX_LEN {
            warn!(
                bytes = decoded.payload.len(),
                "npub payload is not 32 bytes; passing it through"
            );
        }
        return Ok(CanonicalPubkey(hex::encode(decoded.payload)));
    }

    Err(FormatError::UnrecognizedShape)
}
