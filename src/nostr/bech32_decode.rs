//! Minimal bech32 reader used for `npub1…` identifiers.
//!
//! The 6 trailing checksum symbols are stripped without being verified, and
//! the first data symbol (version nibble) is skipped before regrouping the
//! remaining 5-bit values into bytes. Leftover padding bits are dropped.

use tracing::debug;

use crate::errors::FormatError;

pub const SEPARATOR: char = '1';
pub const CHECKSUM_LEN: usize = 6;

pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// ASCII -> 5-bit value, -1 for characters outside the alphabet.
const CHARSET_REV: [i8; 128] = build_charset_rev();

const fn build_charset_rev() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        table[CHARSET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBech32 {
    pub hrp: String,
    pub payload: Vec<u8>,
}

fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHARSET_REV[c as usize] {
        v if v >= 0 => Some(v as u8),
        _ => None,
    }
}

/// Decode a bech32 string into its human-readable part and byte payload.
pub fn decode(input: &str) -> Result<DecodedBech32, FormatError> {
    let lowered = input.to_lowercase();

    let sep = match lowered.rfind(SEPARATOR) {
        Some(i) if i > 0 => i,
        _ => return Err(FormatError::MissingSeparator),
    };
    let (hrp, rest) = lowered.split_at(sep);
    let data = &rest[SEPARATOR.len_utf8()..];

    let mut values = Vec::with_capacity(data.len());
    for (position, character) in data.chars().enumerate() {
        let v = symbol_value(character)
            .ok_or(FormatError::InvalidCharacter { character, position })?;
        values.push(v);
    }

    let keep = values.len().saturating_sub(CHECKSUM_LEN);
    let payload = regroup_skipping_version(&values[..keep]);

    debug!(hrp, symbols = values.len(), bytes = payload.len(), "decoded bech32");
    Ok(DecodedBech32 {
        hrp: hrp.to_string(),
        payload,
    })
}

/// 5-bit -> 8-bit, big-endian, starting at index 1.
fn regroup_skipping_version(values: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(values.len() * 5 / 8);

    for &v in values.iter().skip(1) {
        acc = ((acc << 5) | v as u32) & 0xfff;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    out
}
