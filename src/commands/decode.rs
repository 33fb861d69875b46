use anyhow::{Context, Result};
use nip05_register::nostr::decode;
use nip05_register::types::DecodedOut;

pub fn run(input: &str) -> Result<()> {
    let decoded = decode(input).with_context(|| format!("decoding {input:?}"))?;
    super::print_json(&DecodedOut {
        hrp: decoded.hrp,
        payload_hex: hex::encode(&decoded.payload),
        payload_len: decoded.payload.len(),
    })
}
