use anyhow::Result;
use nip05_register::nostr::npub::npub_from_hex;

pub fn run(hex_key: &str) -> Result<()> {
    println!("{}", npub_from_hex(hex_key)?);
    Ok(())
}
