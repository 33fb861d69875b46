pub mod bech32_decode;
pub mod npub;
pub mod pubkey;

pub use bech32_decode::{decode, DecodedBech32};
pub use pubkey::{canonicalize, CanonicalPubkey};
