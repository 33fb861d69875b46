//! NIP-05 registration core: npub/hex public key canonicalization, username
//! validation, and hand-off of the canonical pair to a repository workflow.

pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod nostr;
pub mod process;
pub mod types;
pub mod username;
pub mod util;

pub use errors::{ErrorKind, FormatError, RegistrationError, SubmitError, ValidationError};
pub use nostr::{canonicalize, decode, CanonicalPubkey, DecodedBech32};
pub use username::{validate, CanonicalUsername};
