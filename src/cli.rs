use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// NIP-05 registration utility: normalize identifiers and trigger the registration workflow
#[derive(Parser, Debug)]
#[command(version, about = "NIP-05 registration utility")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode any bech32 string into its prefix and payload (checksum is not verified)
    Decode {
        /// The bech32 string, e.g. npub1...
        input: String,
    },

    /// Validate a username and canonicalize a public key without submitting
    Normalize {
        #[command(flatten)]
        input: RequestArgs,
    },

    /// Validate, canonicalize, and trigger the add-nip05 workflow
    Submit {
        #[command(flatten)]
        input: RequestArgs,

        /// Repository owner (overrides GITHUB_OWNER)
        #[arg(long)]
        owner: Option<String>,

        /// Repository name (overrides GITHUB_REPO)
        #[arg(long)]
        repo: Option<String>,

        /// API base URL (overrides GITHUB_API_URL)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Encode a 64-character hex public key as npub
    Npub {
        /// Hex public key
        hex: String,
    },
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Requested username
    #[arg(long, conflicts_with = "body")]
    pub username: Option<String>,

    /// Public key as 64 hex characters or npub1...
    #[arg(long, conflicts_with = "body")]
    pub pubkey: Option<String>,

    /// JSON request body file with "username" and "pubkey" ("-" reads stdin)
    #[arg(long)]
    pub body: Option<PathBuf>,
}
