use thiserror::Error;

/// Malformed identifier input: bad bech32 shape, wrong prefix, or neither hex nor npub.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Separator `1` is missing or sits at position 0 (empty hrp).
    #[error("Invalid bech32 string")]
    MissingSeparator,

    /// A data-part character outside the bech32 alphabet.
    #[error("Invalid character")]
    InvalidCharacter { character: char, position: usize },

    #[error("Not an npub")]
    WrongPrefix { hrp: String },

    #[error("Invalid public key format")]
    UnrecognizedShape,

    #[error("Public key is required")]
    MissingPubkey,
}

impl FormatError {
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::MissingSeparator => "missing_separator",
            FormatError::InvalidCharacter { .. } => "invalid_character",
            FormatError::WrongPrefix { .. } => "wrong_prefix",
            FormatError::UnrecognizedShape => "unrecognized_shape",
            FormatError::MissingPubkey => "missing_pubkey",
        }
    }
}

/// Username policy violations, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is required")]
    Required,

    #[error("Username can only contain lowercase letters, numbers, hyphens, underscores, and dots")]
    InvalidCharacters,

    #[error("Username must be between 1 and 64 characters")]
    Length,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required => "username_required",
            ValidationError::InvalidCharacters => "username_invalid_characters",
            ValidationError::Length => "username_length",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Validation,
}

/// Rejection of a registration request by the core codec/validators.
/// `Display` is the message meant for the end user, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::Format(_) => ErrorKind::Format,
            RegistrationError::Validation(_) => ErrorKind::Validation,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::Format(e) => e.code(),
            RegistrationError::Validation(e) => e.code(),
        }
    }
}

/// Everything that can stop a submission, from body parsing to the dispatch call.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] RegistrationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Failed to trigger workflow")]
    Dispatch { status: u16, body: String },

    #[error("Dispatch request failed: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<FormatError> for SubmitError {
    fn from(e: FormatError) -> Self {
        SubmitError::Rejected(e.into())
    }
}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        SubmitError::Rejected(e.into())
    }
}
