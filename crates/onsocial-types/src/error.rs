//! Closed error-code taxonomy shared by the contract and its callers.
//!
//! The contract renders coded failures as `"<Name> (code <n>): <message>"`.
//! Callers only ever see the panic string, so [`classify_failure`] recovers the
//! code from it. Numbers follow the v2 mapping; the legacy v1 numbering
//! (`EDuplicate = 1`, `EInvalidCap = 12`, ...) is not accepted.

/// Taxonomy version reported by the contract's `get_error_taxonomy_version` view.
pub const ERROR_TAXONOMY_VERSION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitelistErrorCode {
    InvalidCap,
    InvalidOwnerCap,
    NoAccess,
    Duplicate,
    ExceededCapacity,
    WhitelistWithNoAdmin,
}

impl WhitelistErrorCode {
    pub const ALL: [WhitelistErrorCode; 6] = [
        Self::InvalidCap,
        Self::InvalidOwnerCap,
        Self::NoAccess,
        Self::Duplicate,
        Self::ExceededCapacity,
        Self::WhitelistWithNoAdmin,
    ];

    pub const fn code(self) -> u64 {
        match self {
            Self::InvalidCap => 1,
            Self::InvalidOwnerCap => 2,
            Self::NoAccess => 3,
            Self::Duplicate => 4,
            Self::ExceededCapacity => 5,
            Self::WhitelistWithNoAdmin => 6,
        }
    }

    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidCap),
            2 => Some(Self::InvalidOwnerCap),
            3 => Some(Self::NoAccess),
            4 => Some(Self::Duplicate),
            5 => Some(Self::ExceededCapacity),
            6 => Some(Self::WhitelistWithNoAdmin),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidCap => "EInvalidCap",
            Self::InvalidOwnerCap => "EInvalidOwnerCap",
            Self::NoAccess => "ENoAccess",
            Self::Duplicate => "EDuplicate",
            Self::ExceededCapacity => "EExceededCapacity",
            Self::WhitelistWithNoAdmin => "EWhitelistWithNoAdmin",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidCap => "Only the contract owner/admin can perform this action.",
            Self::InvalidOwnerCap => "Only the contract owner can perform this action.",
            Self::NoAccess => "The address does not belong to the whitelist.",
            Self::Duplicate => "The address is already in the whitelist.",
            Self::ExceededCapacity => "The whitelist capacity exceeded.",
            Self::WhitelistWithNoAdmin => "The whitelist does not have the admin mode.",
        }
    }
}

impl std::fmt::Display for WhitelistErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {}): {}", self.name(), self.code(), self.message())
    }
}

/// Outcome of mapping a failure string back onto the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractFailure {
    Known(WhitelistErrorCode),
    /// Anything outside the closed set, kept verbatim.
    Unrecognized(String),
}

impl ContractFailure {
    pub fn code(&self) -> Option<WhitelistErrorCode> {
        match self {
            Self::Known(code) => Some(*code),
            Self::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for ContractFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(code) => write!(f, "{}", code.message()),
            Self::Unrecognized(raw) => write!(f, "Smart contract error: {raw}"),
        }
    }
}

impl std::error::Error for ContractFailure {}

/// First `code <n>` occurrence in a failure message.
pub fn parse_failure_code(message: &str) -> Option<u64> {
    message.match_indices("code ").find_map(|(start, marker)| {
        let digits: String = message[start + marker.len()..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    })
}

pub fn classify_failure(message: &str) -> ContractFailure {
    match parse_failure_code(message).and_then(WhitelistErrorCode::from_code) {
        Some(code) => ContractFailure::Known(code),
        None => ContractFailure::Unrecognized(message.to_string()),
    }
}
