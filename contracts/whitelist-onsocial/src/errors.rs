//! Typed errors for the whitelist contract.
//!
//! The six coded variants form the closed taxonomy shared with callers through
//! `onsocial_types::WhitelistErrorCode`; their panic message embeds the numeric
//! code. The remaining variants cover failures outside that taxonomy and carry
//! no code.

use near_sdk_macros::NearSchema;
use onsocial_types::WhitelistErrorCode;

use crate::ObjectId;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum WhitelistError {
    /// Cap does not authorize the action on this whitelist.
    InvalidCap,
    /// Action needs the owner cap; an admin cap was presented.
    InvalidOwnerCap,
    /// Caller is not approved by the whitelist or its token gate.
    NoAccess,
    Duplicate,
    ExceededCapacity,
    WhitelistWithNoAdmin,
    NotFound(String),
    InvalidInput(String),
    InsufficientDeposit(String),
    /// Contract-level administration by a non-owner.
    Unauthorized(String),
}

impl WhitelistError {
    pub fn code(&self) -> Option<WhitelistErrorCode> {
        match self {
            Self::InvalidCap => Some(WhitelistErrorCode::InvalidCap),
            Self::InvalidOwnerCap => Some(WhitelistErrorCode::InvalidOwnerCap),
            Self::NoAccess => Some(WhitelistErrorCode::NoAccess),
            Self::Duplicate => Some(WhitelistErrorCode::Duplicate),
            Self::ExceededCapacity => Some(WhitelistErrorCode::ExceededCapacity),
            Self::WhitelistWithNoAdmin => Some(WhitelistErrorCode::WhitelistWithNoAdmin),
            Self::NotFound(_)
            | Self::InvalidInput(_)
            | Self::InsufficientDeposit(_)
            | Self::Unauthorized(_) => None,
        }
    }

    pub fn whitelist_not_found(id: &ObjectId) -> Self {
        Self::NotFound(format!("Whitelist {id}"))
    }
    pub fn cap_not_found(id: &ObjectId) -> Self {
        Self::NotFound(format!("Cap {id}"))
    }
    pub fn tga_not_found(id: &ObjectId) -> Self {
        Self::NotFound(format!("TGA {id}"))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only the contract owner can {what}"))
    }
}

impl std::fmt::Display for WhitelistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "Not found: {what}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {msg}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::InvalidCap => write!(f, "{}", WhitelistErrorCode::InvalidCap),
            Self::InvalidOwnerCap => write!(f, "{}", WhitelistErrorCode::InvalidOwnerCap),
            Self::NoAccess => write!(f, "{}", WhitelistErrorCode::NoAccess),
            Self::Duplicate => write!(f, "{}", WhitelistErrorCode::Duplicate),
            Self::ExceededCapacity => write!(f, "{}", WhitelistErrorCode::ExceededCapacity),
            Self::WhitelistWithNoAdmin => write!(f, "{}", WhitelistErrorCode::WhitelistWithNoAdmin),
        }
    }
}
