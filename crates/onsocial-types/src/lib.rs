//! Shared types and pure-logic utilities for the OnSocial whitelist.
//! No NEAR SDK dependency, so the contract and the sandbox harness share it.

mod error;
mod namespace;
mod object;

pub use error::{
    ContractFailure, ERROR_TAXONOMY_VERSION, WhitelistErrorCode, classify_failure,
    parse_failure_code,
};
pub use namespace::{in_namespace, key_id};
pub use object::{
    OBJECT_ID_LEN, ObjectIdError, TYPE_CAP, TYPE_TGA, TYPE_WHITELIST, format_object_id,
    parse_object_id,
};
