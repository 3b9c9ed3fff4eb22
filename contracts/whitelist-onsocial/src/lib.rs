//! Capability-gated whitelists with token-gated approval queries.
//!
//! A whitelist is administered through `Cap` credentials minted at creation:
//! one owner cap, plus an admin cap while the whitelist is in admin mode.
//! `seal_approve` / `seal_approve_whitelist` answer key-server approval
//! queries without requiring a cap.

use near_sdk::store::{IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod external;
mod storage;
mod types;

mod admin;
mod caps;
mod seal;
mod upgrade;
mod views;
mod whitelist;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::WhitelistError;
pub use external::Token;
pub use storage::StorageKey;
pub use types::{
    Cap, CapRole, ContractConfig, ContractConfigUpdate, CreatedObject, GateKind, GatedAsset,
    ObjectId, ObjectOwner, Tga, TokenGate, Whitelist, WhitelistView,
};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: ContractConfig,

    // Monotonic; every minted object id is derived from a fresh nonce.
    pub(crate) next_object_nonce: u64,

    pub(crate) whitelists: LookupMap<ObjectId, Whitelist>,
    pub(crate) caps: LookupMap<ObjectId, Cap>,
    pub(crate) caps_by_holder: LookupMap<AccountId, IterableSet<ObjectId>>,
    pub(crate) tgas: LookupMap<ObjectId, Tga>,
}
