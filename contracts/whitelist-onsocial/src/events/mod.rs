mod builder;
mod types;

mod cap;
mod contract;
mod storage;
mod whitelist;

pub use cap::*;
pub use contract::*;
pub use storage::*;
pub use whitelist::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const WHITELIST: &str = "WHITELIST_UPDATE";
pub(crate) const CAP: &str = "CAP_UPDATE";
pub(crate) const STORAGE: &str = "STORAGE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
