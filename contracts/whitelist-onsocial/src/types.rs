use near_sdk::json_types::U128;
use near_sdk::store::IterableSet;
use near_sdk::{AccountId, near};
use onsocial_types::{OBJECT_ID_LEN, ObjectIdError, format_object_id, parse_object_id};

use crate::constants::*;
use crate::errors::WhitelistError;

// --- Object ids ---

/// 32-byte object id; JSON form is `0x`-prefixed lowercase hex.
#[near(serializers = [borsh, json])]
#[serde(try_from = "String", into = "String")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub [u8; OBJECT_ID_LEN]);

impl ObjectId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_object_id(&self.0))
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_object_id(s).map(Self)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.to_string()
    }
}

// --- Capabilities ---

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapRole {
    Owner,
    Admin,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cap {
    pub id: ObjectId,
    pub whitelist_id: ObjectId,
    pub role: CapRole,
    pub holder: AccountId,
}

// --- Token gating ---

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    Fungible,
    NonFungible,
}

/// Asset type whose ownership grants approval.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenGate {
    pub kind: GateKind,
    pub contract_id: AccountId,
    #[serde(default)]
    pub min_balance: Option<U128>,
}

impl TokenGate {
    pub fn validate(&self) -> Result<(), WhitelistError> {
        match (self.kind, self.min_balance) {
            (GateKind::NonFungible, Some(_)) => Err(WhitelistError::InvalidInput(
                "min_balance applies to fungible gates only".into(),
            )),
            (GateKind::Fungible, Some(U128(0))) => Err(WhitelistError::InvalidInput(
                "min_balance must be positive".into(),
            )),
            _ => Ok(()),
        }
    }

    pub fn required_balance(&self) -> u128 {
        self.min_balance
            .map(|b| b.0)
            .unwrap_or(DEFAULT_MIN_GATE_BALANCE)
    }

    /// Type check only; ownership is resolved against the asset contract.
    pub fn matches(&self, asset: &GatedAsset) -> bool {
        if asset.contract_id != self.contract_id {
            return false;
        }
        match self.kind {
            GateKind::Fungible => asset.token_id.is_none(),
            GateKind::NonFungible => asset.token_id.is_some(),
        }
    }
}

/// Token-gate descriptor bound to one whitelist.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tga {
    pub id: ObjectId,
    pub whitelist_id: ObjectId,
    pub gate: TokenGate,
}

/// Asset presented to `seal_approve`: a fungible token contract, or one NFT.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct GatedAsset {
    pub contract_id: AccountId,
    #[serde(default)]
    pub token_id: Option<String>,
}

// --- Whitelist ---

#[near(serializers = [borsh])]
pub struct Whitelist {
    pub id: ObjectId,
    pub vault_id: String,
    pub owner_id: AccountId,
    pub capacity: u64,
    pub tga_id: Option<ObjectId>,
    pub created_at: u64,
    // One-way: cleared by `end_admin_mode`, never set again.
    admin_mode: bool,
    pub(crate) members: IterableSet<AccountId>,
}

impl Whitelist {
    pub(crate) fn new(
        id: ObjectId,
        vault_id: String,
        owner_id: AccountId,
        capacity: u64,
        admin_mode: bool,
        members: IterableSet<AccountId>,
    ) -> Self {
        Self {
            id,
            vault_id,
            owner_id,
            capacity,
            tga_id: None,
            created_at: near_sdk::env::block_timestamp(),
            admin_mode,
            members,
        }
    }

    pub fn is_admin_mode(&self) -> bool {
        self.admin_mode
    }

    pub(crate) fn end_admin_mode(&mut self) {
        self.admin_mode = false;
    }

    pub fn member_count(&self) -> u64 {
        u64::from(self.members.len())
    }

    pub fn is_member(&self, account_id: &AccountId) -> bool {
        self.members.contains(account_id)
    }

    pub fn is_full(&self) -> bool {
        self.member_count() >= self.capacity
    }

    pub fn view(&self, token_gate: Option<TokenGate>) -> WhitelistView {
        WhitelistView {
            id: self.id,
            vault_id: self.vault_id.clone(),
            owner_id: self.owner_id.clone(),
            admin_mode: self.admin_mode,
            capacity: self.capacity,
            member_count: self.member_count(),
            tga_id: self.tga_id,
            token_gate,
            created_at: self.created_at,
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct WhitelistView {
    pub id: ObjectId,
    pub vault_id: String,
    pub owner_id: AccountId,
    pub admin_mode: bool,
    pub capacity: u64,
    pub member_count: u64,
    pub tga_id: Option<ObjectId>,
    pub token_gate: Option<TokenGate>,
    pub created_at: u64,
}

// --- Creation report ---

#[near(serializers = [json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectOwner {
    Shared,
    Account(AccountId),
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedObject {
    pub object_id: ObjectId,
    pub object_type: String,
    pub owner: ObjectOwner,
}

impl CreatedObject {
    pub(crate) fn shared(object_id: ObjectId, object_type: &str) -> Self {
        Self {
            object_id,
            object_type: object_type.to_string(),
            owner: ObjectOwner::Shared,
        }
    }

    pub(crate) fn owned(object_id: ObjectId, object_type: &str, owner: &AccountId) -> Self {
        Self {
            object_id,
            object_type: object_type.to_string(),
            owner: ObjectOwner::Account(owner.clone()),
        }
    }
}

// --- Contract config ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    pub max_capacity: u64,
    pub max_page_size: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, Default)]
pub struct ContractConfigUpdate {
    pub max_capacity: Option<u64>,
    pub max_page_size: Option<u32>,
}

impl ContractConfig {
    pub fn validate_patch(&self, patch: &ContractConfigUpdate) -> Result<(), WhitelistError> {
        let max_capacity = patch.max_capacity.unwrap_or(self.max_capacity);
        let max_page_size = patch.max_page_size.unwrap_or(self.max_page_size);

        if max_capacity == 0 {
            return Err(WhitelistError::InvalidInput(
                "max_capacity must be positive".into(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE_LIMIT).contains(&max_page_size) {
            return Err(WhitelistError::InvalidInput(format!(
                "max_page_size must be 1..={MAX_PAGE_SIZE_LIMIT}"
            )));
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &ContractConfigUpdate) {
        if let Some(v) = patch.max_capacity {
            self.max_capacity = v;
        }
        if let Some(v) = patch.max_page_size {
            self.max_page_size = v;
        }
    }
}
