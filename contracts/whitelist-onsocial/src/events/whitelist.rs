use near_sdk::AccountId;

use super::WHITELIST;
use super::builder::EventBuilder;
use crate::{ObjectId, TokenGate};

pub struct WhitelistCreated<'a> {
    pub creator_id: &'a AccountId,
    pub whitelist_id: &'a ObjectId,
    pub vault_id: &'a str,
    pub owner_id: &'a AccountId,
    pub capacity: u64,
    pub admin_mode: bool,
    pub tga_id: Option<&'a ObjectId>,
    pub token_gate: Option<&'a TokenGate>,
}

pub fn emit_whitelist_created(e: &WhitelistCreated) {
    EventBuilder::new(WHITELIST, "create", e.creator_id)
        .field("whitelist_id", e.whitelist_id)
        .field("vault_id", e.vault_id)
        .field("owner_id", e.owner_id)
        .field("capacity", e.capacity)
        .field("admin_mode", e.admin_mode)
        .field_opt("tga_id", e.tga_id)
        .field_opt("gate_contract_id", e.token_gate.map(|g| &g.contract_id))
        .emit();
}

pub fn emit_member_added(
    actor_id: &AccountId,
    whitelist_id: &ObjectId,
    account_id: &AccountId,
    member_count: u64,
) {
    EventBuilder::new(WHITELIST, "add_member", actor_id)
        .field("whitelist_id", whitelist_id)
        .field("account_id", account_id)
        .field("member_count", member_count)
        .emit();
}

pub fn emit_member_removed(
    actor_id: &AccountId,
    whitelist_id: &ObjectId,
    account_id: &AccountId,
    member_count: u64,
) {
    EventBuilder::new(WHITELIST, "remove_member", actor_id)
        .field("whitelist_id", whitelist_id)
        .field("account_id", account_id)
        .field("member_count", member_count)
        .emit();
}

pub fn emit_admin_mode_removed(actor_id: &AccountId, whitelist_id: &ObjectId) {
    EventBuilder::new(WHITELIST, "remove_admin_mode", actor_id)
        .field("whitelist_id", whitelist_id)
        .emit();
}
