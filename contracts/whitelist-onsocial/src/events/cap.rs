use near_sdk::AccountId;

use super::CAP;
use super::builder::EventBuilder;
use crate::{Cap, ObjectId};

pub fn emit_cap_minted(actor_id: &AccountId, cap: &Cap) {
    EventBuilder::new(CAP, "mint", actor_id)
        .field("cap_id", &cap.id)
        .field("whitelist_id", &cap.whitelist_id)
        .field("role", cap.role)
        .field("holder", &cap.holder)
        .emit();
}

pub fn emit_cap_transferred(
    old_holder: &AccountId,
    new_holder: &AccountId,
    cap_id: &ObjectId,
    whitelist_id: &ObjectId,
) {
    EventBuilder::new(CAP, "transfer", old_holder)
        .field("cap_id", cap_id)
        .field("whitelist_id", whitelist_id)
        .field("old_holder", old_holder)
        .field("new_holder", new_holder)
        .emit();
}
