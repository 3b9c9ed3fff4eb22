use near_sdk::AccountId;

use super::STORAGE;
use super::builder::EventBuilder;

pub fn emit_storage_charged(payer: &AccountId, bytes_used: u64, cost: u128, refund: u128) {
    EventBuilder::new(STORAGE, "storage_charged", payer)
        .field("bytes_used", bytes_used)
        .field("cost", cost)
        .field("refund", refund)
        .emit();
}
