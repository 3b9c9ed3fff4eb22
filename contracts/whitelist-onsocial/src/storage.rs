use near_sdk::BorshStorageKey;

use crate::*;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Whitelists,
    WhitelistMembers { whitelist_id: ObjectId },
    Caps,
    CapsByHolder,
    CapsByHolderInner { account_id_hash: Vec<u8> },
    Tgas,
}

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    env::storage_byte_cost().as_yoctonear()
}

impl Contract {
    // Flush deferred writes before measuring usage.
    pub(crate) fn flush_state(&mut self) {
        self.whitelists.flush();
        self.caps.flush();
        self.caps_by_holder.flush();
        self.tgas.flush();
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }

    /// Charges the storage added since `initial_usage` to the attached deposit
    /// and refunds the remainder to `payer`.
    pub(crate) fn settle_storage_deposit(
        &mut self,
        payer: &AccountId,
        initial_usage: u64,
    ) -> Result<(), WhitelistError> {
        let bytes_used = self.storage_usage_flushed().saturating_sub(initial_usage);
        let cost = u128::from(bytes_used) * storage_byte_cost();
        let attached = env::attached_deposit().as_yoctonear();
        if attached < cost {
            return Err(WhitelistError::InsufficientDeposit(format!(
                "{bytes_used} bytes of storage require {cost} yoctoNEAR, attached {attached}"
            )));
        }

        let refund = attached - cost;
        if refund > 0 {
            let _ = Promise::new(payer.clone()).transfer(NearToken::from_yoctonear(refund));
        }
        events::emit_storage_charged(payer, bytes_used, cost, refund);
        Ok(())
    }
}
