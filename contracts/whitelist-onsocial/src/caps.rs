use crate::guards::{check_one_yocto, hash_account_id};
use crate::*;

#[near]
impl Contract {
    /// Moves a cap to `receiver_id`. Only the current holder can transfer it.
    #[payable]
    #[handle_result]
    pub fn transfer_cap(
        &mut self,
        cap_id: ObjectId,
        receiver_id: AccountId,
    ) -> Result<(), WhitelistError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        let cap = self
            .caps
            .get_mut(&cap_id)
            .ok_or_else(|| WhitelistError::cap_not_found(&cap_id))?;
        if cap.holder != actor_id {
            return Err(WhitelistError::InvalidCap);
        }
        if cap.holder == receiver_id {
            return Err(WhitelistError::InvalidInput(
                "Receiver already holds this cap".into(),
            ));
        }
        cap.holder = receiver_id.clone();
        let whitelist_id = cap.whitelist_id;

        self.unindex_cap(&actor_id, &cap_id);
        self.index_cap(&receiver_id, cap_id);
        events::emit_cap_transferred(&actor_id, &receiver_id, &cap_id, &whitelist_id);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn mint_cap(
        &mut self,
        actor_id: &AccountId,
        whitelist_id: ObjectId,
        role: CapRole,
        holder: &AccountId,
    ) -> ObjectId {
        let cap = Cap {
            id: self.mint_object_id(),
            whitelist_id,
            role,
            holder: holder.clone(),
        };
        let cap_id = cap.id;
        self.index_cap(holder, cap_id);
        events::emit_cap_minted(actor_id, &cap);
        self.caps.insert(cap_id, cap);
        cap_id
    }

    pub(crate) fn index_cap(&mut self, holder: &AccountId, cap_id: ObjectId) {
        let mut held = self.caps_by_holder.remove(holder).unwrap_or_else(|| {
            IterableSet::new(StorageKey::CapsByHolderInner {
                account_id_hash: hash_account_id(holder),
            })
        });
        held.insert(cap_id);
        held.flush();
        self.caps_by_holder.insert(holder.clone(), held);
    }

    pub(crate) fn unindex_cap(&mut self, holder: &AccountId, cap_id: &ObjectId) {
        let Some(mut held) = self.caps_by_holder.remove(holder) else {
            return;
        };
        held.remove(cap_id);
        held.flush();
        if !held.is_empty() {
            self.caps_by_holder.insert(holder.clone(), held);
        }
    }
}
