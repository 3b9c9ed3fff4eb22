use near_sdk::log;
use onsocial_types::{TYPE_CAP, TYPE_TGA, TYPE_WHITELIST};

use crate::guards::{check_member_cap, check_owner_cap};
use crate::validation::{validate_capacity, validate_vault_id};
use crate::*;

/// Creation parameters shared by the owner-only and admin-mode entrypoints.
pub(crate) struct NewWhitelist {
    pub vault_id: String,
    pub token_gate: Option<TokenGate>,
    pub capacity: u64,
    pub owner_id: AccountId,
    /// `Some` puts the whitelist in admin mode and mints an admin cap for it.
    pub admin_id: Option<AccountId>,
}

#[near]
impl Contract {
    /// Owner-only whitelist: the caller receives the owner cap.
    #[payable]
    #[handle_result]
    pub fn create_whitelist(
        &mut self,
        vault_id: String,
        token_gate: Option<TokenGate>,
        capacity: u64,
    ) -> Result<Vec<CreatedObject>, WhitelistError> {
        let creator_id = env::predecessor_account_id();
        self.internal_create_whitelist(
            &creator_id,
            NewWhitelist {
                vault_id,
                token_gate,
                capacity,
                owner_id: creator_id.clone(),
                admin_id: None,
            },
        )
    }

    /// Admin-mode whitelist: `owner_id` receives the owner cap, the caller an admin cap.
    #[payable]
    #[handle_result]
    pub fn create_admin_whitelist(
        &mut self,
        owner_id: AccountId,
        vault_id: String,
        token_gate: Option<TokenGate>,
        capacity: u64,
    ) -> Result<Vec<CreatedObject>, WhitelistError> {
        let creator_id = env::predecessor_account_id();
        if owner_id == creator_id {
            return Err(WhitelistError::InvalidInput(
                "Owner of an admin whitelist must differ from the admin".into(),
            ));
        }
        self.internal_create_whitelist(
            &creator_id,
            NewWhitelist {
                vault_id,
                token_gate,
                capacity,
                owner_id,
                admin_id: Some(creator_id.clone()),
            },
        )
    }

    #[payable]
    #[handle_result]
    pub fn add(
        &mut self,
        whitelist_id: ObjectId,
        cap_id: ObjectId,
        account_id: AccountId,
    ) -> Result<(), WhitelistError> {
        let actor_id = env::predecessor_account_id();
        let initial_usage = self.storage_usage_flushed();

        let whitelist = self
            .whitelists
            .get_mut(&whitelist_id)
            .ok_or_else(|| WhitelistError::whitelist_not_found(&whitelist_id))?;
        let cap = self
            .caps
            .get(&cap_id)
            .ok_or_else(|| WhitelistError::cap_not_found(&cap_id))?;
        check_member_cap(cap, whitelist, &actor_id)?;
        if whitelist.is_member(&account_id) {
            return Err(WhitelistError::Duplicate);
        }
        if whitelist.is_full() {
            return Err(WhitelistError::ExceededCapacity);
        }

        whitelist.members.insert(account_id.clone());
        whitelist.members.flush();
        let member_count = whitelist.member_count();

        events::emit_member_added(&actor_id, &whitelist_id, &account_id, member_count);
        self.settle_storage_deposit(&actor_id, initial_usage)
    }

    #[handle_result]
    pub fn remove(
        &mut self,
        whitelist_id: ObjectId,
        cap_id: ObjectId,
        account_id: AccountId,
    ) -> Result<(), WhitelistError> {
        let actor_id = env::predecessor_account_id();
        let whitelist = self
            .whitelists
            .get_mut(&whitelist_id)
            .ok_or_else(|| WhitelistError::whitelist_not_found(&whitelist_id))?;
        let cap = self
            .caps
            .get(&cap_id)
            .ok_or_else(|| WhitelistError::cap_not_found(&cap_id))?;
        check_member_cap(cap, whitelist, &actor_id)?;

        if !whitelist.members.remove(&account_id) {
            log!("{} is not a member of whitelist {}", account_id, whitelist_id);
            return Ok(());
        }
        whitelist.members.flush();

        let member_count = whitelist.member_count();
        events::emit_member_removed(&actor_id, &whitelist_id, &account_id, member_count);
        Ok(())
    }

    /// One-way: admin caps of this whitelist stay inert afterwards.
    #[handle_result]
    pub fn remove_admin_mode(
        &mut self,
        whitelist_id: ObjectId,
        cap_id: ObjectId,
    ) -> Result<(), WhitelistError> {
        let actor_id = env::predecessor_account_id();
        let whitelist = self
            .whitelists
            .get_mut(&whitelist_id)
            .ok_or_else(|| WhitelistError::whitelist_not_found(&whitelist_id))?;
        let cap = self
            .caps
            .get(&cap_id)
            .ok_or_else(|| WhitelistError::cap_not_found(&cap_id))?;
        check_owner_cap(cap, whitelist, &actor_id)?;
        if !whitelist.is_admin_mode() {
            return Err(WhitelistError::WhitelistWithNoAdmin);
        }

        whitelist.end_admin_mode();
        events::emit_admin_mode_removed(&actor_id, &whitelist_id);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn internal_create_whitelist(
        &mut self,
        creator_id: &AccountId,
        params: NewWhitelist,
    ) -> Result<Vec<CreatedObject>, WhitelistError> {
        let NewWhitelist {
            vault_id,
            token_gate,
            capacity,
            owner_id,
            admin_id,
        } = params;
        validate_vault_id(&vault_id)?;
        validate_capacity(capacity, &self.config)?;
        if let Some(gate) = &token_gate {
            gate.validate()?;
        }

        let initial_usage = self.storage_usage_flushed();

        let whitelist_id = self.mint_object_id();
        let mut whitelist = Whitelist::new(
            whitelist_id,
            vault_id,
            owner_id.clone(),
            capacity,
            admin_id.is_some(),
            IterableSet::new(StorageKey::WhitelistMembers { whitelist_id }),
        );
        let mut created = vec![CreatedObject::shared(whitelist_id, TYPE_WHITELIST)];

        let owner_cap_id = self.mint_cap(creator_id, whitelist_id, CapRole::Owner, &owner_id);
        created.push(CreatedObject::owned(owner_cap_id, TYPE_CAP, &owner_id));
        if let Some(admin_id) = &admin_id {
            let admin_cap_id = self.mint_cap(creator_id, whitelist_id, CapRole::Admin, admin_id);
            created.push(CreatedObject::owned(admin_cap_id, TYPE_CAP, admin_id));
        }

        let tga = token_gate.map(|gate| Tga {
            id: self.mint_object_id(),
            whitelist_id,
            gate,
        });
        if let Some(tga) = &tga {
            whitelist.tga_id = Some(tga.id);
            created.push(CreatedObject::shared(tga.id, TYPE_TGA));
        }

        events::emit_whitelist_created(&events::WhitelistCreated {
            creator_id,
            whitelist_id: &whitelist_id,
            vault_id: &whitelist.vault_id,
            owner_id: &owner_id,
            capacity,
            admin_mode: whitelist.is_admin_mode(),
            tga_id: tga.as_ref().map(|t| &t.id),
            token_gate: tga.as_ref().map(|t| &t.gate),
        });

        self.whitelists.insert(whitelist_id, whitelist);
        if let Some(tga) = tga {
            self.tgas.insert(tga.id, tga);
        }

        self.settle_storage_deposit(creator_id, initial_usage)?;
        Ok(created)
    }

    /// `sha256(current_account_id || nonce_le)`; the nonce is never reused.
    pub(crate) fn mint_object_id(&mut self) -> ObjectId {
        let mut seed = env::current_account_id().as_bytes().to_vec();
        seed.extend_from_slice(&self.next_object_nonce.to_le_bytes());
        self.next_object_nonce += 1;
        ObjectId(env::sha256_array(&seed))
    }
}
