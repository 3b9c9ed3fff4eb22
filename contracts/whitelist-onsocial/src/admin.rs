use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<ContractConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(e) = config.validate_patch(&ContractConfigUpdate::default()) {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            next_object_nonce: 0,
            whitelists: LookupMap::new(StorageKey::Whitelists),
            caps: LookupMap::new(StorageKey::Caps),
            caps_by_holder: LookupMap::new(StorageKey::CapsByHolder),
            tgas: LookupMap::new(StorageKey::Tgas),
        }
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: ContractConfigUpdate) -> Result<(), WhitelistError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        self.config.apply_patch(&update);
        events::emit_config_updated(
            &self.owner_id,
            self.config.max_capacity,
            self.config.max_page_size,
        );
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), WhitelistError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(WhitelistError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_config(&self) -> ContractConfig {
        self.config.clone()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_error_taxonomy_version(&self) -> u32 {
        onsocial_types::ERROR_TAXONOMY_VERSION
    }
}
