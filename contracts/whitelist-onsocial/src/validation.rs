use crate::*;

pub(crate) fn validate_vault_id(vault_id: &str) -> Result<(), WhitelistError> {
    if vault_id.is_empty() {
        return Err(WhitelistError::InvalidInput("vault_id cannot be empty".into()));
    }
    if vault_id.len() > MAX_VAULT_ID_LEN {
        return Err(WhitelistError::InvalidInput(format!(
            "vault_id too long (max {MAX_VAULT_ID_LEN} bytes)"
        )));
    }
    Ok(())
}

pub(crate) fn validate_capacity(
    capacity: u64,
    config: &ContractConfig,
) -> Result<(), WhitelistError> {
    if capacity == 0 {
        return Err(WhitelistError::InvalidInput("capacity must be positive".into()));
    }
    if capacity > config.max_capacity {
        return Err(WhitelistError::InvalidInput(format!(
            "capacity exceeds maximum of {}",
            config.max_capacity
        )));
    }
    Ok(())
}
