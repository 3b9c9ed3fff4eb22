use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), WhitelistError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(WhitelistError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Cap check shared by `add` and `remove`. An admin cap only works while the
/// whitelist is still in admin mode.
pub(crate) fn check_member_cap(
    cap: &Cap,
    whitelist: &Whitelist,
    actor_id: &AccountId,
) -> Result<(), WhitelistError> {
    if &cap.holder != actor_id || cap.whitelist_id != whitelist.id {
        return Err(WhitelistError::InvalidCap);
    }
    match cap.role {
        CapRole::Owner => Ok(()),
        CapRole::Admin if whitelist.is_admin_mode() => Ok(()),
        CapRole::Admin => Err(WhitelistError::InvalidCap),
    }
}

pub(crate) fn check_owner_cap(
    cap: &Cap,
    whitelist: &Whitelist,
    actor_id: &AccountId,
) -> Result<(), WhitelistError> {
    if &cap.holder != actor_id || cap.whitelist_id != whitelist.id {
        return Err(WhitelistError::InvalidCap);
    }
    if cap.role != CapRole::Owner {
        return Err(WhitelistError::InvalidOwnerCap);
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), WhitelistError> {
        if actor_id != &self.owner_id {
            return Err(WhitelistError::only_owner("perform this action"));
        }
        Ok(())
    }
}
