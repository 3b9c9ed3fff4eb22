use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::serde_json;
use onsocial_types::in_namespace;

use crate::external::{ext_ft, ext_nft, ext_self};
use crate::*;

#[near]
impl Contract {
    /// Approves the caller for key `id` if they own the TGA's gated asset.
    /// `id` must be prefixed by the TGA id or its whitelist id.
    #[handle_result]
    pub fn seal_approve(
        &self,
        id: Base64VecU8,
        tga_id: ObjectId,
        asset: GatedAsset,
    ) -> Result<Promise, WhitelistError> {
        let tga = self
            .tgas
            .get(&tga_id)
            .ok_or_else(|| WhitelistError::tga_not_found(&tga_id))?;
        if !in_namespace(&id.0, tga.id.as_bytes())
            && !in_namespace(&id.0, tga.whitelist_id.as_bytes())
        {
            return Err(WhitelistError::NoAccess);
        }
        if !tga.gate.matches(&asset) {
            return Err(WhitelistError::NoAccess);
        }

        let requester_id = env::predecessor_account_id();
        let query_gas = Gas::from_tgas(GAS_ASSET_QUERY_TGAS);
        let query = match (tga.gate.kind, asset.token_id) {
            (GateKind::Fungible, None) => ext_ft::ext(asset.contract_id)
                .with_static_gas(query_gas)
                .ft_balance_of(requester_id.clone()),
            (GateKind::NonFungible, Some(token_id)) => ext_nft::ext(asset.contract_id)
                .with_static_gas(query_gas)
                .nft_token(token_id),
            _ => return Err(WhitelistError::NoAccess),
        };

        Ok(query.then(
            ext_self::ext(env::current_account_id())
                .with_static_gas(Gas::from_tgas(GAS_SEAL_CALLBACK_TGAS))
                .on_seal_approve_resolved(
                    requester_id,
                    tga.gate.kind,
                    U128(tga.gate.required_balance()),
                ),
        ))
    }

    #[private]
    #[handle_result]
    pub fn on_seal_approve_resolved(
        &self,
        requester_id: AccountId,
        kind: GateKind,
        min_balance: U128,
    ) -> Result<bool, WhitelistError> {
        if env::promise_results_count() != 1 {
            return Err(WhitelistError::NoAccess);
        }
        let raw = env::promise_result_checked(0, MAX_ASSET_RESULT_LEN).ok();
        if !owns_gated_asset(kind, raw.as_deref(), &requester_id, min_balance.0) {
            return Err(WhitelistError::NoAccess);
        }
        Ok(true)
    }

    /// Approves the caller for key `id` if they are currently a member.
    /// `id` must be prefixed by the whitelist id.
    #[handle_result]
    pub fn seal_approve_whitelist(
        &self,
        id: Base64VecU8,
        whitelist_id: ObjectId,
    ) -> Result<bool, WhitelistError> {
        let whitelist = self
            .whitelists
            .get(&whitelist_id)
            .ok_or_else(|| WhitelistError::whitelist_not_found(&whitelist_id))?;
        if !in_namespace(&id.0, whitelist.id.as_bytes()) {
            return Err(WhitelistError::NoAccess);
        }
        if !whitelist.is_member(&env::predecessor_account_id()) {
            return Err(WhitelistError::NoAccess);
        }
        Ok(true)
    }
}

/// Decides ownership from the asset contract's raw view result.
/// `None` means the query failed.
pub(crate) fn owns_gated_asset(
    kind: GateKind,
    raw: Option<&[u8]>,
    requester_id: &AccountId,
    min_balance: u128,
) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    match kind {
        GateKind::Fungible => serde_json::from_slice::<U128>(raw)
            .is_ok_and(|balance| balance.0 >= min_balance),
        GateKind::NonFungible => matches!(
            serde_json::from_slice::<Option<external::Token>>(raw),
            Ok(Some(token)) if &token.owner_id == requester_id
        ),
    }
}
