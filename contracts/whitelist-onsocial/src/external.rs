use near_sdk::json_types::U128;
use near_sdk::{AccountId, ext_contract, near};

/// The subset of a NEP-171 token the gate needs.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
}

#[ext_contract(ext_ft)]
pub trait ExtFungibleToken {
    fn ft_balance_of(&self, account_id: AccountId) -> U128;
}

#[ext_contract(ext_nft)]
pub trait ExtNonFungibleToken {
    fn nft_token(&self, token_id: String) -> Option<Token>;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn on_seal_approve_resolved(
        &self,
        requester_id: AccountId,
        kind: crate::GateKind,
        min_balance: U128,
    ) -> bool;
}
