//! Minimal NEP-171 Mock NFT for Whitelist Integration Testing
//!
//! Only what the non-fungible token gate needs:
//! - nft_token (queried by `seal_approve`)
//! - nft_transfer (moves a token away to revoke gated access)
//! - nft_mint (test setup)

use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, NearToken, PanicOnDefault};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockNFT {
    owners: LookupMap<String, AccountId>,
    total_supply: u64,
}

#[near(serializers = [json])]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
}

#[near]
impl MockNFT {
    #[init]
    pub fn new() -> Self {
        Self {
            owners: LookupMap::new(b"o"),
            total_supply: 0,
        }
    }

    // =========================================================================
    // NEP-171 Core
    // =========================================================================

    #[payable]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) {
        assert_eq!(
            env::attached_deposit(),
            NearToken::from_yoctonear(1),
            "Requires 1 yoctoNEAR"
        );
        let _ = (approval_id, memo);
        let owner_id = self
            .owners
            .get(&token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        assert_eq!(
            owner_id,
            &env::predecessor_account_id(),
            "Only the token owner can transfer"
        );
        self.owners.insert(token_id, receiver_id);
    }

    pub fn nft_token(&self, token_id: String) -> Option<Token> {
        self.owners.get(&token_id).map(|owner_id| Token {
            token_id,
            owner_id: owner_id.clone(),
        })
    }

    pub fn nft_total_supply(&self) -> u64 {
        self.total_supply
    }

    // =========================================================================
    // Test Helpers (not in real NFT)
    // =========================================================================

    pub fn nft_mint(&mut self, token_id: String, receiver_id: AccountId) -> Token {
        assert!(!self.owners.contains_key(&token_id), "Token already exists");
        self.owners.insert(token_id.clone(), receiver_id.clone());
        self.total_supply += 1;
        Token {
            token_id,
            owner_id: receiver_id,
        }
    }
}
