//! Minimal NEP-141 Mock FT for Whitelist Integration Testing
//!
//! Only what the fungible token gate needs:
//! - ft_balance_of (queried by `seal_approve`)
//! - ft_transfer (moves balance away to revoke gated access)
//! - mint / burn (test setup)

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, NearToken, PanicOnDefault};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockFT {
    balances: LookupMap<AccountId, u128>,
    total_supply: u128,
    decimals: u8,
}

#[near(serializers = [json])]
pub struct FtMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[near]
impl MockFT {
    #[init]
    pub fn new(owner_id: AccountId, total_supply: U128, decimals: u8) -> Self {
        let mut balances = LookupMap::new(b"b");
        balances.insert(owner_id, total_supply.0);
        Self {
            balances,
            total_supply: total_supply.0,
            decimals,
        }
    }

    // =========================================================================
    // NEP-141 Core
    // =========================================================================

    #[payable]
    pub fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>) {
        assert_eq!(
            env::attached_deposit(),
            NearToken::from_yoctonear(1),
            "Requires 1 yoctoNEAR"
        );
        let _ = memo;
        let sender_id = env::predecessor_account_id();
        let sender_balance = self.balance(&sender_id);
        assert!(sender_balance >= amount.0, "Insufficient balance");

        self.balances.insert(sender_id, sender_balance - amount.0);
        let receiver_balance = self.balance(&receiver_id);
        self.balances.insert(receiver_id, receiver_balance + amount.0);
    }

    pub fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.balance(&account_id))
    }

    pub fn ft_total_supply(&self) -> U128 {
        U128(self.total_supply)
    }

    pub fn ft_metadata(&self) -> FtMetadata {
        FtMetadata {
            spec: "ft-1.0.0".to_string(),
            name: "Mock Gate Token".to_string(),
            symbol: "GATE".to_string(),
            decimals: self.decimals,
        }
    }

    // =========================================================================
    // Test Helpers (not in real FT)
    // =========================================================================

    pub fn mint(&mut self, account_id: AccountId, amount: U128) {
        let current = self.balance(&account_id);
        self.balances.insert(account_id, current + amount.0);
        self.total_supply += amount.0;
    }

    /// Burns up to `amount` from `account_id`.
    pub fn burn(&mut self, account_id: AccountId, amount: U128) {
        let current = self.balance(&account_id);
        let burned = amount.0.min(current);
        self.balances.insert(account_id, current - burned);
        self.total_supply -= burned;
    }

    fn balance(&self, account_id: &AccountId) -> u128 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }
}
