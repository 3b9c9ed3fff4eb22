use near_sdk::NearToken;

pub const MAX_VAULT_ID_LEN: usize = 256;

pub const DEFAULT_MAX_CAPACITY: u64 = 1_000;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE_LIMIT: u32 = 1_000;

// Fungible gates without an explicit threshold require a non-zero balance.
pub const DEFAULT_MIN_GATE_BALANCE: u128 = 1;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_ASSET_QUERY_TGAS: u64 = 10;
pub const GAS_SEAL_CALLBACK_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;

// Upper bound on bytes read back from an asset contract view.
pub const MAX_ASSET_RESULT_LEN: usize = 16_384;
