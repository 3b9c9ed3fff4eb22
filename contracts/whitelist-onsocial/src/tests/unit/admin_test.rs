use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn new_uses_default_config() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_config(), ContractConfig::default());
    assert_eq!(contract.get_config().max_capacity, DEFAULT_MAX_CAPACITY);
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(
        contract.get_error_taxonomy_version(),
        onsocial_types::ERROR_TAXONOMY_VERSION
    );
}

#[test]
fn new_with_custom_config() {
    testing_env!(context(owner()).build());
    let contract = Contract::new(
        owner(),
        Some(ContractConfig {
            max_capacity: 3,
            max_page_size: 2,
        }),
    );
    assert_eq!(contract.get_config().max_capacity, 3);
}

#[test]
#[should_panic(expected = "max_capacity must be positive")]
fn new_rejects_invalid_config() {
    testing_env!(context(owner()).build());
    Contract::new(
        owner(),
        Some(ContractConfig {
            max_capacity: 0,
            max_page_size: 10,
        }),
    );
}

// --- update_config ---

#[test]
fn update_config_by_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(ContractConfigUpdate {
            max_capacity: Some(5),
            max_page_size: None,
        })
        .unwrap();

    let config = contract.get_config();
    assert_eq!(config.max_capacity, 5);
    assert_eq!(config.max_page_size, DEFAULT_MAX_PAGE_SIZE);
}

#[test]
fn update_config_limits_new_whitelists() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(ContractConfigUpdate {
            max_capacity: Some(5),
            max_page_size: None,
        })
        .unwrap();

    act_as(member());
    let err = contract
        .create_whitelist("vault".to_string(), None, 6)
        .unwrap_err();
    assert!(matches!(err, WhitelistError::InvalidInput(_)));
    assert!(contract.create_whitelist("vault".to_string(), None, 5).is_ok());
}

#[test]
fn update_config_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 1).build());
    let err = contract
        .update_config(ContractConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, WhitelistError::Unauthorized(_)));
}

#[test]
fn update_config_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract
        .update_config(ContractConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, WhitelistError::InsufficientDeposit(_)));
}

#[test]
fn update_config_rejects_bad_page_size() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    for page in [0, MAX_PAGE_SIZE_LIMIT + 1] {
        let err = contract
            .update_config(ContractConfigUpdate {
                max_capacity: None,
                max_page_size: Some(page),
            })
            .unwrap_err();
        assert!(matches!(err, WhitelistError::InvalidInput(_)));
    }
    assert_eq!(contract.get_config(), ContractConfig::default());
}

// --- transfer_ownership ---

#[test]
fn transfer_ownership_by_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(admin()).unwrap();
    assert_eq!(contract.get_owner(), &admin());

    let err = contract
        .update_config(ContractConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, WhitelistError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_to_same_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, WhitelistError::InvalidInput(_)));
}

#[test]
fn transfer_ownership_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(member(), 1).build());
    let err = contract.transfer_ownership(member()).unwrap_err();
    assert!(matches!(err, WhitelistError::Unauthorized(_)));
}

// --- update_contract ---

#[test]
fn update_contract_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(near_sdk::VMContext {
        input: vec![0, 97, 115, 109].into(),
        ..context_with_deposit(member(), 1).build()
    });
    let err = contract
        .update_contract()
        .err()
        .expect("non-owner upgrade should fail");
    assert!(matches!(err, WhitelistError::Unauthorized(_)));
}

#[test]
fn update_contract_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(near_sdk::VMContext {
        input: vec![0, 97, 115, 109].into(),
        ..context(owner()).build()
    });
    let err = contract
        .update_contract()
        .err()
        .expect("upgrade without 1 yoctoNEAR should fail");
    assert!(matches!(err, WhitelistError::InsufficientDeposit(_)));
}

#[test]
fn update_contract_requires_code() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .update_contract()
        .err()
        .expect("upgrade without code should fail");
    assert!(matches!(err, WhitelistError::InvalidInput(_)));
}

#[test]
fn update_contract_by_owner_schedules_deploy() {
    let mut contract = new_contract();
    testing_env!(near_sdk::VMContext {
        input: vec![0, 97, 115, 109].into(),
        ..context_with_deposit(owner(), 1).build()
    });
    assert!(contract.update_contract().is_ok());
}

// --- migrate ---

#[test]
fn migrate_bumps_version_and_keeps_state() {
    let mut contract = new_contract();
    let whitelist = setup_owned(&mut contract, 10, None);
    add_as(
        &mut contract,
        owner(),
        whitelist.whitelist_id,
        whitelist.owner_cap,
        member(),
    )
    .unwrap();
    contract.version = "0.0.1".to_string();
    env::state_write(&contract);

    testing_env!(context(owner()).build());
    let migrated = Contract::migrate();
    assert_eq!(migrated.get_version(), env!("CARGO_PKG_VERSION"));
    assert!(migrated.is_member(whitelist.whitelist_id, member()));

    let logs = near_sdk::test_utils::get_logs();
    assert!(logs.iter().any(|l| l.contains("contract_upgrade") && l.contains("0.0.1")));
}
