// =============================================================================
// Admin-Mode Whitelist Integration Tests
// =============================================================================
// create_admin_whitelist, admin delegation, and the one-way
// remove_admin_mode transition.

use anyhow::Result;
use onsocial_types::WhitelistErrorCode;
use serde_json::json;

use super::helpers::*;

#[tokio::test]
async fn test_admin_handover_scenario() -> Result<()> {
    let worker = create_sandbox().await?;
    let deployer = worker.dev_create_account().await?;
    let owner = worker.dev_create_account().await?;
    let admin = worker.dev_create_account().await?;
    let bob = worker.dev_create_account().await?;
    let carol = worker.dev_create_account().await?;
    let contract = deploy_whitelist(&worker, &deployer).await?;

    let wl = create_admin_whitelist(&contract, &admin, &owner, "vault-admin", 10, None).await?;
    let admin_cap = wl.admin_cap.clone().expect("admin cap");
    assert!(get_whitelist(&contract, &wl.whitelist_id).await?.admin_mode);

    // Admin adds Bob.
    add_member(&contract, &admin, &wl.whitelist_id, &admin_cap, &bob)
        .await?
        .into_result()?;

    // Owner removes admin mode.
    remove_admin_mode(&contract, &owner, &wl.whitelist_id, &wl.owner_cap)
        .await?
        .into_result()?;
    assert!(!get_whitelist(&contract, &wl.whitelist_id).await?.admin_mode);

    // Admin can no longer add Carol.
    let result = add_member(&contract, &admin, &wl.whitelist_id, &admin_cap, &carol).await?;
    assert_failure_code(&result, WhitelistErrorCode::InvalidCap);

    // Owner adds Carol.
    add_member(&contract, &owner, &wl.whitelist_id, &wl.owner_cap, &carol)
        .await?
        .into_result()?;
    assert!(is_member(&contract, &wl.whitelist_id, &bob).await?);
    assert!(is_member(&contract, &wl.whitelist_id, &carol).await?);
    Ok(())
}

#[tokio::test]
async fn test_admin_cap_cannot_remove_admin_mode() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let admin = worker.dev_create_account().await?;
    let contract = deploy_whitelist(&worker, &owner).await?;

    let wl = create_admin_whitelist(&contract, &admin, &owner, "vault-admin", 10, None).await?;
    let admin_cap = wl.admin_cap.clone().expect("admin cap");

    let result = remove_admin_mode(&contract, &admin, &wl.whitelist_id, &admin_cap).await?;
    assert_failure_code(&result, WhitelistErrorCode::InvalidOwnerCap);
    assert!(get_whitelist(&contract, &wl.whitelist_id).await?.admin_mode);
    Ok(())
}

#[tokio::test]
async fn test_remove_admin_mode_without_admin_mode_fails() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let contract = deploy_whitelist(&worker, &owner).await?;

    let wl = create_whitelist(&contract, &owner, "vault-1", 10, None).await?;
    let result = remove_admin_mode(&contract, &owner, &wl.whitelist_id, &wl.owner_cap).await?;
    assert_failure_code(&result, WhitelistErrorCode::WhitelistWithNoAdmin);
    Ok(())
}

#[tokio::test]
async fn test_inert_admin_cap_cannot_remove_members() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let admin = worker.dev_create_account().await?;
    let bob = worker.dev_create_account().await?;
    let contract = deploy_whitelist(&worker, &owner).await?;

    let wl = create_admin_whitelist(&contract, &admin, &owner, "vault-admin", 10, None).await?;
    let admin_cap = wl.admin_cap.clone().expect("admin cap");
    add_member(&contract, &admin, &wl.whitelist_id, &admin_cap, &bob)
        .await?
        .into_result()?;
    remove_admin_mode(&contract, &owner, &wl.whitelist_id, &wl.owner_cap)
        .await?
        .into_result()?;

    let result = remove_member(&contract, &admin, &wl.whitelist_id, &admin_cap, &bob).await?;
    assert_failure_code(&result, WhitelistErrorCode::InvalidCap);
    assert!(is_member(&contract, &wl.whitelist_id, &bob).await?);

    // The admin cap still exists after admin mode ends.
    let cap = get_cap(&contract, &admin_cap).await?.expect("admin cap survives");
    assert_eq!(cap.role, "admin");
    Ok(())
}

#[tokio::test]
async fn test_admin_whitelist_with_token_gate() -> Result<()> {
    let worker = create_sandbox().await?;
    let deployer = worker.dev_create_account().await?;
    let owner = worker.dev_create_account().await?;
    let admin = worker.dev_create_account().await?;
    let holder = worker.dev_create_account().await?;
    let contract = deploy_whitelist(&worker, &deployer).await?;
    let ft = deploy_mock_ft(&worker, &deployer).await?;
    deployer
        .call(ft.id(), "mint")
        .args_json(json!({ "account_id": holder.id(), "amount": "10" }))
        .transact()
        .await?
        .into_result()?;

    let gate = json!({ "kind": "fungible", "contract_id": ft.id() });
    let wl = create_admin_whitelist(&contract, &admin, &owner, "vault-gated", 10, Some(gate))
        .await?;
    assert_eq!(wl.created.len(), 4);
    assert!(wl.admin_cap.is_some());
    let tga_id = wl.tga_id.clone().expect("tga id");

    let tga = get_tga(&contract, &tga_id).await?;
    assert_eq!(tga["whitelist_id"], wl.whitelist_id);
    let view = get_whitelist(&contract, &wl.whitelist_id).await?;
    assert!(view.admin_mode);
    assert_eq!(view.tga_id.as_deref(), Some(tga_id.as_str()));

    let key = key_id_in(&tga_id, b"doc")?;
    let approved: bool =
        seal_approve(&contract, &holder, &tga_id, &key, json!({ "contract_id": ft.id() }))
            .await?
            .into_result()?
            .json()?;
    assert!(approved);
    Ok(())
}

#[tokio::test]
async fn test_admin_whitelist_rejects_admin_as_owner() -> Result<()> {
    let worker = create_sandbox().await?;
    let deployer = worker.dev_create_account().await?;
    let admin = worker.dev_create_account().await?;
    let contract = deploy_whitelist(&worker, &deployer).await?;

    let result = admin
        .call(contract.id(), "create_admin_whitelist")
        .args_json(json!({
            "owner_id": admin.id(),
            "vault_id": "vault-self",
            "capacity": 10,
        }))
        .deposit(DEPOSIT_STORAGE)
        .max_gas()
        .transact()
        .await?;
    assert!(result.is_failure());
    let failures = format!("{:?}", result.failures());
    assert!(failures.contains("must differ from the admin"), "{failures}");
    Ok(())
}
