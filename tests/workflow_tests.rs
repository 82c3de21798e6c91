use anyhow::Result;
use podmen::infra::config::load_config;
use podmen::services::{AccountService, WorkloadService};
use podmen::test_support::MockHost;
use std::fs;
use std::sync::Arc;

#[test]
fn test_workflow_ps_lists_each_configured_user() -> Result<()> {
    // 1. Setup temp config
    let temp_dir = tempfile::tempdir()?;
    let config_path = temp_dir.path().join("podmen.conf");
    fs::write(&config_path, r#"{"users": {"a": {}, "b": {"x": 1}}}"#)?;

    // 2. Load it the way the ps command does
    let config = load_config(&config_path)?;
    let users = config.users();

    // Records keep document order and carry extra fields through unchanged
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "a");
    assert!(users[0].extra.is_empty());
    assert_eq!(users[1].name, "b");
    assert_eq!(users[1].extra["x"], 1);

    // 3. Inspect against a mock host
    let mock = Arc::new(MockHost::new());
    let service = WorkloadService::new(mock.clone());
    service.inspect_all(&users)?;

    assert_eq!(
        mock.get_commands(),
        vec!["ps:a", "ps:b"],
        "Should list containers once per user, in config order"
    );

    Ok(())
}

#[test]
fn test_workflow_ps_with_empty_config_runs_nothing() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config_path = temp_dir.path().join("podmen.conf");
    fs::write(&config_path, "{}")?;

    let config = load_config(&config_path)?;
    let users = config.users();
    assert!(users.is_empty());

    let mock = Arc::new(MockHost::new());
    WorkloadService::new(mock.clone()).inspect_all(&users)?;

    assert!(
        mock.get_commands().is_empty(),
        "No users means the container runtime is never invoked"
    );

    Ok(())
}

#[test]
fn test_workflow_custom_config_path_is_honored() -> Result<()> {
    // Two configs on disk; only the one passed via -c may be read
    let temp_dir = tempfile::tempdir()?;
    let default_path = temp_dir.path().join("default.conf");
    let custom_path = temp_dir.path().join("custom.conf");
    fs::write(&default_path, r#"{"users": {"wrong": {}}}"#)?;
    fs::write(&custom_path, r#"{"users": {"right": {}}}"#)?;

    let config = load_config(&custom_path)?;
    let users = config.users();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "right");

    Ok(())
}

#[test]
fn test_workflow_adduser_provisions_account() -> Result<()> {
    let mock = Arc::new(MockHost::new());
    let service = AccountService::new(mock.clone());

    service.provision("svc-web")?;

    assert_eq!(
        mock.get_commands(),
        vec!["useradd:svc-web", "linger:svc-web"],
        "Provisioning is exactly two invocations, account first"
    );
    assert!(mock.account_exists("svc-web"));
    assert!(mock.linger_enabled("svc-web"));

    Ok(())
}
