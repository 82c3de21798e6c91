use crate::domain::HostRuntime;
use anyhow::{Result, bail};
use std::sync::RwLock;

pub struct MockHost {
    commands: RwLock<Vec<String>>,
    fail_on: RwLock<Option<String>>,
    accounts: RwLock<Vec<String>>,
    lingered: RwLock<Vec<String>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            commands: RwLock::new(Vec::new()),
            fail_on: RwLock::new(None),
            accounts: RwLock::new(Vec::new()),
            lingered: RwLock::new(Vec::new()),
        }
    }

    /// Makes a later call fail. Accepts a bare operation ("useradd", "linger",
    /// "ps") to fail every call of that kind, or "op:user" for a single user.
    pub fn set_fail_on(&self, operation: &str) {
        *self.fail_on.write().unwrap() = Some(operation.to_string());
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    pub fn account_exists(&self, username: &str) -> bool {
        self.accounts
            .read()
            .unwrap()
            .iter()
            .any(|account| account == username)
    }

    pub fn linger_enabled(&self, username: &str) -> bool {
        self.lingered
            .read()
            .unwrap()
            .iter()
            .any(|account| account == username)
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn check_fail(&self, command: &str) -> Result<()> {
        if let Some(ref fail_on) = *self.fail_on.read().unwrap() {
            if command == fail_on || command.starts_with(&format!("{fail_on}:")) {
                bail!("Mock failure on: {}", command);
            }
        }
        Ok(())
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime for MockHost {
    fn create_system_account(&self, username: &str) -> Result<()> {
        let command = format!("useradd:{}", username);
        self.record_command(&command);
        self.check_fail(&command)?;

        self.accounts.write().unwrap().push(username.to_string());
        Ok(())
    }

    fn enable_linger(&self, username: &str) -> Result<()> {
        let command = format!("linger:{}", username);
        self.record_command(&command);
        self.check_fail(&command)?;

        self.lingered.write().unwrap().push(username.to_string());
        Ok(())
    }

    fn list_containers(&self, username: &str) -> Result<()> {
        let command = format!("ps:{}", username);
        self.record_command(&command);
        self.check_fail(&command)?;
        Ok(())
    }
}
