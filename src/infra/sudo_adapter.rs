use crate::domain::HostRuntime;
use anyhow::{Context, Result, bail};
use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

/// Executes privileged host commands through `sudo`.
///
/// Arguments always travel as an argv vector, never through a shell.
pub struct SudoAdapter;

impl SudoAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SudoAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime for SudoAdapter {
    fn create_system_account(&self, username: &str) -> Result<()> {
        sudo(
            ["useradd", "-r", "-s", "/usr/sbin/nologin", username],
            &format!("criando conta de sistema {username}"),
        )
    }

    fn enable_linger(&self, username: &str) -> Result<()> {
        sudo(
            ["loginctl", "enable-linger", username],
            &format!("habilitando linger para {username}"),
        )
    }

    fn list_containers(&self, username: &str) -> Result<()> {
        sudo(
            ["-u", username, "podman", "ps"],
            &format!("listando containers de {username}"),
        )
    }
}

fn sudo<I, S>(args: I, context: &str) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = sudo_status(args, context)?;
    ensure_success(status, context)
}

fn sudo_status<I, S>(args: I, context: &str) -> Result<ExitStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    // stdio herdado: o filho escreve direto no console e o sudo ainda
    // consegue pedir senha quando precisar
    Command::new("sudo")
        .args(args.into_iter().map(|item| item.as_ref().to_os_string()))
        .status()
        .with_context(|| context.to_string())
}

fn ensure_success(status: ExitStatus, context: &str) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    bail!("sudo retornou status {:?} ({context})", status)
}
