use anyhow::Result;

/// Trait for the privileged host operations podmen orchestrates.
///
/// Every method maps to one external process invocation. Implementations
/// block until the child exits and report non-zero exits as errors.
pub trait HostRuntime: Send + Sync {
    /// Create a restricted system account with no interactive login shell
    fn create_system_account(&self, username: &str) -> Result<()>;

    /// Allow the account's user services to outlive login sessions
    fn enable_linger(&self, username: &str) -> Result<()>;

    /// Run the container runtime's listing command as the given user,
    /// streaming its output to the console
    fn list_containers(&self, username: &str) -> Result<()>;
}
