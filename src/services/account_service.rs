use crate::domain::HostRuntime;
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct AccountService {
    host: Arc<dyn HostRuntime>,
}

impl AccountService {
    pub fn new(host: Arc<dyn HostRuntime>) -> Self {
        Self { host }
    }

    /// Creates the system account, then turns on linger for it.
    /// Stops at the first step that fails.
    pub fn provision(&self, username: &str) -> Result<()> {
        println!("Adicionando usuário: {username}");
        self.host
            .create_system_account(username)
            .with_context(|| format!("falha ao adicionar o usuário {username}"))?;

        println!("Habilitando linger para o usuário: {username}");
        self.host
            .enable_linger(username)
            .with_context(|| format!("falha ao habilitar linger para {username}"))?;

        println!("✅ Usuário {username} adicionado com sucesso");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockHost;

    #[test]
    fn test_provision_runs_useradd_then_linger() {
        let host = Arc::new(MockHost::new());
        let service = AccountService::new(host.clone());

        service.provision("svc-web").unwrap();

        assert_eq!(
            host.get_commands(),
            vec!["useradd:svc-web", "linger:svc-web"]
        );
        assert!(host.account_exists("svc-web"));
        assert!(host.linger_enabled("svc-web"));
    }

    #[test]
    fn test_provision_stops_when_useradd_fails() {
        let host = Arc::new(MockHost::new());
        host.set_fail_on("useradd");
        let service = AccountService::new(host.clone());

        let result = service.provision("svc-web");

        assert!(result.is_err());
        assert_eq!(host.get_commands(), vec!["useradd:svc-web"]);
        assert!(!host.linger_enabled("svc-web"));
    }

    #[test]
    fn test_provision_reports_linger_failure() {
        let host = Arc::new(MockHost::new());
        host.set_fail_on("linger");
        let service = AccountService::new(host.clone());

        let result = service.provision("svc-web");

        assert!(result.is_err());
        assert_eq!(
            host.get_commands(),
            vec!["useradd:svc-web", "linger:svc-web"]
        );
    }

    #[test]
    fn test_provision_error_names_the_user() {
        let host = Arc::new(MockHost::new());
        host.set_fail_on("useradd");
        let service = AccountService::new(host);

        let err = service.provision("svc-web").unwrap_err();

        assert!(format!("{err:#}").contains("svc-web"));
    }
}
