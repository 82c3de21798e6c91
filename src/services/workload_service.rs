use crate::domain::{HostRuntime, User};
use anyhow::Result;
use std::sync::Arc;
use tracing::error;

pub struct WorkloadService {
    host: Arc<dyn HostRuntime>,
}

impl WorkloadService {
    pub fn new(host: Arc<dyn HostRuntime>) -> Self {
        Self { host }
    }

    /// Walks the configured users in order and lists each one's containers.
    ///
    /// A user whose listing fails is reported and skipped; the walk still
    /// visits everyone else and never fails as a whole.
    pub fn inspect_all(&self, users: &[User]) -> Result<()> {
        if users.is_empty() {
            println!("⚠️  Nenhum usuário encontrado na configuração");
            return Ok(());
        }

        for user in users {
            println!("\n=== Containers do usuário: {} ===", user.name);

            if let Err(err) = self.host.list_containers(&user.name) {
                error!("Falha ao listar containers de {}: {:#}", user.name, err);
            }
        }

        Ok(())
    }
}
