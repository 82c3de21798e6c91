use crate::infra::SudoAdapter;
use crate::infra::config::{load_config, resolve_config_path};
use crate::services::{AccountService, WorkloadService};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "podmen",
    version,
    about = "Gerencia contas de serviço e seus containers rootless"
)]
pub struct Cli {
    /// Caminho do arquivo de configuração (default: ~/.config/podmen.conf)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cria uma conta de sistema sem shell de login e habilita linger
    Adduser {
        /// Nome da conta de serviço
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Lista os containers de cada usuário da configuração
    Ps,
}

pub fn run(cli: Cli) -> Result<()> {
    let host = Arc::new(SudoAdapter::new());

    match cli.command {
        Commands::Adduser { name } => AccountService::new(host).provision(&name),
        Commands::Ps => {
            let path = resolve_config_path(cli.config.as_deref());
            let config = load_config(&path)?;
            WorkloadService::new(host).inspect_all(&config.users())
        }
    }
}
