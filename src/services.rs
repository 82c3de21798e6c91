mod account_service;
mod workload_service;

pub use account_service::AccountService;
pub use workload_service::WorkloadService;
