pub mod config;
pub mod sudo_adapter;

pub use sudo_adapter::SudoAdapter;
