//! CLI command implementations

pub mod config;
pub mod migrate;

pub use config::show_config;
pub use migrate::MigrateArgs;
