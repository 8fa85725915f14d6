//! CLI command implementations

pub mod init_config;
pub mod make_resource;

pub use init_config::InitConfigCommand;
pub use make_resource::MakeResourceCommand;
